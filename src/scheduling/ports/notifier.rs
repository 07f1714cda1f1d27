//! Notifier port for cancellation notices.

use crate::scheduling::domain::OwnerEmail;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for notifier operations.
pub type CancellationNotifierResult<T> = Result<T, CancellationNotifierError>;

/// A composed cancellation notice, ready for delivery.
///
/// The core decides whether a notice is due and what it says; transport is
/// the adapter's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancellationNotice {
    /// Owner contact address the notice is sent to.
    pub recipient: OwnerEmail,
    /// Message subject line.
    pub subject: String,
    /// Rendered message body.
    pub body: String,
}

/// Delivery contract for cancellation notices.
///
/// Delivery failure is isolated: by the time a notice exists the status
/// change is already committed, and no notifier error may roll it back.
#[async_trait]
pub trait CancellationNotifier: Send + Sync {
    /// Delivers a cancellation notice.
    ///
    /// # Errors
    ///
    /// Returns [`CancellationNotifierError`] when delivery fails; the
    /// caller reports the failure without disturbing the committed
    /// mutation.
    async fn send(&self, notice: &CancellationNotice) -> CancellationNotifierResult<()>;
}

/// Errors returned by notifier implementations.
#[derive(Debug, Clone, Error)]
pub enum CancellationNotifierError {
    /// The delivery channel rejected or lost the message.
    #[error("notice delivery failed: {0}")]
    Delivery(Arc<dyn std::error::Error + Send + Sync>),
}

impl CancellationNotifierError {
    /// Wraps a delivery error.
    pub fn delivery(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Delivery(Arc::new(err))
    }
}
