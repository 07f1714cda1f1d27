//! In-memory cancellation notifier.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::scheduling::ports::{
    CancellationNotice, CancellationNotifier, CancellationNotifierError,
    CancellationNotifierResult,
};

/// In-memory notifier recording every notice it is handed.
///
/// Suitable for unit and integration tests: delivered notices can be
/// inspected, and the adapter can be switched into a failing mode to
/// exercise the notification-failure path without touching the committed
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCancellationNotifier {
    state: Arc<RwLock<InMemoryNotifierState>>,
}

#[derive(Debug, Default)]
struct InMemoryNotifierState {
    sent: Vec<CancellationNotice>,
    failure: Option<String>,
}

impl InMemoryCancellationNotifier {
    /// Creates a notifier that accepts every notice.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent delivery fail with the given reason.
    ///
    /// # Errors
    ///
    /// Returns a delivery error when lock acquisition fails.
    pub fn set_failing(&self, reason: impl Into<String>) -> CancellationNotifierResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CancellationNotifierError::delivery(std::io::Error::other(err.to_string()))
        })?;
        state.failure = Some(reason.into());
        Ok(())
    }

    /// Returns every notice delivered so far.
    #[must_use]
    pub fn sent(&self) -> Vec<CancellationNotice> {
        self.state
            .read()
            .map(|state| state.sent.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl CancellationNotifier for InMemoryCancellationNotifier {
    async fn send(&self, notice: &CancellationNotice) -> CancellationNotifierResult<()> {
        let mut state = self.state.write().map_err(|err| {
            CancellationNotifierError::delivery(std::io::Error::other(err.to_string()))
        })?;
        if let Some(reason) = state.failure.as_ref() {
            return Err(CancellationNotifierError::delivery(std::io::Error::other(
                reason.clone(),
            )));
        }
        state.sent.push(notice.clone());
        Ok(())
    }
}
