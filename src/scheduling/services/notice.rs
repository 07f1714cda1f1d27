//! Cancellation notice composition.
//!
//! The body is rendered from a `minijinja` template over a JSON context,
//! so the wording lives in one place and the rendering failure mode is
//! explicit rather than a formatting panic.

use crate::scheduling::domain::OwnerEmail;
use crate::scheduling::ports::CancellationNotice;
use chrono::{DateTime, Utc};
use minijinja::Environment;
use serde_json::{Map, Value};
use thiserror::Error;

/// Subject line of every cancellation notice.
pub const CANCELLATION_SUBJECT: &str = "Appointment Cancelled";

const CANCELLATION_BODY_TEMPLATE: &str = "Dear {{ owner_name }}, your appointment for \
{{ animal_name }} on {{ start_time }} has been cancelled.";

/// Error returned when the notice body cannot be rendered.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("failed to render cancellation notice: {0}")]
pub struct NoticeRenderError(String);

/// Everything the notice template needs, captured before the update
/// mutates the stored record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeContext {
    /// Owner contact address the notice is delivered to.
    pub recipient: OwnerEmail,
    /// Owner display name.
    pub owner_name: String,
    /// Name of the animal whose appointment was cancelled.
    pub animal_name: String,
    /// Start time of the appointment as originally booked.
    pub start_time: DateTime<Utc>,
}

/// Composes the cancellation notice for the given context.
///
/// # Errors
///
/// Returns [`NoticeRenderError`] when template rendering fails.
pub fn build_cancellation_notice(
    context: &NoticeContext,
) -> Result<CancellationNotice, NoticeRenderError> {
    let environment = Environment::new();
    let body = environment
        .render_str(CANCELLATION_BODY_TEMPLATE, template_context(context))
        .map_err(|error| NoticeRenderError(error.to_string()))?;

    Ok(CancellationNotice {
        recipient: context.recipient.clone(),
        subject: CANCELLATION_SUBJECT.to_owned(),
        body,
    })
}

fn template_context(context: &NoticeContext) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert(
        "owner_name".to_owned(),
        Value::String(context.owner_name.clone()),
    );
    values.insert(
        "animal_name".to_owned(),
        Value::String(context.animal_name.clone()),
    );
    values.insert(
        "start_time".to_owned(),
        Value::String(
            context
                .start_time
                .format("%A, %d %B %Y %H:%M UTC")
                .to_string(),
        ),
    );
    values
}
