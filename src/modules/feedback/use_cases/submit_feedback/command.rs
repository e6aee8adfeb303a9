// Command data type for submitting a feedback entry.
//
// Purpose
// - Carry the raw form input for the decider to resolve and validate.
// - Be independent of transport layer details (not tied to HTTP or GraphQL).
//
// Timestamps
// - requested_at is the wall-clock time the submission arrived.
// - backdate is only ever set for admin callers, see `admin_backdate`.

use crate::modules::feedback::core::service_mode::ServiceMode;
use crate::shared::core::primitives::{combine_or_now, parse_date, parse_time};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitFeedback {
    pub colleague: String,
    pub full_name: String,
    pub department: String,
    pub mode: ServiceMode,
    pub task_detail: String,
    pub note: String,
    pub requested_at: NaiveDateTime,
    pub backdate: Option<NaiveDateTime>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BackdateError {
    #[error("date must be formatted as YYYY-MM-DD, got {0:?}")]
    InvalidDate(String),

    #[error("time must be formatted as HH:MM, got {0:?}")]
    InvalidTime(String),
}

/// Resolve the admin timestamp override from raw date and time inputs.
///
/// Non-admin callers never get an override, whatever they send. For admins a
/// missing half falls back to the matching part of `now`.
pub fn admin_backdate(
    is_admin: bool,
    date: Option<&str>,
    time: Option<&str>,
    now: NaiveDateTime,
) -> Result<Option<NaiveDateTime>, BackdateError> {
    let date = date.filter(|raw| !raw.trim().is_empty());
    let time = time.filter(|raw| !raw.trim().is_empty());
    if !is_admin {
        if date.is_some() || time.is_some() {
            tracing::debug!("ignoring timestamp override from a non-admin caller");
        }
        return Ok(None);
    }
    let date = date
        .map(|raw| parse_date(raw).map_err(|_| BackdateError::InvalidDate(raw.to_string())))
        .transpose()?;
    let time = time
        .map(|raw| parse_time(raw).map_err(|_| BackdateError::InvalidTime(raw.to_string())))
        .transpose()?;
    Ok(combine_or_now(date, time, now))
}
