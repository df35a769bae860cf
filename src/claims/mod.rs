//! Time-based claims validation
//!
//! Validation inspects `exp`, `nbf` and `iat` and never fails: problems are
//! reported as flags and human-readable warnings on a [`ValidationResult`].

mod validator;

pub use validator::{ClaimsValidation, validate, validate_at};
pub(crate) use validator::current_timestamp;

use chrono::{DateTime, SecondsFormat};
use serde::Serialize;

/// Outcome of validating a token's time claims
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// `exp` lies in the past
    pub is_expired: bool,

    /// `nbf` lies in the future
    pub is_not_yet_valid: bool,

    /// Seconds until `exp`, present only for unexpired tokens with an `exp` claim
    pub time_until_expiration: Option<u64>,

    /// Human-readable findings, in the order exp, nbf, iat
    pub warnings: Vec<String>,
}

/// How a [`ValidationResult`] should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Severity {
    /// Nothing to report
    None,
    /// Usable token with warnings, e.g. about to expire
    Warning,
    /// Expired or not yet valid
    Error,
}

impl ValidationResult {
    /// Severity of the findings
    pub fn severity(&self) -> Severity {
        if self.is_expired || self.is_not_yet_valid {
            Severity::Error
        } else if self.warnings.is_empty() {
            Severity::None
        } else {
            Severity::Warning
        }
    }
}

/// Render a duration in seconds as `"2h 30m 15s"`
///
/// Zero-valued units are omitted, seconds are always shown when nothing else is,
/// and negative durations clamp to `"0s"`.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if secs > 0 || parts.is_empty() {
        parts.push(format!("{secs}s"));
    }

    parts.join(" ")
}

/// Render epoch seconds as an ISO-8601 UTC timestamp with milliseconds
///
/// Returns `None` when the timestamp is outside the representable range.
pub fn format_timestamp(epoch_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(epoch_seconds, 0)
        .map(|time| time.to_rfc3339_opts(SecondsFormat::Millis, true))
}
