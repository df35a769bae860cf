use crate::claims::{ValidationResult, format_duration};
use crate::limits::DEFAULT_EXPIRY_WARNING_SECONDS;
use crate::token::TokenPayload;

/// Configuration for time-claims validation
///
/// ```ignore
/// let result = ClaimsValidation::new()
///     .expiry_warning(300)
///     .check(token.payload());
/// ```
#[derive(Debug, Clone)]
pub struct ClaimsValidation {
    /// Remaining lifetime (seconds) below which a warning is emitted (default: 3600)
    pub expiry_warning_seconds: u64,
}

impl Default for ClaimsValidation {
    fn default() -> Self {
        Self {
            expiry_warning_seconds: DEFAULT_EXPIRY_WARNING_SECONDS,
        }
    }
}

impl ClaimsValidation {
    /// Create a new validation config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the expiry warning threshold
    pub fn expiry_warning(mut self, seconds: u64) -> Self {
        self.expiry_warning_seconds = seconds;
        self
    }

    /// Validate against the current time
    pub fn check(&self, payload: &TokenPayload) -> ValidationResult {
        self.check_at(payload, current_timestamp())
    }

    /// Validate against a fixed point in time (epoch seconds)
    pub fn check_at(&self, payload: &TokenPayload, now: i64) -> ValidationResult {
        let mut result = ValidationResult::default();
        // Fractional claims are compared as-is, so `nbf = now + 0.5` is still in the future
        let now = now as f64;

        if let Some(exp) = payload.exact_time_claim("exp") {
            if exp < now {
                result.is_expired = true;
                result.warnings.push(format!(
                    "Token expired {} ago",
                    format_duration(whole_seconds(now - exp))
                ));
            } else {
                let remaining = whole_seconds(exp - now).unsigned_abs();
                result.time_until_expiration = Some(remaining);
                if remaining < self.expiry_warning_seconds {
                    result.warnings.push(format!(
                        "Token expires in {}",
                        format_duration(whole_seconds(exp - now))
                    ));
                }
            }
        }

        if let Some(nbf) = payload.exact_time_claim("nbf") {
            if nbf > now {
                result.is_not_yet_valid = true;
                result.warnings.push(format!(
                    "Token not valid until {} from now",
                    format_duration(whole_seconds(nbf - now))
                ));
            }
        }

        if let Some(iat) = payload.exact_time_claim("iat") {
            if iat > now {
                result
                    .warnings
                    .push("Token issued at time is in the future".to_string());
            }
        }

        result
    }
}

fn whole_seconds(seconds: f64) -> i64 {
    seconds.floor() as i64
}

/// Validate time claims against the current time with default settings
pub fn validate(payload: &TokenPayload) -> ValidationResult {
    ClaimsValidation::default().check(payload)
}

/// Validate time claims against `now` (epoch seconds) with default settings
pub fn validate_at(payload: &TokenPayload, now: i64) -> ValidationResult {
    ClaimsValidation::default().check_at(payload, now)
}

/// Get current Unix timestamp
pub(crate) fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
