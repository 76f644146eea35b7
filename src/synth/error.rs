//! Synthesis error types

use thiserror::Error;

/// Errors raised by dataset generators and catalog validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SynthError {
    #[error("Invalid value for '{param}': {message}")]
    InvalidArgument { param: String, message: String },
}

impl SynthError {
    pub fn invalid(param: &str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            param: param.to_string(),
            message: message.into(),
        }
    }
}

/// Largest accepted window, in days or hours.
pub const MAX_WINDOW: i64 = 10_000;

/// Reject out-of-range window sizes before any allocation happens.
pub(crate) fn ensure_window(param: &str, value: i64) -> Result<u32, SynthError> {
    if value < 0 {
        return Err(SynthError::invalid(
            param,
            format!("must be zero or positive, got {}", value),
        ));
    }
    if value > MAX_WINDOW {
        return Err(SynthError::invalid(
            param,
            format!("{} exceeds the maximum of {}", value, MAX_WINDOW),
        ));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_window_accepts_zero() {
        assert_eq!(ensure_window("days", 0), Ok(0));
        assert_eq!(ensure_window("days", 30), Ok(30));
    }

    #[test]
    fn test_ensure_window_rejects_negative() {
        let err = ensure_window("hours", -1).unwrap_err();
        assert!(matches!(err, SynthError::InvalidArgument { ref param, .. } if param == "hours"));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_ensure_window_rejects_oversized() {
        assert_eq!(ensure_window("days", MAX_WINDOW), Ok(10_000));
        assert!(ensure_window("days", MAX_WINDOW + 1).is_err());
    }
}
