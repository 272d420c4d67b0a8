//! Error taxonomy.
//!
//! Two families of errors exist:
//!
//! - [`SliderError`]: non-fatal domain errors (VALUE, INTERVAL, MIN, MAX).
//!   The engine substitutes a safe default (position or value 0), notifies
//!   the host, and keeps going, so gesture handling is never interrupted.
//! - [`ConfigError`]: structural misconfiguration rejected up front by
//!   [`SliderConfig::validate`](crate::control::SliderConfig::validate).

use crate::mapper::SliderValue;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Category of a domain error. Discriminants are stable wire codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ErrorKind {
    /// The value is neither numeric-in-range nor part of the dataset.
    Value = 1,
    /// `(max - min)` is not evenly divisible by `interval`.
    Interval = 2,
    /// A numeric value is below `min`.
    Min = 3,
    /// A numeric value is above `max`.
    Max = 4,
}

impl ErrorKind {
    /// Numeric code reported to hosts.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Canonical host-facing message.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Value => "The type of the \"value\" is illegal",
            ErrorKind::Interval => {
                "The prop \"interval\" is invalid, \"(max - min)\" cannot be divisible by \"interval\""
            }
            ErrorKind::Min => "The \"value\" cannot be less than the minimum.",
            ErrorKind::Max => "The \"value\" cannot be greater than the maximum.",
        }
    }
}

/// A non-fatal domain error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("value {0} is not part of the slider domain")]
    Value(SliderValue),

    #[error("interval {interval} does not evenly divide the span {span}")]
    Interval { span: f64, interval: f64 },

    #[error("value {value} is less than the minimum {min}")]
    Min { value: f64, min: f64 },

    #[error("value {value} is greater than the maximum {max}")]
    Max { value: f64, max: f64 },
}

impl SliderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SliderError::Value(_) => ErrorKind::Value,
            SliderError::Interval { .. } => ErrorKind::Interval,
            SliderError::Min { .. } => ErrorKind::Min,
            SliderError::Max { .. } => ErrorKind::Max,
        }
    }

    /// The canonical message for this error's kind.
    pub fn message(&self) -> &'static str {
        self.kind().message()
    }

    /// The `{kind, message}` record handed to hosts.
    pub fn event(&self) -> ErrorEvent {
        ErrorEvent {
            kind: self.kind(),
            message: self.message().to_string(),
        }
    }
}

/// Host-facing error record.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorEvent {
    pub kind: ErrorKind,
    pub message: String,
}

/// Structural configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f64 },

    #[error("min ({min}) must not exceed max ({max})")]
    InvertedBounds { min: f64, max: f64 },

    #[error("interval must be positive, got {0}")]
    NonPositiveInterval(f64),

    #[error("dataset must contain at least one value")]
    EmptyDataset,

    #[error("initial value list must contain at least one value")]
    NoHandles,

    #[error("{name} must be non-negative, got {value}")]
    NegativeRange { name: &'static str, value: f64 },

    #[error("min_range ({min_range}) must not exceed max_range ({max_range})")]
    InvertedRange { min_range: f64, max_range: f64 },

    #[error("min_range ({min_range}) leaves no room for {handles} handles within {steps} steps")]
    InfeasibleMinRange {
        min_range: f64,
        handles: usize,
        steps: usize,
    },

    #[error("expected {expected} values, got {actual}")]
    HandleCount { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorKind::Value.code(), 1);
        assert_eq!(ErrorKind::Interval.code(), 2);
        assert_eq!(ErrorKind::Min.code(), 3);
        assert_eq!(ErrorKind::Max.code(), 4);
    }

    #[test]
    fn test_error_kind_mapping() {
        let err = SliderError::Min {
            value: -1.0,
            min: 0.0,
        };
        assert_eq!(err.kind(), ErrorKind::Min);
        assert_eq!(err.message(), "The \"value\" cannot be less than the minimum.");
        assert_eq!(err.to_string(), "value -1 is less than the minimum 0");

        let err = SliderError::Value(SliderValue::from("zz"));
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(err.to_string(), "value zz is not part of the slider domain");
    }

    #[test]
    fn test_event() {
        let event = SliderError::Interval {
            span: 10.0,
            interval: 3.0,
        }
        .event();
        assert_eq!(event.kind, ErrorKind::Interval);
        assert!(event.message.contains("interval"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::HandleCount {
            expected: 2,
            actual: 3,
        };
        assert_eq!(err.to_string(), "expected 2 values, got 3");
    }
}
