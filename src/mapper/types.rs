//! Value domain types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value a handle can represent.
///
/// Numeric domains use [`SliderValue::Number`]; datasets may hold either
/// variant.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum SliderValue {
    Number(f64),
    Text(String),
}

impl SliderValue {
    /// The numeric payload, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SliderValue::Number(n) => Some(*n),
            SliderValue::Text(_) => None,
        }
    }

    /// The text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SliderValue::Number(_) => None,
            SliderValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for SliderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliderValue::Number(n) => n.fmt(f),
            SliderValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for SliderValue {
    fn from(value: f64) -> Self {
        SliderValue::Number(value)
    }
}

impl From<i32> for SliderValue {
    fn from(value: i32) -> Self {
        SliderValue::Number(f64::from(value))
    }
}

impl From<&str> for SliderValue {
    fn from(value: &str) -> Self {
        SliderValue::Text(value.to_string())
    }
}

impl From<String> for SliderValue {
    fn from(value: String) -> Self {
        SliderValue::Text(value)
    }
}

/// A numeric range stepped by `interval`.
///
/// `(max - min)` should be an exact multiple of `interval`; when it is not
/// the mapper reports an INTERVAL error and degrades to a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumericDomain {
    pub min: f64,
    pub max: f64,
    pub interval: f64,
}

impl NumericDomain {
    pub fn new(min: f64, max: f64, interval: f64) -> Self {
        Self { min, max, interval }
    }
}

impl Default for NumericDomain {
    fn default() -> Self {
        Self::new(0.0, 100.0, 1.0)
    }
}

/// The set of values a slider can take.
#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
    Numeric(NumericDomain),
    /// An ordered dataset; replaces numeric semantics entirely.
    Dataset(Vec<SliderValue>),
}

impl Domain {
    pub fn is_dataset(&self) -> bool {
        matches!(self, Domain::Dataset(_))
    }
}
