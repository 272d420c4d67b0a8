//! Slider configuration.

use crate::decimal::Decimal;
use crate::error::ConfigError;
use crate::mapper::{count_steps, Domain, NumericDomain, SliderValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Initial value(s). The variant fixes the handle count for the lifetime
/// of the slider.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum InitialValue {
    /// One handle.
    Single(SliderValue),
    /// One handle per element.
    Many(Vec<SliderValue>),
}

impl InitialValue {
    pub fn len(&self) -> usize {
        match self {
            InitialValue::Single(_) => 1,
            InitialValue::Many(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// One value per handle, collapsed to [`InitialValue::Single`] when
    /// there is exactly one.
    pub fn from_values(mut values: Vec<SliderValue>) -> Self {
        match values.len() {
            1 => InitialValue::Single(values.remove(0)),
            _ => InitialValue::Many(values),
        }
    }

    pub fn to_vec(&self) -> Vec<SliderValue> {
        match self {
            InitialValue::Single(v) => vec![v.clone()],
            InitialValue::Many(values) => values.clone(),
        }
    }
}

impl Default for InitialValue {
    fn default() -> Self {
        InitialValue::Single(SliderValue::Number(0.0))
    }
}

macro_rules! initial_value_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for InitialValue {
                fn from(value: $t) -> Self {
                    InitialValue::Single(value.into())
                }
            }

            impl From<Vec<$t>> for InitialValue {
                fn from(values: Vec<$t>) -> Self {
                    InitialValue::Many(values.into_iter().map(Into::into).collect())
                }
            }
        )*
    };
}

initial_value_from!(SliderValue, f64, i32, &str, String);

/// Configuration for a slider.
///
/// # Examples
///
/// ```
/// use u_slider::control::SliderConfig;
///
/// let config = SliderConfig::default()
///     .with_value(vec![20, 80])
///     .with_bounds(0.0, 100.0)
///     .with_interval(5.0)
///     .with_min_range(2.0)
///     .with_enable_cross(false);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.handle_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SliderConfig {
    /// Initial value(s).
    pub value: InitialValue,

    /// Ordered dataset replacing the numeric domain, if any.
    pub data: Option<Vec<SliderValue>>,

    /// Whether handles may pass each other.
    pub enable_cross: bool,

    /// Whether all handles move together by the same offset.
    pub fixed: bool,

    pub min: f64,
    pub max: f64,

    /// Step between adjacent values. `(max - min)` should be a multiple.
    pub interval: f64,

    /// Minimum spacing between adjacent handles, in steps.
    pub min_range: Option<f64>,

    /// Maximum spacing between adjacent handles, in steps.
    pub max_range: Option<f64>,

    /// Whether positions are sorted once a gesture settles.
    pub order: bool,

    /// Whether value changes are reported only at drag end.
    pub lazy: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            value: InitialValue::default(),
            data: None,
            enable_cross: true,
            fixed: false,
            min: 0.0,
            max: 100.0,
            interval: 1.0,
            min_range: None,
            max_range: None,
            order: true,
            lazy: false,
        }
    }
}

impl SliderConfig {
    pub fn with_value(mut self, value: impl Into<InitialValue>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_data<T: Into<SliderValue>>(mut self, data: Vec<T>) -> Self {
        self.data = Some(data.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_enable_cross(mut self, enable: bool) -> Self {
        self.enable_cross = enable;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn with_bounds(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn with_interval(mut self, interval: f64) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_min_range(mut self, steps: f64) -> Self {
        self.min_range = Some(steps);
        self
    }

    pub fn with_max_range(mut self, steps: f64) -> Self {
        self.max_range = Some(steps);
        self
    }

    pub fn with_order(mut self, order: bool) -> Self {
        self.order = order;
        self
    }

    pub fn with_lazy(mut self, lazy: bool) -> Self {
        self.lazy = lazy;
        self
    }

    pub fn handle_count(&self) -> usize {
        self.value.len()
    }

    /// The value domain this configuration describes.
    pub fn domain(&self) -> Domain {
        match &self.data {
            Some(data) => Domain::Dataset(data.clone()),
            None => Domain::Numeric(NumericDomain::new(self.min, self.max, self.interval)),
        }
    }

    /// Minimum range in steps; a zero range counts as unset.
    pub fn effective_min_range(&self) -> Option<f64> {
        self.min_range.filter(|r| *r > 0.0)
    }

    /// Maximum range in steps; a zero range counts as unset.
    pub fn effective_max_range(&self) -> Option<f64> {
        self.max_range.filter(|r| *r > 0.0)
    }

    /// Validates the configuration.
    ///
    /// Divisibility of `(max - min)` by `interval` is not checked here: an
    /// indivisible interval is reported as an INTERVAL error at runtime and
    /// degrades the slider instead of rejecting it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.value.is_empty() {
            return Err(ConfigError::NoHandles);
        }
        match &self.data {
            Some(data) if data.is_empty() => return Err(ConfigError::EmptyDataset),
            Some(_) => {}
            None => {
                for (name, value) in [
                    ("min", self.min),
                    ("max", self.max),
                    ("interval", self.interval),
                ] {
                    if !value.is_finite() {
                        return Err(ConfigError::NotFinite { name, value });
                    }
                }
                if self.min > self.max {
                    return Err(ConfigError::InvertedBounds {
                        min: self.min,
                        max: self.max,
                    });
                }
                if self.interval <= 0.0 {
                    return Err(ConfigError::NonPositiveInterval(self.interval));
                }
            }
        }
        for (name, range) in [("min_range", self.min_range), ("max_range", self.max_range)] {
            if let Some(value) = range {
                if !value.is_finite() {
                    return Err(ConfigError::NotFinite { name, value });
                }
                if value < 0.0 {
                    return Err(ConfigError::NegativeRange { name, value });
                }
            }
        }
        if let (Some(min_range), Some(max_range)) =
            (self.effective_min_range(), self.effective_max_range())
        {
            if min_range > max_range {
                return Err(ConfigError::InvertedRange {
                    min_range,
                    max_range,
                });
            }
        }
        if let Some(min_range) = self.effective_min_range() {
            let handles = self.handle_count();
            // A degenerate domain pins every range to [0, 0].
            if let Ok(steps) = count_steps(&self.domain()) {
                let needed = Decimal::new(min_range).multiply(handles - 1).to_f64();
                if steps > 0 && needed > steps as f64 {
                    return Err(ConfigError::InfeasibleMinRange {
                        min_range,
                        handles,
                        steps,
                    });
                }
            }
        }
        Ok(())
    }
}
