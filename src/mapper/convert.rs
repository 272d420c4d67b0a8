//! Value ↔ position conversion.

use super::types::{Domain, SliderValue};
use crate::decimal::Decimal;
use crate::error::SliderError;

/// Converts between domain values and percentage positions.
///
/// The step count is computed once at construction: the domain is
/// immutable, so nothing can invalidate it.
///
/// # Examples
///
/// ```
/// use u_slider::mapper::{Domain, Mapper, NumericDomain, SliderValue};
///
/// let mapper = Mapper::new(Domain::Numeric(NumericDomain::new(0.0, 1.0, 0.1)));
/// assert_eq!(mapper.total(), 10);
///
/// let pos = mapper.value_to_position(&SliderValue::Number(0.3)).unwrap();
/// assert!((pos - 30.0).abs() < 1e-9);
/// assert_eq!(mapper.position_to_value(pos), SliderValue::Number(0.3));
/// ```
#[derive(Debug, Clone)]
pub struct Mapper {
    domain: Domain,
    total: usize,
    interval_error: Option<SliderError>,
}

impl Mapper {
    pub fn new(domain: Domain) -> Self {
        let (total, interval_error) = match count_steps(&domain) {
            Ok(total) => (total, None),
            Err(err) => (0, Some(err)),
        };
        Self {
            domain,
            total,
            interval_error,
        }
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    /// Number of steps between the first and last value.
    ///
    /// 0 when the domain is degenerate.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The INTERVAL error detected while counting steps, if any.
    pub fn interval_error(&self) -> Option<&SliderError> {
        self.interval_error.as_ref()
    }

    /// Whether only position 0 is valid.
    pub fn is_degenerate(&self) -> bool {
        self.total == 0
    }

    /// Percentage distance between adjacent steps (0 when degenerate).
    pub fn gap(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 / self.total as f64
        }
    }

    /// Position of a (possibly fractional) step index.
    fn step_position(&self, steps: f64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            steps * 100.0 / self.total as f64
        }
    }

    /// Position of every step, from 0 to 100.
    pub fn step_positions(&self) -> Vec<f64> {
        (0..=self.total)
            .map(|i| self.step_position(i as f64))
            .collect()
    }

    /// Maps a value to its position.
    ///
    /// # Errors
    ///
    /// - [`SliderError::Value`] if the value is not in the dataset, or is
    ///   not a finite number in a numeric domain
    /// - [`SliderError::Min`] / [`SliderError::Max`] if a number lies
    ///   outside the bounds
    pub fn value_to_position(&self, value: &SliderValue) -> Result<f64, SliderError> {
        match &self.domain {
            Domain::Dataset(data) => {
                let index = data
                    .iter()
                    .position(|v| v == value)
                    .ok_or_else(|| SliderError::Value(value.clone()))?;
                Ok(self.step_position(index as f64))
            }
            Domain::Numeric(domain) => {
                let v = match value {
                    SliderValue::Number(v) if v.is_finite() => *v,
                    _ => return Err(SliderError::Value(value.clone())),
                };
                if v < domain.min {
                    return Err(SliderError::Min {
                        value: v,
                        min: domain.min,
                    });
                }
                if v > domain.max {
                    return Err(SliderError::Max {
                        value: v,
                        max: domain.max,
                    });
                }
                let steps = Decimal::new(v)
                    .minus(domain.min)
                    .divide(domain.interval)
                    .to_f64();
                Ok(self.step_position(steps))
            }
        }
    }

    /// Index of the step nearest to `pos`, within `[0, total]`.
    pub fn nearest_step(&self, pos: f64) -> usize {
        if self.total == 0 {
            return 0;
        }
        let step = (pos / self.gap()).round();
        if step.is_nan() || step <= 0.0 {
            0
        } else {
            (step as usize).min(self.total)
        }
    }

    /// Value of the step at `index`, if it exists.
    pub fn value_at_step(&self, index: usize) -> Option<SliderValue> {
        if index > self.total {
            return None;
        }
        match &self.domain {
            Domain::Dataset(data) => data.get(index).cloned(),
            Domain::Numeric(domain) => Some(SliderValue::Number(
                Decimal::from(index)
                    .multiply(domain.interval)
                    .plus(domain.min)
                    .to_f64(),
            )),
        }
    }

    /// Maps a position to the value of its nearest step.
    pub fn position_to_value(&self, pos: f64) -> SliderValue {
        self.value_at_step(self.nearest_step(pos))
            .unwrap_or(SliderValue::Number(0.0))
    }
}

/// Counts the steps of a domain.
///
/// # Errors
///
/// [`SliderError::Interval`] if `(max - min) / interval` is not a
/// non-negative integer.
pub fn count_steps(domain: &Domain) -> Result<usize, SliderError> {
    match domain {
        Domain::Dataset(data) => Ok(data.len().saturating_sub(1)),
        Domain::Numeric(d) => {
            let span = Decimal::new(d.max).minus(d.min);
            let steps = span.divide(d.interval);
            if steps.is_integer() && steps.to_f64() >= 0.0 {
                Ok(steps.to_f64() as usize)
            } else {
                Err(SliderError::Interval {
                    span: span.to_f64(),
                    interval: d.interval,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::NumericDomain;

    fn numeric(min: f64, max: f64, interval: f64) -> Mapper {
        Mapper::new(Domain::Numeric(NumericDomain::new(min, max, interval)))
    }

    fn letters() -> Mapper {
        Mapper::new(Domain::Dataset(
            ["a", "b", "c", "d"].into_iter().map(SliderValue::from).collect(),
        ))
    }

    #[test]
    fn test_total_and_gap() {
        let m = numeric(0.0, 100.0, 1.0);
        assert_eq!(m.total(), 100);
        assert!((m.gap() - 1.0).abs() < 1e-12);
        assert!(m.interval_error().is_none());

        let m = numeric(0.0, 1.0, 0.1);
        assert_eq!(m.total(), 10);
    }

    #[test]
    fn test_indivisible_interval_degenerates() {
        let m = numeric(0.0, 10.0, 3.0);
        assert_eq!(m.total(), 0);
        assert!(m.is_degenerate());
        assert_eq!(m.gap(), 0.0);
        assert!(matches!(
            m.interval_error(),
            Some(SliderError::Interval { .. })
        ));
        assert_eq!(m.value_to_position(&SliderValue::from(6)).unwrap(), 0.0);
        assert_eq!(m.position_to_value(80.0), SliderValue::Number(0.0));
        assert_eq!(m.step_positions(), vec![0.0]);
    }

    #[test]
    fn test_dataset_positions() {
        let m = letters();
        assert_eq!(m.total(), 3);
        let pos = m.value_to_position(&SliderValue::from("b")).unwrap();
        assert!((pos - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(m.value_to_position(&SliderValue::from("d")).unwrap(), 100.0);
        assert_eq!(m.position_to_value(66.67), SliderValue::from("c"));
    }

    #[test]
    fn test_dataset_missing_value() {
        let m = letters();
        let err = m.value_to_position(&SliderValue::from("z")).unwrap_err();
        assert_eq!(err, SliderError::Value(SliderValue::from("z")));
        let err = m.value_to_position(&SliderValue::from(1)).unwrap_err();
        assert!(matches!(err, SliderError::Value(_)));
    }

    #[test]
    fn test_numeric_bounds() {
        let m = numeric(10.0, 20.0, 1.0);
        assert!(matches!(
            m.value_to_position(&SliderValue::from(9)),
            Err(SliderError::Min { .. })
        ));
        assert!(matches!(
            m.value_to_position(&SliderValue::from(21)),
            Err(SliderError::Max { .. })
        ));
        assert!(matches!(
            m.value_to_position(&SliderValue::from("15")),
            Err(SliderError::Value(_))
        ));
        assert!(matches!(
            m.value_to_position(&SliderValue::Number(f64::NAN)),
            Err(SliderError::Value(_))
        ));
        assert_eq!(m.value_to_position(&SliderValue::from(20)).unwrap(), 100.0);
        assert_eq!(m.value_to_position(&SliderValue::from(10)).unwrap(), 0.0);
    }

    #[test]
    fn test_decimal_round_trip() {
        let m = numeric(-0.5, 0.7, 0.1);
        assert_eq!(m.total(), 12);
        for k in 0..=12usize {
            let v = m.value_at_step(k).unwrap();
            let pos = m.value_to_position(&v).unwrap();
            assert_eq!(m.position_to_value(pos), v, "step {k}");
        }
        assert_eq!(m.value_at_step(3), Some(SliderValue::Number(-0.2)));
    }

    #[test]
    fn test_position_snaps_to_nearest_step() {
        let m = numeric(0.0, 10.0, 2.0);
        assert_eq!(m.position_to_value(29.0), SliderValue::Number(2.0));
        assert_eq!(m.position_to_value(31.0), SliderValue::Number(4.0));
        assert_eq!(m.position_to_value(-5.0), SliderValue::Number(0.0));
        assert_eq!(m.position_to_value(140.0), SliderValue::Number(10.0));
    }

    #[test]
    fn test_step_positions() {
        let m = numeric(0.0, 4.0, 1.0);
        assert_eq!(m.step_positions(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
        assert_eq!(m.value_at_step(5), None);
    }
}
