//! Process segments and tick mark layout.

use crate::control::EPSILON;
use crate::error::SliderError;
use crate::mapper::{Mapper, SliderValue};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which tick marks to lay out.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MarksConfig {
    #[default]
    None,
    /// One mark per step.
    Steps,
    /// One mark per listed value, labelled with the value itself.
    Values(Vec<SliderValue>),
    /// One mark per listed value with an explicit label.
    Labeled(Vec<(SliderValue, String)>),
}

/// A tick mark on the axis.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Mark {
    pub position: f64,
    pub value: SliderValue,
    pub label: String,
    /// Whether the mark lies inside a process segment.
    pub active: bool,
}

/// Highlighted segments for the given handle positions.
///
/// One handle highlights from the start of the axis to the handle; more
/// handles highlight from the first to the last. Segments are normalized
/// so that `start <= end`.
///
/// ```
/// use u_slider::marks::process;
///
/// assert_eq!(process(&[40.0]), vec![(0.0, 40.0)]);
/// assert_eq!(process(&[70.0, 50.0, 20.0]), vec![(20.0, 70.0)]);
/// assert!(process(&[]).is_empty());
/// ```
pub fn process(positions: &[f64]) -> Vec<(f64, f64)> {
    let segment = match positions {
        [] => return Vec::new(),
        [only] => (0.0, *only),
        [first, .., last] => (*first, *last),
    };
    normalize(vec![segment])
}

/// Orders each segment so that `start <= end`.
pub fn normalize(segments: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    segments
        .into_iter()
        .map(|(start, end)| (start.min(end), start.max(end)))
        .collect()
}

fn is_active(position: f64, segments: &[(f64, f64)]) -> bool {
    segments
        .iter()
        .any(|&(start, end)| position >= start - EPSILON && position <= end + EPSILON)
}

/// Lays out marks. Values that cannot be mapped are returned as errors
/// and left out.
pub fn layout(
    config: &MarksConfig,
    mapper: &Mapper,
    segments: &[(f64, f64)],
) -> (Vec<Mark>, Vec<SliderError>) {
    let entries: Vec<(SliderValue, Option<String>)> = match config {
        MarksConfig::None => return (Vec::new(), Vec::new()),
        MarksConfig::Steps => (0..=mapper.total())
            .filter_map(|i| mapper.value_at_step(i))
            .map(|v| (v, None))
            .collect(),
        MarksConfig::Values(values) => values.iter().map(|v| (v.clone(), None)).collect(),
        MarksConfig::Labeled(pairs) => pairs
            .iter()
            .map(|(v, label)| (v.clone(), Some(label.clone())))
            .collect(),
    };

    let mut marks = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();
    for (value, label) in entries {
        match mapper.value_to_position(&value) {
            Ok(position) => marks.push(Mark {
                position,
                label: label.unwrap_or_else(|| value.to_string()),
                value,
                active: is_active(position, segments),
            }),
            Err(err) => errors.push(err),
        }
    }
    (marks, errors)
}
