//! The stateful slider engine.

use super::config::{InitialValue, SliderConfig};
use super::resolver::{self, Constraints};
use crate::error::{ConfigError, SliderError};
use crate::handles::{Handle, HandleSet};
use crate::mapper::{Mapper, SliderValue};
use crate::marks::{self, Mark, MarksConfig};
use std::fmt;
use tracing::{debug, trace, warn};

/// Callback notified of every non-fatal domain error.
pub type ErrorHandler = Box<dyn Fn(&SliderError)>;

/// Custom rule for the highlighted process segments.
pub type ProcessFn = Box<dyn Fn(&[Handle]) -> Vec<(f64, f64)>>;

/// Positional-constraint engine for one slider.
///
/// Owns the value mapper and the handle set. Every mutation goes through
/// `&mut self`, so at most one gesture can be in flight.
///
/// # Examples
///
/// ```
/// use u_slider::control::{Control, SliderConfig};
/// use u_slider::mapper::SliderValue;
///
/// let mut control = Control::new(SliderConfig::default().with_value(50)).unwrap();
/// assert_eq!(control.positions(), &[50.0]);
///
/// assert!(control.set_position_for_handle(75.0, Some(0)));
/// assert_eq!(control.values(), vec![SliderValue::Number(75.0)]);
/// ```
pub struct Control {
    config: SliderConfig,
    mapper: Mapper,
    constraints: Constraints,
    handles: HandleSet,
    on_error: Option<ErrorHandler>,
    process_fn: Option<ProcessFn>,
}

impl fmt::Debug for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Control")
            .field("config", &self.config)
            .field("mapper", &self.mapper)
            .field("constraints", &self.constraints)
            .field("handles", &self.handles)
            .field("on_error", &self.on_error.is_some())
            .field("process_fn", &self.process_fn.is_some())
            .finish()
    }
}

impl Control {
    /// Builds a control without an error handler. Domain errors are still
    /// logged.
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        Self::build(config, None)
    }

    /// Builds a control that reports domain errors to `handler`.
    pub fn with_error_handler(
        config: SliderConfig,
        handler: impl Fn(&SliderError) + 'static,
    ) -> Result<Self, ConfigError> {
        Self::build(config, Some(Box::new(handler)))
    }

    fn build(config: SliderConfig, on_error: Option<ErrorHandler>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mapper = Mapper::new(config.domain());
        let constraints = Constraints::from_config(&config, &mapper);
        let handles = HandleSet::new(vec![0.0; config.handle_count()], config.order);
        let mut control = Self {
            config,
            mapper,
            constraints,
            handles,
            on_error,
            process_fn: None,
        };

        if let Some(err) = control.mapper.interval_error() {
            control.report(err);
        }
        let initial = control.config.value.to_vec();
        let positions = control.parse_values(&initial);
        control.handles.set_positions(positions, false);

        debug!(
            handles = control.handles.len(),
            total = control.mapper.total(),
            "slider control created"
        );
        Ok(control)
    }

    fn report(&self, err: &SliderError) {
        let kind = err.kind();
        warn!(?kind, code = kind.code(), %err, "slider domain error");
        if let Some(handler) = &self.on_error {
            handler(err);
        }
    }

    /// Position of `value`, or 0 after reporting the error.
    fn parse_value(&self, value: &SliderValue) -> f64 {
        match self.mapper.value_to_position(value) {
            Ok(pos) => pos,
            Err(err) => {
                self.report(&err);
                0.0
            }
        }
    }

    fn parse_values(&self, values: &[SliderValue]) -> Vec<f64> {
        values.iter().map(|v| self.parse_value(v)).collect()
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn mapper(&self) -> &Mapper {
        &self.mapper
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn total(&self) -> usize {
        self.mapper.total()
    }

    pub fn gap(&self) -> f64 {
        self.mapper.gap()
    }

    /// Number of handles; fixed at construction.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn positions(&self) -> &[f64] {
        self.handles.positions()
    }

    pub fn values(&self) -> Vec<SliderValue> {
        self.handles.values(&self.mapper)
    }

    pub fn handles(&self) -> Vec<Handle> {
        self.handles.handles(&self.mapper)
    }

    /// Maps a value to a position, reporting failures and returning 0.
    pub fn value_to_position(&self, value: &SliderValue) -> f64 {
        self.parse_value(value)
    }

    pub fn position_to_value(&self, pos: f64) -> SliderValue {
        self.mapper.position_to_value(pos)
    }

    /// Current valid range of every handle.
    pub fn valid_ranges(&self) -> Vec<(f64, f64)> {
        resolver::valid_ranges(self.handles.positions(), &self.constraints)
    }

    /// Replaces all values and recomputes every position.
    ///
    /// Values that fail to map are reported and placed at 0.
    ///
    /// # Errors
    ///
    /// [`ConfigError::HandleCount`] if the number of values differs from
    /// the handle count; nothing is changed in that case.
    pub fn set_value(&mut self, value: impl Into<InitialValue>) -> Result<(), ConfigError> {
        let values = value.into().to_vec();
        if values.len() != self.handles.len() {
            return Err(ConfigError::HandleCount {
                expected: self.handles.len(),
                actual: values.len(),
            });
        }
        let positions = self.parse_values(&values);
        self.handles.set_positions(positions, false);
        Ok(())
    }

    /// Moves handle `index` (or the handle nearest to `pos`) toward `pos`.
    ///
    /// The move is committed with drag semantics: with `order` enabled,
    /// raw positions may be out of index order until
    /// [`sort_positions`](Self::sort_positions). Returns whether anything
    /// moved; a no-op leaves all state untouched.
    pub fn set_position_for_handle(&mut self, pos: f64, index: Option<usize>) -> bool {
        let index = index.unwrap_or_else(|| self.get_recent_dot(pos));
        if index >= self.handles.len() {
            warn!(index, handles = self.handles.len(), "handle index out of range");
            return false;
        }
        match resolver::resolve(self.handles.positions(), index, pos, &self.constraints) {
            Some(next) => {
                debug!(index, pos, positions = ?next, "handle moved");
                self.handles.set_positions(next, true);
                true
            }
            None => {
                trace!(index, pos, "move resolved to no-op");
                false
            }
        }
    }

    /// Sorts positions ascending.
    pub fn sort_positions(&mut self) {
        self.handles.sort_positions();
    }

    /// Recomputes positions from the current values, snapping every
    /// handle onto its step.
    pub fn sync_positions(&mut self) {
        let values = self.values();
        let positions = self.parse_values(&values);
        self.handles.set_positions(positions, false);
    }

    /// Index of the handle closest to `pos`; ties go to the lowest index.
    pub fn get_recent_dot(&self, pos: f64) -> usize {
        self.handles.nearest(pos)
    }

    /// Replaces the default process rule. Segments it returns are
    /// normalized so that `start <= end`.
    pub fn set_process(&mut self, rule: impl Fn(&[Handle]) -> Vec<(f64, f64)> + 'static) {
        self.process_fn = Some(Box::new(rule));
    }

    /// Restores the default process rule.
    pub fn clear_process(&mut self) {
        self.process_fn = None;
    }

    /// Highlighted segments between handles.
    pub fn process(&self) -> Vec<(f64, f64)> {
        match &self.process_fn {
            Some(rule) => marks::normalize(rule(&self.handles())),
            None => marks::process(self.handles.positions()),
        }
    }

    /// Lays out tick marks. Mark values that fail to map are reported and
    /// skipped.
    pub fn marks(&self, config: &MarksConfig) -> Vec<Mark> {
        let (marks, errors) = marks::layout(config, &self.mapper, &self.process());
        for err in &errors {
            self.report(err);
        }
        marks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording(config: SliderConfig) -> (Control, Rc<RefCell<Vec<ErrorKind>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let control = Control::with_error_handler(config, move |err| {
            sink.borrow_mut().push(err.kind());
        })
        .unwrap();
        (control, log)
    }

    #[test]
    fn test_single_handle_scenario() {
        let mut control = Control::new(SliderConfig::default().with_value(50)).unwrap();
        assert_eq!(control.positions(), &[50.0]);
        assert!(control.set_position_for_handle(75.0, Some(0)));
        assert_eq!(control.positions(), &[75.0]);
        assert_eq!(control.values(), vec![SliderValue::from(75)]);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = Control::new(SliderConfig::default().with_interval(-1.0)).unwrap_err();
        assert_eq!(err, ConfigError::NonPositiveInterval(-1.0));
    }

    #[test]
    fn test_infeasible_min_range_rejected() {
        let config = SliderConfig::default()
            .with_value(vec![0, 50, 100])
            .with_min_range(60.0);
        assert!(matches!(
            Control::new(config),
            Err(ConfigError::InfeasibleMinRange { .. })
        ));
    }

    #[test]
    fn test_out_of_bounds_values_report_and_degrade() {
        let config = SliderConfig::default()
            .with_bounds(10.0, 20.0)
            .with_value(vec![5, 25]);
        let (control, log) = recording(config);
        assert_eq!(*log.borrow(), vec![ErrorKind::Min, ErrorKind::Max]);
        assert_eq!(control.positions(), &[0.0, 0.0]);
        assert_eq!(
            control.values(),
            vec![SliderValue::from(10), SliderValue::from(10)]
        );
    }

    #[test]
    fn test_interval_error_reported_once() {
        let config = SliderConfig::default()
            .with_bounds(0.0, 10.0)
            .with_interval(3.0)
            .with_value(vec![3, 9]);
        let (mut control, log) = recording(config);
        assert_eq!(*log.borrow(), vec![ErrorKind::Interval]);
        assert_eq!(control.total(), 0);
        assert_eq!(control.positions(), &[0.0, 0.0]);
        assert!(!control.set_position_for_handle(50.0, Some(1)));
        assert_eq!(control.positions(), &[0.0, 0.0]);
    }

    #[test]
    fn test_set_value_resyncs_positions() {
        let mut control =
            Control::new(SliderConfig::default().with_value(vec![10, 20])).unwrap();
        control.set_value(vec![70, 30]).unwrap();
        assert_eq!(control.positions(), &[30.0, 70.0]);

        let err = control.set_value(5).unwrap_err();
        assert_eq!(
            err,
            ConfigError::HandleCount {
                expected: 2,
                actual: 1
            }
        );
        assert_eq!(control.positions(), &[30.0, 70.0]);
    }

    #[test]
    fn test_unordered_set_value_keeps_slots() {
        let config = SliderConfig::default()
            .with_value(vec![10, 20])
            .with_order(false);
        let mut control = Control::new(config).unwrap();
        control.set_value(vec![70, 30]).unwrap();
        assert_eq!(control.positions(), &[70.0, 30.0]);
    }

    #[test]
    fn test_nearest_handle_default_index() {
        let mut control =
            Control::new(SliderConfig::default().with_value(vec![20, 80])).unwrap();
        assert!(control.set_position_for_handle(70.0, None));
        assert_eq!(control.positions(), &[20.0, 70.0]);
        assert!(!control.set_position_for_handle(10.0, Some(5)));
    }

    #[test]
    fn test_repeated_move_is_idempotent() {
        let mut control =
            Control::new(SliderConfig::default().with_value(vec![20, 80])).unwrap();
        assert!(control.set_position_for_handle(33.3, Some(0)));
        let snapshot = control.positions().to_vec();
        assert!(!control.set_position_for_handle(33.3, Some(0)));
        assert_eq!(control.positions(), snapshot.as_slice());
    }

    #[test]
    fn test_drag_then_settle() {
        let mut control =
            Control::new(SliderConfig::default().with_value(vec![20, 50])).unwrap();
        assert!(control.set_position_for_handle(60.4, Some(0)));
        // Crossed mid-drag: raw order kept, values ascend.
        assert_eq!(control.positions(), &[60.4, 50.0]);
        assert_eq!(
            control.values(),
            vec![SliderValue::from(50), SliderValue::from(60)]
        );

        control.sort_positions();
        assert_eq!(control.positions(), &[50.0, 60.4]);
        control.sync_positions();
        assert_eq!(control.positions(), &[50.0, 60.0]);
    }

    #[test]
    fn test_sync_snaps_to_step() {
        let config = SliderConfig::default().with_interval(10.0).with_value(40);
        let mut control = Control::new(config).unwrap();
        assert!(control.set_position_for_handle(57.0, Some(0)));
        assert_eq!(control.values(), vec![SliderValue::from(60)]);
        control.sync_positions();
        assert_eq!(control.positions(), &[60.0]);
    }

    #[test]
    fn test_value_to_position_reports() {
        let (control, log) = recording(SliderConfig::default());
        assert_eq!(control.value_to_position(&SliderValue::from("x")), 0.0);
        assert_eq!(*log.borrow(), vec![ErrorKind::Value]);
        assert_eq!(control.position_to_value(42.4), SliderValue::from(42));
    }

    #[test]
    fn test_valid_ranges_track_positions() {
        let config = SliderConfig::default()
            .with_value(vec![20, 60])
            .with_enable_cross(false);
        let mut control = Control::new(config).unwrap();
        assert_eq!(control.valid_ranges(), vec![(0.0, 60.0), (20.0, 100.0)]);
        control.set_position_for_handle(40.0, Some(1));
        assert_eq!(control.valid_ranges(), vec![(0.0, 40.0), (20.0, 100.0)]);
    }

    #[test]
    fn test_custom_process_rule() {
        let config = SliderConfig::default().with_value(vec![20, 50, 80]);
        let mut control = Control::new(config).unwrap();
        assert_eq!(control.process(), vec![(20.0, 80.0)]);

        // Highlight from each handle to the end, reversed on purpose.
        control.set_process(|handles| handles.iter().map(|h| (100.0, h.position)).collect());
        assert_eq!(
            control.process(),
            vec![(20.0, 100.0), (50.0, 100.0), (80.0, 100.0)]
        );
        let marks = control.marks(&MarksConfig::Values(vec![SliderValue::from(10)]));
        assert!(!marks[0].active);

        control.clear_process();
        assert_eq!(control.process(), vec![(20.0, 80.0)]);
    }

    #[test]
    fn test_debug_hides_handler() {
        let (control, _) = recording(SliderConfig::default());
        let text = format!("{control:?}");
        assert!(text.contains("on_error: true"));
    }
}
