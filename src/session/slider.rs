//! Gesture protocol on top of [`Control`].

use super::track::Track;
use crate::control::{Control, InitialValue, SliderConfig};
use crate::error::{ConfigError, SliderError};
use crate::handles::{Handle, SliderState, StateSet};
use crate::mapper::SliderValue;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Notification produced by a [`Slider`] call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "camelCase"))]
pub enum SliderEvent {
    /// Reported values changed. A single-handle slider reports a bare
    /// value, a multi-handle slider a list.
    Change { value: InitialValue },
    DragStart { index: usize },
    Dragging { index: usize },
    DragEnd { index: usize },
}

/// A slider driven by pointer gestures.
///
/// Implements the `drag_start → drag_move* → drag_end` protocol and
/// click-to-move. Each call returns the events it produced.
///
/// # Examples
///
/// ```
/// use u_slider::control::{InitialValue, SliderConfig};
/// use u_slider::session::{Slider, SliderEvent};
/// use u_slider::mapper::SliderValue;
///
/// let mut slider = Slider::new(SliderConfig::default().with_value(vec![20, 80])).unwrap();
/// slider.drag_start(0);
/// let events = slider.drag_move(30.4);
/// assert!(events.contains(&SliderEvent::Change {
///     value: InitialValue::Many(vec![SliderValue::Number(30.0), SliderValue::Number(80.0)]),
/// }));
/// slider.drag_end();
/// assert_eq!(slider.control().positions(), &[30.0, 80.0]);
/// ```
#[derive(Debug)]
pub struct Slider {
    control: Control,
    states: StateSet,
    focus: usize,
    disabled: Vec<bool>,
    track: Track,
}

impl Slider {
    pub fn new(config: SliderConfig) -> Result<Self, ConfigError> {
        Control::new(config).map(Self::from_control)
    }

    pub fn with_error_handler(
        config: SliderConfig,
        handler: impl Fn(&SliderError) + 'static,
    ) -> Result<Self, ConfigError> {
        Control::with_error_handler(config, handler).map(Self::from_control)
    }

    pub fn from_control(control: Control) -> Self {
        let disabled = vec![false; control.len()];
        Self {
            control,
            states: StateSet::new(),
            focus: 0,
            disabled,
            track: Track::default(),
        }
    }

    pub fn control(&self) -> &Control {
        &self.control
    }

    pub fn into_control(self) -> Control {
        self.control
    }

    pub fn states(&self) -> StateSet {
        self.states
    }

    pub fn is_dragging(&self) -> bool {
        self.states.has(SliderState::Drag)
    }

    /// The focused handle, if any.
    pub fn focus_index(&self) -> Option<usize> {
        self.states.has(SliderState::Focus).then_some(self.focus)
    }

    /// Drops focus. Ignored while dragging.
    pub fn blur(&mut self) {
        if !self.is_dragging() {
            self.states.remove(SliderState::Focus);
        }
    }

    pub fn track(&self) -> Track {
        self.track
    }

    pub fn set_track(&mut self, track: Track) {
        self.track = track;
    }

    pub fn is_disabled(&self, index: usize) -> bool {
        self.disabled.get(index).copied().unwrap_or(true)
    }

    /// Enables or disables one handle. Out-of-range indices are ignored.
    pub fn set_disabled(&mut self, index: usize, disabled: bool) {
        if let Some(flag) = self.disabled.get_mut(index) {
            *flag = disabled;
        }
    }

    pub fn values(&self) -> Vec<SliderValue> {
        self.control.values()
    }

    /// See [`Control::set_process`].
    pub fn set_process(&mut self, rule: impl Fn(&[Handle]) -> Vec<(f64, f64)> + 'static) {
        self.control.set_process(rule);
    }

    pub fn handles(&self) -> Vec<Handle> {
        self.control.handles()
    }

    fn change(&self) -> SliderEvent {
        SliderEvent::Change {
            value: InitialValue::from_values(self.control.values()),
        }
    }

    /// Replaces all values.
    pub fn set_value(
        &mut self,
        value: impl Into<InitialValue>,
    ) -> Result<Vec<SliderEvent>, ConfigError> {
        self.control.set_value(value)?;
        Ok(vec![self.change()])
    }

    /// Begins dragging handle `index`. Disabled or unknown handles are
    /// ignored.
    pub fn drag_start(&mut self, index: usize) -> Vec<SliderEvent> {
        if self.is_disabled(index) {
            return Vec::new();
        }
        self.focus = index;
        self.states.add(SliderState::Drag);
        self.states.add(SliderState::Focus);
        debug!(index, "drag started");
        vec![SliderEvent::DragStart { index }]
    }

    /// Moves the dragged handle toward `pos` (percent).
    pub fn drag_move(&mut self, pos: f64) -> Vec<SliderEvent> {
        if !self.is_dragging() {
            return Vec::new();
        }
        let mut events = Vec::new();
        let moved = self.control.set_position_for_handle(pos, Some(self.focus));
        if moved && !self.control.config().lazy {
            events.push(self.change());
        }
        events.push(SliderEvent::Dragging { index: self.focus });
        events
    }

    /// [`drag_move`](Self::drag_move) with a pixel offset along the track.
    pub fn drag_move_px(&mut self, offset: f64) -> Vec<SliderEvent> {
        let pos = self.track.position_of(offset);
        self.drag_move(pos)
    }

    /// Ends the gesture: sorts (when ordered), reports lazily held values,
    /// and snaps every handle back onto its step.
    pub fn drag_end(&mut self) -> Vec<SliderEvent> {
        if !self.is_dragging() {
            return Vec::new();
        }
        let mut events = Vec::new();
        if self.control.config().order {
            self.control.sort_positions();
        }
        if self.control.config().lazy {
            events.push(self.change());
        }
        self.control.sync_positions();
        self.states.remove(SliderState::Drag);
        debug!(index = self.focus, "drag ended");
        events.push(SliderEvent::DragEnd { index: self.focus });
        events
    }

    /// Moves the nearest handle to `pos` (percent) and settles it.
    ///
    /// Ignored while dragging or when the nearest handle is disabled.
    pub fn click(&mut self, pos: f64) -> Vec<SliderEvent> {
        if self.is_dragging() {
            return Vec::new();
        }
        let index = self.control.get_recent_dot(pos);
        if self.is_disabled(index) {
            return Vec::new();
        }
        let moved = self.control.set_position_for_handle(pos, Some(index));
        if self.control.config().order {
            self.control.sort_positions();
        }
        self.control.sync_positions();
        if moved {
            vec![self.change()]
        } else {
            Vec::new()
        }
    }

    /// [`click`](Self::click) with a pixel offset along the track.
    pub fn click_px(&mut self, offset: f64) -> Vec<SliderEvent> {
        let pos = self.track.position_of(offset);
        self.click(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_handles() -> Slider {
        Slider::new(SliderConfig::default().with_value(vec![20, 80])).unwrap()
    }

    fn numbers(values: &[f64]) -> InitialValue {
        InitialValue::Many(values.iter().map(|&v| SliderValue::Number(v)).collect())
    }

    #[test]
    fn test_drag_lifecycle_events() {
        let mut slider = two_handles();
        assert_eq!(slider.drag_start(1), vec![SliderEvent::DragStart { index: 1 }]);
        assert!(slider.is_dragging());
        assert_eq!(slider.focus_index(), Some(1));

        let events = slider.drag_move(60.0);
        assert_eq!(
            events,
            vec![
                SliderEvent::Change {
                    value: numbers(&[20.0, 60.0])
                },
                SliderEvent::Dragging { index: 1 },
            ]
        );

        // Same position again: no change, still dragging.
        assert_eq!(slider.drag_move(60.0), vec![SliderEvent::Dragging { index: 1 }]);

        assert_eq!(slider.drag_end(), vec![SliderEvent::DragEnd { index: 1 }]);
        assert!(!slider.is_dragging());
        assert_eq!(slider.focus_index(), Some(1));
        slider.blur();
        assert_eq!(slider.focus_index(), None);
    }

    #[test]
    fn test_move_without_drag_is_ignored() {
        let mut slider = two_handles();
        assert!(slider.drag_move(50.0).is_empty());
        assert!(slider.drag_end().is_empty());
        assert_eq!(slider.control().positions(), &[20.0, 80.0]);
    }

    #[test]
    fn test_lazy_reports_at_drag_end() {
        let config = SliderConfig::default()
            .with_value(vec![20, 80])
            .with_lazy(true);
        let mut slider = Slider::new(config).unwrap();
        slider.drag_start(0);
        assert_eq!(slider.drag_move(40.0), vec![SliderEvent::Dragging { index: 0 }]);
        let events = slider.drag_end();
        assert_eq!(
            events,
            vec![
                SliderEvent::Change {
                    value: numbers(&[40.0, 80.0])
                },
                SliderEvent::DragEnd { index: 0 },
            ]
        );
    }

    #[test]
    fn test_crossing_drag_settles_sorted() {
        let mut slider = two_handles();
        slider.drag_start(0);
        slider.drag_move(90.2);
        assert_eq!(slider.control().positions(), &[90.2, 80.0]);
        assert_eq!(slider.values(), numbers(&[80.0, 90.0]).to_vec());
        slider.drag_end();
        assert_eq!(slider.control().positions(), &[80.0, 90.0]);
    }

    #[test]
    fn test_disabled_handle() {
        let mut slider = two_handles();
        slider.set_disabled(0, true);
        assert!(slider.drag_start(0).is_empty());
        assert!(!slider.is_dragging());
        assert!(slider.click(10.0).is_empty());
        assert_eq!(slider.control().positions(), &[20.0, 80.0]);
        assert!(slider.is_disabled(7));
    }

    #[test]
    fn test_click_moves_nearest() {
        let mut slider = two_handles();
        let events = slider.click(69.6);
        assert_eq!(
            events,
            vec![SliderEvent::Change {
                value: numbers(&[20.0, 70.0])
            }]
        );
        assert_eq!(slider.control().positions(), &[20.0, 70.0]);
        assert!(slider.click(70.0).is_empty());
    }

    #[test]
    fn test_click_ignored_while_dragging() {
        let mut slider = two_handles();
        slider.drag_start(0);
        assert!(slider.click(50.0).is_empty());
    }

    #[test]
    fn test_pixel_input() {
        let mut slider = two_handles();
        slider.set_track(Track::new(400.0));
        slider.drag_start(0);
        slider.drag_move_px(120.0);
        slider.drag_end();
        assert_eq!(slider.control().positions(), &[30.0, 80.0]);

        slider.set_track(Track::new(400.0).reversed(true));
        slider.click_px(40.0);
        assert_eq!(slider.control().positions(), &[30.0, 90.0]);
    }

    #[test]
    fn test_set_value_emits_change() {
        let mut slider = two_handles();
        let events = slider.set_value(vec![5, 95]).unwrap();
        assert_eq!(
            events,
            vec![SliderEvent::Change {
                value: numbers(&[5.0, 95.0])
            }]
        );
        assert!(slider.set_value(1).is_err());
    }
}
