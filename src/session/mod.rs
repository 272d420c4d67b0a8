//! Gesture sessions.
//!
//! [`Slider`] drives a [`Control`](crate::control::Control) through the
//! pointer protocol a host UI produces: drag begin, repeated moves, drag
//! end, and clicks on the rail. [`Track`] turns raw pixel offsets into
//! percentage positions.
//!
//! # Protocol
//!
//! 1. `drag_start(i)` focuses handle `i` and enters the drag state
//! 2. `drag_move(pos)` resolves the move; values are reported immediately
//!    unless the slider is lazy
//! 3. `drag_end()` sorts positions when ordered, reports lazy values, and
//!    snaps handles back onto their steps
//!
//! Cancelling a gesture is simply not calling `drag_move` again.

mod slider;
mod track;

pub use slider::{Slider, SliderEvent};
pub use track::Track;
