//! Handle storage.
//!
//! - [`HandleSet`]: fixed-size positions with drag-vs-settled ordering
//!   semantics and nearest-handle lookup
//! - [`Handle`]: `{index, position, value}` read view
//! - [`StateSet`] / [`SliderState`]: interaction flags (dragging, focus)

mod set;
mod state;

pub use set::{Handle, HandleSet};
pub use state::{SliderState, StateSet};
