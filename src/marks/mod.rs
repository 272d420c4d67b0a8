//! Process segments and tick marks.
//!
//! Hosts render a highlighted *process* bar between handles and optional
//! tick marks along the axis; this module computes where they go.

mod layout;

pub use layout::{layout, normalize, process, Mark, MarksConfig};
