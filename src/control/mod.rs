//! Slider control: configuration, constraint resolution, and the engine.
//!
//! # Key Types
//!
//! - [`SliderConfig`]: domain, initial value(s), and movement policies
//! - [`Control`]: owns the mapper and handle set; all mutation goes here
//! - [`Constraints`]: movement policies in percent, fed to [`resolve`]
//!
//! # Movement Policies
//!
//! A requested position is first clamped into the handle's valid range,
//! then propagated to the other handles:
//!
//! - **Fixed**: every handle shifts by the same delta, shortened to what
//!   the most constrained handle allows
//! - **Range**: neighbours are pushed (minimum range) or pulled (maximum
//!   range) until spacing bounds hold
//! - **Independent**: only the requested handle moves
//!
//! A request that resolves to zero movement changes nothing.

mod config;
mod engine;
mod resolver;

pub use config::{InitialValue, SliderConfig};
pub use engine::{Control, ErrorHandler, ProcessFn};
pub use resolver::{resolve, valid_range, valid_ranges, Constraints, EPSILON};
