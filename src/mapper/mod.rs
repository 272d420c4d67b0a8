//! Value ↔ position mapping.
//!
//! A slider's value domain is either a numeric range stepped by an
//! interval, or an arbitrary ordered dataset. Both are laid out on a
//! percentage axis (0–100) with `total` equal steps of width `gap`.
//!
//! # Key Types
//!
//! - [`SliderValue`]: a numeric or textual value
//! - [`Domain`] / [`NumericDomain`]: the value domain
//! - [`Mapper`]: converts values to positions and back, decimal-exact
//!
//! Values that land exactly on a step survive a round trip:
//! `position_to_value(value_to_position(v)) == v`.

mod convert;
mod types;

pub use convert::{count_steps, Mapper};
pub use types::{Domain, NumericDomain, SliderValue};
