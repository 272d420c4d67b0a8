//! Positional-constraint engine for multi-handle sliders.
//!
//! Converts between a value domain and a percentage axis (0–100), and
//! resolves pointer drags for one or more cooperating handles:
//!
//! - **Decimal**: exact base-10 arithmetic for domain math, so
//!   `(max - min) / interval` and `min + n * interval` never pick up binary
//!   floating-point residue.
//! - **Mapper**: value ↔ position conversion over a numeric range stepped
//!   by an interval, or an arbitrary ordered dataset.
//! - **Handles**: fixed-size position storage with drag-vs-settled
//!   ordering semantics.
//! - **Control**: the engine. Resolves drags under fixed-offset, spacing
//!   (min/max range), and no-cross policies.
//! - **Marks**: process segments and tick mark layout.
//! - **Session**: the drag begin/move/end protocol and pixel conversion.
//!
//! # Architecture
//!
//! The crate holds no rendering, event binding, or timing. A host UI feeds
//! positions in and reads positions and values back. Domain errors (VALUE,
//! INTERVAL, MIN, MAX) never abort an operation: the engine substitutes 0,
//! logs through `tracing`, and notifies an optional handler.
//!
//! # Examples
//!
//! ```
//! use u_slider::control::{Control, SliderConfig};
//!
//! let config = SliderConfig::default().with_value(vec![20, 80]).with_fixed(true);
//! let mut control = Control::new(config).unwrap();
//! control.set_position_for_handle(30.0, Some(0));
//! assert_eq!(control.positions(), &[30.0, 90.0]);
//! ```

pub mod control;
pub mod decimal;
pub mod error;
pub mod handles;
pub mod mapper;
pub mod marks;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;
