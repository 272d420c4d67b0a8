//! Exact base-10 arithmetic.
//!
//! Binary floating point cannot represent most decimal fractions, so
//! `0.1 + 0.2` yields `0.30000000000000004` and `(0.3 - 0.1) / 0.1` yields
//! `1.9999999999999998`. Slider domains are written in decimal (`min`,
//! `max`, `interval`), and divisibility and equality checks on them must
//! behave as a person would expect.
//!
//! [`Decimal`] performs each binary operation on scaled integers: both
//! operands are multiplied by `10^d`, where `d` is the larger count of
//! fractional digits, the integer operation is applied, and the result is
//! scaled back.
//!
//! # Examples
//!
//! ```
//! use u_slider::decimal::Decimal;
//!
//! assert_eq!(Decimal::new(0.1).plus(0.2).to_f64(), 0.3);
//! assert_eq!(Decimal::new(0.3).minus(0.1).divide(0.1).to_f64(), 2.0);
//! ```

mod number;

pub use number::{fraction_digits, Decimal};
