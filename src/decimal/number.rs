//! Scaled-integer decimal number.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Number of digits after the decimal point in the shortest
/// representation of `x` that round-trips.
///
/// Non-finite values have no fractional digits.
///
/// ```
/// use u_slider::decimal::fraction_digits;
///
/// assert_eq!(fraction_digits(1.0), 0);
/// assert_eq!(fraction_digits(0.25), 2);
/// assert_eq!(fraction_digits(-3.125), 3);
/// ```
pub fn fraction_digits(x: f64) -> i32 {
    if !x.is_finite() {
        return 0;
    }
    // f64's Display never uses exponent notation.
    let repr = x.to_string();
    match repr.split_once('.') {
        Some((_, frac)) => frac.len() as i32,
        None => 0,
    }
}

/// A decimal value whose arithmetic is exact for decimal operands.
///
/// Operations are chainable and accept anything convertible into a
/// [`Decimal`] (`f64`, `i32`, `usize`, or another `Decimal`).
///
/// ```
/// use u_slider::decimal::Decimal;
///
/// let steps = Decimal::new(1.3).minus(0.1).divide(0.2).to_f64();
/// assert_eq!(steps, 6.0);
///
/// let v = Decimal::from(3usize).multiply(0.1).plus(0.2).to_f64();
/// assert_eq!(v, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Decimal(f64);

impl Decimal {
    /// Wraps a number.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the current value.
    pub fn to_f64(self) -> f64 {
        self.0
    }

    pub fn plus(self, rhs: impl Into<Decimal>) -> Self {
        let rhs = rhs.into();
        let (a, b, scale) = self.scaled_with(rhs);
        Self((a + b) / scale)
    }

    pub fn minus(self, rhs: impl Into<Decimal>) -> Self {
        let rhs = rhs.into();
        let (a, b, scale) = self.scaled_with(rhs);
        Self((a - b) / scale)
    }

    pub fn multiply(self, rhs: impl Into<Decimal>) -> Self {
        let rhs = rhs.into();
        let (a, b, scale) = self.scaled_with(rhs);
        Self((a * b) / (scale * scale))
    }

    /// Division of the scaled integers. The scale factor cancels out, so
    /// the quotient is exact whenever it is representable.
    pub fn divide(self, rhs: impl Into<Decimal>) -> Self {
        let rhs = rhs.into();
        let (a, b, _) = self.scaled_with(rhs);
        Self(a / b)
    }

    /// Whether the value has no fractional part.
    pub fn is_integer(self) -> bool {
        self.0.is_finite() && self.0.fract() == 0.0
    }

    /// Both operands as integers scaled by the common power of ten.
    fn scaled_with(self, rhs: Decimal) -> (f64, f64, f64) {
        let digits = fraction_digits(self.0).max(fraction_digits(rhs.0));
        let scale = 10f64.powi(digits);
        ((self.0 * scale).round(), (rhs.0 * scale).round(), scale)
    }
}

impl From<f64> for Decimal {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self(f64::from(value))
    }
}

impl From<usize> for Decimal {
    fn from(value: usize) -> Self {
        Self(value as f64)
    }
}

impl From<Decimal> for f64 {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Into<Decimal>> Add<T> for Decimal {
    type Output = Decimal;
    fn add(self, rhs: T) -> Decimal {
        self.plus(rhs)
    }
}

impl<T: Into<Decimal>> Sub<T> for Decimal {
    type Output = Decimal;
    fn sub(self, rhs: T) -> Decimal {
        self.minus(rhs)
    }
}

impl<T: Into<Decimal>> Mul<T> for Decimal {
    type Output = Decimal;
    fn mul(self, rhs: T) -> Decimal {
        self.multiply(rhs)
    }
}

impl<T: Into<Decimal>> Div<T> for Decimal {
    type Output = Decimal;
    fn div(self, rhs: T) -> Decimal {
        self.divide(rhs)
    }
}
