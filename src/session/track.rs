//! Pixel to percent conversion along the slider axis.

use crate::decimal::Decimal;

/// Geometry of the rail the handles slide along.
///
/// Converts an offset in pixels from the rail's leading edge into a
/// percentage position. A reversed track (right-to-left or bottom-to-top)
/// measures from the opposite edge.
///
/// ```
/// use u_slider::session::Track;
///
/// let track = Track::new(400.0);
/// assert_eq!(track.position_of(100.0), 25.0);
///
/// let rtl = Track::new(400.0).reversed(true);
/// assert_eq!(rtl.position_of(100.0), 75.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    length: f64,
    reverse: bool,
}

impl Default for Track {
    /// A 100 px track, where pixels and percent coincide.
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl Track {
    /// Creates a track of `length` pixels. Fractional pixels are dropped.
    pub fn new(length: f64) -> Self {
        let length = if length.is_finite() && length > 0.0 {
            length.floor()
        } else {
            0.0
        };
        Self {
            length,
            reverse: false,
        }
    }

    pub fn reversed(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn is_reversed(&self) -> bool {
        self.reverse
    }

    /// Pixels per percent.
    pub fn scale(&self) -> f64 {
        Decimal::new(self.length).divide(100).to_f64()
    }

    /// Position of a pixel offset. A zero-length track maps everything
    /// to 0.
    pub fn position_of(&self, offset: f64) -> f64 {
        let scale = self.scale();
        if scale <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        let offset = if self.reverse {
            self.length - offset
        } else {
            offset
        };
        offset / scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_identity() {
        let track = Track::default();
        assert_eq!(track.scale(), 1.0);
        assert_eq!(track.position_of(37.0), 37.0);
    }

    #[test]
    fn test_fractional_length_floored() {
        let track = Track::new(250.9);
        assert_eq!(track.length(), 250.0);
        assert_eq!(track.scale(), 2.5);
        assert_eq!(track.position_of(125.0), 50.0);
    }

    #[test]
    fn test_degenerate_track() {
        assert_eq!(Track::new(0.0).position_of(10.0), 0.0);
        assert_eq!(Track::new(-5.0).position_of(10.0), 0.0);
        assert_eq!(Track::new(f64::NAN).position_of(10.0), 0.0);
        assert_eq!(Track::new(200.0).position_of(f64::NAN), 0.0);
    }

    #[test]
    fn test_offsets_beyond_rail() {
        let track = Track::new(200.0);
        assert_eq!(track.position_of(-20.0), -10.0);
        assert_eq!(track.position_of(260.0), 130.0);
    }
}
