use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ComplexRectError {
    InvalidBounds {
        re_width: f64,
        im_height: f64,
    },
    NonFiniteBounds,
}

impl fmt::Display for ComplexRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBounds {
                re_width,
                im_height,
            } => {
                write!(
                    f,
                    "complex rect extents must be positive: {}x{}",
                    re_width, im_height
                )
            }
            Self::NonFiniteBounds => {
                write!(f, "complex rect bounds must be finite")
            }
        }
    }
}

impl Error for ComplexRectError {}

/// Axis-aligned viewport rectangle in the complex plane.
///
/// Invariant after construction: `re_min < re_max` and `im_min < im_max`,
/// all bounds finite. Degenerate rectangles never exist as values, so the
/// engine can divide by the extents without checks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl ComplexRect {
    pub fn new(
        re_min: f64,
        re_max: f64,
        im_min: f64,
        im_max: f64,
    ) -> Result<Self, ComplexRectError> {
        if !(re_min.is_finite() && re_max.is_finite() && im_min.is_finite() && im_max.is_finite()) {
            return Err(ComplexRectError::NonFiniteBounds);
        }

        let re_width = re_max - re_min;
        let im_height = im_max - im_min;

        if re_width <= 0.0 || im_height <= 0.0 {
            return Err(ComplexRectError::InvalidBounds {
                re_width,
                im_height,
            });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    /// Smallest rectangle covering two plane points, in any corner order.
    pub fn from_corners(a: Complex, b: Complex) -> Result<Self, ComplexRectError> {
        Self::new(
            a.real.min(b.real),
            a.real.max(b.real),
            a.imag.min(b.imag),
            a.imag.max(b.imag),
        )
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn re_width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn im_height(&self) -> f64 {
        self.im_max - self.im_min
    }

    /// Width-to-height ratio of the region.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.re_width() / self.im_height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let rect = ComplexRect::new(-2.0, 2.0, -2.0, 2.0).unwrap();

        assert_eq!(rect.re_min(), -2.0);
        assert_eq!(rect.re_max(), 2.0);
        assert_eq!(rect.im_min(), -2.0);
        assert_eq!(rect.im_max(), 2.0);
        assert_eq!(rect.re_width(), 4.0);
        assert_eq!(rect.im_height(), 4.0);
    }

    #[test]
    fn test_extents_must_be_positive() {
        let zero_width = ComplexRect::new(1.0, 1.0, -1.0, 1.0);
        let zero_height = ComplexRect::new(-1.0, 1.0, 0.5, 0.5);
        let inverted_re = ComplexRect::new(1.0, -1.0, -1.0, 1.0);
        let inverted_im = ComplexRect::new(-1.0, 1.0, 1.0, -1.0);

        assert_eq!(
            zero_width,
            Err(ComplexRectError::InvalidBounds {
                re_width: 0.0,
                im_height: 2.0
            })
        );
        assert_eq!(
            zero_height,
            Err(ComplexRectError::InvalidBounds {
                re_width: 2.0,
                im_height: 0.0
            })
        );
        assert_eq!(
            inverted_re,
            Err(ComplexRectError::InvalidBounds {
                re_width: -2.0,
                im_height: 2.0
            })
        );
        assert_eq!(
            inverted_im,
            Err(ComplexRectError::InvalidBounds {
                re_width: 2.0,
                im_height: -2.0
            })
        );
    }

    #[test]
    fn test_bounds_must_be_finite() {
        assert_eq!(
            ComplexRect::new(f64::NEG_INFINITY, 2.0, -2.0, 2.0),
            Err(ComplexRectError::NonFiniteBounds)
        );
        assert_eq!(
            ComplexRect::new(-2.0, 2.0, f64::NAN, 2.0),
            Err(ComplexRectError::NonFiniteBounds)
        );
    }

    #[test]
    fn test_from_corners_normalises_order() {
        let a = Complex {
            real: 1.5,
            imag: -0.25,
        };
        let b = Complex {
            real: -0.5,
            imag: 1.0,
        };

        let rect = ComplexRect::from_corners(a, b).unwrap();

        assert_eq!(rect.re_min(), -0.5);
        assert_eq!(rect.re_max(), 1.5);
        assert_eq!(rect.im_min(), -0.25);
        assert_eq!(rect.im_max(), 1.0);
    }

    #[test]
    fn test_from_corners_rejects_shared_coordinate() {
        let a = Complex {
            real: 1.0,
            imag: 0.0,
        };
        let b = Complex {
            real: 1.0,
            imag: 2.0,
        };

        assert!(ComplexRect::from_corners(a, b).is_err());
    }

    #[test]
    fn test_aspect_ratio() {
        let rect = ComplexRect::new(-2.0, 2.0, -1.0, 1.0).unwrap();
        assert_eq!(rect.aspect_ratio(), 2.0);
    }
}
