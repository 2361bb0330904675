use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for ResolutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "resolution must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ResolutionError {}

/// Output resolution in pixels, validated once at the boundary so the engine
/// never sees a zero or negative dimension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    pub fn new(width: i64, height: i64) -> Result<Self, ResolutionError> {
        if width <= 0 || height <= 0 || width > u32::MAX as i64 || height > u32::MAX as i64 {
            return Err(ResolutionError::InvalidSize { width, height });
        }

        Ok(Self {
            width: width as u32,
            height: height as u32,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Display width-to-height ratio, used by the zoom aspect correction.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let resolution = Resolution::new(800, 600).unwrap();

        assert_eq!(resolution.width(), 800);
        assert_eq!(resolution.height(), 600);
        assert_eq!(resolution.pixel_count(), 480_000);
    }

    #[test]
    fn test_dimensions_must_be_positive() {
        assert_eq!(
            Resolution::new(0, 600),
            Err(ResolutionError::InvalidSize {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            Resolution::new(800, 0),
            Err(ResolutionError::InvalidSize {
                width: 800,
                height: 0
            })
        );
        assert_eq!(
            Resolution::new(-800, -600),
            Err(ResolutionError::InvalidSize {
                width: -800,
                height: -600
            })
        );
    }

    #[test]
    fn test_aspect_ratio() {
        let resolution = Resolution::new(1600, 900).unwrap();
        assert!((resolution.aspect_ratio() - 16.0 / 9.0).abs() < 1e-12);
    }
}
