use crate::core::data::colour::Colour;
use crate::core::data::escape_field::EscapeField;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ShadeError {
    CountExceedsLimit { count: u32, iteration_limit: u32 },
}

impl fmt::Display for ShadeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CountExceedsLimit {
                count,
                iteration_limit,
            } => {
                write!(
                    f,
                    "escape count {} exceeds iteration limit {}",
                    count, iteration_limit
                )
            }
        }
    }
}

impl Error for ShadeError {}

/// Maps remaining-iteration counts onto a greyscale ramp: bounded points
/// (count 0) are black, instant escapes (count = limit) are white.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GreyscaleShade {
    iteration_limit: u32,
}

impl GreyscaleShade {
    #[must_use]
    pub fn new(iteration_limit: u32) -> Self {
        Self { iteration_limit }
    }

    pub fn map(&self, count: u32) -> Result<Colour, ShadeError> {
        if count > self.iteration_limit {
            return Err(ShadeError::CountExceedsLimit {
                count,
                iteration_limit: self.iteration_limit,
            });
        }

        if count == 0 {
            return Ok(Colour::BLACK);
        }

        let t = f64::from(count) / f64::from(self.iteration_limit);
        let level = (t * 255.0) as u8;

        Ok(Colour {
            r: level,
            g: level,
            b: level,
        })
    }
}

/// Shades a whole field into a packed RGB byte buffer, row-major to match
/// the field layout.
pub fn shade_field(field: &EscapeField, shade: &GreyscaleShade) -> Result<Vec<u8>, ShadeError> {
    let mut bytes = Vec::with_capacity(field.cells().len() * 3);

    for y in 0..field.resolution().height() {
        let row = field
            .row(y)
            .expect("row index is bounded by the field's own height");

        for &count in row {
            let colour = shade.map(count)?;
            bytes.extend_from_slice(&[colour.r, colour.g, colour.b]);
        }
    }

    Ok(bytes)
}
