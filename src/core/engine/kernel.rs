use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::resolution::Resolution;
use crate::core::util::pixel_to_plane::grid_to_plane;
use std::error::Error;
use std::fmt;

/// A point has escaped once its magnitude reaches 10. Compared as the square
/// so overflow to infinity still reads as an escape, never a fault.
pub const ESCAPE_RADIUS_SQUARED: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KernelError {
    ZeroIterationLimit,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroIterationLimit => {
                write!(f, "iteration limit must be at least 1")
            }
        }
    }
}

impl Error for KernelError {}

/// Remaining-iterations count for one plane point under `z ← z² + c`.
///
/// Starts a countdown at `iteration_limit` and stops the first time the
/// magnitude reaches the escape radius or the countdown hits zero. The value
/// returned is what is *left* on the counter, so quick escapes score close to
/// the limit and bounded points score 0.
#[must_use]
pub fn escape_time(z0: Complex, c: Complex, iteration_limit: u32) -> u32 {
    let mut z = z0;
    let mut remaining = iteration_limit;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && remaining > 0 {
        z = z * z + c;
        remaining -= 1;
    }

    remaining
}

/// One frame's escape-time parameters: region, seed, resolution, and limit.
///
/// Pure and stateless beyond its fields; `compute` has no cross-cell
/// dependency, so callers may evaluate cells in any order or in parallel and
/// still get bit-identical counts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaKernel {
    resolution: Resolution,
    region: ComplexRect,
    seed: Complex,
    iteration_limit: u32,
}

impl JuliaKernel {
    pub fn new(
        resolution: Resolution,
        region: ComplexRect,
        seed: Complex,
        iteration_limit: u32,
    ) -> Result<Self, KernelError> {
        if iteration_limit == 0 {
            return Err(KernelError::ZeroIterationLimit);
        }

        Ok(Self {
            resolution,
            region,
            seed,
            iteration_limit,
        })
    }

    #[must_use]
    pub fn compute(&self, column: u32, row: u32) -> u32 {
        let z0 = grid_to_plane(column, row, self.resolution, self.region);
        escape_time(z0, self.seed, self.iteration_limit)
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }
}
