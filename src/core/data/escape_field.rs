use crate::core::data::resolution::Resolution;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeFieldError {
    SizeMismatch {
        expected_cells: usize,
        actual_cells: usize,
    },
}

impl fmt::Display for EscapeFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected_cells,
                actual_cells,
            } => {
                write!(
                    f,
                    "resolution expects {} cells but data holds {}",
                    expected_cells, actual_cells
                )
            }
        }
    }
}

impl Error for EscapeFieldError {}

/// Per-frame 2-D field of remaining iteration counts, row-major with row 0
/// at the top of the display. Cell values lie in `[0, iteration_limit]`:
/// fast escapes store values near the limit, bounded points store 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeField {
    resolution: Resolution,
    cells: Vec<u32>,
}

impl EscapeField {
    pub fn from_cells(resolution: Resolution, cells: Vec<u32>) -> Result<Self, EscapeFieldError> {
        let expected_cells = resolution.pixel_count();

        if cells.len() != expected_cells {
            return Err(EscapeFieldError::SizeMismatch {
                expected_cells,
                actual_cells: cells.len(),
            });
        }

        Ok(Self { resolution, cells })
    }

    #[must_use]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    #[must_use]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Cell at column `x`, row `y`; `None` outside the resolution.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.resolution.width() || y >= self.resolution.height() {
            return None;
        }

        let index = y as usize * self.resolution.width() as usize + x as usize;
        Some(self.cells[index])
    }

    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u32]> {
        if y >= self.resolution.height() {
            return None;
        }

        let width = self.resolution.width() as usize;
        let start = y as usize * width;
        Some(&self.cells[start..start + width])
    }
}
