use rayon::prelude::*;

use crate::core::data::escape_field::EscapeField;
use crate::core::engine::cancellation::{
    CANCEL_CHECK_INTERVAL_CELLS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::engine::kernel::JuliaKernel;

/// Generates the full escape field sequentially, row-major.
#[must_use]
pub fn generate_field(kernel: &JuliaKernel) -> EscapeField {
    let resolution = kernel.resolution();

    let cells: Vec<u32> = (0..resolution.height())
        .flat_map(|row| (0..resolution.width()).map(move |column| (column, row)))
        .map(|(column, row)| kernel.compute(column, row))
        .collect();

    EscapeField::from_cells(resolution, cells).expect("kernel yields one cell per pixel")
}

/// Generates the escape field with rows distributed over rayon's work-stealing
/// scheduler. Cell values are bit-identical to [`generate_field`]: the
/// recurrence is deterministic and no state is shared across cells.
#[must_use]
pub fn generate_field_rayon(kernel: &JuliaKernel) -> EscapeField {
    match generate_field_rayon_cancelable(kernel, &NeverCancel) {
        Ok(field) => field,
        // NeverCancel never signals, so this branch is unreachable
        Err(Cancelled) => unreachable!("NeverCancel token cancelled a generation"),
    }
}

/// Cancel-aware parallel generation.
///
/// Each row checks the token at its start and every
/// [`CANCEL_CHECK_INTERVAL_CELLS`] cells, so a cancelled frame stops promptly
/// instead of finishing millions of pixels. A cancelled generation returns
/// nothing partial; callers keep showing the previous frame's field.
pub fn generate_field_rayon_cancelable<C: CancelToken>(
    kernel: &JuliaKernel,
    cancel: &C,
) -> Result<EscapeField, Cancelled> {
    let resolution = kernel.resolution();
    let width = resolution.width();

    let rows: Result<Vec<Vec<u32>>, Cancelled> = (0..resolution.height())
        .into_par_iter()
        .map(|row| {
            let mut cells = Vec::with_capacity(width as usize);

            for column in 0..width {
                if column as usize % CANCEL_CHECK_INTERVAL_CELLS == 0 && cancel.is_cancelled() {
                    return Err(Cancelled);
                }

                cells.push(kernel.compute(column, row));
            }

            Ok(cells)
        })
        .collect();

    let cells: Vec<u32> = rows?.into_iter().flatten().collect();

    Ok(EscapeField::from_cells(resolution, cells).expect("kernel yields one cell per pixel"))
}
