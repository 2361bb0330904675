use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;

/// Maps a grid cell to its complex-plane sample point.
///
/// Column `j` of `[0, width)` maps half-open onto `[re_min, re_max)`, so the
/// last column lands one step short of `re_max`. Row 0 is the top of the
/// display and carries the maximum imaginary part; the imaginary part
/// decreases as the row index grows. The viewport controller and the
/// escape-time engine both use this function, so the seed shown to the user
/// is exactly the point that gets rendered.
#[must_use]
pub fn grid_to_plane(
    column: u32,
    row: u32,
    resolution: Resolution,
    region: ComplexRect,
) -> Complex {
    let real = region.re_min()
        + region.re_width() * f64::from(column) / f64::from(resolution.width());
    let imag = region.im_max()
        - region.im_height() * f64::from(row) / f64::from(resolution.height());

    Complex { real, imag }
}

/// Maps a pointer position to the plane, or `None` when the pointer lies
/// outside the surface. Out-of-surface positions never reach a state
/// transition, so they can never move the seed or the zoom cursor.
#[must_use]
pub fn pointer_to_plane(
    pointer: Point,
    resolution: Resolution,
    region: ComplexRect,
) -> Option<Complex> {
    if pointer.x < 0 || pointer.y < 0 {
        return None;
    }

    // Compare in i64: both dimensions can exceed i32::MAX.
    if i64::from(pointer.x) >= i64::from(resolution.width())
        || i64::from(pointer.y) >= i64::from(resolution.height())
    {
        return None;
    }

    Some(grid_to_plane(
        pointer.x as u32,
        pointer.y as u32,
        resolution,
        region,
    ))
}
