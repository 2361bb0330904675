use crate::core::data::complex::Complex;
use crate::core::data::point::Point;

/// An in-progress two-click zoom selection: the plane point of the first
/// click plus its pixel position, kept for outline rendering until the
/// second click commits or discards the selection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PendingZoom {
    pub start: Complex,
    pub start_pixel: Point,
}
