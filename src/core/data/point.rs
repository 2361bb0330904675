/// Pixel-space coordinate, as delivered by the pointer collaborator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}
