pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod escape_field;
pub mod point;
pub mod resolution;
