pub mod controllers;
pub mod core;
pub mod storage;

pub use crate::controllers::snapshot::julia_snapshot;
pub use crate::controllers::viewport::{
    Command, FrameOutput, HudSnapshot, InputEvent, Mode, OutlineRect, PendingZoom, PointerButton,
    ViewportController, ViewportState,
};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape_field::EscapeField;
pub use crate::core::data::point::Point;
pub use crate::core::data::resolution::Resolution;
