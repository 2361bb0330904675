//! Viewport controller for interactive Julia-set exploration.
//!
//! Owns all explorer state (region, seed, iteration limit, mode, pending
//! zoom selection) and turns abstract input events into the next frame's
//! engine parameters. The display collaborator drives it through
//! [`ViewportController::advance_frame`] and consumes the returned escape
//! field plus HUD payload; no windowing concern leaks in here.

pub mod controller;
pub mod events;
pub mod hud;
pub mod mode;
pub mod pending_zoom;
pub mod state;

pub use controller::{FrameOutput, ViewportController};
pub use events::{Command, InputEvent, PointerButton};
pub use hud::{HudSnapshot, OutlineRect};
pub use mode::Mode;
pub use pending_zoom::PendingZoom;
pub use state::ViewportState;
