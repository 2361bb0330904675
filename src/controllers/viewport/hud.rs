use crate::controllers::viewport::mode::Mode;
use crate::controllers::viewport::state::ViewportState;
use crate::core::data::point::Point;

/// Pixel-space rectangle from the first zoom click to the current pointer,
/// for the display collaborator to outline. Corners are in click order and
/// may be in any relative position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OutlineRect {
    pub start: Point,
    pub current: Point,
}

/// Per-frame status payload for the HUD collaborator: plain text lines plus
/// an optional selection outline.
#[derive(Debug, Clone, PartialEq)]
pub struct HudSnapshot {
    pub lines: Vec<String>,
    pub outline: Option<OutlineRect>,
}

impl HudSnapshot {
    #[must_use]
    pub fn from_state(state: &ViewportState) -> Self {
        let seed = state.seed();
        let region = state.region();

        let mut lines = vec![
            format!("mode: {}", state.mode().display_name()),
            format!("seed: real, imaginary: {:.5}, {:.5}", seed.real, seed.imag),
            format!("real range: {:.5} - {:.5}", region.re_min(), region.re_max()),
            format!(
                "imaginary range: {:.5} - {:.5}",
                region.im_min(),
                region.im_max()
            ),
            format!("iteration limit: {}", state.iteration_limit()),
        ];

        let mut outline = None;

        if state.mode() == Mode::Zoom {
            let cursor = state.zoom_cursor();
            lines.push(format!(
                "zoom real: {}, imaginary: {}",
                cursor.real, cursor.imag
            ));

            if let Some(pending) = state.pending_zoom() {
                lines.push(format!(
                    "zoom start real: {}, imaginary: {}",
                    pending.start.real, pending.start.imag
                ));
                outline = Some(OutlineRect {
                    start: pending.start_pixel,
                    current: state.pointer_pixel(),
                });
            }
        }

        Self { lines, outline }
    }
}
