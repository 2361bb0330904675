use crate::controllers::viewport::mode::Mode;
use crate::controllers::viewport::pending_zoom::PendingZoom;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::resolution::Resolution;
use crate::core::util::pixel_to_plane::pointer_to_plane;

pub const DEFAULT_ITERATION_LIMIT: u32 = 32;

pub(crate) fn default_region() -> ComplexRect {
    ComplexRect::new(-2.0, 2.0, -2.0, 2.0).expect("default viewport region is valid")
}

/// All mutable explorer state in one value: the visible region, the seed
/// constant, the iteration limit, the interaction mode, and any in-progress
/// zoom selection. Every transition swaps complete values in, so the state is
/// consistent at every frame boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    region: ComplexRect,
    seed: Complex,
    iteration_limit: u32,
    mode: Mode,
    zoom_cursor: Complex,
    pending_zoom: Option<PendingZoom>,
    pointer_pixel: Point,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            region: default_region(),
            seed: Complex::ZERO,
            iteration_limit: DEFAULT_ITERATION_LIMIT,
            mode: Mode::default(),
            zoom_cursor: Complex::ZERO,
            pending_zoom: None,
            pointer_pixel: Point { x: 0, y: 0 },
        }
    }
}

impl ViewportState {
    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    #[must_use]
    pub fn seed(&self) -> Complex {
        self.seed
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn zoom_cursor(&self) -> Complex {
        self.zoom_cursor
    }

    #[must_use]
    pub fn pending_zoom(&self) -> Option<PendingZoom> {
        self.pending_zoom
    }

    #[must_use]
    pub fn pointer_pixel(&self) -> Point {
        self.pointer_pixel
    }

    /// Maps the pointer onto the plane through the same mapping the engine
    /// samples with, so the seed shown is the seed rendered. Updates the seed
    /// in search mode, the zoom cursor in zoom mode; never both. A pointer
    /// outside the surface changes nothing.
    pub fn on_pointer_move(&mut self, pointer: Point, resolution: Resolution) {
        let Some(plane_point) = pointer_to_plane(pointer, resolution, self.region) else {
            return;
        };
        self.pointer_pixel = pointer;

        match self.mode {
            Mode::Search => self.seed = plane_point,
            Mode::Zoom => self.zoom_cursor = plane_point,
        }
    }

    /// Switching modes always abandons an in-progress selection, even when
    /// switching to the mode already active.
    pub fn on_mode_switch(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending_zoom = None;
    }

    pub fn on_iteration_increase(&mut self) {
        self.iteration_limit = self.iteration_limit.saturating_mul(2);
    }

    pub fn on_iteration_decrease(&mut self) {
        self.iteration_limit = (self.iteration_limit / 2).max(1);
    }

    /// Restores the default region and iteration limit and abandons any
    /// selection. Mode and seed are deliberately left alone.
    pub fn on_reset(&mut self) {
        self.region = default_region();
        self.iteration_limit = DEFAULT_ITERATION_LIMIT;
        self.pending_zoom = None;
    }

    /// First click starts a selection at the zoom cursor; second click
    /// commits it, unless it shares a coordinate with the start (a degenerate
    /// rectangle), which discards the selection and keeps the viewport as-is.
    pub fn on_zoom_click(&mut self, resolution: Resolution) {
        if self.mode != Mode::Zoom {
            return;
        }

        let Some(pending) = self.pending_zoom.take() else {
            self.pending_zoom = Some(PendingZoom {
                start: self.zoom_cursor,
                start_pixel: self.pointer_pixel,
            });
            return;
        };

        // from_corners fails exactly when the two clicks share a real or
        // imaginary coordinate, which is the degenerate-selection discard.
        if let Ok(selected) = ComplexRect::from_corners(pending.start, self.zoom_cursor) {
            self.region = correct_aspect(selected, resolution);
        }
    }
}

/// One-sided aspect correction: a selection wider, relative to its height,
/// than the display grows its imaginary extent upward until the ratios match.
/// The real bounds and `im_min` are never touched and nothing ever shrinks,
/// so narrower-than-display selections pass through unmodified.
fn correct_aspect(selected: ComplexRect, resolution: Resolution) -> ComplexRect {
    if selected.aspect_ratio() <= resolution.aspect_ratio() {
        return selected;
    }

    let im_max = selected.im_min() + selected.re_width() / resolution.aspect_ratio();

    ComplexRect::new(selected.re_min(), selected.re_max(), selected.im_min(), im_max)
        .expect("growing the imaginary extent keeps the rect valid")
}
