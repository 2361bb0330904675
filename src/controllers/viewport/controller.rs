use crate::controllers::viewport::events::{Command, InputEvent, PointerButton};
use crate::controllers::viewport::hud::HudSnapshot;
use crate::controllers::viewport::mode::Mode;
use crate::controllers::viewport::state::ViewportState;
use crate::core::data::escape_field::EscapeField;
use crate::core::data::resolution::Resolution;
use crate::core::engine::cancellation::{Cancelled, Deadline};
use crate::core::engine::generate::{generate_field_rayon, generate_field_rayon_cancelable};
use crate::core::engine::kernel::JuliaKernel;
use std::time::Duration;

/// One frame's output for the display collaborator: the escape field to
/// blit, the HUD payload, and whether a quit command arrived.
#[derive(Debug)]
pub struct FrameOutput<'a> {
    pub field: &'a EscapeField,
    pub hud: HudSnapshot,
    pub quit: bool,
}

/// Drives the explorer one frame at a time: applies input events to the
/// viewport state, invokes the escape-time engine exactly once (blocking, so
/// a second invocation can never overlap the first), and hands back the field
/// plus HUD payload. The externally owned loop decides pacing.
#[derive(Debug, Default)]
pub struct ViewportController {
    state: ViewportState,
    last_field: Option<EscapeField>,
}

impl ViewportController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ViewportState {
        &self.state
    }

    /// Applies `events` in arrival order, renders the frame, and returns the
    /// output. With a frame budget, a generation that overruns is cancelled
    /// wholesale and the previous frame's field is returned unchanged; state
    /// transitions still took effect, so the next frame picks them up.
    pub fn advance_frame(
        &mut self,
        events: &[InputEvent],
        resolution: Resolution,
        frame_budget: Option<Duration>,
    ) -> FrameOutput<'_> {
        let mut quit = false;

        for event in events {
            match event {
                InputEvent::PointerMoved(pointer) => {
                    self.state.on_pointer_move(*pointer, resolution);
                }
                InputEvent::ButtonPressed(PointerButton::Primary) => {
                    self.state.on_zoom_click(resolution);
                }
                InputEvent::ButtonPressed(_) => {}
                InputEvent::Command(command) => match command {
                    Command::SwitchToSearch => self.state.on_mode_switch(Mode::Search),
                    Command::SwitchToZoom => self.state.on_mode_switch(Mode::Zoom),
                    Command::DoubleIterations => self.state.on_iteration_increase(),
                    Command::HalveIterations => self.state.on_iteration_decrease(),
                    Command::Reset => self.state.on_reset(),
                    Command::Quit => quit = true,
                },
            }
        }

        let kernel = JuliaKernel::new(
            resolution,
            self.state.region(),
            self.state.seed(),
            self.state.iteration_limit(),
        )
        .expect("viewport state keeps the iteration limit at 1 or above");

        let generated = match frame_budget {
            Some(budget) => generate_field_rayon_cancelable(&kernel, &Deadline::after(budget)),
            None => Ok(generate_field_rayon(&kernel)),
        };

        match generated {
            Ok(field) => self.last_field = Some(field),
            Err(Cancelled) => {
                // Keep showing the previous field. If there is none yet, or
                // the surface was resized since, fall back to a blank field.
                let reusable = self
                    .last_field
                    .as_ref()
                    .is_some_and(|field| field.resolution() == resolution);

                if !reusable {
                    self.last_field = Some(blank_field(resolution));
                }
            }
        }

        FrameOutput {
            field: self
                .last_field
                .as_ref()
                .expect("field was generated or backfilled this frame"),
            hud: HudSnapshot::from_state(&self.state),
            quit,
        }
    }
}

fn blank_field(resolution: Resolution) -> EscapeField {
    EscapeField::from_cells(resolution, vec![0; resolution.pixel_count()])
        .expect("zeroed cells match the resolution")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    fn resolution(width: i64, height: i64) -> Resolution {
        Resolution::new(width, height).unwrap()
    }

    #[test]
    fn test_advance_frame_produces_field_at_requested_resolution() {
        let mut controller = ViewportController::new();
        let resolution = resolution(8, 8);

        let output = controller.advance_frame(&[], resolution, None);

        assert_eq!(output.field.resolution(), resolution);
        assert!(!output.quit);
        assert_eq!(output.hud.lines.len(), 5);
    }

    #[test]
    fn test_events_are_applied_in_arrival_order() {
        let mut controller = ViewportController::new();
        let resolution = resolution(8, 8);

        let events = [
            InputEvent::Command(Command::DoubleIterations),
            InputEvent::Command(Command::DoubleIterations),
            InputEvent::Command(Command::HalveIterations),
            InputEvent::Command(Command::SwitchToZoom),
        ];
        let output = controller.advance_frame(&events, resolution, None);
        drop(output);

        assert_eq!(controller.state().iteration_limit(), 64);
        assert_eq!(controller.state().mode(), Mode::Zoom);
    }

    #[test]
    fn test_quit_command_is_reported() {
        let mut controller = ViewportController::new();

        let output = controller.advance_frame(
            &[InputEvent::Command(Command::Quit)],
            resolution(4, 4),
            None,
        );

        assert!(output.quit);
    }

    #[test]
    fn test_pointer_and_click_drive_a_zoom_commit() {
        let mut controller = ViewportController::new();
        let resolution = resolution(100, 100);

        let events = [
            InputEvent::Command(Command::SwitchToZoom),
            InputEvent::PointerMoved(Point { x: 25, y: 25 }),
            InputEvent::ButtonPressed(PointerButton::Primary),
            InputEvent::PointerMoved(Point { x: 75, y: 75 }),
            InputEvent::ButtonPressed(PointerButton::Primary),
        ];
        let output = controller.advance_frame(&events, resolution, None);
        drop(output);

        let region = controller.state().region();
        assert_eq!(region.re_min(), -1.0);
        assert_eq!(region.re_max(), 1.0);
    }

    #[test]
    fn test_non_primary_buttons_are_ignored() {
        let mut controller = ViewportController::new();
        let resolution = resolution(100, 100);

        let events = [
            InputEvent::Command(Command::SwitchToZoom),
            InputEvent::PointerMoved(Point { x: 25, y: 25 }),
            InputEvent::ButtonPressed(PointerButton::Secondary),
            InputEvent::ButtonPressed(PointerButton::Middle),
        ];
        let output = controller.advance_frame(&events, resolution, None);
        drop(output);

        assert_eq!(controller.state().pending_zoom(), None);
    }

    #[test]
    fn test_expired_budget_yields_blank_field_on_first_frame() {
        let mut controller = ViewportController::new();
        let resolution = resolution(64, 64);

        let output = controller.advance_frame(&[], resolution, Some(Duration::ZERO));

        assert_eq!(output.field.resolution(), resolution);
        assert!(output.field.cells().iter().all(|&count| count == 0));
    }

    #[test]
    fn test_cancelled_frame_reuses_previous_field() {
        let mut controller = ViewportController::new();
        let resolution = resolution(64, 64);

        let rendered = controller.advance_frame(&[], resolution, None).field.clone();
        let reused = controller
            .advance_frame(&[], resolution, Some(Duration::ZERO))
            .field
            .clone();

        assert_eq!(reused, rendered);
    }

    #[test]
    fn test_cancelled_frame_still_applies_state_transitions() {
        let mut controller = ViewportController::new();
        let resolution = resolution(64, 64);

        let output = controller.advance_frame(
            &[InputEvent::Command(Command::DoubleIterations)],
            resolution,
            Some(Duration::ZERO),
        );
        drop(output);

        assert_eq!(controller.state().iteration_limit(), 64);
    }

    #[test]
    fn test_resize_after_cancellation_backfills_blank_field() {
        let mut controller = ViewportController::new();

        let first = resolution(64, 64);
        let output = controller.advance_frame(&[], first, None);
        drop(output);

        let resized = resolution(32, 32);
        let output = controller.advance_frame(&[], resized, Some(Duration::ZERO));

        assert_eq!(output.field.resolution(), resized);
        assert!(output.field.cells().iter().all(|&count| count == 0));
    }

    #[test]
    fn test_generous_budget_completes_normally() {
        let mut controller = ViewportController::new();
        let resolution = resolution(16, 16);

        let budgeted = controller
            .advance_frame(&[], resolution, Some(Duration::from_secs(60)))
            .field
            .clone();
        let unbounded = controller.advance_frame(&[], resolution, None).field.clone();

        assert_eq!(budgeted, unbounded);
    }
}
