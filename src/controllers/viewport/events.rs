use crate::core::data::point::Point;

/// Commands the input collaborator maps key presses onto. Keys with no
/// mapping simply produce no command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchToSearch,
    SwitchToZoom,
    DoubleIterations,
    HalveIterations,
    Reset,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Input events consumed by the viewport controller, decoupled from any
/// particular windowing library. Only the primary button does anything, and
/// only in zoom mode; every other press is a no-op.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved(Point),
    ButtonPressed(PointerButton),
    Command(Command),
}
