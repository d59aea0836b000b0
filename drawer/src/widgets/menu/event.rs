/// Events handled by the drawer reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MenuEvent {
    /// Toggle requested by the header control.
    ToggleRequested,
    /// Tap on the dimmed backdrop.
    BackdropPressed,
}
