/// UI intents raised by the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeUiEvent {
    MenuTogglePressed,
}

/// Effects produced by the chrome reducer for app-level routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ChromeEffect {
    ToggleMenu,
}

/// Chrome event stream routed through the app update loop.
#[derive(Debug, Clone)]
pub(crate) enum ChromeEvent {
    /// Intent event reduced by the chrome widget.
    Ui(ChromeUiEvent),
    /// External effect orchestrated by app-level routing.
    Effect(ChromeEffect),
}
