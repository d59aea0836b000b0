use std::time::Instant;

use iced::Task;

use super::event::MenuEvent;
use super::state::MenuState;

/// Read-only context for drawer reduction.
pub(crate) struct MenuCtx {
    /// Instant at which the triggering interaction happened.
    pub(crate) now: Instant,
}

/// Reduce a drawer event into state updates. Both affordances flip the same
/// cell; they only differ in where the tap landed.
pub(crate) fn reduce(
    state: &mut MenuState,
    event: MenuEvent,
    ctx: &MenuCtx,
) -> Task<MenuEvent> {
    match event {
        MenuEvent::ToggleRequested => {
            state.toggle(ctx.now);
            Task::none()
        },
        MenuEvent::BackdropPressed => {
            state.toggle(ctx.now);
            Task::none()
        },
    }
}
