pub(crate) mod event;
mod reducer;
pub(crate) mod view;

pub(crate) use event::{ChromeEffect, ChromeEvent, ChromeUiEvent};
use iced::Task;

/// Header bar widget. Stateless: every intent reduces straight to an
/// app-level effect.
pub(crate) struct ChromeWidget;

impl ChromeWidget {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Reduce a UI intent into effect events.
    pub(crate) fn reduce(
        &mut self,
        event: ChromeUiEvent,
    ) -> Task<ChromeEvent> {
        reducer::reduce(event)
    }
}
