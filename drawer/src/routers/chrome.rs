use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::chrome::{ChromeEffect, ChromeEvent};
use crate::widgets::menu::MenuEvent;

/// Route a chrome event to the widget reducer or app-level effects.
pub(crate) fn route(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::Ui(event) => {
            app.widgets.chrome.reduce(event).map(AppEvent::Chrome)
        },
        ChromeEvent::Effect(effect) => route_effect(effect),
    }
}

fn route_effect(effect: ChromeEffect) -> Task<AppEvent> {
    match effect {
        ChromeEffect::ToggleMenu => {
            Task::done(AppEvent::Menu(MenuEvent::ToggleRequested))
        },
    }
}
