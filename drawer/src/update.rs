use iced::Task;

use super::{App, AppEvent};
use crate::routers;

/// Thin dispatch: route each event to its owning router or handler.
pub(super) fn update(app: &mut App, event: AppEvent) -> Task<AppEvent> {
    match event {
        // Chrome widget
        AppEvent::Chrome(event) => routers::chrome::route(app, event),
        // Drawer widget
        AppEvent::Menu(event) => routers::menu::route(app, event),
        // Direct operations
        AppEvent::AnimationTick(now) => {
            app.now = now;
            Task::none()
        },
    }
}
