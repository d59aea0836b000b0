use iced::{Subscription, window};

use super::{App, AppEvent};

/// Build the active subscription set from current app state.
pub(super) fn subscription(app: &App) -> Subscription<AppEvent> {
    let mut subs = Vec::new();

    // Frame ticks only while the drawer transition is in flight.
    if app.widgets.menu.is_animating(app.now) {
        subs.push(window::frames().map(AppEvent::AnimationTick));
    }

    Subscription::batch(subs)
}
