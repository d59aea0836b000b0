use std::time::Instant;

use iced::Task;

use crate::app::{App, AppEvent};
use crate::widgets::menu::{MenuCtx, MenuEvent};

/// Route a drawer event through its reducer. The render clock is refreshed
/// first so the transition starts from the interaction instant rather than
/// the last animation frame.
pub(crate) fn route(app: &mut App, event: MenuEvent) -> Task<AppEvent> {
    app.now = Instant::now();
    let ctx = MenuCtx { now: app.now };

    app.widgets.menu.reduce(event, &ctx).map(AppEvent::Menu)
}
