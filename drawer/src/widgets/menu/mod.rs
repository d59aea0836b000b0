pub(crate) mod event;
pub(crate) mod model;
mod reducer;
mod state;
pub(crate) mod view;

use std::time::Instant;

pub(crate) use event::MenuEvent;
use iced::Task;
pub(crate) use model::MenuViewModel;
pub(crate) use reducer::MenuCtx;
use state::MenuState;

use crate::geometry;

/// Slide-in drawer widget owning the open/close cell.
pub(crate) struct MenuWidget {
    state: MenuState,
}

impl MenuWidget {
    /// Construct a closed drawer for the given sampled screen width.
    pub(crate) fn new(screen_width: f32) -> Self {
        Self {
            state: MenuState::new(screen_width),
        }
    }

    /// Reduce a drawer event into state updates.
    pub(crate) fn reduce(
        &mut self,
        event: MenuEvent,
        ctx: &MenuCtx,
    ) -> Task<MenuEvent> {
        reducer::reduce(&mut self.state, event, ctx)
    }

    /// Build a read-only view model for the presentation layer: every style
    /// is a pure function of the open/close cell at one instant.
    pub(crate) fn vm(&self, now: Instant) -> MenuViewModel {
        let openness = self.state.openness(now);

        MenuViewModel {
            is_open: self.state.is_open(),
            is_animating: self.state.is_animating(now),
            backdrop_opacity: geometry::backdrop_opacity(openness),
            panel_offset: geometry::panel_offset(
                self.state.screen_width(),
                openness,
            ),
            panel_width: geometry::panel_width(self.state.screen_width()),
        }
    }

    /// Whether the open/close transition is still in flight.
    pub(crate) fn is_animating(&self, now: Instant) -> bool {
        self.state.is_animating(now)
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    const SCREEN_WIDTH: f32 = 420.0;

    fn toggle(widget: &mut MenuWidget, now: Instant) {
        let _ = widget.reduce(MenuEvent::ToggleRequested, &MenuCtx { now });
    }

    #[test]
    fn given_fresh_drawer_when_building_vm_then_closed_style_holds() {
        let widget = MenuWidget::new(SCREEN_WIDTH);

        let vm = widget.vm(Instant::now());

        assert!(!vm.is_open);
        assert!(!vm.is_active());
        assert_eq!(vm.backdrop_opacity, 0.0);
        assert_eq!(vm.panel_offset, -SCREEN_WIDTH);
        assert_eq!(vm.panel_width, SCREEN_WIDTH * 0.75);
    }

    #[test]
    fn given_open_drawer_when_transition_settles_then_open_style_holds() {
        let mut widget = MenuWidget::new(SCREEN_WIDTH);
        let start = Instant::now();
        toggle(&mut widget, start);

        let vm = widget.vm(start + Duration::from_secs(1));

        assert!(vm.is_open);
        assert_eq!(vm.backdrop_opacity, 0.7);
        assert_eq!(vm.panel_offset, 0.0);
    }

    #[test]
    fn given_closing_drawer_when_mid_transition_then_overlay_stays_mounted() {
        let mut widget = MenuWidget::new(SCREEN_WIDTH);
        let start = Instant::now();
        toggle(&mut widget, start);

        let reopened = start + Duration::from_secs(1);
        toggle(&mut widget, reopened);

        let vm = widget.vm(reopened + Duration::from_millis(50));

        assert!(!vm.is_open);
        assert!(vm.is_active());
    }

    #[test]
    fn given_any_openness_when_building_vm_then_panel_width_is_constant() {
        let mut widget = MenuWidget::new(SCREEN_WIDTH);
        let start = Instant::now();

        let closed_width = widget.vm(start).panel_width;
        toggle(&mut widget, start);
        let open_width =
            widget.vm(start + Duration::from_secs(1)).panel_width;

        assert_eq!(closed_width, open_width);
    }
}
