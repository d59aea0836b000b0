use std::time::{Duration, Instant};

use iced::animation::{Animation, Easing};

/// Duration of the open/close transition.
const MENU_TRANSITION: Duration = Duration::from_millis(300);

/// Internal runtime state for the drawer.
#[derive(Debug)]
pub(super) struct MenuState {
    /// Open/closed cell; retargeting it mid-flight reverses the transition
    /// from wherever it currently is.
    open: Animation<bool>,
    /// Screen width sampled at startup. Later viewport changes do not
    /// re-measure the panel.
    screen_width: f32,
}

impl MenuState {
    pub(super) fn new(screen_width: f32) -> Self {
        Self {
            open: Animation::new(false)
                .duration(MENU_TRANSITION)
                .easing(Easing::EaseInOut),
            screen_width,
        }
    }

    /// Logical open/closed value (the transition target).
    pub(super) fn is_open(&self) -> bool {
        self.open.value()
    }

    pub(super) fn screen_width(&self) -> f32 {
        self.screen_width
    }

    /// Eased openness fraction in `[0, 1]` at the given instant.
    pub(super) fn openness(&self, now: Instant) -> f32 {
        self.open.interpolate(0.0, 1.0, now)
    }

    /// Whether the open/close transition is still in flight.
    pub(super) fn is_animating(&self, now: Instant) -> bool {
        self.open.is_animating(now)
    }

    /// Flip the open/closed value, retargeting any in-flight transition.
    pub(super) fn toggle(&mut self, now: Instant) {
        let next = !self.open.value();
        self.open.go_mut(next, now);
    }
}
