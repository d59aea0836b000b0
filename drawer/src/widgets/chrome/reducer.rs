use iced::Task;

use super::event::{ChromeEffect, ChromeEvent, ChromeUiEvent};

/// Reduce a chrome UI event into effect tasks. The chrome widget keeps no
/// state of its own; every intent maps to an app-level effect.
pub(crate) fn reduce(event: ChromeUiEvent) -> Task<ChromeEvent> {
    Task::done(ChromeEvent::Effect(effect_for(event)))
}

fn effect_for(event: ChromeUiEvent) -> ChromeEffect {
    match event {
        ChromeUiEvent::MenuTogglePressed => ChromeEffect::ToggleMenu,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_toggle_press_maps_to_toggle_effect() {
        assert_eq!(
            effect_for(ChromeUiEvent::MenuTogglePressed),
            ChromeEffect::ToggleMenu
        );
    }
}
