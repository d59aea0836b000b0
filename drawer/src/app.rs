#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};

use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::menu::{MenuEvent, MenuWidget};

pub(crate) const WINDOW_WIDTH: f32 = 420.0;
pub(crate) const WINDOW_HEIGHT: f32 = 760.0;

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    // Chrome widget
    Chrome(ChromeEvent),
    // Drawer widget
    Menu(MenuEvent),
    // Render clock while a transition is in flight
    AnimationTick(Instant),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: ChromeWidget,
    pub(crate) menu: MenuWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) widgets: Widgets,
    pub(crate) now: Instant,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let theme_manager = ThemeManager::new();
        let fonts = FontsConfig::default();

        // The drawer samples the screen width once; later viewport changes
        // do not re-measure the panel.
        let widgets = Widgets {
            chrome: ChromeWidget::new(),
            menu: MenuWidget::new(WINDOW_WIDTH),
        };

        let app = App {
            theme_manager,
            fonts,
            widgets,
            now: Instant::now(),
        };

        (app, Task::none())
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from("Drawer")
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
