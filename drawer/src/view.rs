use iced::widget::{Space, column, container, text};
use iced::{Element, Length, Theme, alignment};

use super::{App, AppEvent};
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::view::action_bar;
use crate::widgets::menu::view::overlay;

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props = ThemeProps::new(theme);

    let vm = app.widgets.menu.vm(app.now);

    let base: Element<'_, AppEvent, Theme, iced::Renderer> =
        column![view_header(app, theme_props), view_content(theme_props)]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![base];

    // Drawer overlay: mounted only while open or mid-transition, so the
    // backdrop tap target disappears together with the panel.
    if vm.is_active() {
        layers.push(
            overlay::view(overlay::MenuOverlayProps {
                vm,
                theme: theme_props,
                fonts: &app.fonts,
            })
            .map(AppEvent::Menu),
        );
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: action bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let mut separator_color = palette.dim_white;
    separator_color.a = SEPARATOR_ALPHA;

    let action_bar = action_bar::view(action_bar::ActionBarProps {
        title: "Drawer",
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(AppEvent::Chrome);

    let separator = container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    column![action_bar, separator]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

/// Render the primary content area.
fn view_content<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let foreground = theme_props.theme.iced_palette().foreground;

    container(text("Home"))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}
