use iced::widget::{Space, Stack, container, row, text};
use iced::{Element, Length, alignment};

use super::super::event::{ChromeEvent, ChromeUiEvent};
use crate::components::primitive::icon_button::{
    IconButtonProps, view as icon_button_view,
};
use crate::icons::MENU_TOGGLE;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const ACTION_BAR_HEIGHT: f32 = 48.0;
const ACTION_BAR_BUTTON_SIZE: f32 = 32.0;
const ACTION_BAR_ICON_SIZE: f32 = 20.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 8.0;

/// Props for rendering the header bar.
#[derive(Debug, Clone)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the header bar with the drawer toggle control.
pub(crate) fn view<'a>(props: ActionBarProps<'a>) -> Element<'a, ChromeEvent> {
    let palette = props.theme.theme.iced_palette();
    let foreground = palette.foreground;
    let background = palette.overlay;

    let toggle_button = icon_button_view(IconButtonProps {
        icon: MENU_TOGGLE,
        theme: props.theme,
        size: ACTION_BAR_BUTTON_SIZE,
        icon_size: ACTION_BAR_ICON_SIZE,
    })
    .map(|_| ChromeEvent::Ui(ChromeUiEvent::MenuTogglePressed));

    let left_controls = container(toggle_button)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING]);

    let center_zone = container(
        text(props.title)
            .size(props.fonts.ui.size)
            .font(props.fonts.ui.font_type),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        text_color: Some(foreground),
        ..Default::default()
    });

    let base_row = row![left_controls, Space::new().width(Length::Fill)]
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let content = Stack::new().push(center_zone).push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(background.into()),
            ..Default::default()
        })
        .into()
}
