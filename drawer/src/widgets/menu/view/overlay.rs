use iced::widget::{Space, column, container, mouse_area, pin, text};
use iced::{Element, Length, alignment, mouse};

use super::super::event::MenuEvent;
use super::super::model::{FOOTER_LINES, MENU_ENTRIES, MenuViewModel};
use crate::components::primitive::menu_row;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const PANEL_TOP_PADDING: f32 = 12.0;
const FOOTER_BOTTOM_PADDING: f32 = 16.0;
const FOOTER_SPACING: f32 = 2.0;
const FOOTER_FONT_SCALE: f32 = 0.8;

/// Props for rendering the drawer overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuOverlayProps<'a> {
    pub(crate) vm: MenuViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the dimmed backdrop with the sliding panel above it. The backdrop
/// doubles as the dismiss layer.
pub(crate) fn view<'a>(props: MenuOverlayProps<'a>) -> Element<'a, MenuEvent> {
    let palette = props.theme.theme.iced_palette();

    let mut scrim = palette.scrim;
    scrim.a = props.vm.backdrop_opacity;

    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(scrim.into()),
                ..Default::default()
            }),
    )
    .on_press(MenuEvent::BackdropPressed)
    .interaction(mouse::Interaction::Pointer);

    let positioned_panel = pin(view_panel(props))
        .x(props.vm.panel_offset)
        .width(Length::Fill)
        .height(Length::Fill);

    iced::widget::stack!(backdrop, positioned_panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the panel itself: static rows plus the footer caption.
fn view_panel<'a>(props: MenuOverlayProps<'a>) -> Element<'a, MenuEvent> {
    let palette = props.theme.theme.iced_palette();
    let panel_background = palette.overlay;
    let foreground = palette.foreground;
    let dim_foreground = palette.dim_foreground;
    let footer_font_size = props.fonts.ui.size * FOOTER_FONT_SCALE;

    let rows = MENU_ENTRIES
        .iter()
        .fold(iced::widget::Column::new(), |col, entry| {
            col.push(menu_row::view(menu_row::MenuRowProps {
                icon: entry.icon,
                label: entry.label,
                theme: props.theme,
            }))
        })
        .width(Length::Fill);

    let footer = FOOTER_LINES
        .iter()
        .fold(iced::widget::Column::new(), |col, line| {
            col.push(text(*line).size(footer_font_size))
        })
        .spacing(FOOTER_SPACING)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let footer = container(footer)
        .width(Length::Fill)
        .padding(iced::Padding {
            bottom: FOOTER_BOTTOM_PADDING,
            ..iced::Padding::ZERO
        })
        .style(move |_| iced::widget::container::Style {
            text_color: Some(dim_foreground),
            ..Default::default()
        });

    let body = column![
        rows,
        Space::new().width(Length::Fill).height(Length::Fill),
        footer
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    container(body)
        .width(Length::Fixed(props.vm.panel_width))
        .height(Length::Fill)
        .padding(iced::Padding {
            top: PANEL_TOP_PADDING,
            ..iced::Padding::ZERO
        })
        .style(move |_| iced::widget::container::Style {
            background: Some(panel_background.into()),
            text_color: Some(foreground),
            ..Default::default()
        })
        .into()
}
