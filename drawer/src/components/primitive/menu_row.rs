use iced::widget::{container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::shared::ui::theme::ThemeProps;

/// Layout metrics for a drawer row.
#[derive(Debug, Clone, Copy)]
struct MenuRowMetrics {
    height: f32,
    font_size: f32,
    icon_size: f32,
    horizontal_padding: f32,
    spacing: f32,
}

impl Default for MenuRowMetrics {
    fn default() -> Self {
        Self {
            height: 44.0,
            font_size: 15.0,
            icon_size: 18.0,
            horizontal_padding: 16.0,
            spacing: 12.0,
        }
    }
}

/// Props for rendering a drawer row.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuRowProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) label: &'a str,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a static icon+label row. Rows carry no behavior, so the message
/// type is whatever the caller composes with.
pub(crate) fn view<'a, Message: 'a>(
    props: MenuRowProps<'a>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette();
    let metrics = MenuRowMetrics::default();
    let foreground = palette.foreground;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(metrics.icon_size))
        .height(Length::Fixed(metrics.icon_size))
        .style(move |_, _| svg::Style {
            color: Some(foreground),
        });

    let label = text(props.label).size(metrics.font_size);

    container(
        row![icon, label]
            .spacing(metrics.spacing)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fill)
    .height(Length::Fixed(metrics.height))
    .padding([0.0, metrics.horizontal_padding])
    .align_y(alignment::Vertical::Center)
    .style(move |_| iced::widget::container::Style {
        text_color: Some(foreground),
        ..Default::default()
    })
    .into()
}
