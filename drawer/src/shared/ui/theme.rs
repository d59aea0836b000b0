use iced::theme::Palette;
use iced::{Color, Theme};
use thiserror::Error;

/// Error raised when a palette entry is not a `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("color '{0}' is not of the form #RRGGBB")]
pub(crate) struct ColorParseError(String);

/// Parse a `#RRGGBB` hex string into an iced color.
pub(crate) fn parse_hex_color(value: &str) -> Result<Color, ColorParseError> {
    let malformed = || ColorParseError(value.to_string());

    let digits = value.strip_prefix('#').ok_or_else(malformed)?;
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(malformed());
    }

    let channel = |at: usize| {
        u8::from_str_radix(&digits[at..at + 2], 16).map_err(|_| malformed())
    };

    Ok(Color::from_rgb8(channel(0)?, channel(2)?, channel(4)?))
}

/// Hex color palette for the app chrome and drawer surfaces.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) red: String,
    pub(crate) green: String,
    pub(crate) yellow: String,
    pub(crate) blue: String,
    pub(crate) dim_foreground: String,
    pub(crate) dim_white: String,
    pub(crate) overlay: String,
    pub(crate) scrim: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            red: String::from("#E06C75"),
            green: String::from("#98C379"),
            yellow: String::from("#E5C07B"),
            blue: String::from("#4FA6ED"),
            dim_foreground: String::from("#6B7280"),
            dim_white: String::from("#6C7385"),
            overlay: String::from("#232530"),
            scrim: String::from("#000000"),
        }
    }
}

/// Palette resolved into iced colors.
#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) red: Color,
    pub(crate) green: Color,
    pub(crate) yellow: Color,
    pub(crate) blue: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) dim_white: Color,
    pub(crate) overlay: Color,
    pub(crate) scrim: Color,
}

/// Stand-in for palette entries that fail to parse.
const FALLBACK_COLOR: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

fn resolve_color(value: &str) -> Color {
    parse_hex_color(value).unwrap_or_else(|err| {
        log::warn!("palette entry replaced with fallback: {err}");
        FALLBACK_COLOR
    })
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: resolve_color(&p.foreground),
            background: resolve_color(&p.background),
            red: resolve_color(&p.red),
            green: resolve_color(&p.green),
            yellow: resolve_color(&p.yellow),
            blue: resolve_color(&p.blue),
            dim_foreground: resolve_color(&p.dim_foreground),
            dim_white: resolve_color(&p.dim_white),
            overlay: resolve_color(&p.overlay),
            scrim: resolve_color(&p.scrim),
        }
    }
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        let palette = ColorPalette::default();

        Self {
            id: String::from("default"),
            iced_palette: IcedColorPalette::from(&palette),
        }
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.blue,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self { theme }
    }
}

/// Manages the current global theme.
#[derive(Debug, Clone)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn new() -> Self {
        Self {
            current: AppTheme::default(),
        }
    }

    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}
