// Color Scheme Configuration - customizable panel and status colors
//
// A theme picks the palette. A [colors] table in config.toml replaces it;
// entries missing from the table take the dark palette's value.

use ratatui::style::Color;
use serde::Deserialize;

/// Predefined color themes for different terminal backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorTheme {
    /// Light text on a dark background
    #[default]
    Dark,
    /// Dark text on a light background
    Light,
    /// Yellow/white on black
    HighContrast,
}

impl ColorTheme {
    pub fn to_scheme(self) -> ColorScheme {
        match self {
            Self::Dark => ColorScheme::default(),
            Self::Light => ColorScheme {
                panel: PanelColors {
                    border: named("darkgray"),
                    title: named("blue"),
                    input: named("black"),
                    result: named("black"),
                },
                status: StatusColors {
                    idle: named("darkgray"),
                    busy: named("blue"),
                    success: named("green"),
                    notice: named("magenta"),
                    error: named("red"),
                },
            },
            Self::HighContrast => ColorScheme {
                panel: PanelColors {
                    border: named("white"),
                    title: named("yellow"),
                    input: named("white"),
                    result: named("white"),
                },
                status: StatusColors {
                    idle: named("white"),
                    busy: named("yellow"),
                    success: named("lightgreen"),
                    notice: named("lightyellow"),
                    error: named("lightred"),
                },
            },
        }
    }
}

/// Colors used by the query screen
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColorScheme {
    #[serde(default = "default_panel_colors")]
    pub panel: PanelColors,

    #[serde(default = "default_status_colors")]
    pub status: StatusColors,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            panel: default_panel_colors(),
            status: default_status_colors(),
        }
    }
}

/// Input field and result panel
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PanelColors {
    #[serde(default = "default_gray")]
    pub border: ColorSpec,

    #[serde(default = "default_cyan")]
    pub title: ColorSpec,

    #[serde(default = "default_white")]
    pub input: ColorSpec,

    #[serde(default = "default_white")]
    pub result: ColorSpec,
}

fn default_panel_colors() -> PanelColors {
    PanelColors {
        border: default_gray(),
        title: default_cyan(),
        input: default_white(),
        result: default_white(),
    }
}

/// Status line, one color per status kind
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StatusColors {
    #[serde(default = "default_dark_gray")]
    pub idle: ColorSpec,

    /// Query in flight
    #[serde(default = "default_yellow")]
    pub busy: ColorSpec,

    #[serde(default = "default_green")]
    pub success: ColorSpec,

    /// Not found, empty term
    #[serde(default = "default_cyan")]
    pub notice: ColorSpec,

    /// Transport and parse failures
    #[serde(default = "default_red")]
    pub error: ColorSpec,
}

fn default_status_colors() -> StatusColors {
    StatusColors {
        idle: default_dark_gray(),
        busy: default_yellow(),
        success: default_green(),
        notice: default_cyan(),
        error: default_red(),
    }
}

/// Color specification - supports named colors and RGB
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (e.g., "red", "green", "cyan")
    Named(String),
    /// RGB color (e.g., [255, 0, 0])
    Rgb(u8, u8, u8),
}

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Named(name) => parse_named_color(name),
            ColorSpec::Rgb(r, g, b) => Color::Rgb(*r, *g, *b),
        }
    }
}

fn parse_named_color(name: &str) -> Color {
    match name.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "darkgray" | "darkgrey" => Color::DarkGray,
        "lightred" => Color::LightRed,
        "lightgreen" => Color::LightGreen,
        "lightyellow" => Color::LightYellow,
        "lightblue" => Color::LightBlue,
        "lightmagenta" => Color::LightMagenta,
        "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        _ => Color::White,
    }
}

fn named(name: &str) -> ColorSpec {
    ColorSpec::Named(name.to_string())
}

fn default_green() -> ColorSpec {
    named("green")
}

fn default_dark_gray() -> ColorSpec {
    named("darkgray")
}

fn default_cyan() -> ColorSpec {
    named("cyan")
}

fn default_yellow() -> ColorSpec {
    named("yellow")
}

fn default_gray() -> ColorSpec {
    named("gray")
}

fn default_white() -> ColorSpec {
    named("white")
}

fn default_red() -> ColorSpec {
    named("red")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color_parsing() {
        assert_eq!(parse_named_color("cyan"), Color::Cyan);
        assert_eq!(parse_named_color("DarkGrey"), Color::DarkGray);
        assert_eq!(parse_named_color("unknown"), Color::White);
    }

    #[test]
    fn test_rgb_color() {
        assert_eq!(ColorSpec::Rgb(255, 0, 0).to_color(), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn test_dark_theme_is_default_scheme() {
        assert_eq!(ColorTheme::Dark.to_scheme(), ColorScheme::default());
        assert_ne!(ColorTheme::Light.to_scheme(), ColorScheme::default());
    }

    #[test]
    fn test_partial_scheme_from_toml() {
        let scheme: ColorScheme = toml::from_str(
            r#"
            [status]
            error = [200, 10, 10]
            "#,
        )
        .unwrap();
        assert_eq!(scheme.status.error, ColorSpec::Rgb(200, 10, 10));
        assert_eq!(scheme.status.success, default_green());
        assert_eq!(scheme.panel, default_panel_colors());
    }
}
