//! Theme and style system for the kiosk
//!
//! The theme is built once at startup from config and handed to screens
//! through the render context.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;

/// Seville orange, used on the login screen
pub const SEVILLE_ORANGE: Color = Color::Rgb(244, 123, 32);
/// Dark blue used for secondary headings
pub const NAVY: Color = Color::Rgb(0, 51, 102);
/// TUSSAM corporate red
pub const TUSSAM_RED: Color = Color::Rgb(227, 6, 19);
/// Metro de Sevilla green
pub const METRO_GREEN: Color = Color::Rgb(0, 120, 74);

/// Theme type selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Disable all UI colors (equivalent to `NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Color palette for the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub theme_type: ThemeType,

    /// Main accent (login banner, focused borders)
    pub primary: Color,
    /// Secondary headings
    pub secondary: Color,

    pub success: Color,
    pub warning: Color,
    pub error: Color,

    pub text: Color,
    pub text_muted: Color,

    pub border: Color,
    pub highlight_bg: Color,
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::NoColor => Self::no_color(),
        }
    }

    /// Dark theme - for dark terminal backgrounds
    pub fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            primary: SEVILLE_ORANGE,
            secondary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            highlight_bg: Color::DarkGray,
            background: Color::Reset,
        }
    }

    /// Light theme - for light terminal backgrounds
    pub fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            primary: SEVILLE_ORANGE,
            secondary: NAVY,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            text: Color::Rgb(51, 51, 51),
            text_muted: Color::Rgb(100, 100, 100),
            border: Color::Rgb(200, 200, 200),
            highlight_bg: Color::Gray,
            background: Color::Reset,
        }
    }

    /// No-color theme. Style helpers only set modifiers in this mode.
    pub fn no_color() -> Self {
        Self {
            theme_type: ThemeType::NoColor,
            primary: Color::Reset,
            secondary: Color::Reset,
            success: Color::Reset,
            warning: Color::Reset,
            error: Color::Reset,
            text: Color::Reset,
            text_muted: Color::Reset,
            border: Color::Reset,
            highlight_bg: Color::Reset,
            background: Color::Reset,
        }
    }

    fn is_plain(&self) -> bool {
        self.theme_type == ThemeType::NoColor
    }

    /// The accent to use for a screen, unless colors are disabled
    pub fn accent(&self, accent: Color) -> Color {
        if self.is_plain() {
            Color::Reset
        } else {
            accent
        }
    }

    // === Style Helpers ===

    pub fn title_style(&self, accent: Color) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    }

    pub fn subtitle_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::ITALIC);
        }
        Style::default()
            .fg(self.secondary)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn text_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn success_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(self.success)
    }

    /// Border of the control that has focus
    pub fn border_focused_style(&self, accent: Color) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD);
        }
        Style::default().fg(accent)
    }

    pub fn border_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().fg(self.border)
    }

    /// Selected row in a list, or a focused button
    pub fn highlight_style(&self, accent: Color) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        Style::default()
            .fg(Color::White)
            .bg(accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn placeholder_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    /// Applied over the whole screen behind a modal dialog
    pub fn dim_style(&self) -> Style {
        if self.is_plain() {
            return Style::default().add_modifier(Modifier::DIM);
        }
        Style::default().fg(self.text_muted)
    }

    pub fn background_style(&self) -> Style {
        if self.is_plain() {
            return Style::default();
        }
        Style::default().bg(self.background)
    }
}
