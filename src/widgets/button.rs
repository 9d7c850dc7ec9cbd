//! Push button rendered as `[ LABEL ]`

use crate::styles::Theme;
use ratatui::prelude::*;

pub struct Button<'a> {
    label: &'a str,
    theme: &'a Theme,
    focused: bool,
    accent: Color,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, theme: &'a Theme) -> Self {
        Self {
            label,
            theme,
            focused: false,
            accent: theme.primary,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn style(&self) -> Style {
        if self.focused {
            self.theme.highlight_style(self.accent)
        } else {
            self.theme
                .text_style()
                .add_modifier(Modifier::BOLD)
        }
    }

    /// The button as an inline span, for rows of several buttons
    pub fn span(&self) -> Span<'static> {
        Span::styled(format!("[ {} ]", self.label), self.style())
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Line::from(self.span())
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_text() {
        let theme = Theme::dark();
        let span = Button::new("VOLVER", &theme).span();
        assert_eq!(span.content, "[ VOLVER ]");
    }

    #[test]
    fn test_focused_uses_accent_background() {
        let theme = Theme::dark();
        let accent = Color::Rgb(1, 2, 3);
        let span = Button::new("OK", &theme).accent(accent).focused(true).span();
        assert_eq!(span.style.bg, Some(accent));

        let span = Button::new("OK", &theme).accent(accent).span();
        assert_eq!(span.style.bg, None);
    }
}
