//! Dialog widget for messages, confirmations and errors
//!
//! Self-contained widget: centers itself, dims the screen behind it, and
//! draws a title, wrapped body text and a row of buttons.

use crate::styles::Theme;
use crate::widgets::button::Button;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Widget, Wrap};

/// Dialog variant for different visual styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogVariant {
    #[default]
    Default,
    /// Confirmation questions
    Question,
    /// Validation failures
    Error,
}

/// Dialog widget
pub struct Dialog<'a> {
    pub title: &'a str,
    pub content: &'a str,
    theme: &'a Theme,
    buttons: Vec<&'a str>,
    /// Index of the highlighted button
    selected: usize,
    variant: DialogVariant,
    accent: Color,
    min_width: u16,
    max_width: u16,
}

impl<'a> Dialog<'a> {
    /// Create a dialog with title and body text.
    ///
    /// Width follows the longest line, clamped to 40-70 columns.
    pub fn new(title: &'a str, content: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            content,
            theme,
            buttons: Vec::new(),
            selected: 0,
            variant: DialogVariant::Default,
            accent: theme.primary,
            min_width: 40,
            max_width: 70,
        }
    }

    pub fn buttons(mut self, buttons: &[&'a str]) -> Self {
        self.buttons = buttons.to_vec();
        self
    }

    pub fn selected(mut self, index: usize) -> Self {
        self.selected = index;
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    fn border_style(&self) -> Style {
        match self.variant {
            DialogVariant::Error => self.theme.border_focused_style(self.theme.error),
            DialogVariant::Default | DialogVariant::Question => {
                self.theme.border_focused_style(self.accent)
            }
        }
    }

    /// Width wanted by the content, before clamping to the screen
    fn preferred_width(&self) -> u16 {
        let longest = self
            .content
            .lines()
            .chain(std::iter::once(self.title))
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        // Borders and padding take 6 columns, 2 more keep short lines from wrapping
        let wanted = u16::try_from(longest + 8).unwrap_or(u16::MAX);
        wanted.clamp(self.min_width, self.max_width)
    }

    /// Centered dialog rectangle inside `area`
    pub fn popup_area(&self, area: Rect) -> Rect {
        let width = self.preferred_width().min(area.width);
        let inner_width = width.saturating_sub(6).max(1) as usize;

        // Rough wrapped height; Paragraph wraps on words so add one line of slack
        let body_lines: usize = self
            .content
            .lines()
            .map(|l| l.chars().count().max(1).div_ceil(inner_width))
            .sum::<usize>()
            + 1;
        let button_rows = if self.buttons.is_empty() { 0 } else { 2 };
        let height = u16::try_from(body_lines + button_rows + 2)
            .unwrap_or(u16::MAX)
            .min(area.height);

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        Rect::new(x, y, width, height)
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let spans: Vec<Span> = self
            .buttons
            .iter()
            .enumerate()
            .flat_map(|(i, label)| {
                let button = Button::new(label, self.theme)
                    .accent(self.accent)
                    .focused(i == self.selected);
                [button.span(), Span::raw("   ")]
            })
            .collect();

        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

impl Widget for Dialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Dim the page behind the dialog
        buf.set_style(area, self.theme.dim_style());

        let popup = self.popup_area(area);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border_style())
            .title(Line::from(format!(" {} ", self.title)).centered())
            .title_style(self.theme.text_style().add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(2))
            .style(self.theme.background_style());
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [body, buttons] = if self.buttons.is_empty() {
            [inner, Rect::default()]
        } else {
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner)
        };

        Paragraph::new(self.content)
            .wrap(Wrap { trim: true })
            .style(self.theme.text_style())
            .render(body, buf);

        if !self.buttons.is_empty() {
            self.render_buttons(buttons, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.y..area.bottom())
            .map(|y| {
                (area.x..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_popup_is_centered_and_clamped() {
        let theme = Theme::dark();
        let dialog = Dialog::new("Aviso", "Hola", &theme);
        let area = Rect::new(0, 0, 100, 30);
        let popup = dialog.popup_area(area);
        assert_eq!(popup.width, 40);
        assert_eq!(popup.x, 30);
        assert!(popup.y > 0);
    }

    #[test]
    fn test_popup_never_exceeds_screen() {
        let theme = Theme::dark();
        let long = "x".repeat(500);
        let dialog = Dialog::new("Aviso", &long, &theme).buttons(&["Aceptar"]);
        let area = Rect::new(0, 0, 30, 10);
        let popup = dialog.popup_area(area);
        assert!(popup.width <= 30);
        assert!(popup.height <= 10);
    }

    #[test]
    fn test_renders_title_body_and_buttons() {
        let theme = Theme::no_color();
        let area = Rect::new(0, 0, 60, 14);
        let mut buf = Buffer::empty(area);
        Dialog::new("Confirmar salida", "¿Está seguro?", &theme)
            .buttons(&["Sí", "No"])
            .variant(DialogVariant::Question)
            .render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Confirmar salida"));
        assert!(text.contains("¿Está seguro?"));
        assert!(text.contains("[ Sí ]"));
        assert!(text.contains("[ No ]"));
    }
}
