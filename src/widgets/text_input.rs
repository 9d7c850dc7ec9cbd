//! Text input widget for rendering TextInput instances.
//!
//! Renders a bordered single-line field with:
//! - Cursor positioning when focused
//! - Placeholder text support
//! - Highlighted contents when everything is selected

use crate::styles::Theme;
use crate::utils::text_input::TextInput;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A widget for rendering a TextInput with the kiosk theme.
///
/// # Example
/// ```
/// use bonokiosk::styles::Theme;
/// use bonokiosk::utils::text_input::TextInput;
/// use bonokiosk::widgets::TextInputWidget;
///
/// let theme = Theme::dark();
/// let input = TextInput::with_text("123456789012");
/// let widget = TextInputWidget::new(&input, &theme)
///     .title("Número de tarjeta")
///     .placeholder("12 dígitos")
///     .focused(true);
/// // frame.render_text_input_widget(widget, area);
/// ```
pub struct TextInputWidget<'a> {
    input: &'a TextInput,
    theme: &'a Theme,
    title: Option<&'a str>,
    placeholder: Option<&'a str>,
    focused: bool,
    /// Border color when focused
    accent: Color,
}

impl<'a> TextInputWidget<'a> {
    pub fn new(input: &'a TextInput, theme: &'a Theme) -> Self {
        Self {
            input,
            theme,
            title: None,
            placeholder: None,
            focused: false,
            accent: theme.primary,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Actual text, or the placeholder when empty
    fn display_text(&self) -> &str {
        if self.input.is_empty() {
            self.placeholder.unwrap_or("")
        } else {
            self.input.text()
        }
    }

    fn text_style(&self) -> Style {
        if self.input.is_empty() {
            self.theme.placeholder_style()
        } else if self.focused && self.input.is_all_selected() {
            self.theme.highlight_style(self.accent)
        } else {
            self.theme.text_style()
        }
    }

    fn create_block(&self) -> Block<'a> {
        let border_style = if self.focused {
            self.theme.border_focused_style(self.accent)
        } else {
            self.theme.border_style()
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style);

        if let Some(title) = self.title {
            block = block.title(format!(" {} ", title));
        }
        block
    }

    /// Cursor cell inside `area`, when focused
    fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.focused {
            return None;
        }
        let inner = self.create_block().inner(area);
        let offset = self.input.cursor().min(inner.width.saturating_sub(1) as usize) as u16;
        Some(Position::new(inner.x + offset, inner.y))
    }
}

impl Widget for TextInputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.create_block();
        let inner = block.inner(area);
        block.render(area, buf);

        // Only the text itself is highlighted, not the whole row
        let span = Span::styled(self.display_text().to_string(), self.text_style());
        Paragraph::new(Line::from(span)).render(inner, buf);
    }
}

/// Extension trait for Frame to render TextInputWidget with cursor support.
///
/// The Widget trait has no access to Frame, so the cursor is placed here.
pub trait TextInputWidgetExt {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect);
}

impl TextInputWidgetExt for Frame<'_> {
    fn render_text_input_widget(&mut self, widget: TextInputWidget, area: Rect) {
        let cursor = widget.cursor_position(area);
        self.render_widget(widget, area);
        if let Some(position) = cursor {
            self.set_cursor_position(position);
        }
    }
}
