use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Common footer component with key hints
pub struct Footer;

impl Footer {
    /// Footer height: one border row and one text row
    pub const HEIGHT: u16 = 2;

    /// Render hints formatted as `"Key: desc | Key: desc"`
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, text: &str) {
        let mut spans = Vec::new();
        for (i, part) in text.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", theme.muted_style()));
            }
            // Split on ": " to separate the key from its description
            if let Some((keys, desc)) = part.split_once(": ") {
                spans.push(Span::styled(
                    format!("{}: ", keys),
                    theme.title_style(theme.secondary),
                ));
                spans.push(Span::styled(desc.to_string(), theme.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), theme.text_style()));
            }
        }

        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_style());
        let inner = block.inner(area);

        frame.render_widget(block, area);
        frame.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Center), inner);
    }
}
