use crate::assets::Artwork;
use crate::styles::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

/// Banner shown at the top of every screen: art on the left, heading and
/// subtitle on the right.
pub struct Header;

impl Header {
    /// Rows the banner needs for `art`
    pub fn height(art: &Artwork) -> u16 {
        // Heading + subtitle need two rows; borders add two more
        art.height().max(2) + 2
    }

    /// Render the banner
    ///
    /// # Arguments
    /// * `window_title` - Shown in the top border
    /// * `heading` - Big bold line in the accent color
    /// * `subtitle` - Line under the heading
    #[allow(clippy::too_many_arguments)]
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        art: &Artwork,
        window_title: &str,
        heading: &str,
        subtitle: &str,
        accent: Color,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focused_style(accent))
            .title(format!(" {} ", window_title))
            .title_style(theme.title_style(accent))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let lines = art.lines();
        let art_width = lines
            .iter()
            .map(|l| Line::from(*l).width())
            .max()
            .unwrap_or(0);
        let art_width = u16::try_from(art_width + 2).unwrap_or(u16::MAX);

        let [art_area, text_area] =
            Layout::horizontal([Constraint::Length(art_width), Constraint::Min(0)]).areas(inner);

        let art_lines: Vec<Line> = lines
            .into_iter()
            .map(|l| Line::styled(l.to_string(), theme.title_style(accent)))
            .collect();
        frame.render_widget(Paragraph::new(art_lines), art_area);

        // Center the two text rows vertically
        let top = text_area.height.saturating_sub(2) / 2;
        let [_, text_rows] =
            Layout::vertical([Constraint::Length(top), Constraint::Min(0)]).areas(text_area);
        let text = vec![
            Line::styled(heading.to_string(), theme.title_style(accent)),
            Line::styled(subtitle.to_string(), theme.subtitle_style()),
        ];
        frame.render_widget(Paragraph::new(text), text_rows);
    }
}
