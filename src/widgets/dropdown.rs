//! Dropdown selector widget.
//!
//! Collapsed, it is a bordered box showing the chosen item and a `▼`.
//! Expanded, the option list is drawn as an overlay right below the box,
//! so it should be rendered after everything it may cover.

use crate::styles::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, StatefulWidget, Widget},
};

/// Selection and open/closed state of a dropdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    selected: usize,
    expanded: bool,
    len: usize,
    /// First item shown when the list is taller than the room below the box
    offset: usize,
}

impl DropdownState {
    pub fn new(len: usize, selected: usize) -> Self {
        Self {
            selected: selected.min(len.saturating_sub(1)),
            expanded: false,
            len,
            offset: 0,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.selected = index;
        }
    }

    /// Move to the next item, stopping at the last one
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.len {
            self.selected += 1;
        }
    }

    /// Move to the previous item, stopping at the first one
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn collapse(&mut self) {
        self.expanded = false;
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Scroll so the selected item is inside a window of `visible` rows
    fn scroll_to_selected(&mut self, visible: usize) {
        if visible == 0 {
            return;
        }
        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + visible {
            self.offset = self.selected + 1 - visible;
        }
        self.offset = self.offset.min(self.len.saturating_sub(visible));
    }
}

/// Dropdown widget over a list of labels
pub struct Dropdown<'a> {
    items: Vec<&'a str>,
    theme: &'a Theme,
    title: Option<&'a str>,
    focused: bool,
    accent: Color,
}

impl<'a> Dropdown<'a> {
    pub fn new(items: Vec<&'a str>, theme: &'a Theme) -> Self {
        Self {
            items,
            theme,
            title: None,
            focused: false,
            accent: theme.primary,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
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

    /// Where the expanded list goes for a box at `area`, kept inside `bounds`
    pub fn list_area(&self, area: Rect, bounds: Rect) -> Rect {
        let y = area.bottom().min(bounds.bottom());
        let wanted = u16::try_from(self.items.len() + 2).unwrap_or(u16::MAX);
        let height = wanted.min(bounds.bottom().saturating_sub(y));
        Rect::new(area.x, y, area.width, height)
    }

    fn render_box(&self, area: Rect, buf: &mut Buffer, state: &DropdownState) {
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
        let inner = block.inner(area);
        block.render(area, buf);

        let label = self.items.get(state.selected).copied().unwrap_or("");
        let arrow = if state.expanded { "▲" } else { "▼" };
        let pad = (inner.width as usize).saturating_sub(label.chars().count() + 2);
        Line::from(vec![
            Span::styled(format!(" {}", label), self.theme.text_style()),
            Span::raw(" ".repeat(pad)),
            Span::styled(arrow, self.theme.muted_style()),
        ])
        .render(inner, buf);
    }

    fn render_list(&self, area: Rect, buf: &mut Buffer, state: &mut DropdownState) {
        let list = self.list_area(area, buf.area);
        if list.height < 3 {
            return;
        }
        Clear.render(list, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focused_style(self.accent))
            .style(self.theme.background_style());
        let inner = block.inner(list);
        block.render(list, buf);

        let visible = inner.height as usize;
        state.scroll_to_selected(visible);
        let rows = self
            .items
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(visible);
        for (row_index, (i, item)) in rows.enumerate() {
            let row = Rect::new(inner.x, inner.y + row_index as u16, inner.width, 1);
            let is_selected = i == state.selected;
            let style = if is_selected {
                self.theme.highlight_style(self.accent)
            } else {
                self.theme.text_style()
            };
            let marker = if is_selected { "▌" } else { " " };
            let text = format!("{} {}", marker, item);
            let fill = (row.width as usize).saturating_sub(text.chars().count());
            Line::from(Span::styled(format!("{}{}", text, " ".repeat(fill)), style))
                .render(row, buf);
        }
    }
}

impl StatefulWidget for Dropdown<'_> {
    type State = DropdownState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        self.render_box(area, buf, state);
        if state.expanded {
            self.render_list(area, buf, state);
        }
    }
}
