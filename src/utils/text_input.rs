use crate::keymap::Action;

/// Single-line text field state: text, cursor, and a whole-contents selection.
///
/// The selection mirrors a GUI "select all": the next typed character
/// replaces everything, Backspace/Delete clear everything, and any cursor
/// movement simply drops the selection.
///
/// # Example
/// ```
/// use bonokiosk::utils::text_input::TextInput;
///
/// let mut input = TextInput::with_text("12ab");
/// input.select_all();
/// input.insert_char('9');
/// assert_eq!(input.text(), "9");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    all_selected: bool,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text input with initial text and the cursor at the end
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self {
            text,
            cursor,
            all_selected: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the whole contents are selected
    pub fn is_all_selected(&self) -> bool {
        self.all_selected && !self.text.is_empty()
    }

    pub fn select_all(&mut self) {
        self.all_selected = true;
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.all_selected = false;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor, replacing a full selection
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        if self.is_all_selected() {
            self.clear();
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        self.all_selected = false;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.is_all_selected() {
            self.clear();
            return;
        }
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.text.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) {
        if self.is_all_selected() {
            self.clear();
            return;
        }
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.all_selected = false;
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.all_selected = false;
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.all_selected = false;
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.all_selected = false;
        self.cursor = self.char_count();
    }

    /// Apply an editing action. Returns true if the action was consumed.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("1245");
        input.move_left();
        input.move_left();
        input.insert_char('3');
        assert_eq!(input.text(), "12345");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_control_chars_are_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\n');
        input.insert_char('\t');
        assert!(input.is_empty());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::with_text("añb");
        input.backspace();
        assert_eq!(input.text(), "añ");
        input.backspace();
        assert_eq!(input.text(), "a");
        input.move_home();
        input.delete();
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_select_all_then_type_replaces() {
        let mut input = TextInput::with_text("abc");
        input.select_all();
        assert!(input.is_all_selected());
        input.insert_char('1');
        assert_eq!(input.text(), "1");
        assert!(!input.is_all_selected());
    }

    #[test]
    fn test_select_all_then_backspace_clears() {
        let mut input = TextInput::with_text("abc");
        input.select_all();
        input.backspace();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_movement_drops_selection() {
        let mut input = TextInput::with_text("abc");
        input.select_all();
        input.move_left();
        assert!(!input.is_all_selected());
        input.insert_char('x');
        assert_eq!(input.text(), "abxc");
    }

    #[test]
    fn test_empty_selection_is_not_selected() {
        let mut input = TextInput::new();
        input.select_all();
        assert!(!input.is_all_selected());
    }

    #[test]
    fn test_handle_action() {
        let mut input = TextInput::with_text("ab");
        assert!(input.handle_action(Action::Home));
        assert_eq!(input.cursor(), 0);
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "b");
        assert!(!input.handle_action(Action::Quit));
    }
}
