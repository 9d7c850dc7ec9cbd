//! Key bindings written as strings in config files ("ctrl+c", "shift+tab", "y").

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Maps one key combination to an [`Action`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string, e.g. "j", "down", "ctrl+c"
    pub key: String,

    /// Action the key triggers
    pub action: Action,
}

/// A key string resolved to crossterm types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Whether a key event triggers this binding.
    ///
    /// Unparseable key strings never match.
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.parse() {
            Ok(parsed) => key_eq(parsed, code, modifiers),
            Err(_) => false,
        }
    }

    pub fn parse(&self) -> Result<ParsedKey, String> {
        parse_key_string(&self.key)
    }

    /// Footer-friendly rendering of the key, e.g. "Ctrl+C"
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Terminals report Shift+Tab as BackTab, sometimes with SHIFT still set.
fn key_eq(parsed: ParsedKey, code: KeyCode, modifiers: KeyModifiers) -> bool {
    if parsed.code == KeyCode::BackTab && code == KeyCode::BackTab {
        return true;
    }
    parsed.code == code && parsed.modifiers == modifiers
}

/// Parse "ctrl+shift+x" style strings
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return Err("Empty key".to_string());
    }

    // "+" on its own is a key, not a separator
    let (modifier_part, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key.as_str()),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in modifier_part.split('+').filter(|p| !p.is_empty()) {
        modifiers |= match part.trim() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            other => return Err(format!("Unknown modifier: {}", other)),
        };
    }

    let code = parse_key_code(key_part)?;

    // shift+tab arrives as BackTab
    if code == KeyCode::Tab && modifiers.contains(KeyModifiers::SHIFT) {
        return Ok(ParsedKey {
            code: KeyCode::BackTab,
            modifiers: KeyModifiers::SHIFT,
        });
    }

    Ok(ParsedKey { code, modifiers })
}

fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let code = match key.trim() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "backspace" | "bs" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        single if single.chars().count() == 1 => match single.chars().next() {
            Some(c) => KeyCode::Char(c),
            None => return Err("Empty key".to_string()),
        },
        other => return Err(format!("Unknown key: {}", other)),
    };
    Ok(code)
}

/// "ctrl+c" -> "Ctrl+C", "down" -> "↓"
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim().to_lowercase();
            match part.as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                "up" => "↑".to_string(),
                "down" => "↓".to_string(),
                "left" => "←".to_string(),
                "right" => "→".to_string(),
                "enter" | "return" => "Enter".to_string(),
                "esc" | "escape" => "Esc".to_string(),
                "space" => "Espacio".to_string(),
                "tab" => "Tab".to_string(),
                "backtab" => "Shift+Tab".to_string(),
                _ => part.to_uppercase(),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_char() {
        let parsed = parse_key_string("y").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('y'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_ctrl_combo() {
        let parsed = parse_key_string("Ctrl+C").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('c'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_shift_tab_is_backtab() {
        let parsed = parse_key_string("shift+tab").unwrap();
        assert_eq!(parsed.code, KeyCode::BackTab);
        let binding = KeyBinding::new("shift+tab", Action::PrevField);
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::BackTab, KeyModifiers::NONE));
    }

    #[test]
    fn test_parse_plus_key() {
        let parsed = parse_key_string("ctrl++").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('+'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("").is_err());
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("pagedownish").is_err());
    }

    #[test]
    fn test_binding_matches_exact_modifiers() {
        let binding = KeyBinding::new("ctrl+c", Action::Quit);
        assert!(binding.matches(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('c'), KeyModifiers::NONE));
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+c"), "Ctrl+C");
        assert_eq!(format_key_display("down"), "↓");
        assert_eq!(format_key_display("esc"), "Esc");
        assert_eq!(format_key_display("q"), "Q");
    }
}
