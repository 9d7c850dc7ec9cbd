//! Built-in keymaps.

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// Standard plus hjkl movement
    Vim,
}

impl KeymapPreset {
    pub fn bindings(&self) -> Vec<KeyBinding> {
        match self {
            KeymapPreset::Standard => standard_bindings(),
            KeymapPreset::Vim => vim_bindings(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
        }
    }
}

fn standard_bindings() -> Vec<KeyBinding> {
    vec![
        // Selection movement
        KeyBinding::new("up", Action::MoveUp),
        KeyBinding::new("down", Action::MoveDown),
        KeyBinding::new("left", Action::MoveLeft),
        KeyBinding::new("right", Action::MoveRight),
        KeyBinding::new("home", Action::Home),
        KeyBinding::new("end", Action::End),
        // Form
        KeyBinding::new("enter", Action::Confirm),
        KeyBinding::new("esc", Action::Cancel),
        KeyBinding::new("space", Action::ToggleSelect),
        KeyBinding::new("tab", Action::NextField),
        KeyBinding::new("shift+tab", Action::PrevField),
        // Text editing
        KeyBinding::new("backspace", Action::Backspace),
        KeyBinding::new("delete", Action::DeleteChar),
        // Window
        KeyBinding::new("q", Action::Quit),
        KeyBinding::new("ctrl+c", Action::Quit),
        // Prompts
        KeyBinding::new("y", Action::Yes),
        KeyBinding::new("s", Action::Yes),
        KeyBinding::new("n", Action::No),
    ]
}

fn vim_bindings() -> Vec<KeyBinding> {
    let mut bindings = vec![
        KeyBinding::new("k", Action::MoveUp),
        KeyBinding::new("j", Action::MoveDown),
        KeyBinding::new("h", Action::MoveLeft),
        KeyBinding::new("l", Action::MoveRight),
    ];
    bindings.extend(standard_bindings());
    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names() {
        assert_eq!(KeymapPreset::Standard.name(), "Standard");
        assert_eq!(KeymapPreset::Vim.name(), "Vim");
    }

    #[test]
    fn test_standard_covers_core_actions() {
        let bindings = KeymapPreset::Standard.bindings();
        for action in [
            Action::MoveUp,
            Action::MoveDown,
            Action::Confirm,
            Action::Cancel,
            Action::NextField,
            Action::Quit,
            Action::Yes,
            Action::No,
        ] {
            assert!(
                bindings.iter().any(|b| b.action == action),
                "missing binding for {:?}",
                action
            );
        }
    }

    #[test]
    fn test_every_preset_key_parses() {
        for preset in [KeymapPreset::Standard, KeymapPreset::Vim] {
            for binding in preset.bindings() {
                assert!(binding.parse().is_ok(), "bad key {:?}", binding.key);
            }
        }
    }

    #[test]
    fn test_vim_has_hjkl() {
        let bindings = KeymapPreset::Vim.bindings();
        assert!(bindings
            .iter()
            .any(|b| b.key == "j" && b.action == Action::MoveDown));
        assert!(bindings
            .iter()
            .any(|b| b.key == "k" && b.action == Action::MoveUp));
    }

    #[test]
    fn test_preset_serde() {
        let json = serde_json::to_string(&KeymapPreset::Vim).unwrap();
        assert_eq!(json, "\"vim\"");
        let preset: KeymapPreset = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(preset, KeymapPreset::Standard);
    }
}
