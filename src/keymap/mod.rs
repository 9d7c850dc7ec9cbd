//! Keymap configuration module
//!
//! A preset keymap plus optional user overrides from the config file.

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Resolve a key event to an action.
    ///
    /// An override for an action hides every preset binding of that action.
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides first, then the preset bindings they do not shadow
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_display(&self, action: Action) -> String {
        self.all_bindings()
            .iter()
            .find(|b| b.action == action)
            .map(KeyBinding::display)
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Footer hint such as "Tab: Campo siguiente"
    pub fn hint(&self, action: Action) -> String {
        format!("{}: {}", self.key_display(action), action.description())
    }

    /// Join several hints with the footer separator
    pub fn hints(&self, actions: &[Action]) -> String {
        actions
            .iter()
            .map(|a| self.hint(*a))
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Keys bound to actions that cannot be parsed
    pub fn invalid_keys(&self) -> Vec<String> {
        self.overrides
            .iter()
            .filter(|b| b.parse().is_err())
            .map(|b| b.key.clone())
            .collect()
    }
}
