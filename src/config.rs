use crate::keymap::Keymap;
use crate::pass::Month;
use crate::styles::ThemeType;
use crate::utils::path::expand_path;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Main configuration structure
///
/// Every field is optional in the file; a missing file means all defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Color theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Month preselected on recharge screens (1-12). Current month when unset.
    #[serde(default)]
    pub default_month: Option<u32>,
    /// Directory holding the banner art files (`bus_icon.txt`, ...)
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// Dialog button labels
    #[serde(default)]
    pub labels: Labels,
    /// Key bindings
    #[serde(default)]
    pub keymap: Keymap,
}

/// Button captions for modal dialogs.
///
/// Passed to every dialog explicitly so tests get deterministic text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "default_ok")]
    pub ok: String,
    #[serde(default = "default_yes")]
    pub yes: String,
    #[serde(default = "default_no")]
    pub no: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            ok: default_ok(),
            yes: default_yes(),
            no: default_no(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_ok() -> String {
    "Aceptar".to_string()
}

fn default_yes() -> String {
    "Sí".to_string()
}

fn default_no() -> String {
    "No".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_month: None,
            assets_dir: None,
            labels: Labels::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from `config_path`.
    ///
    /// A missing file yields the defaults; the file is never created.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            debug!("No config file at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config = Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {:?}", config_path))?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(month) = self.default_month {
            if Month::from_number(month).is_none() {
                bail!("default_month must be between 1 and 12 (got {})", month);
            }
        }

        let invalid = self.keymap.invalid_keys();
        if !invalid.is_empty() {
            bail!("Unknown key binding(s): {}", invalid.join(", "));
        }

        Ok(())
    }

    pub fn theme_type(&self) -> ThemeType {
        self.theme.parse().unwrap_or_default()
    }

    /// Assets directory with a leading `~` expanded
    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.assets_dir
            .as_ref()
            .map(|dir| expand_path(&dir.to_string_lossy()))
    }

    /// The configured fixed month, if any
    pub fn fixed_month(&self) -> Option<Month> {
        self.default_month.and_then(Month::from_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Action, KeymapPreset};
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.theme_type(), ThemeType::Dark);
        assert_eq!(config.labels.yes, "Sí");
        assert_eq!(config.labels.ok, "Aceptar");
        assert!(config.fixed_month().is_none());
    }

    #[test]
    fn test_missing_file_gives_defaults_without_creating_it() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config_path.exists());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_path,
            r#"
theme = "light"
default_month = 3
assets_dir = "/opt/kiosk/assets"

[labels]
yes = "Yes"
no = "Nope"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "x"
action = "quit"
"#,
        )
        .unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.theme_type(), ThemeType::Light);
        assert_eq!(config.fixed_month(), Some(Month::March));
        assert_eq!(config.assets_dir(), Some(PathBuf::from("/opt/kiosk/assets")));
        assert_eq!(config.labels.yes, "Yes");
        assert_eq!(config.labels.no, "Nope");
        // Unset label keeps its default
        assert_eq!(config.labels.ok, "Aceptar");
        assert_eq!(config.keymap.preset, KeymapPreset::Vim);
        assert_eq!(config.keymap.overrides[0].action, Action::Quit);
    }

    #[test]
    fn test_out_of_range_month_is_rejected() {
        let err = Config::from_toml("default_month = 13").unwrap_err();
        assert!(format!("{:#}", err).contains("between 1 and 12"));
    }

    #[test]
    fn test_unknown_override_key_is_rejected() {
        let err = Config::from_toml(
            r#"
[[keymap.overrides]]
key = "hyper+q"
action = "quit"
"#,
        )
        .unwrap_err();
        assert!(format!("{:#}", err).contains("hyper+q"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(Config::from_toml("theme = [").is_err());
    }
}
