use bonokiosk::config::Config;
use bonokiosk::keymap::{Action, KeymapPreset};
use bonokiosk::pass::Month;
use bonokiosk::styles::ThemeType;
use crossterm::event::{KeyCode, KeyModifiers};
use std::fs;
use tempfile::TempDir;

const EXAMPLE_CONFIG: &str = r#"
theme = "light"
default_month = 9
assets_dir = "/usr/share/bonokiosk/assets"

[labels]
ok = "Aceptar"
yes = "Sí"
no = "No"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "ctrl+q"
action = "quit"
"#;

#[test]
fn test_example_config_loads() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, EXAMPLE_CONFIG).unwrap();

    let config = Config::load(&config_path).unwrap();

    assert_eq!(config.theme_type(), ThemeType::Light);
    assert_eq!(config.fixed_month(), Some(Month::September));
    assert_eq!(config.keymap.preset, KeymapPreset::Vim);
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('q'), KeyModifiers::CONTROL),
        Some(Action::Quit)
    );
    // Plain q is shadowed by the ctrl+q override
    assert_eq!(
        config.keymap.get_action(KeyCode::Char('q'), KeyModifiers::NONE),
        None
    );
}

#[test]
fn test_empty_config_file_is_all_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "").unwrap();

    assert_eq!(Config::load(&config_path).unwrap(), Config::default());
}

#[test]
fn test_invalid_config_reports_the_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "default_month = 0\n").unwrap();

    let err = Config::load(&config_path).unwrap_err();
    let message = format!("{:#}", err);
    assert!(message.contains("config.toml"));
    assert!(message.contains("between 1 and 12"));
}
