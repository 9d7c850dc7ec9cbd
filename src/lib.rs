//! bonokiosk - Seville public transport pass recharge kiosk
//!
//! A terminal kiosk with a login screen (pass type and 12-digit card number)
//! and one recharge screen per pass type where a month is picked and the
//! simulated top-up is confirmed through modal dialogs.

// Core modules
pub mod app;
pub mod assets;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod navigation;
pub mod pass;
pub mod screens;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::{Config, Labels};
pub use navigation::{NavigationRequest, Router, ScreenFactory, ScreenId};
pub use pass::{Month, PassType, PassTypeChoice};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
