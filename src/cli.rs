use clap::Parser;
use std::path::PathBuf;

/// Seville public transport pass recharge kiosk
#[derive(Parser, Debug)]
#[command(name = "bonokiosk", version, about = "Seville public transport pass recharge kiosk", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/bonokiosk/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable colors in the TUI (also respects NO_COLOR env var)
    #[arg(long)]
    pub no_colors: bool,
}

impl Cli {
    /// Config file to load
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::utils::path::get_config_path)
    }

    /// Whether colors are turned off by flag or `NO_COLOR`
    pub fn colors_disabled(&self) -> bool {
        self.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
    }
}
