use anyhow::{Context, Result};
use bonokiosk::app::App;
use bonokiosk::cli::Cli;
use bonokiosk::config::Config;
use bonokiosk::styles::{Theme, ThemeType};
use bonokiosk::utils::path::get_log_dir;
use clap::Parser;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal state before the panic message is printed
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_panic_hook();

    // Set up logging directory
    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_appender = tracing_appender::rolling::never(&log_dir, "bonokiosk.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    let config_path = cli.config_path();
    let config = Config::load(&config_path).context("Failed to load configuration")?;

    let theme_type = if cli.colors_disabled() {
        ThemeType::NoColor
    } else {
        config.theme_type()
    };
    let theme = Theme::new(theme_type);

    let mut app = App::new(config, theme)?;
    let result = app.run();

    // Flush pending log lines
    drop(guard);

    result
}
