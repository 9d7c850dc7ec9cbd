use crate::config::Config;
use crate::navigation::{Router, ScreenFactory};
use crate::screens::{RenderContext, ScreenContext};
use crate::styles::Theme;
use crate::tui::Tui;
use anyhow::Result;
use std::time::Duration;
use tracing::info;

/// How long to wait for input before redrawing
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Main application state
pub struct App {
    config: Config,
    theme: Theme,
    router: Router,
    tui: Tui,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Result<Self> {
        let router = Router::new(ScreenFactory::from_config(&config));
        let tui = Tui::new()?;
        Ok(Self {
            config,
            theme,
            router,
            tui,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Kiosk started");

        let result = self.event_loop();

        // Restore the terminal before reporting any loop error
        self.tui.exit()?;
        info!("Kiosk stopped");
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.router.is_terminated() {
            self.draw()?;

            if let Some(event) = self.tui.poll_event(POLL_INTERVAL)? {
                self.router
                    .handle_event(event, &ScreenContext::new(&self.config))?;
            }
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = RenderContext::new(&self.config, &self.theme);
        let router = &mut self.router;
        let mut result = Ok(());
        self.tui.draw(|frame| {
            let area = frame.area();
            result = router.render(frame, area, &ctx);
        })?;
        result
    }
}
