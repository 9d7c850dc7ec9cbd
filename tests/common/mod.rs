//! Shared test utilities for kiosk workflow tests.
//!
//! Provides `Kiosk` - a router plus config driven by synthetic key events,
//! with rendering into ratatui's `TestBackend`.

#![allow(dead_code)]

use bonokiosk::assets::AssetLoader;
use bonokiosk::config::Config;
use bonokiosk::navigation::{Router, ScreenFactory, ScreenId};
use bonokiosk::pass::Month;
use bonokiosk::screens::{RenderContext, ScreenContext};
use bonokiosk::styles::Theme;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

pub const WIDTH: u16 = 100;
pub const HEIGHT: u16 = 32;

/// A running kiosk without a real terminal
pub struct Kiosk {
    pub config: Config,
    pub router: Router,
    theme: Theme,
}

impl Kiosk {
    /// Default config, recharge screens preselect May
    pub fn new() -> Self {
        Self::with_config(Config::default(), Month::May)
    }

    pub fn with_config(config: Config, default_month: Month) -> Self {
        let factory = ScreenFactory::new(Some(default_month), AssetLoader::default());
        let router = Router::new(factory);
        Self {
            config,
            router,
            theme: Theme::no_color(),
        }
    }

    pub fn current(&self) -> Option<ScreenId> {
        self.router.current()
    }

    pub fn is_terminated(&self) -> bool {
        self.router.is_terminated()
    }

    pub fn press_with(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        let event = Event::Key(KeyEvent::new(code, modifiers));
        self.router
            .handle_event(event, &ScreenContext::new(&self.config))
            .expect("event handling");
    }

    pub fn press(&mut self, code: KeyCode) {
        self.press_with(code, KeyModifiers::NONE);
    }

    pub fn char(&mut self, c: char) {
        self.press(KeyCode::Char(c));
    }

    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.char(c);
        }
    }

    /// Pick a pass with `downs` presses on the selector, type the card and submit
    pub fn login(&mut self, downs: usize, card_number: &str) {
        for _ in 0..downs {
            self.press(KeyCode::Down);
        }
        self.press(KeyCode::Tab);
        self.type_text(card_number);
        self.press(KeyCode::Enter);
    }

    /// Render the active screen and return its text, one line per row
    pub fn screen_text(&mut self) -> String {
        let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("terminal");
        let ctx = RenderContext::new(&self.config, &self.theme);
        let router = &mut self.router;
        terminal
            .draw(|frame| {
                let area = frame.area();
                router.render(frame, area, &ctx).expect("render");
            })
            .expect("draw");

        let buffer = terminal.backend().buffer();
        (0..HEIGHT)
            .map(|y| {
                (0..WIDTH)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
