//! Screen trait and associated types.
//!
//! A screen owns its state, draws itself, and turns input events into a
//! [`ScreenAction`]. Screens never hold references to each other; moving
//! between them is requested through [`NavigationRequest`] and carried out
//! by the router.

use crate::config::Config;
use crate::navigation::{NavigationRequest, ScreenId};
use crate::styles::Theme;
use anyhow::Result;
use crossterm::event::{Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::Frame;

/// Context provided for rendering screens.
pub struct RenderContext<'a> {
    /// Application configuration.
    pub config: &'a Config,
    /// Active color theme.
    pub theme: &'a Theme,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a Config, theme: &'a Theme) -> Self {
        Self { config, theme }
    }
}

/// Context provided for handling events.
pub struct ScreenContext<'a> {
    /// Application configuration (keymap, labels).
    pub config: &'a Config,
}

impl<'a> ScreenContext<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }
}

/// Actions that a screen can return after handling an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScreenAction {
    /// Stay on the current screen.
    #[default]
    None,
    /// Ask the router to switch screens or exit.
    Navigate(NavigationRequest),
}

/// Trait for screen controllers.
///
/// # Example
///
/// ```rust,ignore
/// impl Screen for MyScreen {
///     fn id(&self) -> ScreenId {
///         ScreenId::Login
///     }
///
///     fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
///         Ok(())
///     }
///
///     fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction> {
///         Ok(ScreenAction::Navigate(NavigationRequest::OpenLogin))
///     }
/// }
/// ```
pub trait Screen {
    /// Which screen this is.
    fn id(&self) -> ScreenId;

    /// Render the screen.
    fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()>;

    /// Handle an input event and say what should happen next.
    fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<ScreenAction>;

    /// Check if a text input is currently focused.
    ///
    /// Screens type printable characters into the focused field themselves;
    /// this only reports the state, e.g. for tests and cursor handling.
    fn is_input_focused(&self) -> bool {
        false
    }
}

/// The key event inside `event`, if it is a key press
pub fn key_press(event: &Event) -> Option<KeyEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(*key),
        _ => None,
    }
}
