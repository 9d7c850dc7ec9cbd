//! Screen navigation.
//!
//! Screens ask for a change with a [`NavigationRequest`]; the [`Router`]
//! builds the next screen through the [`ScreenFactory`], swaps it in and
//! drops the previous one. Exactly one screen is active until the router
//! terminates.

use crate::assets::{AssetKey, AssetLoader};
use crate::config::Config;
use crate::pass::{Month, PassType};
use crate::screens::{
    LoginScreen, RechargeDescriptor, RechargeScreen, RenderContext, Screen, ScreenAction,
    ScreenContext,
};
use anyhow::Result;
use crossterm::event::Event;
use ratatui::layout::Rect;
use ratatui::Frame;
use std::fmt;
use tracing::{debug, info};

/// Where to go next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationRequest {
    OpenBusRecharge,
    OpenMetroRecharge,
    OpenLogin,
    /// Leave the application
    Exit,
}

impl NavigationRequest {
    /// Request that opens the recharge screen for `pass_type`
    pub fn open_recharge(pass_type: PassType) -> Self {
        match pass_type {
            PassType::Bus => NavigationRequest::OpenBusRecharge,
            PassType::Metro => NavigationRequest::OpenMetroRecharge,
        }
    }
}

/// Identifies which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenId {
    Login,
    Recharge(PassType),
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenId::Login => f.write_str("login"),
            ScreenId::Recharge(pass_type) => write!(f, "recharge:{}", pass_type),
        }
    }
}

/// Builds fresh screens. Holds what screens need from the configuration.
#[derive(Debug, Clone, Default)]
pub struct ScreenFactory {
    fixed_month: Option<Month>,
    assets: AssetLoader,
}

impl ScreenFactory {
    pub fn new(fixed_month: Option<Month>, assets: AssetLoader) -> Self {
        Self {
            fixed_month,
            assets,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.fixed_month(),
            AssetLoader::new(config.assets_dir()),
        )
    }

    /// Month preselected on a recharge screen
    pub fn default_month(&self) -> Month {
        self.fixed_month.unwrap_or_else(Month::current)
    }

    pub fn login(&self) -> LoginScreen {
        LoginScreen::new(self.assets.load(AssetKey::CityHall))
    }

    pub fn recharge(&self, pass_type: PassType) -> RechargeScreen {
        let descriptor = RechargeDescriptor::for_pass(pass_type);
        let art = self.assets.load(descriptor.icon);
        RechargeScreen::new(descriptor, self.default_month(), art)
    }

    /// New screen for `request`, `None` for [`NavigationRequest::Exit`]
    pub fn build(&self, request: NavigationRequest) -> Option<Box<dyn Screen>> {
        match request {
            NavigationRequest::OpenLogin => Some(Box::new(self.login())),
            NavigationRequest::OpenBusRecharge => Some(Box::new(self.recharge(PassType::Bus))),
            NavigationRequest::OpenMetroRecharge => {
                Some(Box::new(self.recharge(PassType::Metro)))
            }
            NavigationRequest::Exit => None,
        }
    }
}

/// Owns the active screen
pub struct Router {
    current: Option<Box<dyn Screen>>,
    factory: ScreenFactory,
}

impl Router {
    /// Router showing a fresh login screen
    pub fn new(factory: ScreenFactory) -> Self {
        let login: Box<dyn Screen> = Box::new(factory.login());
        info!("Showing {}", login.id());
        Self {
            current: Some(login),
            factory,
        }
    }

    /// Which screen is showing, `None` once terminated
    pub fn current(&self) -> Option<ScreenId> {
        self.current.as_ref().map(|screen| screen.id())
    }

    pub fn is_terminated(&self) -> bool {
        self.current.is_none()
    }

    /// Carry out a navigation request.
    ///
    /// Building a screen cannot fail, so the swap happens in one step.
    pub fn dispatch(&mut self, request: NavigationRequest) {
        let Some(old) = self.current.take() else {
            debug!("Ignoring {:?}, router already terminated", request);
            return;
        };

        let next = self.factory.build(request);
        match &next {
            Some(screen) => info!("Navigating from {} to {}", old.id(), screen.id()),
            None => info!("Exit requested from {}", old.id()),
        }
        self.current = next;
    }

    /// Apply a screen's answer to an event
    pub fn apply(&mut self, action: ScreenAction) {
        if let ScreenAction::Navigate(request) = action {
            self.dispatch(request);
        }
    }

    /// Feed an event to the active screen and follow its answer
    pub fn handle_event(&mut self, event: Event, ctx: &ScreenContext) -> Result<()> {
        let Some(screen) = self.current.as_mut() else {
            return Ok(());
        };
        let action = screen.handle_event(event, ctx)?;
        self.apply(action);
        Ok(())
    }

    /// Whether the active screen has a text field focused
    pub fn is_input_focused(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|screen| screen.is_input_focused())
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<()> {
        match self.current.as_mut() {
            Some(screen) => screen.render(frame, area, ctx),
            None => Ok(()),
        }
    }
}
