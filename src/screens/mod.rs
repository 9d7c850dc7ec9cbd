//! Screen controllers for the kiosk.
//!
//! Each screen owns its state and handles both rendering and events.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │                        App                          │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │                    Router                     │  │
//! │  │  current: Box<dyn Screen>                     │  │
//! │  │  dispatch(NavigationRequest) -> new screen    │  │
//! │  └───────────────────────────────────────────────┘  │
//! │                                                     │
//! │  ┌───────────────────────────────────────────────┐  │
//! │  │                 Screen Trait                  │  │
//! │  │  - render(frame, area, context)               │  │
//! │  │  - handle_event(event, context) -> Action     │  │
//! │  │  - is_input_focused() -> bool                 │  │
//! │  └───────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod login;
pub mod recharge;
pub mod screen_trait;

pub use login::{LoginFocus, LoginScreen};
pub use recharge::{
    CloseDecision, RechargeDescriptor, RechargeFocus, RechargeOutcome, RechargeScreen,
    RechargeState,
};
pub use screen_trait::{RenderContext, Screen, ScreenAction, ScreenContext};
