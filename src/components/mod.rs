// Building blocks shared by the kiosk screens

pub mod footer;
pub mod header;
pub mod prompt;

pub use footer::Footer;
pub use header::Header;
pub use prompt::{Answer, Prompt, PromptResponse};
