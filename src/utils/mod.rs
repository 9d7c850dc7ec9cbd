pub mod card_validation;
pub mod path;
pub mod text_input;

pub use card_validation::{submit, validate_card_number, validate_pass_type, LoginOutcome};
pub use path::{expand_path, get_config_dir, get_config_path, get_home_dir, get_log_dir};
pub use text_input::TextInput;
