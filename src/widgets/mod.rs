// Reusable UI widgets

pub mod button;
pub mod dialog;
pub mod dropdown;
pub mod text_input;

pub use button::Button;
pub use dialog::{Dialog, DialogVariant};
pub use dropdown::{Dropdown, DropdownState};
pub use text_input::{TextInputWidget, TextInputWidgetExt};
