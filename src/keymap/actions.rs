//! Semantic actions a key press can trigger in the kiosk.

use serde::{Deserialize, Serialize};

/// Everything a key can mean, independent of which key it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Selection movement ============
    /// Previous option in a selector
    MoveUp,
    /// Next option in a selector
    MoveDown,
    /// Previous button / cursor left
    MoveLeft,
    /// Next button / cursor right
    MoveRight,
    /// Cursor to start of field
    Home,
    /// Cursor to end of field
    End,

    // ============ Form ============
    /// Press the focused button / submit
    Confirm,
    /// Go back, collapse, or dismiss
    Cancel,
    /// Open or close a dropdown
    ToggleSelect,
    /// Focus the next control
    NextField,
    /// Focus the previous control
    PrevField,

    // ============ Text editing ============
    /// Delete character before cursor
    Backspace,
    /// Delete character at cursor
    DeleteChar,

    // ============ Window ============
    /// Close request for the current screen
    Quit,

    // ============ Yes/No prompts ============
    Yes,
    No,
}

impl Action {
    /// Human-readable description, used in the footer
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Anterior",
            Action::MoveDown => "Siguiente",
            Action::MoveLeft => "Izquierda",
            Action::MoveRight => "Derecha",
            Action::Home => "Inicio",
            Action::End => "Fin",
            Action::Confirm => "Aceptar",
            Action::Cancel => "Volver",
            Action::ToggleSelect => "Desplegar",
            Action::NextField => "Campo siguiente",
            Action::PrevField => "Campo anterior",
            Action::Backspace => "Borrar",
            Action::DeleteChar => "Suprimir",
            Action::Quit => "Salir",
            Action::Yes => "Sí",
            Action::No => "No",
        }
    }
}
