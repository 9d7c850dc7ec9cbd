use crate::pass::{Credentials, PassType, PassTypeChoice};
use regex::Regex;
use std::sync::LazyLock;

/// Card numbers are exactly twelve ASCII digits.
static CARD_NUMBER: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").ok());

/// Number of digits on a transport card
pub const CARD_NUMBER_LENGTH: usize = 12;

/// Outcome of a login attempt.
///
/// Both checks always run, so every failure combination has its own variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Neither the pass type nor the card number is acceptable
    BothInvalid,
    /// The selector still shows the placeholder
    PassTypeInvalid,
    /// The card number is not twelve digits
    CardNumberInvalid,
    /// Everything checks out; open the recharge screen for this pass
    Success(PassType),
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success(_))
    }

    /// Dialog title and body for a failed attempt
    pub fn failure_message(&self) -> Option<(&'static str, &'static str)> {
        match self {
            LoginOutcome::BothInvalid => Some((
                "Error de validación",
                "El tipo de bono y el número de tarjeta no son correctos.\n\
                 Por favor, seleccione un tipo de bono válido e introduzca un número de 12 dígitos.",
            )),
            LoginOutcome::PassTypeInvalid => Some((
                "Error en tipo de bono",
                "Debe seleccionar un tipo de bono válido (BonoBus o BonoMetro).",
            )),
            LoginOutcome::CardNumberInvalid => Some((
                "Error en número de tarjeta",
                "El número de tarjeta debe contener exactamente 12 dígitos.",
            )),
            LoginOutcome::Success(_) => None,
        }
    }
}

/// Strip leading and trailing ASCII blanks and control characters.
///
/// Unicode spaces such as U+00A0 are kept and fail the digit check.
fn trim_blanks(text: &str) -> &str {
    text.trim_matches(|c: char| c <= ' ')
}

/// Check a raw card number as typed by the user
///
/// # Rules
/// - Surrounding characters at or below U+0020 are ignored
/// - Exactly 12 characters remain
/// - Every character is an ASCII digit 0-9
pub fn validate_card_number(text: &str) -> bool {
    CARD_NUMBER
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(trim_blanks(text)))
}

/// A pass type is valid when it is not the placeholder option
pub fn validate_pass_type(choice: PassTypeChoice) -> bool {
    choice.pass_type().is_some()
}

/// Judge a login attempt
///
/// # Arguments
/// * `selection` - Current pass-type selector value
/// * `card_number_text` - Raw card-number field contents
///
/// # Returns
/// The outcome the login screen turns into a dialog, a focus change, or a
/// navigation request. No side effects.
pub fn submit(selection: PassTypeChoice, card_number_text: &str) -> LoginOutcome {
    let card_number_valid = validate_card_number(card_number_text);

    match (selection.pass_type(), card_number_valid) {
        (None, false) => LoginOutcome::BothInvalid,
        (None, true) => LoginOutcome::PassTypeInvalid,
        (Some(_), false) => LoginOutcome::CardNumberInvalid,
        (Some(pass_type), true) => LoginOutcome::Success(pass_type),
    }
}

/// Convenience wrapper over [`submit`] for a built [`Credentials`] value
pub fn submit_credentials(credentials: &Credentials) -> LoginOutcome {
    submit(credentials.pass_type, &credentials.card_number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_accepts_twelve_digits() {
        assert!(validate_card_number("123456789012"));
        assert!(validate_card_number("000000000000"));
    }

    #[test]
    fn test_card_number_trims_whitespace() {
        assert!(validate_card_number("  123456789012  "));
        assert!(validate_card_number("\t123456789012\n"));
    }

    #[test]
    fn test_card_number_keeps_unicode_spaces() {
        assert!(!validate_card_number("\u{a0}123456789012"));
        assert!(!validate_card_number("\u{3000}123456789012"));
        assert!(!validate_card_number("123456789012\u{2003}"));
        assert_eq!(
            submit(PassTypeChoice::Bus, "\u{a0}123456789012"),
            LoginOutcome::CardNumberInvalid
        );
        assert_eq!(
            submit(PassTypeChoice::Metro, "\u{3000}123456789012"),
            LoginOutcome::CardNumberInvalid
        );
    }

    #[test]
    fn test_card_number_rejects_wrong_length() {
        assert!(!validate_card_number(""));
        assert!(!validate_card_number("12345678901"));
        assert!(!validate_card_number("1234567890123"));
    }

    #[test]
    fn test_card_number_rejects_non_digits() {
        assert!(!validate_card_number("12345678901a"));
        assert!(!validate_card_number("1234 5678 9012"));
        assert!(!validate_card_number("-12345678901"));
        // Non-ASCII digits do not count
        assert!(!validate_card_number("١٢٣٤٥٦٧٨٩٠١٢"));
    }

    #[test]
    fn test_pass_type_validation() {
        assert!(!validate_pass_type(PassTypeChoice::Unselected));
        assert!(validate_pass_type(PassTypeChoice::Bus));
        assert!(validate_pass_type(PassTypeChoice::Metro));
    }

    #[test]
    fn test_submit_outcomes() {
        assert_eq!(
            submit(PassTypeChoice::Unselected, "123456789012"),
            LoginOutcome::PassTypeInvalid
        );
        assert_eq!(
            submit(PassTypeChoice::Bus, "abc"),
            LoginOutcome::CardNumberInvalid
        );
        assert_eq!(
            submit(PassTypeChoice::Unselected, "abc"),
            LoginOutcome::BothInvalid
        );
        assert_eq!(
            submit(PassTypeChoice::Bus, "123456789012"),
            LoginOutcome::Success(PassType::Bus)
        );
        assert_eq!(
            submit(PassTypeChoice::Metro, " 123456789012 "),
            LoginOutcome::Success(PassType::Metro)
        );
    }

    #[test]
    fn test_submit_credentials() {
        let creds = Credentials::new(PassTypeChoice::Metro, "999999999999");
        assert!(submit_credentials(&creds).is_success());
    }

    #[test]
    fn test_failure_messages() {
        let (title, body) = LoginOutcome::BothInvalid.failure_message().unwrap();
        assert_eq!(title, "Error de validación");
        assert_eq!(
            body,
            "El tipo de bono y el número de tarjeta no son correctos.\nPor favor, seleccione un tipo de bono válido e introduzca un número de 12 dígitos."
        );
        assert_eq!(
            LoginOutcome::CardNumberInvalid.failure_message().map(|m| m.0),
            Some("Error en número de tarjeta")
        );
        assert!(LoginOutcome::Success(PassType::Bus)
            .failure_message()
            .is_none());
    }
}
