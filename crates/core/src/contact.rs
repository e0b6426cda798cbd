//! Contact form rules.
//!
//! Unlike project validation, contact submissions fail fast: the first rule
//! that does not hold is the only one reported.

use validator::{ValidateContains, ValidateLength};

use crate::error::CoreError;

/// Minimum length of the sender name, after trimming (characters).
pub const MIN_NAME_LENGTH: u64 = 2;
/// Minimum length of the message body, after trimming (characters).
pub const MIN_MESSAGE_LENGTH: u64 = 10;

pub const ERR_INVALID_EMAIL: &str = "Email inválido";

/// Raw contact form fields as received. `None` means the key was absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Submission<'a> {
    pub name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub subject: Option<&'a str>,
    pub message: Option<&'a str>,
}

/// Validate a contact submission, stopping at the first failed rule.
///
/// 1. `name`, `email`, `subject`, `message` must be present and non-empty
///    (every missing field is named in the one error).
/// 2. `email` must contain `@`.
/// 3. `name` must have at least [`MIN_NAME_LENGTH`] characters once trimmed.
/// 4. `message` must have at least [`MIN_MESSAGE_LENGTH`] characters once trimmed.
pub fn validate_submission(submission: &Submission<'_>) -> Result<(), CoreError> {
    let required = [
        ("name", submission.name),
        ("email", submission.email),
        ("subject", submission.subject),
        ("message", submission.message),
    ];
    let missing: Vec<&str> = required
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(field, _)| *field)
        .collect();
    if !missing.is_empty() {
        return Err(CoreError::Validation(format!(
            "Campos faltantes: {}",
            missing.join(", ")
        )));
    }

    let email = submission.email.unwrap_or_default().to_string();
    if !email.validate_contains("@") {
        return Err(CoreError::Validation(ERR_INVALID_EMAIL.to_string()));
    }

    let name = submission.name.unwrap_or_default().trim();
    if !name.validate_length(Some(MIN_NAME_LENGTH), None, None) {
        return Err(CoreError::Validation(format!(
            "Nombre debe tener al menos {MIN_NAME_LENGTH} caracteres"
        )));
    }

    let message = submission.message.unwrap_or_default().trim();
    if !message.validate_length(Some(MIN_MESSAGE_LENGTH), None, None) {
        return Err(CoreError::Validation(format!(
            "Mensaje debe tener al menos {MIN_MESSAGE_LENGTH} caracteres"
        )));
    }

    Ok(())
}

/// Share of read messages as a percentage rounded to two decimals.
///
/// Returns `0.0` for an empty inbox.
pub fn percentage_read(read: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = read as f64 / total as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
