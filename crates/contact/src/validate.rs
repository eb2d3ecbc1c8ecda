use regex::Regex;
use std::sync::LazyLock;

use crate::ContactFormFields;

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

pub const REQUIRED_MESSAGE: &str = "All fields are required.";
pub const NAME_MESSAGE: &str = "Name must be at least 2 characters.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";
pub const SUBJECT_MESSAGE: &str = "Subject must be at least 3 characters.";
pub const MESSAGE_MESSAGE: &str = "Message must be at least 10 characters.";

const NAME_MIN: usize = 2;
const SUBJECT_MIN: usize = 3;
const MESSAGE_MIN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(&'static str),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn into_result(self) -> folio_shared::Result<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(message) => Err(folio_shared::Error::Validate(message.to_owned())),
        }
    }
}

/// Runs the validation pass over `fields`.
///
/// Rules are checked in a fixed order and the first failing rule wins, so only
/// one message is ever reported.
pub fn validate(fields: &ContactFormFields) -> ValidationResult {
    let name = trim(&fields.name);
    let subject = trim(&fields.subject);
    let message = trim(&fields.message);

    if name.is_empty() || trim(&fields.email).is_empty() || subject.is_empty() || message.is_empty()
    {
        return ValidationResult::Invalid(REQUIRED_MESSAGE);
    }

    if name.chars().count() < NAME_MIN {
        return ValidationResult::Invalid(NAME_MESSAGE);
    }

    if !RE_EMAIL.is_match(&fields.email) {
        return ValidationResult::Invalid(EMAIL_MESSAGE);
    }

    if subject.chars().count() < SUBJECT_MIN {
        return ValidationResult::Invalid(SUBJECT_MESSAGE);
    }

    if message.chars().count() < MESSAGE_MIN {
        return ValidationResult::Invalid(MESSAGE_MESSAGE);
    }

    ValidationResult::Valid
}

// The byte order mark counts as blank, as it does for browser form input.
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
