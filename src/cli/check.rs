use folio_contact::{ValidationResult, validate};

use super::FormArgs;

/// Runs only the validation pass. Returns whether the form is valid.
pub fn check(form: &FormArgs) -> bool {
    match validate(&form.to_fields()) {
        ValidationResult::Valid => {
            println!("Valid");
            true
        }
        ValidationResult::Invalid(message) => {
            println!("Error: {message}");
            false
        }
    }
}
