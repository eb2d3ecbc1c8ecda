mod check;
mod send;

pub use check::check;
pub use send::send;

use clap::Args;
use folio_contact::{Command, ContactFormFields, Field, SubmissionStatus};

pub const SENT_BANNER: &str = "Message sent successfully! I'll get back to you soon.";

/// Contact form values, one flag per field
#[derive(Args, Debug, Clone, Default)]
pub struct FormArgs {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Your email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message subject
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,
}

impl FormArgs {
    fn entries(&self) -> [(Field, &str); 4] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Email, self.email.as_str()),
            (Field::Subject, self.subject.as_str()),
            (Field::Message, self.message.as_str()),
        ]
    }

    /// Types every value into the form, the way a browser would.
    pub async fn apply(&self, command: &Command) {
        for (field, value) in self.entries() {
            command.update_field(field, value).await;
        }
    }

    pub fn to_fields(&self) -> ContactFormFields {
        let mut fields = ContactFormFields::default();
        for (field, value) in self.entries() {
            fields.set(field, value);
        }

        fields
    }
}

/// Text shown under the form for `status`, if any.
pub fn banner(status: &SubmissionStatus) -> Option<String> {
    match status {
        SubmissionStatus::Idle => None,
        SubmissionStatus::Sending => Some("Sending...".to_string()),
        SubmissionStatus::Sent => Some(SENT_BANNER.to_string()),
        SubmissionStatus::Failed(reason) => Some(format!("Error: {reason}")),
    }
}
