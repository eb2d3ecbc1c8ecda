use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{ContactFormFields, MessageDelivery, SubmissionStatus};

mod submit_form;
mod update_field;

pub use submit_form::{DELIVERY_FAILED_MESSAGE, SubmitOutcome};

/// Field values and status of one contact form instance.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub fields: ContactFormFields,
    pub status: SubmissionStatus,
}

/// Owns the contact form state and drives submissions.
///
/// Clones share the same state, so a rendering surface can keep one handle
/// for reading while another task submits.
#[derive(Clone)]
pub struct Command {
    state: Arc<Mutex<FormState>>,
    delivery: Arc<dyn MessageDelivery>,
}

impl Command {
    pub fn new(delivery: impl MessageDelivery + 'static) -> Self {
        Self::with_delivery(Arc::new(delivery))
    }

    pub fn with_delivery(delivery: Arc<dyn MessageDelivery>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FormState::default())),
            delivery,
        }
    }

    pub async fn snapshot(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn fields(&self) -> ContactFormFields {
        self.state.lock().await.fields.clone()
    }

    pub async fn status(&self) -> SubmissionStatus {
        self.state.lock().await.status.clone()
    }

    /// Whether the submit affordance should be disabled.
    pub async fn is_sending(&self) -> bool {
        self.state.lock().await.status.is_sending()
    }
}
