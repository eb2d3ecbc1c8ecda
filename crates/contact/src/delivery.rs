use async_trait::async_trait;
use folio_shared::DeliveryError;
use serde::Serialize;

use crate::ContactFormFields;

/// Template parameters handed to a delivery backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeliveryPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
}

impl From<&ContactFormFields> for DeliveryPayload {
    fn from(fields: &ContactFormFields) -> Self {
        Self {
            from_name: fields.name.to_owned(),
            from_email: fields.email.to_owned(),
            subject: fields.subject.to_owned(),
            message: fields.message.to_owned(),
        }
    }
}

/// Something able to transmit a contact message, usually over email.
///
/// Implementations make a single attempt; the response body is ignored.
#[async_trait]
pub trait MessageDelivery: Send + Sync {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError>;
}
