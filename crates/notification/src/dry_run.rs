use async_trait::async_trait;
use folio_contact::{DeliveryPayload, MessageDelivery};
use folio_shared::DeliveryError;

/// Logs contact messages instead of sending them.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunDelivery;

#[async_trait]
impl MessageDelivery for DryRunDelivery {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        tracing::info!(
            from_name = %payload.from_name,
            from_email = %payload.from_email,
            subject = %payload.subject,
            message_len = payload.message.len(),
            "Dry run, contact message not sent"
        );

        Ok(())
    }
}
