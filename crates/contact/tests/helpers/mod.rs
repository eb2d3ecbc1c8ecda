use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use folio_contact::{Command, DeliveryPayload, Field, MessageDelivery};
use folio_shared::DeliveryError;
use tokio::sync::Notify;

/// Records every payload and answers with a fixed result.
#[derive(Clone, Default)]
pub struct RecordingDelivery {
    pub payloads: Arc<Mutex<Vec<DeliveryPayload>>>,
    pub fail: bool,
}

#[allow(dead_code)]
impl RecordingDelivery {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<DeliveryPayload> {
        self.payloads.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessageDelivery for RecordingDelivery {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        self.payloads.lock().unwrap().push(payload.clone());

        if self.fail {
            return Err(DeliveryError::Rejected {
                status: 500,
                body: "upstream unavailable".to_owned(),
            });
        }

        Ok(())
    }
}

#[allow(dead_code)]
pub struct PanickingDelivery;

#[async_trait]
impl MessageDelivery for PanickingDelivery {
    async fn deliver(&self, _payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        panic!("delivery exploded");
    }
}

/// Blocks until `gate` is notified, so tests can observe the in-flight state.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct GatedDelivery {
    pub gate: Arc<Notify>,
    pub calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl GatedDelivery {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageDelivery for GatedDelivery {
    async fn deliver(&self, _payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;

        Ok(())
    }
}

#[allow(dead_code)]
pub async fn fill(command: &Command, name: &str, email: &str, subject: &str, message: &str) {
    command.update_field(Field::Name, name).await;
    command.update_field(Field::Email, email).await;
    command.update_field(Field::Subject, subject).await;
    command.update_field(Field::Message, message).await;
}

#[allow(dead_code)]
pub async fn fill_valid(command: &Command) {
    fill(
        command,
        "John Doe",
        "john@example.com",
        "Project Discussion",
        "Tell me about your project please.",
    )
    .await;
}
