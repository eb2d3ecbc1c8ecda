use folio_shared::DeliveryError;
use futures::FutureExt;
use std::{any::Any, panic::AssertUnwindSafe};
use tracing::Instrument;

use crate::{DeliveryPayload, SubmissionStatus, ValidationResult, validate};

pub const DELIVERY_FAILED_MESSAGE: &str = "Failed to send message. Please try again later.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The message was handed to the delivery backend and the form was cleared.
    Delivered,
    /// Validation failed; nothing was sent.
    Rejected,
    /// The delivery backend failed.
    Failed,
    /// Another submission was still in flight.
    Ignored,
}

impl super::Command {
    /// Validates the current fields and, if they pass, delivers them once.
    ///
    /// The state lock is released while the delivery backend runs, so readers
    /// observe `Sending` for the duration of the call. The outcome is written
    /// back even if the returned future is dropped before it resolves.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.state.lock().await;

            if state.status.is_sending() {
                tracing::warn!("Submission already in flight, ignoring");
                return SubmitOutcome::Ignored;
            }

            if let ValidationResult::Invalid(message) = validate(&state.fields) {
                tracing::info!(reason = message, "Contact form rejected");
                state.status = SubmissionStatus::Failed(message.to_owned());
                return SubmitOutcome::Rejected;
            }

            state.status = SubmissionStatus::Sending;
            DeliveryPayload::from(&state.fields)
        };

        tracing::info!("Sending contact message");
        tracing::debug!(from = %payload.from_email, "Contact message sender");

        // Delivery and write-back run detached so dropping this future cannot
        // strand the form in `Sending`.
        let state = self.state.clone();
        let delivery = self.delivery.clone();
        let handle = tokio::spawn(
            async move {
                let result = AssertUnwindSafe(delivery.deliver(&payload))
                    .catch_unwind()
                    .await
                    .unwrap_or_else(|panic| Err(DeliveryError::Aborted(panic_reason(panic))));

                let mut state = state.lock().await;

                match result {
                    Ok(()) => {
                        tracing::info!("Contact message sent");
                        state.status = SubmissionStatus::Sent;
                        state.fields.clear();
                        SubmitOutcome::Delivered
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "Failed to deliver contact message");
                        state.status = SubmissionStatus::Failed(DELIVERY_FAILED_MESSAGE.to_owned());
                        SubmitOutcome::Failed
                    }
                }
            }
            .in_current_span(),
        );

        match handle.await {
            Ok(outcome) => outcome,
            Err(err) => {
                tracing::error!(error = %err, "Delivery task did not complete");
                let mut state = self.state.lock().await;
                if state.status.is_sending() {
                    state.status = SubmissionStatus::Failed(DELIVERY_FAILED_MESSAGE.to_owned());
                }
                SubmitOutcome::Failed
            }
        }
    }
}

fn panic_reason(panic: Box<dyn Any + Send>) -> String {
    if let Some(reason) = panic.downcast_ref::<&str>() {
        return (*reason).to_owned();
    }

    match panic.downcast::<String>() {
        Ok(reason) => *reason,
        Err(_) => "delivery backend panicked".to_owned(),
    }
}
