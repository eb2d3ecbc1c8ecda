use std::sync::Arc;

use folio_contact::{Command, MessageDelivery, SubmitOutcome};
use folio_notification::DryRunDelivery;

use super::{FormArgs, banner};
use crate::config::Config;

/// Fills the form, submits it once and prints the resulting banner.
///
/// Returns whether the message was delivered.
pub async fn send(config: &Config, form: &FormArgs, dry_run: bool) -> anyhow::Result<bool> {
    let delivery: Arc<dyn MessageDelivery> = if dry_run {
        Arc::new(DryRunDelivery)
    } else {
        crate::build_delivery(config)?
    };

    let command = Command::with_delivery(delivery);
    form.apply(&command).await;

    let outcome = command.submit().await;
    tracing::debug!(?outcome, "Submission finished");

    if let Some(text) = banner(&command.status().await) {
        println!("{text}");
    }

    Ok(outcome == SubmitOutcome::Delivered)
}
