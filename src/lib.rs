pub mod cli;
pub mod config;
pub mod observability;

use std::sync::Arc;

use folio_contact::MessageDelivery;
use folio_notification::{DryRunDelivery, EmailJsDelivery, SmtpDelivery};

pub use config::{Backend, Config};

/// Create the delivery backend selected by `config.delivery.backend`
pub fn build_delivery(config: &Config) -> anyhow::Result<Arc<dyn MessageDelivery>> {
    let delivery: Arc<dyn MessageDelivery> = match config.delivery.backend {
        Backend::EmailJs => Arc::new(EmailJsDelivery::new(&config.emailjs)?),
        Backend::Smtp => Arc::new(SmtpDelivery::new(&config.smtp)?),
        Backend::DryRun => Arc::new(DryRunDelivery),
    };

    Ok(delivery)
}
