//! Email delivery using lettre

use askama::Template;
use async_trait::async_trait;
use folio_contact::{DeliveryPayload, MessageDelivery};
use folio_shared::DeliveryError;
use lettre::{
    Message, SmtpTransport, Transport,
    message::{Mailbox, header},
    transport::smtp::authentication::Credentials,
};
use serde::Deserialize;

use crate::template::ContactMessageTemplate;

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_contact_address")]
    pub contact_address: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            contact_address: default_contact_address(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_address() -> String {
    "noreply@folio.localhost".to_string()
}

fn default_contact_address() -> String {
    "contact@folio.localhost".to_string()
}

/// Forwards contact messages to the site owner's mailbox over SMTP.
#[derive(Clone)]
pub struct SmtpDelivery {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

impl SmtpDelivery {
    pub fn new(config: &SmtpConfig) -> anyhow::Result<Self> {
        let mailer = if config.username.is_empty() || config.password.is_empty() {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.host)
                .port(config.port)
                .build()
        } else {
            tracing::info!(
                smtp_host = %config.host,
                smtp_port = config.port,
                from = %config.from_address,
                "SMTP delivery initialized with authentication and TLS"
            );

            let creds = Credentials::new(config.username.clone(), config.password.clone());

            SmtpTransport::relay(&config.host)?
                .port(config.port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config.from_address.parse()?,
            to: config.contact_address.parse()?,
        })
    }

    pub(crate) fn build_message(&self, payload: &DeliveryPayload) -> Result<Message, DeliveryError> {
        let template = ContactMessageTemplate::new(payload);
        let plain = template
            .render()
            .map_err(|e| DeliveryError::Build(e.to_string()))?;

        let reply_to = payload
            .from_email
            .parse()
            .map(|address| Mailbox::new(Some(payload.from_name.to_owned()), address))
            .map_err(|e| DeliveryError::Build(format!("invalid sender address: {e}")))?;

        Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.to.clone())
            .subject(template.subject())
            .header(header::ContentType::TEXT_PLAIN)
            .body(plain)
            .map_err(|e| DeliveryError::Build(e.to_string()))
    }
}

#[async_trait]
impl MessageDelivery for SmtpDelivery {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        let message = self.build_message(payload)?;

        tracing::info!(to = %self.to, "Sending email text plain");

        let mailer = self.mailer.clone();
        tokio::task::spawn_blocking(move || mailer.send(&message))
            .await
            .map_err(|e| DeliveryError::Aborted(e.to_string()))?
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> DeliveryPayload {
        DeliveryPayload {
            from_name: "John Doe".to_owned(),
            from_email: "john@example.com".to_owned(),
            subject: "Project Discussion".to_owned(),
            message: "Tell me about your project please.".to_owned(),
        }
    }

    #[test]
    fn test_build_message() -> anyhow::Result<()> {
        let delivery = SmtpDelivery::new(&SmtpConfig::default())?;
        let message = delivery.build_message(&payload())?;
        let formatted = String::from_utf8(message.formatted())?;

        assert!(formatted.contains("To: contact@folio.localhost"));
        assert!(formatted.contains("From: noreply@folio.localhost"));
        assert!(formatted.contains("Reply-To:"));
        assert!(formatted.contains("<john@example.com>"));
        assert!(formatted.contains("Subject: New message from contact page: Project Discussion"));
        assert!(formatted.contains("Name: John Doe"));
        assert!(formatted.contains("Tell me about your project please."));

        Ok(())
    }

    #[test]
    fn test_build_message_rejects_bad_sender() -> anyhow::Result<()> {
        let delivery = SmtpDelivery::new(&SmtpConfig::default())?;
        let mut payload = payload();
        payload.from_email = "john@".to_owned();

        assert!(matches!(
            delivery.build_message(&payload),
            Err(DeliveryError::Build(_))
        ));

        Ok(())
    }
}
