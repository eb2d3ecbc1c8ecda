//! Delivery through the EmailJS REST API

use std::time::Duration;

use async_trait::async_trait;
use folio_contact::{DeliveryPayload, MessageDelivery};
use folio_shared::DeliveryError;
use serde::{Deserialize, Serialize};

const SEND_PATH: &str = "/api/v1.0/email/send";
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug, Deserialize, Clone)]
pub struct EmailJsConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub public_key: String,
    /// Private key, only required when the account enforces it.
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.emailjs.com".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Serialize)]
pub(crate) struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: &'a DeliveryPayload,
}

/// Sends contact messages with fixed service, template and key identifiers.
#[derive(Clone)]
pub struct EmailJsDelivery {
    client: reqwest::Client,
    url: String,
    config: EmailJsConfig,
}

impl EmailJsDelivery {
    pub fn new(config: &EmailJsConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let url = format!("{}{SEND_PATH}", config.endpoint.trim_end_matches('/'));

        tracing::info!(
            url = %url,
            service_id = %config.service_id,
            template_id = %config.template_id,
            "EmailJS delivery initialized"
        );

        Ok(Self {
            client,
            url,
            config: config.clone(),
        })
    }

    pub(crate) fn request<'a>(&'a self, payload: &'a DeliveryPayload) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: payload,
        }
    }
}

#[async_trait]
impl MessageDelivery for EmailJsDelivery {
    async fn deliver(&self, payload: &DeliveryPayload) -> Result<(), DeliveryError> {
        tracing::debug!(url = %self.url, "Posting contact message to EmailJS");

        let response = self
            .client
            .post(&self.url)
            .json(&self.request(payload))
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
        })
    }
}
