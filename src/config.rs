use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_notification::{EmailJsConfig, SmtpConfig};
use serde::Deserialize;
use std::env;
use validator::Validate;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub emailjs: EmailJsConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    #[serde(rename = "emailjs")]
    EmailJs,
    #[serde(rename = "smtp")]
    Smtp,
    #[default]
    #[serde(rename = "dry-run")]
    DryRun,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub backend: Backend,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON log lines instead of the console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Validate)]
struct SmtpAddresses {
    #[validate(email)]
    from_address: String,
    #[validate(email)]
    contact_address: String,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__EMAILJS__SERVICE_ID, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("delivery.backend", "dry-run")?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, a missing file falls back to defaults
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate the settings needed by the selected delivery backend
    pub fn validate(&self) -> Result<(), String> {
        match self.delivery.backend {
            Backend::EmailJs => {
                if self.emailjs.service_id.is_empty()
                    || self.emailjs.template_id.is_empty()
                    || self.emailjs.public_key.is_empty()
                {
                    return Err(
                        "EmailJS service_id, template_id and public_key must be set".to_string()
                    );
                }
                if self.emailjs.timeout_secs == 0 {
                    return Err("EmailJS timeout_secs must be greater than 0".to_string());
                }
            }
            Backend::Smtp => {
                if self.smtp.port == 0 {
                    return Err("SMTP port must be greater than 0".to_string());
                }

                SmtpAddresses {
                    from_address: self.smtp.from_address.to_owned(),
                    contact_address: self.smtp.contact_address.to_owned(),
                }
                .validate()
                .map_err(|e| format!("Invalid SMTP address: {e}"))?;
            }
            Backend::DryRun => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emailjs_config() -> Config {
        Config {
            delivery: DeliveryConfig {
                backend: Backend::EmailJs,
            },
            emailjs: EmailJsConfig {
                service_id: "service_portfolio".to_string(),
                template_id: "template_contact".to_string(),
                public_key: "public-key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_default_config() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_emailjs_complete() {
        assert!(emailjs_config().validate().is_ok());
    }

    #[test]
    fn test_validation_emailjs_missing_template() {
        let mut config = emailjs_config();
        config.emailjs.template_id.clear();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_emailjs_zero_timeout() {
        let mut config = emailjs_config();
        config.emailjs.timeout_secs = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_smtp_zero_port() {
        let config = Config {
            delivery: DeliveryConfig {
                backend: Backend::Smtp,
            },
            smtp: SmtpConfig {
                port: 0,
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_smtp_bad_contact_address() {
        let config = Config {
            delivery: DeliveryConfig {
                backend: Backend::Smtp,
            },
            smtp: SmtpConfig {
                contact_address: "not-an-address".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().is_err());
    }
}
