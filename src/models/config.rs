//! Configuration model loaded from external sources.

use std::env;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable read by earlier deployments for the webhook address.
pub const LEAD_WEBHOOK_URL_VAR: &str = "LEAD_WEBHOOK_URL";

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Endpoint receiving accepted leads. Blank means "not configured".
    #[serde(default)]
    pub lead_webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_timeout_secs: Option<u64>,
}

impl ServerConfig {
    /// Loads `config/default`, then `config/{APP_ENV}`, then `APP_*`
    /// variables, then a non-blank `LEAD_WEBHOOK_URL`.
    pub fn load() -> Result<Self, ConfigError> {
        // Select config profile (defaults to `local`).
        let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".into());

        let builder = Config::builder()
            .add_source(File::with_name("config/default"))
            .add_source(File::with_name(&format!("config/{app_env}")).required(false))
            .add_source(Environment::with_prefix("APP"));

        Self::from_builder(builder, env::var(LEAD_WEBHOOK_URL_VAR).ok())
    }

    /// Applies the `LEAD_WEBHOOK_URL` value on top of `builder`. A blank value
    /// leaves the other sources in charge.
    fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        lead_webhook_url: Option<String>,
    ) -> Result<Self, ConfigError> {
        let lead_webhook_url = lead_webhook_url.filter(|url| !url.trim().is_empty());

        builder
            .set_override_option("lead_webhook_url", lead_webhook_url)?
            .build()?
            .try_deserialize()
    }

    /// Configured webhook URL, ignoring blank values.
    pub fn webhook_url(&self) -> Option<&str> {
        self.lead_webhook_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}
