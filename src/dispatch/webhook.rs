//! HTTP webhook dispatcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Url;

use crate::dispatch::{DispatchError, DispatchOutcome, LeadDispatcher};
use crate::domain::lead::Lead;

/// Settings for the webhook HTTP client.
#[derive(Debug, Clone)]
pub struct WebhookConfig {
    /// Whole-request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            user_agent: concat!("atlas-leads/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Posts each lead as JSON to a fixed webhook endpoint.
///
/// There is a single attempt per lead. Non-2xx responses, timeouts and
/// connection errors are reported as [`DispatchOutcome::Failed`].
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    client: reqwest::Client,
    url: Url,
}

impl WebhookDispatcher {
    /// Creates a dispatcher for `url`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Configuration`] when the URL does not parse or
    /// the HTTP client cannot be built.
    pub fn new(url: &str, config: WebhookConfig) -> Result<Self, DispatchError> {
        let url = Url::parse(url)
            .map_err(|e| DispatchError::Configuration(format!("invalid webhook url: {e}")))?;

        let mut builder = reqwest::Client::builder().user_agent(config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            DispatchError::Configuration(format!("failed to build HTTP client: {e}"))
        })?;

        Ok(Self { client, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn post(&self, lead: &Lead) -> Result<u16, DispatchError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(lead)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    DispatchError::Timeout
                } else if e.is_builder() {
                    DispatchError::Encoding(e.to_string())
                } else {
                    DispatchError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(DispatchError::Status(status.as_u16()))
        }
    }
}

#[async_trait]
impl LeadDispatcher for WebhookDispatcher {
    async fn dispatch(&self, lead: &Lead) -> DispatchOutcome {
        match self.post(lead).await {
            Ok(status) => {
                log::debug!("Webhook accepted lead from {} ({status})", lead.company);
                DispatchOutcome::Sent { status }
            }
            Err(err) => {
                log::warn!("Failed to forward lead from {}: {err}", lead.company);
                DispatchOutcome::Failed(err)
            }
        }
    }
}
