//! Outbound delivery of accepted leads.
//!
//! A [`LeadDispatcher`] never fails the submission: every problem is folded
//! into [`DispatchOutcome::Failed`] so the caller can log it and move on.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::lead::Lead;
use crate::models::config::ServerConfig;

pub mod diagnostic;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod webhook;

pub use diagnostic::LogDispatcher;
pub use webhook::{WebhookConfig, WebhookDispatcher};

/// Errors raised while building a dispatcher or delivering a lead.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("invalid dispatcher configuration: {0}")]
    Configuration(String),

    #[error("webhook request timed out")]
    Timeout,

    #[error("webhook request failed: {0}")]
    Network(String),

    #[error("webhook responded with status {0}")]
    Status(u16),

    #[error("failed to encode lead: {0}")]
    Encoding(String),
}

/// Result of handing a lead to a dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The webhook accepted the lead with a 2xx status.
    Sent { status: u16 },
    /// No webhook is configured; the lead was only logged.
    Skipped,
    /// Delivery was attempted and failed.
    Failed(DispatchError),
}

/// Destination for accepted leads.
#[async_trait]
pub trait LeadDispatcher: Send + Sync {
    async fn dispatch(&self, lead: &Lead) -> DispatchOutcome;
}

/// Picks the webhook dispatcher when a webhook URL is configured and the log
/// dispatcher otherwise.
///
/// A webhook that cannot be set up does not stop the server: its error is
/// logged and every dispatch reports it as [`DispatchOutcome::Failed`].
pub fn from_config(config: &ServerConfig) -> Arc<dyn LeadDispatcher> {
    let Some(url) = config.webhook_url() else {
        log::info!("No lead webhook configured; leads will only be logged");
        return Arc::new(LogDispatcher);
    };

    let webhook_config = WebhookConfig {
        timeout: config.webhook_timeout_secs.map(Duration::from_secs),
        ..WebhookConfig::default()
    };
    match WebhookDispatcher::new(url, webhook_config) {
        Ok(dispatcher) => {
            log::info!(
                "Forwarding leads to webhook host {}",
                dispatcher.url().host_str().unwrap_or("?")
            );
            Arc::new(dispatcher)
        }
        Err(err) => {
            log::error!("Lead webhook is unusable, leads will not be forwarded: {err}");
            Arc::new(UnavailableDispatcher { error: err })
        }
    }
}

/// Stands in for a webhook whose configuration was rejected at start-up.
#[derive(Debug, Clone)]
pub struct UnavailableDispatcher {
    error: DispatchError,
}

#[async_trait]
impl LeadDispatcher for UnavailableDispatcher {
    async fn dispatch(&self, lead: &Lead) -> DispatchOutcome {
        log::info!("{}", LogDispatcher::record(lead));
        DispatchOutcome::Failed(self.error.clone())
    }
}
