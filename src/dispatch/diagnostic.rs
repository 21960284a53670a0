//! Fallback dispatcher used when no webhook is configured.

use async_trait::async_trait;

use crate::dispatch::{DispatchOutcome, LeadDispatcher};
use crate::domain::lead::Lead;

/// Writes each lead to the application log instead of sending it anywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDispatcher;

impl LogDispatcher {
    /// Diagnostic line written for `lead`.
    pub fn record(lead: &Lead) -> String {
        match lead.to_json() {
            Ok(json) => format!("[lead] {json}"),
            Err(_) => format!("[lead] {lead:?}"),
        }
    }
}

#[async_trait]
impl LeadDispatcher for LogDispatcher {
    async fn dispatch(&self, lead: &Lead) -> DispatchOutcome {
        log::info!("{}", Self::record(lead));
        DispatchOutcome::Skipped
    }
}
