//! Lead intake workflow: normalize, validate, dispatch.

use chrono::{DateTime, Utc};

use crate::dispatch::{DispatchOutcome, LeadDispatcher};
use crate::forms::lead::LeadForm;

/// What happened to a submitted lead form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Required fields were empty after trimming; nothing was dispatched.
    Invalid { missing_fields: Vec<String> },
    /// The lead passed validation. Dispatch failures do not change this.
    Accepted(DispatchOutcome),
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmissionOutcome::Accepted(_))
    }
}

/// Normalizes the posted form and hands valid leads to `dispatcher`.
pub async fn submit_lead<D>(
    dispatcher: &D,
    form: LeadForm,
    submitted_at: DateTime<Utc>,
) -> SubmissionOutcome
where
    D: LeadDispatcher + ?Sized,
{
    let lead = match form.into_lead(submitted_at) {
        Ok(lead) => lead,
        Err(err) => {
            let missing_fields = err.missing_fields();
            log::info!("Rejected lead submission, missing {missing_fields:?}");
            return SubmissionOutcome::Invalid { missing_fields };
        }
    };

    let outcome = dispatcher.dispatch(&lead).await;
    if let DispatchOutcome::Failed(err) = &outcome {
        log::warn!("Lead from {} accepted but not forwarded: {err}", lead.company);
    }

    SubmissionOutcome::Accepted(outcome)
}
