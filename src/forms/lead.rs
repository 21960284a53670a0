use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::domain::lead::{LEAD_SOURCE, Lead};
use crate::forms::FormError;

/// Form data posted from the landing page apply section.
///
/// Fields absent from the request body deserialize as empty strings.
#[derive(Debug, Default, Clone, Deserialize, Validate)]
#[serde(default)]
pub struct LeadForm {
    pub name: String,
    #[validate(length(min = 1))]
    pub company: String,
    #[validate(length(min = 1))]
    pub email: String,
    pub phone: String,
    pub website: String,
    pub role: String,
    pub volume: String,
    pub message: String,
}

impl LeadForm {
    /// Trims every field, validates the required ones and stamps the lead.
    pub fn into_lead(self, submitted_at: DateTime<Utc>) -> Result<Lead, FormError> {
        let form = self.trimmed();
        form.validate()?;

        Ok(Lead {
            name: form.name,
            company: form.company,
            email: form.email,
            phone: form.phone,
            website: form.website,
            role: form.role,
            volume: form.volume,
            message: form.message,
            submitted_at,
            source: LEAD_SOURCE,
        })
    }

    fn trimmed(self) -> Self {
        fn trim(value: String) -> String {
            value.trim().to_string()
        }

        Self {
            name: trim(self.name),
            company: trim(self.company),
            email: trim(self.email),
            phone: trim(self.phone),
            website: trim(self.website),
            role: trim(self.role),
            volume: trim(self.volume),
            message: trim(self.message),
        }
    }
}
