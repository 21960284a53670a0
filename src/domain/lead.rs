//! Domain model for a landing page lead.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// Origin tag attached to every lead captured by this service.
pub const LEAD_SOURCE: &str = "landing-page";

/// Normalized lead as forwarded to the webhook.
///
/// Every text field is already trimmed. `company` and `email` are guaranteed
/// non-empty when the value was produced by
/// [`LeadForm::into_lead`](crate::forms::lead::LeadForm::into_lead).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub role: String,
    pub volume: String,
    pub message: String,
    #[serde(serialize_with = "serialize_timestamp")]
    pub submitted_at: DateTime<Utc>,
    pub source: &'static str,
}

impl Lead {
    /// JSON document sent to the webhook and written to the diagnostic log.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Writes timestamps as `2026-01-02T03:04:05.678Z`.
fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::Value;

    use super::*;

    fn sample_lead() -> Lead {
        Lead {
            name: "Jane Smith".to_string(),
            company: "Acme".to_string(),
            email: "a@acme.com".to_string(),
            phone: String::new(),
            website: String::new(),
            role: "Director".to_string(),
            volume: "10/week".to_string(),
            message: String::new(),
            submitted_at: Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap(),
            source: LEAD_SOURCE,
        }
    }

    #[test]
    fn serializes_exactly_the_lead_fields() {
        let value = serde_json::to_value(sample_lead()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys = object.keys().map(String::as_str).collect::<Vec<_>>();
        keys.sort_unstable();

        assert_eq!(
            keys,
            vec![
                "company",
                "email",
                "message",
                "name",
                "phone",
                "role",
                "source",
                "submittedAt",
                "volume",
                "website",
            ]
        );
        assert_eq!(object["source"], Value::from("landing-page"));
        assert_eq!(object["company"], Value::from("Acme"));
    }

    #[test]
    fn submitted_at_uses_millisecond_utc_format() {
        let json = sample_lead().to_json().unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let submitted_at = value["submittedAt"].as_str().unwrap();

        assert_eq!(submitted_at, "2026-01-02T03:04:05.000Z");
        assert!(DateTime::parse_from_rfc3339(submitted_at).is_ok());
    }
}
