//! Form definitions backing the landing page routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod lead;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}

impl FormError {
    /// Names of the fields that failed validation, sorted.
    pub fn missing_fields(&self) -> Vec<String> {
        match self {
            FormError::Validation(errors) => {
                let mut fields = errors
                    .field_errors()
                    .keys()
                    .map(|field| field.to_string())
                    .collect::<Vec<_>>();
                fields.sort_unstable();
                fields
            }
        }
    }
}
