//! Contact inquiry model.
//!
//! Inquiries are write-only records: created on submission, never read
//! back through the API.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::car::MISSING_FIELDS;

/// A customer inquiry captured from the contact form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInquiry {
    pub id: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub budget: String,
    pub interested_car: String,
    pub created_at: String,
}

/// Request body for submitting an inquiry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(default)]
    pub interested_car: Option<String>,
}

/// A validated inquiry, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub budget: String,
    pub interested_car: String,
}

fn required(field: &Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
    }
}

impl CreateContactRequest {
    /// Validate that all five fields are present and non-empty.
    pub fn validate(&self) -> Result<NewContact, AppError> {
        Ok(NewContact {
            name: required(&self.name)?,
            email: required(&self.email)?,
            whatsapp: required(&self.whatsapp)?,
            budget: required(&self.budget)?,
            interested_car: required(&self.interested_car)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateContactRequest {
        CreateContactRequest {
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            whatsapp: Some("+91 98765 43210".to_string()),
            budget: Some("30-35 lakh".to_string()),
            interested_car: Some("Fortuner".to_string()),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        assert!(full_request().validate().is_ok());
    }

    #[test]
    fn test_validate_empty_email() {
        let mut request = full_request();
        request.email = Some(String::new());
        let err = request.validate().unwrap_err();
        assert_eq!(err.message(), MISSING_FIELDS);
    }

    #[test]
    fn test_validate_absent_field() {
        let mut request = full_request();
        request.whatsapp = None;
        assert!(request.validate().is_err());
    }
}
