//! Car listing model matching the frontend Car interface.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A car listing offered for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    /// Ordered image URLs, first one is the cover shot.
    pub images: Vec<String>,
    pub description: String,
    pub year: i64,
    pub fuel_type: String,
    pub driven: String,
    pub transmission: String,
    pub ownership: String,
    pub registration: String,
    pub color: String,
    pub body_type: String,
    #[serde(default)]
    pub is_sold: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request body for creating a new listing.
///
/// Every field is optional at the serde level so that an absent key reaches
/// field validation instead of being rejected during deserialization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub year: Option<i64>,
    #[serde(default)]
    pub fuel_type: Option<String>,
    #[serde(default)]
    pub driven: Option<String>,
    #[serde(default)]
    pub transmission: Option<String>,
    #[serde(default)]
    pub ownership: Option<String>,
    #[serde(default)]
    pub registration: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub body_type: Option<String>,
}

/// A fully validated listing, ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCar {
    pub name: String,
    pub brand: String,
    pub price: f64,
    pub images: Vec<String>,
    pub description: String,
    pub year: i64,
    pub fuel_type: String,
    pub driven: String,
    pub transmission: String,
    pub ownership: String,
    pub registration: String,
    pub color: String,
    pub body_type: String,
}

/// Uniform message for any missing or empty required field.
pub const MISSING_FIELDS: &str = "All fields are required";

fn required(field: &Option<String>) -> Result<String, AppError> {
    match field {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(AppError::Validation(MISSING_FIELDS.to_string())),
    }
}

impl CreateCarRequest {
    /// Validate field presence and typed constraints.
    ///
    /// A price of 0 is a valid listing price; only a negative price is
    /// rejected. The year is required but not range-checked.
    pub fn validate(&self) -> Result<NewCar, AppError> {
        let price = match self.price {
            Some(p) if p >= 0.0 => p,
            _ => return Err(AppError::Validation(MISSING_FIELDS.to_string())),
        };
        let year = self
            .year
            .ok_or_else(|| AppError::Validation(MISSING_FIELDS.to_string()))?;
        let images = self
            .images
            .clone()
            .ok_or_else(|| AppError::Validation(MISSING_FIELDS.to_string()))?;

        Ok(NewCar {
            name: required(&self.name)?,
            brand: required(&self.brand)?,
            price,
            images,
            description: required(&self.description)?,
            year,
            fuel_type: required(&self.fuel_type)?,
            driven: required(&self.driven)?,
            transmission: required(&self.transmission)?,
            ownership: required(&self.ownership)?,
            registration: required(&self.registration)?,
            color: required(&self.color)?,
            body_type: required(&self.body_type)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreateCarRequest {
        CreateCarRequest {
            name: Some("Fortuner".to_string()),
            brand: Some("Toyota".to_string()),
            price: Some(3_200_000.0),
            images: Some(vec!["http://x/1.jpg".to_string()]),
            description: Some("clean".to_string()),
            year: Some(2019),
            fuel_type: Some("Diesel".to_string()),
            driven: Some("40000 km".to_string()),
            transmission: Some("Automatic".to_string()),
            ownership: Some("First".to_string()),
            registration: Some("DL".to_string()),
            color: Some("White".to_string()),
            body_type: Some("SUV".to_string()),
        }
    }

    #[test]
    fn test_validate_complete_request() {
        let new_car = full_request().validate().unwrap();
        assert_eq!(new_car.name, "Fortuner");
        assert_eq!(new_car.price, 3_200_000.0);
        assert_eq!(new_car.images.len(), 1);
    }

    #[test]
    fn test_validate_missing_field() {
        let mut request = full_request();
        request.brand = None;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_empty_string_field() {
        let mut request = full_request();
        request.color = Some("   ".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_validate_price_zero_accepted() {
        let mut request = full_request();
        request.price = Some(0.0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_negative_price_rejected() {
        let mut request = full_request();
        request.price = Some(-1.0);
        assert!(request.validate().is_err());
    }
}
