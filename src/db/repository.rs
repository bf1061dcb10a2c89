//! Database repository for CRUD operations.
//!
//! Uses prepared statements throughout; every mutation is a single-row
//! statement, so no transactions are needed.

use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Car, ContactInquiry, NewCar, NewContact};

/// Database repository for all data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ==================== CAR OPERATIONS ====================

    /// List all cars, newest first.
    ///
    /// Creation timestamps have second resolution; rowid breaks ties so
    /// that rows created within the same second still come back in
    /// reverse insertion order.
    pub async fn list_cars(&self) -> Result<Vec<Car>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, brand, price, images, description, year, fuel_type, driven, \
             transmission, ownership, registration, color, body_type, is_sold, created_at, updated_at \
             FROM cars ORDER BY created_at DESC, rowid DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|row| car_from_row(&row)).collect())
    }

    /// Get a car by ID.
    pub async fn get_car(&self, id: &str) -> Result<Option<Car>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, brand, price, images, description, year, fuel_type, driven, \
             transmission, ownership, registration, color, body_type, is_sold, created_at, updated_at \
             FROM cars WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(car_from_row))
    }

    /// Create a new car listing.
    pub async fn create_car(&self, new_car: &NewCar) -> Result<Car, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let images_json = serde_json::to_string(&new_car.images)?;

        sqlx::query(
            "INSERT INTO cars (id, name, brand, price, images, description, year, fuel_type, \
             driven, transmission, ownership, registration, color, body_type, is_sold, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&id)
        .bind(&new_car.name)
        .bind(&new_car.brand)
        .bind(new_car.price)
        .bind(&images_json)
        .bind(&new_car.description)
        .bind(new_car.year)
        .bind(&new_car.fuel_type)
        .bind(&new_car.driven)
        .bind(&new_car.transmission)
        .bind(&new_car.ownership)
        .bind(&new_car.registration)
        .bind(&new_car.color)
        .bind(&new_car.body_type)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Car {
            id,
            name: new_car.name.clone(),
            brand: new_car.brand.clone(),
            price: new_car.price,
            images: new_car.images.clone(),
            description: new_car.description.clone(),
            year: new_car.year,
            fuel_type: new_car.fuel_type.clone(),
            driven: new_car.driven.clone(),
            transmission: new_car.transmission.clone(),
            ownership: new_car.ownership.clone(),
            registration: new_car.registration.clone(),
            color: new_car.color.clone(),
            body_type: new_car.body_type.clone(),
            is_sold: false,
            created_at: now.clone(),
            updated_at: now,
        })
    }

    /// Mark a car as sold. Idempotent: re-marking a sold car succeeds.
    ///
    /// The sold flag only ever transitions false to true; there is no
    /// un-sell operation.
    pub async fn mark_car_sold(&self, id: &str) -> Result<Car, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query("UPDATE cars SET is_sold = 1, updated_at = ? WHERE id = ?")
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        self.get_car(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Car not found".to_string()))
    }

    /// Delete a car listing.
    pub async fn delete_car(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Car not found".to_string()));
        }

        Ok(())
    }

    // ==================== CONTACT OPERATIONS ====================

    /// Persist a contact inquiry. Inquiries are write-only records.
    pub async fn create_contact(&self, new_contact: &NewContact) -> Result<ContactInquiry, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            "INSERT INTO contacts (id, name, email, whatsapp, budget, interested_car, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new_contact.name)
        .bind(&new_contact.email)
        .bind(&new_contact.whatsapp)
        .bind(&new_contact.budget)
        .bind(&new_contact.interested_car)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(ContactInquiry {
            id,
            name: new_contact.name.clone(),
            email: new_contact.email.clone(),
            whatsapp: new_contact.whatsapp.clone(),
            budget: new_contact.budget.clone(),
            interested_car: new_contact.interested_car.clone(),
            created_at: now,
        })
    }
}

/// Convert a database row to a Car.
fn car_from_row(row: &SqliteRow) -> Car {
    let images_json: String = row.get("images");
    let images: Vec<String> = serde_json::from_str(&images_json).unwrap_or_default();

    Car {
        id: row.get("id"),
        name: row.get("name"),
        brand: row.get("brand"),
        price: row.get("price"),
        images,
        description: row.get("description"),
        year: row.get("year"),
        fuel_type: row.get("fuel_type"),
        driven: row.get("driven"),
        transmission: row.get("transmission"),
        ownership: row.get("ownership"),
        registration: row.get("registration"),
        color: row.get("color"),
        body_type: row.get("body_type"),
        is_sold: row.get::<i64, _>("is_sold") != 0,
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
