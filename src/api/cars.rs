//! Car listing API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{created, ok, ApiResult, MessageBody};
use crate::auth::AdminSession;
use crate::models::{Car, CreateCarRequest};
use crate::AppState;

/// Success envelope carrying a single car.
#[derive(Debug, Serialize)]
pub struct CarBody {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub car: Car,
}

/// Success envelope carrying the full listing set.
#[derive(Debug, Serialize)]
pub struct CarListBody {
    pub success: bool,
    pub cars: Vec<Car>,
}

/// GET /api/cars - List all cars, newest first.
pub async fn list_cars(State(state): State<AppState>) -> ApiResult<CarListBody> {
    let cars = state.repo.list_cars().await?;
    ok(CarListBody {
        success: true,
        cars,
    })
}

/// GET /api/cars/:id - Get a single car.
pub async fn get_car(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<CarBody> {
    match state.repo.get_car(&id).await? {
        Some(car) => ok(CarBody {
            success: true,
            message: None,
            car,
        }),
        None => Err(crate::errors::AppError::NotFound(
            "Car not found".to_string(),
        )),
    }
}

/// POST /api/cars - Create a new listing (admin).
pub async fn create_car(
    State(state): State<AppState>,
    _session: AdminSession,
    Json(request): Json<CreateCarRequest>,
) -> ApiResult<CarBody> {
    let new_car = request.validate()?;
    let car = state.repo.create_car(&new_car).await?;
    tracing::info!("Listing created: {} {} ({})", car.brand, car.name, car.id);

    created(CarBody {
        success: true,
        message: Some("Car added successfully".to_string()),
        car,
    })
}

/// PATCH /api/cars/:id/sold - Mark a car as sold (admin). Idempotent.
pub async fn mark_car_sold(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<CarBody> {
    let car = state.repo.mark_car_sold(&id).await?;
    tracing::info!("Listing marked sold: {}", car.id);

    ok(CarBody {
        success: true,
        message: None,
        car,
    })
}

/// DELETE /api/cars/:id - Delete a listing (admin).
pub async fn delete_car(
    State(state): State<AppState>,
    _session: AdminSession,
    Path(id): Path<String>,
) -> ApiResult<MessageBody> {
    state.repo.delete_car(&id).await?;
    tracing::info!("Listing deleted: {}", id);

    ok(MessageBody::new("Car deleted successfully"))
}
