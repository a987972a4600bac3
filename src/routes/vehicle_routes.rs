use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::vehicle_dto::{FleetListResponse, VehicleLookupResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/:id", get(get_vehicle))
}

async fn list_vehicles(State(state): State<AppState>) -> Json<FleetListResponse> {
    let controller = VehicleController::new(state.fleet.clone());
    Json(controller.list().await)
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<VehicleLookupResponse>, AppError> {
    let controller = VehicleController::new(state.fleet.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}
