use crate::dto::vehicle_dto::{FleetListResponse, VehicleLookupResponse};
use crate::state::FleetStore;
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleController {
    fleet: FleetStore,
}

impl VehicleController {
    pub fn new(fleet: FleetStore) -> Self {
        Self { fleet }
    }

    pub async fn list(&self) -> FleetListResponse {
        let vehicles = self.fleet.list().await;
        FleetListResponse::new(vehicles)
    }

    pub async fn get_by_id(&self, id: u32) -> Result<VehicleLookupResponse, AppError> {
        let vehicle = self
            .fleet
            .get(id)
            .await
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(VehicleLookupResponse::new(vehicle))
    }
}
