//! DTOs del API de vehículos
//!
//! Formas de respuesta JSON del Query Surface. El API es de solo lectura:
//! no hay requests de creación ni actualización.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Response de un vehículo individual
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: u32,
    pub brand: String,
    pub speed: f64,
    pub battery: f64,
    pub status: VehicleStatus,
    pub lat: f64,
    pub lon: f64,
    pub current_task: String,
    pub last_updated: DateTime<Utc>,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            brand: vehicle.brand,
            speed: vehicle.speed,
            battery: vehicle.battery,
            status: vehicle.status,
            lat: vehicle.lat,
            lon: vehicle.lon,
            current_task: vehicle.current_task,
            last_updated: vehicle.last_updated,
        }
    }
}

/// Response del listado completo: flag de éxito + timestamp de respuesta
#[derive(Debug, Serialize)]
pub struct FleetListResponse {
    pub success: bool,
    pub data: Vec<VehicleResponse>,
    pub timestamp: DateTime<Utc>,
}

impl FleetListResponse {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self {
            success: true,
            data: vehicles.into_iter().map(VehicleResponse::from).collect(),
            timestamp: Utc::now(),
        }
    }
}

/// Response de búsqueda por id
#[derive(Debug, Serialize)]
pub struct VehicleLookupResponse {
    pub success: bool,
    pub data: VehicleResponse,
}

impl VehicleLookupResponse {
    pub fn new(vehicle: Vehicle) -> Self {
        Self {
            success: true,
            data: vehicle.into(),
        }
    }
}
