//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota simulada y el
//! enum de estados. Los nombres de campos se serializan en camelCase
//! para mantener el formato JSON del API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Estado del vehículo - exclusivo, determina el comportamiento por tick
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Driving,
    Charging,
    Idle,
}

/// Vehicle principal - un vehículo eléctrico simulado
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
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

impl Vehicle {
    pub fn new(
        id: u32,
        brand: &str,
        speed: f64,
        battery: f64,
        status: VehicleStatus,
        lat: f64,
        lon: f64,
        current_task: &str,
    ) -> Self {
        Self {
            id,
            brand: brand.to_string(),
            speed,
            battery,
            status,
            lat,
            lon,
            current_task: current_task.to_string(),
            last_updated: Utc::now(),
        }
    }
}

/// Flota inicial fija - se crea al arrancar el proceso y vive hasta el final.
/// No se agregan ni eliminan vehículos en runtime.
pub fn seed_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle::new(
            1,
            "Tesla Model S",
            42.0,
            78.0,
            VehicleStatus::Driving,
            37.7749,
            -122.4194,
            "Delivering food order",
        ),
        Vehicle::new(
            2,
            "Mercedes EQS",
            0.0,
            89.0,
            VehicleStatus::Charging,
            37.7849,
            -122.4094,
            "Charging at mall",
        ),
        Vehicle::new(
            3,
            "Audi e-tron",
            28.0,
            63.0,
            VehicleStatus::Driving,
            37.7649,
            -122.4294,
            "Transporting passenger",
        ),
        Vehicle::new(
            4,
            "BMW 7 Series",
            0.0,
            41.0,
            VehicleStatus::Idle,
            37.7549,
            -122.4394,
            "Waiting at parking lot",
        ),
    ]
}
