//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum. La flota vive en memoria detrás de un
//! RwLock: un solo escritor (el tick de simulación) y muchos lectores
//! (los handlers de consulta).

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::vehicle::Vehicle;

/// Colección autoritativa de vehículos, en orden de inserción.
#[derive(Clone)]
pub struct FleetStore {
    vehicles: Arc<RwLock<Vec<Vehicle>>>,
}

impl FleetStore {
    pub fn new(seed: Vec<Vehicle>) -> Self {
        Self {
            vehicles: Arc::new(RwLock::new(seed)),
        }
    }

    /// Snapshot completo de la flota, orden de inserción preservado.
    pub async fn list(&self) -> Vec<Vehicle> {
        self.vehicles.read().await.clone()
    }

    /// Buscar un vehículo por id. None si no existe.
    pub async fn get(&self, id: u32) -> Option<Vehicle> {
        self.vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    /// Acceso de escritura para el barrido de simulación.
    /// Único punto de mutación: ningún handler escribe en el store.
    pub async fn sweep<F>(&self, mut f: F)
    where
        F: FnMut(&mut Vehicle),
    {
        let mut vehicles = self.vehicles.write().await;
        for vehicle in vehicles.iter_mut() {
            f(vehicle);
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub fleet: FleetStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(fleet: FleetStore, config: EnvironmentConfig) -> Self {
        Self { fleet, config }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::seed_fleet;

    #[tokio::test]
    async fn get_returns_none_for_unknown_id() {
        let store = FleetStore::new(seed_fleet());
        assert!(store.get(99).await.is_none());
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = FleetStore::new(seed_fleet());
        let fleet = store.list().await;
        assert_eq!(fleet.len(), 4);
        assert!(fleet.windows(2).all(|w| w[0].id < w[1].id));
    }
}
