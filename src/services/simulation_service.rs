//! Servicio de simulación de flota
//!
//! Avanza el estado de cada vehículo un paso discreto por tick, según su
//! estado actual (driving / charging / idle). El barrido corre en una tarea
//! periódica durante toda la vida del proceso; no tiene modos de fallo,
//! toda la aritmética está acotada.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;
use tracing::{debug, info};

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::state::FleetStore;

/// Velocidad máxima simulada en km/h
pub const MAX_SPEED: f64 = 80.0;
/// Umbral de batería baja: driving -> charging
pub const LOW_BATTERY_THRESHOLD: f64 = 20.0;
/// Umbral de carga completa: charging -> driving
pub const CHARGED_THRESHOLD: f64 = 95.0;
/// Probabilidad por tick de que un vehículo idle reciba un viaje
pub const IDLE_DISPATCH_PROBABILITY: f64 = 0.1;

/// Avanzar un vehículo un paso de simulación.
///
/// - driving: perturba posición y velocidad, descarga batería; pasa a
///   charging cuando la batería baja de 20.
/// - charging: carga batería con velocidad forzada a 0; vuelve a driving
///   cuando la batería supera 95.
/// - idle: con probabilidad fija recibe un viaje nuevo y arranca.
///
/// `last_updated` se refresca siempre, ejecute la rama que ejecute.
pub fn advance_vehicle(vehicle: &mut Vehicle, rng: &mut impl Rng, now: DateTime<Utc>) {
    match vehicle.status {
        VehicleStatus::Driving => {
            vehicle.lat += rng.gen_range(-0.5..0.5) * 0.001;
            vehicle.lon += rng.gen_range(-0.5..0.5) * 0.001;

            vehicle.speed = (vehicle.speed + rng.gen_range(-5.0..5.0)).clamp(0.0, MAX_SPEED);
            vehicle.battery = (vehicle.battery - rng.gen_range(0.0..2.0)).max(0.0);

            if vehicle.battery < LOW_BATTERY_THRESHOLD {
                vehicle.status = VehicleStatus::Charging;
                vehicle.speed = 0.0;
                vehicle.current_task = "Low battery - finding charger".to_string();
            }
        }

        VehicleStatus::Charging => {
            vehicle.battery = (vehicle.battery + rng.gen_range(0.0..5.0)).min(100.0);
            vehicle.speed = 0.0;

            if vehicle.battery > CHARGED_THRESHOLD {
                vehicle.status = VehicleStatus::Driving;
                vehicle.current_task = "Back on the road".to_string();
            }
        }

        VehicleStatus::Idle => {
            if rng.gen_bool(IDLE_DISPATCH_PROBABILITY) {
                vehicle.status = VehicleStatus::Driving;
                vehicle.speed = rng.gen_range(20.0..60.0);
                vehicle.current_task = "Got new ride request".to_string();
            }
        }
    }

    vehicle.last_updated = now;
}

/// Bucle periódico de simulación. Corre hasta que el proceso termina:
/// no hay cancelación ni trigger externo.
pub async fn run_simulation(fleet: FleetStore, tick_interval: Duration) {
    info!(
        "🚗 Simulación de flota iniciada - tick cada {} ms",
        tick_interval.as_millis()
    );

    // ThreadRng no es Send; StdRng sí puede vivir dentro de la tarea
    let mut rng = StdRng::from_entropy();
    let mut ticker = tokio::time::interval(tick_interval);

    loop {
        ticker.tick().await;
        let now = Utc::now();
        fleet
            .sweep(|vehicle| advance_vehicle(vehicle, &mut rng, now))
            .await;
        debug!("🔄 Barrido de simulación completado");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::vehicle::seed_fleet;

    fn rng() -> StdRng {
        StdRng::from_entropy()
    }

    fn driving_vehicle(battery: f64) -> Vehicle {
        Vehicle::new(
            1,
            "Tesla Model S",
            42.0,
            battery,
            VehicleStatus::Driving,
            37.7749,
            -122.4194,
            "Delivering food order",
        )
    }

    #[test]
    fn bounds_hold_over_many_ticks() {
        let mut rng = rng();
        let mut fleet = seed_fleet();
        let now = Utc::now();

        for _ in 0..5_000 {
            for vehicle in fleet.iter_mut() {
                advance_vehicle(vehicle, &mut rng, now);
                assert!(
                    (0.0..=MAX_SPEED).contains(&vehicle.speed),
                    "speed fuera de rango: {}",
                    vehicle.speed
                );
                assert!(
                    (0.0..=100.0).contains(&vehicle.battery),
                    "battery fuera de rango: {}",
                    vehicle.battery
                );
            }
        }
    }

    #[test]
    fn driving_switches_to_charging_on_low_battery() {
        let mut rng = rng();
        // Batería tan baja que cualquier descarga la deja bajo el umbral
        let mut vehicle = driving_vehicle(1.0);

        advance_vehicle(&mut vehicle, &mut rng, Utc::now());

        assert_eq!(vehicle.status, VehicleStatus::Charging);
        assert_eq!(vehicle.speed, 0.0);
        assert_eq!(vehicle.current_task, "Low battery - finding charger");
    }

    #[test]
    fn charging_switches_to_driving_when_full() {
        let mut rng = rng();
        let mut vehicle = driving_vehicle(96.0);
        vehicle.status = VehicleStatus::Charging;
        vehicle.speed = 0.0;

        // Con batería > 95 cualquier incremento la mantiene sobre el umbral
        advance_vehicle(&mut vehicle, &mut rng, Utc::now());

        assert_eq!(vehicle.status, VehicleStatus::Driving);
        assert!(vehicle.battery <= 100.0);
        assert_eq!(vehicle.current_task, "Back on the road");
    }

    #[test]
    fn charging_forces_speed_to_zero() {
        let mut rng = rng();
        let mut vehicle = driving_vehicle(50.0);
        vehicle.status = VehicleStatus::Charging;
        vehicle.speed = 30.0;

        advance_vehicle(&mut vehicle, &mut rng, Utc::now());

        assert_eq!(vehicle.speed, 0.0);
    }

    #[test]
    fn idle_stays_idle_or_starts_driving_in_range() {
        let mut rng = rng();

        for _ in 0..1_000 {
            let mut vehicle = driving_vehicle(41.0);
            vehicle.status = VehicleStatus::Idle;
            vehicle.speed = 0.0;
            vehicle.current_task = "Waiting at parking lot".to_string();

            advance_vehicle(&mut vehicle, &mut rng, Utc::now());

            match vehicle.status {
                VehicleStatus::Idle => {
                    assert_eq!(vehicle.speed, 0.0);
                    assert_eq!(vehicle.battery, 41.0);
                    assert_eq!(vehicle.current_task, "Waiting at parking lot");
                }
                VehicleStatus::Driving => {
                    assert!((20.0..=60.0).contains(&vehicle.speed));
                    assert_eq!(vehicle.current_task, "Got new ride request");
                }
                VehicleStatus::Charging => panic!("idle nunca pasa directo a charging"),
            }
        }
    }

    #[test]
    fn idle_position_never_moves() {
        let mut rng = rng();
        let mut vehicle = driving_vehicle(41.0);
        vehicle.status = VehicleStatus::Idle;
        let (lat, lon) = (vehicle.lat, vehicle.lon);

        for _ in 0..100 {
            // El estado puede cambiar a driving; solo comprobamos mientras siga idle
            if vehicle.status != VehicleStatus::Idle {
                break;
            }
            advance_vehicle(&mut vehicle, &mut rng, Utc::now());
        }

        if vehicle.status == VehicleStatus::Idle {
            assert_eq!((vehicle.lat, vehicle.lon), (lat, lon));
        }
    }

    #[test]
    fn last_updated_refreshes_every_tick() {
        let mut rng = rng();
        let mut vehicle = driving_vehicle(78.0);
        let before = vehicle.last_updated;

        let now = Utc::now();
        advance_vehicle(&mut vehicle, &mut rng, now);

        assert_eq!(vehicle.last_updated, now);
        assert!(vehicle.last_updated >= before);
    }

    #[test]
    fn deterministic_with_seeded_rng() {
        let now = Utc::now();
        let mut a = driving_vehicle(78.0);
        let mut b = driving_vehicle(78.0);

        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        advance_vehicle(&mut a, &mut rng_a, now);
        advance_vehicle(&mut b, &mut rng_b, now);

        assert_eq!(a.speed, b.speed);
        assert_eq!(a.battery, b.battery);
        assert_eq!((a.lat, a.lon), (b.lat, b.lon));
    }
}
