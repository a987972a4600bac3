use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::info;

use fleet_monitor::config::environment::EnvironmentConfig;
use fleet_monitor::models::vehicle::seed_fleet;
use fleet_monitor::routes::create_app;
use fleet_monitor::services::simulation_service::run_simulation;
use fleet_monitor::state::{AppState, FleetStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🚗 Fleet Monitor - API de flota simulada");
    info!("========================================");

    let config = EnvironmentConfig::default();

    // Crear la flota desde los datos seed y arrancar la simulación
    let fleet = FleetStore::new(seed_fleet());
    let tick_interval = Duration::from_millis(config.tick_interval_ms);
    tokio::spawn(run_simulation(fleet.clone(), tick_interval));

    let app_state = AppState::new(fleet, config.clone());
    let app = create_app(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/vehicles - Listar flota completa");
    info!("   GET  /api/vehicles/:id - Obtener vehículo");
    info!(
        "🔄 Simulación activa - los vehículos se mueven cada {} ms",
        config.tick_interval_ms
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
