use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use eco_planner::config::ServerConfig;
use eco_planner::web::{AppState, create_router};

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "eco_planner=info,tower_http=info";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    // Load configuration (fail fast on bad weights or addresses)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let addr = config.bind_addr;
    let weights = config.scoring.weights;
    info!(
        carbon = weights.carbon,
        mode_efficiency = weights.mode_efficiency,
        renewable_energy = weights.renewable_energy,
        congestion_reduction = weights.congestion_reduction,
        max_batch_routes = config.max_batch_routes,
        "loaded scoring configuration"
    );

    let state = AppState::new(config);
    let app = create_router(state);

    info!("Eco route planner listening on http://{addr}");
    info!("API Endpoints:");
    info!("  GET  /health               - Health check");
    info!("  GET  /api/emission-factors - Emission factor table");
    info!("  POST /api/routes/score     - Score and rank candidate routes");
    info!("  POST /api/routes/compare   - Compare one route with driving");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app).await.expect("Server error");
}
