//! Robotic recipe engine API — SOP generation and feedback optimization
//! over HTTP.

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use rc_api::config::ApiConfig;
use rc_api::routes;
use rc_api::state::AppState;
use rc_engine::Pipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "rc-api starting");

    let config = ApiConfig::from_env()?;
    let pipeline = Pipeline::from_config(config.engine.clone())?;
    tracing::info!(
        parse_latency_ms = config.engine.parse_latency_ms,
        max_temperature_celsius = config.engine.limits.max_temperature_celsius,
        "pipeline configured"
    );

    let state = AppState::new(pipeline).with_max_sessions(config.max_sessions);
    let app = routes::build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
