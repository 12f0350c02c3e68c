use tracing::{info, warn};
use trianglet::config::AppConfig;
use trianglet::error::StartupError;
use trianglet::router;
use trianglet::state::AppState;

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt::init();

    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            warn!(error = %err, "failed to load .env");
        }
    }

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr();
    let y_axis = config.convention.y_axis;
    let decimals = config.convention.decimals;
    let state = AppState::new(config);
    let base = state.routes.base().to_string();

    let app = router::app(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, %base, %y_axis, decimals, "trianglet listening");
    axum::serve(listener, app).await?;
    Ok(())
}
