use tokio::net::TcpListener;
use tracing::info;

use tagline_generator::{api::routes::create_router, config::Config, telemetry, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init();

    let config = Config::load()?;
    let server_addr = config.server_addr;

    let app = create_router(AppState::new(config));

    let listener = TcpListener::bind(server_addr).await?;
    info!(%server_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
