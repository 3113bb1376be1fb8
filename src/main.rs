mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, startup};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let app = startup::build_app(db);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Server listening on port {}", config.port);

    axum::serve(listener, app).await?;

    Ok(())
}
