use meeple_api::{app, AppState};
use meeple_core::{init_tracing, serve, MeepleConfig, ServerConfig};
use meeple_data::{connect, DatabaseConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = MeepleConfig::load("dev")?;
    let server: ServerConfig = config.section()?;
    let database: DatabaseConfig = config.section()?;
    tracing::info!(profile = config.profile(), "starting meeple");

    let pool = connect(&database).await?;
    let result = serve(app(AppState::new(pool.clone())), &server.addr).await;

    pool.close().await;
    tracing::info!("database pool closed");
    result?;
    Ok(())
}
