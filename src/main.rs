use tracing::info;
use winestore::configuration::get_configuration;
use winestore::server::configure_app;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let settings = get_configuration()?;
    let app = configure_app();

    let addr = format!(
        "{}:{}",
        settings.application.host, settings.application.port
    );
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Starting server on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
