use octanime_core::ScraperConfig;
use octanime_server::{AppState, ServerConfig, router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "info,octanime_core=debug,octanime_server=debug,tower_http=info".into()
            }),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_line_number(true),
        )
        .init();

    let config = ServerConfig::from_env()?;
    let state = AppState::new(ScraperConfig::default())?;

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "Octanime API listening");

    axum::serve(listener, router(state)).await?;

    Ok(())
}
