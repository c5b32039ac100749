use classifier_client::telemetry;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from an optional .env file.
    // Every variable has a fallback, so a missing file is fine.
    let _ = dotenvy::dotenv();

    // Global filter at INFO, classifier-client at DEBUG so the outbound
    // requests of the demo are visible without RUST_LOG gymnastics.
    let filter = telemetry::env_filter_with_level("info", Level::DEBUG);

    tracing_subscriber::registry()
        .with(filter)
        .with(telemetry::layer())
        .init();

    api::start().await?;

    Ok(())
}
