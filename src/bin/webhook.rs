use extraction_client::api::client::ExtractionClient;
use extraction_client::config::ClientConfig;
use extraction_client::webhook::handlers::{router, SharedApi};

use std::net::SocketAddr;
use std::sync::Arc;

/// The extraction service is configured to deliver notifications to this
/// fixed port.
const WEBHOOK_PORT: u16 = 3008;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ClientConfig::from_env()?;
    let api: SharedApi = Arc::new(ExtractionClient::new(&config));

    let app = router(api);

    let addr = SocketAddr::from(([0, 0, 0, 0], WEBHOOK_PORT));
    tracing::info!("Webhook listening on port {}", WEBHOOK_PORT);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
