use extraction_client::api::client::ExtractionClient;
use extraction_client::api::ExtractionApi;
use extraction_client::config::ClientConfig;
use extraction_client::polling::poller::BundlePoller;
use extraction_client::polling::types::PollSettings;
use extraction_client::uploader::transfer::upload_directory;

use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = ClientConfig::from_env()?;
    let api = Arc::new(ExtractionClient::new(&config));

    // The demo submits to the most recently created project. A real
    // integration would already know the id of its workflow.
    let project = api.latest_project().await?;
    tracing::info!("Using project {}", project.project_id);

    // 1. Upload all local documents into the service's cloud.
    let documents = upload_directory(api.as_ref(), &config.documents_dir).await?;
    anyhow::ensure!(
        !documents.is_empty(),
        "no documents to submit in {}",
        config.documents_dir.display()
    );
    tracing::info!("Uploaded {} documents", documents.len());

    // 2. Submit the uploaded documents as a bundle.
    let bundle_name = config
        .bundle_name
        .clone()
        .unwrap_or_else(|| format!("bundle-{}", uuid::Uuid::new_v4()));

    let bundle_id = api
        .create_bundle(&project.project_id, &bundle_name, &documents)
        .await?;
    tracing::info!("New bundle id: {}", bundle_id);

    // 3. Poll until the extraction is done. Ctrl+C stops the session
    // through the poller's cancellation handle.
    let poller = BundlePoller::new(
        api.clone(),
        PollSettings {
            interval: config.poll_interval,
            max_checks: config.poll_max_checks,
        },
    );

    let cancel = poller.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping the poller");
            cancel.cancel();
        }
    });

    let results = poller
        .wait_for_results(&project.project_id, &bundle_id)
        .await?;

    tracing::info!("Results are ready:");
    println!("{}", serde_json::to_string_pretty(&results)?);

    Ok(())
}
