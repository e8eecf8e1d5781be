use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogsmith::blog::BlogService;
use blogsmith::config::{AppConfig, Settings, StorageConfig};
use blogsmith::gcp::AuthenticationManager;
use blogsmith::llm::{create_provider, TextGenerator, VertexTarget};
use blogsmith::routes::configure_routes;
use blogsmith::storage::{GcsStore, LocalStore, StoreObject};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for local runs
    dotenvy::dotenv().ok();

    let settings = Settings::parse();

    // Initialize logging
    let filter = format!("blogsmith={},warp=info", settings.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::try_from(settings).context("invalid configuration")?;

    let auth = Arc::new(
        AuthenticationManager::new()
            .await
            .context("failed to load Application Default Credentials")?,
    );

    let inference = &config.inference;
    let target = VertexTarget {
        project_id: inference.project_id.clone(),
        location: inference.location.clone(),
        request_timeout: inference.request_timeout,
    };
    let provider = create_provider(inference.model.clone(), target, Arc::clone(&auth))?;
    let generator = TextGenerator::new(
        provider,
        inference.model.clone(),
        inference.generation.clone(),
    );

    let store: Arc<dyn StoreObject> = match &config.storage {
        StorageConfig::Gcs { bucket, .. } => {
            info!(bucket = %bucket, "Storing generated content in Cloud Storage");
            Arc::new(GcsStore::new(
                bucket.clone(),
                Arc::clone(&auth),
                inference.request_timeout,
            )?)
        }
        StorageConfig::Local { base_dir, .. } => {
            info!(dir = %base_dir.display(), "Storing generated content on local disk");
            Arc::new(LocalStore::new(base_dir.clone()))
        }
    };

    let service = Arc::new(BlogService::new(
        Arc::new(generator),
        store,
        config.storage.prefix(),
    ));

    let routes = configure_routes(service);

    info!(
        addr = %config.server.addr,
        model = %inference.model,
        location = %inference.location,
        "Starting blogsmith server"
    );
    warp::serve(routes).run(config.server.addr).await;

    Ok(())
}
