use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use cloudrun_ingest::application::ports::{CounterStore, CredentialSource};
use cloudrun_ingest::application::services::IngestionService;
use cloudrun_ingest::infrastructure::credentials::EnvCredentialSource;
use cloudrun_ingest::infrastructure::observability::{TracingConfig, init_tracing};
use cloudrun_ingest::infrastructure::persistence::{
    InMemoryCounterStore, PgCounterStore, create_pool,
};
use cloudrun_ingest::infrastructure::storage::ObjectStorageFactory;
use cloudrun_ingest::infrastructure::text_processing::PdfAdapter;
use cloudrun_ingest::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;

    init_tracing(
        TracingConfig::from_settings(environment, &settings.logging),
        settings.server.port,
    );

    let object_storage = ObjectStorageFactory::create(&settings.storage)
        .context("failed to initialise object storage")?;
    let credential_source: Arc<dyn CredentialSource> = Arc::new(EnvCredentialSource::new(
        settings.credentials.secret_id_var.clone(),
        settings.credentials.secret_key_var.clone(),
    ));

    if credential_source.load().is_none() {
        tracing::warn!(
            secret_id_var = %settings.credentials.secret_id_var,
            secret_key_var = %settings.credentials.secret_key_var,
            "Storage credentials not set; PDF parse requests will fail until they are"
        );
    }

    let ingestion_service = Arc::new(IngestionService::new(
        object_storage,
        Arc::new(PdfAdapter::new()),
        credential_source,
    ));

    let counter_store: Arc<dyn CounterStore> = match settings.database.url.as_deref() {
        Some(url) => {
            let pool = create_pool(url, settings.database.max_connections)
                .await
                .context("failed to connect to PostgreSQL")?;
            Arc::new(PgCounterStore::new(pool))
        }
        None => {
            tracing::warn!("No database configured, counter is kept in memory");
            Arc::new(InMemoryCounterStore::new())
        }
    };

    let state = AppState {
        ingestion_service,
        counter_store,
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
