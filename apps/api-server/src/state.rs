//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::PostRepository;
use quill_infra::{DatabaseConfig, InMemoryPostRepository};

use crate::config::{AppConfig, StoreBackend};

/// Shared application state, built once at startup and handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, config: AppConfig) -> Self {
        Self {
            posts,
            config: Arc::new(config),
        }
    }

    /// Open the configured record store. Any error here is fatal to startup.
    pub async fn init(config: AppConfig) -> anyhow::Result<Self> {
        let posts: Arc<dyn PostRepository> = match config.store {
            StoreBackend::Postgres => open_postgres(&config.database).await?,
            StoreBackend::Memory => {
                tracing::warn!("STORE_BACKEND=memory - posts will not survive a restart");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        tracing::info!("Application state initialized");

        Ok(Self::new(posts, config))
    }
}

#[cfg(feature = "postgres")]
async fn open_postgres(config: &DatabaseConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    use anyhow::Context;
    use migration::{Migrator, MigratorTrait};
    use quill_infra::PostgresPostRepository;

    let conn = quill_infra::database::connect(config)
        .await
        .context("failed to connect to database")?;

    if config.auto_migrate {
        Migrator::up(&conn, None)
            .await
            .context("failed to apply database migrations")?;
        tracing::info!("Database schema up to date");
    }

    Ok(Arc::new(PostgresPostRepository::new(conn)))
}

#[cfg(not(feature = "postgres"))]
async fn open_postgres(_config: &DatabaseConfig) -> anyhow::Result<Arc<dyn PostRepository>> {
    anyhow::bail!("built without the `postgres` feature; set STORE_BACKEND=memory")
}
