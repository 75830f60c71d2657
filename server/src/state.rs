// catalog_app/src/state.rs
use crate::config::{AppConfig, StoreBackend};
use crate::errors::{AppError, Result};
use catalog_query::{InMemoryProductStore, PgProductStore, ProductStore};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing::info;

/// Immutable per-process state shared with every handler.
#[derive(Clone)]
pub struct AppState {
  pub store: Arc<dyn ProductStore>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  pub fn new(store: Arc<dyn ProductStore>, config: Arc<AppConfig>) -> Self {
    Self { store, config }
  }

  /// Connects the configured backend, applying migrations first when asked to.
  pub async fn from_config(config: Arc<AppConfig>) -> Result<Self> {
    let store: Arc<dyn ProductStore> = match config.store_backend {
      StoreBackend::Memory => {
        info!("Using the in-memory demo catalog.");
        Arc::new(InMemoryProductStore::demo())
      }
      StoreBackend::Postgres => {
        let url = config
          .database_url
          .as_deref()
          .ok_or_else(|| AppError::Config("DATABASE_URL is not set".to_string()))?;
        let pool = PgPoolOptions::new()
          .max_connections(config.database_max_connections)
          .connect(url)
          .await?;
        info!("Successfully connected to the database.");

        if config.run_migrations {
          sqlx::migrate!("./migrations").run(&pool).await?;
          info!("Database migrations applied.");
        }
        Arc::new(PgProductStore::new(pool))
      }
    };
    Ok(Self::new(store, config))
  }
}
