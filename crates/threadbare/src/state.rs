//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. The item store is held as a trait object so the storage
//! backend can be swapped via feature flags.

use std::{path::PathBuf, sync::Arc, time::Duration};

use threadbare_core::storage::ItemRepository;

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Item repository backing every catalog and detail lookup.
    pub item_repo: Arc<dyn ItemRepository>,
    /// Directory served under `/uploads`.
    pub upload_dir: PathBuf,
    /// Timeout applied to every request.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new AppState around an existing repository.
    pub fn build(item_repo: Arc<dyn ItemRepository>, config: &Config) -> Self {
        Self {
            item_repo,
            upload_dir: config.upload_dir.clone(),
            request_timeout: config.request_timeout(),
        }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState backed by the SQLite file at `config.sqlite_path`.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            let repo = SqliteRepository::new(&config.sqlite_path).await?;
            tracing::info!(path = %config.sqlite_path, "Opened SQLite item store");
            Ok(Self::build(Arc::new(repo), config))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        /// Useful for demos without a database file.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory item store");
            Ok(Self::build(Arc::new(InMemoryRepository::new()), config))
        }
    }
}

// ============================================================================
// Test support
// ============================================================================
