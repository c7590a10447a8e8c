//! Repository Module
//!
//! Data access layer for job offers.
//! `JobOfferStore` is the seam between the service and whichever store this
//! deployment was configured with; each implementation handles one store.

pub mod lazy;
pub mod memory;

#[cfg(feature = "document")]
pub mod document;
#[cfg(feature = "postgres")]
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use haven_core::domain::job_offer::{JobOffer, JobOfferDraft, OfferId};
use thiserror::Error;

use crate::config::{Config, StoreBackend};

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[cfg(feature = "postgres")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[cfg(feature = "document")]
    #[error("document store error: {0}")]
    Document(#[from] mongodb::error::Error),

    /// The store answered with something that is not a job offer
    #[error("invalid data in store: {0}")]
    InvalidData(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence operations for job offers
#[async_trait]
pub trait JobOfferStore: Send + Sync {
    /// Short name of the backing store, for logs and health checks
    fn backend(&self) -> &'static str;

    /// Persist a new offer and return it with its store-assigned id
    async fn create(&self, draft: JobOfferDraft) -> Result<JobOffer, StoreError>;

    /// Find an offer by id
    ///
    /// An id this store could never have issued is reported as absent.
    async fn find_by_id(&self, id: &OfferId) -> Result<Option<JobOffer>, StoreError>;

    /// Overwrite the fields of an existing offer; false if nothing matched
    async fn update(&self, offer: &JobOffer) -> Result<bool, StoreError>;

    /// Remove an offer; false if nothing matched
    async fn delete(&self, id: &OfferId) -> Result<bool, StoreError>;
}

/// Store handle shared across request handlers
pub type SharedStore = Arc<dyn JobOfferStore>;

/// Build the store selected by the configuration.
///
/// No connection is opened here; stores connect on first use.
pub fn build_store(config: &Config) -> anyhow::Result<SharedStore> {
    match config.store {
        StoreBackend::Memory => Ok(Arc::new(memory::MemoryJobOfferStore::new())),
        #[cfg(feature = "postgres")]
        StoreBackend::Postgres => Ok(Arc::new(postgres::PgJobOfferStore::new(
            config.database_url.clone(),
            config.database_max_connections,
            config.database_acquire_timeout,
        ))),
        #[cfg(feature = "document")]
        StoreBackend::Document => Ok(Arc::new(document::DocumentJobOfferStore::new(
            config.mongodb_uri.clone(),
            config.mongodb_database.clone(),
            config.mongodb_collection.clone(),
        ))),
        #[allow(unreachable_patterns)]
        other => anyhow::bail!(
            "store backend '{}' is not compiled into this build (enable the matching cargo feature)",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_memory_store() {
        let config = Config {
            store: StoreBackend::Memory,
            ..Config::default()
        };
        let store = build_store(&config).unwrap();
        assert_eq!(store.backend(), "memory");
    }

    #[cfg(not(feature = "document"))]
    #[test]
    fn test_build_uncompiled_backend_fails() {
        let config = Config {
            store: StoreBackend::Document,
            ..Config::default()
        };
        assert!(build_store(&config).is_err());
    }
}
