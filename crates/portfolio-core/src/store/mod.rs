//! Remote record store.
//!
//! The page reads client proofs and testimonials through [`RecordStore`].
//! Two backends exist:
//!
//! - [`FirestoreStore`]: the production document store, over its REST API
//! - [`FixtureStore`]: records from a local JSON file, for offline runs
//!
//! Callers on the page treat a failed listing as an empty one; see
//! [`or_empty`].

mod firestore;
mod fixture;
pub mod value;

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::config::{StoreBackend, StoreConfig};
use crate::error::PortfolioResult;
use crate::records::{ClientDraft, ClientProofRecord, TestimonialRecord};

pub use firestore::{FirestoreStore, CLIENTS, CLIENT_PROOFS, REVIEWS};
pub use fixture::{FixtureStore, Fixtures, StoredClient};

/// Read access to the portfolio records, plus the one admin write.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Client proofs, newest submission first (best effort).
    async fn list_client_proofs(&self) -> PortfolioResult<Vec<ClientProofRecord>>;

    /// Testimonials, newest first (best effort).
    async fn list_testimonials(&self) -> PortfolioResult<Vec<TestimonialRecord>>;

    /// A single client proof; `NotFound` when the id is unknown.
    async fn get_client_proof(&self, id: &str) -> PortfolioResult<ClientProofRecord>;

    /// Store a new client and return its id. Stamps `timestamp`.
    async fn add_client(&self, draft: ClientDraft) -> PortfolioResult<String>;
}

/// Shared store handle for the UI context and the CLI.
pub type SharedStore = Arc<dyn RecordStore>;

/// Build the store selected by `config`.
pub fn open_store(config: &StoreConfig) -> PortfolioResult<SharedStore> {
    match &config.backend {
        StoreBackend::Firestore(firestore) => {
            tracing::info!(project = %firestore.project_id, "Using Firestore record store");
            Ok(Arc::new(FirestoreStore::new(firestore.clone())?))
        }
        StoreBackend::Fixture { path } => {
            tracing::info!(path = %path.display(), "Using fixture record store");
            Ok(Arc::new(FixtureStore::open(path)?))
        }
    }
}

/// Unwrap a listing, logging failures and degrading to an empty list.
pub fn or_empty<T>(what: &str, result: PortfolioResult<Vec<T>>) -> Vec<T> {
    match result {
        Ok(records) => {
            if records.is_empty() {
                tracing::warn!("No {} found in the record store", what);
            } else {
                tracing::info!("Loaded {} {}", records.len(), what);
            }
            records
        }
        Err(e) => {
            tracing::error!("Failed to load {}: {}", what, e);
            Vec::new()
        }
    }
}

/// Stable sort, newest first; undated records keep their order at the end.
pub fn sort_newest_first<T>(records: &mut [T], key: impl Fn(&T) -> Option<DateTime<Utc>>) {
    records.sort_by(|a, b| match (key(a), key(b)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
}
