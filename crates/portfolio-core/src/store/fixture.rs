//! File-backed record store for offline runs and tests.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use super::{sort_newest_first, RecordStore};
use crate::error::{PortfolioError, PortfolioResult};
use crate::records::{ClientDraft, ClientProofRecord, TestimonialRecord};

/// A client written through [`RecordStore::add_client`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredClient {
    pub id: String,
    #[serde(flatten)]
    pub draft: ClientDraft,
}

/// On-disk layout of a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Fixtures {
    pub client_proofs: Vec<ClientProofRecord>,
    pub testimonials: Vec<TestimonialRecord>,
    pub clients: Vec<StoredClient>,
}

/// Record store holding fixtures in memory.
///
/// Stores opened from a file write added clients back to it.
#[derive(Debug, Default)]
pub struct FixtureStore {
    fixtures: RwLock<Fixtures>,
    path: Option<PathBuf>,
}

impl FixtureStore {
    pub fn new(fixtures: Fixtures) -> Self {
        Self {
            fixtures: RwLock::new(fixtures),
            path: None,
        }
    }

    /// Load fixtures from a JSON file.
    pub fn open(path: impl AsRef<Path>) -> PortfolioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let fixtures: Fixtures = serde_json::from_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            proofs = fixtures.client_proofs.len(),
            testimonials = fixtures.testimonials.len(),
            "Loaded fixtures"
        );
        Ok(Self {
            fixtures: RwLock::new(fixtures),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn snapshot(&self) -> Fixtures {
        self.fixtures.read().clone()
    }
}

#[async_trait]
impl RecordStore for FixtureStore {
    async fn list_client_proofs(&self) -> PortfolioResult<Vec<ClientProofRecord>> {
        let mut records = self.fixtures.read().client_proofs.clone();
        sort_newest_first(&mut records, |r| r.submitted_at);
        Ok(records)
    }

    async fn list_testimonials(&self) -> PortfolioResult<Vec<TestimonialRecord>> {
        let mut records = self.fixtures.read().testimonials.clone();
        sort_newest_first(&mut records, |r| r.timestamp);
        Ok(records)
    }

    async fn get_client_proof(&self, id: &str) -> PortfolioResult<ClientProofRecord> {
        self.fixtures
            .read()
            .client_proofs
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| PortfolioError::NotFound(id.to_string()))
    }

    async fn add_client(&self, mut draft: ClientDraft) -> PortfolioResult<String> {
        draft.timestamp = Some(Utc::now());
        let (id, serialized) = {
            let mut fixtures = self.fixtures.write();
            let id = format!("client-{}", fixtures.clients.len() + 1);
            fixtures.clients.push(StoredClient {
                id: id.clone(),
                draft,
            });
            let serialized = match &self.path {
                Some(_) => Some(serde_json::to_string_pretty(&*fixtures)?),
                None => None,
            };
            (id, serialized)
        };
        if let (Some(path), Some(text)) = (&self.path, serialized) {
            tokio::fs::write(path, text).await?;
        }
        tracing::info!(%id, "Added client");
        Ok(id)
    }
}
