//! Firestore REST backend.
//!
//! Listing tries an ordered `runQuery` first. Collections without the
//! matching index reject ordered queries, so on failure the store falls back
//! to the plain paged document listing and sorts client side.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Map, Value};

use super::value::{decode_fields, encode_fields};
use super::{sort_newest_first, RecordStore};
use crate::config::FirestoreConfig;
use crate::error::{PortfolioError, PortfolioResult};
use crate::perf::Timing;
use crate::records::{ClientDraft, ClientProofRecord, TestimonialRecord};

/// Collection holding client proofs.
pub const CLIENT_PROOFS: &str = "clientProofs";
/// Collection holding testimonials.
pub const REVIEWS: &str = "reviews";
/// Collection receiving admin-submitted clients.
pub const CLIENTS: &str = "clients";

/// A Firestore document as returned by the REST API.
#[derive(Debug, Deserialize)]
struct Document {
    name: String,
    #[serde(default)]
    fields: Map<String, Value>,
}

impl Document {
    /// Last path segment of the resource name.
    fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    fn into_record<T: DeserializeOwned>(self) -> PortfolioResult<T> {
        let mut object = decode_fields(&self.fields)?;
        object.insert("id".to_string(), Value::String(self.id().to_string()));
        serde_json::from_value(Value::Object(object))
            .map_err(|e| PortfolioError::Decode(format!("document {}: {}", self.id(), e)))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPage {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryRow {
    document: Option<Document>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Record store backed by Cloud Firestore.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: Client,
    config: FirestoreConfig,
}

impl FirestoreStore {
    pub fn new(config: FirestoreConfig) -> PortfolioResult<Self> {
        if config.project_id.trim().is_empty() {
            return Err(PortfolioError::Config(
                "Firestore project_id is not set".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &FirestoreConfig {
        &self.config
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents",
            self.config.base_url.trim_end_matches('/'),
            self.config.project_id,
            self.config.database
        )
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key)]),
            None => request,
        }
    }

    /// Ordered listing via `runQuery`, descending on `order_field`.
    async fn run_ordered_query(
        &self,
        collection: &str,
        order_field: &str,
    ) -> PortfolioResult<Vec<Document>> {
        let body = json!({
            "structuredQuery": {
                "from": [{ "collectionId": collection }],
                "orderBy": [{
                    "field": { "fieldPath": order_field },
                    "direction": "DESCENDING"
                }]
            }
        });
        let url = format!("{}:runQuery", self.documents_url());
        let response = self
            .with_key(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        let rows: Vec<QueryRow> = check(response).await?.json().await?;
        Ok(rows.into_iter().filter_map(|row| row.document).collect())
    }

    /// Unordered listing, following `nextPageToken` to the end.
    async fn list_all(&self, collection: &str) -> PortfolioResult<Vec<Document>> {
        let url = format!("{}/{}", self.documents_url(), collection);
        let page_size = self.config.page_size.to_string();
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .with_key(self.client.get(&url))
                .query(&[("pageSize", page_size.as_str())]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            let page: ListPage = check(request.send().await?).await?.json().await?;
            documents.extend(page.documents);
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        Ok(documents)
    }

    /// Ordered query, falling back to the unordered listing.
    ///
    /// Returns the documents and whether they arrived ordered.
    async fn list_newest_first(
        &self,
        collection: &str,
        order_field: &str,
    ) -> PortfolioResult<(Vec<Document>, bool)> {
        let _timing = Timing::start(format!("firestore list {}", collection));
        match self.run_ordered_query(collection, order_field).await {
            Ok(documents) => Ok((documents, true)),
            Err(e) => {
                tracing::warn!(
                    collection,
                    "Ordered query failed, fetching without ordering: {}",
                    e
                );
                Ok((self.list_all(collection).await?, false))
            }
        }
    }
}

/// Decode documents, skipping (and logging) any that do not fit the schema.
fn decode_documents<T: DeserializeOwned>(collection: &str, documents: Vec<Document>) -> Vec<T> {
    documents
        .into_iter()
        .filter_map(|doc| match doc.into_record::<T>() {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(collection, "Skipping malformed document: {}", e);
                None
            }
        })
        .collect()
}

async fn check(response: Response) -> PortfolioResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error.message)
        .unwrap_or(text);
    Err(PortfolioError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl RecordStore for FirestoreStore {
    async fn list_client_proofs(&self) -> PortfolioResult<Vec<ClientProofRecord>> {
        let (documents, ordered) = self.list_newest_first(CLIENT_PROOFS, "submittedAt").await?;
        let mut records: Vec<ClientProofRecord> = decode_documents(CLIENT_PROOFS, documents);
        if !ordered {
            sort_newest_first(&mut records, |r| r.submitted_at);
        }
        tracing::debug!("Fetched {} client proofs", records.len());
        Ok(records)
    }

    async fn list_testimonials(&self) -> PortfolioResult<Vec<TestimonialRecord>> {
        let (documents, ordered) = self.list_newest_first(REVIEWS, "timestamp").await?;
        let mut records: Vec<TestimonialRecord> = decode_documents(REVIEWS, documents);
        if !ordered {
            sort_newest_first(&mut records, |r| r.timestamp);
        }
        tracing::debug!("Fetched {} testimonials", records.len());
        Ok(records)
    }

    async fn get_client_proof(&self, id: &str) -> PortfolioResult<ClientProofRecord> {
        let url = format!("{}/{}/{}", self.documents_url(), CLIENT_PROOFS, id);
        let response = self.with_key(self.client.get(&url)).send().await?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(PortfolioError::NotFound(id.to_string()));
        }
        let document: Document = check(response).await?.json().await?;
        document.into_record()
    }

    async fn add_client(&self, mut draft: ClientDraft) -> PortfolioResult<String> {
        draft.timestamp = Some(Utc::now());
        let object = match serde_json::to_value(&draft)? {
            Value::Object(object) => object,
            other => {
                return Err(PortfolioError::Decode(format!(
                    "client draft is not an object: {}",
                    other
                )))
            }
        };
        let body = json!({ "fields": encode_fields(&object, &["timestamp"]) });
        let url = format!("{}/{}", self.documents_url(), CLIENTS);
        let response = self
            .with_key(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        let document: Document = check(response).await?.json().await?;
        let id = document.id().to_string();
        tracing::info!(%id, "Added client");
        Ok(id)
    }
}
