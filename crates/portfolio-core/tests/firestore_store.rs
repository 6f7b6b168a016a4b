//! Firestore backend against a mock REST server.

use portfolio_core::config::FirestoreConfig;
use portfolio_core::records::ClientDraft;
use portfolio_core::store::{or_empty, FirestoreStore, RecordStore};
use portfolio_core::PortfolioError;
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Test Utilities
// ============================================================================

const DOCS: &str = "/v1/projects/folio/databases/(default)/documents";

fn store(server: &MockServer) -> FirestoreStore {
    FirestoreStore::new(FirestoreConfig {
        project_id: "folio".to_string(),
        api_key: Some("test-key".to_string()),
        base_url: format!("{}/v1", server.uri()),
        page_size: 2,
        ..Default::default()
    })
    .unwrap()
}

fn review_doc(id: &str, name: &str, timestamp: &str) -> Value {
    json!({
        "name": format!("projects/folio/databases/(default)/documents/reviews/{}", id),
        "fields": {
            "clientName": { "stringValue": name },
            "rating": { "integerValue": "5" },
            "amount": { "stringValue": "1200 USD" },
            "timestamp": { "timestampValue": timestamp }
        }
    })
}

fn proof_doc(id: &str, submitted_at: &str) -> Value {
    json!({
        "name": format!("projects/folio/databases/(default)/documents/clientProofs/{}", id),
        "fields": {
            "clientName": { "stringValue": "Acme" },
            "totalBudget": { "doubleValue": 1250.5 },
            "submittedAt": { "timestampValue": submitted_at },
            "images": { "arrayValue": { "values": [
                { "mapValue": { "fields": {
                    "url": { "stringValue": "https://cdn.example.com/a.png" },
                    "fileName": { "stringValue": "a.png" }
                } } }
            ] } }
        }
    })
}

fn error_body(status: u16, message: &str) -> Value {
    json!({ "error": { "code": status, "message": message, "status": "FAILED_PRECONDITION" } })
}

// ============================================================================
// Ordered Query
// ============================================================================

#[tokio::test]
async fn ordered_query_is_used_when_available() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCS)))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "structuredQuery": {
                "from": [{ "collectionId": "reviews" }],
                "orderBy": [{ "field": { "fieldPath": "timestamp" }, "direction": "DESCENDING" }]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "document": review_doc("b", "Globex", "2025-03-01T00:00:00Z") },
            { "document": review_doc("a", "Acme", "2025-01-01T00:00:00Z") },
            { "readTime": "2025-03-02T00:00:00Z" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let reviews = store(&server).list_testimonials().await.unwrap();
    let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "a"]);
    assert_eq!(reviews[0].client_name.as_deref(), Some("Globex"));
    assert_eq!(reviews[0].rating, Some(5.0));
}

#[tokio::test]
async fn proofs_decode_nested_images() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "document": proof_doc("p1", "2025-02-01T10:00:00Z") }
        ])))
        .mount(&server)
        .await;

    let proofs = store(&server).list_client_proofs().await.unwrap();
    assert_eq!(proofs.len(), 1);
    assert_eq!(proofs[0].budget_label().as_deref(), Some("$1,251"));
    assert_eq!(
        proofs[0].cover_image().map(|i| i.url.as_str()),
        Some("https://cdn.example.com/a.png")
    );
}

// ============================================================================
// Fallback Listing
// ============================================================================

#[tokio::test]
async fn falls_back_to_paged_listing_and_sorts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCS)))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(error_body(400, "The query requires an index")),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/reviews", DOCS)))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [review_doc("mid", "Initech", "2025-02-01T00:00:00Z")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{}/reviews", DOCS)))
        .and(query_param("pageSize", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [
                review_doc("old", "Acme", "2024-12-01T00:00:00Z"),
                review_doc("new", "Globex", "2025-05-01T00:00:00Z")
            ],
            "nextPageToken": "page-2"
        })))
        .up_to_n_times(1)
        .mount(&server)
        .await;

    let reviews = store(&server).list_testimonials().await.unwrap();
    let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[tokio::test]
async fn malformed_documents_are_skipped() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", DOCS)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "document": review_doc("good", "Acme", "2025-01-01T00:00:00Z") },
            { "document": {
                "name": "projects/folio/databases/(default)/documents/reviews/bad",
                "fields": { "rating": { "mysteryValue": 1 } }
            } }
        ])))
        .mount(&server)
        .await;

    let reviews = store(&server).list_testimonials().await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].id, "good");
}

#[tokio::test]
async fn total_failure_degrades_to_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_json(error_body(403, "denied")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(403).set_body_json(error_body(403, "denied")))
        .mount(&server)
        .await;

    let result = store(&server).list_client_proofs().await;
    match &result {
        Err(PortfolioError::Status { status, message }) => {
            assert_eq!(*status, 403);
            assert_eq!(message, "denied");
        }
        other => panic!("expected status error, got {:?}", other),
    }
    assert!(or_empty("client proofs", result).is_empty());
}

// ============================================================================
// Single Document and Writes
// ============================================================================

#[tokio::test]
async fn missing_proof_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/clientProofs/ghost", DOCS)))
        .respond_with(ResponseTemplate::new(404).set_body_json(error_body(404, "not found")))
        .mount(&server)
        .await;

    let err = store(&server).get_client_proof("ghost").await.unwrap_err();
    assert!(matches!(err, PortfolioError::NotFound(id) if id == "ghost"));
}

#[tokio::test]
async fn get_proof_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("{}/clientProofs/p7", DOCS)))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(proof_doc("p7", "2025-02-01T10:00:00Z")),
        )
        .mount(&server)
        .await;

    let proof = store(&server).get_client_proof("p7").await.unwrap();
    assert_eq!(proof.id, "p7");
    assert!(proof.submitted_at.is_some());
}

#[tokio::test]
async fn add_client_posts_typed_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("{}/clients", DOCS)))
        .and(body_partial_json(json!({
            "fields": {
                "clientName": { "stringValue": "Umbrella" },
                "totalBudget": { "doubleValue": 5000.0 }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "projects/folio/databases/(default)/documents/clients/new-id",
            "fields": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let id = store(&server)
        .add_client(ClientDraft {
            client_name: "Umbrella".to_string(),
            total_budget: Some(5000.0),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(id, "new-id");

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body["fields"]["timestamp"]["timestampValue"].is_string());
}
