//! Edge case tests across configuration, records, stores and the effect gate.

use std::time::{Duration, Instant};

use portfolio_core::capability::{
    decide, CapabilitySnapshot, EffectDecision, EffectiveConnectionType, LowCapability, SystemProbe,
};
use portfolio_core::carousel::{CarouselController, Direction};
use portfolio_core::config::{PortfolioConfig, StoreBackend, ENV_FIRESTORE_PROJECT, ENV_FIXTURES};
use portfolio_core::records::{ClientProofRecord, TestimonialRecord};
use portfolio_core::store::{open_store, FixtureStore, Fixtures, RecordStore};
use portfolio_core::{PortfolioError, StoreConfig};

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn empty_config_file_uses_defaults() {
    let config = PortfolioConfig::from_toml_str("").unwrap();
    assert_eq!(config, PortfolioConfig::default());
    assert!(matches!(config.store.backend, StoreBackend::Fixture { .. }));
}

#[test]
fn malformed_config_is_a_config_error() {
    let err = PortfolioConfig::from_toml_str("[carousel]\nvisible_count = \"three\"").unwrap_err();
    assert!(matches!(err, PortfolioError::Config(_)));
}

#[test]
fn effect_overrides_parse_from_toml() {
    let config = PortfolioConfig::from_toml_str(
        r#"
        [effect]
        min_cores = 4

        [effect.overrides]
        reduced_motion = true
        effective_connection = "2g"
        "#,
    )
    .unwrap();
    assert_eq!(config.effect.policy.min_cores, 4);
    assert_eq!(config.effect.overrides.reduced_motion, Some(true));
    assert_eq!(
        config.effect.overrides.effective_connection,
        Some(EffectiveConnectionType::TwoG)
    );
}

#[test]
fn env_fixture_path_replaces_backend() {
    let mut config = PortfolioConfig::default();
    config.apply_env(|key| (key == ENV_FIXTURES).then(|| "/tmp/elsewhere.json".to_string()));
    match config.store.backend {
        StoreBackend::Fixture { path } => assert_eq!(path.to_str(), Some("/tmp/elsewhere.json")),
        other => panic!("unexpected backend {:?}", other),
    }
}

#[test]
fn blank_env_values_are_ignored() {
    let mut config = PortfolioConfig::default();
    config.apply_env(|key| (key == ENV_FIRESTORE_PROJECT).then(String::new));
    assert!(matches!(config.store.backend, StoreBackend::Fixture { .. }));
}

#[test]
fn missing_explicit_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let err = PortfolioConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(matches!(err, PortfolioError::Io(_)));
}

// ============================================================================
// Records
// ============================================================================

#[test]
fn unparseable_timestamp_becomes_none() {
    let record: TestimonialRecord = serde_json::from_value(serde_json::json!({
        "id": "r1",
        "timestamp": "last tuesday",
        "rating": 4.0
    }))
    .unwrap();
    assert!(record.timestamp.is_none());
    assert_eq!(record.star_count(), 4);
}

#[test]
fn non_string_timestamp_becomes_none() {
    let record: ClientProofRecord = serde_json::from_value(serde_json::json!({
        "id": "p1",
        "submittedAt": 1700000000
    }))
    .unwrap();
    assert!(record.submitted_at.is_none());
    assert_eq!(record.display_name(), "Anonymous client");
    assert!(record.cover_image().is_none());
}

#[test]
fn out_of_range_ratings_are_clamped_for_display() {
    let high = TestimonialRecord {
        rating: Some(9.0),
        ..Default::default()
    };
    let negative = TestimonialRecord {
        rating: Some(-1.0),
        ..Default::default()
    };
    assert_eq!(high.star_count(), 5);
    assert_eq!(negative.star_count(), 5);
}

#[test]
fn initials_handle_single_and_empty_names() {
    let single = TestimonialRecord {
        client_name: Some("cher".to_string()),
        ..Default::default()
    };
    assert_eq!(single.initials(), "C");

    let anonymous = TestimonialRecord::default();
    assert_eq!(anonymous.initials(), "AC");
}

// ============================================================================
// Stores
// ============================================================================

#[tokio::test]
async fn fixture_store_orders_newest_first() {
    let fixtures: Fixtures = serde_json::from_value(serde_json::json!({
        "testimonials": [
            { "id": "old", "timestamp": "2024-01-01T00:00:00Z" },
            { "id": "undated" },
            { "id": "new", "timestamp": "2025-06-01T00:00:00Z" }
        ]
    }))
    .unwrap();
    let store = FixtureStore::new(fixtures);
    let ids: Vec<String> = store
        .list_testimonials()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["new", "old", "undated"]);
    assert!(store.list_client_proofs().await.unwrap().is_empty());
}

#[test]
fn open_store_reports_missing_fixture_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        backend: StoreBackend::Fixture {
            path: dir.path().join("missing.json"),
        },
    };
    assert!(matches!(open_store(&config), Err(PortfolioError::Io(_))));
}

#[test]
fn malformed_fixture_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        FixtureStore::open(&path),
        Err(PortfolioError::Serialization(_))
    ));
}

// ============================================================================
// Effect Gate
// ============================================================================

#[test]
fn unknown_signals_do_not_disable() {
    let decision = decide(&CapabilitySnapshot::default(), &Default::default());
    assert!(decision.is_enabled());
}

#[test]
fn system_probe_applies_overrides() {
    let config = PortfolioConfig::from_toml_str(
        "[effect.overrides]\nuser_agent = \"Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)\"",
    )
    .unwrap();
    let probe = SystemProbe::new(config.effect.overrides.clone(), Instant::now())
        .with_viewport_width(1920);
    let snapshot = CapabilitySnapshot::capture(&probe);
    assert!(snapshot.failures.is_empty());
    assert_eq!(snapshot.viewport_width, Some(1920));

    let mut policy = config.effect.policy.clone();
    policy.min_cores = 1;
    assert_eq!(
        decide(&snapshot, &policy),
        EffectDecision::Disabled {
            reason: LowCapability::MobileUserAgent
        }
    );
}

#[test]
fn narrow_window_disables_effect() {
    let probe = SystemProbe::new(Default::default(), Instant::now()).with_viewport_width(768);
    let snapshot = CapabilitySnapshot::capture(&probe);
    let mut policy = portfolio_core::EffectPolicy::default();
    policy.min_cores = 1;
    assert_eq!(
        decide(&snapshot, &policy),
        EffectDecision::Disabled {
            reason: LowCapability::NarrowViewport(768)
        }
    );
}

#[test]
fn slow_start_disables_effect() {
    let snapshot = CapabilitySnapshot {
        page_load: Some(Duration::from_millis(4001)),
        ..Default::default()
    };
    assert!(!decide(&snapshot, &Default::default()).is_enabled());
}

// ============================================================================
// Carousel
// ============================================================================

#[test]
fn zero_visible_count_acts_as_one() {
    let mut controller = CarouselController::new(0).with_item_count(2);
    assert_eq!(controller.visible_count(), 1);
    assert!(controller.advance(Direction::Right));
    assert_eq!(controller.current_index(), 1);
}

#[test]
fn empty_carousel_renders_nothing() {
    let view = CarouselController::new(3).view();
    let items: [u8; 0] = [];
    assert!(view.slice(&items).is_empty());
    assert_eq!(view.page_count, 1);
    assert!(!view.show_controls);
}

#[test]
fn nan_touch_positions_are_ignored() {
    let mut controller = CarouselController::new(3).with_item_count(10);
    controller.touch_start(100.0);
    assert_eq!(controller.touch_move(f64::NAN), None);
    assert!(controller.is_dragging());
}
