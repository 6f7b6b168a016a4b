//! Site configuration.
//!
//! Resolution order: built-in defaults, then the TOML file (explicit path, or
//! `<config dir>/portfolio/config.toml` when it exists), then environment
//! overrides. Command-line flags are applied by the binaries on top.
//!
//! ```toml
//! [store]
//! backend = "firestore"
//! project_id = "my-portfolio"
//! api_key = "..."
//!
//! [carousel]
//! visible_count = 3
//! testimonials_tick_ms = 5000
//!
//! [effect]
//! min_cores = 4
//!
//! [effect.overrides]
//! reduced_motion = true
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::capability::{CapabilityOverrides, EffectPolicy};
use crate::carousel::{CarouselController, CarouselTimings};
use crate::error::{PortfolioError, PortfolioResult};

/// Environment variable selecting the Firestore project.
pub const ENV_FIRESTORE_PROJECT: &str = "PORTFOLIO_FIRESTORE_PROJECT";
/// Environment variable carrying the Firestore web API key.
pub const ENV_FIRESTORE_API_KEY: &str = "PORTFOLIO_FIRESTORE_API_KEY";
/// Environment variable pointing at a fixture file.
pub const ENV_FIXTURES: &str = "PORTFOLIO_FIXTURES";

/// Fixture file used when nothing else is configured.
pub const DEFAULT_FIXTURE_PATH: &str = "fixtures/portfolio.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub store: StoreConfig,
    pub carousel: CarouselConfig,
    pub effect: EffectConfig,
}

/// Which record store to read from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(flatten)]
    pub backend: StoreBackend,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StoreBackend {
    Firestore(FirestoreConfig),
    Fixture { path: PathBuf },
}

impl Default for StoreBackend {
    fn default() -> Self {
        StoreBackend::Fixture {
            path: PathBuf::from(DEFAULT_FIXTURE_PATH),
        }
    }
}

/// Connection settings for the Firestore REST API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: Option<String>,
    pub database: String,
    pub base_url: String,
    pub page_size: u32,
    pub timeout_secs: u64,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            api_key: None,
            database: "(default)".to_string(),
            base_url: "https://firestore.googleapis.com/v1".to_string(),
            page_size: 300,
            timeout_secs: 15,
        }
    }
}

/// Carousel geometry and timer periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub visible_count: usize,
    pub cooldown_ms: u64,
    pub swipe_threshold: f64,
    pub proofs_tick_ms: u64,
    pub testimonials_tick_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_count: 3,
            cooldown_ms: 5000,
            swipe_threshold: 50.0,
            proofs_tick_ms: 4000,
            testimonials_tick_ms: 5000,
        }
    }
}

impl CarouselConfig {
    /// A fresh controller with the configured geometry.
    pub fn controller(&self) -> CarouselController {
        CarouselController::new(self.visible_count).with_swipe_threshold(self.swipe_threshold)
    }

    pub fn proofs_timings(&self) -> CarouselTimings {
        self.timings(self.proofs_tick_ms)
    }

    pub fn testimonials_timings(&self) -> CarouselTimings {
        self.timings(self.testimonials_tick_ms)
    }

    fn timings(&self, tick_ms: u64) -> CarouselTimings {
        CarouselTimings {
            tick_interval: Duration::from_millis(tick_ms.max(1)),
            cooldown: Duration::from_millis(self.cooldown_ms),
        }
    }
}

/// Background effect gating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    #[serde(flatten)]
    pub policy: EffectPolicy,
    pub overrides: CapabilityOverrides,
}

impl PortfolioConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> PortfolioResult<Self> {
        toml::from_str(s).map_err(|e| PortfolioError::Config(e.to_string()))
    }

    /// `<config dir>/portfolio/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("portfolio").join("config.toml"))
    }

    /// Load from `path` (must exist) or the default location (optional),
    /// then apply environment overrides.
    pub fn load(path: Option<&Path>) -> PortfolioResult<Self> {
        let mut config = match path {
            Some(path) => Self::read(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => Self::read(&path)?,
                None => Self::default(),
            },
        };
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn read(path: &Path) -> PortfolioResult<Self> {
        tracing::debug!(path = %path.display(), "Reading config");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
            .map_err(|e| PortfolioError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Apply `PORTFOLIO_*` overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(project) = lookup(ENV_FIRESTORE_PROJECT).filter(|v| !v.is_empty()) {
            match &mut self.store.backend {
                StoreBackend::Firestore(firestore) => firestore.project_id = project,
                backend => {
                    *backend = StoreBackend::Firestore(FirestoreConfig {
                        project_id: project,
                        ..Default::default()
                    })
                }
            }
        }
        if let Some(key) = lookup(ENV_FIRESTORE_API_KEY).filter(|v| !v.is_empty()) {
            if let StoreBackend::Firestore(firestore) = &mut self.store.backend {
                firestore.api_key = Some(key);
            }
        }
        if let Some(path) = lookup(ENV_FIXTURES).filter(|v| !v.is_empty()) {
            self.store.backend = StoreBackend::Fixture {
                path: PathBuf::from(path),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::EffectiveConnectionType;
    use std::collections::HashMap;

    #[test]
    fn empty_document_gives_defaults() {
        let config = PortfolioConfig::from_toml_str("").unwrap();
        assert_eq!(config, PortfolioConfig::default());
        assert_eq!(
            config.store.backend,
            StoreBackend::Fixture {
                path: PathBuf::from(DEFAULT_FIXTURE_PATH)
            }
        );
    }

    #[test]
    fn parses_firestore_and_effect_sections() {
        let config = PortfolioConfig::from_toml_str(
            r#"
            [store]
            backend = "firestore"
            project_id = "folio-demo"
            api_key = "k"

            [carousel]
            testimonials_tick_ms = 4500

            [effect]
            min_cores = 4
            slow_connections = ["slow-2g", "2g", "3g"]

            [effect.overrides]
            reduced_motion = true
            "#,
        )
        .unwrap();

        match &config.store.backend {
            StoreBackend::Firestore(firestore) => {
                assert_eq!(firestore.project_id, "folio-demo");
                assert_eq!(firestore.api_key.as_deref(), Some("k"));
                assert_eq!(firestore.database, "(default)");
            }
            other => panic!("unexpected backend {:?}", other),
        }
        assert_eq!(
            config.carousel.testimonials_timings().tick_interval,
            Duration::from_millis(4500)
        );
        assert_eq!(config.carousel.proofs_timings().cooldown, Duration::from_millis(5000));
        assert_eq!(config.effect.policy.min_cores, 4);
        assert!(config
            .effect
            .policy
            .slow_connections
            .contains(&EffectiveConnectionType::ThreeG));
        assert_eq!(config.effect.overrides.reduced_motion, Some(true));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = PortfolioConfig::from_toml_str("[store\n").unwrap_err();
        assert!(matches!(err, PortfolioError::Config(_)));
    }

    #[test]
    fn env_overrides_switch_backend() {
        let env: HashMap<&str, &str> = [
            (ENV_FIRESTORE_PROJECT, "from-env"),
            (ENV_FIRESTORE_API_KEY, "secret"),
        ]
        .into_iter()
        .collect();

        let mut config = PortfolioConfig::default();
        config.apply_env(|key| env.get(key).map(|v| v.to_string()));
        match &config.store.backend {
            StoreBackend::Firestore(firestore) => {
                assert_eq!(firestore.project_id, "from-env");
                assert_eq!(firestore.api_key.as_deref(), Some("secret"));
            }
            other => panic!("unexpected backend {:?}", other),
        }

        config.apply_env(|key| (key == ENV_FIXTURES).then(|| "demo.json".to_string()));
        assert_eq!(
            config.store.backend,
            StoreBackend::Fixture {
                path: PathBuf::from("demo.json")
            }
        );
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nvisible_count = 2\n").unwrap();
        let config = PortfolioConfig::load(Some(&path)).unwrap();
        assert_eq!(config.carousel.visible_count, 2);
    }
}
