//! Application context for the portfolio shell.
//!
//! `main` installs one [`AppContext`] before launch; the root component
//! provides it to the tree and children read it through the hooks below.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let store = use_store();
//! let config = use_config();
//! ```

use std::sync::{Arc, OnceLock};
use std::time::Instant;

use dioxus::prelude::*;
use portfolio_core::store::{FixtureStore, Fixtures};
use portfolio_core::{PortfolioConfig, SharedStore};

/// Everything components need from the process.
#[derive(Clone)]
pub struct AppContext {
    pub store: SharedStore,
    pub config: Arc<PortfolioConfig>,
    /// When the process started; page-load time is measured from here
    pub started: Instant,
    /// Logical width the window opened with
    pub window_width: u32,
    pub skip_intro: bool,
}

static APP_CONTEXT: OnceLock<AppContext> = OnceLock::new();

/// Set the process-wide context. Later calls are ignored.
pub fn install(context: AppContext) {
    if APP_CONTEXT.set(context).is_err() {
        tracing::warn!("App context already installed");
    }
}

/// The installed context, or an empty offline one.
pub fn app_context() -> AppContext {
    APP_CONTEXT
        .get_or_init(|| AppContext {
            store: Arc::new(FixtureStore::new(Fixtures::default())),
            config: Arc::new(PortfolioConfig::default()),
            started: Instant::now(),
            window_width: 1280,
            skip_intro: false,
        })
        .clone()
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>()
}

/// Hook to access the record store.
pub fn use_store() -> SharedStore {
    use_app_context().store
}

/// Hook to access the loaded configuration.
pub fn use_config() -> Arc<PortfolioConfig> {
    use_app_context().config
}
