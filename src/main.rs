#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::store::{FixtureStore, Fixtures};
use portfolio_core::{open_store, PortfolioConfig, SharedStore, StoreBackend};
use tracing_subscriber::EnvFilter;

use crate::context::AppContext;

/// Portfolio - desktop shell
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio with client proofs and testimonials")]
struct Args {
    /// Config file (default: <config dir>/portfolio/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read records from this fixture file instead of the configured store
    #[arg(short, long)]
    fixtures: Option<PathBuf>,

    /// Skip the greeting intro
    #[arg(long)]
    skip_intro: bool,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 860)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_desktop=info,portfolio_core=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = PortfolioConfig::load(args.config.as_deref())?;
    if let Some(path) = args.fixtures {
        config.store.backend = StoreBackend::Fixture { path };
    }

    // A store that cannot be opened leaves the page with empty sections.
    let store: SharedStore = match open_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("Failed to open record store: {}", e);
            Arc::new(FixtureStore::new(Fixtures::default()))
        }
    };

    tracing::info!(
        width = args.width,
        height = args.height,
        skip_intro = args.skip_intro,
        "Starting portfolio"
    );

    context::install(AppContext {
        store,
        config: Arc::new(config),
        started,
        window_width: args.width,
        skip_intro: args.skip_intro,
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                args.width as f64,
                args.height as f64,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
    Ok(())
}
