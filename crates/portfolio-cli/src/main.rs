//! Portfolio CLI
//!
//! Inspect the record store behind the portfolio page and seed clients.
//!
//! ## Usage
//!
//! ```bash
//! # List client proofs, newest first
//! portfolio proofs list
//!
//! # Show one proof with its screenshots
//! portfolio proofs get <id>
//!
//! # List testimonials
//! portfolio testimonials list
//!
//! # Aggregate testimonial figures
//! portfolio stats
//!
//! # Add a client
//! portfolio client add --name "Acme" --project-type "Mobile App" --budget 4200
//!
//! # Read from a fixture file, print JSON
//! portfolio --fixtures fixtures/portfolio.json --json proofs list
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::{
    open_store, ClientDraft, ClientProofRecord, PortfolioConfig, StoreBackend, TestimonialRecord,
    TestimonialStats,
};

/// Portfolio - record store tool
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Inspect portfolio client proofs and testimonials")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (default: <config dir>/portfolio/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Read records from this fixture file instead of the configured store
    #[arg(short, long, global = true)]
    fixtures: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Client proof records
    Proofs {
        #[command(subcommand)]
        action: ProofsAction,
    },

    /// Testimonial records
    Testimonials {
        #[command(subcommand)]
        action: TestimonialsAction,
    },

    /// Review count, average rating and project value
    Stats,

    /// Client records
    Client {
        #[command(subcommand)]
        action: ClientAction,
    },
}

#[derive(Subcommand)]
enum ProofsAction {
    /// List proofs, newest first
    List,
    /// Show a single proof
    Get {
        /// Document id
        id: String,
    },
}

#[derive(Subcommand)]
enum TestimonialsAction {
    /// List testimonials, newest first
    List,
}

#[derive(Subcommand)]
enum ClientAction {
    /// Add a client record
    Add {
        /// Client name
        #[arg(long)]
        name: String,
        /// Project type, e.g. "Mobile App"
        #[arg(long)]
        project_type: Option<String>,
        /// Payment type, e.g. "Fixed"
        #[arg(long)]
        payment_type: Option<String>,
        /// Total budget in dollars
        #[arg(long)]
        budget: Option<f64>,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn proof_line(record: &ClientProofRecord) -> String {
    let submitted = record
        .submitted_at
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{}  {}  {}  {}  {} image(s)  {}",
        record.id,
        record.display_name(),
        record.project_type.as_deref().unwrap_or("-"),
        record.budget_label().unwrap_or_else(|| "-".to_string()),
        record.images.len(),
        submitted
    )
}

fn testimonial_line(record: &TestimonialRecord) -> String {
    format!(
        "{}  {}  {}  {}/5  {}",
        record.id,
        record.display_name(),
        record.country.as_deref().unwrap_or("-"),
        record.star_count(),
        record.amount.as_deref().unwrap_or("-")
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let mut config = PortfolioConfig::load(cli.config.as_deref()).context("loading config")?;
    if let Some(path) = cli.fixtures {
        config.store.backend = StoreBackend::Fixture { path };
    }
    let store = open_store(&config.store).context("opening record store")?;

    match cli.command {
        Commands::Proofs { action } => match action {
            ProofsAction::List => {
                let proofs = store.list_client_proofs().await?;
                if cli.json {
                    print_json(&proofs)?;
                } else if proofs.is_empty() {
                    println!("No client proofs.");
                } else {
                    println!("Client proofs ({}):", proofs.len());
                    for record in &proofs {
                        println!("  {}", proof_line(record));
                    }
                }
            }

            ProofsAction::Get { id } => {
                let record = store.get_client_proof(&id).await?;
                if cli.json {
                    print_json(&record)?;
                } else {
                    println!("{}", record.display_name());
                    println!("  ID: {}", record.id);
                    println!("  Project: {}", record.project_type.as_deref().unwrap_or("-"));
                    println!("  Payment: {}", record.payment_type.as_deref().unwrap_or("-"));
                    println!(
                        "  Budget: {}",
                        record.budget_label().unwrap_or_else(|| "-".to_string())
                    );
                    println!("  Images: {}", record.images.len());
                    for (i, image) in record.images.iter().enumerate() {
                        println!("    {}. {}", i + 1, image.url);
                    }
                }
            }
        },

        Commands::Testimonials { action } => match action {
            TestimonialsAction::List => {
                let testimonials = store.list_testimonials().await?;
                if cli.json {
                    print_json(&testimonials)?;
                } else if testimonials.is_empty() {
                    println!("No testimonials.");
                } else {
                    println!("Testimonials ({}):", testimonials.len());
                    for record in &testimonials {
                        println!("  {}", testimonial_line(record));
                    }
                }
            }
        },

        Commands::Stats => {
            let testimonials = store.list_testimonials().await?;
            let stats = TestimonialStats::from_records(&testimonials);
            if cli.json {
                print_json(&serde_json::json!({
                    "reviewCount": stats.review_count,
                    "averageRating": stats.average_rating,
                    "totalAmount": stats.total_amount,
                }))?;
            } else {
                println!("Reviews: {}", stats.review_label());
                println!("Rating: {}", stats.rating_label());
                println!("Project value: {}", stats.value_label());
            }
        }

        Commands::Client { action } => match action {
            ClientAction::Add {
                name,
                project_type,
                payment_type,
                budget,
            } => {
                if name.trim().is_empty() {
                    anyhow::bail!("client name must not be empty");
                }
                let id = store
                    .add_client(ClientDraft {
                        client_name: name,
                        project_type,
                        payment_type,
                        total_budget: budget,
                        timestamp: None,
                    })
                    .await?;
                if cli.json {
                    print_json(&serde_json::json!({ "id": id }))?;
                } else {
                    println!("Added client.");
                    println!("  ID: {}", id);
                }
            }
        },
    }

    Ok(())
}
