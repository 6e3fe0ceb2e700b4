//! listing-audit CLI - rental listing fact extraction and scam scoring
//!
//! The application logic is contained in lib.rs, and this file is responsible
//! for parsing arguments and handling top-level errors.

use anyhow::Context;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use listing_audit::{audit_url, listings, server, AuditReport, AuditResponse, Config, HttpFetcher, PageFetcher};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "listing-audit")]
#[command(author, version, about = "Rental listing fact extraction and scam scoring", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the audit HTTP service
    Serve {
        /// Address to listen on, overrides the config file
        #[arg(long)]
        bind: Option<String>,
    },
    /// Audit a single listing URL
    Audit {
        /// Listing URL
        url: String,
        /// Print the API response JSON instead of a report
        #[arg(long)]
        json: bool,
    },
    /// List results from a search-results page
    List {
        /// Search-results URL, defaults to the configured one
        url: Option<String>,
    },
    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,listing_audit=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load().context("Failed to load configuration")?;

    match cli.command.unwrap_or(Commands::Serve { bind: None }) {
        Commands::Serve { bind } => {
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
            server::serve(fetcher, &config.server).await?;
        }
        Commands::Audit { url, json } => {
            let fetcher = HttpFetcher::new(&config.fetch)?;
            let report = audit_url(&fetcher, &url).await;

            if json {
                let response = AuditResponse::from(&report);
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                print_report(&report);
            }
        }
        Commands::List { url } => {
            let url = url.unwrap_or_else(|| config.lister.search_url.clone());
            let fetcher = HttpFetcher::new(&config.fetch)?;
            let html = fetcher
                .fetch(&url)
                .await
                .with_context(|| format!("Failed to fetch search results from {url}"))?;

            let results = listings::parse_search_results(&html);
            println!("--- {} results ---", results.len());
            for result in &results {
                println!("{}\n", result);
            }
        }
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "listing-audit", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn print_report(report: &AuditReport) {
    let facts = &report.facts;
    println!("=== {} ===\n", facts.url);

    if let Some(error) = &facts.error {
        println!("{} {}\n", "⚠️  Fetch failed:".red().bold(), error);
    }

    let price = match facts.price {
        Some(price) => format!("${price}"),
        None => "unknown".dimmed().to_string(),
    };
    println!("💲 Price:        {}", price);
    println!("📍 Neighborhood: {}", facts.neighborhood_or_sentinel());

    let score = report.scam_score.to_string();
    let score = match report.scam_score {
        70..=100 => score.green(),
        40..=69 => score.yellow(),
        _ => score.red(),
    };
    println!("🛡️  Trust score:  {}/100", score.bold());

    let keywords = listing_audit::score::matched_keywords(facts.description_or_sentinel());
    if !keywords.is_empty() {
        println!("\n🚩 Red flags:");
        for keyword in keywords {
            println!("  • {}", keyword);
        }
    }

    if let Some(description) = &facts.description {
        println!("\n📝 Description:\n{}", description);
    }
}
