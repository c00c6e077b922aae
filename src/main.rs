//! Sumi-Harvest main entry point
//!
//! This is the command-line interface for the Sumi-Harvest corpus crawler.

use clap::Parser;
use std::path::PathBuf;
use sumi_harvest::config::{load_config_with_hash, Config};
use sumi_harvest::crawler::Crawler;
use tracing_subscriber::EnvFilter;

/// Sumi-Harvest: a focused text-corpus crawler
///
/// Sumi-Harvest crawls government and educational sites from a list of seed
/// URLs while respecting robots.txt, and builds a deduplicated plain-text
/// corpus of cleaned paragraphs until a target word count is reached.
#[derive(Parser, Debug)]
#[command(name = "sumi-harvest")]
#[command(version = "1.0.0")]
#[command(about = "A focused text-corpus crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults if omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    (cfg, Some(hash))
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            (Config::default(), None)
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
    } else {
        handle_harvest(config, config_hash).await?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_harvest=info,warn"),
            1 => EnvFilter::new("sumi_harvest=debug,info"),
            2 => EnvFilter::new("sumi_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows what would be crawled
fn handle_dry_run(config: &Config) {
    println!("=== Sumi-Harvest Dry Run ===\n");

    println!("Crawler Configuration:");
    println!("  Target words: {}", config.crawler.min_words);
    println!("  Max depth: {}", config.crawler.max_depth);
    println!("  Crawl delay: {}s", config.crawler.crawl_delay_seconds);
    println!("  Save interval: {} words", config.crawler.save_interval_words);

    println!("\nHTTP:");
    println!("  User agent: {}", config.http.user_agent);
    println!("  Robots timeout: {}s", config.http.robots_timeout_seconds);
    println!("  Fetch timeout: {}s", config.http.fetch_timeout_seconds);

    println!("\nOutput:");
    println!("  Dataset: {}", config.output.dataset_path);
    println!("  Scraped URLs: {}", config.output.scraped_urls_path);
    println!("  Skipped log: {}", config.output.skipped_log_path);
    println!("  Summary: {}", config.output.summary_path);

    println!(
        "\nAllowed Domain Suffixes ({}):",
        config.crawler.allowed_domain_suffixes.len()
    );
    for suffix in &config.crawler.allowed_domain_suffixes {
        println!("  - {}", suffix);
    }

    println!("\nSeed URLs ({}):", config.crawler.seed_urls.len());
    for seed in &config.crawler.seed_urls {
        println!("  - {}", seed);
    }

    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would start harvesting with {} seed URLs",
        config.crawler.seed_urls.len()
    );
}

/// Handles the main harvest operation
async fn handle_harvest(
    config: Config,
    config_hash: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Starting harvest: {} seeds, target {} words",
        config.crawler.seed_urls.len(),
        config.crawler.min_words
    );

    let mut crawler = Crawler::new(config)?;
    if let Some(hash) = config_hash {
        crawler = crawler.with_config_hash(hash);
    }

    match crawler.run().await {
        Ok(summary) => {
            tracing::info!(
                "Harvest completed: {} words, {} paragraphs, {} pages scraped in {}s",
                summary.word_count,
                summary.paragraphs,
                summary.pages_scraped,
                summary.duration_seconds()
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!("Harvest failed: {}", e);
            Err(e.into())
        }
    }
}
