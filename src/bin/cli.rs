//! job-scraper CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use job_scraper::{
    error::Result,
    models::{Config, FailurePolicy},
    pipeline,
    services::HttpSource,
    storage::LocalStorage,
};

/// job-scraper - Saramin job search to CSV
#[derive(Parser, Debug)]
#[command(name = "job-scraper", version, about = "Scrapes job search results into a CSV file")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scrape every result page for a search term
    Scrape {
        /// Search term
        term: String,

        /// Output CSV path (default: output.path from config, "jobs.csv")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep going when a page fails and write whatever was collected
        #[arg(long)]
        keep_going: bool,

        /// Maximum number of pages fetched at once
        #[arg(long)]
        max_concurrent: Option<usize>,
    },

    /// Only count the result pages for a search term
    Pages {
        /// Search term
        term: String,
    },

    /// Validate the configuration file
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = Config::load_optional(&cli.config)?;
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Scrape {
            term,
            output,
            keep_going,
            max_concurrent,
        } => {
            if let Some(path) = output {
                config.output.path = path.display().to_string();
            }
            if keep_going {
                config.crawler.on_page_error = FailurePolicy::Continue;
            }
            if let Some(limit) = max_concurrent {
                config.crawler.max_concurrent = limit;
            }
            config.validate()?;

            let source = HttpSource::from_config(&config.crawler)?;
            let storage = LocalStorage::from_config(&config.output, &config.site);

            let outcome = match pipeline::run_scrape(&config, &source, &storage, &term).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    log::error!("Scrape failed: {}", e);
                    return Err(e);
                }
            };

            println!("Done, extracted {}", outcome.job_count());
        }

        Command::Pages { term } => {
            config.validate()?;
            let source = HttpSource::from_config(&config.crawler)?;
            let pages = pipeline::run_discover(&config, &source, &term).await?;
            println!("{pages}");
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }
    }

    Ok(())
}
