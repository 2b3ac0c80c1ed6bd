use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use docmatch::cache::{CacheManager, CacheStore};
use docmatch::compare::compare_document;
use docmatch::config::Config;
use docmatch::error::ConfigurationError;
use docmatch::extract::AutoExtractor;
use docmatch::output::{json as json_output, terminal};
use docmatch::text::normalizer::Normalizer;

/// docmatch: vocabulary-overlap comparison against reference documents.
///
/// Scores an uploaded document against a fixed set of references using
/// Jaccard similarity over normalized word sets.
#[derive(Parser)]
#[command(name = "docmatch", version, about)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for values otherwise taken from the environment / .env.
#[derive(Args)]
struct Overrides {
    /// Reference document (repeat for several). Replaces DOCMATCH_REFERENCES.
    #[arg(long = "reference", short = 'r', global = true)]
    references: Vec<PathBuf>,

    /// Cache store path. Replaces DOCMATCH_CACHE_PATH.
    #[arg(long, global = true)]
    cache: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare a document against every reference
    Compare {
        /// The document to compare (PDF, or .txt/.md)
        file: PathBuf,

        /// Print the result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Build the reference cache (or load it if already present)
    Build {
        /// Delete the existing cache first and rebuild from the references
        #[arg(long)]
        refresh: bool,
    },

    /// Show configured references and cache state
    Status,
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so `compare --json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("docmatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(config_err) = e.downcast_ref::<ConfigurationError>() {
                terminal::display_missing_references(config_err);
            } else {
                eprintln!("{} {e:#}", "Error:".red().bold());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()
        .with_references(cli.overrides.references)
        .with_cache_path(cli.overrides.cache);

    match cli.command {
        Commands::Compare { file, json } => {
            let normalizer = Normalizer::english();
            let extractor = AutoExtractor;
            let mut manager = CacheManager::from_config(&config);

            let cache = manager.load_or_build(&extractor, &normalizer)?;
            if !json {
                terminal::display_cache_ready(cache);
            }

            let report = compare_document(&file, &extractor, &normalizer, cache);

            if json {
                println!("{}", json_output::render_report(&report)?);
            } else {
                terminal::display_comparison(&report);
            }
        }

        Commands::Build { refresh } => {
            let normalizer = Normalizer::english();
            let mut manager = CacheManager::from_config(&config);

            if refresh {
                // Check before deleting so a bad reference list keeps the old store.
                config.require_references()?;
                if manager.invalidate()? {
                    println!("Deleted existing cache at {}", manager.store().location());
                }
            }

            info!(store = %manager.store().location(), "Resolving reference cache");
            let cache = manager.load_or_build(&AutoExtractor, &normalizer)?;
            terminal::display_cache_ready(cache);
        }

        Commands::Status => {
            docmatch::status::show(&config)?;
        }
    }

    Ok(())
}
