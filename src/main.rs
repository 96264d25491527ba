//! Command-line entry point for the Babel-space retrieval engine.
//!
//! This binary is the thinnest possible stand-in for the out-of-scope
//! HTTP/session API layer: it drives `pipeline::search` end-to-end from
//! the terminal so the library can be exercised manually, without
//! implying any of the chat/session, browser UI, or persistence
//! machinery that sits outside this crate's scope.

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use babel::{
    address_to_page, validate_page, EngineConfig, NoopNormalizeHook, NullRemoteSource, Pipeline,
    SystemClock,
};

#[derive(Parser)]
#[command(name = "babel", about = "Coherence-driven retrieval over the Babel-space text corpus")]
struct Cli {
    /// Path to a YAML engine configuration file. Defaults are used when omitted.
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a full search and print ranked results.
    Search {
        query: String,
        #[arg(long, default_value_t = 10)]
        max_results: usize,
        #[arg(long, default_value = "local")]
        mode: String,
        #[arg(long, default_value_t = 0.0)]
        min_score: f64,
    },
    /// Materialize the page behind an address and print it.
    Generate { address: String },
    /// Validate that a page is a well-formed Babel-space page.
    Validate { page: String },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        )
        .with_target(false)
        .init();

    if let Err(err) = run() {
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let engine_config = match &cli.config {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };

    match cli.command {
        Command::Search {
            query,
            max_results,
            mode,
            min_score,
        } => {
            let pipeline = Pipeline::new(
                engine_config.enumerator,
                engine_config.scorer,
                engine_config.cache,
                engine_config.pipeline,
                Arc::new(SystemClock),
                Arc::new(NullRemoteSource),
                Arc::new(NoopNormalizeHook),
            )?;

            let response = pipeline.search(&query, max_results, &mode, min_score)?;
            println!(
                "query={:?} total_found={} elapsed_ms={}",
                response.query, response.total_found, response.elapsed_ms
            );
            for page in &response.results {
                println!(
                    "  {} overall={:.1} confidence={:?}",
                    page.address, page.coherence.overall_score, page.coherence.confidence_level
                );
            }
        }
        Command::Generate { address } => {
            let page = address_to_page(address.as_bytes());
            println!("{page}");
        }
        Command::Validate { page } => match validate_page(&page) {
            Ok(()) => println!("valid"),
            Err(err) => println!("invalid: {err}"),
        },
    }

    Ok(())
}
