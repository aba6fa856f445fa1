//! Thin command-line front end for the scan pipeline.
//!
//! Usage: `simscan [--json] [FILE]` — reads the document from FILE, or from
//! stdin when no file is given, runs one scan, and prints the outcome. The
//! core is a pure function from document text to outcome; everything here is
//! presentation.

use std::io::Read;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use simscan_core::{PipelineOutcome, ScanConfig, Scanner};

struct Args {
    json: bool,
    file: Option<String>,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut json = false;
    let mut file = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--json" => json = true,
            "--help" | "-h" => {
                eprintln!("usage: simscan [--json] [FILE]");
                eprintln!("reads the document from FILE or stdin and scans the web for overlap");
                std::process::exit(0);
            }
            other if file.is_none() && !other.starts_with('-') => {
                file = Some(other.to_string());
            }
            other => anyhow::bail!("unexpected argument: {other}"),
        }
    }
    Ok(Args { json, file })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr; stdout carries only the scan result.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = parse_args()?;

    // 1. Read the document text
    let text = match &args.file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read document from {path}"))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read document from stdin")?;
            buffer
        }
    };

    // 2. Configure and build the scanner
    let config = ScanConfig::from_env()?;
    info!(
        threshold = config.similarity_threshold,
        max_candidates = config.max_candidates,
        search_url = %config.search_url,
        "configuration loaded"
    );
    let scanner = Scanner::with_reference_adapters(config)?;

    // 3. Run the pipeline and render the outcome
    let outcome = scanner.scan(&text).await;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        PipelineOutcome::Match(result) => {
            println!(
                "Similarity with {}: {:.2}",
                result.candidate_url, result.score
            );
            println!();
            println!("{}", result.annotated_text);
        }
        PipelineOutcome::NoSignificantMatch => {
            println!("No significant match found on the web.");
        }
        PipelineOutcome::NoCandidatesFound => {
            println!("No websites returned from the search.");
        }
        PipelineOutcome::InputEmpty => {
            println!("Document must be provided.");
        }
    }
    Ok(())
}
