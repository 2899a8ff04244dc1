//! annolink - annotation ranking and progress CLI
//!
//! # Usage
//!
//! ```bash
//! # Rank candidates locally (lexical fallback)
//! annolink rank request.json
//!
//! # Rank through an external scoring service
//! annolink rank request.json --endpoint http://localhost:5000/rank
//!
//! # Per-document progress for a 3-annotator project
//! annolink progress records.json --annotators 3
//! ```
//!
//! Input is JSON, from a file argument or stdin when the argument is
//! omitted or `-`. Output is pretty-printed JSON on stdout.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

use annolink::{
    compute_progress, AnnotationRecord, ExternalRanker, LexicalRanker, Ranker, RankingRequest,
    Result, SourceDocument,
};

/// Annotation ranking and progress CLI.
#[derive(Parser)]
#[command(name = "annolink")]
#[command(author, version, about = "Candidate re-ranking and annotation progress")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the candidates of a JSON RankingRequest
    Rank(RankArgs),
    /// Compute per-document progress from documents and records
    Progress(ProgressArgs),
}

#[derive(Args)]
struct RankArgs {
    /// RankingRequest JSON file, `-` or omitted for stdin
    input: Option<PathBuf>,

    /// External scoring endpoint; without it the lexical ranker runs
    #[arg(long)]
    endpoint: Option<String>,

    /// Timeout for the external scoring call, in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

#[derive(Args)]
struct ProgressArgs {
    /// JSON file with `documents` and `records`, `-` or omitted for stdin
    input: Option<PathBuf>,

    /// Number of annotators assigned to the project
    #[arg(long)]
    annotators: usize,
}

/// Input shape of the `progress` subcommand.
#[derive(Deserialize)]
struct ProgressInput {
    documents: Vec<SourceDocument>,
    #[serde(default)]
    records: Vec<AnnotationRecord>,
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.to_str() != Some("-") => Ok(fs::read_to_string(p)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn run_rank(args: &RankArgs) -> Result<()> {
    let request: RankingRequest = serde_json::from_str(&read_input(args.input.as_ref())?)?;

    let ranker: Box<dyn Ranker> = match &args.endpoint {
        Some(endpoint) => Box::new(ExternalRanker::with_timeout(
            endpoint.as_str(),
            Duration::from_secs(args.timeout_secs),
        )),
        None => Box::new(LexicalRanker::new()),
    };
    log::info!("Ranking {} candidates via {}", request.len(), ranker.name());

    let ranked = ranker.rank(&request);
    println!("{}", serde_json::to_string_pretty(&ranked)?);
    Ok(())
}

fn run_progress(args: &ProgressArgs) -> Result<()> {
    let input: ProgressInput = serde_json::from_str(&read_input(args.input.as_ref())?)?;

    let progress = compute_progress(&input.documents, &input.records, args.annotators);
    println!("{}", serde_json::to_string_pretty(&progress)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Rank(args) => run_rank(args),
        Commands::Progress(args) => run_progress(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
