//! Veridoc CLI entrypoint: score documents and print their breakdowns.

use std::path::PathBuf;
use std::process::ExitCode;

use veridoc::config::Config;
use veridoc::document::{Document, DocumentMetadata};
use veridoc::extract::{PlainTextExtractor, TextExtractor};
use veridoc::registry::ModelRegistry;
use veridoc::scoring::{HeuristicScorer, HybridScorer, ScoreBreakdown};

struct CliArgs {
    hybrid: bool,
    metadata: DocumentMetadata,
    paths: Vec<PathBuf>,
}

fn parse_args() -> Result<CliArgs, String> {
    let mut hybrid = false;
    let mut metadata = DocumentMetadata::default();
    let mut paths = Vec::new();

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--hybrid" => hybrid = true,
            "--verified-offchain" => metadata.verified_offchain = true,
            "--audited" => metadata.audited = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown flag: {other}"));
            }
            path => paths.push(PathBuf::from(path)),
        }
    }

    if paths.is_empty() {
        return Err("no document paths given".to_string());
    }

    Ok(CliArgs {
        hybrid,
        metadata,
        paths,
    })
}

fn print_result(path: &PathBuf, strategy: &str, score: f64, breakdown: &ScoreBreakdown) {
    let line = serde_json::json!({
        "path": path,
        "strategy": strategy,
        "score": score,
        "breakdown": breakdown,
    });
    println!("{line}");
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    let extractor = PlainTextExtractor;

    if args.hybrid {
        // Fatal on failure: no retry, no degraded fallback.
        let registry = ModelRegistry::initialize(&config)?;
        let scorer = HybridScorer::new(registry);

        for path in &args.paths {
            let document = Document::with_metadata(extractor.extract(path), args.metadata);
            let (score, breakdown) = scorer.score_document(&document)?;
            print_result(path, "hybrid", score, &breakdown);
        }
    } else {
        let scorer = HeuristicScorer::new();

        for path in &args.paths {
            let document = Document::with_metadata(extractor.extract(path), args.metadata);
            let (score, breakdown) = scorer.score_document(&document);
            print_result(path, "heuristic", score, &breakdown);
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(reason) => {
            eprintln!("error: {reason}");
            eprintln!(
                "usage: veridoc [--hybrid] [--verified-offchain] [--audited] <path>..."
            );
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Scoring failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
