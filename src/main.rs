use anyhow::Context;
use clap::Parser; // for cli
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use code_compare::config::{Args, Command};
use code_compare::handlers;
use code_compare::persist::save_feedback;
use code_compare::state::AppState;
use code_compare::{Comparator, CompareHandle, ComparisonCache, ComparisonRequest, CompletionClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // parse cli arguments
    let args = Args::parse();
    let settings = args.completion_settings();
    info!(endpoint = %settings.endpoint, model = %settings.model, "completion service configured");

    let cache = ComparisonCache::new();
    let comparator = Arc::new(Comparator::new(CompletionClient::new(settings), cache.clone()));
    let compare = CompareHandle::spawn(comparator);

    match args.command {
        Command::Compare {
            correct,
            submitted,
            output,
        } => run_once(&compare, &correct, &submitted, output.as_deref()).await,
        Command::Serve { host, port } => {
            let state = Arc::new(AppState { compare, cache });
            let app = handlers::router(state);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {addr}"))?;

            info!("code-compare listening on http://{addr}");
            axum::serve(listener, app).await.context("server error")
        }
    }
}

async fn run_once(
    compare: &CompareHandle,
    correct: &Path,
    submitted: &Path,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let correct_code = tokio::fs::read_to_string(correct)
        .await
        .with_context(|| format!("failed to read {}", correct.display()))?;
    let submitted_code = tokio::fs::read_to_string(submitted)
        .await
        .with_context(|| format!("failed to read {}", submitted.display()))?;

    let feedback = compare
        .submit(ComparisonRequest::new(correct_code, submitted_code))
        .await?;
    println!("{feedback}");

    if let Some(path) = output {
        match save_feedback(path, &feedback).await {
            Ok(()) => eprintln!("Feedback saved successfully."),
            Err(e) => eprintln!("{e}"),
        }
    }

    Ok(())
}
