use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use studeo_agent::{
    Config, DocumentRef, FileStore, MaterialProvider, TokenCompanyClient, configure_session,
};

/// Studeo - voice exam proctor over compressed study material
#[derive(Parser)]
#[command(name = "studeo", version, about)]
struct Cli {
    /// Study document to ingest (PDF)
    #[arg(short, long, env = "STUDY_PDF_PATH")]
    document: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Compress one PDF and print the result as JSON (backend hook)
    ProcessPdf {
        /// Path to the PDF file
        path: PathBuf,
    },
    /// Run acquisition (cache-first) and print the study material
    Acquire,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,studeo_agent=info",
        1 => "info,studeo_agent=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load()?;
    tracing::debug!(?config, "loaded configuration");

    let store = FileStore::new(config.cache_path.clone());
    let client = TokenCompanyClient::new(config.api_key.clone());
    let mut provider = MaterialProvider::new(store, client);

    if let Some(document) = cli.document.clone().or_else(|| config.document_path.clone()) {
        provider = provider.with_default_document(document);
    }

    if let Some(cmd) = cli.command {
        return match cmd {
            Command::ProcessPdf { path } => cmd_process_pdf(&provider, &path).await,
            Command::Acquire => cmd_acquire(&provider).await,
        };
    }

    tracing::info!(document = ?cli.document, "starting studeo proctor");

    let material = provider.acquire(None).await;
    let plan = configure_session(&config.voice, &material);

    tracing::info!(
        stt = %plan.stt_model,
        llm = %plan.llm_model,
        tts_voice = %plan.tts_voice,
        material_bytes = material.len(),
        "session plan ready"
    );
    tracing::info!("proctor greeting: \"{}\"", plan.greeting);
    tracing::info!("hand the session plan to the voice runtime to go live");

    Ok(())
}

/// Compress one PDF and print a JSON result for the calling backend
async fn cmd_process_pdf<S, C>(
    provider: &MaterialProvider<S, C>,
    path: &std::path::Path,
) -> anyhow::Result<()>
where
    S: studeo_agent::MaterialStore,
    C: studeo_agent::Compressor,
{
    if !path.exists() {
        println!(
            "{}",
            serde_json::json!({ "error": format!("File not found: {}", path.display()) })
        );
        anyhow::bail!("file not found: {}", path.display());
    }

    let document = DocumentRef::Path(path.to_path_buf());
    let material = provider.acquire(Some(&document)).await;

    println!(
        "{}",
        serde_json::json!({ "success": true, "data": material })
    );
    Ok(())
}

/// Run acquisition and print the material for inspection
async fn cmd_acquire<S, C>(provider: &MaterialProvider<S, C>) -> anyhow::Result<()>
where
    S: studeo_agent::MaterialStore,
    C: studeo_agent::Compressor,
{
    let material = provider.acquire(None).await;
    println!("{material}");
    Ok(())
}
