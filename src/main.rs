use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bytecode_complete::config::Settings;
use bytecode_complete::snapshot::Snapshot;
use bytecode_complete::{CompletionKind, CompletionRequest, LoadError};

/// Complete class names, descriptors, and member signatures against a
/// symbol snapshot.
#[derive(Debug, Parser)]
#[command(name = "bytecode-complete", version)]
struct Cli {
    /// Symbol snapshot (TOML).  Defaults to `snapshot` from the settings file.
    #[arg(long, short)]
    snapshot: Option<PathBuf>,

    /// Log filter, e.g. `bytecode_complete=debug`.  Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Print completions as a JSON array instead of one per line.
    #[arg(long)]
    json: bool,

    /// What to complete.
    #[arg(value_enum)]
    kind: Kind,

    /// Owner class (internal name) for method and field completion.
    #[arg(long, short)]
    owner: Option<String>,

    /// The partial token to complete.
    partial: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Kind {
    InternalName,
    Descriptor,
    Method,
    Field,
}

impl From<Kind> for CompletionKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::InternalName => CompletionKind::InternalName,
            Kind::Descriptor => CompletionKind::Descriptor,
            Kind::Method => CompletionKind::Method,
            Kind::Field => CompletionKind::Field,
        }
    }
}

fn init_logging(cli_filter: Option<&str>, settings: &Settings) {
    let filter = cli_filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .or_else(|| settings.log_filter.as_deref().map(EnvFilter::new))
        .unwrap_or_else(|| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), LoadError> {
    let settings = Settings::load_default()?;
    init_logging(cli.log_level.as_deref(), &settings);

    let snapshot = match cli.snapshot.or(settings.snapshot) {
        Some(path) => Snapshot::load(&path)?,
        None => {
            tracing::warn!("no snapshot given; completing against an empty classpath");
            Snapshot::default()
        }
    };
    let completer = snapshot.into_completer();

    let request = CompletionRequest {
        kind: cli.kind.into(),
        owner: cli.owner,
        partial: cli.partial,
    };
    let items = completer.complete(&request);
    tracing::debug!(?request, count = items.len(), "completed");

    if cli.json {
        // Serializing a list of strings cannot fail.
        println!("{}", serde_json::to_string(&items).unwrap_or_default());
    } else {
        for item in &items {
            println!("{item}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bytecode-complete: {e}");
            ExitCode::FAILURE
        }
    }
}
