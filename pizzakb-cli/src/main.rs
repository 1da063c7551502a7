//! pizzakb CLI - pizza menu CSV files to the Exchange Manager knowledge graph.
//!
//! # Usage
//!
//! ```bash
//! # Ingest a CSV file (connection settings from EM_BASE_URL, EM_API_KEY, EM_CLIENT_NAME,
//! # read from the environment or a .env file)
//! pizzakb ingest --path pizzas.csv
//!
//! # Show the request that would be sent
//! pizzakb ingest --path pizzas.csv --dry-run
//!
//! # Write the graph as JSON-LD or N-Triples
//! pizzakb export pizzas.csv -o pizzas.jsonld
//! pizzakb export pizzas.csv --format ntriples
//! ```

mod client;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use pizzakb_core::formats::{CsvSource, JsonLd, NTriples};
use pizzakb_core::record::fields;
use pizzakb_core::exchange::DEFAULT_TIMEOUT;
use pizzakb_core::{ExchangeConfig, InsertGraphRequest, Pipeline, RawRecord, RecordSource};
use std::fs;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::client::ExchangeClient;

#[derive(Parser)]
#[command(name = "pizzakb")]
#[command(about = "Pizza menu knowledge graph ingestion", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a CSV file and insert its graph into the Exchange Manager
    Ingest {
        /// Path to the CSV file to be parsed and ingested
        #[arg(short, long)]
        path: PathBuf,

        #[command(flatten)]
        exchange: ExchangeArgs,

        /// Print the request envelope instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the graph built from a CSV file
    Export {
        /// Input CSV file
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "jsonld")]
        format: OutputFormat,
    },
}

#[derive(Args)]
struct ExchangeArgs {
    /// Exchange Manager base URL
    #[arg(long, env = "EM_BASE_URL")]
    base_url: Option<String>,

    /// Exchange Manager API key
    #[arg(long, env = "EM_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Client name declared in each request
    #[arg(long, env = "EM_CLIENT_NAME")]
    client_name: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    timeout_secs: u64,
}

impl ExchangeArgs {
    fn into_config(self) -> Result<ExchangeConfig> {
        let config = ExchangeConfig::new(
            self.base_url.unwrap_or_default(),
            self.api_key.unwrap_or_default(),
            self.client_name.unwrap_or_default(),
        )?;
        Ok(config.with_timeout(Duration::from_secs(self.timeout_secs)))
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// JSON-LD node objects
    Jsonld,
    /// N-Triples (line-based)
    Ntriples,
}

fn main() -> Result<ExitCode> {
    // A missing .env is fine; variables already set in the environment win.
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Commands::Ingest {
            path,
            exchange,
            dry_run,
        } => cmd_ingest(&path, exchange, dry_run),
        Commands::Export {
            input,
            output,
            format,
        } => cmd_export(&input, output.as_deref(), format),
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")
}

fn load_records(path: &Path) -> Result<Vec<RawRecord>> {
    let mut source = CsvSource::open(path, &fields::ALL)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let records = source
        .records()
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!(records = records.len(), path = %path.display(), "parsed csv");
    Ok(records)
}

fn cmd_ingest(path: &Path, exchange: ExchangeArgs, dry_run: bool) -> Result<ExitCode> {
    let config = exchange.into_config()?;
    let records = load_records(path)?;
    let pipeline = Pipeline::default();

    if dry_run {
        let ingested = pipeline.ingest(&records)?;
        let roots = ingested.roots();
        let request = InsertGraphRequest::new(&config.client_name, &ingested.document, &roots);
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(ExitCode::SUCCESS);
    }

    let client = ExchangeClient::new(config);
    info!(url = %client.config().requests_url(), "Inserting graph into Exchange Manager");
    let outcome = pipeline.run(&records, &client)?;

    if outcome.is_success() {
        info!("Graph inserted successfully");
        Ok(ExitCode::SUCCESS)
    } else {
        error!("Error inserting the graph into Exchange Manager");
        error!(status = ?outcome.status(), "Response: {}", outcome.body());
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_export(input: &Path, output: Option<&Path>, format: OutputFormat) -> Result<ExitCode> {
    let records = load_records(input)?;
    let ingested = Pipeline::default().ingest(&records)?;

    let content = match format {
        OutputFormat::Jsonld => JsonLd::to_string(&ingested.graph)?,
        OutputFormat::Ntriples => NTriples::to_string(&ingested.graph)?,
    };

    match output {
        Some(path) => {
            fs::write(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Exported {} -> {}", input.display(), path.display());
        }
        None => println!("{content}"),
    }
    Ok(ExitCode::SUCCESS)
}
