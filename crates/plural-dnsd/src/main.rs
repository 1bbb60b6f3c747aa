// # plural-dnsd - Plural DNS provider runner
//
// This is a THIN integration layer: it loads configuration, sets up logging,
// builds the provider and makes one call into `plural-dns-core`. No DNS
// logic lives here.
//
// ## Commands
//
// - `plural-dnsd records`: print current remote records as JSON endpoints
// - `plural-dnsd apply <FILE>`: apply a plan (`Create`/`UpdateOld`/`UpdateNew`/`Delete`)
//   read from FILE, or from stdin when FILE is `-`
//
// ## Configuration
//
// ### Credentials (environment only)
// - `PLURAL_ACCESS_TOKEN`: Plural access token (required)
// - `PLURAL_ENDPOINT`: Plural API host (optional, defaults to app.plural.sh)
//
// ### Flags (with environment fallback)
// - `--cluster` / `PLURAL_CLUSTER`: cluster the records belong to
// - `--provider` / `PLURAL_PROVIDER`: DNS provider identifier (e.g. aws)
// - `--log-level` / `PLURAL_DNS_LOG_LEVEL`: trace, debug, info, warn, error
// - `--dry-run` / `PLURAL_DNS_DRY_RUN`: log mutations instead of sending them
//
// ## Example
//
// ```bash
// export PLURAL_ACCESS_TOKEN=your_token
// export PLURAL_CLUSTER=prod
// export PLURAL_PROVIDER=aws
//
// plural-dnsd records
// plural-dnsd apply plan.json
// ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use plural_dns_core::{Changes, PluralConfig, PluralProvider, Provider};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Success
/// - 1: Configuration or input error
/// - 2: Runtime error (remote call failed)
#[derive(Debug, Clone, Copy)]
enum PluralDnsExitCode {
    /// Command completed
    Success = 0,
    /// Configuration error, bad arguments or unreadable plan
    ConfigError = 1,
    /// Runtime error (remote failure)
    RuntimeError = 2,
}

impl From<PluralDnsExitCode> for ExitCode {
    fn from(code: PluralDnsExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Debug, Parser)]
#[command(name = "plural-dnsd")]
#[command(about = "Read and apply DNS record changes against the Plural API")]
#[command(version)]
struct Cli {
    /// Cluster the records belong to
    #[arg(long, env = "PLURAL_CLUSTER")]
    cluster: String,

    /// DNS provider identifier the records are registered under
    #[arg(long, env = "PLURAL_PROVIDER")]
    provider: String,

    /// Log verbosity
    #[arg(long, env = "PLURAL_DNS_LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,

    /// Log mutations instead of sending them
    #[arg(long, env = "PLURAL_DNS_DRY_RUN")]
    dry_run: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print current remote records as JSON endpoints
    Records,
    /// Apply a plan read from a JSON file
    Apply {
        /// Plan file, or `-` for stdin
        file: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                PluralDnsExitCode::ConfigError.into()
            } else {
                PluralDnsExitCode::Success.into()
            };
        }
    };

    // Logs go to stderr so `records` output on stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.log_level))
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return PluralDnsExitCode::ConfigError.into();
    }

    let config = match PluralConfig::from_lookup(&cli.cluster, &cli.provider, |key| {
        std::env::var(key).ok()
    }) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return PluralDnsExitCode::ConfigError.into();
        }
    };

    // Read the plan before building anything that talks to the network
    let changes = match &cli.command {
        Command::Apply { file } => match read_changes(file) {
            Ok(changes) => Some(changes),
            Err(e) => {
                error!("{:#}", e);
                return PluralDnsExitCode::ConfigError.into();
            }
        },
        Command::Records => None,
    };

    let provider = match plural_dns_client::new_provider(config, cli.dry_run) {
        Ok(provider) => provider,
        Err(e) => {
            error!("{}", e);
            return PluralDnsExitCode::ConfigError.into();
        }
    };

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return PluralDnsExitCode::RuntimeError.into();
        }
    };

    let result = rt.block_on(async {
        match changes {
            Some(changes) => apply(&provider, &changes).await,
            None => print_records(&provider).await,
        }
    });

    match result {
        Ok(()) => PluralDnsExitCode::Success.into(),
        Err(e) => {
            error!("{:#}", e);
            PluralDnsExitCode::RuntimeError.into()
        }
    }
}

/// Print remote records to stdout as a JSON array of endpoints
async fn print_records(provider: &PluralProvider) -> Result<()> {
    let endpoints = provider.records().await.context("Failed to list records")?;
    println!("{}", serde_json::to_string_pretty(&endpoints)?);
    Ok(())
}

/// Apply a plan, reporting how many record changes it carried
async fn apply(provider: &PluralProvider, changes: &Changes) -> Result<()> {
    if changes.is_empty() {
        info!("Plan is empty, nothing to apply");
        return Ok(());
    }

    provider
        .apply_changes(changes)
        .await
        .context("Failed to apply changes")?;

    info!("Applied {} record change(s)", changes.len());
    Ok(())
}

/// Read a JSON plan from `path`, or from stdin when `path` is `-`
fn read_changes(path: &Path) -> Result<Changes> {
    let raw = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read plan from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?
    };

    parse_changes(&raw)
}

fn parse_changes(raw: &str) -> Result<Changes> {
    serde_json::from_str(raw).context("Plan is not a valid changes document")
}
