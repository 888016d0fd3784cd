//! Tally report CLI.
//!
//! Computes a trial-balance report from JSON ledger files and prints it in
//! the selected format.
//!
//! Usage: `tally accounts.json journal.json --format csv --start-account 100`
//!
//! Bound flags are parsed leniently: empty or unparseable values mean
//! "unbounded on that side", and the report falls back to the ledger's own
//! extremes. Sample ledger files live under `demos/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tally_core::balance::{BalanceQuery, BalanceService, OutputFormat};
use tally_core::ledger::{Account, JournalEntry, validate_entries};
use tally_shared::AppConfig;

/// Compute a trial-balance report from a general ledger.
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the chart of accounts
    #[arg(value_name = "ACCOUNTS")]
    accounts: PathBuf,

    /// JSON file with the journal entries
    #[arg(value_name = "JOURNAL")]
    journal: PathBuf,

    /// Lower account bound, inclusive (unparseable means unbounded)
    #[arg(long, default_value = "", hide_default_value = true)]
    start_account: String,

    /// Upper account bound, inclusive
    #[arg(long, default_value = "", hide_default_value = true)]
    end_account: String,

    /// Lower period bound, YYYY-MM-DD, inclusive
    #[arg(long, default_value = "", hide_default_value = true)]
    start_period: String,

    /// Upper period bound, YYYY-MM-DD, inclusive
    #[arg(long, default_value = "", hide_default_value = true)]
    end_period: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "table")]
    format: FormatArg,
}

/// Output format selector.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum FormatArg {
    /// Comma-separated values, no header row
    Csv,
    /// Aligned plain-text table
    #[default]
    Table,
    /// Compute the report but print nothing
    None,
}

impl From<FormatArg> for Option<OutputFormat> {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => Some(OutputFormat::Csv),
            FormatArg::Table => Some(OutputFormat::Table),
            FormatArg::None => None,
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tally=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    // Load configuration
    let config = AppConfig::load().context("Failed to load configuration")?;

    let accounts: Vec<Account> = load_json(&args.accounts).context("Failed to load accounts")?;
    let entries: Vec<JournalEntry> =
        load_json(&args.journal).context("Failed to load journal entries")?;
    validate_entries(&entries).context("Malformed journal entries")?;
    info!(
        accounts = accounts.len(),
        entries = entries.len(),
        "Ledger loaded"
    );

    let query = BalanceQuery::from_raw(
        &args.start_account,
        &args.end_account,
        &args.start_period,
        &args.end_period,
        args.format.into(),
    );

    let (report, rendered) =
        BalanceService::run(&accounts, &entries, &query, &config.report.date_format)?;
    info!(rows = report.rows.len(), "Report generated");

    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}

/// Reads and deserializes a JSON file.
fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Cannot parse {}", path.display()))
}
