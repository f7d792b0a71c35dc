//! ledgerchart main entry point

use anyhow::{bail, Context};
use chrono::NaiveDate;
use clap::Parser;
use ledgerchart_config::{Config, Interval};
use ledgerchart_core::{
    accounts_in_category, build_report, collect_accounts, transaction_date_bounds,
    AccountCategory, ReportRequest, Transaction,
};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "ledgerchart")]
#[command(version = "0.1.0")]
#[command(
    about = "Daily balance series and chart data from ledger transactions",
    long_about = None
)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "ledgerchart.yaml")]
    config: PathBuf,

    /// JSON file with the parsed ledger transactions
    #[arg(short, long)]
    transactions: PathBuf,

    /// First bucket date (YYYY-MM-DD), defaults to the first transaction
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Last bucket date (YYYY-MM-DD), defaults to the last transaction
    #[arg(long)]
    end: Option<NaiveDate>,

    /// Reference date for the first delta, defaults to the day before start
    #[arg(long)]
    baseline: Option<NaiveDate>,

    /// Bucket interval: day, week or month
    #[arg(short, long)]
    interval: Option<Interval>,

    /// Account to chart, may be repeated
    #[arg(short = 'a', long = "account")]
    accounts: Vec<String>,

    /// Chart every account of a category: asset, expense, income, liability
    #[arg(long, conflicts_with = "accounts")]
    category: Option<AccountCategory>,
}

/// Runs before the logger exists, so failures go straight to stderr
fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    Config::load(path.to_path_buf())
        .map_err(|e| {
            eprintln!("[ERROR] [{}] {}", e.code(), e);
            eprintln!("[ERROR] {}", e.hint());
            e
        })
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

async fn load_transactions(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read transactions from {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse transactions in {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = load_config(&args.config)?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();

    if !args.config.exists() {
        log::warn!("Config file not found: {}, using defaults", args.config.display());
    }

    let rt = Runtime::new()?;
    let transactions = rt.block_on(load_transactions(&args.transactions))?;
    log::info!("Loaded {} transactions", transactions.len());

    let (first, last) = match (args.start, args.end, transaction_date_bounds(&transactions)?) {
        (Some(start), Some(end), _) => (start, end),
        (start, end, Some((first, last))) => (start.unwrap_or(first), end.unwrap_or(last)),
        (_, _, None) => bail!("No transactions found; pass both --start and --end"),
    };

    let accounts = if let Some(category) = args.category {
        let all_accounts = collect_accounts(&transactions);
        let selected: Vec<String> = accounts_in_category(category, &all_accounts, &config.accounts)
            .into_iter()
            .map(str::to_string)
            .collect();
        if selected.is_empty() {
            bail!(
                "No {} accounts found under prefix '{}'",
                category,
                category.prefix(&config.accounts)
            );
        }
        selected
    } else if !args.accounts.is_empty() {
        args.accounts
    } else {
        config.chart.accounts.clone()
    };

    let request = ReportRequest {
        start: first,
        end: last,
        interval: args.interval.unwrap_or(config.chart.interval),
        accounts,
        baseline: args.baseline,
    };

    let report = build_report(&transactions, &request).map_err(|e| {
        if e.is_request_error() {
            log::warn!("[{}] {}; check --start, --end and --baseline", e.code(), e);
        } else {
            log::error!("[{}] {}; fix the transaction data", e.code(), e);
        }
        e
    })?;

    let output = serde_json::json!({
        "currency": config.currency.symbol,
        "report": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
