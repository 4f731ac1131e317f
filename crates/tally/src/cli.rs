use std::path::PathBuf;

use clap::Parser;

/// Tally — chronological send/receive/fee ledger exporter for Spectre
/// addresses.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Addresses to audit, in the order their transactions should be
    /// concatenated before sorting. Duplicate addresses produce duplicate
    /// rows.
    #[arg(required = true)]
    pub addresses: Vec<String>,

    /// Spectre indexer base URL.
    #[arg(
        long,
        default_value = "https://api.spectre-network.org",
        env = "TALLY_API_URL"
    )]
    pub api_url: String,

    /// Output CSV path.
    #[arg(long, default_value = "transactions.csv", env = "TALLY_OUTPUT")]
    pub output: PathBuf,

    /// Page size for address history requests, and batch size for
    /// ancestor lookups.
    #[arg(long, default_value = "500")]
    pub page_size: u64,
}
