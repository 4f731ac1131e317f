mod cli;

use std::fs::File;

use clap::Parser;
use eyre::WrapErr;

use tally_core::api::HttpApiClient;
use tally_core::cache::TxCache;
use tally_core::report::{build_report, write_csv};
use tally_core::types::Address;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let api = HttpApiClient::new(&args.api_url).wrap_err("construct indexer client")?;

    let addresses: Vec<Address> = args
        .addresses
        .iter()
        .map(|address| Address::from(address.as_str()))
        .collect();

    tracing::info!(
        api_url = %args.api_url,
        addresses = addresses.len(),
        page_size = args.page_size,
        "starting report run"
    );

    // Records are fully assembled before the output file is created; a
    // failed run leaves no partial report behind.
    let mut cache = TxCache::new();
    let records = build_report(&api, &mut cache, &addresses, args.page_size)
        .await
        .wrap_err("build transaction report")?;

    tracing::info!(
        records = records.len(),
        cached_transactions = cache.len(),
        "report assembled"
    );

    let file = File::create(&args.output)
        .wrap_err_with(|| format!("create output file {}", args.output.display()))?;
    write_csv(&records, file).wrap_err("write csv report")?;

    println!(
        "Wrote {} records to {}",
        records.len(),
        args.output.display()
    );

    Ok(())
}
