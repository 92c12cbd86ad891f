use std::fs;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::api::{CoinloreClient, FetchError, COIN_IDS};
use crate::models::{CoinPrice, CoinloreTicker, PriceSnapshot, SNAPSHOT_SOURCE, SNAPSHOT_VERSION};

/// Output file name, written into the current working directory.
pub const OUTPUT_FILE: &str = "prices.json";

/// Normalize, sort and stamp a snapshot from raw tickers.
pub fn build(tickers: &[CoinloreTicker]) -> PriceSnapshot {
    let mut coins: Vec<CoinPrice> = tickers.iter().map(CoinPrice::from_ticker).collect();
    // sort_by_key is stable: equal ranks keep their upstream order
    coins.sort_by_key(|coin| coin.rank);

    PriceSnapshot {
        last_updated: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        source: SNAPSHOT_SOURCE.to_string(),
        version: SNAPSHOT_VERSION.to_string(),
        coins,
    }
}

/// Serialize the snapshot as pretty-printed JSON and replace any existing
/// file at `path`. Whole-file overwrite; concurrent runs race, last writer
/// wins.
pub fn write(snapshot: &PriceSnapshot, path: &Path) -> Result<(), FetchError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, json)?;
    Ok(())
}

/// Run the whole pipeline: one fetch, one file write into `output_dir`.
/// Returns the written snapshot.
pub async fn run(client: &CoinloreClient, output_dir: &Path) -> Result<PriceSnapshot, FetchError> {
    let tickers = client.fetch_tickers(&COIN_IDS).await?;

    let snapshot = build(&tickers);
    let output_path = output_dir.join(OUTPUT_FILE);
    write(&snapshot, &output_path)?;

    info!(
        "✅ Updated {} coin prices at {}",
        snapshot.coins.len(),
        snapshot.last_updated
    );
    info!("📝 Written to {}", output_path.display());

    Ok(snapshot)
}
