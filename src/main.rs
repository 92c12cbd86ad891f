use anyhow::Result;
use tracing::{error, Level};
use tracing_subscriber::FmtSubscriber;

use crypto_prices::api::CoinloreClient;
use crypto_prices::snapshot;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting default subscriber failed");

    let output_dir = std::env::current_dir()?;

    let client = match CoinloreClient::new() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            eprintln!("❌ Failed to fetch prices: {}", e);
            std::process::exit(1);
        }
    };

    match snapshot::run(&client, &output_dir).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Snapshot run failed: {}", e);
            eprintln!("❌ Failed to fetch prices: {}", e);
            std::process::exit(1);
        }
    }
}
