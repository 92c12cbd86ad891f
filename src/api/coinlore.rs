use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use super::FetchError;
use crate::models::CoinloreTicker;

const API_BASE: &str = "https://api.coinlore.net";
const USER_AGENT: &str = "CryptoTycoon/1.0";

/// Coinlore ids of the coins tracked by the snapshot, all fetched in one
/// request.
pub const COIN_IDS: [u32; 26] = [
    90,     // BTC - Bitcoin
    80,     // ETH - Ethereum
    518,    // USDT - Tether
    2710,   // BNB - Binance Coin
    58,     // XRP - Ripple
    48543,  // SOL - Solana
    33285,  // USDC - USD Coin
    2,      // DOGE - Dogecoin
    2713,   // TRX - TRON
    257,    // ADA - Cardano
    148109, // HYPE - Hyperliquid
    2751,   // LINK - Chainlink
    2321,   // BCH - Bitcoin Cash
    44883,  // AVAX - Avalanche
    1,      // LTC - Litecoin
    134,    // ZEC - Zcash
    28,     // XMR - Monero
    45088,  // SHIB - Shiba Inu
    93841,  // PEPE - Pepe
    118,    // ETC - Ethereum Classic
    151099, // PI - Pi
    42855,  // XAUT - Tether Gold
    70485,  // KAS - Kaspa
    3,      // VTC - Vertcoin
    8,      // DASH - Dash
    32386,  // RVN - Ravencoin
];

/// Client for the Coinlore public ticker API.
pub struct CoinloreClient {
    client: Client,
    base_url: String,
}

impl CoinloreClient {
    /// Create a client against the live Coinlore endpoint.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(API_BASE)
    }

    /// Create a client against a different host. Tests point this at a local
    /// mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, FetchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch tickers for the given coin ids in a single request.
    ///
    /// Fails on a non-2xx status or a body that is not a non-empty JSON
    /// array. Never retries.
    pub async fn fetch_tickers(&self, ids: &[u32]) -> Result<Vec<CoinloreTicker>, FetchError> {
        let url = format!("{}/api/ticker/?id={}", self.base_url, id_query(ids));

        info!("📡 Fetching prices from Coinlore API...");
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::Transport {
                status: response.status(),
            });
        }

        let body: Value = response.json().await?;
        match body {
            Value::Array(items) if !items.is_empty() => {
                serde_json::from_value(Value::Array(items))
                    .map_err(|_| FetchError::InvalidResponse)
            }
            _ => Err(FetchError::InvalidResponse),
        }
    }
}

/// Comma-joined id list for the `id=` query parameter.
fn id_query(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
