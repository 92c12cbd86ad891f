use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Fixed source tag written into every snapshot.
pub const SNAPSHOT_SOURCE: &str = "coinlore";

/// Snapshot schema version.
pub const SNAPSHOT_VERSION: &str = "1.0.0";

/// Rank substituted for coins the API reports as unranked; sorts them last.
pub const UNRANKED: u32 = 9999;

/// One coin's raw ticker entry as returned by the Coinlore API.
///
/// Every price field arrives as a decimal string and any of them may be
/// missing. Supply fields (`csupply`, `tsupply`, `msupply`), `nameid` and
/// `price_btc` are never used by the snapshot and are not modeled.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinloreTicker {
    pub symbol: String,
    pub name: String,
    #[serde(default, deserialize_with = "lenient_rank")]
    pub rank: Option<u32>,
    #[serde(default)]
    pub price_usd: Option<String>,
    #[serde(default)]
    pub percent_change_1h: Option<String>,
    #[serde(default)]
    pub percent_change_24h: Option<String>,
    #[serde(default)]
    pub percent_change_7d: Option<String>,
    #[serde(default)]
    pub market_cap_usd: Option<String>,
    #[serde(default, rename = "volume24")]
    pub volume_24h: Option<String>,
}

/// Rank is documented as a JSON number; tolerate a numeric string too.
/// Anything else (null, missing, fractional, negative) means unranked.
fn lenient_rank<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.parse().ok(),
        _ => None,
    })
}

/// The cleaned, typed representation of one coin written to `prices.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinPrice {
    pub symbol: String,
    pub name: String,
    pub price_usd: f64,
    pub percent_change_24h: Option<f64>,
    pub percent_change_1h: Option<f64>,
    pub percent_change_7d: Option<f64>,
    pub rank: u32,
    pub market_cap_usd: Option<f64>,
    pub volume_24h: Option<f64>,
}

impl CoinPrice {
    /// Normalize one upstream ticker. A bad field never aborts the run:
    /// an unreadable price becomes `0`, a zero or unreadable rank becomes
    /// [`UNRANKED`], and the optional fields collapse to `None`.
    pub fn from_ticker(ticker: &CoinloreTicker) -> Self {
        Self {
            symbol: ticker.symbol.clone(),
            name: ticker.name.clone(),
            price_usd: ticker
                .price_usd
                .as_deref()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0.0),
            percent_change_24h: parse_optional(ticker.percent_change_24h.as_deref()),
            percent_change_1h: parse_optional(ticker.percent_change_1h.as_deref()),
            percent_change_7d: parse_optional(ticker.percent_change_7d.as_deref()),
            rank: ticker.rank.filter(|r| *r != 0).unwrap_or(UNRANKED),
            market_cap_usd: parse_optional(ticker.market_cap_usd.as_deref()),
            volume_24h: parse_optional(ticker.volume_24h.as_deref()),
        }
    }
}

/// Optional numeric fields: missing, unparseable, or exactly zero all map to
/// `None`. Zero-but-present is indistinguishable from absent in the published
/// file format.
fn parse_optional(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.parse::<f64>().ok()).filter(|v| *v != 0.0)
}

/// The snapshot document written to `prices.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub last_updated: String,
    pub source: String,
    pub version: String,
    pub coins: Vec<CoinPrice>,
}
