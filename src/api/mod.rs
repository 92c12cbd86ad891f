use thiserror::Error;

pub mod coinlore;
pub use coinlore::{CoinloreClient, COIN_IDS};

/// Failures that terminate a snapshot run.
///
/// Per-field numeric parse problems are not errors; they are absorbed by the
/// fallback rules in [`crate::models`].
#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-success HTTP status from the ticker endpoint.
    #[error("Coinlore API error: {status}")]
    Transport { status: reqwest::StatusCode },

    /// Body was not a non-empty JSON array of tickers.
    #[error("Invalid response from Coinlore API")]
    InvalidResponse,

    /// Transport-level failure before any status was received.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Failed to encode snapshot: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}
