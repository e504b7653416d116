//! Error types for the market data crate.

use thiserror::Error;

/// Errors that can occur while fetching quotes.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The feed could not produce data for the symbol.
    ///
    /// Covers both unknown tickers and an unreachable or failing feed;
    /// callers cannot tell the two apart.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The feed URL could not be built.
    #[error("Invalid quotes URL: {message}")]
    InvalidUrl {
        /// Description of the URL failure
        message: String,
    },
}

impl MarketDataError {
    /// Whether this error belongs to the "no data for this ticker" kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_))
    }
}
