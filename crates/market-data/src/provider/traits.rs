//! Quote source trait definition.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{Frequency, QuoteSeries, Ticker};
use crate::parser::parse_quote_csv;

/// A feed of historical closing prices.
///
/// Implementors only have to fetch the raw CSV document; parsing is shared.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// Identifier used in logs.
    fn id(&self) -> &'static str;

    /// Fetch the raw CSV document for `ticker`.
    ///
    /// Any failure to obtain the document is reported as
    /// [`MarketDataError::SymbolNotFound`].
    async fn fetch_csv(
        &self,
        ticker: &Ticker,
        frequency: Frequency,
    ) -> Result<Vec<u8>, MarketDataError>;

    /// Fetch and parse the series for `ticker`, in feed order (newest first).
    async fn fetch_series(
        &self,
        ticker: &Ticker,
        frequency: Frequency,
    ) -> Result<QuoteSeries, MarketDataError> {
        let data = self.fetch_csv(ticker, frequency).await?;
        Ok(parse_quote_csv(&data))
    }
}
