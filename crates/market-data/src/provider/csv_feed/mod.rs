//! Historical-quotes CSV feed.
//!
//! Requests `<base>?s=<ticker>&g=<frequency>` and returns the CSV body.
//! There is no timeout and no retry: a hanging feed hangs the caller.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Url};

use crate::errors::MarketDataError;
use crate::models::{Frequency, Ticker};
use crate::provider::QuoteSource;

/// Historical quotes endpoint used when none is configured.
pub const DEFAULT_QUOTES_URL: &str = "http://ichart.yahoo.com/table.csv";
const PROVIDER_ID: &str = "CSV_FEED";

/// Quote source backed by an HTTP CSV endpoint.
pub struct CsvQuoteProvider {
    client: Client,
    base_url: Url,
}

impl CsvQuoteProvider {
    /// Create a provider for the endpoint at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketDataError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(base_url: &str) -> Result<Self, MarketDataError> {
        let base_url = Url::parse(base_url).map_err(|e| MarketDataError::InvalidUrl {
            message: format!("{}: {}", base_url, e),
        })?;

        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the request URL for a ticker, percent-encoding the symbol.
    pub fn quotes_url(&self, ticker: &Ticker, frequency: Frequency) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("s", ticker.as_str())
            .append_pair("g", frequency.code());
        url
    }
}

#[async_trait]
impl QuoteSource for CsvQuoteProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_csv(
        &self,
        ticker: &Ticker,
        frequency: Frequency,
    ) -> Result<Vec<u8>, MarketDataError> {
        let url = self.quotes_url(ticker, frequency);
        debug!("{} request: {}", PROVIDER_ID, url);

        let not_found = || MarketDataError::SymbolNotFound(ticker.to_string());

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("{} request for {} failed: {}", PROVIDER_ID, ticker, e);
            not_found()
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {} for {}", PROVIDER_ID, status, ticker);
            return Err(not_found());
        }

        let body = response.bytes().await.map_err(|e| {
            warn!("{} body for {} could not be read: {}", PROVIDER_ID, ticker, e);
            not_found()
        })?;

        Ok(body.to_vec())
    }
}
