use homepage_market_data::{QuoteSeries, Ticker};
use serde::Serialize;

/// One ticker's monthly closes, oldest first.
#[derive(Debug, Serialize)]
pub struct MonthlyQuotes {
    pub name: String,
    pub dates: Vec<String>,
    pub values: Vec<i64>,
}

impl MonthlyQuotes {
    /// Takes a series in feed order (newest first) and reorders it.
    pub fn from_feed(ticker: Ticker, series: QuoteSeries) -> Self {
        let (dates, values) = series.into_chronological().into_columns();
        Self {
            name: ticker.into_string(),
            dates,
            values,
        }
    }
}

/// Full history for a single ticker, prices in feed order.
#[derive(Debug, Serialize)]
pub struct QuoteHistory {
    pub start: Option<String>,
    pub end: Option<String>,
    pub prices: Vec<i64>,
}

impl From<QuoteSeries> for QuoteHistory {
    fn from(series: QuoteSeries) -> Self {
        // String min/max, not first/last row.
        let (start, end) = match series.date_bounds() {
            Some((min, max)) => (Some(min.to_string()), Some(max.to_string())),
            None => (None, None),
        };
        Self {
            start,
            end,
            prices: series.prices(),
        }
    }
}
