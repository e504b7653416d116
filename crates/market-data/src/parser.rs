//! Parsing of historical-quote CSV documents.
//!
//! The feed returns `Date,Open,High,Low,Close,Volume,Adj Close` with the
//! newest row first. Only `Date` and `Close` are read.

use csv::ReaderBuilder;
use log::warn;
use serde::Deserialize;

use crate::models::QuoteSeries;

const DATE_COLUMN: &str = "Date";
const CLOSE_COLUMN: &str = "Close";

#[derive(Debug, Deserialize)]
struct QuoteRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Close")]
    close: String,
}

/// Convert a decimal price string to cents, truncating toward zero.
///
/// `"123.45"` is `12345`, `"19.999"` is `1999`. Returns `None` for anything
/// that is not a finite number.
pub fn price_to_cents(raw: &str) -> Option<i64> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some((100.0 * value).trunc() as i64)
}

/// Parse a quote CSV into a series in feed order.
///
/// Dates are kept verbatim. Rows that cannot be read are skipped, so a
/// document with no usable rows is an empty series rather than an error.
pub fn parse_quote_csv(data: &[u8]) -> QuoteSeries {
    let mut series = QuoteSeries::default();
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data);

    match reader.headers() {
        Ok(headers) => {
            let has_columns = [DATE_COLUMN, CLOSE_COLUMN]
                .iter()
                .all(|col| headers.iter().any(|h| h == *col));
            if !has_columns {
                if !headers.is_empty() {
                    warn!("Quote CSV is missing Date/Close columns: {:?}", headers);
                }
                return series;
            }
        }
        Err(e) => {
            warn!("Unreadable quote CSV header: {}", e);
            return series;
        }
    }

    for (index, record) in reader.deserialize::<QuoteRow>().enumerate() {
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                warn!("Skipping quote CSV row {}: {}", index + 1, e);
                continue;
            }
        };
        match price_to_cents(&row.close) {
            Some(cents) => series.push(row.date, cents),
            None => warn!(
                "Skipping quote CSV row {}: bad close price {:?}",
                index + 1,
                row.close
            ),
        }
    }

    series
}
