//! Homepage Market Data Crate
//!
//! Fetches historical closing prices for ticker symbols from a CSV quotes
//! feed and turns them into integer-cent series.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +------------------+     +------------------+
//! |     Ticker       | --> |   QuoteSource    | --> |   CSV parser     |
//! +------------------+     +------------------+     +------------------+
//!                                                           |
//!                                                           v
//!                                                   +------------------+
//!                                                   |   QuoteSeries    |
//!                                                   +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Ticker`] - Uppercased security symbol
//! - [`Frequency`] - Sampling frequency requested from the feed
//! - [`QuoteSeries`] - Index-aligned `(date, cents)` pairs in feed order
//! - [`QuoteSource`] - Trait implemented by quote feeds
//! - [`CsvQuoteProvider`] - HTTP implementation against the historical CSV endpoint

pub mod errors;
pub mod models;
pub mod parser;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{Frequency, PricePoint, QuoteSeries, Ticker};
pub use parser::{parse_quote_csv, price_to_cents};
pub use provider::csv_feed::{CsvQuoteProvider, DEFAULT_QUOTES_URL};
pub use provider::QuoteSource;
