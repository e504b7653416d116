//! Quote source abstraction and implementations.
//!
//! - The [`QuoteSource`] trait that every feed implements
//! - [`csv_feed::CsvQuoteProvider`], which reads the historical-quotes CSV endpoint

mod traits;

pub mod csv_feed;

pub use traits::QuoteSource;
