//! Market data models.

mod quote;
mod ticker;

pub use quote::{PricePoint, QuoteSeries};
pub use ticker::{Frequency, Ticker};
