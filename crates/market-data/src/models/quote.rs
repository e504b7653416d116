/// A single closing price.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricePoint {
    /// Date exactly as the feed printed it.
    pub date: String,

    /// Closing price in cents, truncated toward zero.
    pub price_cents: i64,
}

/// Closing prices for one ticker.
///
/// Points keep the order the feed returned them in, which is newest first.
/// Use [`QuoteSeries::into_chronological`] for oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteSeries {
    points: Vec<PricePoint>,
}

impl QuoteSeries {
    pub fn push(&mut self, date: String, price_cents: i64) {
        self.points.push(PricePoint { date, price_cents });
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reverse feed order so the oldest date comes first.
    pub fn into_chronological(mut self) -> Self {
        self.points.reverse();
        self
    }

    pub fn dates(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    pub fn prices(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.price_cents).collect()
    }

    /// Split into index-aligned date and price vectors.
    pub fn into_columns(self) -> (Vec<String>, Vec<i64>) {
        self.points
            .into_iter()
            .map(|p| (p.date, p.price_cents))
            .unzip()
    }

    /// Smallest and largest date strings, compared as plain strings.
    ///
    /// Only chronological for sortable formats such as `YYYY-MM-DD`.
    pub fn date_bounds(&self) -> Option<(&str, &str)> {
        let min = self.points.iter().map(|p| p.date.as_str()).min()?;
        let max = self.points.iter().map(|p| p.date.as_str()).max()?;
        Some((min, max))
    }
}
