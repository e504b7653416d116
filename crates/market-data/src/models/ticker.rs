use std::fmt;

/// Security symbol as sent to the quotes feed.
///
/// The only normalisation is uppercasing; an unknown symbol is not an
/// error here, the feed simply has no data for it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn new(symbol: &str) -> Self {
        Self(symbol.to_uppercase())
    }

    /// Split a comma-separated symbol list, e.g. `vfinx,vbmfx`.
    ///
    /// An empty input yields a single empty ticker, matching a plain
    /// split on `,`.
    pub fn parse_list(symbols: &str) -> Vec<Self> {
        symbols.to_uppercase().split(',').map(|s| Self(s.to_string())).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sampling frequency of a historical series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frequency {
    /// Every trading day, i.e. the full history.
    Daily,
    /// One close per month.
    Monthly,
}

impl Frequency {
    /// Code used by the feed's `g` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            Frequency::Daily => "d",
            Frequency::Monthly => "m",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases() {
        assert_eq!(Ticker::new("vfinx").as_str(), "VFINX");
        assert_eq!(Ticker::new("Brk-B").to_string(), "BRK-B");
    }

    #[test]
    fn test_parse_list() {
        let tickers = Ticker::parse_list("vfinx,VBMFX,aapl");
        let symbols: Vec<&str> = tickers.iter().map(Ticker::as_str).collect();
        assert_eq!(symbols, vec!["VFINX", "VBMFX", "AAPL"]);
    }

    #[test]
    fn test_parse_list_empty_input() {
        let tickers = Ticker::parse_list("");
        assert_eq!(tickers, vec![Ticker::new("")]);
    }

    #[test]
    fn test_parse_list_keeps_whitespace() {
        let tickers = Ticker::parse_list("aapl, msft");
        assert_eq!(tickers[1].as_str(), " MSFT");
    }

    #[test]
    fn test_frequency_codes() {
        assert_eq!(Frequency::Daily.code(), "d");
        assert_eq!(Frequency::Monthly.code(), "m");
    }
}
