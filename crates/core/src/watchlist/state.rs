use tickerwatch_market_data::{Quote, Ticker};

use crate::quotes::QuoteMap;

/// Persistent list of tracked tickers plus the quotes last fetched for them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WatchlistState {
    /// Display order is insertion order; symbols are unique.
    pub tickers: Vec<Ticker>,

    /// Replaced wholesale on every fetch; `Some(empty)` after a failure,
    /// `None` before the first fetch completes.
    pub quotes: Option<QuoteMap>,
}

impl WatchlistState {
    pub fn new(tickers: Vec<Ticker>) -> Self {
        Self {
            tickers,
            quotes: None,
        }
    }

    /// True when a ticker with this symbol is tracked.
    pub fn contains_symbol(&self, symbol: &str) -> bool {
        self.tickers.iter().any(|t| t.symbol == symbol)
    }

    pub fn quote_for(&self, symbol: &str) -> Option<&Quote> {
        self.quotes.as_ref().and_then(|quotes| quotes.get(symbol))
    }
}
