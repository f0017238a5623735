use tickerwatch_market_data::{Quote, Ticker};

use crate::quotes::QuoteMap;

/// Query text plus the session that exists while the query is non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub session: Option<SearchSession>,
}

/// Results and quotes for the current query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchSession {
    /// `None` while the debounced search is pending.
    pub results: Option<Vec<Ticker>>,
    /// Quotes for `results`; `Some(empty)` after a failed fetch.
    pub quotes: Option<QuoteMap>,
}

impl SearchState {
    pub fn is_searching(&self) -> bool {
        !self.query.is_empty()
    }

    /// Current results, empty while pending or idle.
    pub fn results(&self) -> &[Ticker] {
        self.session
            .as_ref()
            .and_then(|s| s.results.as_deref())
            .unwrap_or_default()
    }

    pub fn quote_for(&self, symbol: &str) -> Option<&Quote> {
        self.session
            .as_ref()
            .and_then(|s| s.quotes.as_ref())
            .and_then(|quotes| quotes.get(symbol))
    }
}
