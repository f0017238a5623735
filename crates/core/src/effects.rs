//! Follow-up work requested by reducers.
//!
//! Reducers never perform I/O. They return `Effect` values describing what
//! should happen next; the [`store`](crate::store) runtime executes them and
//! turns their outcomes into actions.

use tickerwatch_market_data::Ticker;

/// Named cancellation scopes. Starting work in a scope aborts whatever was
/// still running in it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CancelScope {
    /// Debounced ticker search
    Search,
    /// Quote refresh for the watchlist
    WatchlistQuotes,
    /// Quote enrichment for search results
    SearchQuotes,
}

/// Which coordinator a quote fetch belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuoteScope {
    Watchlist,
    SearchResults,
}

impl QuoteScope {
    pub fn cancel_scope(self) -> CancelScope {
        match self {
            QuoteScope::Watchlist => CancelScope::WatchlistQuotes,
            QuoteScope::SearchResults => CancelScope::SearchQuotes,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    /// Wait out the debounce window, then search equities for `query`.
    SearchTickers { query: String },

    /// Fetch quotes for a comma-separated symbol list.
    FetchQuotes { scope: QuoteScope, symbols: String },

    /// Abort any work running in the scope.
    Cancel(CancelScope),

    /// Read the persisted watchlist.
    LoadSavedTickers,

    /// Persist the watchlist (fire-and-forget).
    SaveTickers(Vec<Ticker>),

    /// Open a URL in the system browser.
    OpenUrl(&'static str),
}

impl Effect {
    /// Scope this effect runs in, if it is cancellable.
    pub fn cancel_scope(&self) -> Option<CancelScope> {
        match self {
            Effect::SearchTickers { .. } => Some(CancelScope::Search),
            Effect::FetchQuotes { scope, .. } => Some(scope.cancel_scope()),
            _ => None,
        }
    }
}
