//! Ticker models for symbol lookup and the persisted watchlist.

use serde::{Deserialize, Serialize};

/// A tradable symbol plus optional display names, as returned by ticker search.
///
/// Equality is structural over every field. Watchlist membership and
/// de-duplication key on [`symbol`](Self::symbol) alone, see
/// [`same_symbol`](Self::same_symbol).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticker {
    /// Symbol/ticker (e.g., "AAPL", "SHOP.TO"), compared case-sensitively
    pub symbol: String,

    /// Short display name (e.g., "Apple Inc.")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortname: Option<String>,

    /// Long display name (e.g., "Apple Inc.")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longname: Option<String>,

    /// Quote type (e.g., "EQUITY", "ETF", "MUTUALFUND")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quote_type: Option<String>,

    /// Exchange code (e.g., "NMS")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exchange: Option<String>,
}

impl Ticker {
    /// Create a ticker with only a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            shortname: None,
            longname: None,
            quote_type: None,
            exchange: None,
        }
    }

    /// Set the short display name.
    pub fn with_shortname(mut self, shortname: impl Into<String>) -> Self {
        self.shortname = Some(shortname.into());
        self
    }

    /// Set the long display name.
    pub fn with_longname(mut self, longname: impl Into<String>) -> Self {
        self.longname = Some(longname.into());
        self
    }

    /// Set the quote type.
    pub fn with_quote_type(mut self, quote_type: impl Into<String>) -> Self {
        self.quote_type = Some(quote_type.into());
        self
    }

    /// Set the exchange.
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = Some(exchange.into());
        self
    }

    /// True when the quote type is "equity", ignoring case.
    pub fn is_equity(&self) -> bool {
        self.quote_type
            .as_deref()
            .is_some_and(|t| t.eq_ignore_ascii_case("equity"))
    }

    /// True when both tickers carry the same symbol.
    pub fn same_symbol(&self, other: &Ticker) -> bool {
        self.symbol == other.symbol
    }
}

/// Join symbols with `,` in list order, as expected by the quote endpoint.
pub fn join_symbols<'a>(tickers: impl IntoIterator<Item = &'a Ticker>) -> String {
    tickers
        .into_iter()
        .map(|t| t.symbol.as_str())
        .collect::<Vec<_>>()
        .join(",")
}
