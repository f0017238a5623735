//! Display-ready values derived from [`AppState`](crate::AppState).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tickerwatch_market_data::{Quote, Ticker};

use crate::app::AppState;
use crate::quotes::QuoteMap;

/// Price and signed change, both already formatted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PriceChange {
    pub price: String,
    pub change: String,
}

impl PriceChange {
    /// Both texts are required; a quote missing either has no price line.
    pub fn from_quote(quote: &Quote) -> Option<Self> {
        Some(Self {
            price: price_text(quote)?,
            change: change_text(quote)?,
        })
    }

    pub fn is_negative(&self) -> bool {
        self.change.starts_with('-')
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowKind {
    Main,
    Search { is_saved: bool },
}

/// One line of a ticker list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickerRow {
    pub symbol: String,
    pub name: Option<String>,
    pub price: Option<PriceChange>,
    pub kind: RowKind,
}

/// At most two fraction digits, no trailing zeros.
pub fn format_decimal(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}

pub fn price_text(quote: &Quote) -> Option<String> {
    quote.regular_market_price.map(format_decimal)
}

/// Change with an explicit sign: "+2", "-1.2".
pub fn change_text(quote: &Quote) -> Option<String> {
    let text = format_decimal(quote.regular_market_change?);
    if text.starts_with('-') {
        Some(text)
    } else {
        Some(format!("+{}", text))
    }
}

/// Header subtitle, e.g. "7 Mar".
pub fn subtitle_text(date: NaiveDate) -> String {
    date.format("%-d %b").to_string()
}

fn row(ticker: &Ticker, quotes: Option<&QuoteMap>, kind: RowKind) -> TickerRow {
    TickerRow {
        symbol: ticker.symbol.clone(),
        name: ticker.shortname.clone(),
        price: quotes
            .and_then(|quotes| quotes.get(&ticker.symbol))
            .and_then(PriceChange::from_quote),
        kind,
    }
}

/// Watchlist rows in list order.
pub fn watchlist_rows(state: &AppState) -> Vec<TickerRow> {
    let quotes = state.watchlist.quotes.as_ref();
    state
        .watchlist
        .tickers
        .iter()
        .map(|ticker| row(ticker, quotes, RowKind::Main))
        .collect()
}

/// Search result rows, flagged with whether each is already tracked.
pub fn search_rows(state: &AppState) -> Vec<TickerRow> {
    let quotes = state
        .search
        .session
        .as_ref()
        .and_then(|session| session.quotes.as_ref());

    state
        .search
        .results()
        .iter()
        .map(|ticker| {
            let is_saved = state.watchlist.contains_symbol(&ticker.symbol);
            row(ticker, quotes, RowKind::Search { is_saved })
        })
        .collect()
}
