//! Canned quote API for previews and tests.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rust_decimal::Decimal;

use crate::errors::ApiError;
use crate::models::{Quote, Ticker};
use crate::provider::yahoo::filter_equities;
use crate::provider::QuoteApi;

#[derive(Default)]
struct MockState {
    tickers: Vec<Ticker>,
    quotes: Vec<Quote>,
    failure_status: Option<u16>,
    search_calls: Vec<(String, bool)>,
    quote_calls: Vec<String>,
}

/// Quote API returning canned data and recording every call.
///
/// Search returns the configured tickers regardless of the query (with the
/// equity filter applied as the live client does). Quote fetches return the
/// configured quotes whose symbol was requested, in request order.
#[derive(Clone, Default)]
pub struct MockQuoteApi {
    state: Arc<Mutex<MockState>>,
}

impl MockQuoteApi {
    /// Empty mock: every search and fetch succeeds with no data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Offline preview data (AAPL, GOOGL, TSLA).
    pub fn preview() -> Self {
        let tickers = [
            ("AAPL", "Apple Inc.", "Apple Inc."),
            ("GOOGL", "Alphabet Inc.", "Alphabet Inc. Class A"),
            ("TSLA", "Tesla, Inc.", "Tesla, Inc."),
        ]
        .into_iter()
        .map(|(symbol, shortname, longname)| {
            Ticker::new(symbol)
                .with_shortname(shortname)
                .with_longname(longname)
                .with_quote_type("EQUITY")
                .with_exchange("NMS")
        })
        .collect();

        let quotes = [
            ("AAPL", Decimal::new(18984, 2), Decimal::new(123, 2)),
            ("GOOGL", Decimal::new(1305, 1), Decimal::new(-12, 1)),
            ("TSLA", Decimal::new(2420, 1), Decimal::new(20, 1)),
        ]
        .into_iter()
        .map(|(symbol, price, change)| {
            Quote::new(symbol)
                .with_price(price)
                .with_change(change)
                .with_currency("USD")
        })
        .collect();

        Self::new().with_tickers(tickers).with_quotes(quotes)
    }

    pub fn with_tickers(self, tickers: Vec<Ticker>) -> Self {
        self.lock().tickers = tickers;
        self
    }

    pub fn with_quotes(self, quotes: Vec<Quote>) -> Self {
        self.lock().quotes = quotes;
        self
    }

    /// Make every subsequent call fail with the given HTTP status,
    /// or succeed again with `None`.
    pub fn set_failure(&self, status_code: Option<u16>) {
        self.lock().failure_status = status_code;
    }

    /// Recorded `(query, equity_only)` pairs, oldest first.
    pub fn search_calls(&self) -> Vec<(String, bool)> {
        self.lock().search_calls.clone()
    }

    /// Recorded symbol lists, oldest first.
    pub fn quote_calls(&self) -> Vec<String> {
        self.lock().quote_calls.clone()
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl QuoteApi for MockQuoteApi {
    async fn search_tickers(
        &self,
        query: &str,
        equity_only: bool,
    ) -> Result<Vec<Ticker>, ApiError> {
        let mut state = self.lock();
        state.search_calls.push((query.to_string(), equity_only));

        if let Some(status_code) = state.failure_status {
            return Err(ApiError::status(status_code));
        }

        let tickers = state.tickers.clone();
        Ok(if equity_only {
            filter_equities(tickers)
        } else {
            tickers
        })
    }

    async fn fetch_quotes(&self, symbols: &str) -> Result<Vec<Quote>, ApiError> {
        let mut state = self.lock();
        state.quote_calls.push(symbols.to_string());

        if let Some(status_code) = state.failure_status {
            return Err(ApiError::status(status_code));
        }

        Ok(symbols
            .split(',')
            .filter_map(|symbol| state.quotes.iter().find(|q| q.symbol == symbol).cloned())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_preview_search_and_quotes() {
        let api = MockQuoteApi::preview();

        let tickers = api.search_tickers("anything", true).await.unwrap();
        let symbols: Vec<&str> = tickers.iter().map(|t| t.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOGL", "TSLA"]);
        assert_eq!(tickers[1].longname.as_deref(), Some("Alphabet Inc. Class A"));
        assert_eq!(tickers[1].exchange.as_deref(), Some("NMS"));

        let quotes = api.fetch_quotes("TSLA,GOOGL").await.unwrap();
        assert_eq!(quotes.len(), 2);
        assert_eq!(quotes[0].symbol, "TSLA");
        assert_eq!(quotes[1].regular_market_price, Some(dec!(130.5)));
    }

    #[tokio::test]
    async fn test_records_calls() {
        let api = MockQuoteApi::new();
        api.search_tickers("GOOG", true).await.unwrap();
        api.fetch_quotes("AAPL,TSLA").await.unwrap();

        assert_eq!(api.search_calls(), vec![("GOOG".to_string(), true)]);
        assert_eq!(api.quote_calls(), vec!["AAPL,TSLA".to_string()]);
    }

    #[tokio::test]
    async fn test_failure_mode() {
        let api = MockQuoteApi::preview();
        api.set_failure(Some(500));

        let error = api.fetch_quotes("AAPL").await.unwrap_err();
        assert_eq!(error.status_code(), Some(500));
        assert!(api.search_tickers("A", false).await.is_err());

        api.set_failure(None);
        assert!(api.fetch_quotes("AAPL").await.is_ok());
    }

    #[tokio::test]
    async fn test_equity_filter_applies() {
        let api = MockQuoteApi::new().with_tickers(vec![
            Ticker::new("SPY").with_quote_type("ETF"),
            Ticker::new("MSFT").with_quote_type("EQUITY"),
        ]);
        assert_eq!(api.search_tickers("x", true).await.unwrap().len(), 1);
        assert_eq!(api.search_tickers("x", false).await.unwrap().len(), 2);
    }
}
