use std::collections::BTreeSet;

use log::{debug, warn};
use tickerwatch_market_data::{models::join_symbols, ApiError, Quote, Ticker};

use super::WatchlistState;
use crate::constants::EXTERNAL_SITE_URL;
use crate::effects::{Effect, QuoteScope};
use crate::quotes::index_quotes;

#[derive(Debug)]
pub enum WatchlistAction {
    /// Refresh quotes for every tracked ticker.
    FetchQuotesForTickers,
    QuotesResponse(Result<Vec<Quote>, ApiError>),
    /// Remove the tickers at these positions (out-of-range positions are ignored).
    RemoveTickers(Vec<usize>),
    OpenExternalSite,
}

pub fn reduce(state: &mut WatchlistState, action: WatchlistAction) -> Vec<Effect> {
    match action {
        WatchlistAction::FetchQuotesForTickers => {
            if state.tickers.is_empty() {
                return Vec::new();
            }
            vec![Effect::FetchQuotes {
                scope: QuoteScope::Watchlist,
                symbols: join_symbols(&state.tickers),
            }]
        }

        WatchlistAction::QuotesResponse(Ok(quotes)) => {
            debug!("Watchlist received {} quote(s)", quotes.len());
            state.quotes = Some(index_quotes(quotes));
            Vec::new()
        }

        WatchlistAction::QuotesResponse(Err(e)) => {
            warn!("Watchlist quote refresh failed: {}", e);
            state.quotes = Some(Default::default());
            Vec::new()
        }

        WatchlistAction::RemoveTickers(offsets) => {
            remove_at_offsets(&mut state.tickers, &offsets);
            Vec::new()
        }

        WatchlistAction::OpenExternalSite => vec![Effect::OpenUrl(EXTERNAL_SITE_URL)],
    }
}

/// Remove the elements at the given offsets, all interpreted against the
/// list as it was before any removal.
pub fn remove_at_offsets(tickers: &mut Vec<Ticker>, offsets: &[usize]) {
    let offsets: BTreeSet<usize> = offsets.iter().copied().collect();
    let mut index = 0;
    tickers.retain(|_| {
        let keep = !offsets.contains(&index);
        index += 1;
        keep
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn tickers(symbols: &[&str]) -> Vec<Ticker> {
        symbols.iter().map(|s| Ticker::new(*s)).collect()
    }

    fn symbols(state: &WatchlistState) -> Vec<&str> {
        state.tickers.iter().map(|t| t.symbol.as_str()).collect()
    }

    #[test]
    fn test_fetch_quotes_joins_symbols_in_order() {
        let mut state = WatchlistState::new(tickers(&["TSLA", "AAPL", "GOOGL"]));
        let effects = reduce(&mut state, WatchlistAction::FetchQuotesForTickers);
        assert_eq!(
            effects,
            vec![Effect::FetchQuotes {
                scope: QuoteScope::Watchlist,
                symbols: "TSLA,AAPL,GOOGL".into(),
            }]
        );
    }

    #[test]
    fn test_fetch_quotes_noop_when_empty() {
        let mut state = WatchlistState::default();
        assert!(reduce(&mut state, WatchlistAction::FetchQuotesForTickers).is_empty());
    }

    #[test]
    fn test_quotes_response_replaces_map() {
        let mut state = WatchlistState::new(tickers(&["AAPL", "TSLA"]));
        reduce(
            &mut state,
            WatchlistAction::QuotesResponse(Ok(vec![Quote::new("AAPL").with_price(dec!(1))])),
        );
        reduce(
            &mut state,
            WatchlistAction::QuotesResponse(Ok(vec![Quote::new("TSLA").with_price(dec!(2))])),
        );

        assert!(state.quote_for("AAPL").is_none());
        assert_eq!(
            state.quote_for("TSLA").unwrap().regular_market_price,
            Some(dec!(2))
        );
    }

    #[test]
    fn test_failed_fetch_clears_quotes() {
        let mut state = WatchlistState::new(tickers(&["AAPL"]));
        reduce(
            &mut state,
            WatchlistAction::QuotesResponse(Ok(vec![Quote::new("AAPL")])),
        );
        reduce(
            &mut state,
            WatchlistAction::QuotesResponse(Err(ApiError::status(500))),
        );

        assert_eq!(state.quotes, Some(Default::default()));
    }

    #[test]
    fn test_remove_tickers() {
        let mut state = WatchlistState::new(tickers(&["A", "B", "C", "D"]));
        let effects = reduce(&mut state, WatchlistAction::RemoveTickers(vec![3, 1, 1, 9]));
        assert!(effects.is_empty());
        assert_eq!(symbols(&state), vec!["A", "C"]);
    }

    #[test]
    fn test_open_external_site() {
        let mut state = WatchlistState::new(tickers(&["A"]));
        let before = state.clone();
        let effects = reduce(&mut state, WatchlistAction::OpenExternalSite);
        assert_eq!(effects, vec![Effect::OpenUrl("https://finance.yahoo.com")]);
        assert_eq!(state, before);
    }

    #[test]
    fn test_contains_symbol() {
        let state = WatchlistState::new(tickers(&["AAPL"]));
        assert!(state.contains_symbol("AAPL"));
        assert!(!state.contains_symbol("aapl"));
    }
}
