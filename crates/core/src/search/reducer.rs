use log::{debug, warn};
use tickerwatch_market_data::{models::join_symbols, ApiError, Quote, Ticker};

use super::{SearchSession, SearchState};
use crate::effects::{CancelScope, Effect, QuoteScope};
use crate::quotes::index_quotes;

#[derive(Debug)]
pub enum SearchAction {
    QueryChanged(String),
    /// Outcome of the debounced search, tagged with the query it ran for.
    SearchResponse {
        query: String,
        result: Result<Vec<Ticker>, ApiError>,
    },
    QuotesResponse(Result<Vec<Quote>, ApiError>),
    ToggleTicker(Ticker),
}

/// Reduce a search action. `watchlist` is the shared ticker list, handed
/// in by the parent; toggling edits it in place.
pub fn reduce(
    state: &mut SearchState,
    watchlist: &mut Vec<Ticker>,
    action: SearchAction,
) -> Vec<Effect> {
    match action {
        SearchAction::QueryChanged(query) => {
            state.query = query;

            if state.query.is_empty() {
                state.session = None;
                return vec![
                    Effect::Cancel(CancelScope::Search),
                    Effect::Cancel(CancelScope::SearchQuotes),
                ];
            }

            state.session = Some(SearchSession::default());
            vec![
                Effect::Cancel(CancelScope::SearchQuotes),
                Effect::SearchTickers {
                    query: state.query.clone(),
                },
            ]
        }

        SearchAction::SearchResponse { query, result } => {
            if query != state.query {
                debug!("Dropping search response for stale query '{}'", query);
                return Vec::new();
            }
            let Some(session) = state.session.as_mut() else {
                debug!("Dropping search response without an active search");
                return Vec::new();
            };

            let results = result.unwrap_or_else(|e| {
                warn!("Ticker search for '{}' failed: {}", query, e);
                Vec::new()
            });

            if session.results.as_ref() == Some(&results) {
                return Vec::new();
            }
            session.results = Some(results);
            fetch_quotes_for_results(session)
        }

        SearchAction::QuotesResponse(result) => {
            let Some(session) = state.session.as_mut() else {
                debug!("Dropping search quotes without an active search");
                return Vec::new();
            };
            if session.results.is_none() {
                debug!("Dropping search quotes for a superseded query");
                return Vec::new();
            }

            session.quotes = Some(match result {
                Ok(quotes) => index_quotes(quotes),
                Err(e) => {
                    warn!("Search result quote fetch failed: {}", e);
                    Default::default()
                }
            });
            Vec::new()
        }

        SearchAction::ToggleTicker(ticker) => {
            if state.session.is_none() {
                debug!("Dropping toggle of {} without an active search", ticker.symbol);
                return Vec::new();
            }
            toggle_ticker(watchlist, ticker);
            Vec::new()
        }
    }
}

fn fetch_quotes_for_results(session: &SearchSession) -> Vec<Effect> {
    match session.results.as_deref() {
        Some(results) if !results.is_empty() => vec![Effect::FetchQuotes {
            scope: QuoteScope::SearchResults,
            symbols: join_symbols(results),
        }],
        _ => Vec::new(),
    }
}

/// Remove the first ticker sharing the symbol, or append the ticker.
pub fn toggle_ticker(watchlist: &mut Vec<Ticker>, ticker: Ticker) {
    match watchlist.iter().position(|t| t.same_symbol(&ticker)) {
        Some(index) => {
            watchlist.remove(index);
        }
        None => watchlist.push(ticker),
    }
}
