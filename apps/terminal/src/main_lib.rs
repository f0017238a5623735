use std::sync::Arc;

use tickerwatch_core::search::SearchAction;
use tickerwatch_core::storage::{DocumentFileStore, FileClient};
use tickerwatch_core::store::SystemUrlOpener;
use tickerwatch_core::watchlist::WatchlistAction;
use tickerwatch_core::{AppAction, AppState, Environment, QuoteApi};
use tickerwatch_market_data::{MockQuoteApi, YahooQuoteApi};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::commands::{Command, CommandError};
use crate::config::{ApiMode, Config};

/// Logs go to stderr so they never interleave with the rendered lists.
pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

pub fn build_environment(config: &Config) -> Environment {
    let api: Arc<dyn QuoteApi> = match config.api {
        ApiMode::Live => {
            let live = YahooQuoteApi::with_base_url(config.base_url.clone(), config.request_timeout);
            tracing::info!("Using quote API at {}", live.base_url());
            Arc::new(live)
        }
        ApiMode::Preview => {
            tracing::info!("Using preview quote data");
            Arc::new(MockQuoteApi::preview())
        }
    };

    let store = DocumentFileStore::new(config.data_dir.clone());
    tracing::info!("Watchlist directory: {}", store.root().display());
    let files = FileClient::new(Arc::new(store));

    Environment::new(api, files, Arc::new(SystemUrlOpener)).with_debounce(config.debounce)
}

/// Translate a store-bound command into an action. Row numbers are 1-based
/// and refer to the lists as currently rendered.
pub fn action_for(command: Command, state: &AppState) -> Result<AppAction, CommandError> {
    match command {
        Command::Search(query) => Ok(AppAction::Search(SearchAction::QueryChanged(query))),
        Command::Toggle(row) => {
            if !state.is_searching() {
                return Err(CommandError::NotSearching);
            }
            let ticker = state
                .search
                .results()
                .get(row.wrapping_sub(1))
                .cloned()
                .ok_or(CommandError::NoSuchRow(row))?;
            Ok(AppAction::Search(SearchAction::ToggleTicker(ticker)))
        }
        Command::Remove(rows) => Ok(AppAction::Watchlist(WatchlistAction::RemoveTickers(
            rows.into_iter().filter_map(|row| row.checked_sub(1)).collect(),
        ))),
        Command::Refresh => Ok(AppAction::Watchlist(
            WatchlistAction::FetchQuotesForTickers,
        )),
        Command::Open => Ok(AppAction::Watchlist(WatchlistAction::OpenExternalSite)),
        Command::Help | Command::Quit => Err(CommandError::NotAnAction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tickerwatch_core::search::SearchSession;
    use tickerwatch_core::Ticker;

    fn searching(results: Vec<Ticker>) -> AppState {
        let mut state = AppState::default();
        state.search.query = "T".into();
        state.search.session = Some(SearchSession {
            results: Some(results),
            quotes: None,
        });
        state
    }

    #[test]
    fn test_toggle_picks_rendered_row() {
        let state = searching(vec![Ticker::new("TSLA"), Ticker::new("TM")]);

        let action = action_for(Command::Toggle(2), &state).unwrap();

        match action {
            AppAction::Search(SearchAction::ToggleTicker(ticker)) => {
                assert_eq!(ticker.symbol, "TM")
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_toggle_out_of_range() {
        let state = searching(vec![Ticker::new("TSLA")]);
        assert!(matches!(
            action_for(Command::Toggle(3), &state),
            Err(CommandError::NoSuchRow(3))
        ));
        assert!(matches!(
            action_for(Command::Toggle(1), &AppState::default()),
            Err(CommandError::NotSearching)
        ));
    }

    #[test]
    fn test_remove_converts_to_offsets() {
        let action = action_for(Command::Remove(vec![1, 3]), &AppState::default()).unwrap();
        match action {
            AppAction::Watchlist(WatchlistAction::RemoveTickers(offsets)) => {
                assert_eq!(offsets, vec![0, 2])
            }
            other => panic!("unexpected action {:?}", other),
        }
    }
}
