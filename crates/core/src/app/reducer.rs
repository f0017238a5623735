use log::{debug, info, warn};
use tickerwatch_market_data::Ticker;

use super::AppState;
use crate::effects::Effect;
use crate::search::{self, SearchAction};
use crate::storage::StorageError;
use crate::watchlist::{self, WatchlistAction};

#[derive(Debug)]
pub enum AppAction {
    DidFinishLaunching,
    SavedTickersLoaded(Result<Vec<Ticker>, StorageError>),
    Watchlist(WatchlistAction),
    Search(SearchAction),
}

impl AppAction {
    /// A successful load replaces the list without writing it back.
    fn skips_save(&self) -> bool {
        matches!(self, AppAction::SavedTickersLoaded(Ok(_)))
    }
}

/// Root reducer. Any action that leaves the watchlist different from how
/// it found it is followed by a quote refresh and, except for a successful
/// load, a save.
pub fn reduce(state: &mut AppState, action: AppAction) -> Vec<Effect> {
    let before = state.watchlist.tickers.clone();
    let skips_save = action.skips_save();

    let mut effects = match action {
        AppAction::DidFinishLaunching => vec![Effect::LoadSavedTickers],

        AppAction::SavedTickersLoaded(Ok(tickers)) => {
            info!("Loaded {} saved ticker(s)", tickers.len());
            state.watchlist.tickers = tickers;
            Vec::new()
        }

        AppAction::SavedTickersLoaded(Err(StorageError::NotFound(name))) => {
            debug!("No saved watchlist yet ({})", name);
            Vec::new()
        }

        AppAction::SavedTickersLoaded(Err(e)) => {
            warn!("Failed to load saved watchlist: {}", e);
            Vec::new()
        }

        AppAction::Watchlist(action) => watchlist::reduce(&mut state.watchlist, action),

        AppAction::Search(action) => {
            search::reduce(&mut state.search, &mut state.watchlist.tickers, action)
        }
    };

    if state.watchlist.tickers != before {
        effects.extend(watchlist::reduce(
            &mut state.watchlist,
            WatchlistAction::FetchQuotesForTickers,
        ));
        if !skips_save {
            effects.push(Effect::SaveTickers(state.watchlist.tickers.clone()));
        }
    }

    effects
}
