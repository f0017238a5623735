use crate::search::SearchState;
use crate::watchlist::WatchlistState;

/// Whole-application state. `watchlist.tickers` is the single watchlist
/// both coordinators read and edit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    pub watchlist: WatchlistState,
    pub search: SearchState,
}

impl AppState {
    pub fn is_searching(&self) -> bool {
        self.search.is_searching()
    }
}
