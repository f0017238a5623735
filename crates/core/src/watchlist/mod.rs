//! Watchlist coordinator: the tracked tickers and their latest quotes.

mod reducer;
mod state;

pub use reducer::{reduce, remove_at_offsets, WatchlistAction};
pub use state::WatchlistState;
