//! Root coordinator: owns the watchlist and search coordinators, loads the
//! persisted list on launch, and reacts to watchlist changes.

mod reducer;
mod state;

pub use reducer::{reduce, AppAction};
pub use state::AppState;
