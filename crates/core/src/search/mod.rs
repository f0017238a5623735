//! Search coordinator: the transient query, its results, and their quotes.

mod reducer;
mod state;

pub use reducer::{reduce, toggle_ticker, SearchAction};
pub use state::{SearchSession, SearchState};
