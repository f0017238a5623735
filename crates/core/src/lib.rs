//! Tickerwatch Core - watchlist state coordination.
//!
//! Unidirectional state management for a stock watchlist: a root reducer
//! composes a watchlist coordinator and a search coordinator. Reducers are
//! pure functions returning [`effects::Effect`] values; the [`store`] runtime
//! executes those effects (network, file persistence, URL opening) and feeds
//! their outcomes back as actions, one at a time.

pub mod app;
pub mod constants;
pub mod effects;
pub mod errors;
pub mod presentation;
pub mod quotes;
pub mod search;
pub mod storage;
pub mod store;
pub mod watchlist;

pub use app::{AppAction, AppState};
pub use effects::{CancelScope, Effect, QuoteScope};
pub use errors::{Error, Result};
pub use quotes::QuoteMap;
pub use store::{Environment, Store, StoreHandle};

pub use tickerwatch_market_data::{ApiError, Quote, QuoteApi, Ticker};
