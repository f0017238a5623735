//! Tickerwatch Market Data Crate
//!
//! This crate provides the quote API client used by the tickerwatch
//! watchlist: ticker search and batch quote fetching against a
//! Yahoo-finance style JSON endpoint.
//!
//! # Overview
//!
//! ```text
//! +------------------+      +------------------+
//! |   Coordinators   | ---> |  dyn QuoteApi    |
//! +------------------+      +------------------+
//!                              |           |
//!                              v           v
//!                  +---------------+   +---------------+
//!                  | YahooQuoteApi |   | MockQuoteApi  |
//!                  |   (reqwest)   |   |   (preview)   |
//!                  +---------------+   +---------------+
//! ```
//!
//! # Core Types
//!
//! - [`Ticker`] - A tradable symbol plus optional display names
//! - [`Quote`] - Point-in-time price/change data for a symbol
//! - [`ErrorResponse`] - Structured error body returned by the API
//! - [`ApiError`] - Error taxonomy for every API operation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::ApiError;
pub use models::{ErrorResponse, Quote, Ticker};
pub use provider::mock::MockQuoteApi;
pub use provider::yahoo::{YahooQuoteApi, DEFAULT_BASE_URL};
pub use provider::QuoteApi;
