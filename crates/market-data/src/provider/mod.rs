//! Quote API abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteApi` trait the coordinators depend on
//! - `YahooQuoteApi`, the live HTTP client
//! - `MockQuoteApi`, canned responses for previews and tests

mod traits;

pub mod mock;
pub mod yahoo;

pub use traits::QuoteApi;
