//! Market data models
//!
//! - `ticker` - Searchable/persistable ticker identity (Ticker)
//! - `quote` - Quote data returned by the batch quote endpoint (Quote)
//! - `error_response` - Structured API error body (ErrorResponse)
//! - `date_format` - Fixed `yyyy-MM-dd` calendar date serde helpers

pub mod date_format;
mod error_response;
mod quote;
mod ticker;

pub use error_response::ErrorResponse;
pub use quote::Quote;
pub use ticker::{join_symbols, Ticker};
