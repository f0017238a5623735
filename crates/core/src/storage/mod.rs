//! Watchlist persistence.
//!
//! - [`FileStore`] - raw byte load/save by logical file name
//! - [`DocumentFileStore`] - `<root>/<name>.json` files on disk
//! - [`InMemoryFileStore`] - shared in-memory map for previews and tests
//! - [`FileClient`] - JSON encoding on top of a store, plus the
//!   `saved-tickers` helpers
//! - [`write_actor`] - single writer task that applies saves in order

mod client;
mod file_store;
pub mod write_actor;

pub use client::FileClient;
pub use file_store::{DocumentFileStore, FileStore, InMemoryFileStore};

use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode file contents: {0}")]
    Decode(#[from] serde_json::Error),
}
