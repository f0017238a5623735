use std::sync::Arc;
use std::time::Duration;

use tickerwatch_market_data::{MockQuoteApi, QuoteApi};

use super::{RecordingUrlOpener, UrlOpener};
use crate::constants::DEFAULT_SEARCH_DEBOUNCE;
use crate::storage::{FileClient, InMemoryFileStore};

/// Services the runtime executes effects against.
#[derive(Clone)]
pub struct Environment {
    pub api: Arc<dyn QuoteApi>,
    pub files: FileClient,
    pub opener: Arc<dyn UrlOpener>,
    /// Quiet period before a search is issued.
    pub debounce: Duration,
}

impl Environment {
    pub fn new(api: Arc<dyn QuoteApi>, files: FileClient, opener: Arc<dyn UrlOpener>) -> Self {
        Self {
            api,
            files,
            opener,
            debounce: DEFAULT_SEARCH_DEBOUNCE,
        }
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Canned quotes, in-memory files, and an opener that only records.
    pub fn preview() -> Self {
        Self::new(
            Arc::new(MockQuoteApi::preview()),
            FileClient::new(Arc::new(InMemoryFileStore::new())),
            Arc::new(RecordingUrlOpener::new()),
        )
    }
}
