use std::time::Duration;

/// Logical file name of the persisted watchlist.
pub const SAVED_TICKERS_FILE: &str = "saved-tickers";

/// Extension appended to logical file names by the document file store.
pub const FILE_EXTENSION: &str = "json";

/// Quiet period after the last query change before a search is issued.
pub const DEFAULT_SEARCH_DEBOUNCE: Duration = Duration::from_millis(250);

/// Site opened by the attribution link.
pub const EXTERNAL_SITE_URL: &str = "https://finance.yahoo.com";

pub const TITLE_TEXT: &str = "Stocks";
pub const EMPTY_TICKERS_TEXT: &str = "Search and add a symbol to see a stock quotes";
pub const ATTRIBUTION_TEXT: &str = "Powered by Yahoo! finance API";
