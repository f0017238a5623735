//! Quote API trait definition.

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{Quote, Ticker};

/// Read-only operations against the quote API.
///
/// Coordinators only see `Arc<dyn QuoteApi>`, so the live client can be
/// swapped for [`MockQuoteApi`](crate::MockQuoteApi) in previews and tests.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickerwatch_market_data::{ApiError, Quote, QuoteApi, Ticker};
///
/// struct FixedApi;
///
/// #[async_trait]
/// impl QuoteApi for FixedApi {
///     async fn search_tickers(&self, _query: &str, _equity_only: bool) -> Result<Vec<Ticker>, ApiError> {
///         Ok(vec![Ticker::new("AAPL")])
///     }
///
///     async fn fetch_quotes(&self, _symbols: &str) -> Result<Vec<Quote>, ApiError> {
///         Ok(vec![Quote::new("AAPL")])
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteApi: Send + Sync {
    /// Search for tickers matching the query.
    ///
    /// # Arguments
    ///
    /// * `query` - Free text (e.g., "GOOG", "Alphabet")
    /// * `equity_only` - Keep only results whose quote type is "equity" (any case)
    ///
    /// An empty result set is `Ok(vec![])`, not an error.
    async fn search_tickers(&self, query: &str, equity_only: bool)
        -> Result<Vec<Ticker>, ApiError>;

    /// Fetch quotes for a comma-separated symbol list (e.g., "AAPL,TSLA").
    async fn fetch_quotes(&self, symbols: &str) -> Result<Vec<Quote>, ApiError>;
}
