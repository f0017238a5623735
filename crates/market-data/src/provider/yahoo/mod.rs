//! Yahoo Finance quote API client.
//!
//! Two read-only GET operations against a Yahoo-finance style endpoint:
//! - `/v1/finance/search` for ticker lookup
//! - `/v7/finance/quote` for batch quotes
//!
//! Responses in the 2xx and 4xx ranges are decoded so that structured error
//! bodies on 4xx can be surfaced; any other status fails immediately.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::errors::ApiError;
use crate::models::{Quote, Ticker};
use crate::provider::QuoteApi;

use models::ApiEnvelope;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

const SEARCH_PATH: &str = "/v1/finance/search";
const QUOTE_PATH: &str = "/v7/finance/quote";
const SEARCH_LANG: &str = "en-US";
const SEARCH_QUOTES_COUNT: &str = "20";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

// ============================================================================
// Yahoo Quote API
// ============================================================================

/// Live quote API client backed by `reqwest`.
pub struct YahooQuoteApi {
    client: Client,
    base_url: String,
}

impl YahooQuoteApi {
    /// Create a client against [`DEFAULT_BASE_URL`].
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, DEFAULT_TIMEOUT)
    }

    /// Create a client against a custom host (used by tests and staging).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL for a ticker search.
    pub fn search_url(&self, query: &str) -> Result<Url, ApiError> {
        self.endpoint(
            SEARCH_PATH,
            &[
                ("lang", SEARCH_LANG),
                ("quotesCount", SEARCH_QUOTES_COUNT),
                ("q", query),
            ],
        )
    }

    /// URL for a batch quote fetch.
    pub fn quotes_url(&self, symbols: &str) -> Result<Url, ApiError> {
        self.endpoint(QUOTE_PATH, &[("symbols", symbols)])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}{}", self.base_url.trim_end_matches('/'), path))?;
        url.query_pairs_mut().extend_pairs(params);
        Ok(url)
    }

    /// GET the URL and decode the envelope's `data` array.
    async fn fetch<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, ApiError> {
        debug!("Quote API request: {}", url.path());

        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await?;

        let status_code = validate_status(response.status().as_u16())?;

        let body = response.bytes().await.map_err(|e| {
            warn!("Failed to read quote API response body: {}", e);
            ApiError::InvalidResponseType
        })?;

        decode_envelope(status_code, &body)
    }
}

impl Default for YahooQuoteApi {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// QuoteApi Implementation
// ============================================================================

#[async_trait]
impl QuoteApi for YahooQuoteApi {
    async fn search_tickers(
        &self,
        query: &str,
        equity_only: bool,
    ) -> Result<Vec<Ticker>, ApiError> {
        debug!("Searching tickers for '{}'", query);

        let url = self.search_url(query)?;
        let tickers: Vec<Ticker> = self.fetch(url).await.inspect_err(|e| {
            warn!("Ticker search for '{}' failed: {}", query, e);
        })?;

        Ok(if equity_only {
            filter_equities(tickers)
        } else {
            tickers
        })
    }

    async fn fetch_quotes(&self, symbols: &str) -> Result<Vec<Quote>, ApiError> {
        debug!("Fetching quotes for {}", symbols);

        let url = self.quotes_url(symbols)?;
        self.fetch(url).await.inspect_err(|e| {
            warn!("Quote fetch for {} failed: {}", symbols, e);
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Accept 2xx and 4xx for decoding; anything else is a bare status failure.
fn validate_status(status_code: u16) -> Result<u16, ApiError> {
    match status_code {
        200..=299 | 400..=499 => Ok(status_code),
        _ => Err(ApiError::status(status_code)),
    }
}

/// Decode an envelope; a present `error` object wins over any `data`.
fn decode_envelope<T: DeserializeOwned>(status_code: u16, body: &[u8]) -> Result<Vec<T>, ApiError> {
    let envelope: ApiEnvelope<T> = serde_json::from_slice(body)?;

    if let Some(error) = envelope.error {
        return Err(ApiError::HttpStatusFailed {
            status_code,
            error: Some(error),
        });
    }

    Ok(envelope.data.unwrap_or_default())
}

/// Keep tickers whose quote type is "equity", ignoring case.
pub fn filter_equities(tickers: Vec<Ticker>) -> Vec<Ticker> {
    tickers.into_iter().filter(Ticker::is_equity).collect()
}

// ============================================================================
// Tests
// ============================================================================
