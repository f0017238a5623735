use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::date_format;

/// Market data quote as returned by the batch quote endpoint.
///
/// Quotes are never persisted; they are rebuilt on every fetch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    /// Symbol the quote belongs to
    pub symbol: String,

    /// Short display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Quote currency (e.g., "USD")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Last regular-session price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_market_price: Option<Decimal>,

    /// Absolute change against the previous close
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_market_change: Option<Decimal>,

    /// Percent change against the previous close
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_market_change_percent: Option<Decimal>,

    /// Unix timestamp (seconds) of the regular-session price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_market_time: Option<i64>,

    #[serde(
        default,
        with = "date_format::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub dividend_date: Option<NaiveDate>,

    #[serde(
        default,
        with = "date_format::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub earnings_date: Option<NaiveDate>,
}

impl Quote {
    /// Create a quote with only a symbol.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            short_name: None,
            currency: None,
            regular_market_price: None,
            regular_market_change: None,
            regular_market_change_percent: None,
            regular_market_time: None,
            dividend_date: None,
            earnings_date: None,
        }
    }

    /// Set the regular market price.
    pub fn with_price(mut self, price: Decimal) -> Self {
        self.regular_market_price = Some(price);
        self
    }

    /// Set the regular market change.
    pub fn with_change(mut self, change: Decimal) -> Self {
        self.regular_market_change = Some(change);
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Regular market time as a UTC timestamp, if present and valid.
    pub fn market_time(&self) -> Option<DateTime<Utc>> {
        self.regular_market_time
            .and_then(|ts| Utc.timestamp_opt(ts, 0).single())
    }
}
