//! Symbol-keyed quote lookups.

use std::collections::HashMap;

use tickerwatch_market_data::Quote;

/// Latest quotes keyed by symbol.
pub type QuoteMap = HashMap<String, Quote>;

/// Build a fresh map from a fetch result; a later quote for the same
/// symbol replaces an earlier one.
pub fn index_quotes(quotes: Vec<Quote>) -> QuoteMap {
    quotes
        .into_iter()
        .map(|quote| (quote.symbol.clone(), quote))
        .collect()
}
