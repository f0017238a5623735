//! Plain-text rendering of the watchlist screen.

use std::fmt::Write;

use chrono::NaiveDate;
use tickerwatch_core::constants::{ATTRIBUTION_TEXT, EMPTY_TICKERS_TEXT, TITLE_TEXT};
use tickerwatch_core::presentation::{
    search_rows, subtitle_text, watchlist_rows, RowKind, TickerRow,
};
use tickerwatch_core::AppState;

pub fn render(state: &AppState, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", TITLE_TEXT, subtitle_text(today));

    if state.is_searching() {
        let _ = writeln!(out, "Search: {}", state.search.query);
        let pending = state
            .search
            .session
            .as_ref()
            .is_some_and(|session| session.results.is_none());
        let rows = search_rows(state);

        if pending {
            let _ = writeln!(out, "  searching...");
        } else if rows.is_empty() {
            let _ = writeln!(out, "  no matches");
        }
        write_rows(&mut out, &rows);
    } else {
        let rows = watchlist_rows(state);
        if rows.is_empty() {
            let _ = writeln!(out, "  {}", EMPTY_TICKERS_TEXT);
        }
        write_rows(&mut out, &rows);
    }

    let _ = write!(out, "{}", ATTRIBUTION_TEXT);
    out
}

fn write_rows(out: &mut String, rows: &[TickerRow]) {
    for (index, row) in rows.iter().enumerate() {
        let _ = writeln!(out, "{}", format_row(index + 1, row));
    }
}

fn format_row(number: usize, row: &TickerRow) -> String {
    let marker = match row.kind {
        RowKind::Main => "",
        RowKind::Search { is_saved: true } => "[x] ",
        RowKind::Search { is_saved: false } => "[ ] ",
    };
    let (price, change, direction) = row
        .price
        .as_ref()
        .map(|p| {
            let direction = if p.is_negative() { "v" } else { "^" };
            (p.price.as_str(), p.change.as_str(), direction)
        })
        .unwrap_or(("", "", ""));

    format!(
        "{:>3}. {}{:<8} {:<28} {:>10} {:>8} {}",
        number,
        marker,
        row.symbol,
        row.name.as_deref().unwrap_or(""),
        price,
        change,
        direction
    )
    .trim_end()
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tickerwatch_core::quotes::index_quotes;
    use tickerwatch_core::search::SearchSession;
    use tickerwatch_core::{Quote, Ticker};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    #[test]
    fn test_empty_watchlist() {
        let text = render(&AppState::default(), today());
        assert_eq!(
            text,
            "Stocks  7 Mar\n  Search and add a symbol to see a stock quotes\nPowered by Yahoo! finance API"
        );
    }

    #[test]
    fn test_watchlist_with_quotes() {
        let mut state = AppState::default();
        state.watchlist.tickers = vec![Ticker::new("GOOGL").with_shortname("Alphabet Inc.")];
        state.watchlist.quotes = Some(index_quotes(vec![Quote::new("GOOGL")
            .with_price(dec!(130.5))
            .with_change(dec!(-1.2))]));

        let text = render(&state, today());
        let line = text.lines().nth(1).unwrap();

        assert!(line.starts_with("  1. GOOGL"));
        assert!(line.contains("Alphabet Inc."));
        assert!(line.ends_with("130.5     -1.2 v"));
    }

    #[test]
    fn test_rising_quote_points_up() {
        let mut state = AppState::default();
        state.watchlist.tickers = vec![Ticker::new("TSLA")];
        state.watchlist.quotes = Some(index_quotes(vec![Quote::new("TSLA")
            .with_price(dec!(242))
            .with_change(dec!(2.0))]));

        let text = render(&state, today());
        assert!(text.lines().nth(1).unwrap().ends_with("242       +2 ^"));
    }

    #[test]
    fn test_search_results_show_saved_marker() {
        let mut state = AppState::default();
        state.watchlist.tickers = vec![Ticker::new("TSLA")];
        state.search.query = "T".into();
        state.search.session = Some(SearchSession {
            results: Some(vec![Ticker::new("TSLA"), Ticker::new("TM")]),
            quotes: None,
        });

        let text = render(&state, today());

        assert!(text.contains("Search: T"));
        assert!(text.contains("  1. [x] TSLA"));
        assert!(text.contains("  2. [ ] TM"));
    }

    #[test]
    fn test_pending_and_empty_search() {
        let mut state = AppState::default();
        state.search.query = "ZZZ".into();
        state.search.session = Some(SearchSession::default());
        assert!(render(&state, today()).contains("searching..."));

        state.search.session = Some(SearchSession {
            results: Some(Vec::new()),
            quotes: None,
        });
        assert!(render(&state, today()).contains("no matches"));
    }
}
