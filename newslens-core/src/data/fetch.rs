//! Multi-symbol fetch orchestration.
//!
//! Fetches symbols sequentially (rate limits make parallel fetches
//! counterproductive) with per-symbol failure isolation: one symbol's error
//! is recorded and the batch continues. A tripped circuit breaker is the
//! only early exit — the remaining symbols are marked blocked rather than
//! hammered.

use super::provider::{DataError, FetchProgress, MarketDataProvider};
use crate::domain::PriceBar;
use chrono::NaiveDate;

/// Outcome for one symbol: bars, or the error that prevented them.
#[derive(Debug)]
pub struct SymbolFetch {
    pub symbol: String,
    pub result: Result<Vec<PriceBar>, DataError>,
}

/// Summary of a batch fetch. Symbol order matches the request order.
#[derive(Debug)]
pub struct FetchSummary {
    pub fetches: Vec<SymbolFetch>,
}

impl FetchSummary {
    pub fn succeeded(&self) -> usize {
        self.fetches.iter().filter(|f| f.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.fetches.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Fetch price history for every symbol in the universe.
pub fn fetch_universe(
    provider: &dyn MarketDataProvider,
    symbols: &[String],
    start: NaiveDate,
    end: NaiveDate,
    progress: Option<&dyn FetchProgress>,
) -> FetchSummary {
    let total = symbols.len();
    let mut fetches = Vec::with_capacity(total);
    let mut succeeded = 0;
    let mut failed = 0;

    for (i, symbol) in symbols.iter().enumerate() {
        if let Some(p) = progress {
            p.on_start(symbol, i, total);
        }

        let result = provider.fetch(symbol, start, end);
        if let Some(p) = progress {
            p.on_complete(symbol, i, total, &result.as_ref().map(Vec::len).map_err(clone_err));
        }

        match &result {
            Ok(_) => succeeded += 1,
            Err(_) => failed += 1,
        }
        fetches.push(SymbolFetch {
            symbol: symbol.clone(),
            result,
        });

        // Breaker tripped: mark the rest blocked instead of retrying each.
        if !provider.is_available() {
            for sym in &symbols[(i + 1)..] {
                failed += 1;
                fetches.push(SymbolFetch {
                    symbol: sym.clone(),
                    result: Err(DataError::CircuitBreakerTripped),
                });
            }
            break;
        }
    }

    if let Some(p) = progress {
        p.on_batch_complete(succeeded, failed, total);
    }

    FetchSummary { fetches }
}

// DataError carries io-flavored sources and is not Clone; progress callbacks
// only need the display form.
fn clone_err(e: &DataError) -> DataError {
    DataError::Other(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_bars;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FlakyProvider {
        calls: AtomicUsize,
        fail_symbol: &'static str,
        available_after: Option<usize>,
    }

    impl MarketDataProvider for FlakyProvider {
        fn name(&self) -> &str {
            "flaky"
        }

        fn fetch(
            &self,
            symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<PriceBar>, DataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if symbol == self.fail_symbol {
                Err(DataError::NetworkUnreachable("connection reset".into()))
            } else {
                Ok(make_bars(&[100.0, 101.0, 102.0]))
            }
        }

        fn is_available(&self) -> bool {
            match self.available_after {
                Some(limit) => self.calls.load(Ordering::SeqCst) < limit,
                None => true,
            }
        }
    }

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn symbols(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn one_failure_does_not_abort_the_batch() {
        let provider = FlakyProvider {
            calls: AtomicUsize::new(0),
            fail_symbol: "MSFT",
            available_after: None,
        };
        let summary = fetch_universe(
            &provider,
            &symbols(&["AAPL", "MSFT", "TSLA"]),
            d("2024-01-01"),
            d("2024-02-01"),
            None,
        );

        assert_eq!(summary.fetches.len(), 3);
        assert_eq!(summary.succeeded(), 2);
        assert_eq!(summary.failed(), 1);
        assert!(summary.fetches[0].result.is_ok());
        assert!(summary.fetches[1].result.is_err());
        assert!(summary.fetches[2].result.is_ok());
    }

    #[test]
    fn breaker_trip_marks_remaining_blocked() {
        // Provider becomes unavailable after the first call.
        let provider = FlakyProvider {
            calls: AtomicUsize::new(0),
            fail_symbol: "",
            available_after: Some(1),
        };
        let summary = fetch_universe(
            &provider,
            &symbols(&["AAPL", "MSFT", "TSLA"]),
            d("2024-01-01"),
            d("2024-02-01"),
            None,
        );

        assert_eq!(summary.fetches.len(), 3);
        assert_eq!(summary.succeeded(), 1);
        // Only one actual network call was made.
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(matches!(
            summary.fetches[1].result,
            Err(DataError::CircuitBreakerTripped)
        ));
        assert!(matches!(
            summary.fetches[2].result,
            Err(DataError::CircuitBreakerTripped)
        ));
    }

    #[test]
    fn order_matches_request_order() {
        let provider = FlakyProvider {
            calls: AtomicUsize::new(0),
            fail_symbol: "",
            available_after: None,
        };
        let requested = symbols(&["TSLA", "AAPL", "MSFT"]);
        let summary = fetch_universe(&provider, &requested, d("2024-01-01"), d("2024-02-01"), None);
        let got: Vec<&str> = summary.fetches.iter().map(|f| f.symbol.as_str()).collect();
        assert_eq!(got, ["TSLA", "AAPL", "MSFT"]);
    }
}
