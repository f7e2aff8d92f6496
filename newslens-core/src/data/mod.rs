//! Market data boundary — provider trait, Yahoo Finance, fetch orchestration.

pub mod circuit_breaker;
pub mod fetch;
pub mod provider;
pub mod yahoo;

pub use circuit_breaker::CircuitBreaker;
pub use fetch::{fetch_universe, FetchSummary, SymbolFetch};
pub use provider::{DataError, FetchProgress, MarketDataProvider, StdoutProgress};
pub use yahoo::YahooProvider;
