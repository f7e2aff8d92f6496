//! NewsLens Core — sentiment, indicators, alignment, and correlation statistics.
//!
//! This crate contains the heart of the analysis pipeline:
//! - Domain types (headlines, price bars, sentiment and return series)
//! - Lexicon-based sentiment scoring and daily per-symbol aggregation
//! - News CSV ingestion with coerced date parsing
//! - Technical indicator kernels (SMA, EMA, RSI, MACD) over closing prices
//! - Date alignment of sentiment with returns (inner join)
//! - Pearson correlation with two-sided p-values and cross-symbol matrices
//! - Market data provider trait, Yahoo Finance implementation, circuit breaker

pub mod align;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod news;
pub mod returns;
pub mod sentiment;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types that cross the rayon compute stage are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::PriceBar>();
        require_sync::<domain::PriceBar>();
        require_send::<domain::HeadlineRecord>();
        require_sync::<domain::HeadlineRecord>();
        require_send::<domain::DailySentiment>();
        require_sync::<domain::DailySentiment>();
        require_send::<domain::ReturnSeries>();
        require_sync::<domain::ReturnSeries>();
        require_send::<domain::AlignedSample>();
        require_sync::<domain::AlignedSample>();
        require_send::<indicators::IndicatorSeries>();
        require_sync::<indicators::IndicatorSeries>();
        require_send::<stats::CorrelationResult>();
        require_sync::<stats::CorrelationResult>();
        require_send::<stats::CorrelationMatrix>();
        require_sync::<stats::CorrelationMatrix>();
        require_send::<sentiment::SentimentScorer>();
        require_sync::<sentiment::SentimentScorer>();
        require_send::<data::DataError>();
        require_sync::<data::DataError>();
    }
}
