//! Sentiment scoring and daily aggregation.

pub mod aggregate;
pub mod lexicon;
pub mod scorer;

pub use aggregate::{aggregate_daily, score_records};
pub use scorer::SentimentScorer;
