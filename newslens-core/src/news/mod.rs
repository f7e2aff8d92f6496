//! News dataset ingestion and descriptive statistics.

pub mod loader;
pub mod stats;

pub use loader::{load_headlines, read_headlines, LoadReport, NewsError};
pub use stats::{articles_per_day, publisher_counts, HeadlineStats};
