//! Domain types — headlines, price bars, derived series.

pub mod bar;
pub mod headline;
pub mod series;

pub use bar::PriceBar;
pub use headline::{parse_headline_date, HeadlineRecord, SentimentRecord};
pub use series::{AlignedRow, AlignedSample, DailySentiment, ReturnPoint, ReturnSeries};
