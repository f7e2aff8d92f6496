//! Daily per-symbol sentiment aggregation.
//!
//! Single pass over the headline rows: score each headline, accumulate
//! (sum, count) per (date, stock) key, emit arithmetic means. Rows whose
//! date failed to parse are skipped — they have no aggregation key.

use crate::domain::{DailySentiment, HeadlineRecord, SentimentRecord};
use crate::sentiment::SentimentScorer;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Score every dated headline. Rows without a parsed date have no
/// aggregation key and are skipped here.
pub fn score_records(scorer: &SentimentScorer, records: &[HeadlineRecord]) -> Vec<SentimentRecord> {
    records
        .iter()
        .filter_map(|record| {
            record.date.map(|date| SentimentRecord {
                date,
                stock: record.stock.clone(),
                score: scorer.score(&record.headline),
            })
        })
        .collect()
}

/// Group headline sentiment by (date, stock) and average.
///
/// O(n) in record count. Empty input yields an empty result. The mean is
/// order-independent, so record order does not affect the output.
pub fn aggregate_daily(scorer: &SentimentScorer, records: &[HeadlineRecord]) -> DailySentiment {
    let mut acc: HashMap<(NaiveDate, String), (f64, usize)> = HashMap::new();

    for scored in score_records(scorer, records) {
        let entry = acc.entry((scored.date, scored.stock)).or_insert((0.0, 0));
        entry.0 += scored.score;
        entry.1 += 1;
    }

    let mut out = DailySentiment::new();
    for ((date, stock), (sum, count)) in acc {
        out.insert(date, &stock, sum / count as f64);
    }
    out
}
