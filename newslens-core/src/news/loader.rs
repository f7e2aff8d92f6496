//! Headline CSV ingestion.
//!
//! Expected columns: `headline`, `date` (`YYYY-MM-DD HH:MM:SS`), `stock`,
//! `publisher`. Extra columns (the upstream dump carries an unnamed index)
//! are ignored. A malformed timestamp coerces the row's date to `None` and
//! is counted in the report; only a structurally broken file is an error.

use crate::domain::{parse_headline_date, HeadlineRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors from news ingestion.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error("cannot open news file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Raw CSV row before date coercion.
#[derive(Debug, Deserialize)]
struct RawRow {
    headline: String,
    date: String,
    stock: String,
    publisher: String,
}

/// Outcome of a headline load.
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub records: Vec<HeadlineRecord>,
    /// Rows whose timestamp failed to parse (kept with `date = None`).
    pub coerced_dates: usize,
}

impl LoadReport {
    pub fn rows_read(&self) -> usize {
        self.records.len()
    }
}

/// Load headlines from a CSV file on disk.
pub fn load_headlines(path: &Path) -> Result<LoadReport, NewsError> {
    let file = File::open(path).map_err(|source| NewsError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_headlines(file)
}

/// Load headlines from any CSV reader.
pub fn read_headlines<R: Read>(reader: R) -> Result<LoadReport, NewsError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let mut report = LoadReport::default();

    for (i, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let raw = row.map_err(|e| NewsError::MalformedRow {
            row: i + 1,
            reason: e.to_string(),
        })?;

        let date = parse_headline_date(&raw.date);
        if date.is_none() {
            report.coerced_dates += 1;
        }

        report.records.push(HeadlineRecord {
            headline: raw.headline,
            date,
            stock: raw.stock,
            publisher: raw.publisher,
        });
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn loads_well_formed_rows() {
        let csv = "headline,date,stock,publisher\n\
                   Earnings beat,2024-01-15 09:30:00,AAPL,Benzinga\n\
                   Guidance cut,2024-01-16 14:00:00,MSFT,Reuters\n";
        let report = read_headlines(csv.as_bytes()).unwrap();
        assert_eq!(report.rows_read(), 2);
        assert_eq!(report.coerced_dates, 0);
        assert_eq!(
            report.records[0].date,
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(report.records[1].stock, "MSFT");
    }

    #[test]
    fn malformed_date_coerces_not_fails() {
        let csv = "headline,date,stock,publisher\n\
                   Bad timestamp,garbage,AAPL,Benzinga\n\
                   Good row,2024-01-16 14:00:00,AAPL,Benzinga\n";
        let report = read_headlines(csv.as_bytes()).unwrap();
        assert_eq!(report.rows_read(), 2);
        assert_eq!(report.coerced_dates, 1);
        assert!(report.records[0].date.is_none());
        assert!(report.records[1].date.is_some());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let csv = ",headline,date,stock,publisher\n\
                   0,Earnings beat,2024-01-15 09:30:00,AAPL,Benzinga\n";
        let report = read_headlines(csv.as_bytes()).unwrap();
        assert_eq!(report.rows_read(), 1);
        assert_eq!(report.records[0].headline, "Earnings beat");
    }

    #[test]
    fn empty_file_yields_empty_report() {
        let csv = "headline,date,stock,publisher\n";
        let report = read_headlines(csv.as_bytes()).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.coerced_dates, 0);
    }
}
