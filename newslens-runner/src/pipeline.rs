//! Analysis pipeline — wires news, market data, indicators, and statistics.
//!
//! A single full-barrier batch: score and aggregate the headlines, fetch
//! price history for the whole universe, then derive returns, indicators,
//! alignment, and correlation per symbol. Every stage takes explicit inputs
//! and returns explicit outputs; nothing holds state across calls, so two
//! runs over the same inputs produce identical results.

use std::collections::BTreeMap;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use newslens_core::align::align;
use newslens_core::data::{fetch_universe, FetchProgress, MarketDataProvider, SymbolFetch};
use newslens_core::domain::{DailySentiment, PriceBar};
use newslens_core::indicators::IndicatorSeries;
use newslens_core::news::{publisher_counts, HeadlineStats, LoadReport};
use newslens_core::returns::daily_returns;
use newslens_core::sentiment::{aggregate_daily, SentimentScorer};
use newslens_core::stats::{
    correlate, cross_correlate, CorrelationMatrix, CorrelationResult, DatedSeries,
};

use crate::config::{AnalysisConfig, RunId};

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Publishers listed in the news summary.
const TOP_PUBLISHERS: usize = 10;

/// Descriptive summary of the headline dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsSummary {
    pub rows_read: usize,
    /// Rows whose timestamp failed to parse (kept, excluded from aggregation).
    pub coerced_dates: usize,
    pub headline_stats: HeadlineStats,
    /// (publisher, article count), descending.
    pub top_publishers: Vec<(String, usize)>,
}

/// Everything the run produced for one symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymbolOutcome {
    pub symbol: String,
    /// Price bars fetched (0 when the fetch failed).
    pub bar_count: usize,
    /// Rows surviving the sentiment/return date join.
    pub matched_days: usize,
    /// Mean of the symbol's daily sentiment scores, if any headlines matched.
    pub mean_sentiment: Option<f64>,
    pub correlation: CorrelationResult,
    /// Fetch error, when market data was unavailable. The correlation is
    /// undefined in that case but the run still completes.
    pub error: Option<String>,
}

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub run_id: RunId,
    pub news: NewsSummary,
    /// One outcome per configured symbol, in request order.
    pub per_symbol: Vec<SymbolOutcome>,
    /// Cross-symbol matrix per indicator column name.
    pub matrices: BTreeMap<String, CorrelationMatrix>,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Run the full analysis: headlines + config + market data in, result out.
///
/// Fetch failures are isolated per symbol: the failing symbol gets an
/// undefined correlation and an error note, the rest proceed. The pipeline
/// itself never fails; it emits whatever is computable.
pub fn run_analysis(
    config: &AnalysisConfig,
    news: &LoadReport,
    provider: &dyn MarketDataProvider,
    progress: Option<&dyn FetchProgress>,
) -> AnalysisResult {
    let scorer = SentimentScorer::new();
    let sentiment = aggregate_daily(&scorer, &news.records);

    let summary = fetch_universe(
        provider,
        &config.symbols,
        config.start_date,
        config.end_date,
        progress,
    );

    // Per-symbol derivation is pure CPU work over already-fetched bars.
    let derived: Vec<(SymbolOutcome, Option<IndicatorSeries>)> = summary
        .fetches
        .par_iter()
        .map(|fetch| derive_symbol(fetch, &sentiment, config))
        .collect();

    let mut per_symbol = Vec::with_capacity(derived.len());
    let mut indicator_series: BTreeMap<String, IndicatorSeries> = BTreeMap::new();
    for (outcome, series) in derived {
        if let Some(series) = series {
            indicator_series.insert(outcome.symbol.clone(), series);
        }
        per_symbol.push(outcome);
    }

    let matrices = build_matrices(&indicator_series, config);

    AnalysisResult {
        schema_version: SCHEMA_VERSION,
        run_id: config.run_id(),
        news: summarize_news(news),
        per_symbol,
        matrices,
    }
}

fn summarize_news(news: &LoadReport) -> NewsSummary {
    let mut top_publishers = publisher_counts(&news.records);
    top_publishers.truncate(TOP_PUBLISHERS);
    NewsSummary {
        rows_read: news.rows_read(),
        coerced_dates: news.coerced_dates,
        headline_stats: HeadlineStats::describe(&news.records),
        top_publishers,
    }
}

/// Returns, alignment, and correlation for one symbol, plus its indicator
/// series for the cross-symbol matrices when the fetch succeeded.
fn derive_symbol(
    fetch: &SymbolFetch,
    sentiment: &DailySentiment,
    config: &AnalysisConfig,
) -> (SymbolOutcome, Option<IndicatorSeries>) {
    let symbol = fetch.symbol.clone();
    let mean_sentiment = sentiment.mean_for_symbol(&symbol);

    let bars: &[PriceBar] = match &fetch.result {
        Ok(bars) => bars,
        Err(e) => {
            return (
                SymbolOutcome {
                    symbol,
                    bar_count: 0,
                    matched_days: 0,
                    mean_sentiment,
                    correlation: CorrelationResult::undefined(0),
                    error: Some(e.to_string()),
                },
                None,
            );
        }
    };

    let returns = daily_returns(bars);
    let sample = align(
        &sentiment.for_symbol(&symbol),
        &returns,
        config.missing_return_policy,
    );
    let correlation = correlate(&sample.sentiment_values(), &sample.return_values());

    let outcome = SymbolOutcome {
        symbol,
        bar_count: bars.len(),
        matched_days: sample.len(),
        mean_sentiment,
        correlation,
        error: None,
    };
    (outcome, Some(IndicatorSeries::compute(bars)))
}

/// One symbol × symbol matrix per configured indicator column, over the
/// symbols whose fetch succeeded.
fn build_matrices(
    indicator_series: &BTreeMap<String, IndicatorSeries>,
    config: &AnalysisConfig,
) -> BTreeMap<String, CorrelationMatrix> {
    config
        .matrix_columns
        .iter()
        .map(|&column| {
            let series_by_symbol: BTreeMap<String, DatedSeries> = indicator_series
                .iter()
                .map(|(symbol, series)| {
                    (
                        symbol.clone(),
                        DatedSeries::new(series.dates.clone(), series.column(column).to_vec()),
                    )
                })
                .collect();
            (
                column.name().to_string(),
                cross_correlate(&series_by_symbol, config.cross_alignment),
            )
        })
        .collect()
}
