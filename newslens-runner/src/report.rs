//! Markdown report rendering.
//!
//! One human-readable document per run: news summary, per-symbol
//! correlation table, and the cross-symbol matrices. Undefined values print
//! as "NaN" so a missing statistic is visible, never blank.

use newslens_core::stats::CorrelationMatrix;

use crate::pipeline::AnalysisResult;

/// Render the full Markdown report for one analysis run.
pub fn render_report(result: &AnalysisResult) -> String {
    let mut md = String::with_capacity(4096);

    md.push_str("# Sentiment / Returns Analysis\n\n");
    md.push_str(&format!("Run id: `{}`\n\n", result.run_id));

    // News summary
    let news = &result.news;
    md.push_str("## News Dataset\n\n");
    md.push_str("| Field | Value |\n");
    md.push_str("| --- | --- |\n");
    md.push_str(&format!("| Rows | {} |\n", news.rows_read));
    md.push_str(&format!("| Coerced dates | {} |\n", news.coerced_dates));
    md.push_str(&format!(
        "| Headline length | mean {:.1}, std {:.1}, min {}, max {} |\n",
        news.headline_stats.mean,
        news.headline_stats.std,
        news.headline_stats.min,
        news.headline_stats.max
    ));
    md.push('\n');

    if !news.top_publishers.is_empty() {
        md.push_str("### Top Publishers\n\n");
        md.push_str("| Publisher | Articles |\n");
        md.push_str("| --- | --- |\n");
        for (publisher, count) in &news.top_publishers {
            md.push_str(&format!("| {publisher} | {count} |\n"));
        }
        md.push('\n');
    }

    // Per-symbol results
    md.push_str("## Sentiment vs Daily Returns\n\n");
    md.push_str("| Symbol | Bars | Matched Days | Mean Sentiment | r | p | Note |\n");
    md.push_str("| --- | --- | --- | --- | --- | --- | --- |\n");
    for outcome in &result.per_symbol {
        let mean = outcome
            .mean_sentiment
            .map(|m| format!("{m:.4}"))
            .unwrap_or_else(|| "-".to_string());
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            outcome.symbol,
            outcome.bar_count,
            outcome.matched_days,
            mean,
            fmt_stat(outcome.correlation.coefficient),
            fmt_stat(outcome.correlation.p_value),
            outcome.error.as_deref().unwrap_or(""),
        ));
    }
    md.push('\n');

    // Cross-symbol matrices
    for (name, matrix) in &result.matrices {
        md.push_str(&format!("## Cross-Symbol Correlation: {name}\n\n"));
        md.push_str(&render_matrix(matrix));
        md.push('\n');
    }

    md
}

fn render_matrix(matrix: &CorrelationMatrix) -> String {
    if matrix.symbols.is_empty() {
        return "(no symbols with data)\n".to_string();
    }

    let mut md = String::new();
    md.push_str("| |");
    for symbol in &matrix.symbols {
        md.push_str(&format!(" {symbol} |"));
    }
    md.push('\n');
    md.push_str("| --- |");
    for _ in &matrix.symbols {
        md.push_str(" --- |");
    }
    md.push('\n');

    for (i, symbol) in matrix.symbols.iter().enumerate() {
        md.push_str(&format!("| **{symbol}** |"));
        for value in &matrix.values[i] {
            md.push_str(&format!(" {} |", fmt_stat(*value)));
        }
        md.push('\n');
    }
    md
}

/// NaN-aware fixed-point formatting for report cells.
fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}
