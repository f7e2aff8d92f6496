//! Artifact export — JSON, CSV, and Markdown generation.
//!
//! Every persisted artifact carries a `schema_version`; unknown versions are
//! rejected on load. Undefined statistics are written as the literal "NaN",
//! never silently substituted with a number.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use newslens_core::stats::CorrelationMatrix;

use crate::pipeline::{AnalysisResult, SCHEMA_VERSION};
use crate::report::render_report;

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize an `AnalysisResult` to pretty JSON.
pub fn export_result_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize AnalysisResult to JSON")
}

/// Deserialize an `AnalysisResult` from JSON, rejecting unknown schema versions.
pub fn import_result_json(json: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(json).context("failed to deserialize AnalysisResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Per-symbol correlation summary.
///
/// Columns: symbol, bars, matched_days, n, correlation, p_value, error
pub fn export_summary_csv(result: &AnalysisResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record([
        "symbol",
        "bars",
        "matched_days",
        "n",
        "correlation",
        "p_value",
        "error",
    ])?;

    for outcome in &result.per_symbol {
        wtr.write_record([
            outcome.symbol.as_str(),
            &outcome.bar_count.to_string(),
            &outcome.matched_days.to_string(),
            &outcome.correlation.n.to_string(),
            &fmt_cell(outcome.correlation.coefficient),
            &fmt_cell(outcome.correlation.p_value),
            outcome.error.as_deref().unwrap_or(""),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

/// One cross-symbol matrix as CSV: a symbol column followed by one column
/// per symbol, in matrix order.
pub fn export_matrix_csv(matrix: &CorrelationMatrix) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    let mut header = vec!["symbol".to_string()];
    header.extend(matrix.symbols.iter().cloned());
    wtr.write_record(&header)?;

    for (i, symbol) in matrix.symbols.iter().enumerate() {
        let mut row = vec![symbol.clone()];
        row.extend(matrix.values[i].iter().map(|&v| fmt_cell(v)));
        wtr.write_record(&row)?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}

fn fmt_cell(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}

// ─── Artifact bundle ────────────────────────────────────────────────

/// Save the full artifact set for one run.
///
/// Creates `{run_id}/` under `output_dir` containing:
/// - `result.json` — the full `AnalysisResult`
/// - `summary.csv` — per-symbol correlation table
/// - `matrix_{column}.csv` — one per indicator matrix
/// - `report.md` — the rendered Markdown report
///
/// Returns the path to the created directory.
pub fn save_artifacts(result: &AnalysisResult, output_dir: &Path) -> Result<PathBuf> {
    let run_dir = output_dir.join(&result.run_id);
    std::fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create artifact dir: {}", run_dir.display()))?;

    let json = export_result_json(result)?;
    std::fs::write(run_dir.join("result.json"), &json)?;

    let summary = export_summary_csv(result)?;
    std::fs::write(run_dir.join("summary.csv"), &summary)?;

    for (name, matrix) in &result.matrices {
        let csv = export_matrix_csv(matrix)?;
        std::fs::write(run_dir.join(format!("matrix_{name}.csv")), &csv)?;
    }

    let report = render_report(result);
    std::fs::write(run_dir.join("report.md"), &report)?;

    Ok(run_dir)
}

/// Load an `AnalysisResult` back from an artifact directory's result.json.
pub fn load_artifacts(dir: &Path) -> Result<AnalysisResult> {
    let path = dir.join("result.json");
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_result_json(&json)
}
