//! NewsLens Runner — analysis orchestration, reporting, artifact export.
//!
//! This crate builds on `newslens-core` to provide:
//! - TOML-backed analysis configuration with content-addressed run ids
//! - The full-barrier batch pipeline (news → sentiment → prices →
//!   indicators → alignment → correlation)
//! - Report building (news summary, per-symbol results, matrices)
//! - CSV and JSON artifact export

pub mod config;
pub mod export;
pub mod pipeline;
pub mod report;

pub use config::{AnalysisConfig, ConfigError};
pub use export::{
    export_matrix_csv, export_result_json, export_summary_csv, import_result_json, load_artifacts,
    save_artifacts,
};
pub use pipeline::{run_analysis, AnalysisResult, NewsSummary, SymbolOutcome, SCHEMA_VERSION};
pub use report::render_report;
