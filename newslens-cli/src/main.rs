//! NewsLens CLI — headline sentiment vs market analysis.
//!
//! Commands:
//! - `analyze` — run the full pipeline: news CSV + Yahoo Finance prices in,
//!   report and artifacts out
//! - `score` — print the sentiment score of a single headline

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use newslens_core::data::{CircuitBreaker, StdoutProgress, YahooProvider};
use newslens_core::news::load_headlines;
use newslens_core::sentiment::SentimentScorer;
use newslens_runner::{render_report, run_analysis, save_artifacts, AnalysisConfig};

#[derive(Parser)]
#[command(
    name = "newslens",
    about = "NewsLens CLI — news sentiment vs stock returns"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis over a headline CSV and a symbol universe.
    Analyze {
        /// Path to the headline CSV (headline, date, stock, publisher).
        #[arg(long)]
        news: PathBuf,

        /// Path to a TOML analysis config.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Symbols to analyze (alternative to --config).
        #[arg(long, num_args = 1..)]
        symbols: Vec<String>,

        /// Price history start date (YYYY-MM-DD). Defaults to 1 year ago.
        #[arg(long)]
        start: Option<String>,

        /// Price history end date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Output directory for artifacts.
        #[arg(long, default_value = "results")]
        output_dir: PathBuf,

        /// Print the Markdown report to stdout as well.
        #[arg(long, default_value_t = false)]
        print_report: bool,
    },
    /// Score a single headline and print the result.
    Score {
        /// Headline text.
        headline: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            news,
            config,
            symbols,
            start,
            end,
            output_dir,
            print_report,
        } => run_analyze(news, config, symbols, start, end, output_dir, print_report),
        Commands::Score { headline } => run_score(&headline),
    }
}

fn run_analyze(
    news_path: PathBuf,
    config_path: Option<PathBuf>,
    symbols: Vec<String>,
    start: Option<String>,
    end: Option<String>,
    output_dir: PathBuf,
    print_report: bool,
) -> Result<()> {
    if config_path.is_some() && !symbols.is_empty() {
        bail!("--config and --symbols are mutually exclusive");
    }
    if config_path.is_none() && symbols.is_empty() {
        bail!("one of --config or --symbols is required");
    }

    let config = if let Some(path) = config_path {
        AnalysisConfig::from_toml_file(&path)?
    } else {
        build_config_from_args(&symbols, start.as_deref(), end.as_deref())?
    };

    let news = load_headlines(&news_path)
        .with_context(|| format!("failed to load news from {}", news_path.display()))?;
    println!(
        "Loaded {} headlines ({} with coerced dates)",
        news.rows_read(),
        news.coerced_dates
    );

    let circuit_breaker = Arc::new(CircuitBreaker::default_provider());
    let provider = YahooProvider::new(circuit_breaker);
    let progress = StdoutProgress;

    let result = run_analysis(&config, &news, &provider, Some(&progress));

    print_summary(&result);
    if print_report {
        println!("\n{}", render_report(&result));
    }

    let run_dir = save_artifacts(&result, &output_dir)?;
    println!("Artifacts saved to: {}", run_dir.display());

    Ok(())
}

/// Build a config from bare CLI args, through the same TOML path a config
/// file would take.
fn build_config_from_args(
    symbols: &[String],
    start: Option<&str>,
    end: Option<&str>,
) -> Result<AnalysisConfig> {
    let start_date = match start {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive() - chrono::Duration::days(365),
    };
    let end_date = match end {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?,
        None => chrono::Local::now().date_naive(),
    };

    let symbol_list = symbols
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let toml_str = format!(
        r#"
symbols = [{symbol_list}]
start_date = "{start_date}"
end_date = "{end_date}"
"#
    );

    Ok(AnalysisConfig::from_toml(&toml_str)?)
}

fn run_score(headline: &str) -> Result<()> {
    let scorer = SentimentScorer::new();
    let score = scorer.score(headline);
    println!("{score:.4}\t{headline}");
    Ok(())
}

fn print_summary(result: &newslens_runner::AnalysisResult) {
    println!("\nSentiment vs daily returns (run {}):", result.run_id);
    for outcome in &result.per_symbol {
        match &outcome.error {
            Some(err) => println!("  {:<8} error: {err}", outcome.symbol),
            None => println!(
                "  {:<8} n={:<4} r={} p={}",
                outcome.symbol,
                outcome.correlation.n,
                fmt_stat(outcome.correlation.coefficient),
                fmt_stat(outcome.correlation.p_value),
            ),
        }
    }
}

fn fmt_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.4}")
    }
}
