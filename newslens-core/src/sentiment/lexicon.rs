//! Polarity lexicon for financial news headlines.
//!
//! Word lists are deliberately finance-flavored: headline vocabulary is a
//! narrow register and a small targeted lexicon outperforms a general one
//! on this dataset. Tokens are matched lowercase after stripping
//! non-alphanumeric characters.

/// Words carrying positive polarity (+1.0 each).
pub const POSITIVE: &[&str] = &[
    "accelerate",
    "advance",
    "beat",
    "beats",
    "boom",
    "boost",
    "bullish",
    "climb",
    "climbs",
    "exceed",
    "exceeds",
    "gain",
    "gains",
    "growth",
    "high",
    "improve",
    "improves",
    "jump",
    "jumps",
    "optimistic",
    "outperform",
    "outperforms",
    "positive",
    "profit",
    "profits",
    "rally",
    "rallies",
    "rebound",
    "record",
    "recover",
    "recovery",
    "rise",
    "rises",
    "soar",
    "soars",
    "strong",
    "success",
    "surge",
    "surges",
    "surpass",
    "top",
    "tops",
    "upbeat",
    "upgrade",
    "upgraded",
    "upgrades",
    "upside",
    "win",
    "wins",
];

/// Words carrying negative polarity (-1.0 each).
pub const NEGATIVE: &[&str] = &[
    "bankruptcy",
    "bearish",
    "concern",
    "concerns",
    "crash",
    "crashes",
    "cut",
    "cuts",
    "decline",
    "declines",
    "deficit",
    "disappoint",
    "disappointing",
    "disappoints",
    "downgrade",
    "downgraded",
    "downgrades",
    "downside",
    "drop",
    "drops",
    "fall",
    "falls",
    "fear",
    "fears",
    "fraud",
    "lawsuit",
    "layoff",
    "layoffs",
    "loss",
    "losses",
    "low",
    "miss",
    "misses",
    "negative",
    "pessimistic",
    "plunge",
    "plunges",
    "recall",
    "risk",
    "risks",
    "sink",
    "sinks",
    "slump",
    "slumps",
    "struggle",
    "struggles",
    "tumble",
    "tumbles",
    "underperform",
    "underperforms",
    "warn",
    "warning",
    "warns",
    "weak",
    "worry",
];

/// Tokens that flip the polarity of the word that follows them.
pub const NEGATORS: &[&str] = &["no", "not", "never", "without", "nor"];
