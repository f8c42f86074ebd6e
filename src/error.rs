use std::path::PathBuf;

/// Failures while reading the contact file. Any of these aborts the load;
/// no partial dataset is handed back.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("unable to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("missing required column(s): {}", .missing.join(", "))]
    MissingColumns { missing: Vec<String> },
    #[error("line {line}: column '{column}' has no value")]
    MissingValue { line: u64, column: &'static str },
    #[error("line {line}: expected {expected} fields, found {found}")]
    ExtraFields {
        line: u64,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: column '{column}' is not a number: '{value}'")]
    InvalidNumber {
        line: u64,
        column: &'static str,
        value: String,
    },
    #[error(transparent)]
    Score(#[from] ScoreError),
}

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("score for '{name}' is not finite; its inputs are too large to weigh")]
    NonFinite { name: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("revenue range is inverted: low {low} is greater than high {high}")]
    InvertedRevenueRange { low: f64, high: f64 },
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    LogFilter {
        value: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("telemetry error: {0}")]
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
