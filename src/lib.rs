//! Lead scoring dashboard: load contacts, score them, filter by three
//! thresholds, and hand the result to a table, charts, or a CSV export.
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod loader;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod stats;
pub mod telemetry;
pub mod types;
pub mod util;

pub use dashboard::{Dashboard, DashboardView};
pub use error::{AppError, ConfigError, ExportError, LoadError, ScoreError};
pub use filter::{apply_filter, matches, FilterOverrides, FilterSpec, ResultSet, RevenueRange};
pub use ranking::top_n;
pub use scoring::{score, score_all};
pub use stats::{summarize, Summary};
pub use types::{Contact, ScoredContact, ScoreTier};
