use crate::charts::DEFAULT_TOP_N;
use crate::error::ConfigError;
use crate::filter::FilterOverrides;
use crate::output::DEFAULT_EXPORT_FILE;
use clap::Parser;
use std::env;
use std::path::PathBuf;

/// Command line for the terminal dashboard.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lead_dashboard",
    about = "Score contacts, filter them by lead score, revenue and engagement, and export the result",
    version
)]
pub struct Cli {
    /// Contact file with name, email, engagement, revenue and industry_fit columns
    #[arg(long, env = "LEAD_DASHBOARD_INPUT", default_value = "contacts.csv")]
    pub input: PathBuf,
    /// Minimum lead score (defaults to the lowest score loaded)
    #[arg(long)]
    pub min_score: Option<f64>,
    /// Lower revenue bound (defaults to the lowest revenue loaded)
    #[arg(long)]
    pub revenue_min: Option<f64>,
    /// Upper revenue bound (defaults to the highest revenue loaded)
    #[arg(long)]
    pub revenue_max: Option<f64>,
    /// Minimum engagement percentage (defaults to the lowest engagement loaded)
    #[arg(long)]
    pub min_engagement: Option<f64>,
    /// Number of leads in the ranking and bar chart
    #[arg(long, default_value_t = DEFAULT_TOP_N)]
    pub top: usize,
    /// Rows of the detailed contacts table to print
    #[arg(long, default_value_t = 10)]
    pub preview_rows: usize,
    /// Write the filtered contacts as CSV
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    pub export: Option<PathBuf>,
    /// Write the chart series as JSON
    #[arg(long)]
    pub charts: Option<PathBuf>,
    /// Keep adjusting filters from a menu after the first render
    #[arg(long)]
    pub interactive: bool,
}

impl Cli {
    pub fn filter_overrides(&self) -> Result<FilterOverrides, ConfigError> {
        if let (Some(low), Some(high)) = (self.revenue_min, self.revenue_max) {
            if low > high {
                return Err(ConfigError::InvertedRevenueRange { low, high });
            }
        }
        Ok(FilterOverrides {
            min_score: self.min_score,
            revenue_low: self.revenue_min,
            revenue_high: self.revenue_max,
            eng_threshold: self.min_engagement,
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        let log_level = env::var("LEAD_DASHBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        Self { log_level }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("lead_dashboard").chain(args.iter().copied()))
            .expect("arguments parse")
    }

    #[test]
    fn defaults_leave_filters_untouched() {
        let cli = parse(&[]);
        assert_eq!(cli.top, 10);
        assert_eq!(cli.preview_rows, 10);
        assert!(cli.export.is_none());
        assert!(!cli.interactive);
        assert_eq!(
            cli.filter_overrides().expect("valid"),
            FilterOverrides::default()
        );
    }

    #[test]
    fn filter_flags_become_overrides() {
        let cli = parse(&[
            "--min-score",
            "70",
            "--revenue-min",
            "100",
            "--revenue-max",
            "900.5",
            "--min-engagement",
            "25",
        ]);
        let overrides = cli.filter_overrides().expect("valid");
        assert_eq!(overrides.min_score, Some(70.0));
        assert_eq!(overrides.revenue_low, Some(100.0));
        assert_eq!(overrides.revenue_high, Some(900.5));
        assert_eq!(overrides.eng_threshold, Some(25.0));
    }

    #[test]
    fn inverted_revenue_range_is_rejected() {
        let cli = parse(&["--revenue-min", "500", "--revenue-max", "100"]);
        assert!(matches!(
            cli.filter_overrides(),
            Err(ConfigError::InvertedRevenueRange { .. })
        ));
    }

    #[test]
    fn bare_export_flag_uses_default_file_name() {
        let cli = parse(&["--export"]);
        assert_eq!(cli.export, Some(PathBuf::from(DEFAULT_EXPORT_FILE)));

        let cli = parse(&["--export", "out.csv", "--input", "leads.csv"]);
        assert_eq!(cli.export, Some(PathBuf::from("out.csv")));
        assert_eq!(cli.input, PathBuf::from("leads.csv"));
    }
}
