// Terminal front end for the lead dashboard.
//
// - Loads and scores the contact file once.
// - Prints the overview metrics, the top-N ranking and the detailed table for
//   the current filter, then writes the CSV export and chart JSON if asked.
// - With `--interactive`, loops over a menu that adjusts one filter at a time
//   and re-renders from scratch after every change.
use clap::Parser;
use lead_dashboard::config::{Cli, TelemetryConfig};
use lead_dashboard::error::{AppError, ConfigError};
use lead_dashboard::filter::{FilterOverrides, Span};
use lead_dashboard::output::{self, DEFAULT_EXPORT_FILE};
use lead_dashboard::util::{format_int, format_number, parse_number};
use lead_dashboard::{telemetry, Dashboard};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;

/// Read one trimmed line after printing `prompt`. `None` on end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Ask for a number. Blank input (or end of input) keeps the current value.
fn prompt_number(label: &str, span: Option<Span>, current: f64) -> io::Result<Option<f64>> {
    let range = span
        .map(|s| format!("{} - {}, ", format_number(s.min, 1), format_number(s.max, 1)))
        .unwrap_or_default();
    loop {
        let prompt = format!("{label} ({range}current {}): ", format_number(current, 1));
        let Some(input) = read_line(&prompt)? else {
            return Ok(None);
        };
        if input.is_empty() {
            return Ok(None);
        }
        match parse_number(&input) {
            Some(v) => return Ok(Some(v)),
            None => println!("Invalid number. Leave blank to keep the current value."),
        }
    }
}

fn render(dashboard: &Dashboard, cli: &Cli) {
    println!("CRM Contact Dashboard\n");
    output::print_metrics(dashboard.overview());

    let view = dashboard.view(cli.top);
    let filter = view.filter;
    println!(
        "Filters: score >= {}, revenue {} - {}, engagement >= {}",
        format_number(filter.min_score, 1),
        format_number(filter.revenue_range.low, 2),
        format_number(filter.revenue_range.high, 2),
        format_number(filter.eng_threshold, 1)
    );
    println!(
        "Showing {} of {} contacts (average score {})\n",
        format_int(view.summary.count),
        format_int(dashboard.overview().count),
        view.summary.mean_score_label()
    );

    println!("Top {} Leads by Score\n", cli.top);
    output::preview_table_rows(&output::ranking_rows(&view.top), cli.top);

    println!("Detailed Contacts\n");
    output::preview_table_rows(
        &output::contact_table_rows(view.results.contacts()),
        cli.preview_rows,
    );
    if view.results.len() > cli.preview_rows {
        println!(
            "({} more rows not shown)\n",
            format_int(view.results.len() - cli.preview_rows)
        );
    }
}

fn write_outputs(dashboard: &Dashboard, cli: &Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.export {
        export(dashboard, path)?;
    }
    if let Some(path) = &cli.charts {
        let view = dashboard.view(cli.top);
        output::write_json(path, &view.charts)?;
        println!("(Chart series written to {})\n", path.display());
    }
    Ok(())
}

fn export(dashboard: &Dashboard, path: &Path) -> Result<(), AppError> {
    let results = dashboard.results();
    output::write_csv(path, results.contacts())?;
    println!(
        "({} filtered contacts exported to {})\n",
        format_int(results.len()),
        path.display()
    );
    Ok(())
}

fn handle_revenue_range(dashboard: &mut Dashboard) -> io::Result<()> {
    let current = dashboard.filter().revenue_range;
    let span = dashboard.bounds().map(|b| b.revenue);
    let low = prompt_number("Revenue from", span, current.low)?.unwrap_or(current.low);
    let high = prompt_number("Revenue to", span, current.high)?.unwrap_or(current.high);
    if low > high {
        println!("{}\n", ConfigError::InvertedRevenueRange { low, high });
        return Ok(());
    }
    dashboard.apply_overrides(&FilterOverrides {
        revenue_low: Some(low),
        revenue_high: Some(high),
        ..FilterOverrides::default()
    });
    Ok(())
}

fn interactive_loop(dashboard: &mut Dashboard, cli: &Cli) -> Result<(), AppError> {
    loop {
        println!("Adjust Filters:");
        println!("[1] Minimum lead score");
        println!("[2] Revenue range");
        println!("[3] Minimum engagement");
        println!("[4] Reset filters");
        println!("[5] Export filtered contacts");
        println!("[6] Exit\n");
        let Some(choice) = read_line("Enter choice: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => {
                let span = dashboard.bounds().map(|b| b.score);
                let current = dashboard.filter().min_score;
                if let Some(v) = prompt_number("Minimum Lead Score", span, current)? {
                    dashboard.apply_overrides(&FilterOverrides {
                        min_score: Some(v),
                        ..FilterOverrides::default()
                    });
                }
            }
            "2" => handle_revenue_range(dashboard)?,
            "3" => {
                let span = dashboard.bounds().map(|b| b.engagement);
                let current = dashboard.filter().eng_threshold;
                if let Some(v) = prompt_number("Minimum Engagement (%)", span, current)? {
                    dashboard.apply_overrides(&FilterOverrides {
                        eng_threshold: Some(v),
                        ..FilterOverrides::default()
                    });
                }
            }
            "4" => dashboard.reset_filter(),
            "5" => {
                let default_path = cli
                    .export
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
                let prompt = format!("Export to ({}): ", default_path.display());
                let path = match read_line(&prompt)? {
                    Some(p) if !p.is_empty() => PathBuf::from(p),
                    _ => default_path,
                };
                if let Err(e) = export(dashboard, &path) {
                    eprintln!("Write error: {}\n", e);
                }
                continue;
            }
            "6" => break,
            _ => {
                println!("Invalid choice. Please enter 1 to 6.\n");
                continue;
            }
        }
        println!();
        render(dashboard, cli);
    }
    println!("Exiting the program.");
    Ok(())
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    telemetry::init(&TelemetryConfig::load())?;
    let overrides = cli.filter_overrides()?;

    let (mut dashboard, report) = Dashboard::load(&cli.input)?;
    println!(
        "Processing contacts... ({} rows loaded)\n",
        format_int(report.total_rows)
    );
    dashboard.apply_overrides(&overrides);

    render(&dashboard, &cli);
    write_outputs(&dashboard, &cli)?;
    if cli.interactive {
        interactive_loop(&mut dashboard, &cli)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "dashboard failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
