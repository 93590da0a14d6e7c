//! Guardian CLI — plain-text views of the data quality dataset.
//!
//! Commands:
//! - `stats` — headline numbers as the dashboard cards show them
//! - `anomalies` — the anomaly list, or one anomaly with its detail block
//! - `trend` — monthly quality with text bars
//! - `report` — the weekly narrative as Markdown
//! - `check` — validate a dataset and report the stats tally gap

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, warn};

use guardian_core::provider::provider_for;
use guardian_core::{config, export, format, telemetry};
use guardian_core::{Anomaly, AnomalyId, AppConfig, Dataset};

/// Width of the text bars printed by `trend`.
const BAR_WIDTH: u16 = 40;

#[derive(Parser)]
#[command(
    name = "guardian",
    about = "Guardian CLI — vaccination data quality reports",
    version
)]
struct Cli {
    /// Config file. Defaults to <config_dir>/guardian/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Dataset file (TOML or JSON). Defaults to the built-in dataset.
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the headline stats.
    Stats,
    /// List anomalies, or show one in full.
    Anomalies {
        /// Show only this anomaly, with its AI analysis and recommended action.
        #[arg(long)]
        id: Option<AnomalyId>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the monthly quality trend.
    Trend,
    /// Render the weekly summary report as Markdown.
    Report {
        /// Write to this file instead of stdout.
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Validate the dataset and report the stats tally gap.
    Check,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::default_path);
    let mut config = AppConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    if cli.data.is_some() {
        config.data_file = cli.data;
    }

    telemetry::init_stderr(&config.log_level).context("initializing logging")?;

    let provider = provider_for(config.data_file.as_deref());
    let data = provider.load().context("loading dataset")?;
    info!(source = %provider.name(), "dataset loaded");

    match cli.command {
        Commands::Stats => print!("{}", render_stats(&data)),
        Commands::Anomalies { id, format } => run_anomalies(&data, id, format)?,
        Commands::Trend => print!("{}", render_trend(&data, BAR_WIDTH)),
        Commands::Report { output } => run_report(&data, output)?,
        Commands::Check => run_check(&data, &provider.name()),
    }
    Ok(())
}

fn run_anomalies(data: &Dataset, id: Option<AnomalyId>, format: OutputFormat) -> Result<()> {
    let selected: Vec<Anomaly> = match id {
        Some(id) => match data.anomaly(id) {
            Some(anomaly) => vec![anomaly.clone()],
            None => bail!("no anomaly with id {id}"),
        },
        None => data.anomalies.clone(),
    };

    let out = match (format, id) {
        (OutputFormat::Text, Some(_)) => render_anomaly_detail(&selected[0]),
        (OutputFormat::Text, None) => render_anomaly_list(&selected),
        (OutputFormat::Json, Some(_)) => serde_json::to_string_pretty(&selected[0])? + "\n",
        (OutputFormat::Json, None) => export::anomalies_json(&selected)? + "\n",
        (OutputFormat::Csv, _) => export::anomalies_csv(&selected)?,
    };
    print!("{out}");
    Ok(())
}

fn run_report(data: &Dataset, output: Option<PathBuf>) -> Result<()> {
    let markdown = export::report_markdown(data);
    match output {
        Some(path) => {
            std::fs::write(&path, &markdown)
                .with_context(|| format!("writing report to {}", path.display()))?;
            info!(path = %path.display(), "report written");
            println!("Report saved to {}", path.display());
        }
        None => print!("{markdown}"),
    }
    Ok(())
}

fn run_check(data: &Dataset, source: &str) {
    // Loading already validated the dataset; only the tally is left.
    let gap = data.stats.tally_gap();
    if gap == 0 {
        info!(source, "stats tally is consistent");
    } else {
        warn!(
            source,
            gap,
            total = data.stats.total_records,
            accounted = data.stats.accounted_records(),
            "stats tally does not add up"
        );
    }
    print!("{}", render_check(data, source));
}

fn render_stats(data: &Dataset) -> String {
    let s = &data.stats;
    let mut out = String::new();
    let delta = data
        .quality_delta()
        .map(|d| format!("  ({})", format::delta_caption(d)))
        .unwrap_or_default();
    let _ = writeln!(out, "Data Quality Score  {}{delta}", format::percent(s.quality_score));
    let _ = writeln!(out, "Total Records       {}", format::thousands(s.total_records));
    let _ = writeln!(out, "Critical Issues     {}", format::thousands(s.critical_issues));
    let _ = writeln!(out, "Warnings            {}", format::thousands(s.warning_issues));
    let _ = writeln!(out, "Clean Records       {}", format::thousands(s.clean_records));
    out
}

fn render_anomaly_list(anomalies: &[Anomaly]) -> String {
    let mut out = String::new();
    for a in anomalies {
        let _ = writeln!(
            out,
            "#{:<3} {:<9} {:<24} {:>6} records  {:<7} {}",
            a.id,
            a.severity.label(),
            a.category,
            format::thousands(a.count),
            a.impact_level(),
            a.description
        );
    }
    out
}

fn render_anomaly_detail(a: &Anomaly) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {}", a.severity.label(), a.category);
    let _ = writeln!(out, "{}", a.description);
    let _ = writeln!(out, "Affected Records: {}", format::thousands(a.count));
    let _ = writeln!(out, "Impact: {}", a.impact);
    let _ = writeln!(out);
    let _ = writeln!(out, "AI Analysis");
    let _ = writeln!(out, "{}", a.ai_explanation);
    let _ = writeln!(out);
    let _ = writeln!(out, "Recommended Action");
    let _ = writeln!(out, "{}", a.recommendation);
    out
}

fn render_trend(data: &Dataset, width: u16) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Quality Trend ({} Months)", data.trend.len());
    for point in &data.trend {
        let label = format!("{} {}", point.month, data.trend_year);
        let _ = writeln!(
            out,
            "{label:<10}{:>7}  {}  {} issues",
            format::percent(point.quality),
            format::text_bar(point.quality, width),
            point.issues
        );
    }
    out
}

fn render_check(data: &Dataset, source: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "OK: {source}");
    let _ = writeln!(
        out,
        "  {} anomalies, {} trend points",
        data.anomalies.len(),
        data.trend.len()
    );
    let gap = data.stats.tally_gap();
    if gap == 0 {
        let _ = writeln!(out, "  stats tally: consistent");
    } else {
        let _ = writeln!(
            out,
            "  stats tally: off by {gap} ({} total, {} accounted)",
            format::thousands(data.stats.total_records),
            format::thousands(data.stats.accounted_records())
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "guardian", "anomalies", "--id", "3", "--format", "csv", "--data", "d.toml",
        ])
        .unwrap();
        assert_eq!(cli.data, Some(PathBuf::from("d.toml")));
        match cli.command {
            Commands::Anomalies { id, format } => {
                assert_eq!(id, Some(3));
                assert_eq!(format, OutputFormat::Csv);
            }
            _ => panic!("expected anomalies"),
        }
    }

    #[test]
    fn stats_text_matches_cards() {
        let out = render_stats(&Dataset::builtin());
        assert!(out.contains("Data Quality Score  97.8%  (↑ 0.7% from last month)"));
        assert!(out.contains("Total Records       45,821"));
        assert!(out.contains("Critical Issues     23"));
        assert!(out.contains("Warnings            47"));
        assert!(out.contains("Clean Records       45,751"));
    }

    #[test]
    fn anomaly_list_one_line_each_in_order() {
        let data = Dataset::builtin();
        let out = render_anomaly_list(&data.anomalies);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("#1"));
        assert!(lines[0].contains("Missing Second Dose"));
        assert!(lines[0].contains("High"));
        assert!(lines[4].contains("Incomplete Data"));
    }

    #[test]
    fn anomaly_detail_has_analysis_and_action() {
        let data = Dataset::builtin();
        let out = render_anomaly_detail(data.anomaly(1).unwrap());
        assert!(out.starts_with("[Critical] Missing Second Dose\n"));
        assert!(out.contains("Affected Records: 12"));
        assert!(out.contains("\nAI Analysis\n"));
        assert!(out.contains("Immediate outreach required."));
    }

    #[test]
    fn trend_rows_have_bars() {
        let out = render_trend(&Dataset::builtin(), 10);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Quality Trend (5 Months)");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].starts_with("Aug 2024"));
        assert!(lines[1].contains("94.2%"));
        assert!(lines[5].contains("23 issues"));
        assert!(lines[5].contains("█"));
    }

    #[test]
    fn check_reports_gap() {
        let mut data = Dataset::builtin();
        assert!(render_check(&data, "built-in").contains("stats tally: consistent"));

        data.stats.clean_records -= 10;
        let out = render_check(&data, "built-in");
        assert!(out.contains("stats tally: off by 10"));
    }

    #[test]
    fn check_handles_counts_at_u64_max() {
        let mut data = Dataset::builtin();
        data.stats.total_records = u64::MAX;
        data.stats.clean_records = u64::MAX;
        let out = render_check(&data, "huge.json");
        assert!(out.contains("stats tally: off by -70"));
    }

    #[test]
    fn unknown_anomaly_id_is_an_error() {
        let err = run_anomalies(&Dataset::builtin(), Some(99), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("no anomaly with id 99"));
    }
}
