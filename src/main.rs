use chrono::{DateTime, Utc};
use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::{LevelFilter, info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use zoo_inspector::collaborators::InspectionLog;
use zoo_inspector::simulation::{ConsoleLog, MemoryLog, ZooEvent};
use zoo_inspector::{InspectionReport, Inspector, Scenario};

mod cli;
mod config;

use cli::Cli;
use cli::commands::{Commands, FormatArg};
use config::{Config, OutputFormat};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("zoo-inspector")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("zoo-inspector.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    // Let everything through the builder; the level is narrowed via set_max_level
    // until the config file has been read.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .target(env_logger::Target::Pipe(target))
        .init();
    apply_log_level(None);

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

/// Level for a configured name; unknown names fall back to info.
fn parse_level(level: Option<&str>) -> LevelFilter {
    match level {
        None => LevelFilter::Info,
        Some(name) => name.parse().unwrap_or_else(|_| {
            warn!("Unknown log level {:?}, using info", name);
            LevelFilter::Info
        }),
    }
}

/// RUST_LOG, when set, wins over the config file.
fn apply_log_level(level: Option<&str>) {
    if std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_none() {
        log::set_max_level(parse_level(level));
    }
}

/// Inspection result as printed with `--format json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    report: &'a InspectionReport,
    dispatches: Vec<String>,
    inspected_at: DateTime<Utc>,
}

fn render_json(report: &InspectionReport, events: &[ZooEvent], inspected_at: DateTime<Utc>) -> Result<String> {
    let json = JsonReport {
        report,
        dispatches: events.iter().map(ToString::to_string).collect(),
        inspected_at,
    };
    serde_json::to_string_pretty(&json).context("Failed to encode report")
}

/// Whether any output may be colored, from the config and `--no-color`
fn output_color(cli: &Cli, config: &Config) -> bool {
    let no_color = matches!(cli.command, Commands::Inspect { no_color: true, .. });
    config.output.color && !no_color
}

fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    let color = output_color(cli, config);
    colored::control::set_override(color);

    // stdout carries only results so JSON output stays parseable
    if cli.is_verbose() {
        eprintln!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Inspect { scenario, format, .. } => {
            let format = match format {
                Some(FormatArg::Text) => OutputFormat::Text,
                Some(FormatArg::Json) => OutputFormat::Json,
                None => config.output.format,
            };
            handle_inspect_command(scenario, format, color, cli.is_verbose())
        }
        Commands::Check { scenario } => handle_check_command(scenario),
    }
}

fn handle_inspect_command(path: &Path, format: OutputFormat, color: bool, verbose: bool) -> Result<()> {
    info!("Inspecting scenario: {}", path.display());
    let scenario = Scenario::load(path).context(format!("Failed to load scenario {}", path.display()))?;
    let zoo = scenario.zoo();
    let recognition = Arc::new(scenario.recognition());

    let log: Arc<dyn InspectionLog> = match format {
        OutputFormat::Text => Arc::new(ConsoleLog::stdout(color)),
        OutputFormat::Json => Arc::new(MemoryLog::new()),
    };

    let inspector = Inspector::new(recognition, log);
    let report = inspector
        .inspect_report(&zoo)
        .context(format!("Inspection of zoo {} failed", scenario.id))?;

    match format {
        OutputFormat::Json => println!("{}", render_json(&report, &zoo.events(), Utc::now())?),
        OutputFormat::Text if verbose => print_journal(&zoo.events()),
        OutputFormat::Text => {}
    }
    Ok(())
}

fn print_journal(events: &[ZooEvent]) {
    if events.is_empty() {
        println!("{}", "No dispatches".green());
        return;
    }
    println!("{}", "Dispatches:".cyan());
    for event in events {
        println!("  {}", event);
    }
}

fn handle_check_command(path: &Path) -> Result<()> {
    info!("Checking scenario: {}", path.display());
    let scenario = Scenario::load(path).context(format!("Failed to load scenario {}", path.display()))?;
    println!(
        "{} zoo {} with {} enclosures",
        "Valid:".green(),
        scenario.id,
        scenario.enclosures.len()
    );
    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    apply_log_level(config.log_level.as_deref());

    info!("Starting with config from: {:?}", cli.config);

    run_application(&cli, &config).context("Application failed")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zoo_inspector::simulation::InMemoryZoo;
    use zoo_inspector::{Inspection, Zoo};

    fn sick_leo_report() -> (InspectionReport, Vec<ZooEvent>) {
        let scenario = Scenario::from_yaml("id: Z1\nenclosures:\n  - { id: E1, animal: Leo, sick: true }\n").unwrap();
        let zoo: InMemoryZoo = scenario.zoo();
        let recognition = scenario.recognition();
        let report = Inspection::new(&zoo, &recognition).run().unwrap();
        (report, zoo.events())
    }

    #[test]
    fn test_render_json_is_one_document() {
        let (report, events) = sick_leo_report();
        let inspected_at = DateTime::parse_from_rfc3339("2026-10-18T09:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let rendered = render_json(&report, &events, inspected_at).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["zoo_id"], "Z1");
        assert_eq!(value["warning"], true);
        assert_eq!(
            value["lines"],
            serde_json::json!(["ANIMAL#Leo#WARNING", "ZOO#Z1#WARNING"])
        );
        assert_eq!(
            value["dispatches"],
            serde_json::json!(["closed enclosure E1", "veterinary -> Leo"])
        );
        assert_eq!(value["inspected_at"], "2026-10-18T09:30:00Z");
    }

    #[test]
    fn test_render_json_empty_zoo() {
        let zoo = InMemoryZoo::new("Z2", Vec::new());
        let recognition = Scenario::from_yaml("id: Z2\n").unwrap().recognition();
        let report = Inspection::new(&zoo, &recognition).run().unwrap();

        let rendered = render_json(&report, &zoo.events(), Utc::now()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["lines"], serde_json::json!(["ZOO#Z2#OK"]));
        assert_eq!(value["dispatches"], serde_json::json!([]));
        assert_eq!(zoo.id().as_str(), "Z2");
    }

    #[test]
    fn test_output_color() {
        let mut config = Config::default();
        let inspect = Cli::try_parse_from(["zoo-inspector", "inspect", "zoo.yml"]).unwrap();
        let no_color = Cli::try_parse_from(["zoo-inspector", "inspect", "zoo.yml", "--no-color"]).unwrap();
        let check = Cli::try_parse_from(["zoo-inspector", "check", "zoo.yml"]).unwrap();

        assert!(output_color(&inspect, &config));
        assert!(!output_color(&no_color, &config));
        assert!(output_color(&check, &config));

        config.output.color = false;
        assert!(!output_color(&inspect, &config));
        assert!(!output_color(&check, &config));
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level(None), LevelFilter::Info);
        assert_eq!(parse_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_level(Some("WARN")), LevelFilter::Warn);
        assert_eq!(parse_level(Some("loud")), LevelFilter::Info);
    }
}
