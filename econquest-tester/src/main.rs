mod common;
mod logic;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use econquest_core::{Dashboard, RosterConfig};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use common::{OutputTarget, split_csv};
use logic::reports::{generate_console_report, generate_json_report, generate_markdown_report};
use logic::{LogicTester, ScenarioResult, SeedInfo, get_scenario, list_scenarios, resolve_seed_inputs};

#[derive(Debug, Parser)]
#[command(name = "econquest-tester", version = "0.1.0")]
#[command(about = "Roster and catalog QA sweeps for the EconQuest dashboard")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Seeds to run (comma-separated integers or roster codes like KEYNES42)
    #[arg(long, default_value = "1337")]
    seeds: String,

    /// Number of iterations per scenario and seed
    #[arg(long, default_value_t = 10)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Roster generator settings as a JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the generated dashboard for each seed as JSON and exit
    #[arg(long)]
    dump: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_scenarios {
        let mut out = OutputTarget::new(args.output.clone())?;
        writeln!(out, "Available scenarios:")?;
        for (key, description) in list_scenarios() {
            writeln!(out, "  {key:20} - {description}")?;
        }
        out.flush()?;
        return Ok(());
    }

    let cfg = load_config(args.config.as_deref())?;
    let seeds = resolve_seed_inputs(&split_csv(&args.seeds))?;

    if args.dump {
        return dump_dashboards(&args, &seeds, &cfg);
    }

    announce_banner();

    let start_time = Instant::now();
    let scenarios = expand_scenarios(&args.scenarios);
    let results = run_scenarios(&args, &scenarios, &seeds, &cfg)?;
    write_report(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn announce_banner() {
    println!("{}", "📈 EconQuest Roster Tester".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<RosterConfig> {
    let Some(path) = path else {
        return Ok(RosterConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg = RosterConfig::from_json(&raw)
        .with_context(|| format!("invalid roster config {}", path.display()))?;
    log::info!("loaded roster config from {}", path.display());
    Ok(cfg)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for (key, _) in list_scenarios() {
            if !scenarios.iter().any(|s| s == key) {
                scenarios.push(key.to_string());
            }
        }
    }
    scenarios
}

fn run_scenarios(
    args: &Args,
    scenarios: &[String],
    seeds: &[SeedInfo],
    cfg: &RosterConfig,
) -> Result<Vec<ScenarioResult>> {
    let tester = LogicTester::new(cfg, args.verbose);
    let mut results = Vec::new();
    for name in scenarios {
        let Some(scenario) = get_scenario(name) else {
            bail!("unknown scenario '{name}' (see --list-scenarios)");
        };
        results.extend(tester.run_scenario(&scenario, seeds, args.iterations));
    }
    Ok(results)
}

fn dump_dashboards(args: &Args, seeds: &[SeedInfo], cfg: &RosterConfig) -> Result<()> {
    let mut out = OutputTarget::new(args.output.clone())?;
    for info in seeds {
        let dashboard = Dashboard::generate(info.seed, cfg);
        log::debug!("dumping roster for {}", info.label());
        serde_json::to_writer_pretty(&mut out, &dashboard)
            .with_context(|| format!("failed to serialize dashboard for {}", info.label()))?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_report(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut out = OutputTarget::new(args.output.clone())?;
    match args.report.as_str() {
        "json" => generate_json_report(&mut out, results)?,
        "markdown" => generate_markdown_report(&mut out, results)?,
        _ => generate_console_report(&mut out, results, start_time.elapsed())?,
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_every_scenario_once() {
        let expanded = expand_scenarios("roster-code,all");
        assert_eq!(expanded[0], "roster-code");
        assert_eq!(expanded.len(), list_scenarios().len());
    }

    #[test]
    fn explicit_scenarios_pass_through() {
        assert_eq!(
            expand_scenarios("rank-extremes, catalog-stable"),
            vec!["rank-extremes", "catalog-stable"]
        );
    }

    #[test]
    fn missing_config_path_is_default() {
        assert_eq!(load_config(None).unwrap(), RosterConfig::default());
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::parse_from(["econquest-tester"]);
        assert_eq!(args.scenarios, "all");
        assert_eq!(args.seeds, "1337");
        assert_eq!(args.iterations, 10);
        assert_eq!(args.report, "console");
        assert!(!args.dump);
    }
}
