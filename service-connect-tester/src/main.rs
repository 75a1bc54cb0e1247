mod common;
mod logic;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;
use std::time::Instant;

use common::scenario::{ScenarioCtx, TestScenario, get_scenario, list_scenarios, scenario_keys};
use common::{artifacts_dir, capture_artifacts, split_csv};
use logic::{LogicTester, ScenarioResult};

#[derive(Debug, Parser)]
#[command(name = "service-connect-tester", version = "0.1.0")]
#[command(about = "Headless scenario runner for the Service Connect view-state machines")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`)
    #[arg(long, default_value = "all")]
    scenarios: String,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// Number of iterations per scenario
    #[arg(long, default_value_t = 1)]
    iterations: usize,

    /// Output report format
    #[arg(long, default_value = "console")]
    #[arg(value_parser = ["json", "markdown", "console"])]
    report: String,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Artifacts directory for failed scenario logs
    #[arg(long, default_value = "target/test-artifacts")]
    artifacts_dir: String,

    /// Load simulation timings from this JSON file instead of the bundled defaults
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let start_time = Instant::now();
    let ctx = load_ctx(&args)?;
    let scenarios = resolve_scenarios(&expand_scenarios(&args.scenarios))?;
    let results = run_scenarios(&args, &ctx, &scenarios);

    write_reports(&args, &results, start_time)?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }

    Ok(())
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:25} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🛠  Service Connect Scenario Tester".bright_cyan().bold());
    println!("{}", "===================================".cyan());
}

fn load_ctx(args: &Args) -> Result<ScenarioCtx> {
    let mut ctx = ScenarioCtx::load_default();
    if let Some(path) = &args.config {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        ctx.config = service_connect_core::SimulationConfig::from_json(&json)?;
        log::info!("simulation timings loaded from {}", path.display());
    }
    Ok(ctx)
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        scenarios.extend(scenario_keys().map(str::to_string));
    }
    scenarios
}

fn resolve_scenarios(names: &[String]) -> Result<Vec<TestScenario>> {
    let (known, unknown): (Vec<_>, Vec<_>) = names
        .iter()
        .map(|name| get_scenario(name).ok_or(name.as_str()))
        .partition(Result::is_ok);
    if !unknown.is_empty() {
        let unknown: Vec<&str> = unknown.into_iter().filter_map(Result::err).collect();
        bail!(
            "unknown scenario(s): {} (see --list-scenarios)",
            unknown.join(", ")
        );
    }
    let scenarios: Vec<TestScenario> = known.into_iter().filter_map(Result::ok).collect();
    if scenarios.is_empty() {
        bail!("no scenarios selected");
    }
    Ok(scenarios)
}

fn run_scenarios(args: &Args, ctx: &ScenarioCtx, scenarios: &[TestScenario]) -> Vec<ScenarioResult> {
    println!("{}", "🧠 Running Scenarios".bright_yellow().bold());
    println!("{}", "-".repeat(30).yellow());

    let tester = LogicTester::new(*ctx, args.verbose);
    let mut results = Vec::new();

    for scenario in scenarios {
        let result = tester.run_scenario(scenario, args.iterations);
        if !result.passed {
            let dir = artifacts_dir(&args.artifacts_dir, scenario.key);
            if let Err(err) = capture_artifacts(&dir, &result) {
                log::warn!("could not write artifacts for {}: {err:#}", scenario.key);
            }
        }
        results.push(result);
    }

    results
}

fn write_reports(args: &Args, results: &[ScenarioResult], start_time: Instant) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;

    match args.report.as_str() {
        "json" => logic::reports::generate_json_report(&mut output_target, results)?,
        "markdown" => logic::reports::generate_markdown_report(&mut output_target, results)?,
        _ => {
            logic::reports::generate_console_report(
                &mut output_target,
                results,
                start_time.elapsed(),
            )?;
            writeln!(&mut output_target)?;
            writeln!(&mut output_target, "🏁 Total time: {:?}", start_time.elapsed())?;
        }
    }

    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            scenarios: "all".to_string(),
            list_scenarios: false,
            iterations: 1,
            report: "json".to_string(),
            verbose: false,
            output: None,
            artifacts_dir: "target/test-artifacts".to_string(),
            config: None,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "service-connect-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    #[test]
    fn all_expands_to_every_scenario_once() {
        let expanded = expand_scenarios("all, booking-flow");
        assert_eq!(expanded.first().map(String::as_str), Some("booking-flow"));
        assert_eq!(expanded.len(), scenario_keys().count() + 1);
        assert!(!expanded.iter().any(|s| s == "all"));
    }

    fn selected(names: &[&str]) -> Vec<TestScenario> {
        let names: Vec<String> = names.iter().map(|s| (*s).to_string()).collect();
        resolve_scenarios(&names).expect("known scenarios")
    }

    #[test]
    fn unknown_scenarios_abort_the_run() {
        let err = resolve_scenarios(&["nope".to_string(), "worker-wizard".to_string()])
            .expect_err("unknown key");
        assert_eq!(
            err.to_string(),
            "unknown scenario(s): nope (see --list-scenarios)"
        );
        let err = resolve_scenarios(&expand_scenarios(" , ")).expect_err("empty selection");
        assert_eq!(err.to_string(), "no scenarios selected");
    }

    #[test]
    fn known_scenarios_run_in_order() {
        let args = base_args();
        let ctx = ScenarioCtx::load_default();
        let results = run_scenarios(&args, &ctx, &selected(&["worker-wizard", "role-isolation"]));
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.passed));
        assert_eq!(results[0].scenario_name, "Worker Wizard");
    }

    #[test]
    fn json_report_is_written_to_file() {
        let mut args = base_args();
        let path = temp_path("json");
        args.output = Some(path.clone());
        let ctx = ScenarioCtx::load_default();
        let results = run_scenarios(&args, &ctx, &selected(&["phone-validation"]));
        write_reports(&args, &results, Instant::now()).expect("write report");
        let parsed: Vec<ScenarioResult> =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("json");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].scenario_name, "Phone Validation");
    }

    #[test]
    fn custom_config_file_overrides_timings() {
        let path = temp_path("config");
        std::fs::write(
            &path,
            r#"{"search_tick_ms":100,"search_step":25,"search_settle_ms":50,
                "tracking_tick_ms":1000,"tracking_step":10,"tracking_initial_progress":0,
                "tracking_initial_eta_min":5,"notice_ttl_ms":1000}"#,
        )
        .expect("write config");
        let mut args = base_args();
        args.config = Some(path);
        let ctx = load_ctx(&args).expect("load");
        assert_eq!(ctx.config.search_duration_ms(), 450);
        let results = run_scenarios(&args, &ctx, &selected(&["emergency-search"]));
        assert!(results[0].passed, "{:?}", results[0].failures);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let mut args = base_args();
        args.config = Some(temp_path("missing"));
        let err = load_ctx(&args).expect_err("missing file");
        assert!(err.to_string().starts_with("failed to read"));
    }
}
