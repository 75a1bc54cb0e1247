use std::process::Command;

fn temp_path(label: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!(
        "service-connect-cli-{label}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos()
    ))
}

#[test]
fn cli_list_scenarios_writes_output() {
    let exe = env!("CARGO_BIN_EXE_service-connect-tester");
    let output_path = temp_path("list");
    let status = Command::new(exe)
        .args(["--list-scenarios", "--output"])
        .arg(&output_path)
        .status()
        .expect("run cli");
    assert!(status.success());
    let content = std::fs::read_to_string(output_path).expect("read output");
    assert!(content.contains("Available scenarios"));
    assert!(content.contains("emergency-search"));
    assert!(content.contains("role-isolation"));
}

#[test]
fn cli_runs_all_scenarios_with_markdown_report() {
    let exe = env!("CARGO_BIN_EXE_service-connect-tester");
    let output_path = temp_path("run");
    let output = Command::new(exe)
        .args(["--report", "markdown", "--iterations", "2", "--output"])
        .arg(&output_path)
        .output()
        .expect("run cli");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Service Connect Scenario Tester"));
    let report = std::fs::read_to_string(output_path).expect("read report");
    assert!(report.contains("- **Failed**: 0"));
    assert!(report.contains("Tracking Unmount"));
}

#[test]
fn cli_rejects_unknown_scenario_keys() {
    let exe = env!("CARGO_BIN_EXE_service-connect-tester");
    let output = Command::new(exe)
        .args(["--scenarios", "booking-flow,emergncy-search"])
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unknown scenario(s): emergncy-search"));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains("Running Scenarios"));
}

#[test]
fn cli_rejects_a_zero_search_step() {
    let exe = env!("CARGO_BIN_EXE_service-connect-tester");
    let config_path = temp_path("zero-step");
    std::fs::write(&config_path, r#"{ "search_step": 0 }"#).expect("write config");
    let output = Command::new(exe)
        .args(["--scenarios", "emergency-search", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("search_step must be greater than zero"));
}

#[test]
fn cli_fails_on_a_broken_config() {
    let exe = env!("CARGO_BIN_EXE_service-connect-tester");
    let config_path = temp_path("config");
    std::fs::write(&config_path, "{ not json").expect("write config");
    let output = Command::new(exe)
        .args(["--scenarios", "emergency-search", "--config"])
        .arg(&config_path)
        .output()
        .expect("run cli");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to parse simulation.json"));
}
