use anyhow::{Context, Result};
use chrono::Utc;
use std::{fs, path::Path};

use crate::logic::ScenarioResult;

pub fn artifacts_dir(base: &str, scenario: &str) -> String {
    let ts = Utc::now().format("%Y%m%dT%H%M%S");
    format!("{base}/{scenario}/{ts}")
}

/// Dump a failed scenario's result and failure log under `dir`.
pub fn capture_artifacts(dir: &str, result: &ScenarioResult) -> Result<()> {
    let failures = result.failures.join("\n");
    write_artifact_files(Path::new(dir), &serde_json::to_value(result)?, &failures)
}

fn write_artifact_files(dir: &Path, result: &serde_json::Value, failures: &str) -> Result<()> {
    fs::create_dir_all(dir).context("creating artifacts dir")?;
    let payload = serde_json::to_vec_pretty(result).context("encoding result")?;
    fs::write(dir.join("result.json"), payload).context("writing result.json")?;
    fs::write(dir.join("failures.txt"), failures).context("writing failures.txt")?;
    Ok(())
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn artifacts_dir_includes_scenario() {
        let dir = artifacts_dir("target/out", "emergency-search");
        assert!(dir.starts_with("target/out/emergency-search/"));
    }

    #[test]
    fn write_artifact_files_writes_expected_payloads() {
        let base = std::env::temp_dir().join(format!(
            "service-connect-artifacts-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ));
        let result = json!({ "scenario_name": "Booking Flow", "passed": false });
        write_artifact_files(&base, &result, "worker 3 was selectable")
            .expect("write artifacts");

        assert!(base.join("result.json").exists());
        let failures = fs::read_to_string(base.join("failures.txt")).expect("read failures");
        assert_eq!(failures, "worker 3 was selectable");
    }
}
