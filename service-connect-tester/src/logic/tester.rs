use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::common::scenario::{ScenarioCtx, TestScenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct LogicTester {
    ctx: ScenarioCtx,
    verbose: bool,
}

impl LogicTester {
    pub const fn new(ctx: ScenarioCtx, verbose: bool) -> Self {
        Self { ctx, verbose }
    }

    pub fn run_scenario(&self, scenario: &TestScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({})",
                scenario.name.bright_white(),
                scenario.key
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::new();

        for i in 0..iterations {
            let start_time = Instant::now();
            match scenario.run(&self.ctx) {
                Ok(()) => {
                    successes += 1;
                    let duration = start_time.elapsed();
                    performance_data.push(duration);
                    if self.verbose {
                        println!("  ✅ Iteration {}/{} passed ({duration:?})", i + 1, iterations);
                    }
                }
                Err(err) => {
                    let message = format!("Iteration {}: {err:#}", i + 1);
                    if self.verbose {
                        println!("  ❌ {}", message.clone().red());
                    }
                    failures.push(message);
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name.to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_millis().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u128::deserialize(deserializer)?;
        Ok(Duration::from_millis(u64::try_from(millis).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let millis: Vec<u128> = durations.iter().map(Duration::as_millis).collect();
        millis.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis_vec = Vec::<u128>::deserialize(deserializer)?;
        Ok(millis_vec
            .into_iter()
            .map(|m| Duration::from_millis(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::scenario::get_scenario;

    #[test]
    fn bundled_scenario_passes_every_iteration() {
        let tester = LogicTester::new(ScenarioCtx::load_default(), false);
        let scenario = get_scenario("emergency-search").expect("scenario");
        let result = tester.run_scenario(&scenario, 3);
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
    }

    #[test]
    fn failures_are_reported_per_iteration() {
        let tester = LogicTester::new(ScenarioCtx::load_default(), false);
        let scenario = TestScenario::new("always-fails", "Always Fails", "", |_| {
            anyhow::bail!("search never settled")
        });
        let result = tester.run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.failures.len(), 2);
        assert_eq!(result.failures[0], "Iteration 1: search never settled");
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn durations_serialize_as_millis() {
        let result = ScenarioResult {
            scenario_name: "Booking Flow".into(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_millis(12),
            performance_data: vec![Duration::from_millis(12)],
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["average_duration"], 12);
        assert_eq!(json["performance_data"][0], 12);
    }
}
