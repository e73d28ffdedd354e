use colored::Colorize;
use econquest_core::RosterConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use super::scenarios::{Scenario, ScenarioCtx};
use super::seeds::SeedInfo;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub seed: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
}

pub struct LogicTester<'a> {
    cfg: &'a RosterConfig,
    verbose: bool,
}

impl<'a> LogicTester<'a> {
    pub const fn new(cfg: &'a RosterConfig, verbose: bool) -> Self {
        Self { cfg, verbose }
    }

    pub fn run_scenario(
        &self,
        scenario: &Scenario,
        seeds: &[SeedInfo],
        iterations: usize,
    ) -> Vec<ScenarioResult> {
        seeds
            .iter()
            .map(|seed| {
                if self.verbose {
                    println!(
                        "🧪 Testing scenario: {} (seed: {})",
                        scenario.key.bright_white(),
                        seed.label()
                    );
                }
                self.run_single_scenario(scenario, seed, iterations)
            })
            .collect()
    }

    fn run_single_scenario(
        &self,
        scenario: &Scenario,
        seed: &SeedInfo,
        iterations: usize,
    ) -> ScenarioResult {
        let mut failures = Vec::new();
        let mut successes = 0;
        let mut elapsed = Duration::ZERO;

        for i in 0..iterations {
            let iteration_seed = seed
                .seed
                .wrapping_add(u64::try_from(i).unwrap_or(u64::MAX));
            let ctx = ScenarioCtx {
                seed: iteration_seed,
                cfg: self.cfg,
            };
            let start = Instant::now();
            let outcome = scenario.run(&ctx);
            elapsed += start.elapsed();
            match outcome {
                Ok(()) => {
                    successes += 1;
                    log::debug!("{} iteration {} passed", scenario.key, i + 1);
                }
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err}", scenario.key, i + 1);
                    failures.push(format!(
                        "Iteration {} (seed {iteration_seed}): {err}",
                        i + 1
                    ));
                }
            }
        }

        let average_duration = if iterations == 0 {
            Duration::ZERO
        } else {
            elapsed / u32::try_from(iterations).unwrap_or(u32::MAX)
        };

        log::info!(
            "{} on {}: {successes}/{iterations} iterations passed",
            scenario.key,
            seed.label()
        );

        ScenarioResult {
            scenario_name: scenario.key.to_string(),
            seed: seed.label(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
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
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}
