//! Fixed and generated scenarios for the `select_battery` driver.

use std::time::{Duration, Instant};

use log::{info, warn};

use super::linear_select::Selector;
use super::workload::{generate, probe_ranks, verify_kth, Distribution};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub name: String,
    pub data: Vec<i64>,
    pub k: usize,
    pub expected: Option<i64>,
}

impl Scenario {
    pub fn new<S: Into<String>>(name: S, data: Vec<i64>, k: usize, expected: Option<i64>) -> Self {
        Scenario {
            name: name.into(),
            data,
            k,
            expected,
        }
    }
}

/// Result of running a [`Scenario`].
#[derive(Debug, Clone)]
pub struct ScenarioOutcome {
    pub name: String,
    pub len: usize,
    pub k: usize,
    pub value: i64,
    pub expected: Option<i64>,
    /// Whether `value` matches the k-th element of a sorted copy.
    pub verified: bool,
    pub elapsed: Duration,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.verified && self.expected.map_or(true, |e| e == self.value)
    }
}

/// Sizes and seeds for the generated part of the battery.
#[derive(Debug, Clone)]
pub struct BatteryConfig {
    /// `(n, seed)` pairs for uniformly random inputs.
    pub random_runs: Vec<(usize, u64)>,
    /// Exclusive upper bound of random values.
    pub random_max: i64,
    /// `(distribution, n, seed)` triples for the structured inputs.
    pub special_runs: Vec<(Distribution, usize, u64)>,
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            random_runs: vec![
                (100, 12345),
                (500, 23456),
                (1_000, 34567),
                (5_000, 45678),
                (10_000, 56789),
                (20_000, 67890),
                (50_000, 78901),
                (100_000, 89012),
            ],
            random_max: 1000,
            special_runs: vec![
                (Distribution::ManyDuplicates, 1_000, 99999),
                (Distribution::Ascending, 5_000, 0),
                (Distribution::Descending, 5_000, 0),
                (Distribution::Bimodal, 2_000, 88888),
            ],
        }
    }
}

/// The hand-written scenarios, each with its expected answer where it is easy to state.
pub fn fixed_scenarios() -> Vec<Scenario> {
    let zigzag: Vec<i64> = (1..=15).chain((1..=15).rev()).collect();
    let pseudo_random: Vec<i64> = (0..100).map(|i| (i * 7 + 13) % 1000).collect();

    vec![
        Scenario::new("basic", vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3], 5, Some(3)),
        Scenario::new("sorted", (1..=10).collect(), 3, Some(3)),
        Scenario::new("reversed", (1..=10).rev().collect(), 7, Some(7)),
        Scenario::new("all equal", vec![5; 8], 4, Some(5)),
        Scenario::new("single element", vec![42], 1, Some(42)),
        Scenario::new("two elements", vec![2, 1], 1, Some(1)),
        Scenario::new("minimum", vec![9, 3, 7, 1, 5, 8, 2, 6, 4], 1, Some(1)),
        Scenario::new("maximum", vec![9, 3, 7, 1, 5, 8, 2, 6, 4], 9, Some(9)),
        Scenario::new("reversed 50", (1..=50).rev().collect(), 25, Some(25)),
        Scenario::new("all equal 100", vec![42; 100], 50, Some(42)),
        Scenario::new("zigzag 30", zigzag, 15, None),
        Scenario::new(
            "negatives",
            vec![100, -50, 200, -100, 0, 150, -25, 75, -75, 25],
            5,
            None,
        ),
        Scenario::new("sorted 200", (1..=200).collect(), 100, Some(100)),
        Scenario::new("reversed 200", (1..=200).rev().collect(), 100, Some(100)),
        Scenario::new("median of 100", pseudo_random, 50, None),
        Scenario::new("second of 500", (1..=500).rev().collect(), 2, Some(2)),
        Scenario::new("second largest of 500", (1..=500).collect(), 499, Some(499)),
    ]
}

/// Runs `scenario` on a copy of its data and verifies the answer against a full sort.
pub fn run_scenario(scenario: &Scenario, selector: &Selector) -> Result<ScenarioOutcome> {
    let mut work = scenario.data.clone();

    let start = Instant::now();
    let value = selector.select_kth(&mut work, scenario.k)?;
    let elapsed = start.elapsed();

    let outcome = ScenarioOutcome {
        name: scenario.name.clone(),
        len: scenario.data.len(),
        k: scenario.k,
        value,
        expected: scenario.expected,
        verified: verify_kth(&scenario.data, scenario.k, &value),
        elapsed,
    };
    if outcome.passed() {
        info!("{}: k={} -> {} in {:?}", outcome.name, outcome.k, value, elapsed);
    } else {
        warn!(
            "{}: k={} -> {} (expected {:?}, verified {})",
            outcome.name, outcome.k, value, outcome.expected, outcome.verified
        );
    }
    Ok(outcome)
}

pub fn run_distribution(
    dist: Distribution,
    n: usize,
    seed: u64,
    selector: &Selector,
) -> Result<Vec<ScenarioOutcome>> {
    let data = generate(dist, n, seed);
    probe_ranks(n)
        .into_iter()
        .map(|k| {
            let scenario = Scenario::new(
                format!("{} (n={}, seed={})", dist.name(), n, seed),
                data.clone(),
                k,
                None,
            );
            run_scenario(&scenario, selector)
        })
        .collect()
}

pub fn run_battery(config: &BatteryConfig, selector: &Selector) -> Result<Vec<ScenarioOutcome>> {
    let mut outcomes = fixed_scenarios()
        .iter()
        .map(|scenario| run_scenario(scenario, selector))
        .collect::<Result<Vec<_>>>()?;

    let random = Distribution::Random {
        max: config.random_max,
    };
    for &(n, seed) in &config.random_runs {
        outcomes.extend(run_distribution(random, n, seed, selector)?);
    }
    for &(dist, n, seed) in &config.special_runs {
        outcomes.extend(run_distribution(dist, n, seed, selector)?);
    }
    Ok(outcomes)
}
