use std::process::ExitCode;

use bfprt::selection::battery::{run_battery, BatteryConfig, ScenarioOutcome};
use bfprt::{PivotStrategy, Selector};
use env_logger::Env;

const DEFAULT_LOG_FILTER: &str = "info";

fn print_outcome(outcome: &ScenarioOutcome) {
    let mark = if outcome.passed() { "ok" } else { "FAILED" };
    print!(
        "{:<40} n={:<7} k={:<7} result={:<7} {:>10.4} ms",
        outcome.name,
        outcome.len,
        outcome.k,
        outcome.value,
        outcome.elapsed.as_secs_f64() * 1000.0
    );
    match outcome.expected {
        Some(expected) if expected != outcome.value => {
            println!("  {} (expected {})", mark, expected)
        }
        _ => println!("  {}", mark),
    }
}

fn logger(env: Env) -> env_logger::Builder {
    env_logger::Builder::from_env(env.default_filter_or(DEFAULT_LOG_FILTER))
}

fn main() -> ExitCode {
    logger(Env::default()).init();

    let config = BatteryConfig::default();
    let mut failures = 0;

    for strategy in [PivotStrategy::NestedMedians, PivotStrategy::SelectedMedian] {
        println!("========================================");
        println!("Linear-time selection, {:?}", strategy);
        println!("========================================");

        let outcomes = match run_battery(&config, &Selector::new(strategy)) {
            Ok(outcomes) => outcomes,
            Err(e) => {
                eprintln!("battery aborted: {}", e);
                return ExitCode::FAILURE;
            }
        };
        for outcome in &outcomes {
            print_outcome(outcome);
        }
        let failed = outcomes.iter().filter(|o| !o.passed()).count();
        println!("{} scenarios, {} failed\n", outcomes.len(), failed);
        failures += failed;
    }

    if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
