//! Planet Conditions CLI
//!
//! 확률 자가 테스트 후 이번 세션의 행성 컨디션을 뽑는다.

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use planet_core::{
    render_selection, sample_frequencies, selection_json, Banner, ConditionSelector, SessionConfig,
    Weight, WeightedTable, AMOUNTS, PLANET_CONDITIONS,
};
use rand::Rng;
use std::fmt;
use std::hash::Hash;

#[derive(Parser, Debug)]
#[command(name = "planet_conditions")]
#[command(about = "Roll random planet conditions for a Dome Keeper session", long_about = None)]
struct Cli {
    /// Fixed RNG seed for a reproducible roll
    #[arg(long)]
    seed: Option<u64>,

    /// Draws per table in the probability self-test
    #[arg(long, default_value_t = planet_core::diagnostics::DEFAULT_TRIALS)]
    trials: u64,

    /// Skip the probability self-test
    #[arg(long)]
    skip_self_test: bool,

    /// Allowed per-item deviation in the self-test, in percentage points
    #[arg(long, default_value_t = planet_core::config::DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Print the selection as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_config(self) -> SessionConfig {
        SessionConfig {
            seed: self.seed,
            trials: self.trials,
            self_test: !self.skip_self_test,
            tolerance: self.tolerance,
            json: self.json,
        }
    }
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();

    let config = Cli::parse().into_config();
    config.validate().context("Invalid session configuration")?;
    debug!("Session config: {:?}", config);

    let mut rng = config.rng();

    if config.self_test {
        run_self_test(&*AMOUNTS, &config, &mut rng)?;
        run_self_test(&*PLANET_CONDITIONS, &config, &mut rng)?;
    }

    let selector = ConditionSelector::default();
    selector.validate().context("Default tables are inconsistent")?;

    println!("{}", Banner("Detecting planet conditions"));
    let selection = selector.select(&mut rng).context("Failed to select planet conditions")?;
    info!("Rolled {} condition(s)", selection.count);

    if config.json {
        println!("{}", selection_json(&selection, selector.conditions())?);
    } else {
        print!("{}", render_selection(&selection, selector.conditions()));
    }
    println!();

    Ok(())
}

fn run_self_test<T, W, R>(
    table: &WeightedTable<T, W>,
    config: &SessionConfig,
    rng: &mut R,
) -> Result<()>
where
    T: Eq + Hash + Clone + fmt::Debug + fmt::Display,
    W: Weight,
    R: Rng + ?Sized,
{
    println!("{}", Banner(&format!("Testing probabilities: {}", table.name())));

    let report = sample_frequencies(table, config.trials, rng)
        .with_context(|| format!("Self-test failed for {}", table.name()))?;
    print!("{}", report);

    report.verify_percent_sum()?;
    if let Err(err) = report.verify_within(config.tolerance) {
        println!("⚠️  {}", err);
    }
    println!();

    Ok(())
}
