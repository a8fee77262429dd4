// 확률 분포 자가 테스트 - 경험적 빈도 vs 이론 확률
use crate::error::DiagnosticError;
use crate::table::{Weight, WeightedTable};
use log::warn;
use rand::Rng;
use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Default number of draws per self-test
pub const DEFAULT_TRIALS: u64 = 10_000;

/// Allowed slack when summing rounded percentages
pub const PERCENT_SUM_TOLERANCE: f64 = 0.01;

/// Observed vs expected frequency for one item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyEntry<T> {
    pub item: T,
    pub hits: u64,
    pub observed_percent: f64,
    pub expected_percent: f64,
}

impl<T> FrequencyEntry<T> {
    /// Signed gap in percentage points
    pub fn deviation(&self) -> f64 {
        self.observed_percent - self.expected_percent
    }
}

/// Self-test result for one table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyReport<T> {
    pub table: String,
    pub trials: u64,
    /// One entry per table item, in table order
    pub entries: Vec<FrequencyEntry<T>>,
}

impl<T: fmt::Debug> FrequencyReport<T> {
    pub fn percent_sum(&self) -> f64 {
        self.entries.iter().map(|entry| entry.observed_percent).sum()
    }

    /// Largest absolute gap between observed and expected, in percentage points
    pub fn max_deviation(&self) -> f64 {
        self.entries.iter().map(|entry| entry.deviation().abs()).fold(0.0, f64::max)
    }

    pub fn verify_percent_sum(&self) -> Result<(), DiagnosticError> {
        let sum = self.percent_sum();
        if (sum - 100.0).abs() > PERCENT_SUM_TOLERANCE {
            warn!("{}: percentages sum to {}", self.table, sum);
            return Err(DiagnosticError::PercentSum { sum });
        }
        Ok(())
    }

    /// Every item within `tolerance` percentage points of its theoretical share
    pub fn verify_within(&self, tolerance: f64) -> Result<(), DiagnosticError> {
        match self.entries.iter().find(|entry| entry.deviation().abs() > tolerance) {
            Some(entry) => {
                warn!(
                    "{}: {:?} off by {:.2} pp after {} trials",
                    self.table,
                    entry.item,
                    entry.deviation(),
                    self.trials
                );
                Err(DiagnosticError::Deviation {
                    item: format!("{:?}", entry.item),
                    observed: entry.observed_percent,
                    expected: entry.expected_percent,
                    tolerance,
                })
            }
            None => Ok(()),
        }
    }
}

/// Draw `trials` times from `table` and tally the results
pub fn sample_frequencies<T, W, R>(
    table: &WeightedTable<T, W>,
    trials: u64,
    rng: &mut R,
) -> Result<FrequencyReport<T>, DiagnosticError>
where
    T: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
    R: Rng + ?Sized,
{
    if trials == 0 {
        return Err(DiagnosticError::NoTrials);
    }

    let mut hits = vec![0u64; table.len()];
    for _ in 0..trials {
        hits[table.draw_index(rng)?] += 1;
    }

    let entries = table
        .items()
        .zip(hits)
        .map(|(item, hits)| FrequencyEntry {
            item: item.clone(),
            hits,
            observed_percent: hits as f64 / trials as f64 * 100.0,
            expected_percent: table.probability(item).unwrap_or(0.0) * 100.0,
        })
        .collect();

    Ok(FrequencyReport { table: table.name().to_string(), trials, entries })
}
