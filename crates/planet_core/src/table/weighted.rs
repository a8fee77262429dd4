// 가중치 테이블 - 단일 뽑기 / 중복 없는 다중 뽑기
use super::weight::Weight;
use crate::error::{Result, TableError};
use log::debug;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Ordered mapping from item to weight.
///
/// Items are unique, weights are non-negative and their total fits in `W`
/// (finite for floats). Empty or all-zero tables can be built, but every
/// draw from them fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedTable<T, W = u32> {
    name: String,
    entries: Vec<(T, W)>,
}

impl<T, W> WeightedTable<T, W>
where
    T: Eq + Hash + Clone + fmt::Debug,
    W: Weight,
{
    /// Build a table, rejecting duplicate items, negative / NaN / infinite weights
    /// and totals that do not fit in `W`
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (T, W)>,
    {
        let mut seen = HashSet::new();
        let mut checked = Vec::new();
        let mut total = W::default();

        for (item, weight) in entries {
            let non_negative = matches!(
                weight.partial_cmp(&W::default()),
                Some(Ordering::Greater | Ordering::Equal)
            );
            if !non_negative || !weight.to_f64().is_finite() {
                return Err(TableError::InvalidWeight {
                    item: format!("{:?}", item),
                    weight: weight.to_string(),
                });
            }
            if !seen.insert(item.clone()) {
                return Err(TableError::DuplicateItem { item: format!("{:?}", item) });
            }
            total = total.checked_sum(weight).ok_or_else(|| {
                TableError::invalid_table(format!("total weight overflows at item {:?}", item))
            })?;
            checked.push((item, weight));
        }

        Ok(Self { name: String::new(), entries: checked })
    }

    /// Attach a display name (used in self-test headers)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        if self.name.is_empty() {
            "table"
        } else {
            &self.name
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(item, _)| item)
    }

    /// (item, weight) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&T, W)> {
        self.entries.iter().map(|(item, weight)| (item, *weight))
    }

    pub fn contains(&self, item: &T) -> bool {
        self.entries.iter().any(|(candidate, _)| candidate == item)
    }

    pub fn weight(&self, item: &T) -> Option<W> {
        self.entries.iter().find(|(candidate, _)| candidate == item).map(|(_, weight)| *weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.entries.iter().map(|(_, weight)| weight.to_f64()).sum()
    }

    /// Theoretical draw probability of `item` (`None` if absent or the table is undrawable)
    pub fn probability(&self, item: &T) -> Option<f64> {
        let total = self.total_weight();
        if total <= 0.0 {
            return None;
        }
        self.weight(item).map(|weight| weight.to_f64() / total)
    }

    /// Single weighted draw
    pub fn weighted_draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
        let index = self.draw_index(rng)?;
        let item = &self.entries[index].0;
        debug!("{}: drew {:?}", self.name(), item);
        Ok(item)
    }

    /// Draw `n` distinct items without replacement.
    ///
    /// Each draw is weighted over the items not yet chosen, so later picks are
    /// reweighted over the shrinking remainder. Asking for every item returns
    /// the whole table without touching the RNG.
    pub fn weighted_draw_distinct<R: Rng + ?Sized>(
        &self,
        n: usize,
        rng: &mut R,
    ) -> Result<HashSet<T>> {
        let available = self.entries.len();
        if n > available {
            return Err(TableError::InsufficientItems { requested: n, available });
        }
        if n == 0 {
            return Ok(HashSet::new());
        }
        if n == available {
            return Ok(self.items().cloned().collect());
        }

        let mut remaining = self.entries.clone();
        let mut picked = HashSet::with_capacity(n);

        while picked.len() < n {
            let index = pick_index(&remaining, rng)?;
            let (item, _) = remaining.remove(index);
            debug!("{}: distinct draw {}/{} -> {:?}", self.name(), picked.len() + 1, n, item);
            picked.insert(item);
        }

        Ok(picked)
    }

    pub(crate) fn draw_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<usize> {
        pick_index(&self.entries, rng)
    }
}

fn pick_index<T, W, R>(entries: &[(T, W)], rng: &mut R) -> Result<usize>
where
    W: Weight,
    R: Rng + ?Sized,
{
    let index = WeightedIndex::<W>::new(entries.iter().map(|(_, weight)| *weight))?;
    Ok(index.sample(rng))
}
