// 컨디션 선택 - 개수 뽑기 후 중복 없는 컨디션 뽑기
use crate::condition::PlanetCondition;
use crate::error::{Result, TableError};
use crate::table::{Weight, WeightedTable};
use crate::tables::{AmountsTable, ConditionsTable, AMOUNTS, PLANET_CONDITIONS};
use log::info;
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

/// Result of one selection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConditionSelection<C = PlanetCondition>
where
    C: Eq + Hash,
{
    /// Amount drawn from the amounts table
    pub count: usize,
    pub conditions: HashSet<C>,
}

impl<C: Eq + Hash> ConditionSelection<C> {
    pub fn none() -> Self {
        Self { count: 0, conditions: HashSet::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    pub fn contains(&self, condition: &C) -> bool {
        self.conditions.contains(condition)
    }

    /// Chosen conditions in the order the table lists them
    pub fn in_table_order<'t, W>(&self, table: &'t WeightedTable<C, W>) -> Vec<&'t C>
    where
        C: Clone + fmt::Debug,
        W: Weight,
    {
        table.items().filter(|condition| self.conditions.contains(*condition)).collect()
    }
}

/// Draw a count from `amounts`, then that many distinct conditions.
///
/// A count of zero returns an empty selection without drawing from `conditions`.
pub fn select_conditions<C, WA, WC, R>(
    amounts: &WeightedTable<usize, WA>,
    conditions: &WeightedTable<C, WC>,
    rng: &mut R,
) -> Result<ConditionSelection<C>>
where
    C: Eq + Hash + Clone + fmt::Debug,
    WA: Weight,
    WC: Weight,
    R: Rng + ?Sized,
{
    let count = *amounts.weighted_draw(rng)?;
    if count == 0 {
        info!("No planet conditions");
        return Ok(ConditionSelection::none());
    }

    let chosen = conditions.weighted_draw_distinct(count, rng)?;
    info!("Selected {} planet condition(s): {:?}", count, chosen);

    Ok(ConditionSelection { count, conditions: chosen })
}

/// Amounts and conditions tables bundled for repeated selection
#[derive(Debug, Clone, Copy)]
pub struct ConditionSelector<'a, C = PlanetCondition> {
    amounts: &'a AmountsTable,
    conditions: &'a WeightedTable<C, u32>,
}

impl<'a, C> ConditionSelector<'a, C>
where
    C: Eq + Hash + Clone + fmt::Debug,
{
    pub fn new(amounts: &'a AmountsTable, conditions: &'a WeightedTable<C, u32>) -> Self {
        Self { amounts, conditions }
    }

    pub fn amounts(&self) -> &'a AmountsTable {
        self.amounts
    }

    pub fn conditions(&self) -> &'a WeightedTable<C, u32> {
        self.conditions
    }

    /// Fail fast if any reachable amount exceeds the number of conditions
    pub fn validate(&self) -> Result<()> {
        let available = self.conditions.len();
        match self.amounts.iter().filter(|(_, weight)| *weight > 0).map(|(amount, _)| *amount).max()
        {
            None => Err(TableError::invalid_table("amounts table has no positive weight")),
            Some(requested) if requested > available => {
                Err(TableError::InsufficientItems { requested, available })
            }
            Some(_) => Ok(()),
        }
    }

    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<ConditionSelection<C>> {
        select_conditions(self.amounts, self.conditions, rng)
    }
}

impl Default for ConditionSelector<'static, PlanetCondition> {
    fn default() -> Self {
        let conditions: &'static ConditionsTable = &PLANET_CONDITIONS;
        Self::new(&*AMOUNTS, conditions)
    }
}
