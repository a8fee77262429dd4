// 기본 확률 테이블 (정적 리터럴)
use crate::condition::PlanetCondition;
use crate::table::WeightedTable;
use once_cell::sync::Lazy;

pub type AmountsTable = WeightedTable<usize, u32>;
pub type ConditionsTable = WeightedTable<PlanetCondition, u32>;

/// How many conditions to apply -> weight
pub const AMOUNT_WEIGHTS: [(usize, u32); 5] = [
    //  amount  weight
    (0, 4),
    (1, 4),
    (2, 3),
    (3, 2),
    (4, 1),
];

/// Planet condition -> weight
pub const CONDITION_WEIGHTS: [(PlanetCondition, u32); 4] = [
    (PlanetCondition::FeebleEnemies, 2),
    (PlanetCondition::LongCycles, 3),
    (PlanetCondition::DoubleIron, 1),
    (PlanetCondition::MazeStructure, 4),
];

pub static AMOUNTS: Lazy<AmountsTable> = Lazy::new(|| {
    WeightedTable::new(AMOUNT_WEIGHTS)
        .expect("AMOUNT_WEIGHTS literal is valid")
        .with_name("AMOUNTS")
});

pub static PLANET_CONDITIONS: Lazy<ConditionsTable> = Lazy::new(|| {
    WeightedTable::new(CONDITION_WEIGHTS)
        .expect("CONDITION_WEIGHTS literal is valid")
        .with_name("PLANET_CONDITIONS")
});
