// End-to-end checks against the shipped tables
use planet_core::{
    render_selection, sample_frequencies, select_conditions, ConditionSelector, PlanetCondition,
    SessionConfig, TableError, WeightedTable, AMOUNTS, PLANET_CONDITIONS,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn forced_amount_two_yields_two_distinct_conditions() {
    let amounts = WeightedTable::new([(2usize, 1u32)]).unwrap();
    let conditions = WeightedTable::new([
        ("Feeble enemies", 2u32),
        ("Long cycles", 3),
        ("Double iron", 1),
        ("Maze structure", 4),
    ])
    .unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(2);

    let mut seen_pairs = HashSet::new();
    for _ in 0..500 {
        let selection = select_conditions(&amounts, &conditions, &mut rng).unwrap();
        assert_eq!(selection.conditions.len(), 2);
        assert!(selection.conditions.iter().all(|label| conditions.contains(label)));

        let mut pair: Vec<_> = selection.conditions.into_iter().collect();
        pair.sort();
        seen_pairs.insert(pair);
    }

    // All six pairs are reachable
    assert_eq!(seen_pairs.len(), 6);
    assert!(seen_pairs.contains(&vec!["Long cycles", "Maze structure"]));
}

#[test]
fn amount_distribution_matches_weights() {
    let selector = ConditionSelector::default();
    let mut rng = ChaCha8Rng::seed_from_u64(31);
    let trials = 10_000;
    let mut counts = [0u32; 5];

    for _ in 0..trials {
        counts[selector.select(&mut rng).unwrap().count] += 1;
    }

    for (amount, weight) in AMOUNTS.iter() {
        let observed = counts[*amount] as f64 / trials as f64;
        let expected = weight as f64 / AMOUNTS.total_weight();
        assert!((observed - expected).abs() < 0.02, "amount {amount}: {observed} vs {expected}");
    }
}

#[test]
fn maze_structure_is_most_frequent_single_pick() {
    let amounts = WeightedTable::new([(1usize, 1u32)]).unwrap();
    let selector = ConditionSelector::new(&amounts, &*PLANET_CONDITIONS);
    let mut rng = ChaCha8Rng::seed_from_u64(4);

    let maze = (0..10_000)
        .filter(|_| selector.select(&mut rng).unwrap().contains(&PlanetCondition::MazeStructure))
        .count();

    assert!((maze as f64 / 10_000.0 - 0.4).abs() < 0.02);
}

#[test]
fn self_test_percentages_sum_to_hundred() {
    let config = SessionConfig { seed: Some(5), ..Default::default() };
    let mut rng = config.rng();

    let amounts = sample_frequencies(&*AMOUNTS, config.trials, &mut rng).unwrap();
    let conditions = sample_frequencies(&*PLANET_CONDITIONS, config.trials, &mut rng).unwrap();

    assert!((amounts.percent_sum() - 100.0).abs() < 0.01);
    assert!((conditions.percent_sum() - 100.0).abs() < 0.01);
    assert!(amounts.verify_within(config.tolerance).is_ok());
    assert!(conditions.verify_within(config.tolerance).is_ok());
}

#[test]
fn seeded_sessions_render_identically() {
    let selector = ConditionSelector::default();
    let config = SessionConfig { seed: Some(1234), ..Default::default() };

    let first = selector.select(&mut config.rng()).unwrap();
    let second = selector.select(&mut config.rng()).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        render_selection(&first, selector.conditions()),
        render_selection(&second, selector.conditions())
    );
}

#[test]
fn amount_beyond_condition_count_fails() {
    let amounts = WeightedTable::new([(5usize, 1u32)]).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(0);

    let err = select_conditions(&amounts, &*PLANET_CONDITIONS, &mut rng).unwrap_err();
    assert_eq!(err, TableError::InsufficientItems { requested: 5, available: 4 });
}
