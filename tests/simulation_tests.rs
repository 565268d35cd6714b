//! Simulation lifecycle tests: initialization, seeding, reset, queries.

use rust_life::{Cadence, LifeError, Simulation, SimulationConfig};

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_initialize_from_toml_config() {
    let config = SimulationConfig::from_toml(
        r#"
        rows = 12
        columns = 30
        spawn_probability = 0.25
        seed = 99
        "#,
    )
    .unwrap();

    let sim = Simulation::from_config(&config).unwrap();
    assert_eq!(sim.dimensions(), (12, 30));
    assert_eq!(sim.seed(), Some(99));
    assert_eq!(sim.config(), &config);
}

#[test]
fn test_spawn_probability_extremes() {
    let empty = Simulation::initialize(9, 9, 0.0, Some(1)).unwrap();
    assert_eq!(empty.population(), 0);

    let full = Simulation::initialize(9, 9, 1.0, Some(1)).unwrap();
    assert_eq!(full.population(), 81);
}

#[test]
fn test_spawn_probability_roughly_respected() {
    let sim = Simulation::initialize(100, 100, 0.5, Some(31337)).unwrap();
    let population = sim.population();
    assert!((4_000..6_000).contains(&population), "population {population}");
}

#[test]
fn test_invalid_configuration_errors() {
    for (rows, columns, p) in [(0, 10, 0.5), (10, 0, 0.5), (10, 10, -0.01), (10, 10, 1.01)] {
        let err = Simulation::initialize(rows, columns, p, None).unwrap_err();
        assert!(
            matches!(err, LifeError::InvalidConfiguration(_)),
            "({rows}, {columns}, {p}) gave {err}"
        );
    }
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_same_seed_same_grid() {
    let a = Simulation::initialize(20, 20, 0.5, Some(42)).unwrap();
    let b = Simulation::initialize(20, 20, 0.5, Some(42)).unwrap();
    assert_eq!(a.grid(), b.grid());
}

#[test]
fn test_different_seed_different_grid() {
    let a = Simulation::initialize(20, 20, 0.5, Some(1)).unwrap();
    let b = Simulation::initialize(20, 20, 0.5, Some(2)).unwrap();
    assert_ne!(a.grid(), b.grid());
}

#[test]
fn test_same_seed_same_trajectory() {
    let mut a = Simulation::initialize(24, 24, 0.4, Some(8)).unwrap();
    let mut b = Simulation::initialize(24, 24, 0.4, Some(8)).unwrap();

    for _ in 0..50 {
        assert_eq!(a.tick(), b.tick());
        assert_eq!(a.grid(), b.grid());
    }
}

// =============================================================================
// Reset
// =============================================================================

#[test]
fn test_reset_matches_fresh_initialize() {
    let mut sim = Simulation::initialize(15, 15, 0.5, Some(123)).unwrap();
    sim.run_until_stable(25);

    sim.reset(10, 12, 0.3).unwrap();
    let fresh = Simulation::initialize(10, 12, 0.3, Some(123)).unwrap();

    assert_eq!(sim.grid(), fresh.grid());
    assert_eq!(sim.status(), fresh.status());
    assert_eq!(sim.history_len(), 0);
}

#[test]
fn test_reset_rejects_invalid_parameters() {
    let mut sim = Simulation::initialize(5, 5, 0.5, Some(4)).unwrap();
    assert!(matches!(
        sim.reset(0, 5, 0.5),
        Err(LifeError::InvalidConfiguration(_))
    ));
    assert_eq!(sim.dimensions(), (5, 5));
}

#[test]
fn test_cadence_change_restarts_simulation() {
    let mut cadence = Cadence::new();
    let mut sim = Simulation::initialize(16, 16, 0.5, Some(55)).unwrap();
    let initial = sim.grid().clone();
    for _ in 0..5 {
        sim.tick();
    }

    if cadence.faster() {
        sim.restart().unwrap();
    }

    assert_eq!(sim.generation(), 0);
    assert_eq!(sim.grid(), &initial);
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn test_cell_queries_match_grid() {
    let sim = Simulation::initialize(6, 11, 0.5, Some(17)).unwrap();
    let (rows, columns) = sim.dimensions();

    for row in 0..rows {
        for col in 0..columns {
            assert_eq!(sim.cell_is_alive(row, col).unwrap(), sim.grid().get(row, col).unwrap());
        }
    }

    let err = sim.cell_is_alive(rows, 0).unwrap_err();
    assert!(matches!(err, LifeError::OutOfRange { row: 6, col: 0, .. }));
    assert!(sim.cell_is_alive(0, columns).is_err());
}

#[test]
fn test_generation_counts_every_tick_until_stable() {
    let mut sim = Simulation::initialize(20, 20, 0.5, Some(6)).unwrap();
    let mut expected = 0;
    while !sim.is_stable() && expected < 2_000 {
        expected += 1;
        assert_eq!(sim.tick().generation_count, expected);
    }
    assert_eq!(sim.generation(), expected);
}
