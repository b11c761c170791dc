//! Shared test fixtures for integration tests.

use gridmesh::config::ScenarioConfig;
use gridmesh::sim::NetworkSim;

/// Baseline scenario engine (seed 42, jitter every 20 ticks).
pub fn baseline_sim() -> NetworkSim {
    NetworkSim::from_scenario(&ScenarioConfig::baseline())
}

/// Engine with jitter applied on every tick, for dense histories.
pub fn fast_sim(seed: u64) -> NetworkSim {
    let mut cfg = ScenarioConfig::baseline();
    cfg.simulation.seed = seed;
    cfg.simulation.metrics_interval_ticks = 1;
    NetworkSim::from_scenario(&cfg)
}
