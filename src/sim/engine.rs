//! Network simulation engine: the tick loop behind every panel.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::ScenarioConfig;
use crate::model::topology::PHASE_STEPS;
use crate::model::{
    Alert, AlertFeed, GridMetrics, MarketSummary, MetricsSample, NodeStatus, Topology, TradeBook,
};

use super::controls::{ControlPanel, Weather};

/// Maximum number of metric samples kept for the rolling chart.
pub const MAX_HISTORY: usize = 200;

/// Owns all panel state and advances it on a single tick counter.
///
/// Each tick advances the animation phase; every
/// `metrics_interval_ticks` ticks the metric jitter fires and a sample is
/// recorded. All randomness comes from one seeded RNG, so identical
/// scenarios replay identically.
pub struct NetworkSim {
    scenario: ScenarioConfig,
    metrics: GridMetrics,
    topology: Topology,
    trades: TradeBook,
    alerts: AlertFeed,
    controls: ControlPanel,
    rng: StdRng,
    tick: u64,
    history: VecDeque<MetricsSample>,
}

impl NetworkSim {
    /// Builds the engine from a validated scenario configuration.
    pub fn from_scenario(cfg: &ScenarioConfig) -> Self {
        let metrics = GridMetrics {
            generation_kw: cfg.metrics.generation_kw,
            consumption_kw: cfg.metrics.consumption_kw,
            storage_kwh: cfg.metrics.storage_kwh,
            grid_load_pct: cfg.metrics.grid_load_pct,
            efficiency_pct: cfg.metrics.efficiency_pct,
            carbon_saved_kg: cfg.metrics.carbon_saved_kg,
        };
        let trades = TradeBook::new(MarketSummary {
            price_per_kwh: cfg.market.price_per_kwh,
            price_change: cfg.market.price_change,
            volume_kwh: cfg.market.volume_kwh,
        });
        let controls = ControlPanel::from_config(&cfg.controls);

        let mut history = VecDeque::with_capacity(MAX_HISTORY);
        history.push_back(MetricsSample {
            tick: 0,
            metrics: metrics.clone(),
        });

        let mut sim = Self {
            scenario: cfg.clone(),
            metrics,
            topology: Topology::neighborhood(),
            trades,
            alerts: AlertFeed::seeded(),
            controls,
            rng: StdRng::seed_from_u64(cfg.simulation.seed),
            tick: 0,
            history,
        };
        sim.apply_outage_to_topology();
        sim
    }

    /// Advances the simulation by one tick.
    ///
    /// Returns the new metric sample when this tick landed on a metrics
    /// interval, `None` otherwise.
    pub fn tick(&mut self) -> Option<MetricsSample> {
        self.tick += 1;
        let interval = self.scenario.simulation.metrics_interval_ticks.max(1);
        if self.tick % interval != 0 {
            return None;
        }
        self.metrics.jitter(&mut self.rng);
        let sample = MetricsSample {
            tick: self.tick,
            metrics: self.metrics.clone(),
        };
        if self.history.len() >= MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(sample.clone());
        Some(sample)
    }

    /// Current animation phase, cycling 0-99.
    pub fn phase(&self) -> u8 {
        (self.tick % u64::from(PHASE_STEPS)) as u8
    }

    /// Current tick count.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Rebuilds all state from the original scenario. The equivalent of a
    /// page reload: nothing survives.
    pub fn restart(&mut self) {
        *self = Self::from_scenario(&self.scenario.clone());
    }

    // --- control actions -------------------------------------------------

    /// Selects a weather condition. Returns the raised alert.
    pub fn set_weather(&mut self, weather: Weather) -> Alert {
        let alert = self.controls.set_weather(weather, self.tick);
        self.alerts.push(alert.clone());
        alert
    }

    /// Cycles to the next weather condition. Returns the raised alert.
    pub fn cycle_weather(&mut self) -> Alert {
        let alert = self.controls.cycle_weather(self.tick);
        self.alerts.push(alert.clone());
        alert
    }

    /// Flips the power-outage toggle and mirrors it onto the grid node.
    pub fn toggle_outage(&mut self) -> Alert {
        let alert = self.controls.toggle_outage(self.tick);
        self.alerts.push(alert.clone());
        self.apply_outage_to_topology();
        alert
    }

    /// Flips the optimizer toggle. Returns the raised alert.
    pub fn toggle_optimizer(&mut self) -> Alert {
        let alert = self.controls.toggle_optimizer(self.tick);
        self.alerts.push(alert.clone());
        alert
    }

    /// "Runs" an optimization pass: alert only, nothing is optimized.
    pub fn run_optimization(&mut self) -> Alert {
        let alert = self.controls.run_optimization(self.tick);
        self.alerts.push(alert.clone());
        alert
    }

    /// Raises the solar intensity slider by one step.
    pub fn solar_up(&mut self) {
        self.controls.solar_up();
    }

    /// Lowers the solar intensity slider by one step.
    pub fn solar_down(&mut self) {
        self.controls.solar_down();
    }

    /// Raises the peak demand slider by one step.
    pub fn demand_up(&mut self) {
        self.controls.demand_up();
    }

    /// Lowers the peak demand slider by one step.
    pub fn demand_down(&mut self) {
        self.controls.demand_down();
    }

    fn apply_outage_to_topology(&mut self) {
        let down = self.controls.power_outage;
        if let Some(grid) = self.topology.node_mut("grid") {
            grid.status = if down {
                NodeStatus::Offline
            } else {
                NodeStatus::Online
            };
        }
        for conn in &mut self.topology.connections {
            if conn.from == "grid" || conn.to == "grid" {
                conn.active = !down;
            }
        }
    }

    // --- accessors -------------------------------------------------------

    pub fn metrics(&self) -> &GridMetrics {
        &self.metrics
    }

    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    pub fn trades(&self) -> &TradeBook {
        &self.trades
    }

    pub fn alerts(&self) -> &AlertFeed {
        &self.alerts
    }

    pub fn controls(&self) -> &ControlPanel {
        &self.controls
    }

    pub fn history(&self) -> &VecDeque<MetricsSample> {
        &self.history
    }

    pub fn scenario(&self) -> &ScenarioConfig {
        &self.scenario
    }
}
