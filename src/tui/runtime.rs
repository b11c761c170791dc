//! Dashboard runner and TUI application state.

use std::path::Path;
use std::time::{Duration, Instant};

use crate::config::ScenarioConfig;
use crate::io::export::export_csv;
use crate::model::{Alert, Severity};
use crate::sim::NetworkSim;

/// Tick interval options in milliseconds (slowest → fastest).
const SPEED_LEVELS_MS: [u64; 5] = [500, 250, 100, 50, 25];

/// How long an action notice stays visible.
const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Default path for the export-data action.
const EXPORT_PATH: &str = "gridmesh-metrics.csv";

/// The dashboard tabs, mirroring the page's tab selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Network,
    Trading,
    Analytics,
    Simulation,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Network, Tab::Trading, Tab::Analytics, Tab::Simulation];

    pub fn title(self) -> &'static str {
        match self {
            Self::Network => "Network",
            Self::Trading => "Trading",
            Self::Analytics => "Analytics",
            Self::Simulation => "Simulation",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Network => 0,
            Self::Trading => 1,
            Self::Analytics => 2,
            Self::Simulation => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Network => Self::Trading,
            Self::Trading => Self::Analytics,
            Self::Analytics => Self::Simulation,
            Self::Simulation => Self::Network,
        }
    }
}

/// TUI application state.
pub struct App {
    /// Simulation engine behind every panel.
    pub sim: NetworkSim,
    /// Currently selected tab.
    pub tab: Tab,
    /// Whether the tick loop is paused.
    pub paused: bool,
    /// Current index into `SPEED_LEVELS_MS`.
    pub speed_idx: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the last tick was executed.
    pub last_tick: Instant,
    /// Name of the active preset (or scenario label).
    pub preset_name: String,
    /// Most recent action notice, shown in the footer until it expires.
    notice: Option<(Alert, Instant)>,
}

impl App {
    /// Creates a new app from a validated scenario and a display label.
    pub fn new(scenario: &ScenarioConfig, label: &str) -> Self {
        let speed_idx = closest_speed_idx(scenario.simulation.tick_ms);
        Self {
            sim: NetworkSim::from_scenario(scenario),
            tab: Tab::Network,
            paused: false,
            speed_idx,
            quit: false,
            last_tick: Instant::now(),
            preset_name: label.to_string(),
            notice: None,
        }
    }

    /// Advances the simulation by one tick.
    pub fn tick(&mut self) {
        self.sim.tick();
    }

    /// Toggles pause/resume.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Increases tick rate (shorter interval).
    pub fn speed_up(&mut self) {
        if self.speed_idx + 1 < SPEED_LEVELS_MS.len() {
            self.speed_idx += 1;
        }
    }

    /// Decreases tick rate (longer interval).
    pub fn speed_down(&mut self) {
        if self.speed_idx > 0 {
            self.speed_idx -= 1;
        }
    }

    /// Returns the current tick interval in milliseconds.
    pub fn tick_interval_ms(&self) -> u64 {
        SPEED_LEVELS_MS[self.speed_idx]
    }

    /// Switches to a different preset, resetting simulation state.
    pub fn switch_preset(&mut self, name: &str) {
        let Ok(scenario) = ScenarioConfig::from_preset(name) else {
            return;
        };
        self.sim = NetworkSim::from_scenario(&scenario);
        self.paused = false;
        self.preset_name = name.to_string();
        self.notice = None;
    }

    /// Restarts the current scenario from the beginning.
    pub fn restart(&mut self) {
        self.sim.restart();
        self.paused = false;
        self.notice = None;
    }

    /// Records an action notice for the footer.
    pub fn raise_notice(&mut self, alert: Alert) {
        self.notice = Some((alert, Instant::now()));
    }

    /// The current notice, if it has not expired.
    pub fn notice(&self) -> Option<&Alert> {
        match &self.notice {
            Some((alert, raised)) if raised.elapsed() < NOTICE_TTL => Some(alert),
            _ => None,
        }
    }

    /// Exports the metric history to the default CSV path and raises a
    /// notice with the outcome.
    pub fn export_data(&mut self) {
        let samples: Vec<_> = self.sim.history().iter().cloned().collect();
        let tick = self.sim.tick_count();
        let alert = match export_csv(samples.iter(), Path::new(EXPORT_PATH)) {
            Ok(()) => Alert {
                severity: Severity::Success,
                message: format!("Metric history written to {EXPORT_PATH}"),
                tick,
            },
            Err(e) => Alert {
                severity: Severity::Warning,
                message: format!("Export failed: {e}"),
                tick,
            },
        };
        self.raise_notice(alert);
    }
}

/// Picks the speed level closest to the scenario's configured tick interval.
fn closest_speed_idx(tick_ms: u64) -> usize {
    SPEED_LEVELS_MS
        .iter()
        .enumerate()
        .min_by_key(|&(_, &ms)| ms.abs_diff(tick_ms))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
