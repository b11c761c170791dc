//! Simulation control panel: weather, sliders, and toggle actions.
//!
//! Every action is a local state update that raises an [`Alert`] in place
//! of a toast. Nothing downstream is recomputed; the controls exist so the
//! dashboard can be poked.

use std::fmt;

use crate::config::ControlsConfig;
use crate::model::{Alert, Severity};

/// Slider step applied by the nudge actions (%).
pub const SLIDER_STEP_PCT: u8 = 5;

/// Weather condition driving the solar intensity snap values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weather {
    Sunny,
    Cloudy,
    Rainy,
}

impl Weather {
    /// Solar intensity the slider snaps to when this weather is selected (%).
    pub fn solar_intensity_pct(self) -> u8 {
        match self {
            Self::Sunny => 85,
            Self::Cloudy => 45,
            Self::Rainy => 20,
        }
    }

    /// Parses a config weather string. Unknown values fall back to sunny;
    /// config validation rejects them before this is reached.
    pub fn parse(s: &str) -> Self {
        match s {
            "cloudy" => Self::Cloudy,
            "rainy" => Self::Rainy,
            _ => Self::Sunny,
        }
    }

    /// Cycles sunny -> cloudy -> rainy -> sunny.
    pub fn next(self) -> Self {
        match self {
            Self::Sunny => Self::Cloudy,
            Self::Cloudy => Self::Rainy,
            Self::Rainy => Self::Sunny,
        }
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sunny => "sunny",
            Self::Cloudy => "cloudy",
            Self::Rainy => "rainy",
        };
        f.write_str(s)
    }
}

/// Local control-panel state.
#[derive(Debug, Clone)]
pub struct ControlPanel {
    pub weather: Weather,
    /// Solar intensity slider (%).
    pub solar_intensity_pct: u8,
    /// Peak demand slider (%).
    pub demand_level_pct: u8,
    /// Whether the grid connection is simulated as down.
    pub power_outage: bool,
    /// Optimizer toggle. Purely a badge.
    pub optimizer_enabled: bool,
}

impl ControlPanel {
    /// Builds the panel from validated configuration.
    pub fn from_config(cfg: &ControlsConfig) -> Self {
        Self {
            weather: Weather::parse(&cfg.weather),
            solar_intensity_pct: cfg.solar_intensity_pct.min(100),
            demand_level_pct: cfg.demand_level_pct.min(100),
            power_outage: cfg.power_outage,
            optimizer_enabled: cfg.optimizer_enabled,
        }
    }

    /// Selects a weather condition, snapping the solar intensity slider.
    pub fn set_weather(&mut self, weather: Weather, tick: u64) -> Alert {
        self.weather = weather;
        self.solar_intensity_pct = weather.solar_intensity_pct();
        Alert {
            severity: Severity::Info,
            message: format!("Weather updated: solar generation adjusted for {weather} conditions"),
            tick,
        }
    }

    /// Cycles to the next weather condition.
    pub fn cycle_weather(&mut self, tick: u64) -> Alert {
        self.set_weather(self.weather.next(), tick)
    }

    /// Raises the solar intensity slider by one step.
    pub fn solar_up(&mut self) {
        self.solar_intensity_pct = self.solar_intensity_pct.saturating_add(SLIDER_STEP_PCT).min(100);
    }

    /// Lowers the solar intensity slider by one step.
    pub fn solar_down(&mut self) {
        self.solar_intensity_pct = self.solar_intensity_pct.saturating_sub(SLIDER_STEP_PCT);
    }

    /// Raises the peak demand slider by one step.
    pub fn demand_up(&mut self) {
        self.demand_level_pct = self.demand_level_pct.saturating_add(SLIDER_STEP_PCT).min(100);
    }

    /// Lowers the peak demand slider by one step.
    pub fn demand_down(&mut self) {
        self.demand_level_pct = self.demand_level_pct.saturating_sub(SLIDER_STEP_PCT);
    }

    /// Flips the power-outage toggle. The alert fires unconditionally; no
    /// actual fault is modeled.
    pub fn toggle_outage(&mut self, tick: u64) -> Alert {
        self.power_outage = !self.power_outage;
        if self.power_outage {
            Alert {
                severity: Severity::Warning,
                message: "Power outage simulated: testing decentralized network resilience"
                    .to_string(),
                tick,
            }
        } else {
            Alert {
                severity: Severity::Success,
                message: "Grid restored: connection re-established, rebalancing network"
                    .to_string(),
                tick,
            }
        }
    }

    /// Flips the optimizer toggle.
    pub fn toggle_optimizer(&mut self, tick: u64) -> Alert {
        self.optimizer_enabled = !self.optimizer_enabled;
        let state = if self.optimizer_enabled { "enabled" } else { "disabled" };
        Alert {
            severity: Severity::Info,
            message: format!("Automated flow optimization {state}"),
            tick,
        }
    }

    /// "Runs" an optimization pass. Cosmetic by design: only the alert is
    /// produced.
    pub fn run_optimization(&self, tick: u64) -> Alert {
        Alert {
            severity: Severity::Success,
            message: "Optimization pass running: analyzing network patterns and energy distribution"
                .to_string(),
            tick,
        }
    }
}
