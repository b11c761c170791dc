//! TOML-based scenario configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level scenario configuration parsed from TOML.
///
/// All fields have defaults matching the baseline scenario. Load from TOML
/// with [`ScenarioConfig::from_toml_file`] or use
/// [`ScenarioConfig::baseline`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioConfig {
    /// Tick timing and global parameters.
    #[serde(default)]
    pub simulation: SimulationConfig,
    /// Initial headline metric values.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Market summary figures.
    #[serde(default)]
    pub market: MarketConfig,
    /// Initial control-panel state.
    #[serde(default)]
    pub controls: ControlsConfig,
}

/// Tick timing and global parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Master random seed.
    pub seed: u64,
    /// Base animation tick interval in milliseconds (must be > 0).
    pub tick_ms: u64,
    /// Metric jitter is applied every this many ticks (must be > 0).
    pub metrics_interval_ticks: u64,
    /// Number of ticks a headless run executes (must be > 0).
    pub headless_ticks: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_ms: 100,
            metrics_interval_ticks: 20,
            headless_ticks: 600,
        }
    }
}

/// Initial headline metric values. Clamp ranges are fixed in the model.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetricsConfig {
    /// Total generation (kW).
    pub generation_kw: f32,
    /// Total consumption (kW).
    pub consumption_kw: f32,
    /// Battery storage level (kWh, within [0, 1000]).
    pub storage_kwh: f32,
    /// Grid load (%, within [0, 100]).
    pub grid_load_pct: f32,
    /// Efficiency (%, within [85, 100]).
    pub efficiency_pct: f32,
    /// Carbon saved so far (kg, >= 0).
    pub carbon_saved_kg: f32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            generation_kw: 1247.0,
            consumption_kw: 1180.0,
            storage_kwh: 687.0,
            grid_load_pct: 78.0,
            efficiency_pct: 94.6,
            carbon_saved_kg: 284.0,
        }
    }
}

/// Market summary figures.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Current spot price ($/kWh, must be > 0).
    pub price_per_kwh: f32,
    /// Signed price change versus the previous period ($/kWh).
    pub price_change: f32,
    /// Total traded volume (kWh, must be >= 0).
    pub volume_kwh: f32,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            price_per_kwh: 0.13,
            price_change: 0.02,
            volume_kwh: 2847.0,
        }
    }
}

/// Initial control-panel state.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlsConfig {
    /// Weather condition: `"sunny"`, `"cloudy"`, or `"rainy"`.
    pub weather: String,
    /// Solar intensity slider (%, within [0, 100]).
    pub solar_intensity_pct: u8,
    /// Peak demand slider (%, within [0, 100]).
    pub demand_level_pct: u8,
    /// Whether the grid starts disconnected.
    pub power_outage: bool,
    /// Whether the optimizer toggle starts enabled.
    pub optimizer_enabled: bool,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            weather: "sunny".to_string(),
            solar_intensity_pct: 85,
            demand_level_pct: 60,
            power_outage: false,
            optimizer_enabled: true,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"simulation.tick_ms"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

impl ScenarioConfig {
    /// Returns the baseline scenario (the original hardcoded dashboard state).
    pub fn baseline() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            metrics: MetricsConfig::default(),
            market: MarketConfig::default(),
            controls: ControlsConfig::default(),
        }
    }

    /// Returns the cloudy-day preset: reduced solar, softer market.
    pub fn cloudy_day() -> Self {
        Self {
            metrics: MetricsConfig {
                generation_kw: 860.0,
                consumption_kw: 1120.0,
                storage_kwh: 540.0,
                grid_load_pct: 84.0,
                efficiency_pct: 91.2,
                ..MetricsConfig::default()
            },
            market: MarketConfig {
                price_per_kwh: 0.16,
                price_change: 0.03,
                volume_kwh: 2210.0,
            },
            controls: ControlsConfig {
                weather: "cloudy".to_string(),
                solar_intensity_pct: 45,
                demand_level_pct: 70,
                ..ControlsConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Returns the outage-drill preset: grid disconnected from the start.
    pub fn outage_drill() -> Self {
        Self {
            metrics: MetricsConfig {
                generation_kw: 980.0,
                consumption_kw: 1240.0,
                storage_kwh: 420.0,
                grid_load_pct: 92.0,
                efficiency_pct: 88.5,
                ..MetricsConfig::default()
            },
            controls: ControlsConfig {
                demand_level_pct: 85,
                power_outage: true,
                ..ControlsConfig::default()
            },
            ..Self::baseline()
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["baseline", "cloudy_day", "outage_drill"];

    /// Loads a scenario from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "baseline" => Ok(Self::baseline()),
            "cloudy_day" => Ok(Self::cloudy_day()),
            "outage_drill" => Ok(Self::outage_drill()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a scenario from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "scenario".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a scenario from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.simulation;

        if s.tick_ms == 0 {
            errors.push(ConfigError {
                field: "simulation.tick_ms".into(),
                message: "must be > 0".into(),
            });
        }
        if s.metrics_interval_ticks == 0 {
            errors.push(ConfigError {
                field: "simulation.metrics_interval_ticks".into(),
                message: "must be > 0".into(),
            });
        }
        if s.headless_ticks == 0 {
            errors.push(ConfigError {
                field: "simulation.headless_ticks".into(),
                message: "must be > 0".into(),
            });
        }

        let m = &self.metrics;
        if m.generation_kw < 0.0 {
            errors.push(ConfigError {
                field: "metrics.generation_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if m.consumption_kw < 0.0 {
            errors.push(ConfigError {
                field: "metrics.consumption_kw".into(),
                message: "must be >= 0".into(),
            });
        }
        if !(0.0..=1000.0).contains(&m.storage_kwh) {
            errors.push(ConfigError {
                field: "metrics.storage_kwh".into(),
                message: "must be in [0, 1000]".into(),
            });
        }
        if !(0.0..=100.0).contains(&m.grid_load_pct) {
            errors.push(ConfigError {
                field: "metrics.grid_load_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if !(85.0..=100.0).contains(&m.efficiency_pct) {
            errors.push(ConfigError {
                field: "metrics.efficiency_pct".into(),
                message: "must be in [85, 100]".into(),
            });
        }
        if m.carbon_saved_kg < 0.0 {
            errors.push(ConfigError {
                field: "metrics.carbon_saved_kg".into(),
                message: "must be >= 0".into(),
            });
        }

        let mk = &self.market;
        if mk.price_per_kwh <= 0.0 {
            errors.push(ConfigError {
                field: "market.price_per_kwh".into(),
                message: "must be > 0".into(),
            });
        }
        if mk.volume_kwh < 0.0 {
            errors.push(ConfigError {
                field: "market.volume_kwh".into(),
                message: "must be >= 0".into(),
            });
        }

        let c = &self.controls;
        if c.weather != "sunny" && c.weather != "cloudy" && c.weather != "rainy" {
            errors.push(ConfigError {
                field: "controls.weather".into(),
                message: format!(
                    "must be \"sunny\", \"cloudy\", or \"rainy\", got \"{}\"",
                    c.weather
                ),
            });
        }
        if c.solar_intensity_pct > 100 {
            errors.push(ConfigError {
                field: "controls.solar_intensity_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }
        if c.demand_level_pct > 100 {
            errors.push(ConfigError {
                field: "controls.demand_level_pct".into(),
                message: "must be in [0, 100]".into(),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baseline_preset_valid() {
        let cfg = ScenarioConfig::baseline();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "baseline should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = ScenarioConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ScenarioConfig::PRESETS {
            let cfg = ScenarioConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[simulation]
seed = 99
tick_ms = 50
metrics_interval_ticks = 10
headless_ticks = 100

[metrics]
generation_kw = 900.0
consumption_kw = 850.0
storage_kwh = 500.0
grid_load_pct = 60.0
efficiency_pct = 92.0
carbon_saved_kg = 120.0

[market]
price_per_kwh = 0.11
price_change = -0.01
volume_kwh = 1500.0

[controls]
weather = "rainy"
solar_intensity_pct = 20
demand_level_pct = 40
power_outage = false
optimizer_enabled = false
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.seed), Some(99));
        assert_eq!(cfg.as_ref().map(|c| &*c.controls.weather), Some("rainy"));
        assert_eq!(
            cfg.as_ref().map(|c| c.controls.solar_intensity_pct),
            Some(20)
        );
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[simulation]
tick_ms = 100
bogus_field = true
"#;
        let result = ScenarioConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[simulation]
seed = 7
"#;
        let cfg = ScenarioConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.simulation.seed), Some(7));
        assert_eq!(cfg.as_ref().map(|c| c.simulation.tick_ms), Some(100));
        assert_eq!(cfg.as_ref().map(|c| c.metrics.storage_kwh), Some(687.0));
    }

    #[test]
    fn validation_catches_zero_tick() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.simulation.tick_ms = 0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "simulation.tick_ms"));
    }

    #[test]
    fn validation_catches_bad_weather() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.controls.weather = "foggy".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "controls.weather"));
    }

    #[test]
    fn validation_catches_out_of_range_metrics() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.metrics.storage_kwh = 1500.0;
        cfg.metrics.efficiency_pct = 50.0;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "metrics.storage_kwh"));
        assert!(errors.iter().any(|e| e.field == "metrics.efficiency_pct"));
    }

    #[test]
    fn validation_catches_slider_overflow() {
        let mut cfg = ScenarioConfig::baseline();
        cfg.controls.solar_intensity_pct = 120;
        let errors = cfg.validate();
        assert!(
            errors
                .iter()
                .any(|e| e.field == "controls.solar_intensity_pct")
        );
    }

    #[test]
    fn outage_drill_starts_disconnected() {
        let cfg = ScenarioConfig::outage_drill();
        assert!(cfg.controls.power_outage);
        assert!(cfg.metrics.grid_load_pct > ScenarioConfig::baseline().metrics.grid_load_pct);
    }

    #[test]
    fn cloudy_day_has_reduced_intensity() {
        let cfg = ScenarioConfig::cloudy_day();
        assert_eq!(cfg.controls.weather, "cloudy");
        assert_eq!(cfg.controls.solar_intensity_pct, 45);
    }
}
