//! Simulation engine, control panel, and analytics series.

/// Static analytics series and insight cards.
pub mod analytics;
pub mod controls;
pub mod engine;

pub use controls::{ControlPanel, Weather};
pub use engine::NetworkSim;
