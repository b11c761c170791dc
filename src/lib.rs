//! Dashboard for a simulated decentralized energy-trading network.
//!
//! Everything shown is mock data: metrics drift on a clamped, seeded random
//! walk, trades are fixed records, and control actions raise alerts without
//! touching any real system.

pub mod config;
pub mod io;
/// Display-only data model: metrics, trades, topology, alerts.
pub mod model;
pub mod sim;
#[cfg(feature = "tui")]
pub mod tui;
