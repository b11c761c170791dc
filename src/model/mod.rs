//! Display-only data model: metrics, trades, topology, and alerts.

/// Alert feed shown in the monitor panel.
pub mod alerts;
/// Mock trade records and market summary.
pub mod market;
pub mod metrics;
/// Static network topology and flow-dot animation.
pub mod topology;

pub use alerts::{Alert, AlertFeed, Severity};
pub use market::{MarketSummary, Trade, TradeBook, TradeStatus};
pub use metrics::{GridMetrics, MetricsSample};
pub use topology::{Connection, Node, NodeKind, NodeStatus, Topology};
