//! Mock peer-to-peer trade records and the derived market summary.

use std::fmt;

/// Display-only transfer progress shown on active trades (%).
pub const TRANSFER_PROGRESS_PCT: u16 = 68;

/// Lifecycle label of a mock trade. Assigned once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeStatus {
    Pending,
    Active,
    Completed,
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        f.write_str(s)
    }
}

/// A single peer-to-peer energy trade. Created once as mock data and never
/// mutated or persisted.
#[derive(Debug, Clone)]
pub struct Trade {
    pub id: u32,
    pub seller: &'static str,
    pub buyer: &'static str,
    /// Traded energy (kWh).
    pub amount_kwh: f32,
    /// Unit price ($/kWh).
    pub price_per_kwh: f32,
    pub status: TradeStatus,
    /// Minutes before "now" the trade was booked. Display only.
    pub minutes_ago: u32,
}

impl Trade {
    /// Total trade value in dollars.
    pub fn total_value(&self) -> f32 {
        self.amount_kwh * self.price_per_kwh
    }
}

/// Market-level figures shown above the trade list.
#[derive(Debug, Clone)]
pub struct MarketSummary {
    /// Current spot price ($/kWh).
    pub price_per_kwh: f32,
    /// Signed change versus the previous period ($/kWh).
    pub price_change: f32,
    /// Total traded volume (kWh).
    pub volume_kwh: f32,
}

impl Default for MarketSummary {
    fn default() -> Self {
        Self {
            price_per_kwh: 0.13,
            price_change: 0.02,
            volume_kwh: 2847.0,
        }
    }
}

/// The fixed set of recent trades plus the market summary.
#[derive(Debug, Clone)]
pub struct TradeBook {
    pub trades: Vec<Trade>,
    pub summary: MarketSummary,
}

impl TradeBook {
    /// Builds the mock trade book with the given market summary.
    pub fn new(summary: MarketSummary) -> Self {
        let trades = vec![
            Trade {
                id: 1,
                seller: "House 1",
                buyer: "House 4",
                amount_kwh: 25.0,
                price_per_kwh: 0.12,
                status: TradeStatus::Active,
                minutes_ago: 0,
            },
            Trade {
                id: 2,
                seller: "House 3",
                buyer: "Storage 2",
                amount_kwh: 18.0,
                price_per_kwh: 0.10,
                status: TradeStatus::Completed,
                minutes_ago: 5,
            },
            Trade {
                id: 3,
                seller: "Storage 1",
                buyer: "House 2",
                amount_kwh: 12.0,
                price_per_kwh: 0.15,
                status: TradeStatus::Pending,
                minutes_ago: 0,
            },
        ];
        Self { trades, summary }
    }

    /// Number of trades currently in the `Active` state.
    pub fn active_count(&self) -> usize {
        self.trades
            .iter()
            .filter(|t| t.status == TradeStatus::Active)
            .count()
    }
}

impl Default for TradeBook {
    fn default() -> Self {
        Self::new(MarketSummary::default())
    }
}
