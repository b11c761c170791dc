//! Static analytics series shown on the analytics tab.
//!
//! These are fixed arrays standing in for a day of history; nothing feeds
//! them. The live chart on the same tab draws from the engine's rolling
//! metric history instead.

/// One point of the 24-hour energy curve.
#[derive(Debug, Clone, Copy)]
pub struct EnergyPoint {
    /// Clock label, e.g. `"06:00"`.
    pub time: &'static str,
    pub generation_kw: f32,
    pub consumption_kw: f32,
    pub storage_kwh: f32,
}

/// One point of the trading activity series.
#[derive(Debug, Clone, Copy)]
pub struct TradingPoint {
    pub hour: &'static str,
    pub volume_kwh: f32,
    pub price_per_kwh: f32,
}

/// One slice of the generation source mix.
#[derive(Debug, Clone, Copy)]
pub struct SourceShare {
    pub name: &'static str,
    pub share_pct: u8,
}

/// One optimizer insight card.
#[derive(Debug, Clone, Copy)]
pub struct InsightCard {
    pub metric: &'static str,
    pub value: &'static str,
    /// Signed trend string, e.g. `"+2.1%"`.
    pub trend: &'static str,
}

/// 24-hour generation and consumption pattern.
pub const ENERGY_CURVE: &[EnergyPoint] = &[
    EnergyPoint {
        time: "00:00",
        generation_kw: 20.0,
        consumption_kw: 85.0,
        storage_kwh: 450.0,
    },
    EnergyPoint {
        time: "06:00",
        generation_kw: 150.0,
        consumption_kw: 120.0,
        storage_kwh: 480.0,
    },
    EnergyPoint {
        time: "12:00",
        generation_kw: 320.0,
        consumption_kw: 180.0,
        storage_kwh: 620.0,
    },
    EnergyPoint {
        time: "18:00",
        generation_kw: 180.0,
        consumption_kw: 240.0,
        storage_kwh: 560.0,
    },
    EnergyPoint {
        time: "23:59",
        generation_kw: 30.0,
        consumption_kw: 160.0,
        storage_kwh: 430.0,
    },
];

/// Trading volume and price over the day.
pub const TRADING_ACTIVITY: &[TradingPoint] = &[
    TradingPoint {
        hour: "06:00",
        volume_kwh: 45.0,
        price_per_kwh: 0.10,
    },
    TradingPoint {
        hour: "09:00",
        volume_kwh: 78.0,
        price_per_kwh: 0.12,
    },
    TradingPoint {
        hour: "12:00",
        volume_kwh: 120.0,
        price_per_kwh: 0.15,
    },
    TradingPoint {
        hour: "15:00",
        volume_kwh: 95.0,
        price_per_kwh: 0.13,
    },
    TradingPoint {
        hour: "18:00",
        volume_kwh: 160.0,
        price_per_kwh: 0.18,
    },
    TradingPoint {
        hour: "21:00",
        volume_kwh: 85.0,
        price_per_kwh: 0.14,
    },
];

/// Current generation mix.
pub const SOURCE_MIX: &[SourceShare] = &[
    SourceShare {
        name: "Solar",
        share_pct: 65,
    },
    SourceShare {
        name: "Battery",
        share_pct: 25,
    },
    SourceShare {
        name: "Grid",
        share_pct: 10,
    },
];

/// Optimizer insight cards.
pub const INSIGHT_CARDS: &[InsightCard] = &[
    InsightCard {
        metric: "Prediction Accuracy",
        value: "94.2%",
        trend: "+2.1%",
    },
    InsightCard {
        metric: "Optimization Score",
        value: "8.7/10",
        trend: "+0.3",
    },
    InsightCard {
        metric: "Response Time",
        value: "1.2ms",
        trend: "-0.3ms",
    },
    InsightCard {
        metric: "Energy Saved",
        value: "1.2MWh",
        trend: "+0.4MWh",
    },
];
