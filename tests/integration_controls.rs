//! Control-panel actions exercised through the engine.

mod common;

use gridmesh::config::ScenarioConfig;
use gridmesh::model::alerts::MAX_ALERTS;
use gridmesh::model::{NodeStatus, Severity};
use gridmesh::sim::{NetworkSim, Weather};

#[test]
fn weather_cycle_snaps_solar_slider_and_raises_info_alert() {
    let mut sim = common::baseline_sim();
    assert_eq!(sim.controls().weather, Weather::Sunny);
    assert_eq!(sim.controls().solar_intensity_pct, 85);

    let alert = sim.cycle_weather();
    assert_eq!(alert.severity, Severity::Info);
    assert!(alert.message.contains("cloudy"));
    assert_eq!(sim.controls().weather, Weather::Cloudy);
    assert_eq!(sim.controls().solar_intensity_pct, 45);

    sim.cycle_weather();
    assert_eq!(sim.controls().solar_intensity_pct, 20);
    sim.cycle_weather();
    assert_eq!(sim.controls().weather, Weather::Sunny);
    assert_eq!(sim.controls().solar_intensity_pct, 85);
}

#[test]
fn set_weather_is_idempotent_on_slider() {
    let mut sim = common::baseline_sim();
    sim.set_weather(Weather::Rainy);
    sim.solar_up();
    assert_eq!(sim.controls().solar_intensity_pct, 25);
    // Selecting the same weather again snaps the slider back.
    sim.set_weather(Weather::Rainy);
    assert_eq!(sim.controls().solar_intensity_pct, 20);
}

#[test]
fn sliders_move_in_five_percent_steps() {
    let mut sim = common::baseline_sim();
    sim.solar_up();
    assert_eq!(sim.controls().solar_intensity_pct, 90);
    sim.solar_down();
    sim.solar_down();
    assert_eq!(sim.controls().solar_intensity_pct, 80);

    assert_eq!(sim.controls().demand_level_pct, 60);
    sim.demand_up();
    assert_eq!(sim.controls().demand_level_pct, 65);
    sim.demand_down();
    assert_eq!(sim.controls().demand_level_pct, 60);
}

#[test]
fn outage_round_trip_restores_topology() {
    let mut sim = common::baseline_sim();
    let on = sim.toggle_outage();
    assert_eq!(on.severity, Severity::Warning);
    assert_eq!(
        sim.topology().node("grid").map(|n| n.status),
        Some(NodeStatus::Offline)
    );

    let off = sim.toggle_outage();
    assert_eq!(off.severity, Severity::Success);
    assert_eq!(
        sim.topology().node("grid").map(|n| n.status),
        Some(NodeStatus::Online)
    );
    assert!(
        sim.topology()
            .connections
            .iter()
            .filter(|c| c.from == "grid" || c.to == "grid")
            .all(|c| c.active)
    );
}

#[test]
fn outage_leaves_non_grid_connections_alone() {
    let mut sim = common::baseline_sim();
    sim.toggle_outage();
    assert!(
        sim.topology()
            .connections
            .iter()
            .filter(|c| c.from != "grid" && c.to != "grid")
            .all(|c| c.active)
    );
}

#[test]
fn actions_do_not_touch_metrics_or_trades() {
    let mut sim = common::baseline_sim();
    let metrics_before = sim.metrics().clone();
    let trade_ids: Vec<u32> = sim.trades().trades.iter().map(|t| t.id).collect();

    sim.cycle_weather();
    sim.toggle_outage();
    sim.toggle_optimizer();
    sim.run_optimization();
    sim.solar_up();
    sim.demand_down();

    assert_eq!(sim.metrics(), &metrics_before);
    let after: Vec<u32> = sim.trades().trades.iter().map(|t| t.id).collect();
    assert_eq!(trade_ids, after);
}

#[test]
fn alert_feed_stays_bounded_under_action_spam() {
    let mut sim = common::baseline_sim();
    for _ in 0..(MAX_ALERTS * 2) {
        sim.run_optimization();
    }
    assert_eq!(sim.alerts().len(), MAX_ALERTS);
    assert_eq!(
        sim.alerts().latest().map(|a| a.severity),
        Some(Severity::Success)
    );
}

#[test]
fn alerts_carry_the_tick_they_were_raised_at() {
    let mut sim = common::baseline_sim();
    for _ in 0..37 {
        sim.tick();
    }
    let alert = sim.toggle_optimizer();
    assert_eq!(alert.tick, 37);
    assert_eq!(sim.alerts().latest().map(|a| a.tick), Some(37));
}

#[test]
fn config_seeds_control_state() {
    let mut cfg = ScenarioConfig::baseline();
    cfg.controls.weather = "rainy".to_string();
    cfg.controls.solar_intensity_pct = 20;
    cfg.controls.demand_level_pct = 30;
    cfg.controls.optimizer_enabled = false;
    let sim = NetworkSim::from_scenario(&cfg);
    assert_eq!(sim.controls().weather, Weather::Rainy);
    assert_eq!(sim.controls().solar_intensity_pct, 20);
    assert_eq!(sim.controls().demand_level_pct, 30);
    assert!(!sim.controls().optimizer_enabled);
}
