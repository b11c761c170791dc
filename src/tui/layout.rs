//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine, Points};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, Gauge, Paragraph, Tabs};

use crate::model::market::TRANSFER_PROGRESS_PCT;
use crate::model::topology::{LAYOUT_HEIGHT, LAYOUT_WIDTH};
use crate::model::{NodeKind, TradeStatus};
use crate::sim::analytics::{ENERGY_CURVE, INSIGHT_CARDS, SOURCE_MIX, TRADING_ACTIVITY};

use super::runtime::{App, Tab};
use super::style;

/// Headline node count shown in the header badge.
const LIVE_NODE_BADGE: u32 = 47;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // tabs
            Constraint::Min(12),   // body
            Constraint::Length(1), // notice
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_tabs(frame, app, chunks[1]);
    match app.tab {
        Tab::Network => render_network_tab(frame, app, chunks[2]),
        Tab::Trading => render_trading_tab(frame, app, chunks[2]),
        Tab::Analytics => render_analytics_tab(frame, app, chunks[2]),
        Tab::Simulation => render_simulation_tab(frame, app, chunks[2]),
    }
    render_notice(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: title, preset, node badge, optimizer badge, tick state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let state_label = if app.paused { "PAUSED" } else { "RUNNING" };
    let state_icon = if app.paused { "‖" } else { "▶" };
    let optimizer = if app.sim.controls().optimizer_enabled {
        "Optimization: Active"
    } else {
        "Optimization: Off"
    };

    let header = Line::from(vec![
        Span::styled(
            " GRIDMESH ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ Live Network: {LIVE_NODE_BADGE} Nodes │ {optimizer} │ t={} │ {}ms │ {} {} ",
            app.sim.tick_count(),
            app.tick_interval_ms(),
            state_icon,
            state_label,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(app.tab.index())
        .highlight_style(
            Style::default()
                .fg(style::SELECTED)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    frame.render_widget(tabs, area);
}

fn render_network_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);
    render_topology_canvas(frame, app, chunks[0]);
    render_monitor(frame, app, chunks[1]);
}

fn render_trading_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);
    render_trading_panel(frame, app, chunks[0]);
    render_monitor(frame, app, chunks[1]);
}

fn render_simulation_tab(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(36)])
        .split(area);
    render_topology_canvas(frame, app, chunks[0]);
    render_controls_panel(frame, app, chunks[1]);
}

/// Topology canvas: connection lines, animated flow dots, node glyphs.
///
/// Node coordinates are top-down; the canvas Y axis grows upward, so Y is
/// flipped here.
fn render_topology_canvas(frame: &mut Frame, app: &App, area: Rect) {
    let topo = app.sim.topology();
    let phase = app.sim.phase();

    let canvas = Canvas::default()
        .block(
            Block::default()
                .title(" Network Topology — real-time energy flow ")
                .borders(Borders::ALL),
        )
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, f64::from(LAYOUT_WIDTH)])
        .y_bounds([0.0, f64::from(LAYOUT_HEIGHT)])
        .paint(|ctx| {
            for (idx, conn) in topo.connections.iter().enumerate() {
                let Some(seg) = topo.segment(conn) else {
                    continue;
                };
                let color = if conn.active {
                    style::FLOW_COLOR
                } else {
                    style::FLOW_INACTIVE
                };
                ctx.draw(&CanvasLine {
                    x1: f64::from(seg.x1),
                    y1: f64::from(LAYOUT_HEIGHT - seg.y1),
                    x2: f64::from(seg.x2),
                    y2: f64::from(LAYOUT_HEIGHT - seg.y2),
                    color,
                });

                if conn.active {
                    if let Some((dx, dy)) = topo.flow_dot(idx, phase) {
                        let dot = [(f64::from(dx), f64::from(LAYOUT_HEIGHT - dy))];
                        ctx.draw(&Points {
                            coords: &dot,
                            color: style::FLOW_DOT,
                        });
                    }
                }

                let (mx, my) = seg.midpoint();
                ctx.print(
                    f64::from(mx),
                    f64::from(LAYOUT_HEIGHT - my) + 12.0,
                    Line::from(Span::styled(
                        format!("{:.0}kW", conn.flow_kw),
                        Style::default().fg(style::FOOTER_FG),
                    )),
                );
            }

            for node in &topo.nodes {
                let glyph = match node.kind {
                    NodeKind::Grid => "⚡",
                    NodeKind::Household => "⌂",
                    NodeKind::Storage => "▮",
                };
                let mut label = format!("{glyph} {} {:.0}/{:.0}", node.id, node.energy, node.capacity);
                if let Some(solar) = node.solar_generation_kw {
                    label.push_str(&format!(" ☀{solar:.0}"));
                }
                ctx.print(
                    f64::from(node.x),
                    f64::from(LAYOUT_HEIGHT - node.y),
                    Line::from(Span::styled(
                        label,
                        Style::default()
                            .fg(style::node_color(node.status))
                            .add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });

    frame.render_widget(canvas, area);
}

/// Grid monitor sidebar: headline metrics, load gauge, alert feed.
fn render_monitor(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // metrics
            Constraint::Length(3), // load gauge
            Constraint::Min(4),    // alerts
        ])
        .split(area);

    let m = app.sim.metrics();
    let surplus = m.surplus_kw();
    let surplus_sign = if surplus >= 0.0 { "+" } else { "" };
    let lines = vec![
        Line::from(format!("  Generation   {:>8.0} kW", m.generation_kw)),
        Line::from(format!("  Consumption  {:>8.0} kW", m.consumption_kw)),
        Line::from(Span::styled(
            format!("  Surplus      {surplus_sign}{surplus:>7.0} kW"),
            Style::default().fg(style::GENERATION_COLOR),
        )),
        Line::from(format!("  Storage      {:>8.0} kWh", m.storage_kwh)),
        Line::from(format!("  Efficiency   {:>8.1} %", m.efficiency_pct)),
        Line::from(format!("  CO₂ saved    {:>8.0} kg", m.carbon_saved_kg)),
    ];
    let block = Block::default().title(" Grid Status ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), chunks[0]);

    let load = m.grid_load_pct;
    let gauge = Gauge::default()
        .block(Block::default().title(" Grid Load ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(style::load_color(load)))
        .ratio(f64::from(load / 100.0).clamp(0.0, 1.0))
        .label(format!("{load:.0}%"));
    frame.render_widget(gauge, chunks[1]);

    let alert_lines: Vec<Line> = app
        .sim
        .alerts()
        .iter()
        .map(|a| {
            Line::from(vec![
                Span::styled(
                    format!(" {:<7} ", a.severity),
                    Style::default().fg(style::severity_color(a.severity)),
                ),
                Span::raw(a.message.clone()),
            ])
        })
        .collect();
    let block = Block::default()
        .title(" System Alerts ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(alert_lines).block(block), chunks[2]);
}

/// Trading panel: market summary plus the trade list.
fn render_trading_panel(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // market summary
            Constraint::Min(6),    // trade list
            Constraint::Length(3), // transfer progress
        ])
        .split(area);

    let book = app.sim.trades();
    let s = &book.summary;
    let arrow = if s.price_change >= 0.0 { "▲" } else { "▼" };
    let change_color = if s.price_change >= 0.0 {
        style::GENERATION_COLOR
    } else {
        style::CONSUMPTION_COLOR
    };
    let summary = vec![
        Line::from(vec![
            Span::raw(format!("  ${:.2}/kWh ", s.price_per_kwh)),
            Span::styled(
                format!("{arrow} {:.2}", s.price_change.abs()),
                Style::default().fg(change_color),
            ),
        ]),
        Line::from(format!(
            "  Volume {:.0} kWh │ {} active trades",
            s.volume_kwh,
            book.active_count()
        )),
    ];
    let block = Block::default()
        .title(" Energy Trading ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(summary).block(block), chunks[0]);

    let mut trade_lines = Vec::new();
    for t in &book.trades {
        let when = if t.minutes_ago == 0 {
            "just now".to_string()
        } else {
            format!("{} min ago", t.minutes_ago)
        };
        trade_lines.push(Line::from(vec![
            Span::styled(
                format!(" [{:<9}] ", t.status),
                Style::default().fg(trade_status_color(t.status)),
            ),
            Span::styled(
                format!("{} → {}", t.seller, t.buyer),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  ${:.2}", t.total_value())),
        ]));
        trade_lines.push(Line::from(format!(
            "             {:.0} kWh @ ${:.2}/kWh │ {when}",
            t.amount_kwh, t.price_per_kwh
        )));
    }
    let block = Block::default()
        .title(" Recent Trades ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(trade_lines).block(block), chunks[1]);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Active Transfer ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(style::FLOW_COLOR))
        .percent(TRANSFER_PROGRESS_PCT);
    frame.render_widget(gauge, chunks[2]);
}

fn trade_status_color(status: TradeStatus) -> ratatui::style::Color {
    match status {
        TradeStatus::Pending => style::FOOTER_FG,
        TradeStatus::Active => style::FLOW_COLOR,
        TradeStatus::Completed => style::GENERATION_COLOR,
    }
}

/// Analytics tab: static daily curves, trading volume, source mix and
/// insight cards, plus the live metric chart.
fn render_analytics_tab(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),     // energy curve
            Constraint::Length(9),  // volume + mix/insights
            Constraint::Length(8),  // live chart
        ])
        .split(area);

    render_energy_curve(frame, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    render_trading_volume(frame, cols[0]);
    render_mix_and_insights(frame, cols[1]);

    render_live_chart(frame, app, rows[2]);
}

/// 24-hour generation vs consumption pattern (static series).
fn render_energy_curve(frame: &mut Frame, area: Rect) {
    let generation: Vec<(f64, f64)> = ENERGY_CURVE
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.generation_kw)))
        .collect();
    let consumption: Vec<(f64, f64)> = ENERGY_CURVE
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, f64::from(p.consumption_kw)))
        .collect();

    let y_bounds = style::auto_bounds_y(&generation, &consumption);
    let x_hi = (ENERGY_CURVE.len().saturating_sub(1)) as f64;

    let datasets = vec![
        Dataset::default()
            .name("Generation")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::GENERATION_COLOR))
            .data(&generation),
        Dataset::default()
            .name("Consumption")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::CONSUMPTION_COLOR))
            .data(&consumption),
    ];

    let first = ENERGY_CURVE.first().map_or("", |p| p.time);
    let last = ENERGY_CURVE.last().map_or("", |p| p.time);
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Energy Flow Analytics — 24h pattern ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, x_hi.max(1.0)])
                .labels(vec![first.to_string(), last.to_string()]),
        )
        .y_axis(
            Axis::default()
                .title("kW")
                .bounds(y_bounds)
                .labels(vec![format!("{:.0}", y_bounds[0]), format!("{:.0}", y_bounds[1])]),
        );
    frame.render_widget(chart, area);
}

/// Trading volume bar chart (static series).
fn render_trading_volume(frame: &mut Frame, area: Rect) {
    let data: Vec<(&str, u64)> = TRADING_ACTIVITY
        .iter()
        .map(|p| (p.hour, p.volume_kwh as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title(" Trading Activity (kWh) ")
                .borders(Borders::ALL),
        )
        .data(data.as_slice())
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(style::FLOW_COLOR))
        .value_style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(chart, area);
}

/// Source mix shares and optimizer insight cards.
fn render_mix_and_insights(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for share in SOURCE_MIX {
        let filled = usize::from(share.share_pct) / 5;
        let bar: String = "█".repeat(filled);
        lines.push(Line::from(format!(
            "  {:<8} {:>3}% {bar}",
            share.name, share.share_pct
        )));
    }
    lines.push(Line::from(""));
    for card in INSIGHT_CARDS {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<20} ", card.metric)),
            Span::styled(card.value, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("  {}", card.trend),
                Style::default().fg(style::GENERATION_COLOR),
            ),
        ]));
    }
    let block = Block::default()
        .title(" Sources & Optimizer ")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Live generation vs consumption over the rolling metric history.
fn render_live_chart(frame: &mut Frame, app: &App, area: Rect) {
    let generation: Vec<(f64, f64)> = app
        .sim
        .history()
        .iter()
        .map(|s| (s.tick as f64, f64::from(s.metrics.generation_kw)))
        .collect();
    let consumption: Vec<(f64, f64)> = app
        .sim
        .history()
        .iter()
        .map(|s| (s.tick as f64, f64::from(s.metrics.consumption_kw)))
        .collect();

    let y_bounds = style::auto_bounds_y(&generation, &consumption);
    let x_lo = generation.first().map_or(0.0, |p| p.0);
    let x_hi = generation.last().map_or(1.0, |p| p.0).max(x_lo + 1.0);

    let datasets = vec![
        Dataset::default()
            .name("Generation")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::GENERATION_COLOR))
            .data(&generation),
        Dataset::default()
            .name("Consumption")
            .marker(symbols::Marker::Dot)
            .style(Style::default().fg(style::CONSUMPTION_COLOR))
            .data(&consumption),
    ];

    let chart = Chart::new(datasets)
        .block(Block::default().title(" Live Metrics ").borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title("tick")
                .bounds([x_lo, x_hi])
                .labels(vec![format!("{x_lo:.0}"), format!("{x_hi:.0}")]),
        )
        .y_axis(
            Axis::default()
                .title("kW")
                .bounds(y_bounds)
                .labels(vec![format!("{:.0}", y_bounds[0]), format!("{:.0}", y_bounds[1])]),
        );
    frame.render_widget(chart, area);
}

/// Simulation controls sidebar.
fn render_controls_panel(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // weather
            Constraint::Length(3), // solar gauge
            Constraint::Length(3), // demand gauge
            Constraint::Length(4), // toggles
            Constraint::Min(3),    // action hints
        ])
        .split(area);

    let c = app.sim.controls();

    let mut weather_spans = vec![Span::raw(" ")];
    for (i, w) in [
        crate::sim::Weather::Sunny,
        crate::sim::Weather::Cloudy,
        crate::sim::Weather::Rainy,
    ]
    .into_iter()
    .enumerate()
    {
        if i > 0 {
            weather_spans.push(Span::raw("  "));
        }
        let label = format!("{w}");
        if c.weather == w {
            weather_spans.push(Span::styled(
                label,
                Style::default()
                    .fg(style::SELECTED)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            weather_spans.push(Span::styled(label, Style::default().fg(style::FOOTER_FG)));
        }
    }
    let block = Block::default().title(" Weather ").borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(Line::from(weather_spans)).block(block),
        chunks[0],
    );

    let solar = Gauge::default()
        .block(
            Block::default()
                .title(" Solar Intensity ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(style::FLOW_DOT))
        .percent(u16::from(c.solar_intensity_pct))
        .label(format!("{}%", c.solar_intensity_pct));
    frame.render_widget(solar, chunks[1]);

    let demand = Gauge::default()
        .block(
            Block::default()
                .title(" Peak Demand ")
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(style::CONSUMPTION_COLOR))
        .percent(u16::from(c.demand_level_pct))
        .label(format!("{}%", c.demand_level_pct));
    frame.render_widget(demand, chunks[2]);

    let on_off = |on: bool| if on { "ON " } else { "OFF" };
    let toggles = vec![
        Line::from(vec![
            Span::raw("  Power outage  "),
            Span::styled(
                on_off(c.power_outage),
                Style::default().fg(if c.power_outage {
                    style::severity_color(crate::model::Severity::Warning)
                } else {
                    style::FOOTER_FG
                }),
            ),
        ]),
        Line::from(vec![
            Span::raw("  Optimizer     "),
            Span::styled(
                on_off(c.optimizer_enabled),
                Style::default().fg(if c.optimizer_enabled {
                    style::GENERATION_COLOR
                } else {
                    style::FOOTER_FG
                }),
            ),
        ]),
    ];
    let block = Block::default().title(" Toggles ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(toggles).block(block), chunks[3]);

    let hints = vec![
        Line::from("  w weather   s/x solar ±5"),
        Line::from("  d/c demand ±5   o outage"),
        Line::from("  m optimizer   g run pass"),
        Line::from("  e export   r reset"),
    ];
    let block = Block::default().title(" Actions ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(hints).block(block), chunks[4]);
}

/// Latest action notice, the toast equivalent.
fn render_notice(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.notice() {
        Some(alert) => Line::from(vec![
            Span::styled(
                format!(" {} ", alert.severity),
                Style::default()
                    .fg(style::HEADER_FG)
                    .bg(style::severity_color(alert.severity)),
            ),
            Span::raw(format!(" {}", alert.message)),
        ]),
        None => Line::from(""),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Tab/1-4:Panel  Space:Pause  +/-:Speed  F1-F3:Preset  r:Reset",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
