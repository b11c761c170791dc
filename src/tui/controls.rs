//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, Tab};

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.speed_up(),
        KeyCode::Char('-') | KeyCode::Left => app.speed_down(),
        KeyCode::Tab => app.tab = app.tab.next(),
        KeyCode::Char('1') => app.tab = Tab::Network,
        KeyCode::Char('2') => app.tab = Tab::Trading,
        KeyCode::Char('3') => app.tab = Tab::Analytics,
        KeyCode::Char('4') => app.tab = Tab::Simulation,
        KeyCode::F(1) => app.switch_preset("baseline"),
        KeyCode::F(2) => app.switch_preset("cloudy_day"),
        KeyCode::F(3) => app.switch_preset("outage_drill"),
        KeyCode::Char('w') => {
            let alert = app.sim.cycle_weather();
            app.raise_notice(alert);
        }
        KeyCode::Char('s') => app.sim.solar_up(),
        KeyCode::Char('x') => app.sim.solar_down(),
        KeyCode::Char('d') => app.sim.demand_up(),
        KeyCode::Char('c') => app.sim.demand_down(),
        KeyCode::Char('o') => {
            let alert = app.sim.toggle_outage();
            app.raise_notice(alert);
        }
        KeyCode::Char('m') => {
            let alert = app.sim.toggle_optimizer();
            app.raise_notice(alert);
        }
        KeyCode::Char('g') => {
            let alert = app.sim.run_optimization();
            app.raise_notice(alert);
        }
        KeyCode::Char('e') => app.export_data(),
        KeyCode::Char('r') => app.restart(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;
    use crate::sim::Weather;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(&ScenarioConfig::baseline(), "baseline")
    }

    #[test]
    fn q_quits() {
        let mut a = app();
        handle_key(&mut a, press(KeyCode::Char('q')));
        assert!(a.quit);
    }

    #[test]
    fn number_keys_select_tabs() {
        let mut a = app();
        handle_key(&mut a, press(KeyCode::Char('3')));
        assert_eq!(a.tab, Tab::Analytics);
        handle_key(&mut a, press(KeyCode::Tab));
        assert_eq!(a.tab, Tab::Simulation);
    }

    #[test]
    fn weather_key_cycles_and_raises_notice() {
        let mut a = app();
        handle_key(&mut a, press(KeyCode::Char('w')));
        assert_eq!(a.sim.controls().weather, Weather::Cloudy);
        assert!(a.notice().is_some());
    }

    #[test]
    fn outage_key_toggles() {
        let mut a = app();
        handle_key(&mut a, press(KeyCode::Char('o')));
        assert!(a.sim.controls().power_outage);
        handle_key(&mut a, press(KeyCode::Char('o')));
        assert!(!a.sim.controls().power_outage);
    }

    #[test]
    fn slider_keys_nudge_by_step() {
        let mut a = app();
        let before = a.sim.controls().solar_intensity_pct;
        handle_key(&mut a, press(KeyCode::Char('s')));
        assert_eq!(a.sim.controls().solar_intensity_pct, before + 5);
        handle_key(&mut a, press(KeyCode::Char('x')));
        assert_eq!(a.sim.controls().solar_intensity_pct, before);
    }

    #[test]
    fn plain_c_nudges_demand_but_ctrl_c_quits() {
        let mut a = app();
        let before = a.sim.controls().demand_level_pct;
        handle_key(&mut a, press(KeyCode::Char('c')));
        assert_eq!(a.sim.controls().demand_level_pct, before - 5);
        assert!(!a.quit);
        handle_key(
            &mut a,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(a.quit);
    }
}
