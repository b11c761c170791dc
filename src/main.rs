//! Dashboard entry point — CLI wiring and scenario-driven construction.

use std::path::Path;
use std::process;

use gridmesh::config::ScenarioConfig;
use gridmesh::io::export::export_csv;
use gridmesh::model::MetricsSample;
use gridmesh::sim::NetworkSim;

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    seed_override: Option<u64>,
    ticks_override: Option<u64>,
    export_path: Option<String>,
    headless: bool,
}

fn print_help() {
    eprintln!("gridmesh — dashboard for a simulated decentralized energy-trading network");
    eprintln!();
    eprintln!("Usage: gridmesh [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>   Load scenario from TOML config file");
    eprintln!("  --preset <name>     Use a built-in preset (baseline, cloudy_day, outage_drill)");
    eprintln!("  --seed <u64>        Override random seed");
    eprintln!("  --ticks <u64>       Number of ticks for a headless run");
    eprintln!("  --export <path>     Export metric history to CSV after a headless run");
    eprintln!("  --headless          Run without the terminal UI, printing metric samples");
    eprintln!("  --help              Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        seed_override: None,
        ticks_override: None,
        export_path: None,
        headless: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --scenario requires a path argument");
                    process::exit(1);
                }
                cli.scenario_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --seed requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(s) = args[i].parse::<u64>() {
                    cli.seed_override = Some(s);
                } else {
                    eprintln!("error: --seed value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--ticks" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --ticks requires a u64 argument");
                    process::exit(1);
                }
                if let Ok(t) = args[i].parse::<u64>() {
                    cli.ticks_override = Some(t);
                } else {
                    eprintln!("error: --ticks value \"{}\" is not a valid u64", args[i]);
                    process::exit(1);
                }
            }
            "--export" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --export requires a path argument");
                    process::exit(1);
                }
                cli.export_path = Some(args[i].clone());
            }
            "--headless" => {
                cli.headless = true;
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Runs the simulation without the UI and prints each metric sample.
fn run_headless(scenario: &ScenarioConfig, label: &str, ticks: u64, export_path: Option<&str>) {
    let mut sim = NetworkSim::from_scenario(scenario);
    let mut samples: Vec<MetricsSample> = Vec::new();
    samples.extend(sim.history().iter().cloned());

    for _ in 0..ticks {
        if let Some(sample) = sim.tick() {
            println!("{sample}");
            samples.push(sample);
        }
    }

    let m = sim.metrics();
    println!("\n--- Summary ---");
    println!("Scenario:           {label}");
    println!("Ticks executed:     {ticks}");
    println!("Metric samples:     {}", samples.len());
    println!("Final generation:   {:.1} kW", m.generation_kw);
    println!("Final consumption:  {:.1} kW", m.consumption_kw);
    println!("Final storage:      {:.1} kWh", m.storage_kwh);
    println!("Final grid load:    {:.1} %", m.grid_load_pct);
    println!("Final efficiency:   {:.1} %", m.efficiency_pct);
    println!("Carbon saved:       {:.1} kg", m.carbon_saved_kg);
    println!("Alerts in feed:     {}", sim.alerts().len());

    if let Some(path) = export_path {
        if let Err(e) = export_csv(samples.iter(), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Metric history written to {path}");
    }
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then baseline
    let (mut scenario, label) = if let Some(ref path) = cli.scenario_path {
        match ScenarioConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => (cfg, path.clone()),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ScenarioConfig::from_preset(name) {
            Ok(cfg) => (cfg, name.clone()),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        (ScenarioConfig::baseline(), "baseline".to_string())
    };

    // Apply seed override
    if let Some(seed) = cli.seed_override {
        scenario.simulation.seed = seed;
    }

    // Validate
    let errors = scenario.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    #[cfg(feature = "tui")]
    if !cli.headless {
        gridmesh::tui::run(&scenario, &label);
        return;
    }

    #[cfg(not(feature = "tui"))]
    if !cli.headless {
        eprintln!("note: built without the \"tui\" feature, falling back to a headless run");
    }

    let ticks = cli
        .ticks_override
        .unwrap_or(scenario.simulation.headless_ticks);
    run_headless(&scenario, &label, ticks, cli.export_path.as_deref());
}
