//! Headless arena balance simulator.
//!
//! Plays seeded runs of auto-resolved battles through the library and prints
//! a balance report.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs with incrementing seeds (default: 100)
//!   --seed N        RNG seed of the first run (default: 42)
//!   --encounters N  Encounters per run before cutting off (default: 200)
//!   --config FILE   JSON engine overrides
//!   --quick         Small batch with short cooldowns
//!   --no-heal       Never buy heals between fights
//!   --quiet         Only the summary line
//!
//! Logging follows `RUST_LOG` (default `warn`).

use gladiator::core::config::EngineConfig;
use gladiator::simulator::{run_simulation, SimConfig};
use std::process::exit;
use tracing_subscriber::EnvFilter;

struct CliArgs {
    sim: SimConfig,
    quiet: bool,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> T {
    match value.and_then(|v| v.parse().ok()) {
        Some(n) => n,
        None => {
            eprintln!("{flag} requires a number");
            exit(1);
        }
    }
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut sim = SimConfig::default();
    let mut quiet = false;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                sim.runs = parse_number("--runs", args.get(i));
            }
            "--seed" => {
                i += 1;
                sim.seed = parse_number("--seed", args.get(i));
            }
            "--encounters" => {
                i += 1;
                sim.max_encounters = parse_number("--encounters", args.get(i));
            }
            "--config" => {
                i += 1;
                sim.engine = load_engine_config(args.get(i));
            }
            "--quick" => {
                let quick = SimConfig::quick();
                sim.runs = quick.runs;
                sim.max_encounters = quick.max_encounters;
                sim.engine = quick.engine;
            }
            "--no-heal" => sim.buy_heals = false,
            "--quiet" => quiet = true,
            "--help" | "-h" => {
                print_usage();
                exit(0);
            }
            other => {
                eprintln!("Unknown argument: {other}");
                print_usage();
                exit(1);
            }
        }
        i += 1;
    }
    CliArgs { sim, quiet }
}

fn load_engine_config(path: Option<&String>) -> EngineConfig {
    let Some(path) = path else {
        eprintln!("--config requires a file path");
        exit(1);
    };
    let loaded = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| EngineConfig::from_json(&json).map_err(|e| e.to_string()));
    match loaded {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load {path}: {err}");
            exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "Arena Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs with incrementing seeds (default: 100)\n\
         \x20 --seed N        RNG seed of the first run (default: 42)\n\
         \x20 --encounters N  Encounters per run before cutting off (default: 200)\n\
         \x20 --config FILE   JSON engine overrides\n\
         \x20 --quick         Small batch with short cooldowns\n\
         \x20 --no-heal       Never buy heals between fights\n\
         \x20 --quiet         Only the summary line\n\
         \x20 --help, -h      Show this help"
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = parse_args();
    let report = run_simulation(&args.sim);

    if args.quiet {
        println!("{}", report.summary_line());
    } else {
        print!("{}", report.to_text());
    }
}
