//! Toy Simulation CLI
//!
//! Runs a seeded road trip and a duel, then prints the report.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use toysim_runner::{RunnerConfig, ScenarioReport, run_scenario};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "toysim")]
#[command(about = "Drive a car through random waypoints and stage a duel")]
struct Args {
    /// RNG seed (random when omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of road trip legs
    #[arg(short, long)]
    legs: Option<usize>,

    /// Waypoint scatter radius
    #[arg(short, long)]
    radius: Option<f64>,

    /// Duel round limit
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Car model name
    #[arg(short, long)]
    model: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    report: ReportFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn apply(&self, config: &mut RunnerConfig) {
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(legs) = self.legs {
            config.road.legs = legs;
        }
        if let Some(radius) = self.radius {
            config.road.radius = radius;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.arena.max_rounds = max_rounds;
        }
        if let Some(model) = &self.model {
            config.road.model.clone_from(model);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = RunnerConfig::from_env();
    args.apply(&mut config);

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("toysim_runner={}", config.log_level)))?;
    if args.json_logs {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        "Starting scenario: seed {} | {} legs within {} | {} duel rounds max",
        seed, config.road.legs, config.road.radius, config.arena.max_rounds
    );

    let report = run_scenario(&config, seed)?;

    match args.report {
        ReportFormat::Json => println!("{}", report.to_json()?),
        ReportFormat::Text => print_text(&report),
    }

    Ok(())
}

fn print_text(report: &ScenarioReport) {
    let trip = &report.trip;
    println!("=== ROAD TRIP (seed {}) ===", report.seed);
    println!(
        "{} | {} legs, {} skipped | distance {:.2} | fuel used {:.2} | bought {:.2} in {} refills",
        trip.final_state,
        trip.legs.len(),
        trip.skipped(),
        trip.distance_travelled,
        trip.fuel_used,
        trip.fuel_bought,
        trip.refills
    );

    let duel = &report.duel;
    println!("=== DUEL ===");
    for round in &duel.rounds {
        let counter = round
            .countered
            .map_or_else(|| "no counter".to_string(), |c| format!("counter {c}"));
        println!(
            "#{} {} -> {} for {} ({}) | {:.2} vs {:.2}",
            round.round,
            round.attacker,
            round.target,
            round.dealt,
            counter,
            round.attacker_hp,
            round.target_hp
        );
    }
    println!("{}", duel.challenger);
    println!("{}", duel.defender);
    match &duel.winner {
        Some(winner) => println!("Winner: {winner}"),
        None => println!("No winner after {} rounds", duel.rounds.len()),
    }
}
