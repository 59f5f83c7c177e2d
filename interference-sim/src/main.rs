//! Mach-Zehnder interference driver.

use clap::{Parser, Subcommand};
use log::info;
use std::f64::consts::TAU;

use interference_sim::prelude::*;

#[derive(Parser)]
#[command(name = "interference-sim")]
#[command(about = "Photon detection counts for a Mach-Zehnder interferometer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the phase and print both output ports
    Sweep {
        /// First phase (radians)
        #[arg(long, default_value_t = 0.0)]
        start: f64,
        /// Last phase (radians), included
        #[arg(long, default_value_t = TAU)]
        end: f64,
        /// Number of phase samples
        #[arg(long, default_value_t = 100)]
        samples: usize,
        /// Photon count scaling the probabilities
        #[arg(long, default_value_t = 10.0)]
        photons: f64,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Evaluate one slider setting (phase snaps to 0.1, photons to 1..=100)
    Probe {
        #[arg(long, default_value_t = 0.0)]
        phase: f64,
        #[arg(long, default_value_t = 1)]
        photons: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn print_sweep(result: &SweepResult) {
    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║     Mach-Zehnder Interferometer: Phase Sweep             ║");
    println!("╚══════════════════════════════════════════════════════════╝");
    println!();
    println!(
        "  {} photons, {} phase samples",
        result.photon_count,
        result.len()
    );
    println!();
    println!("  {:>10}  {:>12}  {:>12}", "φ (rad)", "Port 0", "Port 1");
    println!("  {:─>10}  {:─>12}  {:─>12}", "", "", "");
    for (phase, p0, p1) in result.rows() {
        println!("  {:>10.4}  {:>12.6}  {:>12.6}", phase, p0, p1);
    }
    println!();

    let (v0, v1) = result.visibility();
    println!("  Fringe visibility:  port 0 = {:.4}   port 1 = {:.4}", v0, v1);
}

fn print_reading(reading: &Reading) {
    println!(
        "Phase = {:.2} rad with {} photons",
        reading.phase, reading.photon_count
    );
    println!("  Output port 0: {:>10.4}", reading.port0);
    println!("  Output port 1: {:>10.4}", reading.port1);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            start,
            end,
            samples,
            photons,
            json,
        } => {
            let config = SweepConfig {
                start,
                end,
                samples,
                photon_count: photons,
            };
            info!("running sweep {:?}", config);
            let result = run_sweep(&config)?;
            if json {
                println!("{}", result.to_json()?);
            } else {
                print_sweep(&result);
            }
        }
        Commands::Probe {
            phase,
            photons,
            json,
        } => {
            let mut controls = Controls::default();
            let reading = controls.set(phase, photons)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&reading)?);
            } else {
                print_reading(&reading);
            }
        }
    }

    Ok(())
}
