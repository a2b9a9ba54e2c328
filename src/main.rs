use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use path_integral::{
    read_config, write_ensemble, PathIntegralSimulation, SeededNormal, SimulationConfig, Variant,
};
use path_integral::simulation::REFERENCE_FRAME_SECONDS;

#[derive(Parser, Debug)]
#[command(version, about = "Monte Carlo path integral ensembles for a 1D particle", long_about = None)]
struct Args {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset used when no configuration file is given
    #[arg(long, value_enum, default_value_t = Variant::Desktop)]
    variant: Variant,

    /// Overrides the configured seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Simulated seconds per frame
    #[arg(long, default_value_t = REFERENCE_FRAME_SECONDS)]
    frame_dt: f64,

    /// Write the final ensemble to this file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => read_config(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => SimulationConfig {
            variant: args.variant,
            ..SimulationConfig::default()
        },
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let params = config.resolved_params();
    let mut sim = PathIntegralSimulation::with_parts(
        params,
        config.potential,
        SeededNormal::new(config.seed),
        config.schedule(),
    )?;

    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║     1D Quantum Path Integral - Monte Carlo Path Ensemble     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Paths: {}", params.path_count);
    println!("Time steps: {}", params.time_steps);
    println!("ħ = {:.4}, m = {:.4}, Δt = {:.4}", params.hbar, params.mass, params.dt);
    println!(
        "Boundaries: x(0) = {:.3}, x(T) = {:.3}",
        params.boundaries.start, params.boundaries.end
    );
    println!("Potential: {:?}", config.potential);
    println!("Seed: {}", config.seed);
    println!();

    info!(frames = args.frames, frame_dt = args.frame_dt, "running");
    let mut regenerations = 0u64;
    for _ in 0..args.frames {
        if sim.tick(args.frame_dt) {
            regenerations += 1;
        }
    }

    let ensemble = sim.ensemble();
    let stats = ensemble.stats();

    println!("=== Results ===");
    println!("Frames: {} ({:.3} s simulated)", sim.frame_count(), sim.elapsed());
    println!("Periodic regenerations: {}", regenerations);
    println!("Generation: {}", ensemble.generation());
    println!(
        "Raw amplitude sum: {:.6} {:+.6}i (|Σ| = {:.6e})",
        stats.raw_sum.re,
        stats.raw_sum.im,
        stats.raw_sum.norm()
    );
    if stats.normalized {
        println!("Normalized: |Σ a| = {:.6}", ensemble.amplitude_sum().norm());
    } else {
        println!("Normalization skipped: destructive interference");
    }
    println!(
        "Action: mean = {:.6}, min = {:.6}, max = {:.6}",
        stats.mean_action, stats.min_action, stats.max_action
    );
    println!("Largest |amplitude|: {:.6}", stats.max_magnitude);

    if let Some(path) = &args.output {
        write_ensemble(path, ensemble)
            .with_context(|| format!("writing ensemble to {}", path.display()))?;
        println!("\nEnsemble written to {}", path.display());
    }

    Ok(())
}
