//! Spins the wheel many times without a player and compares the observed
//! frequencies with the configured weights
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use spin_wheel::config::WheelConfig;
use spin_wheel::logging;
use spin_wheel::wheel::{weighted_random, RngSource};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the wheel's labels and weights
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, default_value_t = 100000)]
    draws: usize,
    #[arg(short, long)]
    seed: Option<u64>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose.log_level_filter());

    let wheel = match WheelConfig::resolve(args.config.as_deref(), None)
        .and_then(|config| config.build())
    {
        Ok(wheel) => wheel,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut source = RngSource(rng);

    log::info!("Running {} draws", args.draws);
    let mut hits = vec![0usize; wheel.catalog.len()];
    for _ in 0..args.draws {
        hits[weighted_random(&wheel.catalog, &mut source)] += 1;
    }

    println!("{:<20}\tExpected\tObserved", "Reward");
    for (i, entry) in wheel.catalog.entries().iter().enumerate() {
        println!(
            "{:<20}\t{:>7.2}%\t{:>7.2}%",
            entry.label,
            100.0 * wheel.catalog.probability(i),
            (100.0 * hits[i] as f64) / args.draws.max(1) as f64
        );
    }
    ExitCode::SUCCESS
}
