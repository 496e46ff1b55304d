//! Spin the prize wheel from the console
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spin_wheel::config::WheelConfig;
use spin_wheel::console::{ConsoleDisplay, LineInput, SpinAnimation};
use spin_wheel::logging;
use spin_wheel::wheel::{RngSource, SpinDisplay, SpinSession};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SummaryFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file with the wheel's labels, weights and max_spins
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Maximum number of spins in the session
    #[arg(short, long)]
    max_spins: Option<u32>,

    /// Seed for a reproducible session
    #[arg(short, long)]
    seed: Option<u64>,

    /// Skip the spinning animation
    #[arg(long)]
    no_animation: bool,

    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    summary_format: SummaryFormat,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose.log_level_filter());

    let wheel = match WheelConfig::resolve(args.config.as_deref(), args.max_spins)
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
    let mut input = LineInput::new(io::stdin().lock());
    let animation = (!args.no_animation).then(SpinAnimation::default);
    let mut display = ConsoleDisplay::new(io::stdout(), animation);

    display.welcome(&wheel.catalog, wheel.max_spins);
    let mut session = SpinSession::new(&wheel.catalog, wheel.max_spins);
    let summary = match session.run(&mut input, &mut display, &mut source) {
        Ok(summary) => summary,
        Err(err) => {
            log::error!("Session failed: {}", err);
            eprintln!("ERROR: {}", err);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Session ended: {:?}", summary.end);

    match args.summary_format {
        SummaryFormat::Text => display.summary(&summary),
        SummaryFormat::Json => match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{}", json),
            Err(err) => {
                eprintln!("ERROR: failed to serialize summary: {}", err);
                return ExitCode::FAILURE;
            }
        },
    }
    ExitCode::SUCCESS
}
