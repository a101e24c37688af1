use clap::Parser;
use log::{error, info};
use poker_eval::simulation::{Simulation, SimulationConfig};
use std::process::ExitCode;

/// Deal random heads-up hands and report who wins with what.
#[derive(Debug, Parser)]
#[clap(version)]
struct Cli {
    /// Number of deals to simulate.
    #[clap(long, short, default_value_t = 20)]
    trials: usize,
    /// Cards dealt to each player before picking the best five.
    #[clap(long, short, default_value_t = 7, value_parser = clap::value_parser!(u8).range(5..=26))]
    cards: u8,
    /// Seed for a reproducible run.
    #[clap(long, short)]
    seed: Option<u64>,
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    info!("poker-sim {}", poker_eval::VERSION);
    let config = SimulationConfig {
        trials: cli.trials,
        cards_per_player: cli.cards as usize,
        seed: cli.seed,
    };

    match Simulation::new(config).and_then(|sim| sim.run()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
