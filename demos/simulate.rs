//! Batch bankroll simulation from the command line.

#![allow(clippy::missing_docs_in_private_items)]

use clap::Parser;
use tracing_subscriber::EnvFilter;

use bjsim::{BatchResult, BettingStrategy, RoundingMode, SimulationOptions, Simulator};

/// Runs many sessions with basic strategy and reports median results.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting bankroll for every session
    #[arg(short, long, default_value_t = 100)]
    bankroll: u64,

    /// Base betting unit
    #[arg(short, long, default_value_t = 10)]
    unit: u64,

    /// Number of sessions per betting system
    #[arg(short = 'n', long, default_value_t = 1_000)]
    sessions: usize,

    /// Betting system (flat, martingale, reverse-martingale, half-up, oscar), or "all"
    #[arg(short, long, default_value = "all")]
    strategy: String,

    /// Seed for the session streams
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Decks per shoe
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Dealer hits soft 17
    #[arg(long)]
    hit_soft_17: bool,

    /// Round blackjack payouts up instead of down
    #[arg(long)]
    round_up: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let rounding = if args.round_up {
        RoundingMode::Up
    } else {
        RoundingMode::Down
    };
    let options = SimulationOptions::default()
        .with_decks(args.decks)
        .with_stand_on_soft_17(!args.hit_soft_17)
        .with_rounding_blackjack(rounding);
    let simulator = Simulator::new(options, args.seed);

    println!(
        "{} sessions | bankroll {} | unit {} | {} deck(s)",
        args.sessions, args.bankroll, args.unit, args.decks
    );

    if args.strategy.eq_ignore_ascii_case("all") {
        let results = simulator.compare_strategies(args.bankroll, args.unit, args.sessions)?;
        for strategy in BettingStrategy::ALL {
            if let Some(batch) = results.get(&strategy) {
                print_batch(strategy, batch);
            }
        }
    } else {
        let strategy: BettingStrategy = args.strategy.parse()?;
        let batch = simulator.run_batch(args.bankroll, args.unit, args.sessions, strategy)?;
        print_batch(strategy, &batch);
    }

    Ok(())
}

fn print_batch(strategy: BettingStrategy, batch: &BatchResult) {
    println!(
        "{:<20} median hands {:>10.1} | median peak {:>10.1}",
        strategy.to_string(),
        batch.median_hands_to_bankruptcy,
        batch.median_peak_bankroll
    );
}
