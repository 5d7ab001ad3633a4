//! Round simulator CLI: settle a recorded round, or many synthesized ones.
//!
//! Every round runs through the same `settle_round` entry point, so the
//! output files double as a regression corpus for the engines.

mod output;
mod synth;
mod telemetry;
mod types;

use std::collections::BTreeMap;
use std::time::Instant;

use clap::Parser;
use golf_core::domain::PlayerId;
use golf_core::{settle_round, CoreRoundData, GameConfig, RoundFile, RoundSettlement};
use output::{OutputWriter, RoundRecord};
use synth::{default_games, RoundSynthesizer};
use tracing::{info, warn};
use types::OutputFormat;

#[derive(Parser)]
#[command(name = "round-sim")]
#[command(about = "Settle golf rounds and wagers from a round file or synthesized scorecards")]
struct Args {
    /// Round file (JSON); when omitted, rounds are synthesized
    #[arg(long)]
    round_file: Option<String>,

    /// Number of rounds to synthesize
    #[arg(short, long, default_value = "1", conflicts_with = "round_file")]
    rounds: u32,

    /// Players per synthesized round
    #[arg(short, long, default_value = "4", conflicts_with = "round_file")]
    players: usize,

    /// Seed for synthesized rounds; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Show output summary and file paths
    #[arg(long)]
    show_output: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Output directory for results
    #[arg(long, default_value = "./round-results")]
    output_dir: String,

    /// Output format
    #[arg(long, default_value = "jsonl")]
    output_format: OutputFormat,
}

/// A round ready to settle, plus the seed that produced it if synthesized.
struct PendingRound {
    data: CoreRoundData,
    games: Vec<GameConfig>,
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    telemetry::init_tracing(filter, args.log_json);

    let rounds = load_rounds(&args)?;
    if args.show_output {
        info!("Settling {} round(s)", rounds.len());
    }

    let mut output_writer = OutputWriter::new(&args.output_dir, &args.output_format)?;

    let start = Instant::now();
    let mut settled = Vec::new();
    let mut errors = 0u32;
    let total = rounds.len();

    for (round_id, pending) in rounds.into_iter().enumerate() {
        let round_id = round_id as u32 + 1;
        match settle_round(&pending.data, &pending.games) {
            Ok(settlement) => {
                let record = RoundRecord {
                    round_id,
                    seed: pending.seed,
                    settlement: &settlement,
                };
                if let Err(e) = output_writer.write_round(&record) {
                    warn!("Failed to write round {}: {}", round_id, e);
                }
                if args.verbose {
                    info!(
                        "Round {} settled: {} transfer(s)",
                        round_id,
                        settlement.settlement.transfers.len()
                    );
                }
                settled.push(settlement);
            }
            Err(e) => {
                errors += 1;
                warn!("Round {} failed: {}", round_id, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (results_path, csv_path) = output_writer.output_paths();
    let (results_path, csv_path) = (results_path.clone(), csv_path.clone());
    output_writer.finish()?;

    if args.show_output {
        info!("Round results written to: {}", results_path.display());
        info!("Transfers CSV written to: {}", csv_path.display());
        print_summary(&settled, errors, elapsed, total);
    }

    Ok(())
}

fn load_rounds(args: &Args) -> Result<Vec<PendingRound>, Box<dyn std::error::Error>> {
    if let Some(path) = &args.round_file {
        let file = RoundFile::from_path(path)?;
        let data = file.to_round();
        let games = if file.games.is_empty() {
            default_games(data.players.len())
        } else {
            file.games.clone()
        };
        return Ok(vec![PendingRound {
            data,
            games,
            seed: file.estimator_seed,
        }]);
    }

    if args.players < 2 {
        return Err(format!("need at least 2 players, got {}", args.players).into());
    }
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut synth = RoundSynthesizer::new(seed, args.players);
    let games = default_games(synth.players().len());
    Ok((0..args.rounds)
        .map(|_| PendingRound {
            data: synth.next_round(),
            games: games.clone(),
            seed: Some(seed),
        })
        .collect())
}

fn print_summary(results: &[RoundSettlement], errors: u32, elapsed: std::time::Duration, total: usize) {
    println!("\n=== Settlement Summary ===");
    println!("Rounds settled: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {}", errors);
    }
    println!("Total time: {:?}", elapsed);

    if results.is_empty() {
        return;
    }

    let mut totals: BTreeMap<PlayerId, i128> = BTreeMap::new();
    let mut transfers = 0usize;
    for result in results {
        for (player, balance) in &result.settlement.balances {
            *totals.entry(player.clone()).or_default() += balance;
        }
        transfers += result.settlement.transfers.len();
    }

    println!(
        "Average transfers per round: {:.2}",
        transfers as f64 / results.len() as f64
    );
    println!("\n=== Net Balance by Player (sats) ===");
    for (player, balance) in &totals {
        println!("{player}: {balance:+}");
    }
}
