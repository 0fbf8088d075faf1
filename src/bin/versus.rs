//! Plays the AI's side of a game on a headless board:
//!
//! 1. Search for winning sequences and draw one (or take the optimal solution with `--demo`)
//! 2. Replay every move, checking each against the board rules
//! 3. Print the boards and optionally save the game record as JSON
//!
//! Useful for eyeballing how much the versus opponent varies between sessions.

use std::path::PathBuf;

use clap::Parser;

use hanoi_versus::ai_player::{AiPlayer, AiPlayerOptions};
use hanoi_versus::bounded_search::{SearchOptions, DEFAULT_MAX_MOVES, DEFAULT_MAX_SOLUTIONS};
use hanoi_versus::playback_runner::{PlaybackMode, PlaybackRunner};

#[derive(Parser, Debug)]
#[clap(name = "versus")]
struct Opts {
    #[clap(long)]
    demo: bool,

    #[clap(short, long)]
    seed: Option<u64>,

    #[clap(long, default_value_t = DEFAULT_MAX_MOVES)]
    max_moves: usize,

    #[clap(long, default_value_t = DEFAULT_MAX_SOLUTIONS)]
    max_solutions: usize,

    #[clap(long)]
    state_out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let opts: Opts = Opts::parse();

    let player = AiPlayer::with_options(AiPlayerOptions {
        search: SearchOptions { max_moves: opts.max_moves, max_solutions: opts.max_solutions },
        seed: opts.seed,
    })?;
    println!(
        "Found {} solutions ({} states explored), playing #{}...",
        player.solutions().len(),
        player.exploration_tree().len(),
        player.chosen_index());

    let mode = if opts.demo { PlaybackMode::Demo } else { PlaybackMode::Versus };
    let record = PlaybackRunner::for_player(player, mode).run(opts.state_out)?;

    println!("   start: {}", record.boards[0]);
    for (peg_move, board) in record.moves.iter().zip(&record.boards[1..]) {
        println!("  {peg_move}: {board}");
    }
    println!("Solved in {} moves.", record.moves.len());
    Ok(())
}
