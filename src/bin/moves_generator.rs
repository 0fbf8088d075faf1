use clap::Parser;

use hanoi_versus::ai_player::{AiPlayer, AiPlayerOptions};
use hanoi_versus::bounded_search::{SearchOptions, DEFAULT_MAX_MOVES, DEFAULT_MAX_SOLUTIONS};

#[derive(Parser, Debug)]
#[clap(name = "moves_generator")]
struct Opts {
  /// Print the randomly drawn winning sequence instead of the optimal one.
  #[clap(short, long)]
  random: bool,

  #[clap(short, long)]
  seed: Option<u64>,

  #[clap(long, default_value_t = DEFAULT_MAX_MOVES)]
  max_moves: usize,

  #[clap(long, default_value_t = DEFAULT_MAX_SOLUTIONS)]
  max_solutions: usize,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let opts: Opts = Opts::parse();

  let mut player = AiPlayer::with_options(AiPlayerOptions {
    search: SearchOptions { max_moves: opts.max_moves, max_solutions: opts.max_solutions },
    seed: opts.seed,
  })?;

  if opts.random {
    while player.has_random_solution_moves_remaining() {
      let peg_move = player.next_random_solution_move()?;
      println!("{} {}", peg_move.src_peg, peg_move.dst_peg);
    }
  } else {
    while player.has_optimal_moves_remaining() {
      let peg_move = player.next_optimal_move()?;
      println!("{} {}", peg_move.src_peg, peg_move.dst_peg);
    }
  }
  Ok(())
}
