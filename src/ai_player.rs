use std::collections::VecDeque;

use log::debug;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use thiserror::Error;

use crate::board_state::BoardState;
use crate::bounded_search::{BoundedSearch, SearchOptions, SearchOutcome, SolutionPath};
use crate::exploration_tree::ExplorationTree;
use crate::optimal_solver::{OptimalSolver, OptimalSolverOptions};
use crate::peg_move::PegMove;
use crate::sequence_selector::{SelectionError, SequenceSelector};

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum AiPlayerError {
  #[error("no optimal moves remaining")]
  OptimalMovesExhausted,
  #[error("no random solution moves remaining")]
  RandomSolutionMovesExhausted,
  #[error(transparent)]
  Selection(#[from] SelectionError),
}

#[derive(Debug, Default, Copy, Clone)]
pub struct AiPlayerOptions {
  pub search: SearchOptions,

  /// Fixes the solution draw.  When unset the thread-local generator is used.
  pub seed: Option<u64>,
}

/// Automated opponent for one game session.
///
/// Both move queues are filled up front: the optimal one for demonstration playback and the
/// randomly drawn winning sequence for versus play.  The exploration tree and the full solution
/// set are kept for as long as the player lives.
pub struct AiPlayer {
  optimal_moves: VecDeque<PegMove>,
  random_moves: VecDeque<PegMove>,
  chosen_index: usize,
  search: SearchOutcome,
}

impl AiPlayer {
  pub fn new() -> Result<Self, AiPlayerError> {
    Self::with_options(AiPlayerOptions::default())
  }

  pub fn with_options(options: AiPlayerOptions) -> Result<Self, AiPlayerError> {
    match options.seed {
      Some(seed) => Self::with_rng(options.search, &mut StdRng::seed_from_u64(seed)),
      None => Self::with_rng(options.search, &mut thread_rng()),
    }
  }

  pub fn with_rng<R: Rng>(search_options: SearchOptions, rng: &mut R) -> Result<Self, AiPlayerError> {
    let optimal = OptimalSolver::solve(OptimalSolverOptions::default());
    let search = BoundedSearch::run(BoardState::initial(), search_options);

    let chosen_index = SequenceSelector::select(&search.solutions, rng)?;
    let random_moves = SequenceSelector::translate(&search.solutions[chosen_index])?;
    debug!(
      "Picked solution {} of {} ({} moves)",
      chosen_index,
      search.solutions.len(),
      random_moves.len());

    Ok(Self {
      optimal_moves: VecDeque::from(optimal.required_moves),
      random_moves: VecDeque::from(random_moves),
      chosen_index,
      search,
    })
  }

  pub fn next_optimal_move(&mut self) -> Result<PegMove, AiPlayerError> {
    self.optimal_moves.pop_front().ok_or(AiPlayerError::OptimalMovesExhausted)
  }

  pub fn has_optimal_moves_remaining(&self) -> bool {
    !self.optimal_moves.is_empty()
  }

  pub fn next_random_solution_move(&mut self) -> Result<PegMove, AiPlayerError> {
    self.random_moves.pop_front().ok_or(AiPlayerError::RandomSolutionMovesExhausted)
  }

  pub fn has_random_solution_moves_remaining(&self) -> bool {
    !self.random_moves.is_empty()
  }

  pub fn remaining_optimal_moves(&self) -> usize {
    self.optimal_moves.len()
  }

  pub fn remaining_random_solution_moves(&self) -> usize {
    self.random_moves.len()
  }

  pub fn chosen_index(&self) -> usize {
    self.chosen_index
  }

  pub fn active_path(&self) -> &SolutionPath {
    &self.search.solutions[self.chosen_index]
  }

  pub fn solutions(&self) -> &[SolutionPath] {
    &self.search.solutions
  }

  pub fn exploration_tree(&self) -> &ExplorationTree<BoardState> {
    &self.search.tree
  }

  /// Hands both queues to a caller that drains them elsewhere.
  pub fn into_queues(self) -> (VecDeque<PegMove>, VecDeque<PegMove>) {
    (self.optimal_moves, self.random_moves)
  }
}
