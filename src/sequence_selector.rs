use rand::Rng;
use thiserror::Error;

use crate::board_state::BoardState;
use crate::peg_move::{PegMove, NUM_PEGS};

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum SelectionError {
  #[error("no solutions found")]
  NoSolutionsFound,
  #[error("cannot infer the move at step {index}")]
  UntranslatableStep { index: usize },
}

pub struct SequenceSelector;

impl SequenceSelector {
  /// Draws an index uniformly over `solutions`.
  pub fn select<T, R: Rng>(solutions: &[T], rng: &mut R) -> Result<usize, SelectionError> {
    if solutions.is_empty() {
      return Err(SelectionError::NoSolutionsFound);
    }
    Ok(rng.gen_range(0..solutions.len()))
  }

  /// Recovers the move behind each consecutive pair of states by comparing the top disk of every
  /// peg before and after.
  pub fn translate(path: &[BoardState]) -> Result<Vec<PegMove>, SelectionError> {
    path.windows(2)
        .enumerate()
        .map(|(index, pair)| {
          Self::infer_move(&pair[0], &pair[1]).ok_or(SelectionError::UntranslatableStep { index })
        })
        .collect()
  }

  fn infer_move(before: &BoardState, after: &BoardState) -> Option<PegMove> {
    let mut from = None;
    let mut to = None;

    for peg in 1..=NUM_PEGS {
      match (before.top_disk(peg), after.top_disk(peg)) {
        // Gained a disk, either on an empty peg or covering a larger one.
        (None, Some(_)) => to = Some(peg),
        (Some(b), Some(a)) if a < b => to = Some(peg),
        // Lost its top disk.
        (Some(_), None) => from = Some(peg),
        (Some(b), Some(a)) if a > b => from = Some(peg),
        _ => (),
      }
    }

    match (from, to) {
      (Some(from), Some(to)) => Some(PegMove::from_peg_numbers(from, to)),
      _ => None,
    }
  }
}
