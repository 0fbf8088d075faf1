use crate::board_state::{BoardError, BoardState};
use crate::peg_move::PegMove;

pub struct OptimalSolverOptions {
  pub num_disks: usize,
  pub src_peg: usize,
  pub dst_peg: usize,
  pub spare_peg: usize,
}

impl Default for OptimalSolverOptions {
  fn default() -> Self {
    Self { num_disks: 3, src_peg: 0, dst_peg: 2, spare_peg: 1 }
  }
}

#[derive(Debug)]
pub struct OptimalSolution {
  pub required_moves: Vec<PegMove>,
}

impl OptimalSolution {
  /// Plays every move against `board`, stopping at the first illegal one.
  pub fn replay(&self, board: BoardState) -> Result<BoardState, BoardError> {
    self.required_moves.iter().try_fold(board, |state, m| state.apply(*m))
  }
}

pub struct OptimalSolver {
  required_moves: Vec<PegMove>,
}

impl OptimalSolver {
  pub fn solve(options: OptimalSolverOptions) -> OptimalSolution {
    let capacity = (1usize << options.num_disks).saturating_sub(1);
    let mut solver = OptimalSolver { required_moves: Vec::with_capacity(capacity) };
    if options.num_disks > 0 {
      solver.solve_internal(options.num_disks, options.src_peg, options.dst_peg, options.spare_peg);
    }
    return OptimalSolution { required_moves: solver.required_moves };
  }

  fn solve_internal(&mut self, n: usize, src_peg: usize, dst_peg: usize, spare_peg: usize) {
    if n == 1 {
      self.required_moves.push(PegMove { src_peg, dst_peg });
      return;
    }
    self.solve_internal(n - 1, src_peg, spare_peg, dst_peg);
    self.required_moves.push(PegMove { src_peg, dst_peg });
    self.solve_internal(n - 1, spare_peg, dst_peg, src_peg);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_three_disks_is_seven_moves() {
    let solution = OptimalSolver::solve(OptimalSolverOptions::default());
    let expected: Vec<PegMove> = [(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        .iter()
        .map(|&(src, dst)| PegMove::new(src, dst))
        .collect();
    assert_eq!(solution.required_moves, expected);
  }

  #[test]
  fn test_replay_reaches_win() {
    let solution = OptimalSolver::solve(OptimalSolverOptions::default());
    let end = solution.replay(BoardState::initial()).unwrap();
    assert!(end.is_win());
  }

  #[test]
  fn test_move_count_is_minimal() {
    for n in 1..=10 {
      let solution = OptimalSolver::solve(OptimalSolverOptions { num_disks: n, ..Default::default() });
      assert_eq!(solution.required_moves.len(), (1 << n) - 1);
    }
  }

  #[test]
  fn test_zero_disks() {
    let solution = OptimalSolver::solve(OptimalSolverOptions { num_disks: 0, ..Default::default() });
    assert!(solution.required_moves.is_empty());
  }

  #[test]
  fn test_replay_rejects_wrong_start() {
    let solution = OptimalSolver::solve(OptimalSolverOptions::default());
    let start = BoardState::from_grid([[0, 0, 0], [0, 0, 0], [1, 2, 3]]).unwrap();
    assert_eq!(solution.replay(start), Err(BoardError::IllegalMove { from: 1, to: 3 }));
  }
}
