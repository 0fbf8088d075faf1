use log::debug;

use crate::board_state::BoardState;
use crate::exploration_tree::{ExplorationTree, NodeId};
use crate::peg_move::NUM_PEGS;

pub const DEFAULT_MAX_MOVES: usize = 20;
pub const DEFAULT_MAX_SOLUTIONS: usize = 100;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchOptions {
  /// Expansion stops once a path holds this many moves.  A win found at exactly this depth is
  /// not collected, so every solution is shorter.
  pub max_moves: usize,

  /// Expansion stops once more than this many solutions are held.  The check runs at the top of
  /// each call, so the set ends up one larger than this when enough solutions exist.
  pub max_solutions: usize,
}

impl Default for SearchOptions {
  fn default() -> Self {
    Self { max_moves: DEFAULT_MAX_MOVES, max_solutions: DEFAULT_MAX_SOLUTIONS }
  }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
  pub nodes_created: usize,
  pub redundant_rejected: usize,
  pub depth_pruned: usize,
  pub solution_cap_pruned: usize,
}

pub type SolutionPath = Vec<BoardState>;

pub struct SearchOutcome {
  pub tree: ExplorationTree<BoardState>,
  pub solutions: Vec<SolutionPath>,
  pub statistics: SearchStatistics,
}

/// One depth-first enumeration session.  Owns everything it accumulates so that independent
/// sessions never share counters.
pub struct BoundedSearch {
  options: SearchOptions,
  tree: ExplorationTree<BoardState>,
  solutions: Vec<SolutionPath>,
  statistics: SearchStatistics,
}

impl BoundedSearch {
  pub fn run(initial: BoardState, options: SearchOptions) -> SearchOutcome {
    let mut search = BoundedSearch {
      options,
      tree: ExplorationTree::new(initial),
      solutions: Vec::new(),
      statistics: SearchStatistics::default(),
    };
    let mut path = vec![initial];
    let root = search.tree.root();
    search.explore(&mut path, root);

    debug!("Search finished with {} solutions, {:?}", search.solutions.len(), search.statistics);
    return SearchOutcome {
      tree: search.tree,
      solutions: search.solutions,
      statistics: search.statistics,
    };
  }

  fn explore(&mut self, path: &mut Vec<BoardState>, node: NodeId) {
    let moves_taken = path.len() - 1;
    if moves_taken >= self.options.max_moves {
      self.statistics.depth_pruned += 1;
      return;
    }
    if self.solutions.len() > self.options.max_solutions {
      self.statistics.solution_cap_pruned += 1;
      return;
    }

    let current = *self.tree.data(node);
    if current.is_win() {
      debug!("Solution #{} in {} moves", self.solutions.len(), moves_taken);
      self.solutions.push(path.clone());
      return;
    }

    for from in 1..=NUM_PEGS {
      for to in 1..=NUM_PEGS {
        if from == to || !current.can_move(from, to) {
          continue;
        }
        let next = match current.move_disk(from, to) {
          Ok(next) => next,
          Err(_) => continue,
        };
        if path.contains(&next) {
          self.statistics.redundant_rejected += 1;
          continue;
        }
        let child = self.tree.add_child(node, next);
        self.statistics.nodes_created += 1;
        path.push(next);
        self.explore(path, child);
        path.pop();
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use super::*;

  fn assert_valid_solution(path: &SolutionPath, max_moves: usize) {
    assert_eq!(path[0], BoardState::initial());
    assert!(path.last().unwrap().is_win());
    assert!(path.len() - 1 <= max_moves);

    let unique: HashSet<&BoardState> = path.iter().collect();
    assert_eq!(unique.len(), path.len(), "path repeats a state");

    for pair in path.windows(2) {
      let reachable = (1..=3).flat_map(|f| (1..=3).map(move |t| (f, t)))
          .filter(|&(f, t)| pair[0].can_move(f, t))
          .any(|(f, t)| pair[0].move_disk(f, t).unwrap() == pair[1]);
      assert!(reachable, "{} does not lead to {}", pair[0], pair[1]);
    }
  }

  #[test]
  fn test_default_bounds() {
    let outcome = BoundedSearch::run(BoardState::initial(), SearchOptions::default());

    // The cap is checked before each expansion, so one extra solution slips in.
    assert_eq!(outcome.solutions.len(), DEFAULT_MAX_SOLUTIONS + 1);
    for path in &outcome.solutions {
      assert_valid_solution(path, DEFAULT_MAX_MOVES - 1);
    }
    assert_eq!(outcome.tree.len(), 1006);
    assert_eq!(outcome.statistics.nodes_created, outcome.tree.len() - 1);
    assert!(outcome.statistics.solution_cap_pruned > 0);
  }

  #[test]
  fn test_enumeration_order_is_stable() {
    let outcome = BoundedSearch::run(BoardState::initial(), SearchOptions::default());
    let lengths: Vec<usize> = outcome.solutions.iter().take(6).map(|p| p.len() - 1).collect();
    assert_eq!(lengths, vec![14, 13, 17, 16, 18, 17]);

    let first = &outcome.solutions[0];
    assert_eq!(first[1].grid(), &[[2, 3, 0], [1, 0, 0], [0, 0, 0]]);
    assert_eq!(first[2].grid(), &[[3, 0, 0], [1, 0, 0], [2, 0, 0]]);
  }

  #[test]
  fn test_shortest_bound_yields_only_optimal_path() {
    let options = SearchOptions { max_moves: 8, ..Default::default() };
    let outcome = BoundedSearch::run(BoardState::initial(), options);
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.solutions[0].len(), 8);
    assert_valid_solution(&outcome.solutions[0], 7);
  }

  #[test]
  fn test_win_at_depth_bound_is_not_collected() {
    let options = SearchOptions { max_moves: 7, ..Default::default() };
    let outcome = BoundedSearch::run(BoardState::initial(), options);
    assert!(outcome.solutions.is_empty());
    assert!(outcome.statistics.depth_pruned > 0);
  }

  #[test]
  fn test_small_solution_cap() {
    let options = SearchOptions { max_solutions: 0, ..Default::default() };
    let outcome = BoundedSearch::run(BoardState::initial(), options);
    assert_eq!(outcome.solutions.len(), 1);
    assert_eq!(outcome.tree.len(), 32);

    let options = SearchOptions { max_solutions: 5, ..Default::default() };
    let outcome = BoundedSearch::run(BoardState::initial(), options);
    assert_eq!(outcome.solutions.len(), 6);
  }

  #[test]
  fn test_tree_paths_match_solutions() {
    let options = SearchOptions { max_solutions: 0, ..Default::default() };
    let outcome = BoundedSearch::run(BoardState::initial(), options);
    let winning_leaf = outcome.tree.leaves()
        .find(|id| outcome.tree.data(*id).is_win())
        .unwrap();
    assert_eq!(outcome.tree.path_to(winning_leaf), outcome.solutions[0]);
  }

  #[test]
  fn test_start_on_win_collects_trivial_path() {
    let won = BoardState::from_grid([[0, 0, 0], [0, 0, 0], [1, 2, 3]]).unwrap();
    let outcome = BoundedSearch::run(won, SearchOptions::default());
    assert_eq!(outcome.solutions, vec![vec![won]]);
    assert_eq!(outcome.tree.len(), 1);
  }
}
