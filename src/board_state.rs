use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::peg_move::{PegMove, NUM_PEGS};

pub const PEG_CAPACITY: usize = 3;
pub const GOAL_PEG: usize = 3;

const EMPTY: u8 = 0;
const WIN_STACK: [u8; PEG_CAPACITY] = [1, 2, 3];

pub type Grid = [[u8; PEG_CAPACITY]; NUM_PEGS];

#[derive(Error, PartialEq, Eq, Clone, Debug)]
pub enum BoardError {
  #[error("illegal move from peg {from} to peg {to}")]
  IllegalMove { from: usize, to: usize },
  #[error("disk code {0} is out of range")]
  BadDiskCode(u8),
  #[error("disk {disk} appears {count} times")]
  DiskNotConserved { disk: u8, count: usize },
  #[error("peg {0} has a larger disk above a smaller one")]
  BadStacking(usize),
}

/// Disk placement across the three pegs.  Each peg lists its disks top-first, padded with zeros.
///
/// Values are `Copy`; a move always produces a new state so paths held by the search never alias.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct BoardState {
  pegs: Grid,
}

impl BoardState {
  /// All three disks on peg 1, smallest on top.
  pub fn initial() -> Self {
    Self { pegs: [WIN_STACK, [EMPTY; PEG_CAPACITY], [EMPTY; PEG_CAPACITY]] }
  }

  pub fn from_grid(grid: Grid) -> Result<Self, BoardError> {
    let state = Self { pegs: clean_state(grid) };
    state.validate()?;
    Ok(state)
  }

  fn validate(&self) -> Result<(), BoardError> {
    let mut counts = [0usize; PEG_CAPACITY + 1];
    for peg in &self.pegs {
      for &disk in peg {
        if disk as usize > PEG_CAPACITY {
          return Err(BoardError::BadDiskCode(disk));
        }
        counts[disk as usize] += 1;
      }
    }
    for disk in 1..=PEG_CAPACITY {
      if counts[disk] != 1 {
        return Err(BoardError::DiskNotConserved { disk: disk as u8, count: counts[disk] });
      }
    }
    for (index, peg) in self.pegs.iter().enumerate() {
      let stacked = peg.iter().copied().take_while(|&d| d != EMPTY);
      if stacked.clone().zip(stacked.skip(1)).any(|(above, below)| above > below) {
        return Err(BoardError::BadStacking(index + 1));
      }
    }
    Ok(())
  }

  pub fn grid(&self) -> &Grid {
    &self.pegs
  }

  pub fn peg(&self, peg: usize) -> &[u8; PEG_CAPACITY] {
    &self.pegs[peg - 1]
  }

  pub fn top_disk(&self, peg: usize) -> Option<u8> {
    match self.peg(peg)[0] {
      EMPTY => None,
      disk => Some(disk),
    }
  }

  pub fn disk_count(&self, peg: usize) -> usize {
    self.peg(peg).iter().filter(|&&d| d != EMPTY).count()
  }

  pub fn can_move(&self, from: usize, to: usize) -> bool {
    if from == to || !is_peg_number(from) || !is_peg_number(to) {
      return false;
    }
    let disk = match self.top_disk(from) {
      Some(disk) => disk,
      None => return false,
    };
    match self.top_disk(to) {
      None => true,
      Some(top) => disk < top && self.disk_count(to) < PEG_CAPACITY,
    }
  }

  /// Transfers the top disk of `from` onto `to`, returning the normalized result.  An illegal
  /// move is rejected and `self` is left as it was.
  pub fn move_disk(&self, from: usize, to: usize) -> Result<BoardState, BoardError> {
    if !self.can_move(from, to) {
      return Err(BoardError::IllegalMove { from, to });
    }

    let mut pegs = self.pegs;
    let disk = pegs[from - 1][0];
    pegs[from - 1][0] = EMPTY;
    let dst = &mut pegs[to - 1];
    dst.rotate_right(1);
    dst[0] = disk;

    return Ok(BoardState { pegs: clean_state(pegs) });
  }

  pub fn apply(&self, peg_move: PegMove) -> Result<BoardState, BoardError> {
    let (from, to) = peg_move.peg_numbers();
    self.move_disk(from, to)
  }

  pub fn is_win(&self) -> bool {
    self.pegs[GOAL_PEG - 1] == WIN_STACK
  }
}

impl Default for BoardState {
  fn default() -> Self {
    Self::initial()
  }
}

impl fmt::Display for BoardState {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rendered: Vec<String> = self.pegs.iter()
        .map(|peg| format!("[{},{},{}]", peg[0], peg[1], peg[2]))
        .collect();
    write!(f, "{}", rendered.join(" "))
  }
}

fn is_peg_number(peg: usize) -> bool {
  (1..=NUM_PEGS).contains(&peg)
}

/// Shifts disks up within each peg so no empty slot sits above a disk.
fn clean_state(mut pegs: Grid) -> Grid {
  for peg in pegs.iter_mut() {
    let mut compacted = [EMPTY; PEG_CAPACITY];
    for (slot, disk) in peg.iter().copied().filter(|&d| d != EMPTY).enumerate() {
      compacted[slot] = disk;
    }
    *peg = compacted;
  }
  pegs
}
