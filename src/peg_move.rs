use std::fmt;

use derive_new::new;
use serde::{Deserialize, Serialize};

pub const NUM_PEGS: usize = 3;

/// A single disk transfer as seen by the UI layer: pegs are 0-indexed.
///
/// The board and search code address pegs as 1, 2, 3.  All conversion between the two happens
/// here and nowhere else.
#[derive(new, Debug, PartialEq, Eq, Hash, Copy, Clone, Serialize, Deserialize)]
pub struct PegMove {
  pub src_peg: usize,
  pub dst_peg: usize,
}

impl PegMove {
  pub fn from_peg_numbers(from: usize, to: usize) -> Self {
    Self { src_peg: from - 1, dst_peg: to - 1 }
  }

  pub fn peg_numbers(&self) -> (usize, usize) {
    (self.src_peg + 1, self.dst_peg + 1)
  }
}

impl fmt::Display for PegMove {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} -> {}", self.src_peg, self.dst_peg)
  }
}
