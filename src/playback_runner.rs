use std::collections::VecDeque;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{anyhow, Context};
use log::{error, trace};
use serde::{Deserialize, Serialize};

use crate::ai_player::AiPlayer;
use crate::board_state::BoardState;
use crate::peg_move::PegMove;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum PlaybackMode {
    Demo,
    Versus,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<PegMove>,
    /// Board after each move, starting with the board before the first one.
    pub boards: Vec<BoardState>,
}

impl GameRecord {
    pub fn final_board(&self) -> Option<&BoardState> {
        self.boards.last()
    }

    pub fn save(&self, state_out: impl AsRef<Path>) -> anyhow::Result<()> {
        let file = File::create(state_out)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, self)?;
        Ok(())
    }
}

/// Drains a move queue against a headless board the way the UI would on the AI's turns.
pub struct PlaybackRunner {
    board: BoardState,
    moves_queue: VecDeque<PegMove>,
}

impl PlaybackRunner {
    pub fn new(board: BoardState, moves_queue: VecDeque<PegMove>) -> Self {
        Self { board, moves_queue }
    }

    pub fn for_player(player: AiPlayer, mode: PlaybackMode) -> Self {
        let (optimal_moves, random_moves) = player.into_queues();
        let moves_queue = match mode {
            PlaybackMode::Demo => optimal_moves,
            PlaybackMode::Versus => random_moves,
        };
        Self::new(BoardState::initial(), moves_queue)
    }

    pub fn run(mut self, state_out: Option<impl AsRef<Path>>) -> anyhow::Result<GameRecord> {
        let mut record = GameRecord { moves: vec![], boards: vec![self.board] };

        let result = loop {
            let next_move = match self.moves_queue.pop_front() {
                Some(next_move) => next_move,
                None if self.board.is_win() => break Ok(()),
                None => break Err(anyhow!("Ran out of moves on {}", self.board)),
            };
            match self.board.apply(next_move) {
                Ok(next_board) => {
                    trace!("{next_move}: {next_board}");
                    self.board = next_board;
                    record.moves.push(next_move);
                    record.boards.push(next_board);
                }
                Err(e) => {
                    break Err(e).with_context(|| format!("Playing move {} on {}", next_move, self.board))
                }
            }
        };

        if let Some(state_out) = state_out {
            log::info!("Saving state to {:?}", state_out.as_ref().display());
            if let Err(e) = record.save(state_out) {
                error!("Error saving state: {e:?}!");
            }
        }

        result.map(|_| record)
    }
}
