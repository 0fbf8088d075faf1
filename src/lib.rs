pub mod ai_player;
pub mod board_state;
pub mod bounded_search;
pub mod exploration_tree;
pub mod optimal_solver;
pub mod peg_move;
pub mod playback_runner;
pub mod sequence_selector;
