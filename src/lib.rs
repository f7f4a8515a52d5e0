//! Hexmc: a Monte-Carlo engine for the game of Hex.
//!
//! The engine models the board, detects completed rim-to-rim
//! connections, and picks moves by statistically scoring random
//! completions of the remaining empty cells.
//!
//! ## Modules
//!
//! - [`constants`] - Board limits and engine parameters
//! - [`board`] - Board state (grid, occupancy bitmasks, unoccupied list)
//! - [`connect`] - Win detection (bit-parallel sweep and incremental forest)
//! - [`playout`] - Random board completion for position evaluation
//! - [`eval`] - Monte-Carlo best-move search
//! - [`game`] - Console game loop and coordinate notation
//!
//! ## Example
//!
//! ```
//! use hexmc::board::{HexBoard, Player};
//! use hexmc::eval::MoveEvaluator;
//!
//! let mut board = HexBoard::new(5).unwrap();
//! board.play(2, 2, Player::X).unwrap();
//!
//! // Ask the evaluator for O's best answer.
//! let mut evaluator = MoveEvaluator::with_budget(&mut board, Player::O, 200, 10);
//! evaluator.seed_rng(1);
//! let (col, row) = evaluator.best_move();
//! assert!(!board.occupied(col, row));
//! ```

pub mod board;
pub mod connect;
pub mod constants;
pub mod eval;
pub mod game;
pub mod playout;
