//! Monte-Carlo move evaluation.
//!
//! For every empty cell, tentatively place the tested player's stone
//! there, run a budgeted number of random board completions, and score
//! the cell by how many of them the player won. The cell with the best
//! score is the move to play. Placing a stone that wins outright skips
//! the sampling entirely.

use crate::board::{Coord, HexBoard, Player};
use crate::constants::{DEFAULT_MAX_SIMULATIONS_PER_MOVE, DEFAULT_TOTAL_SIMULATIONS};
use crate::playout::fill_up_half_and_win_check;

/// Evaluates the best next move for one player on a borrowed board.
///
/// The board is mutated during evaluation (tentative stones, playout
/// scribbling) but is back in its starting state when
/// [`MoveEvaluator::best_move`] returns.
pub struct MoveEvaluator<'a> {
    board: &'a mut HexBoard,
    player: Player,
    /// Total playout budget, shared between all candidate cells.
    total_simulations: usize,
    /// Cap on the playouts spent on any single candidate.
    max_simulations_per_move: usize,
    rng: fastrand::Rng,
}

impl<'a> MoveEvaluator<'a> {
    /// An evaluator with the default simulation budget.
    pub fn new(board: &'a mut HexBoard, player: Player) -> Self {
        Self::with_budget(
            board,
            player,
            DEFAULT_TOTAL_SIMULATIONS,
            DEFAULT_MAX_SIMULATIONS_PER_MOVE,
        )
    }

    /// An evaluator with an explicit budget: `total_simulations` split
    /// across all candidates, at most `max_simulations_per_move` each.
    pub fn with_budget(
        board: &'a mut HexBoard,
        player: Player,
        total_simulations: usize,
        max_simulations_per_move: usize,
    ) -> Self {
        Self {
            board,
            player,
            total_simulations,
            max_simulations_per_move,
            rng: fastrand::Rng::new(),
        }
    }

    /// Reseed the playout generator, for reproducible evaluations.
    pub fn seed_rng(&mut self, seed: u64) {
        self.rng = fastrand::Rng::with_seed(seed);
    }

    /// Find the empty cell with the best estimated win rate.
    ///
    /// The board must have at least one empty cell; the game loop only
    /// calls this on a non-terminal position.
    pub fn best_move(&mut self) -> Coord {
        let candidates: Vec<Coord> = self.board.unoccupied_cells().to_vec();
        let simulations = simulations_per_move(
            self.total_simulations,
            self.max_simulations_per_move,
            candidates.len(),
        );

        let mut best: Option<(usize, Coord)> = None;
        for (col, row) in candidates {
            // Tentative stone first: an outright win needs no sampling.
            self.board.place(col, row, self.player);
            if self.board.win_check(self.player) {
                self.board.unplace(col, row);
                return (col, row);
            }

            let snapshot = self.board.save_occupancy();
            let mut score = 0usize;
            for _ in 0..simulations {
                // The tested player just moved, so the opponent is next.
                let win = fill_up_half_and_win_check(
                    self.board,
                    self.player.other(),
                    self.player,
                    &mut self.rng,
                );
                if win {
                    score += 1;
                }
                self.board.restore_occupancy(&snapshot);
            }
            self.board.unplace(col, row);

            // Strict comparison: the first-seen cell keeps a tie.
            if best.is_none_or(|(s, _)| score > s) {
                best = Some((score, (col, row)));
            }
        }

        best.expect("best_move called on a full board").1
    }
}

/// Divide the total budget across candidates, clamped to
/// `1..=max_per_move`.
fn simulations_per_move(total: usize, max_per_move: usize, candidates: usize) -> usize {
    (total / candidates).clamp(1, max_per_move.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_is_clamped_to_the_per_move_cap() {
        assert_eq!(simulations_per_move(20_000, 1_000, 4), 1_000);
        assert_eq!(simulations_per_move(20_000, 1_000, 40), 500);
    }

    #[test]
    fn budget_is_never_zero() {
        assert_eq!(simulations_per_move(10, 1_000, 100), 1);
        assert_eq!(simulations_per_move(0, 1_000, 5), 1);
        assert_eq!(simulations_per_move(1, 1, 1), 1);
    }

    #[test]
    fn board_is_unchanged_after_evaluation() {
        let mut board = HexBoard::new(4).unwrap();
        board.play(1, 1, Player::X).unwrap();
        board.play(2, 2, Player::O).unwrap();
        let snapshot = board.save_occupancy();
        let free = board.unoccupied_cells().len();

        let mut evaluator = MoveEvaluator::with_budget(&mut board, Player::X, 60, 5);
        evaluator.seed_rng(3);
        evaluator.best_move();

        assert_eq!(board.save_occupancy(), snapshot);
        assert_eq!(board.unoccupied_cells().len(), free);
    }
}
