//! Random playouts (board completion).
//!
//! Hex never ends in a draw: a completely filled board is won by
//! exactly one player, whatever order the stones went down in. A
//! playout therefore does not simulate turns at all; it deals the empty
//! cells out randomly between the two players with the right parity and
//! asks the win check who ended up connected.

use crate::board::{HexBoard, Player};

/// Fill the remaining empty cells with a uniformly random assignment
/// and report whether `check_player` wins the completed board.
///
/// `next_player` is the side whose turn it is; with an odd number of
/// empty cells they receive one stone more than the opponent, matching
/// alternating play.
///
/// Destructive: the occupancy bitmasks of both players are overwritten
/// and the unoccupied list is left shuffled (its order carries no
/// meaning). The grid and the unoccupied list contents are untouched,
/// so bracketing calls with [`HexBoard::save_occupancy`] and
/// [`HexBoard::restore_occupancy`] fully undoes a playout.
pub fn fill_up_half_and_win_check(
    board: &mut HexBoard,
    next_player: Player,
    check_player: Player,
    rng: &mut fastrand::Rng,
) -> bool {
    board.shuffle_unoccupied(rng);

    let remaining = board.unoccupied_cells().len();
    let half = remaining.div_ceil(2);
    for i in 0..remaining {
        let (col, row) = board.unoccupied_cells()[i];
        let player = if i < half {
            next_player
        } else {
            next_player.other()
        };
        board.set_bit(col, row, player);
    }

    board.win_check(check_player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_board_has_exactly_one_winner() {
        let mut rng = fastrand::Rng::with_seed(7);
        for size in 2..=8 {
            for _ in 0..50 {
                let mut board = HexBoard::new(size).unwrap();
                fill_up_half_and_win_check(&mut board, Player::X, Player::X, &mut rng);
                let x_wins = board.win_check(Player::X);
                let o_wins = board.win_check(Player::O);
                assert!(
                    x_wins ^ o_wins,
                    "size {size}: X={x_wins} O={o_wins} on a full board"
                );
            }
        }
    }

    #[test]
    fn playout_is_undone_by_restore() {
        let mut board = HexBoard::new(5).unwrap();
        board.place(2, 2, Player::X);
        board.place(1, 3, Player::O);

        let snapshot = board.save_occupancy();
        let mut rng = fastrand::Rng::with_seed(42);
        fill_up_half_and_win_check(&mut board, Player::O, Player::X, &mut rng);
        board.restore_occupancy(&snapshot);
        assert_eq!(board.save_occupancy(), snapshot);
    }

    #[test]
    fn lone_empty_cell_goes_to_the_player_to_move() {
        // 2x2 board, three stones down, one hole at (1,1). If X takes
        // it, X's column 1 is complete (north-south via rows 0 and 1).
        let mut board = HexBoard::new(2).unwrap();
        board.place(1, 0, Player::X);
        board.place(0, 0, Player::O);
        board.place(0, 1, Player::O);

        let mut rng = fastrand::Rng::with_seed(1);
        let x_wins = fill_up_half_and_win_check(&mut board, Player::X, Player::X, &mut rng);
        assert!(x_wins);
    }
}
