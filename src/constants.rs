//! Board limits and engine parameters.
//!
//! Unlike Go engines that fix the board size at compile time, Hex is
//! playable on any square board, so the size is a runtime value bounded
//! by [`MIN_BOARD_SIZE`] and [`MAX_BOARD_SIZE`].

/// Smallest board the library accepts. A 2x2 board is already a valid
/// (if trivial) game of Hex.
pub const MIN_BOARD_SIZE: usize = 2;

/// Largest board the library accepts. Columns are labeled A..Z, and the
/// per-row occupancy masks are u32, so 26 is the cap either way.
pub const MAX_BOARD_SIZE: usize = 26;

/// Smallest board worth playing interactively.
pub const MIN_PLAYABLE_SIZE: usize = 3;

/// Default board side for the CLI.
pub const DEFAULT_BOARD_SIZE: usize = 11;

/// Default total simulation budget for one best-move evaluation,
/// shared between all candidate cells.
pub const DEFAULT_TOTAL_SIMULATIONS: usize = 20_000;

/// Default cap on the number of playouts spent on a single candidate
/// cell, so nearly-empty boards do not take forever.
pub const DEFAULT_MAX_SIMULATIONS_PER_MOVE: usize = 1_000;

/// Offsets `(dcol, drow)` to the six neighbors of a hex cell, in clock
/// order: 3, 5, 7, 9, 11, 1 o'clock on the rhombus-projected grid.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 6] = [
    (1, 0),   // 3 o'clock
    (0, 1),   // 5 o'clock
    (-1, 1),  // 7 o'clock
    (-1, 0),  // 9 o'clock
    (0, -1),  // 11 o'clock
    (1, -1),  // 1 o'clock
];
