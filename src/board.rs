//! Hex board state.
//!
//! The board is a rhombus of `size x size` hexagonal cells. Player X
//! owns the north and south rims and wins by connecting them; player O
//! owns the west and east rims. Besides the occupancy grid itself, the
//! board maintains two redundant views that the Monte-Carlo machinery
//! relies on:
//!
//! - a list of unoccupied cells, so playouts never have to scan the
//!   grid for empty cells;
//! - per-player occupancy bitmasks, one `u32` per row for X and one per
//!   column for O (the transposed orientation), feeding the bit-parallel
//!   win check in [`crate::connect`].
//!
//! Bit `k` of a mask is column `k` (for X) or row `k` (for O), so the
//! masks read right-to-left compared to the printed board.

use std::fmt;

use crate::connect;
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, NEIGHBOR_OFFSETS};

/// A cell coordinate as `(col, row)`, both 0-indexed.
pub type Coord = (usize, usize);

/// One of the two players.
///
/// X plays north and south, O plays west and east.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// The opponent of this player.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Result of attempting to play an invalid move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The cell already holds a stone.
    Occupied,
    /// The coordinates lie outside the board.
    OutOfRange,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Occupied => write!(f, "illegal move: cell is occupied"),
            MoveError::OutOfRange => write!(f, "illegal move: outside the board"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Rejected board size at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeError {
    TooSmall(usize),
    TooLarge(usize),
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::TooSmall(n) => {
                write!(f, "board size {n} is below the minimum of {MIN_BOARD_SIZE}")
            }
            SizeError::TooLarge(n) => {
                write!(f, "board size {n} is above the maximum of {MAX_BOARD_SIZE}")
            }
        }
    }
}

impl std::error::Error for SizeError {}

/// A copy of the per-player occupancy bitmasks.
///
/// Playouts scribble over the bitmasks of both players; saving before a
/// batch of playouts and restoring after each one is much cheaper than
/// placing and removing the simulated stones individually.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancySnapshot {
    rows_x: Vec<u32>,
    cols_o: Vec<u32>,
}

/// The playing board.
#[derive(Clone)]
pub struct HexBoard {
    size: usize,
    /// Who occupies which cell, row-major.
    cells: Vec<Option<Player>>,
    /// Cells with no stone. Order carries no meaning; playouts shuffle it.
    unoccupied: Vec<Coord>,
    /// X occupancy, one mask per row, bit k = column k.
    rows_x: Vec<u32>,
    /// O occupancy, one mask per column, bit k = row k.
    cols_o: Vec<u32>,
}

impl HexBoard {
    /// Create an empty board of the given side length.
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if size < MIN_BOARD_SIZE {
            return Err(SizeError::TooSmall(size));
        }
        if size > MAX_BOARD_SIZE {
            return Err(SizeError::TooLarge(size));
        }

        let mut unoccupied = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                unoccupied.push((col, row));
            }
        }

        Ok(Self {
            size,
            cells: vec![None; size * size],
            unoccupied,
            rows_x: vec![0; size],
            cols_o: vec![0; size],
        })
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    fn idx(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    /// The player occupying a cell, if any.
    pub fn cell(&self, col: usize, row: usize) -> Option<Player> {
        debug_assert!(col < self.size && row < self.size);
        self.cells[self.idx(col, row)]
    }

    /// Whether a cell holds a stone.
    pub fn occupied(&self, col: usize, row: usize) -> bool {
        self.cell(col, row).is_some()
    }

    /// The up-to-six hexagonal neighbors of a cell, clipped at the edges.
    pub fn neighbors(&self, col: usize, row: usize) -> Vec<Coord> {
        let mut v = Vec::with_capacity(6);
        for (dc, dr) in NEIGHBOR_OFFSETS {
            let nc = col as isize + dc;
            let nr = row as isize + dr;
            if nc >= 0 && nr >= 0 && (nc as usize) < self.size && (nr as usize) < self.size {
                v.push((nc as usize, nr as usize));
            }
        }
        v
    }

    /// All currently empty cells. The slice order is arbitrary.
    pub fn unoccupied_cells(&self) -> &[Coord] {
        &self.unoccupied
    }

    /// Play a move for `player`, returning whether it wins the game.
    ///
    /// This is the validated entry point for game-facing callers; bad
    /// coordinates come back as a [`MoveError`] rather than a panic.
    pub fn play(&mut self, col: usize, row: usize, player: Player) -> Result<bool, MoveError> {
        if col >= self.size || row >= self.size {
            return Err(MoveError::OutOfRange);
        }
        if self.cells[self.idx(col, row)].is_some() {
            return Err(MoveError::Occupied);
        }
        self.place(col, row, player);
        Ok(self.win_check(player))
    }

    /// Place a stone without checking for a win.
    ///
    /// The cell must be empty and in range; the evaluator and playout
    /// engine guarantee this themselves, so the hot path skips the
    /// checks that [`HexBoard::play`] performs.
    pub fn place(&mut self, col: usize, row: usize, player: Player) {
        debug_assert!(col < self.size && row < self.size);
        let idx = self.idx(col, row);
        debug_assert!(self.cells[idx].is_none(), "place on an occupied cell");

        self.cells[idx] = Some(player);
        let pos = self
            .unoccupied
            .iter()
            .position(|&c| c == (col, row))
            .expect("placed cell missing from the unoccupied list");
        self.unoccupied.swap_remove(pos);
        self.set_bit(col, row, player);
    }

    /// Remove a previously placed stone. The cell must be occupied.
    pub fn unplace(&mut self, col: usize, row: usize) {
        debug_assert!(col < self.size && row < self.size);
        let idx = self.idx(col, row);
        let player = self.cells[idx].expect("unplace on an empty cell");

        self.cells[idx] = None;
        self.unoccupied.push((col, row));
        self.clear_bit(col, row, player);
    }

    /// Whether `player` currently connects their two rims.
    pub fn win_check(&self, player: Player) -> bool {
        match player {
            Player::X => connect::rows_connected(&self.rows_x),
            Player::O => connect::rows_connected(&self.cols_o),
        }
    }

    /// Copy out the occupancy bitmasks of both players.
    pub fn save_occupancy(&self) -> OccupancySnapshot {
        OccupancySnapshot {
            rows_x: self.rows_x.clone(),
            cols_o: self.cols_o.clone(),
        }
    }

    /// Copy a previously saved occupancy back in, discarding whatever a
    /// playout wrote into the bitmasks since.
    pub fn restore_occupancy(&mut self, snapshot: &OccupancySnapshot) {
        self.rows_x.clone_from(&snapshot.rows_x);
        self.cols_o.clone_from(&snapshot.cols_o);
    }

    /// Set the occupancy bit of one cell for `player`.
    ///
    /// Touches only the bitmasks, not the grid or the unoccupied list;
    /// playouts use this to fill the board without the bookkeeping of
    /// [`HexBoard::place`].
    pub(crate) fn set_bit(&mut self, col: usize, row: usize, player: Player) {
        match player {
            Player::X => self.rows_x[row] |= 1 << col,
            Player::O => self.cols_o[col] |= 1 << row,
        }
    }

    fn clear_bit(&mut self, col: usize, row: usize, player: Player) {
        match player {
            Player::X => self.rows_x[row] &= !(1 << col),
            Player::O => self.cols_o[col] &= !(1 << row),
        }
    }

    /// Shuffle the unoccupied list in place.
    pub(crate) fn shuffle_unoccupied(&mut self, rng: &mut fastrand::Rng) {
        rng.shuffle(&mut self.unoccupied);
    }
}

impl fmt::Display for HexBoard {
    /// Render the board slanted, the way it is actually played:
    ///
    /// ```text
    ///      A   B   C
    ///    1  . - . - .   1
    ///        \ / \ / \
    ///      2  . - X - .   2
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.column_labels(f, 0)?;

        for row in 0..self.size {
            write!(f, "{:indent$}", "", indent = 2 * row)?;
            write!(f, "{:>4}", row + 1)?;
            for col in 0..self.size {
                let ch = match self.cell(col, row) {
                    Some(Player::X) => 'X',
                    Some(Player::O) => 'O',
                    None => '.',
                };
                write!(f, "{ch:>2}")?;
                if col + 1 < self.size {
                    write!(f, " -")?;
                }
            }
            writeln!(f, "{:>4}", row + 1)?;

            // Slanted links between this row and the next.
            if row + 1 < self.size {
                write!(f, "{:indent$}     ", "", indent = 2 * row + 2)?;
                for _ in 0..self.size - 1 {
                    write!(f, " \\ /")?;
                }
                writeln!(f, " \\")?;
            }
        }

        self.column_labels(f, 2 * self.size)
    }
}

impl HexBoard {
    fn column_labels(&self, f: &mut fmt::Formatter<'_>, indent: usize) -> fmt::Result {
        write!(f, "{:indent$}", "")?;
        for col in 0..self.size {
            write!(f, "{:>4}", (b'A' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
