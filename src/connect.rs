//! Win detection: is a player's pair of rims connected through their stones?
//!
//! Two interchangeable strategies live here:
//!
//! - [`rows_connected`] recomputes the answer from the per-row occupancy
//!   bitmasks on every call. It carries no state between moves, which
//!   makes `unplace` and snapshot/restore free; the Monte-Carlo
//!   evaluator depends on that, so this is what [`crate::board::HexBoard`]
//!   uses.
//! - [`Forest`] tracks connected components incrementally as stones are
//!   placed, answering the win question in near-constant time per move.
//!   Removing a stone forces a full rebuild, so it suits a real game
//!   (stones only ever go down) rather than simulations.
//!
//! Both must give the same answer after every legal move; the
//! integration tests play random games against each other to check it.

use crate::board::Player;
use crate::constants::NEIGHBOR_OFFSETS;

/// Bit-parallel sweep over per-row occupancy masks.
///
/// `rows[r]` holds the stones of one player in row `r`, bit `k` set for
/// column `k`, oriented so that the player's rims are row `0` and row
/// `rows.len() - 1` (the board stores O's stones column-wise, which
/// reduces the west-east question to the same shape).
///
/// A "combed" mask per row accumulates the cells reachable from the
/// first rim. Within a row, reachability spreads laterally; to the next
/// row it spreads straight down and down-left (`m | m >> 1`); back up it
/// spreads straight up and up-right (`m | m << 1`). Upward propagation
/// matters: a cell combed late in row `r+1` can retroactively connect
/// cells in row `r` through the diagonal. The sweep repeats until no
/// mask changes; the player wins iff the last row ends up nonzero.
///
/// With no stones on the board this returns `false`.
pub fn rows_connected(rows: &[u32]) -> bool {
    let n = rows.len();
    if n == 0 {
        return false;
    }

    // The first rim touches every cell of row 0.
    let mut comb = vec![0u32; n];
    comb[0] = rows[0];

    loop {
        let mut changed = false;
        for r in 0..n {
            let mut m = comb[r];
            if r > 0 {
                m |= (comb[r - 1] | (comb[r - 1] >> 1)) & rows[r];
            }
            if r + 1 < n {
                m |= (comb[r + 1] | (comb[r + 1] << 1)) & rows[r];
            }
            m = spread_row(m, rows[r]);
            if m != comb[r] {
                comb[r] = m;
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    comb[n - 1] != 0
}

/// Spread combed bits laterally within one row until a fixed point.
fn spread_row(mut m: u32, occupancy: u32) -> u32 {
    loop {
        let next = (m | (m << 1) | (m >> 1)) & occupancy;
        if next == m {
            return m;
        }
        m = next;
    }
}

/// Incremental connectivity over both players' stones.
///
/// Each player gets a disjoint-set forest over the `size * size` real
/// cells plus their two virtual rim vertices. Placing a stone unions it
/// with every same-colored neighbor (and the rim, if it sits on one);
/// the player has won exactly when their two rim vertices share a set.
pub struct Forest {
    size: usize,
    stones: Vec<Option<Player>>,
    x: DisjointSet,
    o: DisjointSet,
}

impl Forest {
    /// An empty forest for a board of the given side length.
    pub fn new(size: usize) -> Self {
        // Two extra vertices per player for the rims.
        let vertices = size * size + 2;
        Self {
            size,
            stones: vec![None; size * size],
            x: DisjointSet::new(vertices),
            o: DisjointSet::new(vertices),
        }
    }

    fn lin(&self, col: usize, row: usize) -> usize {
        row * self.size + col
    }

    /// Vertex id of the first rim: north for X, west for O.
    fn rim_a(&self) -> usize {
        self.size * self.size
    }

    /// Vertex id of the second rim: south for X, east for O.
    fn rim_b(&self) -> usize {
        self.size * self.size + 1
    }

    /// Place a stone and report whether it completes a connection.
    ///
    /// The cell must be empty and in range, like
    /// [`crate::board::HexBoard::place`].
    pub fn play(&mut self, col: usize, row: usize, player: Player) -> bool {
        debug_assert!(col < self.size && row < self.size);
        let v = self.lin(col, row);
        debug_assert!(self.stones[v].is_none(), "play on an occupied cell");

        self.stones[v] = Some(player);
        self.connect_stone(col, row, player);
        self.wins(player)
    }

    /// Whether `player` currently connects their two rims.
    pub fn wins(&mut self, player: Player) -> bool {
        let (a, b) = (self.rim_a(), self.rim_b());
        match player {
            Player::X => self.x.connected(a, b),
            Player::O => self.o.connected(a, b),
        }
    }

    /// Remove a stone. The cell must be occupied.
    ///
    /// Unions cannot be undone, so this rebuilds both forests from the
    /// remaining stones. Callers that need cheap undo should use the
    /// sweep-based check instead.
    pub fn unplace(&mut self, col: usize, row: usize) {
        let v = self.lin(col, row);
        debug_assert!(self.stones[v].is_some(), "unplace on an empty cell");
        self.stones[v] = None;

        let vertices = self.size * self.size + 2;
        self.x = DisjointSet::new(vertices);
        self.o = DisjointSet::new(vertices);
        for row in 0..self.size {
            for col in 0..self.size {
                if let Some(player) = self.stones[self.lin(col, row)] {
                    self.connect_stone(col, row, player);
                }
            }
        }
    }

    fn connect_stone(&mut self, col: usize, row: usize, player: Player) {
        let v = self.lin(col, row);
        let last = self.size - 1;
        let (rim_a, rim_b) = (self.rim_a(), self.rim_b());

        // Rim membership depends on the player's orientation.
        let (on_rim_a, on_rim_b) = match player {
            Player::X => (row == 0, row == last),
            Player::O => (col == 0, col == last),
        };
        let sets = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        if on_rim_a {
            sets.union(v, rim_a);
        }
        if on_rim_b {
            sets.union(v, rim_b);
        }

        for (dc, dr) in NEIGHBOR_OFFSETS {
            let nc = col as isize + dc;
            let nr = row as isize + dr;
            if nc < 0 || nr < 0 || nc as usize > last || nr as usize > last {
                continue;
            }
            let n = self.lin(nc as usize, nr as usize);
            if self.stones[n] == Some(player) {
                let sets = match player {
                    Player::X => &mut self.x,
                    Player::O => &mut self.o,
                };
                sets.union(v, n);
            }
        }
    }
}

/// Union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
            size: vec![1; n],
        }
    }

    fn find(&mut self, mut v: usize) -> usize {
        while self.parent[v] as usize != v {
            // Path halving: point v at its grandparent as we walk up.
            let grandparent = self.parent[self.parent[v] as usize];
            self.parent[v] = grandparent;
            v = grandparent as usize;
        }
        v
    }

    fn union(&mut self, a: usize, b: usize) {
        let mut ra = self.find(a);
        let mut rb = self.find(b);
        if ra == rb {
            return;
        }
        // Absorb the smaller set into the larger.
        if self.size[ra] < self.size[rb] {
            std::mem::swap(&mut ra, &mut rb);
        }
        self.parent[rb] = ra as u32;
        self.size[ra] += self.size[rb];
    }

    fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_never_connect() {
        assert!(!rows_connected(&[]));
        assert!(!rows_connected(&[0, 0, 0]));
    }

    #[test]
    fn straight_column_connects() {
        // One stone in every row, same column.
        assert!(rows_connected(&[0b010, 0b010, 0b010]));
        // A gap breaks it.
        assert!(!rows_connected(&[0b010, 0, 0b010]));
    }

    #[test]
    fn diagonal_steps_connect_downward_only_to_the_left() {
        // (1,0) -> (0,1) is adjacent (7 o'clock): connected.
        assert!(rows_connected(&[0b10, 0b01]));
        // (0,0) -> (1,1) is not adjacent on a hex board.
        assert!(!rows_connected(&[0b01, 0b10]));
    }

    #[test]
    fn lateral_spread_within_a_row() {
        // Row 0 stone at column 2, row 1 full, row 2 stone at column 0.
        assert!(rows_connected(&[0b100, 0b111, 0b001]));
    }

    #[test]
    fn upward_propagation_is_needed() {
        // The only path descends on the left, runs along row 2, climbs
        // back into row 1 through the (2,2)-(3,1) diagonal, and only
        // then descends on the right. A single top-down pass cannot
        // find it. Path: (0,0) (0,1) (0,2) (1,2) (2,2) (3,1) (4,1)
        // (4,2) (4,3) (4,4).
        let rows = [0b00001, 0b11001, 0b10111, 0b10000, 0b10000];
        assert!(rows_connected(&rows));

        // Removing the climb target (3,1) severs the path.
        let cut = [0b00001, 0b10001, 0b10111, 0b10000, 0b10000];
        assert!(!rows_connected(&cut));
    }

    #[test]
    fn forest_straight_column_wins() {
        let mut forest = Forest::new(3);
        assert!(!forest.play(1, 0, Player::X));
        assert!(!forest.play(1, 1, Player::X));
        assert!(forest.play(1, 2, Player::X));
        assert!(forest.wins(Player::X));
        assert!(!forest.wins(Player::O));
    }

    #[test]
    fn forest_row_wins_for_o_only() {
        let mut forest = Forest::new(3);
        assert!(!forest.play(0, 1, Player::O));
        assert!(!forest.play(1, 1, Player::O));
        assert!(forest.play(2, 1, Player::O));
        assert!(!forest.wins(Player::X));
    }

    #[test]
    fn forest_unplace_rebuilds() {
        let mut forest = Forest::new(3);
        forest.play(1, 0, Player::X);
        forest.play(1, 1, Player::X);
        assert!(forest.play(1, 2, Player::X));

        forest.unplace(1, 1);
        assert!(!forest.wins(Player::X));

        // Replacing the stone restores the win.
        assert!(forest.play(1, 1, Player::X));
    }

    #[test]
    fn forest_merges_two_groups() {
        let mut forest = Forest::new(4);
        // Two disconnected X groups touching each rim.
        forest.play(2, 0, Player::X);
        forest.play(2, 1, Player::X);
        forest.play(2, 3, Player::X);
        assert!(!forest.wins(Player::X));
        // The bridging stone merges them and wins.
        assert!(forest.play(2, 2, Player::X));
    }
}
