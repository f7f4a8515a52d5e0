//! Interactive and automatic game play.
//!
//! Drives a full game of Hex on the console: prompts humans for moves
//! in letter-number notation (`C2`), asks the Monte-Carlo evaluator for
//! AI moves, alternates turns, and announces the winner. X moves first
//! and plays north-south; O plays west-east.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::board::{Coord, HexBoard, Player, SizeError};
use crate::connect::Forest;
use crate::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_MAX_SIMULATIONS_PER_MOVE, DEFAULT_TOTAL_SIMULATIONS,
};
use crate::eval::MoveEvaluator;

/// Who controls a side.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seat {
    Human,
    Ai,
}

/// Which win-detection strategy the game uses.
///
/// Both give identical answers; the sweep recomputes per move, the
/// forest updates incrementally as stones go down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Checker {
    Sweep,
    Forest,
}

/// Settings for one game.
#[derive(Clone, Debug)]
pub struct GameConfig {
    pub size: usize,
    pub seat_x: Seat,
    pub seat_o: Seat,
    pub total_simulations: usize,
    pub max_simulations_per_move: usize,
    /// Seeds every AI evaluation; `None` draws from entropy.
    pub seed: Option<u64>,
    pub checker: Checker,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_BOARD_SIZE,
            seat_x: Seat::Human,
            seat_o: Seat::Ai,
            total_simulations: DEFAULT_TOTAL_SIMULATIONS,
            max_simulations_per_move: DEFAULT_MAX_SIMULATIONS_PER_MOVE,
            seed: None,
            checker: Checker::Sweep,
        }
    }
}

/// A game in progress.
pub struct HexGame {
    board: HexBoard,
    forest: Option<Forest>,
    current: Player,
    config: GameConfig,
    rng: fastrand::Rng,
    winner: Option<Player>,
}

impl HexGame {
    pub fn new(config: GameConfig) -> Result<Self, SizeError> {
        let board = HexBoard::new(config.size)?;
        let forest = match config.checker {
            Checker::Sweep => None,
            Checker::Forest => Some(Forest::new(config.size)),
        };
        let rng = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Ok(Self {
            board,
            forest,
            current: Player::X,
            config,
            rng,
            winner: None,
        })
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Play the game to completion on stdin/stdout.
    ///
    /// Returns early without a winner if a human seat hits end of input.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.play_on(&mut input, &mut out)
    }

    /// Same as [`HexGame::run`] over arbitrary streams.
    pub fn play_on<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<()> {
        writeln!(out, "+---------------------------+")?;
        writeln!(out, "|         Hex game          |")?;
        writeln!(out, "| End the game with ctrl+c. |")?;
        writeln!(out, "+---------------------------+")?;

        while self.winner.is_none() {
            writeln!(out, "=========================")?;
            writeln!(out, "{}", self.board)?;
            writeln!(out, "X plays north and south.")?;
            writeln!(out, "O plays west and east.")?;

            let mover = self.current;
            let (col, row) = match self.seat(mover) {
                Seat::Ai => {
                    let mv = self.ai_move();
                    writeln!(out, "Player {mover} plays {}", str_move(mv))?;
                    mv
                }
                Seat::Human => match self.prompt_move(input, out)? {
                    Some(mv) => mv,
                    // End of input: abandon the game quietly.
                    None => return Ok(()),
                },
            };

            if self.play_validated(col, row, mover) {
                self.winner = Some(mover);
            } else {
                self.current = mover.other();
            }
        }

        let winner = self.winner.context("game ended without a winner")?;
        writeln!(out, "{}", self.board)?;
        writeln!(out, "\t\t!!! Player {winner} wins !!!")?;
        Ok(())
    }

    fn seat(&self, player: Player) -> Seat {
        match player {
            Player::X => self.config.seat_x,
            Player::O => self.config.seat_o,
        }
    }

    fn ai_move(&mut self) -> Coord {
        let player = self.current;
        let seed = self.rng.u64(..);
        let mut evaluator = MoveEvaluator::with_budget(
            &mut self.board,
            player,
            self.config.total_simulations,
            self.config.max_simulations_per_move,
        );
        evaluator.seed_rng(seed);
        evaluator.best_move()
    }

    /// Read moves until one is legal; `None` on end of input.
    fn prompt_move<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
    ) -> Result<Option<Coord>> {
        loop {
            write!(out, "Player {}, please enter your move: ", self.current)?;
            out.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match parse_move(&line, self.board.size()) {
                Some((col, row)) if !self.board.occupied(col, row) => {
                    return Ok(Some((col, row)));
                }
                _ => {
                    writeln!(out, "############ Unauthorized move, try again! ###########")?;
                }
            }
        }
    }

    /// Apply a pre-validated move, returning whether it wins.
    fn play_validated(&mut self, col: usize, row: usize, player: Player) -> bool {
        match &mut self.forest {
            Some(forest) => {
                self.board.place(col, row, player);
                forest.play(col, row, player)
            }
            None => self
                .board
                .play(col, row, player)
                .expect("move was validated before play"),
        }
    }
}

/// Parse a move in letter-number notation: column `A..Z` (case
/// insensitive), row 1-based. Returns 0-based coordinates.
pub fn parse_move(text: &str, size: usize) -> Option<Coord> {
    let text = text.trim();
    let first = text.chars().next()?;
    if !first.is_ascii_alphabetic() {
        return None;
    }
    let col = (first.to_ascii_uppercase() as u8 - b'A') as usize;
    let row: usize = text[1..].trim().parse().ok()?;
    if row == 0 || col >= size || row > size {
        return None;
    }
    Some((col, row - 1))
}

/// Format a 0-based coordinate pair in letter-number notation.
pub fn str_move((col, row): Coord) -> String {
    format!("{}{}", (b'A' + col as u8) as char, row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_move_basics() {
        assert_eq!(parse_move("A1", 5), Some((0, 0)));
        assert_eq!(parse_move("c2", 5), Some((2, 1)));
        assert_eq!(parse_move("  E5 ", 5), Some((4, 4)));
    }

    #[test]
    fn parse_move_rejects_garbage() {
        assert_eq!(parse_move("", 5), None);
        assert_eq!(parse_move("11", 5), None);
        assert_eq!(parse_move("A0", 5), None);
        assert_eq!(parse_move("A6", 5), None);
        assert_eq!(parse_move("F1", 5), None);
        assert_eq!(parse_move("Ax", 5), None);
    }

    #[test]
    fn str_move_round_trip() {
        for &coord in &[(0, 0), (2, 1), (25, 25)] {
            assert_eq!(parse_move(&str_move(coord), 26), Some(coord));
        }
    }

    #[test]
    fn ai_vs_ai_game_terminates_with_a_winner() {
        let config = GameConfig {
            size: 3,
            seat_x: Seat::Ai,
            seat_o: Seat::Ai,
            total_simulations: 90,
            max_simulations_per_move: 10,
            seed: Some(11),
            checker: Checker::Sweep,
        };
        let mut game = HexGame::new(config).unwrap();
        let mut out = Vec::new();
        game.play_on(&mut io::empty(), &mut out).unwrap();
        assert!(game.winner().is_some());
    }

    #[test]
    fn forest_checker_plays_the_same_game() {
        for checker in [Checker::Sweep, Checker::Forest] {
            let config = GameConfig {
                size: 3,
                seat_x: Seat::Ai,
                seat_o: Seat::Ai,
                total_simulations: 90,
                max_simulations_per_move: 10,
                seed: Some(5),
                checker,
            };
            let mut game = HexGame::new(config).unwrap();
            let mut out = Vec::new();
            game.play_on(&mut io::empty(), &mut out).unwrap();
            assert!(game.winner().is_some(), "{checker:?} game never ended");
        }
    }

    #[test]
    fn human_input_is_validated_and_replayed() {
        let config = GameConfig {
            size: 2,
            seat_x: Seat::Human,
            seat_o: Seat::Human,
            total_simulations: 1,
            max_simulations_per_move: 1,
            seed: Some(0),
            checker: Checker::Sweep,
        };
        let mut game = HexGame::new(config).unwrap();
        // X: bad move, then B1; O: A1; X: B2 completes column B.
        let script = b"Z9\nB1\nA1\nB2\n";
        let mut out = Vec::new();
        game.play_on(&mut &script[..], &mut out).unwrap();
        assert_eq!(game.winner(), Some(Player::X));

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Unauthorized move"));
        assert!(text.contains("!!! Player X wins !!!"));
    }
}
