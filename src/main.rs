//! Hexmc: play Hex on the console.
//!
//! ## Usage
//!
//! - `hexmc` or `hexmc play` - interactive game, human X vs AI O
//! - `hexmc play --x ai --o human` - swap the seats
//! - `hexmc demo` - watch the AI play itself on a small board

use anyhow::{Result, ensure};
use clap::{Parser, Subcommand, ValueEnum};

use hexmc::constants::{
    DEFAULT_BOARD_SIZE, DEFAULT_MAX_SIMULATIONS_PER_MOVE, DEFAULT_TOTAL_SIMULATIONS,
    MAX_BOARD_SIZE, MIN_PLAYABLE_SIZE,
};
use hexmc::game::{Checker, GameConfig, HexGame, Seat};

/// Hexmc: a Monte-Carlo Hex engine
#[derive(Parser)]
#[command(name = "hexmc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game of Hex
    Play {
        /// Side of the board
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        /// Who plays X (north-south, moves first)
        #[arg(long, value_enum, default_value = "human")]
        x: SeatArg,
        /// Who plays O (west-east)
        #[arg(long, value_enum, default_value = "ai")]
        o: SeatArg,
        /// Total simulation budget per AI move decision
        #[arg(long, default_value_t = DEFAULT_TOTAL_SIMULATIONS)]
        sims: usize,
        /// Cap on simulations spent on a single candidate cell
        #[arg(long, default_value_t = DEFAULT_MAX_SIMULATIONS_PER_MOVE)]
        max_sims_per_move: usize,
        /// Seed for reproducible AI play
        #[arg(long)]
        seed: Option<u64>,
        /// Win-detection strategy
        #[arg(long, value_enum, default_value = "sweep")]
        checker: CheckerArg,
    },
    /// Watch the AI play itself
    Demo {
        /// Side of the board
        #[arg(long, default_value_t = 5)]
        size: usize,
        /// Total simulation budget per AI move decision
        #[arg(long, default_value_t = 2_000)]
        sims: usize,
        /// Seed for reproducible play
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum SeatArg {
    Human,
    Ai,
}

impl From<SeatArg> for Seat {
    fn from(seat: SeatArg) -> Self {
        match seat {
            SeatArg::Human => Seat::Human,
            SeatArg::Ai => Seat::Ai,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum CheckerArg {
    Sweep,
    Forest,
}

impl From<CheckerArg> for Checker {
    fn from(checker: CheckerArg) -> Self {
        match checker {
            CheckerArg::Sweep => Checker::Sweep,
            CheckerArg::Forest => Checker::Forest,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.command {
        Some(Commands::Play {
            size,
            x,
            o,
            sims,
            max_sims_per_move,
            seed,
            checker,
        }) => {
            check_size(size)?;
            GameConfig {
                size,
                seat_x: x.into(),
                seat_o: o.into(),
                total_simulations: sims,
                max_simulations_per_move: max_sims_per_move,
                seed,
                checker: checker.into(),
            }
        }
        Some(Commands::Demo { size, sims, seed }) => {
            check_size(size)?;
            GameConfig {
                size,
                seat_x: Seat::Ai,
                seat_o: Seat::Ai,
                total_simulations: sims,
                seed,
                ..GameConfig::default()
            }
        }
        None => GameConfig::default(),
    };

    let mut game = HexGame::new(config)?;
    game.run()
}

fn check_size(size: usize) -> Result<()> {
    ensure!(
        (MIN_PLAYABLE_SIZE..=MAX_BOARD_SIZE).contains(&size),
        "board size must be between {MIN_PLAYABLE_SIZE} and {MAX_BOARD_SIZE}, got {size}"
    );
    Ok(())
}
