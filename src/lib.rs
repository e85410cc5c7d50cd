//! # space-race
//!
//! A board/turn engine for the Space Race dice game: players advance along
//! a fixed track by rolling two dice each turn, spend a limited fuel
//! reserve, and are subject to effects tied to the squares they land on.
//! The game ends when somebody reaches the final square or when every
//! player has run dry.
//!
//! ## Design Principles
//!
//! 1. **No hidden state**: the session is an owned value passed by
//!    reference. No singletons, no globals; resetting is explicit.
//!
//! 2. **Deterministic**: one seed drives both dice. The same seed replays
//!    the same game, and the track layout never varies between sessions.
//!
//! 3. **Data-driven board**: square behaviour is a closed effect enum
//!    resolved by a single `match`. New square kinds touch the board data,
//!    not the player logic.
//!
//! 4. **Snapshots over observation**: every round and turn yields a report
//!    value; front-ends re-render from reports instead of watching live
//!    player state.
//!
//! ## Modules
//!
//! - `rng`: seeded, forkable RNG
//! - `dice`: dice with fixed inclusive bounds
//! - `board`: the track, squares and landing effects
//! - `player`: per-player state and the turn action
//! - `session`: round orchestration and end conditions

pub mod board;
pub mod dice;
pub mod player;
pub mod rng;
pub mod session;

// Re-export commonly used types
pub use crate::board::{
    Board, BoardError, Square, SquareEffect,
    FINISH_SQUARE_NUMBER, NUMBER_OF_SQUARES, START_SQUARE_NUMBER,
};

pub use crate::dice::Die;

pub use crate::player::{Player, TurnOutcome, INITIAL_FUEL_AMOUNT};

pub use crate::rng::GameRng;

pub use crate::session::{
    GameSession, GameStatus, RoundReport, SetupError, TurnRecord,
    DEFAULT_NAMES, MAX_PLAYERS, MIN_PLAYERS,
};
