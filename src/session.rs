//! Game orchestration: player setup, rounds, end conditions.
//!
//! A session owns the board, the player list and both dice. There is no
//! process-wide game state: callers construct a session, pass it by
//! reference, and reset it explicitly between games.
//!
//! Two driving modes are supported. `play_one_round` runs every eligible
//! player once, in stable order, and returns a [`RoundReport`].
//! `play_single_turn` advances one player at a time for interactive
//! front-ends; end conditions can be checked after every unit of play.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, trace};

use crate::board::Board;
use crate::dice::Die;
use crate::player::{Player, TurnOutcome};
use crate::rng::GameRng;

/// Minimum number of players in a game.
pub const MIN_PLAYERS: usize = 2;

/// Maximum number of players in a game.
pub const MAX_PLAYERS: usize = 6;

/// Default player names, assigned in seating order.
pub const DEFAULT_NAMES: [&str; MAX_PLAYERS] = ["One", "Two", "Three", "Four", "Five", "Six"];

/// Rejected session configuration.
///
/// The session never clamps a bad player count; the caller re-prompts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("player count {count} is out of range ({MIN_PLAYERS}-{MAX_PLAYERS})")]
    PlayerCountOutOfRange { count: usize },
}

/// Where a session is in its lifecycle.
///
/// `Setup → Playing → (Finished | AllOutOfFuel)`; both end states are
/// terminal and a new game requires an explicit reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No players yet.
    Setup,
    /// At least one player can still take a turn.
    Playing,
    /// Somebody reached the final square.
    Finished,
    /// Every player is stranded without fuel.
    AllOutOfFuel,
}

/// One player's completed turn within a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    /// Index into the session's player list.
    pub player: usize,
    pub outcome: TurnOutcome,
}

/// Everything that happened in one round.
///
/// Emitted after each round so front-ends re-render from a snapshot
/// instead of observing live player state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    /// The round that was played (rounds are numbered from 1).
    pub round: u32,
    /// Turns actually taken, in player order. Finished or stranded
    /// players are absent.
    pub turns: SmallVec<[TurnRecord; MAX_PLAYERS]>,
}

/// One running game: board, players, dice and round bookkeeping.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    die1: Die,
    die2: Die,
    round: u32,
    turn_cursor: usize,
}

impl GameSession {
    /// Create a session on the standard track.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_board(Board::standard(), seed)
    }

    /// Create a session on a custom track.
    #[must_use]
    pub fn with_board(board: Board, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let die1 = Die::new(rng.fork());
        let die2 = Die::new(rng.fork());
        Self::with_dice(board, die1, die2)
    }

    /// Create a session with caller-supplied dice.
    ///
    /// The dice are the session's only randomness source, so loaded dice
    /// (degenerate bounds) make whole games fully scripted.
    #[must_use]
    pub fn with_dice(board: Board, die1: Die, die2: Die) -> Self {
        Self {
            board,
            players: Vec::new(),
            die1,
            die2,
            round: 1,
            turn_cursor: 0,
        }
    }

    /// Build the player list for a new game.
    ///
    /// Rejects counts outside `MIN_PLAYERS..=MAX_PLAYERS`. On success the
    /// previous list is replaced: `count` players with default names, a
    /// full tank and a start-square position, with the round counter and
    /// turn cursor reset.
    pub fn set_up_players(&mut self, count: usize) -> Result<(), SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
            return Err(SetupError::PlayerCountOutOfRange { count });
        }

        self.players = DEFAULT_NAMES[..count].iter().map(|&name| Player::new(name)).collect();
        self.round = 1;
        self.turn_cursor = 0;
        debug!(count, "players set up");
        Ok(())
    }

    /// Play a full round from the top of the player order.
    ///
    /// Every player who is neither finished nor out of fuel takes exactly
    /// one turn. A player reaching the finish mid-round does not cut the
    /// round short: later players still take their turn.
    pub fn play_one_round(&mut self) -> RoundReport {
        let round = self.round;
        let mut turns = SmallVec::new();

        if self.players.is_empty() {
            return RoundReport { round, turns };
        }

        debug!(round, "playing round");
        self.turn_cursor = 0;
        for index in 0..self.players.len() {
            if let Some(record) = self.take_turn(index) {
                turns.push(record);
            }
        }
        self.round += 1;
        self.turn_cursor = 0;

        RoundReport { round, turns }
    }

    /// Play the next single turn, for turn-by-turn front-ends.
    ///
    /// Walks the player order from where the previous call left off,
    /// skipping finished and stranded players, and wraps to a new round
    /// at the end of the order. Returns `None` once the game is over (or
    /// before setup). Do not interleave with `play_one_round`, which
    /// always restarts from the top of the order.
    pub fn play_single_turn(&mut self) -> Option<TurnRecord> {
        if self.players.is_empty() || self.game_finished() || self.all_out_of_fuel() {
            return None;
        }

        // Some player is still eligible, so this terminates.
        loop {
            let index = self.turn_cursor;
            self.turn_cursor += 1;
            let record = self.take_turn(index);
            if self.turn_cursor >= self.players.len() {
                self.turn_cursor = 0;
                self.round += 1;
            }
            if record.is_some() {
                return record;
            }
        }
    }

    fn take_turn(&mut self, index: usize) -> Option<TurnRecord> {
        let outcome = self.players[index].play(&mut self.die1, &mut self.die2, &self.board)?;
        trace!(
            player = %self.players[index].name(),
            rolled = ?outcome.rolled,
            position = outcome.position,
            fuel = outcome.fuel,
            "turn taken"
        );
        Some(TurnRecord { player: index, outcome })
    }

    /// True once any player has reached the final square.
    #[must_use]
    pub fn game_finished(&self) -> bool {
        self.players.iter().any(Player::at_finish)
    }

    /// True once every player has run out of fuel.
    ///
    /// Checked independently of [`Self::game_finished`]; false while the
    /// player list is empty.
    #[must_use]
    pub fn all_out_of_fuel(&self) -> bool {
        !self.players.is_empty() && self.players.iter().all(|player| !player.has_power())
    }

    /// Current lifecycle state, derived from the player list.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.players.is_empty() {
            GameStatus::Setup
        } else if self.game_finished() {
            GameStatus::Finished
        } else if self.all_out_of_fuel() {
            GameStatus::AllOutOfFuel
        } else {
            GameStatus::Playing
        }
    }

    /// Clear the session back to `Setup` for a fresh game.
    ///
    /// The board is kept; the dice keep rolling their streams.
    pub fn reset(&mut self) {
        self.players.clear();
        self.round = 1;
        self.turn_cursor = 0;
        debug!("session reset");
    }

    /// The players in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players in the current game.
    #[must_use]
    pub fn number_of_players(&self) -> usize {
        self.players.len()
    }

    /// The round about to be played (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// The track this session is played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }
}
