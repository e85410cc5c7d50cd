//! Squares and their landing effects.
//!
//! Effect logic lives on the square, not the player: the board stays
//! data-driven and new square kinds only touch the [`SquareEffect`] enum.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::player::Player;

/// What happens to a player who lands on a square.
///
/// A closed set dispatched by a single `match`. Effects apply exactly once
/// per landing event and never chain: a teleport destination does not
/// trigger its own landing effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareEffect {
    /// Nothing happens.
    Neutral,
    /// The player gains the given amount of fuel.
    FuelBonus(u32),
    /// The player burns the given amount of fuel.
    FuelPenalty(u32),
    /// The player is moved to the given square number. Targets behind the
    /// current position are allowed; a target at or past the finish counts
    /// as finishing.
    Teleport(usize),
    /// The player is moved straight to the finish square.
    InstantWin,
    /// The player loses all remaining fuel and is stranded.
    InstantLoss,
}

/// A single square on the track, identified by its position.
///
/// Squares are built once with the board and never change afterwards;
/// they carry no per-player state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    number: usize,
    effect: SquareEffect,
}

impl Square {
    pub(crate) const fn new(number: usize, effect: SquareEffect) -> Self {
        Self { number, effect }
    }

    /// Position of this square on the track.
    #[must_use]
    pub fn number(&self) -> usize {
        self.number
    }

    /// The effect applied when a player lands here.
    #[must_use]
    pub fn effect(&self) -> SquareEffect {
        self.effect
    }

    /// Apply this square's effect to the given player.
    ///
    /// Called exactly once per landing event. A player who has already
    /// reached the finish is never reactivated, even if a caller lands
    /// them here by mistake.
    pub fn land_on(&self, player: &mut Player, board: &Board) {
        if player.at_finish() {
            return;
        }

        match self.effect {
            SquareEffect::Neutral => {}
            SquareEffect::FuelBonus(amount) => player.refuel(amount),
            SquareEffect::FuelPenalty(amount) => player.consume_fuel(amount),
            SquareEffect::Teleport(target) => player.relocate(target, board),
            SquareEffect::InstantWin => player.relocate(board.finish_square_number(), board),
            SquareEffect::InstantLoss => {
                let remaining = player.rocket_fuel();
                if remaining > 0 {
                    player.consume_fuel(remaining);
                }
            }
        }
    }
}
