//! Per-player state and the turn action.
//!
//! A player's turn is: roll both dice, advance by the sum, clamp at the
//! finish, and otherwise resolve the landed square's effect. All position
//! mutation funnels through `Player::relocate` so the finish clamp is
//! applied uniformly, whether the move came from dice or from a teleport.

use serde::{Deserialize, Serialize};

use crate::board::{Board, SquareEffect, START_SQUARE_NUMBER};
use crate::dice::Die;

/// Fuel every player starts a game with.
pub const INITIAL_FUEL_AMOUNT: u32 = 60;

/// A player on the track with a certain amount of rocket fuel remaining.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: usize,
    fuel: u32,
    at_finish: bool,
}

/// Snapshot of a single completed turn.
///
/// Front-ends re-render from these instead of observing live player state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Face values of the two dice.
    pub rolled: (u32, u32),
    /// Position before the move.
    pub moved_from: usize,
    /// Square reached by the dice move, after the finish clamp.
    pub landed_on: usize,
    /// Effect of the landed square, if one was resolved. `None` when the
    /// dice move itself reached the finish.
    pub effect: Option<SquareEffect>,
    /// Final position once any effect has been applied.
    pub position: usize,
    /// Fuel remaining after the turn.
    pub fuel: u32,
    /// Whether this turn put the player at the finish.
    pub reached_finish: bool,
}

impl Player {
    /// Create a player at the start square with a full tank.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: START_SQUARE_NUMBER,
            fuel: INITIAL_FUEL_AMOUNT,
            at_finish: false,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current square number, always within the track.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Fuel remaining.
    #[must_use]
    pub fn rocket_fuel(&self) -> u32 {
        self.fuel
    }

    /// Whether the player can still move: true while fuel remains.
    #[must_use]
    pub fn has_power(&self) -> bool {
        self.fuel > 0
    }

    /// Whether the player has reached the final square.
    #[must_use]
    pub fn at_finish(&self) -> bool {
        self.at_finish
    }

    /// Take one turn: roll both dice, advance, resolve the landed square.
    ///
    /// Returns `None` without touching any state when the player is
    /// already at the finish or out of fuel; the round driver skips such
    /// players, so a `None` here means the caller got its bookkeeping
    /// wrong but nothing is corrupted.
    ///
    /// Reaching or passing the finish ends the move immediately: the
    /// position clamps to the finish and no square effect is resolved.
    /// Otherwise the landed square's effect applies, and if it pushes the
    /// player past the finish the same clamp applies again.
    pub fn play(&mut self, die1: &mut Die, die2: &mut Die, board: &Board) -> Option<TurnOutcome> {
        if self.at_finish || !self.has_power() {
            return None;
        }

        let rolled = (die1.roll(), die2.roll());
        let moved_from = self.position;

        self.relocate(self.position + (rolled.0 + rolled.1) as usize, board);
        let landed_on = self.position;

        let mut effect = None;
        if !self.at_finish {
            let square = board.square_at(self.position);
            square.land_on(self, board);
            effect = Some(square.effect());
        }

        Some(TurnOutcome {
            rolled,
            moved_from,
            landed_on,
            effect,
            position: self.position,
            fuel: self.fuel,
            reached_finish: self.at_finish,
        })
    }

    /// Burn the given amount of fuel, bottoming out at zero.
    ///
    /// This is the sole path by which a player loses power; square effects
    /// call it rather than touching fuel directly. `amount` must be
    /// positive: passing zero is a caller defect and panics.
    pub fn consume_fuel(&mut self, amount: u32) {
        assert!(amount > 0, "fuel consumption must be positive");
        self.fuel = self.fuel.saturating_sub(amount);
    }

    /// Add fuel to the tank. `amount` must be positive.
    pub fn refuel(&mut self, amount: u32) {
        assert!(amount > 0, "refuel amount must be positive");
        self.fuel += amount;
    }

    /// Move the player to `target`, clamping at the board's final square.
    ///
    /// Any landing at or past the finish marks the player finished. Both
    /// dice movement and teleport effects go through here, so the clamp
    /// is uniform.
    pub(crate) fn relocate(&mut self, target: usize, board: &Board) {
        let finish = board.finish_square_number();
        if target >= finish {
            self.position = finish;
            self.at_finish = true;
        } else {
            self.position = target;
        }
    }
}
