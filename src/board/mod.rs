//! The track: an ordered, dense sequence of squares.
//!
//! The standard layout is fixed and identical across sessions, so games
//! are reproducible given the dice seed. Custom layouts are available for
//! scenarios and tests via [`Board::with_layout`].

pub mod square;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use square::{Square, SquareEffect};

/// First square of the track; every player starts here.
pub const START_SQUARE_NUMBER: usize = 0;

/// Number of squares on the standard track.
pub const NUMBER_OF_SQUARES: usize = 56;

/// Final square of the standard track; reaching it wins the game.
pub const FINISH_SQUARE_NUMBER: usize = NUMBER_OF_SQUARES - 1;

/// Forward jumps on the standard track: (square, destination).
const WORMHOLES: &[(usize, usize)] = &[
    (2, 22),
    (5, 17),
    (12, 24),
    (16, 47),
    (29, 38),
    (40, 51),
    (45, 54),
];

/// Backward jumps on the standard track: (square, destination).
const BLACKHOLES: &[(usize, usize)] = &[
    (10, 4),
    (26, 8),
    (30, 14),
    (35, 11),
    (49, 13),
    (52, 41),
];

/// Refuelling stations on the standard track: (square, fuel gained).
const FUEL_STATIONS: &[(usize, u32)] = &[(7, 6), (21, 8), (33, 10), (42, 6)];

/// Debris fields on the standard track: (square, fuel burned).
const DEBRIS_FIELDS: &[(usize, u32)] = &[
    (14, 8),
    (19, 6),
    (27, 10),
    (37, 8),
    (44, 6),
    (51, 10),
];

/// Rejected custom layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("track needs at least one square after the start, finish was {finish}")]
    NoRoom { finish: usize },
    #[error("square {square} is outside the track (finish is {finish})")]
    EffectOutOfRange { square: usize, finish: usize },
    #[error("square {square} is a terminal square and cannot carry an effect")]
    EffectOnTerminalSquare { square: usize },
    #[error("square {square} already carries an effect")]
    DuplicateEffect { square: usize },
    #[error("square {square} has a zero fuel adjustment")]
    ZeroFuelAmount { square: usize },
}

/// The full ordered track from start to finish.
///
/// Owned by the session; players hold a shared reference for lookups.
/// Square indices are contiguous: every position in
/// `START_SQUARE_NUMBER..=finish` has exactly one square.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
}

impl Board {
    /// Build the standard 56-square track.
    ///
    /// The layout is fixed, never randomized per game: wormholes jump
    /// forward, blackholes drag backward, fuel stations refuel and debris
    /// fields burn fuel. Start and finish squares are plain.
    #[must_use]
    pub fn standard() -> Self {
        let mut effects = Vec::new();
        for &(square, target) in WORMHOLES.iter().chain(BLACKHOLES) {
            effects.push((square, SquareEffect::Teleport(target)));
        }
        for &(square, amount) in FUEL_STATIONS {
            effects.push((square, SquareEffect::FuelBonus(amount)));
        }
        for &(square, amount) in DEBRIS_FIELDS {
            effects.push((square, SquareEffect::FuelPenalty(amount)));
        }
        Self::with_layout(FINISH_SQUARE_NUMBER, &effects)
            .expect("standard layout tables are valid")
    }

    /// Build a custom track ending at `finish`, with the given effects.
    ///
    /// Positions not listed are neutral. The start and finish squares must
    /// stay effect-free: the finish is terminal and the start is where
    /// everyone already stands. Teleport targets past the finish are legal
    /// and clamp to the finish when applied.
    pub fn with_layout(
        finish: usize,
        effects: &[(usize, SquareEffect)],
    ) -> Result<Self, BoardError> {
        if finish <= START_SQUARE_NUMBER {
            return Err(BoardError::NoRoom { finish });
        }

        let mut squares: Vec<Square> = (START_SQUARE_NUMBER..=finish)
            .map(|number| Square::new(number, SquareEffect::Neutral))
            .collect();

        for &(number, effect) in effects {
            if number > finish {
                return Err(BoardError::EffectOutOfRange { square: number, finish });
            }
            if number == START_SQUARE_NUMBER || number == finish {
                return Err(BoardError::EffectOnTerminalSquare { square: number });
            }
            if squares[number].effect() != SquareEffect::Neutral {
                return Err(BoardError::DuplicateEffect { square: number });
            }
            if matches!(effect, SquareEffect::FuelBonus(0) | SquareEffect::FuelPenalty(0)) {
                return Err(BoardError::ZeroFuelAmount { square: number });
            }
            squares[number] = Square::new(number, effect);
        }

        Ok(Self { squares })
    }

    /// Look up the square at the given position.
    ///
    /// Positions outside the track are a caller defect, not a game state:
    /// movement clamps to the finish before any lookup. Panics loudly on
    /// an out-of-range position.
    #[must_use]
    pub fn square_at(&self, number: usize) -> &Square {
        let finish = self.finish_square_number();
        assert!(
            number <= finish,
            "square {number} is outside the track (finish is {finish})"
        );
        &self.squares[number]
    }

    /// Position of the final square.
    #[must_use]
    pub fn finish_square_number(&self) -> usize {
        self.squares.len() - 1
    }

    /// Total number of squares, start and finish included.
    #[must_use]
    pub fn number_of_squares(&self) -> usize {
        self.squares.len()
    }

    /// All squares in track order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_board_shape() {
        let board = Board::standard();

        assert_eq!(board.number_of_squares(), NUMBER_OF_SQUARES);
        assert_eq!(board.finish_square_number(), FINISH_SQUARE_NUMBER);

        // Dense, contiguous numbering.
        for (index, square) in board.squares().enumerate() {
            assert_eq!(square.number(), index);
        }
    }

    #[test]
    fn test_standard_board_terminal_squares_are_neutral() {
        let board = Board::standard();
        assert_eq!(board.square_at(START_SQUARE_NUMBER).effect(), SquareEffect::Neutral);
        assert_eq!(board.square_at(FINISH_SQUARE_NUMBER).effect(), SquareEffect::Neutral);
    }

    #[test]
    fn test_standard_board_is_identical_across_builds() {
        assert_eq!(Board::standard(), Board::standard());
    }

    #[test]
    fn test_standard_board_teleport_targets_on_track() {
        let board = Board::standard();
        for square in board.squares() {
            if let SquareEffect::Teleport(target) = square.effect() {
                assert!(target <= FINISH_SQUARE_NUMBER);
                assert_ne!(target, square.number());
            }
        }
    }

    #[test]
    fn test_with_layout_places_effects() {
        let board = Board::with_layout(50, &[(10, SquareEffect::FuelBonus(5))]).unwrap();

        assert_eq!(board.finish_square_number(), 50);
        assert_eq!(board.square_at(10).effect(), SquareEffect::FuelBonus(5));
        assert_eq!(board.square_at(11).effect(), SquareEffect::Neutral);
    }

    #[test]
    fn test_with_layout_rejects_empty_track() {
        assert_eq!(
            Board::with_layout(0, &[]),
            Err(BoardError::NoRoom { finish: 0 })
        );
    }

    #[test]
    fn test_with_layout_rejects_effect_off_track() {
        assert_eq!(
            Board::with_layout(20, &[(21, SquareEffect::Neutral)]),
            Err(BoardError::EffectOutOfRange { square: 21, finish: 20 })
        );
    }

    #[test]
    fn test_with_layout_rejects_effect_on_terminal_squares() {
        assert_eq!(
            Board::with_layout(20, &[(0, SquareEffect::FuelBonus(5))]),
            Err(BoardError::EffectOnTerminalSquare { square: 0 })
        );
        assert_eq!(
            Board::with_layout(20, &[(20, SquareEffect::FuelBonus(5))]),
            Err(BoardError::EffectOnTerminalSquare { square: 20 })
        );
    }

    #[test]
    fn test_with_layout_rejects_duplicate_effects() {
        assert_eq!(
            Board::with_layout(
                20,
                &[(5, SquareEffect::FuelBonus(5)), (5, SquareEffect::Teleport(9))]
            ),
            Err(BoardError::DuplicateEffect { square: 5 })
        );
    }

    #[test]
    fn test_with_layout_rejects_zero_fuel_amounts() {
        assert_eq!(
            Board::with_layout(20, &[(5, SquareEffect::FuelPenalty(0))]),
            Err(BoardError::ZeroFuelAmount { square: 5 })
        );
    }

    #[test]
    #[should_panic(expected = "outside the track")]
    fn test_square_at_out_of_range_panics() {
        let board = Board::with_layout(20, &[]).unwrap();
        let _ = board.square_at(21);
    }

    #[test]
    fn test_board_serialization() {
        let board = Board::standard();
        let json = serde_json::to_string(&board).unwrap();
        let restored: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(board, restored);
    }
}
