//! Property tests for the engine invariants: whatever the seed and player
//! count, the per-player invariants and end-condition definitions hold
//! after every round.

use proptest::prelude::*;

use space_race::{
    Die, GameRng, GameSession, GameStatus, SetupError,
    FINISH_SQUARE_NUMBER, INITIAL_FUEL_AMOUNT, START_SQUARE_NUMBER,
};

proptest! {
    #[test]
    fn setup_yields_n_fresh_players(seed in any::<u64>(), count in 2usize..=6) {
        let mut session = GameSession::new(seed);
        session.set_up_players(count).unwrap();

        prop_assert_eq!(session.number_of_players(), count);
        for player in session.players() {
            prop_assert_eq!(player.position(), START_SQUARE_NUMBER);
            prop_assert_eq!(player.rocket_fuel(), INITIAL_FUEL_AMOUNT);
            prop_assert!(player.has_power());
            prop_assert!(!player.at_finish());
        }
    }

    #[test]
    fn setup_rejects_out_of_range_counts(
        seed in any::<u64>(),
        count in prop_oneof![0usize..2, 7usize..64],
    ) {
        let mut session = GameSession::new(seed);
        prop_assert_eq!(
            session.set_up_players(count),
            Err(SetupError::PlayerCountOutOfRange { count })
        );
    }

    #[test]
    fn invariants_hold_through_a_whole_game(seed in any::<u64>(), count in 2usize..=6) {
        let mut session = GameSession::new(seed);
        session.set_up_players(count).unwrap();

        for _ in 0..300 {
            if session.status() != GameStatus::Playing {
                break;
            }
            let report = session.play_one_round();
            prop_assert!(report.turns.len() <= count);

            for player in session.players() {
                // Power tracks fuel, positions never leave the track, and
                // the finish flag means exactly "standing on the finish".
                prop_assert!(player.position() <= FINISH_SQUARE_NUMBER);
                prop_assert_eq!(player.has_power(), player.rocket_fuel() > 0);
                prop_assert_eq!(player.at_finish(), player.position() == FINISH_SQUARE_NUMBER);
            }

            prop_assert_eq!(
                session.game_finished(),
                session.players().iter().any(|p| p.at_finish())
            );
            prop_assert_eq!(
                session.all_out_of_fuel(),
                session.players().iter().all(|p| !p.has_power())
            );
        }
    }

    #[test]
    fn replay_is_deterministic(seed in any::<u64>(), count in 2usize..=6) {
        let mut first = GameSession::new(seed);
        let mut second = GameSession::new(seed);
        first.set_up_players(count).unwrap();
        second.set_up_players(count).unwrap();

        for _ in 0..50 {
            prop_assert_eq!(first.play_one_round(), second.play_one_round());
        }
        prop_assert_eq!(first.players(), second.players());
    }

    #[test]
    fn dice_rolls_stay_in_bounds(seed in any::<u64>()) {
        let mut die = Die::new(GameRng::new(seed));
        for _ in 0..100 {
            let value = die.roll();
            prop_assert!((1..=6).contains(&value));
        }
    }
}
