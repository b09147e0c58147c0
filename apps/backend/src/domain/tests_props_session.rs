//! Property tests for session transitions (pure domain).
//!
//! Playing any plan to the end must keep the running total equal to the sum
//! of round scores, advance the index by one per round and finish exactly
//! on the last round.

use proptest::prelude::*;

use crate::domain::test_gens;
use crate::domain::test_prelude;
use crate::domain::{advance_round, confirm_guess, start_session_with_rounds, MAX_SCORE};
use crate::errors::domain::StateKind;

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    #[test]
    fn prop_total_matches_round_scores(plan in test_gens::game_plan()) {
        let total_rounds = plan.len() as u8;
        let (first_target, _) = plan[0];
        let mut session = start_session_with_rounds(first_target, total_rounds).unwrap();

        for (i, &(target, guess)) in plan.iter().enumerate() {
            if i > 0 {
                session = advance_round(&session, target).unwrap();
            }
            prop_assert_eq!(session.current_round_index(), i);
            prop_assert!(!session.is_over());

            session = confirm_guess(&session, guess).unwrap();

            let sum: u32 = session.rounds().iter().filter_map(|r| r.score()).sum();
            prop_assert_eq!(session.total_score(), sum);
            prop_assert!(session.current_round().score().unwrap() <= MAX_SCORE);
        }

        prop_assert!(session.is_over());
        prop_assert_eq!(session.rounds().len(), plan.len());
        prop_assert_eq!(session.results().len(), plan.len());

        let (next_target, _) = plan[0];
        let err = advance_round(&session, next_target).unwrap_err();
        prop_assert_eq!(err.state_kind(), Some(StateKind::FinalRound));
    }
}
