//! Property tests over generated sessions.
//!
//! Random action and tick sequences must keep the arena well-formed, the
//! active piece out of collision while playing, and the counters consistent.

use matrix_tetris::core::{collides, level_for_lines, GameConfig, GameState};
use matrix_tetris::types::{GameAction, GamePhase};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Action(GameAction),
    Tick(u32),
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        4 => prop_oneof![
            Just(GameAction::MoveLeft),
            Just(GameAction::MoveRight),
            Just(GameAction::SoftDrop),
            Just(GameAction::HardDrop),
            Just(GameAction::RotateCw),
            Just(GameAction::RotateCcw),
        ]
        .prop_map(Step::Action),
        1 => Just(Step::Action(GameAction::Restart)),
        3 => (0u32..1500).prop_map(Step::Tick),
    ]
}

fn assert_well_formed(state: &GameState, width: usize, height: usize) {
    let arena = state.arena();
    assert_eq!((arena.width(), arena.height()), (width, height));
    assert!(arena.cells().iter().all(|&c| c <= 7));
    assert!(arena.rows().all(|r| r.iter().any(|&c| c == 0)), "full row survived");
    assert_eq!(state.level(), level_for_lines(state.lines()));
    if state.phase() == GamePhase::Playing {
        assert!(!collides(arena, state.active_shape(), state.position()));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn generated_sessions_respect_invariants(
        seed in any::<u32>(),
        width in 4usize..14,
        height in 4usize..22,
        steps in proptest::collection::vec(step_strategy(), 1..300),
    ) {
        let config = GameConfig { width, height, ..GameConfig::default() };
        let mut state = GameState::with_config(config, seed).unwrap();
        assert_well_formed(&state, width, height);

        for step in steps {
            let before_score = state.score();
            let before_lines = state.lines();
            let was_over = state.game_over();
            let pos = state.position();
            let restart = matches!(step, Step::Action(GameAction::Restart));

            match step {
                Step::Action(action) => {
                    state.apply_action(action);
                }
                Step::Tick(ms) => {
                    state.tick(ms);
                }
            }

            assert_well_formed(&state, width, height);
            if restart {
                prop_assert_eq!(state.score(), 0);
                prop_assert_eq!(state.lines(), 0);
                prop_assert_eq!(state.phase(), GamePhase::Playing);
                continue;
            }
            prop_assert!(state.score() >= before_score);
            prop_assert!(state.lines() >= before_lines);
            if was_over {
                prop_assert!(state.game_over());
                prop_assert_eq!(state.position(), pos);
            }
        }
    }

    #[test]
    fn score_matches_sweep_rule_per_lock(seed in any::<u32>(), drops in 1usize..60) {
        let mut state = GameState::new(seed);
        for i in 0..drops {
            if state.game_over() {
                break;
            }
            let action = if i % 2 == 0 { GameAction::MoveLeft } else { GameAction::MoveRight };
            state.apply_action(action);
            let score = state.score();
            state.hard_drop();
            let event = state.take_last_event().unwrap();
            let expected = matrix_tetris::core::sweep_score(event.rows_cleared);
            prop_assert_eq!(event.score_delta, expected);
            prop_assert_eq!(state.score(), score + expected);
        }
    }
}
