//! Property tests for the word pool and the round state machine.

use proptest::prelude::*;

use alias_engine::core::{GameConfig, Phase, RoundEvent, TeamId};
use alias_engine::error::EngineError;
use alias_engine::rules::{AliasEngine, RoundStatus};
use alias_engine::words::{UniformPicker, WordPool};

fn event() -> impl Strategy<Value = RoundEvent> {
    prop_oneof![
        Just(RoundEvent::Correct),
        Just(RoundEvent::Skip),
        Just(RoundEvent::EndRound),
    ]
}

/// Raw source lines: words with stray whitespace, plus blank lines.
fn raw_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            3 => "[ \t]{0,2}[a-zа-я]{1,6}[ \t]{0,2}",
            1 => "[ \t]{0,3}",
        ],
        0..30,
    )
}

fn unique_words(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z]{1,8}", 1..max).prop_map(|set| set.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_load_counts_non_blank_lines(lines in raw_lines()) {
        let source = lines.join("\n");
        let expected: Vec<String> = lines
            .iter()
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_uppercase)
            .collect();

        match WordPool::load(source.as_bytes()) {
            Ok(pool) => {
                let words: Vec<String> = pool.words().iter().cloned().collect();
                prop_assert_eq!(words, expected);
            }
            Err(err) => {
                prop_assert!(expected.is_empty());
                prop_assert_eq!(err, EngineError::EmptySource);
            }
        }
    }

    #[test]
    fn prop_draw_returns_unused_word(
        words in unique_words(20),
        used_mask in prop::collection::vec(any::<bool>(), 20),
        seed in any::<u64>(),
    ) {
        let mut pool = WordPool::from_lines(&words).unwrap();
        let upper: Vec<String> = pool.words().iter().cloned().collect();
        for (word, used) in upper.iter().zip(&used_mask) {
            if *used {
                pool.mark_used(word);
            }
        }

        let mut picker = UniformPicker::from_seed(Some(seed));
        let all_used = upper.iter().all(|w| pool.used().contains(w));
        match pool.draw(&mut picker) {
            Ok(word) => {
                prop_assert!(!all_used);
                prop_assert!(upper.contains(&word));
                prop_assert!(!pool.used().contains(&word));
            }
            Err(err) => {
                prop_assert!(all_used);
                prop_assert_eq!(err, EngineError::PoolExhausted);
            }
        }
    }

    #[test]
    fn prop_end_round_twice_restores_team(
        words in unique_words(10),
        prefix in prop::collection::vec(prop_oneof![Just(RoundEvent::Skip), Just(RoundEvent::EndRound)], 0..3),
        seed in any::<u64>(),
    ) {
        prop_assume!(words.len() >= prefix.len() + 3);
        let mut engine = AliasEngine::new(GameConfig::new().with_seed(seed));
        engine.start_game_from_lines(&words).unwrap();
        for e in prefix {
            engine.advance(e).unwrap();
        }

        let before = engine.game().unwrap().active_team();
        engine.advance(RoundEvent::EndRound).unwrap();
        let view = engine.advance(RoundEvent::EndRound).unwrap();
        prop_assert_eq!(view.active_team, before);
    }

    #[test]
    fn prop_scores_monotonic_and_win_detected(
        words in unique_words(40),
        events in prop::collection::vec(event(), 0..60),
        target in 1u32..6,
        seed in any::<u64>(),
    ) {
        let mut engine = AliasEngine::new(GameConfig::new().with_target_score(target).with_seed(seed));
        engine.start_game_from_lines(&words).unwrap();

        for e in events {
            let before = engine.game().unwrap().clone();
            let used_before = before.pool().used().len();
            let result = engine.advance(e);

            if before.phase() != Phase::InProgress {
                prop_assert_eq!(result, Err(EngineError::GameNotRunning));
                prop_assert_eq!(engine.phase(), before.phase());
                continue;
            }

            let view = result.unwrap();
            let team = before.active_team();
            for t in TeamId::all() {
                let expected = before.score(t) + u32::from(e == RoundEvent::Correct && t == team);
                prop_assert_eq!(view.scores[t], expected);
            }

            let reached = e == RoundEvent::Correct && before.score(team) + 1 >= target;
            prop_assert_eq!(view.status == RoundStatus::Finished, reached);
            if reached {
                prop_assert_eq!(view.winner, Some(team));
                prop_assert_eq!(view.active_team, team);
                prop_assert_eq!(engine.game().unwrap().pool().used().len(), used_before);
            } else if view.status == RoundStatus::InProgress {
                prop_assert_eq!(engine.game().unwrap().pool().used().len(), used_before + 1);
            } else {
                prop_assert_eq!(view.status, RoundStatus::Exhausted);
                prop_assert_eq!(used_before, words.len());
            }

            let expected_team = if e == RoundEvent::EndRound { team.other() } else { team };
            prop_assert_eq!(view.active_team, expected_team);
        }
    }

    #[test]
    fn prop_no_word_repeats(words in unique_words(30), seed in any::<u64>()) {
        let mut engine = AliasEngine::new(GameConfig::new().with_seed(seed));
        let mut seen = std::collections::HashSet::new();

        let mut view = engine.start_game_from_lines(&words).unwrap();
        while let Some(word) = view.current_word.clone() {
            prop_assert!(seen.insert(word));
            view = engine.advance(RoundEvent::Skip).unwrap();
        }

        prop_assert_eq!(view.status, RoundStatus::Exhausted);
        prop_assert_eq!(seen.len(), words.len());
    }
}
