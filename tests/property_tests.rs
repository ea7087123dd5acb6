//! Property-based tests for state values, envelopes and normalization.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use statechart_core::core::{
    matches_state, path_join, path_to_state_value, paths_to_state_value, to_state_value, Guard,
    StatePath, StateValue,
};
use statechart_core::event::to_scxml_event;
use statechart_core::normalize::{to_transition_config_array, Target, TransitionLike};
use statechart_core::services::IdGenerator;

prop_compose! {
    fn arbitrary_path()(segments in prop::collection::vec("[a-z]{1,4}", 1..5)) -> StatePath {
        segments
    }
}

fn arbitrary_state_value() -> impl Strategy<Value = StateValue> {
    let leaf = "[a-z]{1,4}".prop_map(StateValue::atomic);
    let region = leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            1 => Just(StateValue::leaf()),
            3 => prop::collection::btree_map("[a-z]{1,3}", inner, 1..3).prop_map(StateValue::Compound),
        ]
    });
    prop_oneof![
        "[a-z]{1,4}".prop_map(StateValue::atomic),
        prop::collection::btree_map("[a-z]{1,3}", region, 1..3).prop_map(StateValue::Compound),
    ]
}

proptest! {
    #[test]
    fn delimited_id_and_path_agree(path in arbitrary_path()) {
        let from_id = to_state_value(path_join(&path, '.').as_str(), '.').unwrap();
        let from_path = path_to_state_value(&path).unwrap();

        prop_assert_eq!(&from_id, &from_path);
        prop_assert_eq!(from_id.to_state_paths(), vec![path.clone()]);
        prop_assert_eq!(from_id.to_path_string('/'), Some(path_join(&path, '/')));
    }

    #[test]
    fn every_value_matches_itself(value in arbitrary_state_value()) {
        prop_assert!(value.is_satisfied_by(&value));
        prop_assert!(matches_state(&value, &value, '.').unwrap());
    }

    #[test]
    fn ancestors_of_active_leaves_match(value in arbitrary_state_value()) {
        for leaf in value.to_state_paths() {
            for len in 1..=leaf.len() {
                let ancestor = path_to_state_value(&leaf[..len]).unwrap();
                prop_assert!(
                    ancestor.is_satisfied_by(&value),
                    "{:?} should match {:?}", ancestor, value
                );
            }
        }
    }

    #[test]
    fn leaf_paths_rebuild_equivalent_value(value in arbitrary_state_value()) {
        let paths = value.to_state_paths();
        let rebuilt = paths_to_state_value(&paths).unwrap();

        prop_assert_eq!(rebuilt.to_state_paths(), paths);
        prop_assert!(rebuilt.is_satisfied_by(&value));
    }

    #[test]
    fn guard_agrees_with_matching(query in arbitrary_path(), value in arbitrary_state_value()) {
        let guard = Guard::in_state(path_to_state_value(&query).unwrap());
        let expected = matches_state(query.clone(), &value, '.').unwrap();

        prop_assert_eq!(guard.check(&value), expected);
        prop_assert_eq!(guard.negate().check(&value), !expected);
    }

    #[test]
    fn wrapping_is_idempotent(name in "[A-Z_]{1,8}") {
        let envelope = to_scxml_event(name.as_str(), None);
        let rewrapped = to_scxml_event(envelope.clone(), None);

        prop_assert_eq!(&envelope.name, &name);
        prop_assert_eq!(&envelope.data.event_type, &name);
        prop_assert_eq!(rewrapped, envelope);
    }

    #[test]
    fn identifiers_are_strictly_increasing(seed in 0u64..1_000_000, count in 1usize..50) {
        let ids = IdGenerator::with_seed(seed);
        let values: Vec<u64> = (0..count)
            .map(|_| u64::from_str_radix(&ids.next_id(), 16).unwrap())
            .collect();

        prop_assert_eq!(values[0], seed + 1);
        prop_assert!(values.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert_eq!(ids.current(), seed + count as u64);
    }

    #[test]
    fn normalized_configs_carry_event_and_target(
        event in "[A-Z]{1,8}",
        targets in prop::collection::vec("[a-z]{1,6}", 1..6)
    ) {
        let shorthand: Vec<TransitionLike> =
            targets.iter().map(|id| TransitionLike::from(id.as_str())).collect();
        let configs = to_transition_config_array(&event, shorthand);

        prop_assert_eq!(configs.len(), targets.len());
        for (config, id) in configs.iter().zip(&targets) {
            prop_assert_eq!(&config.event, &event);
            prop_assert_eq!(config.normalized_target(), Some(vec![Target::from(id.as_str())]));
        }
    }
}
