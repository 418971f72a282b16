//! Property tests for the recursive merge.
//!
//! Mappings are generated with a bounded depth and a small key alphabet so
//! that overlapping keys, nested mappings and sequences all occur often.

use proptest::prelude::*;
use serde_json::{Map, Value, json};
use twig_extra::merge_recursive;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z]{0,4}".prop_map(Value::String),
    ]
}

fn value() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3).prop_map(Value::Array),
            prop::collection::btree_map("[a-d]", inner, 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn mapping() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-d]", value(), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

fn merge_pair(left: &Map<String, Value>, right: &Map<String, Value>) -> Map<String, Value> {
    match merge_recursive(&[Value::Object(left.clone()), Value::Object(right.clone())]) {
        Ok(Value::Object(merged)) => merged,
        other => panic!("expected merged mapping, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn output_contains_every_input_key(a in mapping(), b in mapping()) {
        let merged = merge_pair(&a, &b);
        for key in a.keys().chain(b.keys()) {
            prop_assert!(merged.contains_key(key), "missing key {key}");
        }
        prop_assert!(merged.keys().all(|key| a.contains_key(key) || b.contains_key(key)));
    }

    #[test]
    fn keys_from_one_side_are_copied(a in mapping(), b in mapping()) {
        let merged = merge_pair(&a, &b);
        for (key, value) in &b {
            if !a.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
        for (key, value) in &a {
            if !b.contains_key(key) {
                prop_assert_eq!(merged.get(key), Some(value));
            }
        }
    }

    #[test]
    fn shared_mapping_keys_merge_recursively(a in mapping(), b in mapping()) {
        let merged = merge_pair(&a, &b);
        for (key, right) in &b {
            match (a.get(key), right) {
                (Some(Value::Object(left_map)), Value::Object(right_map)) => {
                    let nested = Value::Object(merge_pair(left_map, right_map));
                    prop_assert_eq!(merged.get(key), Some(&nested));
                }
                (Some(_), _) => prop_assert_eq!(merged.get(key), Some(right)),
                (None, _) => {}
            }
        }
    }

    #[test]
    fn chaining_matches_pairwise_folding(a in mapping(), b in mapping(), c in mapping()) {
        let all = merge_recursive(&[
            Value::Object(a.clone()),
            Value::Object(b.clone()),
            Value::Object(c.clone()),
        ]);
        let folded = Value::Object(merge_pair(&merge_pair(&a, &b), &c));
        prop_assert_eq!(all.ok(), Some(folded));
    }

    #[test]
    fn self_merge_is_identity(a in mapping()) {
        prop_assert_eq!(merge_pair(&a, &a), a);
    }

    #[test]
    fn inputs_are_not_mutated(a in mapping(), b in mapping()) {
        let inputs = [Value::Object(a.clone()), Value::Object(b.clone())];
        let _merged = merge_recursive(&inputs);
        prop_assert_eq!(&inputs, &[Value::Object(a), Value::Object(b)]);
    }
}
