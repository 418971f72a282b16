//! Unit tests for the recursive merger.

use rstest::rstest;
use serde_json::{Value, json};

use super::{RecursiveMerger, merge_recursive};
use crate::{ExtraError, ValueKind};

#[rstest]
#[case::nested_mappings_recurse(
    json!({"a": 1, "b": {"x": 1}}),
    json!({"b": {"y": 2}, "c": 3}),
    json!({"a": 1, "b": {"x": 1, "y": 2}, "c": 3}),
)]
#[case::sequences_replace(json!({"a": [1, 2]}), json!({"a": [3]}), json!({"a": [3]}))]
#[case::empty_accumulator(json!({}), json!({"a": 1}), json!({"a": 1}))]
#[case::empty_overlay(json!({"a": 1}), json!({}), json!({"a": 1}))]
#[case::scalar_overrides_mapping(json!({"a": {"x": 1}}), json!({"a": 2}), json!({"a": 2}))]
#[case::mapping_overrides_scalar(json!({"a": 2}), json!({"a": {"x": 1}}), json!({"a": {"x": 1}}))]
#[case::null_overrides(json!({"a": 1}), json!({"a": null}), json!({"a": null}))]
#[case::mapping_replaces_sequence(json!({"a": [1]}), json!({"a": {"k": 1}}), json!({"a": {"k": 1}}))]
fn merges_pairs(#[case] left: Value, #[case] right: Value, #[case] expected: Value) {
    let merged = merge_recursive(&[left, right]).expect("mappings merge");
    assert_eq!(merged, expected);
}

#[test]
fn later_inputs_win_across_three_layers() {
    let merged = merge_recursive(&[
        json!({"theme": {"colour": "red", "size": 1}}),
        json!({"theme": {"colour": "blue"}}),
        json!({"theme": {"size": 3}, "extra": true}),
    ])
    .expect("mappings merge");
    assert_eq!(
        merged,
        json!({"theme": {"colour": "blue", "size": 3}, "extra": true})
    );
}

#[rstest]
#[case::none(Vec::new(), 0)]
#[case::single(vec![json!({"a": 1})], 1)]
fn rejects_fewer_than_two_inputs(#[case] inputs: Vec<Value>, #[case] received: usize) {
    let err = merge_recursive(&inputs).expect_err("arity must be enforced");
    assert!(matches!(
        &*err,
        ExtraError::Arity { expected: 2, received: r } if *r == received
    ));
}

#[rstest]
#[case::sequence(json!([1, 2]), ValueKind::Sequence)]
#[case::string(json!("a"), ValueKind::String)]
#[case::null(json!(null), ValueKind::Null)]
fn rejects_non_mapping_arguments(#[case] bad: Value, #[case] kind: ValueKind) {
    let err = merge_recursive(&[json!({"a": 1}), json!({}), bad]).expect_err("type checked");
    assert!(matches!(
        &*err,
        ExtraError::TypeMismatch { index: 2, found } if *found == kind
    ));
}

#[test]
fn depth_bound_rejects_deep_merges() {
    let merger = RecursiveMerger::new(1);
    let err = merger
        .merge(&[
            json!({"a": {"b": {"c": 1}}}),
            json!({"a": {"b": {"c": 2}}}),
        ])
        .expect_err("depth bound enforced");
    match &*err {
        ExtraError::RecursionLimit { limit, path } => {
            assert_eq!(*limit, 1);
            assert_eq!(path, "a.b");
        }
        other => panic!("expected RecursionLimit, got {other:?}"),
    }
}

#[test]
fn depth_bound_applies_to_adopted_values() {
    let merger = RecursiveMerger::new(2);
    let err = merger
        .merge(&[json!({}), json!({"a": [[[1]]]})])
        .expect_err("depth bound enforced on copies");
    assert!(matches!(&*err, ExtraError::RecursionLimit { limit: 2, .. }));
}

#[test]
fn depth_bound_accepts_values_at_the_limit() {
    let merger = RecursiveMerger::new(2);
    let merged = merger
        .merge(&[json!({"a": {"b": 1}}), json!({"a": {"c": [1]}})])
        .expect("within bound");
    assert_eq!(merged, json!({"a": {"b": 1, "c": [1]}}));
}

#[test]
fn inputs_are_left_untouched() {
    let left = json!({"a": {"x": 1}, "list": [1, 2]});
    let right = json!({"a": {"y": 2}, "list": [3]});
    let inputs = [left.clone(), right.clone()];
    let _merged = merge_recursive(&inputs).expect("mappings merge");
    assert_eq!(inputs, [left, right]);
}
