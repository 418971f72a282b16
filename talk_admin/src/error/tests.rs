//! Unit tests for error aggregation.

use super::{AdminError, AggregatedErrors};

fn invalid(hookable: &str) -> AdminError {
    AdminError::InvalidHookable {
        hook: "sylius_admin.talk.update.content".to_owned(),
        hookable: hookable.to_owned(),
        message: "boom".to_owned(),
    }
}

#[test]
fn empty_input_yields_none() {
    assert!(AdminError::try_aggregate(Vec::new()).is_none());
}

#[test]
fn single_error_is_returned_unwrapped() {
    let err = AdminError::try_aggregate(vec![invalid("form")]);
    assert!(matches!(err, Some(AdminError::InvalidHookable { hookable, .. }) if hookable == "form"));
}

#[test]
fn multiple_errors_are_numbered() {
    let Some(AdminError::Aggregate(aggregate)) =
        AdminError::try_aggregate(vec![invalid("form"), invalid("sidebar")])
    else {
        panic!("expected aggregate");
    };
    assert!(!aggregate.is_empty());
    assert_eq!(aggregate.len(), 2);
    let display = aggregate.to_string();
    assert!(display.starts_with("1: invalid hookable"));
    assert!(display.contains("\n2: invalid hookable"));
    let names: Vec<_> = aggregate
        .iter()
        .filter_map(|err| match err {
            AdminError::InvalidHookable { hookable, .. } => Some(hookable.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(names, ["form", "sidebar"]);
}

#[test]
fn empty_aggregation_reports_empty() {
    let aggregate = AggregatedErrors::default();
    assert!(aggregate.is_empty());
    assert_eq!(aggregate.len(), 0);
    assert_eq!(aggregate.to_string(), "");
}

#[test]
fn non_mapping_values_name_what_was_expected() {
    let err = AdminError::NotAMapping {
        what: "statistics context",
        found: twig_extra::ValueKind::Sequence,
    };
    assert_eq!(err.to_string(), "statistics context must be a mapping, found sequence");
}
