use crate::{RejectionReason, WorkItemId};

use googletest::prelude::*;

#[test]
fn given_digits_when_parsed_then_accepted() {
    let id = WorkItemId::parse("12345").unwrap();
    assert_that!(id.as_str().to_string(), eq("12345"));
}

#[test]
fn given_surrounding_whitespace_when_parsed_then_trimmed() {
    let id = WorkItemId::parse("  51311 ").unwrap();
    assert_that!(id.to_string(), eq("51311"));
}

#[test]
fn given_empty_id_when_parsed_then_missing() {
    let result = WorkItemId::parse("   ");
    assert_eq!(result, Err(RejectionReason::MissingWorkItemId));
    assert_that!(result, err(anything()));
}

#[test]
fn given_non_digit_id_when_parsed_then_invalid_format() {
    for raw in ["abc", "12a45", "-12", "12 34", "１２"] {
        let result = WorkItemId::parse(raw);
        assert!(
            matches!(result, Err(RejectionReason::InvalidWorkItemIdFormat { .. })),
            "{}",
            raw
        );
    }
}
