use crate::{FieldKey, Rejection, RejectionReason, ValueProblem};

#[test]
fn given_empty_id_when_attached_then_omitted() {
    let rejection = Rejection::single(RejectionReason::MissingWorkItemId).for_work_item("");
    assert!(rejection.work_item_id.is_none());
}

#[test]
fn given_rejection_when_displayed_then_line_and_reasons_listed() {
    let rejection = Rejection::new(vec![
        RejectionReason::UnknownField {
            field: "story_points".to_string(),
        },
        RejectionReason::InvalidValueFormat {
            field: FieldKey::Priority,
            raw_value: "9".to_string(),
            problem: ValueProblem::OutOfRange { min: 1, max: 4 },
        },
    ])
    .for_work_item("51311")
    .at_line(Some(2));

    assert_eq!(
        rejection.to_string(),
        "line 2: work item 51311: unknown field 'story_points'; invalid priority '9': must be between 1 and 4"
    );
}

#[test]
fn given_reasons_when_classified_then_structural_split() {
    assert!(RejectionReason::MissingWorkItemId.is_structural());
    assert!(RejectionReason::EmptyBatch.is_structural());
    assert!(
        !RejectionReason::UnknownField {
            field: "x".to_string()
        }
        .is_structural()
    );
}

#[test]
fn given_reason_when_serialized_then_tagged_by_kind() {
    let json = serde_json::to_value(RejectionReason::InvalidValueFormat {
        field: FieldKey::StartDate,
        raw_value: "13/45/2025".to_string(),
        problem: ValueProblem::NotADate,
    })
    .unwrap();

    assert_eq!(json["kind"], "invalid_value_format");
    assert_eq!(json["field"], "start_date");
    assert_eq!(json["raw_value"], "13/45/2025");
    assert_eq!(json["problem"]["kind"], "not_a_date");
}
