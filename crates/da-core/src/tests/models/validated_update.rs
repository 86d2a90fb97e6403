use crate::tests::lookup_of;
use crate::{FieldKey, FieldValue, UpdateRequest, UpdateValidator, WorkItemType};

use chrono::NaiveDate;

fn validated(request: UpdateRequest) -> crate::ValidatedUpdate {
    UpdateValidator::default()
        .validate_request(&request, &lookup_of(&[]))
        .unwrap()
}

#[test]
fn given_update_when_patch_requested_then_add_ops_on_field_paths() {
    let update = validated(
        UpdateRequest::new("12345", Some(WorkItemType::Task))
            .with_assignment("remaining", "8")
            .with_assignment("start_date", "08/11/2025"),
    );

    let ops = update.patch_operations();

    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].op, "add");
    assert_eq!(ops[0].path, "/fields/Microsoft.VSTS.Scheduling.StartDate");
    assert_eq!(
        ops[0].value,
        FieldValue::Date(NaiveDate::from_ymd_opt(2025, 8, 11).unwrap())
    );
    assert_eq!(ops[1].path, "/fields/Microsoft.VSTS.Scheduling.RemainingWork");
    assert_eq!(ops[1].value, FieldValue::Integer(8));
}

#[test]
fn given_patch_when_serialized_then_plain_json_values() {
    let update = validated(
        UpdateRequest::new("12345", Some(WorkItemType::Task))
            .with_assignment("status", "Active")
            .with_assignment("finish_date", "2025-08-12")
            .with_assignment("priority", "2"),
    );

    let json = serde_json::to_value(update.patch_operations()).unwrap();

    assert_eq!(
        json,
        serde_json::json!([
            {"op": "add", "path": "/fields/Microsoft.VSTS.Scheduling.FinishDate", "value": "2025-08-12"},
            {"op": "add", "path": "/fields/System.State", "value": "Active"},
            {"op": "add", "path": "/fields/Microsoft.VSTS.Common.Priority", "value": 2},
        ])
    );
}

#[test]
fn given_later_update_when_absorbed_then_later_fields_win() {
    let mut first = validated(
        UpdateRequest::new("1", Some(WorkItemType::Task))
            .with_assignment("status", "Resolved")
            .with_assignment("remaining", "8"),
    );
    assert_eq!(first.notices().len(), 1);

    let second = validated(
        UpdateRequest::new("1", Some(WorkItemType::Task)).with_assignment("status", "Closed"),
    );

    first.absorb(second);

    assert_eq!(
        first.get(FieldKey::Status),
        Some(&FieldValue::Status(crate::WorkItemState::Closed))
    );
    assert_eq!(first.get(FieldKey::Remaining), Some(&FieldValue::Integer(8)));
    assert!(first.notices().is_empty());
}
