use crate::WorkItemState;

use std::str::FromStr;

#[test]
fn test_work_item_state_as_str() {
    assert_eq!(WorkItemState::Active.as_str(), "Active");
    assert_eq!(WorkItemState::Closed.as_str(), "Closed");
}

#[test]
fn test_work_item_state_from_str_ignores_case() {
    assert_eq!(
        WorkItemState::from_str("active").unwrap(),
        WorkItemState::Active
    );
    assert_eq!(
        WorkItemState::from_str("RESOLVED").unwrap(),
        WorkItemState::Resolved
    );
    assert!(WorkItemState::from_str("in progress").is_err());
}

#[test]
fn test_work_item_state_serializes_as_tracker_name() {
    let json = serde_json::to_string(&WorkItemState::Active).unwrap();
    assert_eq!(json, "\"Active\"");
}
