use crate::{WorkItemState, WorkItemType};

use std::str::FromStr;

#[test]
fn test_work_item_type_as_str() {
    assert_eq!(WorkItemType::Task.as_str(), "task");
    assert_eq!(WorkItemType::UserStory.as_str(), "user_story");
    assert_eq!(WorkItemType::Requirement.as_str(), "requirement");
}

#[test]
fn test_work_item_type_display_uses_tracker_name() {
    assert_eq!(WorkItemType::UserStory.to_string(), "User Story");
    assert_eq!(WorkItemType::Task.to_string(), "Task");
}

#[test]
fn test_work_item_type_from_str() {
    assert_eq!(WorkItemType::from_str("task").unwrap(), WorkItemType::Task);
    assert_eq!(WorkItemType::from_str("TASK").unwrap(), WorkItemType::Task);
    assert_eq!(
        WorkItemType::from_str("User Story").unwrap(),
        WorkItemType::UserStory
    );
    assert_eq!(
        WorkItemType::from_str("user_story").unwrap(),
        WorkItemType::UserStory
    );
    assert_eq!(
        WorkItemType::from_str("story").unwrap(),
        WorkItemType::UserStory
    );
    assert_eq!(WorkItemType::from_str("bug").unwrap(), WorkItemType::Bug);
    assert!(WorkItemType::from_str("feature").is_err());
    assert!(WorkItemType::from_str("").is_err());
}

#[test]
fn test_task_states_exclude_resolved() {
    assert!(WorkItemType::Task.allows(WorkItemState::Active));
    assert!(WorkItemType::Task.allows(WorkItemState::Closed));
    assert!(!WorkItemType::Task.allows(WorkItemState::Resolved));
    assert!(!WorkItemType::Task.allows(WorkItemState::Approved));
}

#[test]
fn test_user_story_states_include_resolved_and_approved() {
    assert!(WorkItemType::UserStory.allows(WorkItemState::Resolved));
    assert!(WorkItemType::UserStory.allows(WorkItemState::Approved));
    assert!(!WorkItemType::UserStory.allows(WorkItemState::Proposed));
}

#[test]
fn test_requirement_states_start_at_proposed() {
    assert!(WorkItemType::Requirement.allows(WorkItemState::Proposed));
    assert!(!WorkItemType::Requirement.allows(WorkItemState::New));
}

#[test]
fn test_every_type_allows_its_in_progress_state() {
    for item_type in [
        WorkItemType::Task,
        WorkItemType::UserStory,
        WorkItemType::Bug,
        WorkItemType::Epic,
        WorkItemType::Requirement,
    ] {
        assert!(item_type.allows(item_type.in_progress_state()));
        assert_eq!(item_type.in_progress_state(), WorkItemState::Active);
    }
}
