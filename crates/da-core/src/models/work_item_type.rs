use crate::{CoreError, CoreResult, WorkItemState};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

const TASK_STATES: &[WorkItemState] = &[
    WorkItemState::New,
    WorkItemState::Active,
    WorkItemState::Closed,
    WorkItemState::Removed,
];

const USER_STORY_STATES: &[WorkItemState] = &[
    WorkItemState::New,
    WorkItemState::Approved,
    WorkItemState::Active,
    WorkItemState::Resolved,
    WorkItemState::Closed,
    WorkItemState::Removed,
];

const BUG_STATES: &[WorkItemState] = &[
    WorkItemState::New,
    WorkItemState::Active,
    WorkItemState::Resolved,
    WorkItemState::Closed,
];

const EPIC_STATES: &[WorkItemState] = &[
    WorkItemState::New,
    WorkItemState::Active,
    WorkItemState::Resolved,
    WorkItemState::Closed,
    WorkItemState::Removed,
];

const REQUIREMENT_STATES: &[WorkItemState] = &[
    WorkItemState::Proposed,
    WorkItemState::Active,
    WorkItemState::Resolved,
    WorkItemState::Closed,
];

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemType {
    Task,
    UserStory,
    Bug,
    Epic,
    Requirement,
}

impl WorkItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::UserStory => "user_story",
            Self::Bug => "bug",
            Self::Epic => "epic",
            Self::Requirement => "requirement",
        }
    }

    /// Name used by the remote tracker (`System.WorkItemType`)
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Task => "Task",
            Self::UserStory => "User Story",
            Self::Bug => "Bug",
            Self::Epic => "Epic",
            Self::Requirement => "Requirement",
        }
    }

    /// States the remote workflow accepts for this type
    pub fn allowed_states(&self) -> &'static [WorkItemState] {
        match self {
            Self::Task => TASK_STATES,
            Self::UserStory => USER_STORY_STATES,
            Self::Bug => BUG_STATES,
            Self::Epic => EPIC_STATES,
            Self::Requirement => REQUIREMENT_STATES,
        }
    }

    pub fn allows(&self, state: WorkItemState) -> bool {
        self.allowed_states().contains(&state)
    }

    /// State substituted when a requested state is not allowed for this type
    pub fn in_progress_state(&self) -> WorkItemState {
        WorkItemState::Active
    }
}

impl FromStr for WorkItemType {
    type Err = CoreError;

    /// Accepts the snake_case names, the tracker's display names and the
    /// `story` shorthand, in any case.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        let normalized = s
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_ascii_lowercase();

        match normalized.as_str() {
            "task" => Ok(Self::Task),
            "user_story" | "story" => Ok(Self::UserStory),
            "bug" => Ok(Self::Bug),
            "epic" => Ok(Self::Epic),
            "requirement" => Ok(Self::Requirement),
            _ => Err(CoreError::InvalidWorkItemType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
