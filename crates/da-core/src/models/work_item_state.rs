use crate::{CoreError, CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Workflow state as named by the remote tracker (`System.State`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkItemState {
    New,
    Proposed,
    Approved,
    Active,
    Resolved,
    Closed,
    Removed,
}

impl WorkItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Proposed => "Proposed",
            Self::Approved => "Approved",
            Self::Active => "Active",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::Removed => "Removed",
        }
    }
}

impl FromStr for WorkItemState {
    type Err = CoreError;

    /// Accepts canonical state names in any case; phrase synonyms such as
    /// `in progress` are the normalizer's job.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s.to_ascii_lowercase().as_str() {
            "new" => Ok(Self::New),
            "proposed" => Ok(Self::Proposed),
            "approved" => Ok(Self::Approved),
            "active" => Ok(Self::Active),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            "removed" => Ok(Self::Removed),
            _ => Err(CoreError::InvalidWorkItemState {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for WorkItemState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
