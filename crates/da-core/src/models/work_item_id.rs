use crate::RejectionReason;

use serde::Serialize;

/// A non-empty, all-digit work item id.
///
/// Only [`WorkItemId::parse`] constructs one, so every
/// [`crate::ValidatedUpdate`] is guaranteed to target a well-formed id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct WorkItemId(String);

impl WorkItemId {
    pub fn parse(raw: &str) -> Result<Self, RejectionReason> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(RejectionReason::MissingWorkItemId);
        }

        if !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(RejectionReason::InvalidWorkItemIdFormat {
                work_item_id: trimmed.to_string(),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
