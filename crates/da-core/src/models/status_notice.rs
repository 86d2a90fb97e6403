use crate::{FieldKey, WorkItemState, WorkItemType};

use serde::Serialize;

/// Emitted when a requested state was replaced by the type's in-progress
/// state. The update is still valid; the caller must tell the user which
/// state is actually applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusNotice {
    pub field: FieldKey,
    pub work_item_type: WorkItemType,
    pub requested: WorkItemState,
    pub applied: WorkItemState,
}

impl std::fmt::Display for StatusNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' is not valid for {}; '{}' applied instead",
            self.field, self.requested, self.work_item_type, self.applied
        )
    }
}
