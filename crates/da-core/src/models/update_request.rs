use crate::WorkItemType;

use serde::Serialize;

/// One `Field -> Value` pair exactly as written in the instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawFieldAssignment {
    /// Lowercase, `_`-joined field phrase (may be an alias or unknown)
    pub field_user_key: String,
    pub raw_value: String,
}

impl RawFieldAssignment {
    pub fn new(field_user_key: impl Into<String>, raw_value: impl Into<String>) -> Self {
        Self {
            field_user_key: field_user_key.into(),
            raw_value: raw_value.into(),
        }
    }
}

/// Everything an instruction asks to change on one work item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequest {
    /// As written; may be empty or malformed until validated
    pub work_item_id: String,
    /// Type named in the instruction, if any
    pub work_item_type: Option<WorkItemType>,
    /// In instruction order
    pub assignments: Vec<RawFieldAssignment>,
    /// 1-based line after the batch header (0 is the header line itself);
    /// `None` for single commands
    pub line_number: Option<usize>,
    /// Further work item ids a single command names with their own field
    /// assignments
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub other_targets: Vec<String>,
}

impl UpdateRequest {
    pub fn new(work_item_id: impl Into<String>, work_item_type: Option<WorkItemType>) -> Self {
        Self {
            work_item_id: work_item_id.into(),
            work_item_type,
            assignments: Vec::new(),
            line_number: None,
            other_targets: Vec::new(),
        }
    }

    pub fn with_assignment(
        mut self,
        field_user_key: impl Into<String>,
        raw_value: impl Into<String>,
    ) -> Self {
        self.assignments
            .push(RawFieldAssignment::new(field_user_key, raw_value));
        self
    }

    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = Some(line_number);
        self
    }
}
