use crate::{FieldKey, WorkItemType};

use serde::Serialize;

/// Why a raw value could not be normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueProblem {
    Empty,
    /// Neither `MM/DD/YYYY` nor `YYYY-MM-DD`, or not a calendar date
    NotADate,
    NotAnInteger,
    NotPositive,
    OutOfRange { min: i64, max: i64 },
    UnknownStatus,
    TooLong { max: usize },
}

impl std::fmt::Display for ValueProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "value is empty"),
            Self::NotADate => write!(f, "expected MM/DD/YYYY or YYYY-MM-DD"),
            Self::NotAnInteger => write!(f, "expected a whole number"),
            Self::NotPositive => write!(f, "must be greater than 0"),
            Self::OutOfRange { min, max } => write!(f, "must be between {} and {}", min, max),
            Self::UnknownStatus => write!(f, "not a recognized status"),
            Self::TooLong { max } => write!(f, "longer than {} characters", max),
        }
    }
}

/// Structured reason an instruction (or part of it) cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    MissingWorkItemId,
    InvalidWorkItemIdFormat {
        work_item_id: String,
    },
    UnknownField {
        field: String,
    },
    InvalidValueFormat {
        field: FieldKey,
        raw_value: String,
        problem: ValueProblem,
    },
    InvalidStatusForType {
        field: FieldKey,
        raw_value: String,
        work_item_type: WorkItemType,
    },
    /// Well-formed id whose type could not be determined
    WorkItemTypeUnresolved {
        work_item_id: String,
    },
    NoFieldAssignments,
    /// A single command that also names other work items
    MultipleTargets {
        work_item_ids: Vec<String>,
    },
    EmptyBatch,
    BatchTooLarge {
        lines: usize,
        max: usize,
    },
    MalformedBatchLine {
        line_number: usize,
        text: String,
    },
}

impl RejectionReason {
    /// The input could not be parsed into a well-formed request
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::MissingWorkItemId
                | Self::InvalidWorkItemIdFormat { .. }
                | Self::NoFieldAssignments
                | Self::MultipleTargets { .. }
                | Self::EmptyBatch
                | Self::BatchTooLarge { .. }
                | Self::MalformedBatchLine { .. }
        )
    }
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingWorkItemId => write!(f, "missing work item id"),
            Self::InvalidWorkItemIdFormat { work_item_id } => {
                write!(f, "invalid work item id '{}'", work_item_id)
            }
            Self::UnknownField { field } => write!(f, "unknown field '{}'", field),
            Self::InvalidValueFormat {
                field,
                raw_value,
                problem,
            } => write!(f, "invalid {} '{}': {}", field, raw_value, problem),
            Self::InvalidStatusForType {
                field,
                raw_value,
                work_item_type,
            } => write!(
                f,
                "{} '{}' is not allowed for {}",
                field, raw_value, work_item_type
            ),
            Self::WorkItemTypeUnresolved { work_item_id } => {
                write!(f, "type of work item {} could not be resolved", work_item_id)
            }
            Self::NoFieldAssignments => write!(f, "no field assignments"),
            Self::MultipleTargets { work_item_ids } => write!(
                f,
                "command also names work item(s) {}",
                work_item_ids.join(", ")
            ),
            Self::EmptyBatch => write!(f, "batch contains no work items"),
            Self::BatchTooLarge { lines, max } => {
                write!(f, "batch has {} lines, at most {} allowed", lines, max)
            }
            Self::MalformedBatchLine { line_number, text } => {
                write!(f, "line {} is malformed: '{}'", line_number, text)
            }
        }
    }
}

/// Every problem found for one targeted work item (or one batch line).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// As written, when the request got far enough to name one
    pub work_item_id: Option<String>,
    pub line_number: Option<usize>,
    pub reasons: Vec<RejectionReason>,
}

impl Rejection {
    pub fn new(reasons: Vec<RejectionReason>) -> Self {
        Self {
            work_item_id: None,
            line_number: None,
            reasons,
        }
    }

    pub fn single(reason: RejectionReason) -> Self {
        Self::new(vec![reason])
    }

    pub fn for_work_item(mut self, work_item_id: impl Into<String>) -> Self {
        let work_item_id = work_item_id.into();
        self.work_item_id = (!work_item_id.is_empty()).then_some(work_item_id);
        self
    }

    pub fn at_line(mut self, line_number: Option<usize>) -> Self {
        self.line_number = line_number;
        self
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(line) = self.line_number {
            write!(f, "line {}: ", line)?;
        }
        if let Some(id) = &self.work_item_id {
            write!(f, "work item {}: ", id)?;
        }

        let reasons = self
            .reasons
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", reasons.join("; "))
    }
}
