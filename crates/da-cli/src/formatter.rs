//! User-facing text for validation outcomes.
//!
//! Every rejection states what is wrong and then shows canonical commands
//! that would have worked.

use crate::error::Result as CliErrorResult;

use da_core::{
    ExecutionOutcome, ExecutionStatus, FieldCatalog, FieldKey, Rejection, RejectionReason,
    StatusNotice, ValidatedUpdate, ValidationOutcome, ValueKind, WorkItemId, WorkItemType,
};

use serde::Serialize;

const SINGLE_EXAMPLES: &[&str] = &[
    "Update TASK-12345 Start Date -> 08/11/2025",
    "Update USER STORY-67890 Status -> Active",
    "Update REQUIREMENT-11111 Finish Date -> 08/12/2025",
];

const BATCH_EXAMPLES: &[&str] = &[
    "Update following individual tasks:",
    "TASK 51311 -> Start Date -> 08/08/2025",
    "TASK 51312 -> Start Date -> 08/11/2025",
    "TASK 51310 -> Start Date -> 08/11/2025",
];

const DATE_EXAMPLES: &[&str] = &[
    "Update TASK-12345 Start Date -> 08/11/2025",
    "Update TASK-12345 Finish Date -> 2025-08-12",
];

const NUMBER_EXAMPLES: &[&str] = &[
    "Update TASK-12345 Remaining -> 8 and Completed -> 4",
    "Update TASK-12345 Priority -> 2",
];

const STATUS_EXAMPLES: &[&str] = &[
    "Update TASK-12345 Status -> Active",
    "Update USER STORY-67890 Status -> Resolved",
];

const TEXT_EXAMPLES: &[&str] = &[
    "Update TASK-12345 Title -> \"Fix login timeout\"",
    "Update TASK-12345 Assigned To -> Jane Doe",
];

/// Which canonical commands to show after a problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Examples {
    Single,
    Batch,
    Date,
    Number,
    Status,
    Text,
}

impl Examples {
    fn lines(self) -> &'static [&'static str] {
        match self {
            Examples::Single => SINGLE_EXAMPLES,
            Examples::Batch => BATCH_EXAMPLES,
            Examples::Date => DATE_EXAMPLES,
            Examples::Number => NUMBER_EXAMPLES,
            Examples::Status => STATUS_EXAMPLES,
            Examples::Text => TEXT_EXAMPLES,
        }
    }

    fn for_field(field: FieldKey) -> Self {
        match field.descriptor().value_kind {
            ValueKind::Date => Examples::Date,
            ValueKind::Integer => Examples::Number,
            ValueKind::Status => Examples::Status,
            ValueKind::Text => Examples::Text,
        }
    }
}

struct Problem {
    title: String,
    details: Vec<String>,
    examples: Examples,
}

/// Human-readable rendering of a whole validation outcome.
pub fn render_outcome(outcome: &ValidationOutcome) -> String {
    if !outcome.rejections.is_empty() {
        return render_rejections(&outcome.rejections);
    }

    let mut lines = Vec::new();
    for update in &outcome.updates {
        lines.push(format!(
            "✅ {} {} is ready to update:",
            type_label(update.work_item_type()),
            update.work_item_id()
        ));
        for (key, value) in update.fields() {
            lines.push(format!("   • {}: {}", field_label(*key), value));
        }
        for notice in update.notices() {
            lines.push(render_notice(update.work_item_id(), notice));
        }
    }
    lines.join("\n")
}

pub fn render_rejections(rejections: &[Rejection]) -> String {
    let mut blocks = Vec::new();
    let mut shown: Vec<Examples> = Vec::new();

    for rejection in rejections {
        for reason in &rejection.reasons {
            let problem = describe(reason);

            let mut block = vec![format!("❌ **{}**", problem.title)];
            if let Some(context) = context_line(rejection) {
                block.push(context);
            }
            block.extend(problem.details);
            blocks.push(block.join("\n"));

            if !shown.contains(&problem.examples) {
                shown.push(problem.examples);
            }
        }
    }

    for examples in shown {
        let mut block = vec!["Examples:".to_string()];
        block.extend(examples.lines().iter().map(|line| format!("• {}", line)));
        blocks.push(block.join("\n"));
    }

    blocks.join("\n\n")
}

pub fn render_notice(work_item_id: &WorkItemId, notice: &StatusNotice) -> String {
    format!(
        "⚠ {} {}: {} '{}' is not valid for {}, '{}' will be set instead",
        type_label(Some(notice.work_item_type)),
        work_item_id,
        field_label(notice.field),
        notice.requested,
        notice.work_item_type,
        notice.applied
    )
}

/// One line per executed update.
pub fn render_execution(updates: &[ValidatedUpdate], results: &[ExecutionOutcome]) -> String {
    results
        .iter()
        .map(|result| {
            let item_type = updates
                .iter()
                .find(|update| update.work_item_id() == &result.work_item_id)
                .and_then(ValidatedUpdate::work_item_type);

            match &result.status {
                ExecutionStatus::Applied => format!(
                    "✅ {} {} updated successfully!",
                    type_label(item_type),
                    result.work_item_id
                ),
                ExecutionStatus::Failed { message } => format!(
                    "❌ {} {} could not be updated: {}",
                    type_label(item_type),
                    result.work_item_id,
                    message
                ),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> CliErrorResult<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

fn describe(reason: &RejectionReason) -> Problem {
    match reason {
        RejectionReason::MissingWorkItemId => Problem {
            title: "Please provide the missing Work Item ID!".to_string(),
            details: Vec::new(),
            examples: Examples::Single,
        },
        RejectionReason::InvalidWorkItemIdFormat { work_item_id } => Problem {
            title: "Invalid Work Item ID Format".to_string(),
            details: vec![
                format!("Received: {}", work_item_id),
                "Work item IDs contain digits only.".to_string(),
            ],
            examples: Examples::Single,
        },
        RejectionReason::UnknownField { field } => Problem {
            title: format!("Unknown field '{}'", field.replace('_', " ")),
            details: vec![format!("Supported fields: {}", supported_fields())],
            examples: Examples::Single,
        },
        RejectionReason::InvalidValueFormat {
            field,
            raw_value,
            problem,
        } => Problem {
            title: format!("Invalid value for {}", field_label(*field)),
            details: vec![
                format!("Received: {}", raw_value),
                capitalize(&problem.to_string()),
            ],
            examples: Examples::for_field(*field),
        },
        RejectionReason::InvalidStatusForType {
            field,
            raw_value,
            work_item_type,
        } => Problem {
            title: format!(
                "{} '{}' is not valid for a {}",
                field_label(*field),
                raw_value.trim(),
                work_item_type
            ),
            details: vec![format!("Allowed: {}", allowed_states(*work_item_type))],
            examples: Examples::Status,
        },
        RejectionReason::WorkItemTypeUnresolved { work_item_id } => Problem {
            title: format!("Could not determine the type of work item {}", work_item_id),
            details: vec![format!(
                "Name the type in the command (TASK-{0}) or pass --type {0}=task.",
                work_item_id
            )],
            examples: Examples::Status,
        },
        RejectionReason::NoFieldAssignments => Problem {
            title: "No field updates found!".to_string(),
            details: vec!["Write each change as Field -> Value.".to_string()],
            examples: Examples::Single,
        },
        RejectionReason::MultipleTargets { work_item_ids } => Problem {
            title: "One command can update only one work item!".to_string(),
            details: vec![
                format!("Also found: {}", work_item_ids.join(", ")),
                "Use the batch form to update several work items.".to_string(),
            ],
            examples: Examples::Batch,
        },
        RejectionReason::EmptyBatch => Problem {
            title: "Invalid Batch Update Format!".to_string(),
            details: vec!["The batch lists no work items.".to_string()],
            examples: Examples::Batch,
        },
        RejectionReason::BatchTooLarge { lines, max } => Problem {
            title: "Invalid Batch Update Format!".to_string(),
            details: vec![format!(
                "The batch has {} lines; split it into batches of at most {}.",
                lines, max
            )],
            examples: Examples::Batch,
        },
        RejectionReason::MalformedBatchLine { text, .. } => Problem {
            title: "Invalid Batch Update Format!".to_string(),
            details: vec![format!("Received: {}", text)],
            examples: Examples::Batch,
        },
    }
}

fn context_line(rejection: &Rejection) -> Option<String> {
    match (rejection.line_number, rejection.work_item_id.as_deref()) {
        (Some(line), Some(id)) => Some(format!("Line {} (work item {})", line, id)),
        (Some(line), None) => Some(format!("Line {}", line)),
        (None, Some(id)) => Some(format!("Work item {}", id)),
        (None, None) => None,
    }
}

fn type_label(item_type: Option<WorkItemType>) -> &'static str {
    item_type.map_or("Work item", |item_type| item_type.display_name())
}

/// `start_date` -> `Start Date`
fn field_label(field: FieldKey) -> String {
    field
        .as_str()
        .split('_')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn supported_fields() -> String {
    FieldCatalog::descriptors()
        .iter()
        .map(|descriptor| field_label(descriptor.key))
        .collect::<Vec<_>>()
        .join(", ")
}

fn allowed_states(item_type: WorkItemType) -> String {
    item_type
        .allowed_states()
        .iter()
        .map(|state| state.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
