use crate::{WorkItemState, WorkItemType};

use serde::{Deserialize, Serialize};

/// Every field an instruction may update.
///
/// Declaration order matches [`CATALOG`]; [`FieldKey::descriptor`] indexes by
/// discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    StartDate,
    FinishDate,
    Status,
    Priority,
    Title,
    Description,
    AssignedTo,
    Remaining,
    Completed,
    OriginalEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Date,
    Integer,
    Status,
    Text,
}

/// Constraint on an integer field's value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntegerRule {
    /// Inclusive range
    Range { min: i64, max: i64 },
    /// Strictly greater than zero
    Positive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub key: FieldKey,
    /// Lowercase, unique across the catalog
    pub user_key: &'static str,
    /// Field reference name on the remote tracker
    pub canonical_path: &'static str,
    pub value_kind: ValueKind,
    pub integer_rule: Option<IntegerRule>,
    /// Text fields only: whether an empty value (clearing the field) is accepted
    pub allows_empty: bool,
}

impl FieldDescriptor {
    const fn new(
        key: FieldKey,
        user_key: &'static str,
        canonical_path: &'static str,
        value_kind: ValueKind,
    ) -> Self {
        Self {
            key,
            user_key,
            canonical_path,
            value_kind,
            integer_rule: None,
            allows_empty: false,
        }
    }

    const fn with_rule(mut self, rule: IntegerRule) -> Self {
        self.integer_rule = Some(rule);
        self
    }

    const fn allowing_empty(mut self) -> Self {
        self.allows_empty = true;
        self
    }
}

pub const PRIORITY_MIN: i64 = 1;
pub const PRIORITY_MAX: i64 = 4;

static CATALOG: [FieldDescriptor; 10] = [
    FieldDescriptor::new(
        FieldKey::StartDate,
        "start_date",
        "Microsoft.VSTS.Scheduling.StartDate",
        ValueKind::Date,
    ),
    FieldDescriptor::new(
        FieldKey::FinishDate,
        "finish_date",
        "Microsoft.VSTS.Scheduling.FinishDate",
        ValueKind::Date,
    ),
    FieldDescriptor::new(FieldKey::Status, "status", "System.State", ValueKind::Status),
    FieldDescriptor::new(
        FieldKey::Priority,
        "priority",
        "Microsoft.VSTS.Common.Priority",
        ValueKind::Integer,
    )
    .with_rule(IntegerRule::Range {
        min: PRIORITY_MIN,
        max: PRIORITY_MAX,
    }),
    FieldDescriptor::new(FieldKey::Title, "title", "System.Title", ValueKind::Text),
    FieldDescriptor::new(
        FieldKey::Description,
        "description",
        "System.Description",
        ValueKind::Text,
    )
    .allowing_empty(),
    FieldDescriptor::new(
        FieldKey::AssignedTo,
        "assigned_to",
        "System.AssignedTo",
        ValueKind::Text,
    ),
    FieldDescriptor::new(
        FieldKey::Remaining,
        "remaining",
        "Microsoft.VSTS.Scheduling.RemainingWork",
        ValueKind::Integer,
    )
    .with_rule(IntegerRule::Positive),
    FieldDescriptor::new(
        FieldKey::Completed,
        "completed",
        "Microsoft.VSTS.Scheduling.CompletedWork",
        ValueKind::Integer,
    )
    .with_rule(IntegerRule::Positive),
    FieldDescriptor::new(
        FieldKey::OriginalEstimate,
        "original_estimate",
        "Microsoft.VSTS.Scheduling.OriginalEstimate",
        ValueKind::Integer,
    )
    .with_rule(IntegerRule::Positive),
];

/// Alternative phrasings, already in lookup form (lowercase, `_`-joined)
const ALIASES: &[(&str, FieldKey)] = &[
    ("startdate", FieldKey::StartDate),
    ("start", FieldKey::StartDate),
    ("finishdate", FieldKey::FinishDate),
    ("finish", FieldKey::FinishDate),
    ("end_date", FieldKey::FinishDate),
    ("enddate", FieldKey::FinishDate),
    ("state", FieldKey::Status),
    ("name", FieldKey::Title),
    ("desc", FieldKey::Description),
    ("assigned", FieldKey::AssignedTo),
    ("assignee", FieldKey::AssignedTo),
    ("remaining_work", FieldKey::Remaining),
    ("completed_work", FieldKey::Completed),
    ("estimate", FieldKey::OriginalEstimate),
    ("originalestimate", FieldKey::OriginalEstimate),
];

impl FieldKey {
    pub fn descriptor(&self) -> &'static FieldDescriptor {
        &CATALOG[*self as usize]
    }

    pub fn as_str(&self) -> &'static str {
        self.descriptor().user_key
    }

    pub fn canonical_path(&self) -> &'static str {
        self.descriptor().canonical_path
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Read-only registry of updatable fields.
pub struct FieldCatalog;

impl FieldCatalog {
    pub fn descriptors() -> &'static [FieldDescriptor] {
        &CATALOG
    }

    /// Resolve a lowercase user key (words joined with `_`) or one of its aliases.
    pub fn resolve(user_key: &str) -> Option<&'static FieldDescriptor> {
        CATALOG
            .iter()
            .find(|descriptor| descriptor.user_key == user_key)
            .or_else(|| {
                ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == user_key)
                    .map(|(_, key)| key.descriptor())
            })
    }

    /// Allowed states for a status-kind field; `None` for every other kind.
    pub fn allowed_statuses(
        item_type: WorkItemType,
        field: FieldKey,
    ) -> Option<&'static [WorkItemState]> {
        match field.descriptor().value_kind {
            ValueKind::Status => Some(item_type.allowed_states()),
            _ => None,
        }
    }

    /// Turn a free-text field phrase such as `Start Date` into lookup form.
    pub fn lookup_key(phrase: &str) -> String {
        phrase
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase()
    }
}
