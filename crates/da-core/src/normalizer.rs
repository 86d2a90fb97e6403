//! Raw text to canonical field values, one function per value kind.
//!
//! All functions are pure. Failures are returned as [`RejectionReason`]
//! values carrying the field and the offending raw text.

use crate::{
    FieldDescriptor, FieldKey, FieldValue, IntegerRule, RejectionReason, StatusNotice, ValueKind,
    ValueProblem, WorkItemState, WorkItemType,
};

use chrono::NaiveDate;
use da_config::ValidationConfig;

const QUOTES: [char; 2] = ['"', '\''];

/// Recognized status words and phrases, lowercase with single spaces
const STATUS_SYNONYMS: &[(&str, WorkItemState)] = &[
    ("active", WorkItemState::Active),
    ("new", WorkItemState::New),
    ("created", WorkItemState::New),
    ("approved", WorkItemState::Approved),
    ("resolved", WorkItemState::Resolved),
    ("closed", WorkItemState::Closed),
    ("removed", WorkItemState::Removed),
    ("blocked", WorkItemState::Active),
    ("proposed", WorkItemState::Proposed),
    ("in progress", WorkItemState::Active),
    ("in-progress", WorkItemState::Active),
    ("working", WorkItemState::Active),
    ("started", WorkItemState::Active),
    ("waiting", WorkItemState::Active),
    ("on hold", WorkItemState::Active),
    ("stuck", WorkItemState::Active),
    ("done", WorkItemState::Resolved),
    ("completed", WorkItemState::Resolved),
    ("finished", WorkItemState::Resolved),
];

/// A normalized value plus the fallback notice, if one was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: FieldValue,
    pub notice: Option<StatusNotice>,
}

impl Normalized {
    fn plain(value: FieldValue) -> Self {
        Self {
            value,
            notice: None,
        }
    }
}

/// Normalize `raw` for `descriptor`.
///
/// `item_type` is required for status-kind fields; callers resolve it first.
pub fn normalize(
    descriptor: &FieldDescriptor,
    raw: &str,
    item_type: Option<WorkItemType>,
    config: &ValidationConfig,
) -> Result<Normalized, RejectionReason> {
    let field = descriptor.key;

    match descriptor.value_kind {
        ValueKind::Date => normalize_date(field, raw).map(|d| Normalized::plain(FieldValue::Date(d))),
        ValueKind::Integer => normalize_integer(field, raw, descriptor.integer_rule)
            .map(|n| Normalized::plain(FieldValue::Integer(n))),
        ValueKind::Text => {
            let max_length = match field {
                FieldKey::Title => Some(config.max_title_length),
                FieldKey::Description => Some(config.max_description_length),
                _ => None,
            };
            normalize_text(field, raw, descriptor.allows_empty, max_length)
                .map(|t| Normalized::plain(FieldValue::Text(t)))
        }
        ValueKind::Status => {
            // Status needs the work item type; the validator never calls without one.
            let Some(item_type) = item_type else {
                return Err(invalid(field, raw, ValueProblem::UnknownStatus));
            };
            let (state, notice) = normalize_status(field, raw, item_type, config.status_fallback)?;
            Ok(Normalized {
                value: FieldValue::Status(state),
                notice,
            })
        }
    }
}

/// Accepts `MM/DD/YYYY` or `YYYY-MM-DD` (one or two digit month/day).
pub fn normalize_date(field: FieldKey, raw: &str) -> Result<NaiveDate, RejectionReason> {
    let value = unquote(raw);
    if value.is_empty() {
        return Err(invalid(field, raw, ValueProblem::Empty));
    }

    parse_us_date(value)
        .or_else(|| parse_iso_date(value))
        .ok_or_else(|| invalid(field, raw, ValueProblem::NotADate))
}

pub fn normalize_integer(
    field: FieldKey,
    raw: &str,
    rule: Option<IntegerRule>,
) -> Result<i64, RejectionReason> {
    let value = unquote(raw);
    if value.is_empty() {
        return Err(invalid(field, raw, ValueProblem::Empty));
    }

    let parsed: i64 = value
        .parse()
        .map_err(|_| invalid(field, raw, ValueProblem::NotAnInteger))?;

    match rule {
        Some(IntegerRule::Positive) if parsed <= 0 => {
            Err(invalid(field, raw, ValueProblem::NotPositive))
        }
        Some(IntegerRule::Range { min, max }) if parsed < min || parsed > max => {
            Err(invalid(field, raw, ValueProblem::OutOfRange { min, max }))
        }
        _ => Ok(parsed),
    }
}

/// Map a status word to a state allowed for `item_type`.
///
/// Recognized states the type does not allow fall back to the type's
/// in-progress state with a notice, unless `allow_fallback` is off, in which
/// case they are rejected. Unrecognized text is always rejected.
pub fn normalize_status(
    field: FieldKey,
    raw: &str,
    item_type: WorkItemType,
    allow_fallback: bool,
) -> Result<(WorkItemState, Option<StatusNotice>), RejectionReason> {
    let requested = status_synonym(raw).ok_or_else(|| {
        let problem = if unquote(raw).is_empty() {
            ValueProblem::Empty
        } else {
            ValueProblem::UnknownStatus
        };
        invalid(field, raw, problem)
    })?;

    if item_type.allows(requested) {
        return Ok((requested, None));
    }

    if !allow_fallback {
        return Err(RejectionReason::InvalidStatusForType {
            field,
            raw_value: raw.to_string(),
            work_item_type: item_type,
        });
    }

    let applied = item_type.in_progress_state();
    log::warn!(
        "{} '{}' not allowed for {}, falling back to '{}'",
        field,
        requested,
        item_type,
        applied
    );

    Ok((
        applied,
        Some(StatusNotice {
            field,
            work_item_type: item_type,
            requested,
            applied,
        }),
    ))
}

pub fn normalize_text(
    field: FieldKey,
    raw: &str,
    allows_empty: bool,
    max_length: Option<usize>,
) -> Result<String, RejectionReason> {
    let value = unquote(raw);

    if value.is_empty() && !allows_empty {
        return Err(invalid(field, raw, ValueProblem::Empty));
    }

    if let Some(max) = max_length
        && value.chars().count() > max
    {
        return Err(invalid(field, raw, ValueProblem::TooLong { max }));
    }

    Ok(value.to_string())
}

/// Look up a status word or phrase, ignoring case, quotes and spacing.
pub fn status_synonym(raw: &str) -> Option<WorkItemState> {
    let phrase = unquote(raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    STATUS_SYNONYMS
        .iter()
        .find(|(word, _)| *word == phrase)
        .map(|(_, state)| *state)
}

/// Trim whitespace, then one pair of matching quotes if present at both ends.
pub fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();

    for quote in QUOTES {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return &trimmed[1..trimmed.len() - 1];
        }
    }

    trimmed
}

fn invalid(field: FieldKey, raw: &str, problem: ValueProblem) -> RejectionReason {
    RejectionReason::InvalidValueFormat {
        field,
        raw_value: raw.to_string(),
        problem,
    }
}

fn parse_us_date(value: &str) -> Option<NaiveDate> {
    let [month, day, year] = date_parts(value, '/')?;
    if !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) || year.len() != 4 {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let [year, month, day] = date_parts(value, '-')?;
    if year.len() != 4 || !(1..=2).contains(&month.len()) || !(1..=2).contains(&day.len()) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

/// Split into exactly three all-digit parts.
fn date_parts(value: &str, separator: char) -> Option<[&str; 3]> {
    let mut parts = value.split(separator);
    let result = [parts.next()?, parts.next()?, parts.next()?];

    if parts.next().is_some() {
        return None;
    }
    if result
        .iter()
        .any(|part| part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()))
    {
        return None;
    }

    Some(result)
}
