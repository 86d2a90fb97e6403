use crate::WorkItemState;

use chrono::NaiveDate;
use serde::Serialize;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A normalized field value, ready to be sent to the remote tracker.
///
/// Serializes untagged: dates as `YYYY-MM-DD` strings, integers as numbers,
/// states and text as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Date(NaiveDate),
    Integer(i64),
    Status(WorkItemState),
    Text(String),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Integer(value) => write!(f, "{}", value),
            Self::Status(state) => write!(f, "{}", state),
            Self::Text(text) => write!(f, "{}", text),
        }
    }
}
