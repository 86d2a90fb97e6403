use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

/// Integration and programming errors.
///
/// Malformed user instructions are never reported through this type; they
/// become [`crate::Rejection`] values.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid work item type: {value} {location}")]
    InvalidWorkItemType {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid work item state: {value} {location}")]
    InvalidWorkItemState {
        value: String,
        location: ErrorLocation,
    },

    #[error("Update of work item {work_item_id} failed: {message} {location}")]
    Executor {
        work_item_id: String,
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create an executor error for a remote mutation that did not succeed
    #[track_caller]
    pub fn executor<S: Into<String>>(work_item_id: &str, message: S) -> Self {
        CoreError::Executor {
            work_item_id: work_item_id.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type CoreResult<T> = StdResult<T, CoreError>;
