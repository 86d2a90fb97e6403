use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors that stop the `da` binary before or after validation
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read instruction: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {source}")]
    Config {
        #[source]
        source: da_config::ConfigError,
    },

    #[error("Invalid work item type for {work_item_id}: {source}")]
    WorkItemType {
        work_item_id: String,
        #[source]
        source: da_core::CoreError,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON output error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl CliError {
    #[track_caller]
    pub fn from_io(err: std::io::Error) -> Self {
        CliError::Input {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        CliError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        CliError::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for CliError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        CliError::from_io(err)
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        CliError::from_json(err)
    }
}

impl From<da_config::ConfigError> for CliError {
    fn from(source: da_config::ConfigError) -> Self {
        CliError::Config { source }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
