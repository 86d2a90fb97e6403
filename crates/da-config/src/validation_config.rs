use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_TITLE_LENGTH: usize = 1;
pub const MAX_TITLE_LENGTH: usize = 500;
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 255;

pub const MIN_DESCRIPTION_LENGTH: usize = 0;
pub const MAX_DESCRIPTION_LENGTH: usize = 100000;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 32000;

pub const MIN_BATCH_LINES: usize = 1;
pub const MAX_BATCH_LINES: usize = 1000;
pub const DEFAULT_MAX_BATCH_LINES: usize = 100;

pub const DEFAULT_STATUS_FALLBACK: bool = true;

/// Limits and policy applied while validating update instructions.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Maximum length for work item titles
    pub max_title_length: usize,
    /// Maximum length for work item descriptions
    pub max_description_length: usize,
    /// Maximum number of work item lines in one batch instruction
    pub max_batch_lines: usize,
    /// Substitute `Active` for a status the work item type does not allow.
    /// When disabled such statuses are rejected.
    pub status_fallback: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_batch_lines: DEFAULT_MAX_BATCH_LINES,
            status_fallback: DEFAULT_STATUS_FALLBACK,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_title_length < MIN_TITLE_LENGTH || self.max_title_length > MAX_TITLE_LENGTH {
            return Err(ConfigError::validation(format!(
                "validation.max_title_length must be {}-{}, got {}",
                MIN_TITLE_LENGTH, MAX_TITLE_LENGTH, self.max_title_length
            )));
        }

        if self.max_description_length < MIN_DESCRIPTION_LENGTH
            || self.max_description_length > MAX_DESCRIPTION_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.max_description_length must be {}-{}, got {}",
                MIN_DESCRIPTION_LENGTH, MAX_DESCRIPTION_LENGTH, self.max_description_length
            )));
        }

        if self.max_batch_lines < MIN_BATCH_LINES || self.max_batch_lines > MAX_BATCH_LINES {
            return Err(ConfigError::validation(format!(
                "validation.max_batch_lines must be {}-{}, got {}",
                MIN_BATCH_LINES, MAX_BATCH_LINES, self.max_batch_lines
            )));
        }

        Ok(())
    }
}
