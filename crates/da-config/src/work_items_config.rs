use crate::{ConfigError, ConfigErrorResult};

use std::collections::HashMap;

use serde::Deserialize;

/// Known work item types, keyed by work item id.
///
/// ```toml
/// [work_items.types]
/// 51311 = "task"
/// 67890 = "user story"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkItemsConfig {
    pub types: HashMap<String, String>,
}

impl WorkItemsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (id, item_type) in &self.types {
            if id.is_empty() || !id.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::work_items(format!(
                    "work_items.types key must be a numeric work item id, got '{}'",
                    id
                )));
            }

            if item_type.trim().is_empty() {
                return Err(ConfigError::work_items(format!(
                    "work_items.types.{} must name a work item type",
                    id
                )));
            }
        }

        Ok(())
    }
}
