use crate::error::{CliError, Result as CliErrorResult};

use da_config::WorkItemsConfig;
use da_core::{WorkItemId, WorkItemType};

use std::collections::HashMap;
use std::str::FromStr;

/// `--type ID=TYPE` from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeOverride {
    pub work_item_id: String,
    pub item_type: WorkItemType,
}

pub fn parse_type_override(value: &str) -> Result<TypeOverride, String> {
    let (id, item_type) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=TYPE, got '{}'", value))?;

    let work_item_id = WorkItemId::parse(id).map_err(|reason| reason.to_string())?;
    let item_type = WorkItemType::from_str(item_type.trim()).map_err(|e| e.to_string())?;

    Ok(TypeOverride {
        work_item_id: work_item_id.to_string(),
        item_type,
    })
}

/// Work item type table for validation: `[work_items.types]` from config,
/// then command-line overrides on top.
pub fn build_lookup(
    config: &WorkItemsConfig,
    overrides: &[TypeOverride],
) -> CliErrorResult<HashMap<String, WorkItemType>> {
    let mut lookup = HashMap::with_capacity(config.types.len() + overrides.len());

    for (id, name) in &config.types {
        let item_type =
            WorkItemType::from_str(name.trim()).map_err(|source| CliError::WorkItemType {
                work_item_id: id.clone(),
                source,
            })?;
        lookup.insert(id.clone(), item_type);
    }

    for type_override in overrides {
        lookup.insert(type_override.work_item_id.clone(), type_override.item_type);
    }

    log::debug!("Work item type lookup has {} entries", lookup.len());
    Ok(lookup)
}
