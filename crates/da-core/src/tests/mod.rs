mod models;

use crate::{WorkItemType, WorkItemTypeLookup};

use std::collections::HashMap;

/// Lookup backed by a fixed id -> type table
pub(crate) fn lookup_of(entries: &[(&str, WorkItemType)]) -> HashMap<String, WorkItemType> {
    entries
        .iter()
        .map(|(id, item_type)| (id.to_string(), *item_type))
        .collect()
}

/// Lookup that must never be consulted
pub(crate) struct PanickingLookup;

impl WorkItemTypeLookup for PanickingLookup {
    fn lookup(&self, work_item_id: &str) -> Option<WorkItemType> {
        panic!("lookup consulted for {}", work_item_id)
    }
}
