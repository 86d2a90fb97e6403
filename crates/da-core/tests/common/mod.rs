#![allow(dead_code)]

use da_core::{CoreError, CoreResult, UpdateExecutor, ValidatedUpdate, WorkItemType};

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

pub const BATCH_HEADER: &str = "Update following individual tasks:";

pub fn type_table(entries: &[(&str, WorkItemType)]) -> HashMap<String, WorkItemType> {
    entries
        .iter()
        .map(|(id, item_type)| (id.to_string(), *item_type))
        .collect()
}

/// Records every submitted update; fails the ids it was told to fail.
#[derive(Default)]
pub struct RecordingExecutor {
    failing: HashSet<String>,
    applied: Mutex<Vec<ValidatedUpdate>>,
}

impl RecordingExecutor {
    pub fn failing(ids: &[&str]) -> Self {
        Self {
            failing: ids.iter().map(|id| id.to_string()).collect(),
            applied: Mutex::new(Vec::new()),
        }
    }

    pub fn submitted_ids(&self) -> Vec<String> {
        self.applied
            .lock()
            .unwrap()
            .iter()
            .map(|update| update.work_item_id().to_string())
            .collect()
    }
}

#[async_trait]
impl UpdateExecutor for RecordingExecutor {
    async fn apply(&self, update: &ValidatedUpdate) -> CoreResult<()> {
        self.applied.lock().unwrap().push(update.clone());

        let id = update.work_item_id().as_str();
        if self.failing.contains(id) {
            return Err(CoreError::executor(id, "TF401232: work item does not exist"));
        }
        Ok(())
    }
}
