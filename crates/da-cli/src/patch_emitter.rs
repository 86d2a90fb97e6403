use da_core::{
    CoreError, CoreResult, PatchOperation, UpdateExecutor, ValidatedUpdate, WorkItemId,
};

use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

/// Body of one `PATCH .../wit/workitems/{id}` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchDocument {
    pub work_item_id: WorkItemId,
    pub operations: Vec<PatchOperation>,
}

impl From<&ValidatedUpdate> for PatchDocument {
    fn from(update: &ValidatedUpdate) -> Self {
        Self {
            work_item_id: update.work_item_id().clone(),
            operations: update.patch_operations(),
        }
    }
}

/// Executor that collects patch documents instead of calling the tracker.
#[derive(Debug, Default)]
pub struct PatchEmitter {
    documents: Mutex<Vec<PatchDocument>>,
}

impl PatchEmitter {
    pub fn into_documents(self) -> Vec<PatchDocument> {
        self.documents
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UpdateExecutor for PatchEmitter {
    async fn apply(&self, update: &ValidatedUpdate) -> CoreResult<()> {
        let document = PatchDocument::from(update);
        if document.operations.is_empty() {
            return Err(CoreError::executor(
                update.work_item_id().as_str(),
                "no fields to update",
            ));
        }

        let mut documents = self.documents.lock().map_err(|_| {
            CoreError::executor(update.work_item_id().as_str(), "patch buffer unavailable")
        })?;
        documents.push(document);
        Ok(())
    }
}
