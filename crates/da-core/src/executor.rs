use crate::{CoreError, CoreResult, ValidatedUpdate, WorkItemId};

use std::collections::HashSet;

use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;

/// Performs the remote mutation for one validated update.
///
/// Implementations own transport, retries and backoff.
#[async_trait]
pub trait UpdateExecutor: Send + Sync {
    async fn apply(&self, update: &ValidatedUpdate) -> CoreResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionStatus {
    Applied,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecutionOutcome {
    pub work_item_id: WorkItemId,
    #[serde(flatten)]
    pub status: ExecutionStatus,
}

impl ExecutionOutcome {
    pub fn is_applied(&self) -> bool {
        self.status == ExecutionStatus::Applied
    }
}

/// Submit each update once, in plan order, relaying the executor's result.
///
/// A work item id already submitted in this plan is never attempted again.
pub async fn execute_plan<E>(executor: &E, updates: &[ValidatedUpdate]) -> Vec<ExecutionOutcome>
where
    E: UpdateExecutor + ?Sized,
{
    let mut attempted: HashSet<&WorkItemId> = HashSet::with_capacity(updates.len());
    let mut outcomes = Vec::with_capacity(updates.len());

    for update in updates {
        let work_item_id = update.work_item_id();
        if !attempted.insert(work_item_id) {
            warn!("Work item {} already submitted in this plan, skipping", work_item_id);
            continue;
        }

        let status = match executor.apply(update).await {
            Ok(()) => {
                info!("Work item {} updated", work_item_id);
                ExecutionStatus::Applied
            }
            Err(e) => {
                warn!("Work item {} update failed: {}", work_item_id, e);
                ExecutionStatus::Failed {
                    message: remote_message(e),
                }
            }
        };

        outcomes.push(ExecutionOutcome {
            work_item_id: work_item_id.clone(),
            status,
        });
    }

    outcomes
}

fn remote_message(error: CoreError) -> String {
    match error {
        CoreError::Executor { message, .. } => message,
        other => other.to_string(),
    }
}
