use crate::WorkItemType;

use std::collections::HashMap;

/// Resolves the type of an existing work item, e.g. from the remote tracker.
///
/// Consulted only when a status value has to be checked against the type's
/// workflow. `None` means the type could not be determined.
pub trait WorkItemTypeLookup {
    fn lookup(&self, work_item_id: &str) -> Option<WorkItemType>;
}

impl WorkItemTypeLookup for HashMap<String, WorkItemType> {
    fn lookup(&self, work_item_id: &str) -> Option<WorkItemType> {
        self.get(work_item_id).copied()
    }
}

/// Adapts a closure into a [`WorkItemTypeLookup`].
pub struct LookupFn<F>(pub F);

impl<F> WorkItemTypeLookup for LookupFn<F>
where
    F: Fn(&str) -> Option<WorkItemType>,
{
    fn lookup(&self, work_item_id: &str) -> Option<WorkItemType> {
        (self.0)(work_item_id)
    }
}

/// Resolves nothing; only types named in the instruction are known.
pub struct NoTypeLookup;

impl WorkItemTypeLookup for NoTypeLookup {
    fn lookup(&self, _work_item_id: &str) -> Option<WorkItemType> {
        None
    }
}
