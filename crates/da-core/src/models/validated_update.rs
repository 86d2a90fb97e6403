use crate::{FieldKey, FieldValue, PatchOperation, StatusNotice, WorkItemId, WorkItemType};

use std::collections::BTreeMap;

use serde::Serialize;

/// Fully normalized, type-checked changes for one work item.
///
/// Built only by [`crate::UpdateValidator`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidatedUpdate {
    work_item_id: WorkItemId,
    #[serde(skip_serializing_if = "Option::is_none")]
    work_item_type: Option<WorkItemType>,
    fields: BTreeMap<FieldKey, FieldValue>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    notices: Vec<StatusNotice>,
}

impl ValidatedUpdate {
    pub(crate) fn new(
        work_item_id: WorkItemId,
        work_item_type: Option<WorkItemType>,
        fields: BTreeMap<FieldKey, FieldValue>,
        notices: Vec<StatusNotice>,
    ) -> Self {
        Self {
            work_item_id,
            work_item_type,
            fields,
            notices,
        }
    }

    /// Fold a later update for the same work item into this one.
    /// Fields and notices from `later` win.
    pub(crate) fn absorb(&mut self, later: ValidatedUpdate) {
        for key in later.fields.keys() {
            self.notices.retain(|notice| notice.field != *key);
        }
        self.fields.extend(later.fields);
        self.notices.extend(later.notices);
        if later.work_item_type.is_some() {
            self.work_item_type = later.work_item_type;
        }
    }

    pub fn work_item_id(&self) -> &WorkItemId {
        &self.work_item_id
    }

    pub fn work_item_type(&self) -> Option<WorkItemType> {
        self.work_item_type
    }

    pub fn fields(&self) -> &BTreeMap<FieldKey, FieldValue> {
        &self.fields
    }

    pub fn get(&self, key: FieldKey) -> Option<&FieldValue> {
        self.fields.get(&key)
    }

    pub fn notices(&self) -> &[StatusNotice] {
        &self.notices
    }

    /// `(canonical_path, value)` pairs in catalog order
    pub fn canonical_field_values(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.canonical_path(), value))
    }

    /// JSON Patch document for the remote tracker's work item update call
    pub fn patch_operations(&self) -> Vec<PatchOperation> {
        self.canonical_field_values()
            .map(|(path, value)| PatchOperation::add(path, value.clone()))
            .collect()
    }
}
