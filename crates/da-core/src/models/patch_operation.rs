use crate::FieldValue;

use serde::Serialize;

pub const PATCH_OP_ADD: &str = "add";
pub const FIELDS_PATH_PREFIX: &str = "/fields/";

/// One JSON Patch operation of a work item update document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatchOperation {
    pub op: &'static str,
    pub path: String,
    pub value: FieldValue,
}

impl PatchOperation {
    pub fn add(canonical_path: &str, value: FieldValue) -> Self {
        Self {
            op: PATCH_OP_ADD,
            path: format!("{}{}", FIELDS_PATH_PREFIX, canonical_path),
            value,
        }
    }
}
