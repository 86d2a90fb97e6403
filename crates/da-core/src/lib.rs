//! Work item update command interpreter.
//!
//! Turns free-form update instructions such as
//! `Update TASK-12345 Remaining -> 8 and Completed -> 4` into validated,
//! normalized field updates, deciding before any network call whether the
//! update is safe to execute.

pub mod catalog;
pub mod error;
pub mod executor;
pub mod lookup;
pub mod models;
pub mod normalizer;
pub mod parser;
pub mod validator;

#[cfg(test)]
mod tests;

pub use catalog::{FieldCatalog, FieldDescriptor, FieldKey, IntegerRule, ValueKind};
pub use error::{CoreError, CoreResult};
pub use executor::{ExecutionOutcome, ExecutionStatus, UpdateExecutor, execute_plan};
pub use lookup::{LookupFn, NoTypeLookup, WorkItemTypeLookup};
pub use models::field_value::FieldValue;
pub use models::patch_operation::PatchOperation;
pub use models::rejection::{Rejection, RejectionReason, ValueProblem};
pub use models::status_notice::StatusNotice;
pub use models::update_request::{RawFieldAssignment, UpdateRequest};
pub use models::validated_update::ValidatedUpdate;
pub use models::work_item_id::WorkItemId;
pub use models::work_item_state::WorkItemState;
pub use models::work_item_type::WorkItemType;
pub use parser::{BatchParseFailure, InstructionForm, ParsedInstruction, parse};
pub use validator::{UpdateValidator, ValidationOutcome};
