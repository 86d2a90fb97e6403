use crate::normalizer::normalize;
use crate::parser::{InstructionForm, parse};
use crate::{
    FieldCatalog, Rejection, RejectionReason, StatusNotice, UpdateRequest, ValidatedUpdate,
    ValueKind, WorkItemId, WorkItemType, WorkItemTypeLookup,
};

use std::collections::BTreeMap;

use da_config::ValidationConfig;
use log::{debug, info, warn};
use serde::Serialize;

/// Result of validating a whole instruction.
///
/// Either every targeted work item validated (`rejections` is empty) or
/// nothing may be applied (`updates` is empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub updates: Vec<ValidatedUpdate>,
    pub rejections: Vec<Rejection>,
}

impl ValidationOutcome {
    fn rejected(rejections: Vec<Rejection>) -> Self {
        Self {
            updates: Vec::new(),
            rejections,
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.rejections.is_empty() && !self.updates.is_empty()
    }

    /// Status fallbacks applied across all updates
    pub fn notices(&self) -> impl Iterator<Item = (&WorkItemId, &StatusNotice)> {
        self.updates.iter().flat_map(|update| {
            update
                .notices()
                .iter()
                .map(move |notice| (update.work_item_id(), notice))
        })
    }
}

/// Applies field rules, value normalization and the all-or-nothing policy.
#[derive(Debug, Clone, Default)]
pub struct UpdateValidator {
    config: ValidationConfig,
}

impl UpdateValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Parse and validate a raw instruction.
    ///
    /// Malformed batch lines and invalid well-formed lines are reported
    /// together so one correction pass can fix every problem.
    pub fn interpret<L>(&self, raw_instruction: &str, lookup: &L) -> ValidationOutcome
    where
        L: WorkItemTypeLookup + ?Sized,
    {
        match parse(raw_instruction) {
            Ok(parsed) => {
                if parsed.form == InstructionForm::Batch
                    && let Some(too_large) = self.check_batch_size(parsed.requests.len())
                {
                    return too_large;
                }
                self.validate(&parsed.requests, lookup)
            }
            Err(failure) => {
                let line_count = failure.well_formed.len() + failure.rejections.len();
                if let Some(too_large) = self.check_batch_size(line_count) {
                    return too_large;
                }

                let checked = self.validate(&failure.well_formed, lookup);
                let mut rejections = failure.rejections;
                rejections.extend(checked.rejections);
                rejections.sort_by_key(|rejection| rejection.line_number);

                warn!(
                    "Batch rejected: {} problem line(s), nothing will be updated",
                    rejections.len()
                );
                ValidationOutcome::rejected(rejections)
            }
        }
    }

    /// Validate parsed requests as one unit.
    ///
    /// Any rejection discards every update. Requests for the same work item
    /// are merged in order, so each id appears at most once in the plan.
    pub fn validate<L>(&self, requests: &[UpdateRequest], lookup: &L) -> ValidationOutcome
    where
        L: WorkItemTypeLookup + ?Sized,
    {
        let mut updates: Vec<ValidatedUpdate> = Vec::new();
        let mut rejections = Vec::new();

        for request in requests {
            match self.validate_request(request, lookup) {
                Ok(update) => {
                    let existing = updates
                        .iter()
                        .position(|existing| existing.work_item_id() == update.work_item_id());
                    match existing {
                        Some(index) => updates[index].absorb(update),
                        None => updates.push(update),
                    }
                }
                Err(rejection) => rejections.push(rejection),
            }
        }

        if !rejections.is_empty() {
            warn!(
                "{} of {} request(s) rejected, discarding {} valid update(s)",
                rejections.len(),
                requests.len(),
                updates.len()
            );
            return ValidationOutcome::rejected(rejections);
        }

        info!("Validated {} work item update(s)", updates.len());
        ValidationOutcome {
            updates,
            rejections,
        }
    }

    /// Validate one request; every assignment must pass.
    pub fn validate_request<L>(
        &self,
        request: &UpdateRequest,
        lookup: &L,
    ) -> Result<ValidatedUpdate, Rejection>
    where
        L: WorkItemTypeLookup + ?Sized,
    {
        let line_number = request.line_number;

        let work_item_id = WorkItemId::parse(&request.work_item_id).map_err(|reason| {
            Rejection::single(reason)
                .for_work_item(request.work_item_id.trim())
                .at_line(line_number)
        })?;

        if !request.other_targets.is_empty() {
            warn!(
                "Work item {}: command also targets {:?}",
                work_item_id, request.other_targets
            );
            return Err(Rejection::single(RejectionReason::MultipleTargets {
                work_item_ids: request.other_targets.clone(),
            })
            .for_work_item(work_item_id.as_str())
            .at_line(line_number));
        }

        if request.assignments.is_empty() {
            return Err(Rejection::single(RejectionReason::NoFieldAssignments)
                .for_work_item(work_item_id.as_str())
                .at_line(line_number));
        }

        let mut resolved_type: Option<Option<WorkItemType>> = None;
        let mut fields = BTreeMap::new();
        let mut notices: Vec<StatusNotice> = Vec::new();
        let mut reasons = Vec::new();

        for assignment in &request.assignments {
            let Some(descriptor) = FieldCatalog::resolve(&assignment.field_user_key) else {
                reasons.push(RejectionReason::UnknownField {
                    field: assignment.field_user_key.clone(),
                });
                continue;
            };

            let item_type = if descriptor.value_kind == ValueKind::Status {
                let item_type = *resolved_type.get_or_insert_with(|| {
                    lookup
                        .lookup(work_item_id.as_str())
                        .or(request.work_item_type)
                });

                if item_type.is_none() {
                    let unresolved = RejectionReason::WorkItemTypeUnresolved {
                        work_item_id: work_item_id.to_string(),
                    };
                    if !reasons.contains(&unresolved) {
                        reasons.push(unresolved);
                    }
                    continue;
                }
                item_type
            } else {
                request.work_item_type
            };

            match normalize(descriptor, &assignment.raw_value, item_type, &self.config) {
                Ok(normalized) => {
                    debug!(
                        "Work item {}: {} '{}' -> {}",
                        work_item_id, descriptor.key, assignment.raw_value, normalized.value
                    );
                    notices.retain(|notice| notice.field != descriptor.key);
                    notices.extend(normalized.notice);
                    fields.insert(descriptor.key, normalized.value);
                }
                Err(reason) => reasons.push(reason),
            }
        }

        if !reasons.is_empty() {
            return Err(Rejection::new(reasons)
                .for_work_item(work_item_id.as_str())
                .at_line(line_number));
        }

        let work_item_type = resolved_type.flatten().or(request.work_item_type);
        Ok(ValidatedUpdate::new(
            work_item_id,
            work_item_type,
            fields,
            notices,
        ))
    }

    fn check_batch_size(&self, lines: usize) -> Option<ValidationOutcome> {
        let max = self.config.max_batch_lines;
        (lines > max).then(|| {
            warn!("Batch of {} lines exceeds the limit of {}", lines, max);
            ValidationOutcome::rejected(vec![Rejection::single(
                RejectionReason::BatchTooLarge { lines, max },
            )])
        })
    }
}
