//! Instruction grammar.
//!
//! Two forms, chosen by the first line:
//!
//! ```text
//! Update TASK-12345 Remaining -> 8 and Completed -> 4
//!
//! Update following individual tasks:
//! TASK 51311 -> Start Date -> 08/08/2025 Finish Date -> 08/11/2025
//! TASK 51312 -> Status -> Active
//! ```

pub(crate) mod assignments;
pub(crate) mod target;
pub(crate) mod token;

use crate::parser::assignments::parse_assignments;
use crate::parser::target::{IdRule, parse_target};
use crate::parser::token::{Token, span_text, tokenize};
use crate::{FieldCatalog, Rejection, RejectionReason, UpdateRequest};

use log::debug;
use serde::Serialize;

pub const BATCH_HEADER: &str = "update following individual tasks:";

/// Leading verbs of the single form; optional
const UPDATE_VERBS: &[&str] = &["update", "modify", "change", "edit", "set"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InstructionForm {
    Single,
    Batch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInstruction {
    pub form: InstructionForm,
    pub requests: Vec<UpdateRequest>,
}

/// A batch with at least one line that does not fit the line grammar.
///
/// Every line was scanned: `rejections` lists all malformed lines and
/// `well_formed` keeps the rest so their own problems can be reported in
/// the same response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchParseFailure {
    pub rejections: Vec<Rejection>,
    pub well_formed: Vec<UpdateRequest>,
}

/// Split a raw instruction into per-work-item requests.
///
/// The single form always yields exactly one request, even when it lacks an
/// id or assignments; those problems are the validator's to report.
pub fn parse(raw_instruction: &str) -> Result<ParsedInstruction, BatchParseFailure> {
    let mut lines = raw_instruction.lines();
    let header_rest = lines
        .find(|line| !line.trim().is_empty())
        .and_then(strip_batch_header);

    if let Some(header_rest) = header_rest {
        return parse_batch(std::iter::once(header_rest).chain(lines));
    }

    Ok(ParsedInstruction {
        form: InstructionForm::Single,
        requests: vec![parse_single(raw_instruction)],
    })
}

pub fn is_batch_header(line: &str) -> bool {
    strip_batch_header(line).is_some()
}

/// Text after the batch header on the same line, `None` when `line` does
/// not open a batch. Header words match case-insensitively across any run
/// of whitespace.
fn strip_batch_header(line: &str) -> Option<&str> {
    let words: Vec<&str> = BATCH_HEADER.split_whitespace().collect();
    let mut rest = line.trim_start();

    for (index, word) in words.iter().enumerate() {
        let head = rest.get(..word.len())?;
        if !head.eq_ignore_ascii_case(word) {
            return None;
        }

        rest = &rest[word.len()..];
        let is_last = index + 1 == words.len();
        if !is_last && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        rest = rest.trim_start();
    }

    Some(rest.trim_end())
}

fn parse_single(instruction: &str) -> UpdateRequest {
    let tokens = tokenize(instruction);

    let start = match tokens.first() {
        Some(first) if UPDATE_VERBS.iter().any(|verb| first.is_word(verb)) => 1,
        _ => 0,
    };

    let target = parse_target(&tokens, start, IdRule::LeadingDigit);
    let (work_item_id, item_type, next) = match target {
        Some(target) => (target.work_item_id, Some(target.item_type), target.next),
        None => (String::new(), None, start),
    };

    let mut request = UpdateRequest::new(work_item_id, item_type);
    request.assignments = parse_assignments(instruction, &tokens[next..]);
    request.other_targets = embedded_targets(instruction, &tokens, next);

    debug!(
        "Parsed single update: id='{}', type={:?}, {} assignment(s), {} other target(s)",
        request.work_item_id,
        request.work_item_type,
        request.assignments.len(),
        request.other_targets.len()
    );

    request
}

/// Ids of further work items that open their own `Field -> Value` run after
/// `from`, e.g. a second `Update TASK-2 Title -> ...` line.
fn embedded_targets(instruction: &str, tokens: &[Token<'_>], from: usize) -> Vec<String> {
    let mut ids: Vec<String> = (from..tokens.len())
        .filter_map(|index| parse_target(tokens, index, IdRule::LeadingDigit))
        .filter(|target| {
            !target.work_item_id.is_empty()
                && opens_assignment(instruction, &tokens[target.next..])
        })
        .map(|target| target.work_item_id)
        .collect();

    // `user story 7` is also seen from `story 7`
    ids.dedup();
    ids
}

/// The tokens reach an arrow with nothing or a catalog field before it.
fn opens_assignment(instruction: &str, tokens: &[Token<'_>]) -> bool {
    let Some(arrow) = tokens.iter().position(Token::is_arrow) else {
        return false;
    };

    let field = &tokens[..arrow];
    field.is_empty()
        || FieldCatalog::resolve(&FieldCatalog::lookup_key(span_text(instruction, field))).is_some()
}

fn parse_batch<'a>(
    lines: impl Iterator<Item = &'a str>,
) -> Result<ParsedInstruction, BatchParseFailure> {
    let mut requests = Vec::new();
    let mut rejections = Vec::new();

    // Line 0 is whatever follows the header on its own line
    for (line_number, line) in lines.enumerate().map(|(i, line)| (i, line.trim())) {
        if line.is_empty() {
            continue;
        }

        match parse_batch_line(line) {
            Some(request) => requests.push(request.at_line(line_number)),
            None => rejections.push(
                Rejection::single(RejectionReason::MalformedBatchLine {
                    line_number,
                    text: line.to_string(),
                })
                .at_line(Some(line_number)),
            ),
        }
    }

    debug!(
        "Parsed batch: {} well-formed line(s), {} malformed",
        requests.len(),
        rejections.len()
    );

    if requests.is_empty() && rejections.is_empty() {
        return Err(BatchParseFailure {
            rejections: vec![Rejection::single(RejectionReason::EmptyBatch)],
            well_formed: requests,
        });
    }

    if !rejections.is_empty() {
        return Err(BatchParseFailure {
            rejections,
            well_formed: requests,
        });
    }

    Ok(ParsedInstruction {
        form: InstructionForm::Batch,
        requests,
    })
}

/// `<TYPE> <ID> -> Field -> Value [Field -> Value]*`
fn parse_batch_line(line: &str) -> Option<UpdateRequest> {
    let tokens = tokenize(line);
    let target = parse_target(&tokens, 0, IdRule::AnyWord)?;

    if target.work_item_id.is_empty() || !tokens.get(target.next)?.is_arrow() {
        return None;
    }

    let assignments = parse_assignments(line, &tokens[target.next + 1..]);
    if assignments.is_empty() {
        return None;
    }

    let mut request = UpdateRequest::new(target.work_item_id, Some(target.item_type));
    request.assignments = assignments;
    Some(request)
}
