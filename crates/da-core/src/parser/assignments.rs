use crate::parser::token::{Token, TokenKind, span_text};
use crate::{FieldCatalog, RawFieldAssignment};

const AND_KEYWORD: &str = "and";

/// Longest field phrase considered when splitting a value from the next field
const MAX_FIELD_WORDS: usize = 3;

/// Parse `Field -> Value [and] Field -> Value ...`.
///
/// The text between two arrows holds the previous value followed by the next
/// field name. The split point is, in order of preference:
/// 1. the longest trailing phrase (up to three words) the catalog resolves,
/// 2. the last standalone `and`,
/// 3. after the first token.
///
/// An `and` left dangling at the end of a value is dropped. Returns an empty
/// list when there is no arrow at all.
pub(crate) fn parse_assignments(input: &str, tokens: &[Token<'_>]) -> Vec<RawFieldAssignment> {
    let segments: Vec<&[Token<'_>]> = tokens.split(|token| token.is_arrow()).collect();
    if segments.len() < 2 {
        return Vec::new();
    }

    let last = segments.len() - 1;
    let mut assignments = Vec::with_capacity(last);
    let mut field = segments[0];

    for (index, segment) in segments.iter().enumerate().skip(1) {
        let (value, next_field) = if index == last {
            (*segment, &segment[segment.len()..])
        } else {
            split_value_and_field(segment)
        };

        assignments.push(RawFieldAssignment::new(
            FieldCatalog::lookup_key(span_text(input, field)),
            span_text(input, trim_trailing_and(value)),
        ));
        field = next_field;
    }

    assignments
}

fn split_value_and_field<'s, 't>(
    segment: &'s [Token<'t>],
) -> (&'s [Token<'t>], &'s [Token<'t>]) {
    if segment.len() < 2 {
        return (segment, &segment[segment.len()..]);
    }

    let split = known_field_suffix(segment)
        .or_else(|| last_and(segment))
        .unwrap_or(1);

    let (value, rest) = segment.split_at(split);
    let field = match rest.first() {
        Some(token) if token.is_word(AND_KEYWORD) => &rest[1..],
        _ => rest,
    };

    (value, field)
}

/// Start index of the longest trailing word phrase naming a catalog field,
/// leaving at least one value token in front of it.
fn known_field_suffix(segment: &[Token<'_>]) -> Option<usize> {
    let max_words = MAX_FIELD_WORDS.min(segment.len() - 1);

    (1..=max_words).rev().find_map(|words| {
        let start = segment.len() - words;
        let phrase = &segment[start..];

        let all_words = phrase.iter().all(|token| token.kind == TokenKind::Word);
        let key = phrase
            .iter()
            .map(|token| token.text)
            .collect::<Vec<_>>()
            .join("_")
            .to_lowercase();

        (all_words && FieldCatalog::resolve(&key).is_some()).then_some(start)
    })
}

/// Index of the last `and` that has tokens on both sides.
fn last_and(segment: &[Token<'_>]) -> Option<usize> {
    segment
        .iter()
        .enumerate()
        .rev()
        .find(|(index, token)| {
            token.is_word(AND_KEYWORD) && *index > 0 && *index < segment.len() - 1
        })
        .map(|(index, _)| index)
}

fn trim_trailing_and<'s, 't>(value: &'s [Token<'t>]) -> &'s [Token<'t>] {
    match value.split_last() {
        Some((last, rest)) if !rest.is_empty() && last.is_word(AND_KEYWORD) => rest,
        _ => value,
    }
}
