use crate::WorkItemType;
use crate::parser::token::{Token, TokenKind};

/// Single-word type keywords. `user story` is matched as a pair.
const TYPE_KEYWORDS: &[(&str, WorkItemType)] = &[
    ("requirement", WorkItemType::Requirement),
    ("story", WorkItemType::UserStory),
    ("task", WorkItemType::Task),
    ("bug", WorkItemType::Bug),
    ("epic", WorkItemType::Epic),
];

const USER_KEYWORD: &str = "user";
const STORY_KEYWORD: &str = "story";

/// How strictly a space-separated id token is recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdRule {
    /// Must start with a digit, so `task Status -> ...` has no id
    LeadingDigit,
    /// Any word (batch lines, where the id always sits before the first arrow)
    AnyWord,
}

/// `<TYPE>-<ID>`, `<TYPE> <ID>` or `[<TYPE>-<ID>]` at the head of a token run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Target {
    pub item_type: WorkItemType,
    /// Empty when the type keyword is not followed by an id
    pub work_item_id: String,
    /// Index of the first token after the target
    pub next: usize,
}

pub(crate) fn parse_target(tokens: &[Token<'_>], start: usize, id_rule: IdRule) -> Option<Target> {
    let first = word_at(tokens, start)?;
    let head = first.trim_start_matches('[');

    let (item_type, remainder, consumed) = if head.eq_ignore_ascii_case(USER_KEYWORD) {
        let second = word_at(tokens, start + 1)?;
        let remainder = strip_keyword(second, STORY_KEYWORD)?;
        (WorkItemType::UserStory, remainder, 2)
    } else {
        TYPE_KEYWORDS.iter().find_map(|(keyword, item_type)| {
            strip_keyword(head, keyword).map(|remainder| (*item_type, remainder, 1))
        })?
    };

    let mut next = start + consumed;

    // Hyphenated: TASK-12345 or [task-12345]
    let joined_id = remainder
        .strip_prefix('-')
        .map(|id| id.trim_end_matches(']'))
        .filter(|id| !id.is_empty());

    let work_item_id = match joined_id {
        Some(id) => id.to_string(),
        None => match word_at(tokens, next) {
            Some(word) if accepts_id(word, id_rule) => {
                next += 1;
                word.trim_end_matches(']').to_string()
            }
            _ => String::new(),
        },
    };

    Some(Target {
        item_type,
        work_item_id,
        next,
    })
}

/// `Some(rest)` when `word` is `keyword`, `keyword-...` or `keyword]`.
fn strip_keyword<'a>(word: &'a str, keyword: &str) -> Option<&'a str> {
    let prefix = word.get(..keyword.len())?;
    if !prefix.eq_ignore_ascii_case(keyword) {
        return None;
    }

    let rest = &word[keyword.len()..];
    match rest.chars().next() {
        None | Some('-') | Some(']') => Some(rest),
        _ => None,
    }
}

fn accepts_id(word: &str, id_rule: IdRule) -> bool {
    match id_rule {
        IdRule::LeadingDigit => word.starts_with(|c: char| c.is_ascii_digit()),
        IdRule::AnyWord => true,
    }
}

fn word_at<'a>(tokens: &[Token<'a>], index: usize) -> Option<&'a str> {
    tokens
        .get(index)
        .filter(|token| token.kind == TokenKind::Word)
        .map(|token| token.text)
}
