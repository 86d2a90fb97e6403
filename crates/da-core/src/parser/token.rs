pub(crate) const ARROW: &str = "->";

const QUOTES: [char; 2] = ['"', '\''];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Word,
    /// Quoted run, quotes included; never split on whitespace or arrows
    Quoted,
    Arrow,
}

/// A token and its byte span in the tokenized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

impl<'a> Token<'a> {
    fn new(kind: TokenKind, input: &'a str, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: &input[start..end],
            start,
            end,
        }
    }

    pub fn is_arrow(&self) -> bool {
        self.kind == TokenKind::Arrow
    }

    pub fn is_word(&self, word: &str) -> bool {
        self.kind == TokenKind::Word && self.text.eq_ignore_ascii_case(word)
    }
}

/// Single pass: whitespace separates words, `->` is always its own token
/// (even glued to words), and a quote at the start of a word runs to the
/// matching quote.
pub(crate) fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(ch) = input[pos..].chars().next() {
        if ch.is_whitespace() {
            pos += ch.len_utf8();
            continue;
        }

        let rest = &input[pos..];

        if rest.starts_with(ARROW) {
            tokens.push(Token::new(TokenKind::Arrow, input, pos, pos + ARROW.len()));
            pos += ARROW.len();
            continue;
        }

        if QUOTES.contains(&ch)
            && let Some(close) = rest[1..].find(ch)
        {
            let end = pos + 1 + close + 1;
            tokens.push(Token::new(TokenKind::Quoted, input, pos, end));
            pos = end;
            continue;
        }

        let end = rest
            .char_indices()
            .skip(1)
            .find(|(i, c)| c.is_whitespace() || rest[*i..].starts_with(ARROW))
            .map(|(i, _)| pos + i)
            .unwrap_or(input.len());

        tokens.push(Token::new(TokenKind::Word, input, pos, end));
        pos = end;
    }

    tokens
}

/// Source text covered by a non-empty token run, internal spacing preserved.
pub(crate) fn span_text<'a>(input: &'a str, tokens: &[Token<'_>]) -> &'a str {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => &input[first.start..last.end],
        _ => "",
    }
}
