//! Token types for console transcript classification
//!
//! This module contains the token types shared by the classifier and the
//! delegate tokenizers:
//! - Token: one contiguous span of the input with its byte offset and category
//! - TokenKind: classification of a span
//!
//! Tokens partition their input: concatenating the `text` fields of a token
//! stream, in emission order, reconstructs the source string exactly. This is
//! what lets a downstream renderer re-emit the transcript with highlighting
//! applied and nothing lost.

use std::fmt;

/// The category of a token span.
///
/// `Prompt`, `Output` and `Comment` are produced by the transcript classifier
/// itself. The remaining variants are the categories delegate tokenizers use
/// for embedded source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// REPL prompt marker (e.g. `>>> `, `gosh> `, `irb(main):001:0> `)
    Prompt,

    /// Program output line
    Output,

    /// Full-line comment in the transcript (outside any code span)
    Comment,

    /// Language keyword inside a code span
    Keyword,

    /// Identifier or other name inside a code span
    Name,

    /// Numeric literal inside a code span
    Number,

    /// String literal inside a code span
    Str,

    /// Operator characters inside a code span
    Operator,

    /// Bracket or other punctuation inside a code span
    Punctuation,

    /// Whitespace inside a code span (including newlines)
    Whitespace,

    /// Bytes a delegate tokenizer could not recognize (best-effort category)
    Error,

    /// Uncategorized code text
    Text,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Prompt => "PROMPT",
            TokenKind::Output => "OUTPUT",
            TokenKind::Comment => "COMMENT",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Name => "NAME",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Punctuation => "PUNCTUATION",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Error => "ERROR",
            TokenKind::Text => "TEXT",
        };
        write!(f, "{}", name)
    }
}

/// One contiguous span of classified input.
///
/// `offset` is the byte position of the span's first character. For tokens
/// returned by a delegate tokenizer the offset is relative to the delegated
/// code buffer; the classifier re-bases it to the original input during the
/// insertion merge.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Byte offset of the first character of this span
    pub offset: usize,

    /// Category of this span
    pub kind: TokenKind,

    /// The exact source text of this span
    pub text: String,
}

impl Token {
    pub fn new(offset: usize, kind: TokenKind, text: impl Into<String>) -> Self {
        Token {
            offset,
            kind,
            text: text.into(),
        }
    }

    /// Byte offset one past the last character of this span
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{:?}", self.offset, self.kind, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_display_names() {
        assert_eq!(TokenKind::Prompt.to_string(), "PROMPT");
        assert_eq!(TokenKind::Output.to_string(), "OUTPUT");
        assert_eq!(TokenKind::Comment.to_string(), "COMMENT");
        assert_eq!(TokenKind::Str.to_string(), "STRING");
    }

    #[test]
    fn test_token_end() {
        let token = Token::new(4, TokenKind::Output, "abc\n");
        assert_eq!(token.end(), 8);
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(0, TokenKind::Prompt, ">>> ");
        assert_eq!(token.to_string(), "0\tPROMPT\t\">>> \"");
    }
}
