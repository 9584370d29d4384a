//! Built-in generic code scanner
//!
//! This module provides the raw tokenization for delegated code spans using
//! the logos lexer library. It is a deliberately coarse, language-agnostic
//! scanner: strings, numbers, words (upgraded to keywords via a per-language
//! word list), operators, brackets and whitespace. Consumers that want real
//! per-language lexing register their own `DelegateTokenizer` in the
//! registry; this one exists so classification works end to end out of the
//! box.
//!
//! The scanner is total: every byte of the input lands in exactly one token,
//! with unrecognized bytes categorized as `Error`. That keeps the
//! classifier's round-trip guarantee intact whatever the code looks like.

use logos::Logos;

use crate::profile::DelegateTokenizer;
use crate::token::{Token, TokenKind};

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    // String literals; escapes allowed, no newline inside
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    DoubleQuoted,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    SingleQuoted,

    // Numeric literals (integer, decimal, exponent)
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    Number,

    // Identifiers and other words
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Word,

    // Whitespace (excluding newlines)
    #[regex(r"[ \t]+")]
    Whitespace,

    // Line breaks
    #[token("\n")]
    Newline,

    // Runs of operator characters
    #[regex(r"[+*/=<>!&|%~@$#?.,:;`^\\-]+")]
    Operator,

    // Brackets
    #[regex(r"[()\[\]{}]")]
    Punct,
}

/// Best-effort code tokenizer parameterized by a keyword list.
///
/// One instance per delegate language; the keyword list is the only
/// per-language state.
pub struct CodeScanner {
    keywords: &'static [&'static str],
}

impl CodeScanner {
    pub fn new(keywords: &'static [&'static str]) -> Self {
        CodeScanner { keywords }
    }

    /// Scanner with no keyword list; every word is a plain `Name`.
    pub fn plain() -> Self {
        CodeScanner { keywords: &[] }
    }
}

impl DelegateTokenizer for CodeScanner {
    fn tokenize(&self, source: &str) -> Vec<Token> {
        let mut lexer = RawToken::lexer(source);
        let mut tokens = Vec::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            let text = &source[span.start..span.end];
            let kind = match result {
                Ok(RawToken::DoubleQuoted) | Ok(RawToken::SingleQuoted) => TokenKind::Str,
                Ok(RawToken::Number) => TokenKind::Number,
                Ok(RawToken::Word) => {
                    if self.keywords.iter().any(|k| *k == text) {
                        TokenKind::Keyword
                    } else {
                        TokenKind::Name
                    }
                }
                Ok(RawToken::Whitespace) | Ok(RawToken::Newline) => TokenKind::Whitespace,
                Ok(RawToken::Operator) => TokenKind::Operator,
                Ok(RawToken::Punct) => TokenKind::Punctuation,
                Err(()) => TokenKind::Error,
            };
            tokens.push(Token::new(span.start, kind, text));
        }

        tokens
    }
}
