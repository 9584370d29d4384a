//! Transcript classifier
//!
//! This module implements the shared line-classification algorithm behind
//! every console profile. The scan is line-oriented with a small amount of
//! carried state:
//!
//! 1. A line whose start matches the profile's prompt pattern is a code
//!    line: the prompt text is recorded as an insertion at the current
//!    length of the code buffer, and the rest of the line is appended to
//!    the buffer. Nothing is emitted yet: consecutive prompt lines build
//!    up one buffer so the delegate tokenizer sees whole statements
//!    (continuation prompts, matched brackets).
//! 2. Any other line first flushes the buffer: the delegate tokenizes the
//!    accumulated code, the recorded prompt insertions are merged back in
//!    by offset, and everything is re-based to absolute input offsets.
//!    The line itself is then a Comment (if the profile has a comment
//!    pattern and it matches) or plain Output.
//! 3. End of input flushes whatever is left.
//!
//! The classifier is a total function: any string input produces a token
//! stream that tiles the input exactly, whatever the profile.

pub mod insertions;

use crate::profile::LanguageProfile;
use crate::token::{Token, TokenKind};

use self::insertions::merge_insertions;

/// Classify a console transcript into prompt / code / comment / output spans.
///
/// Tokens come back in increasing offset order and partition `text` exactly:
/// concatenating their texts reconstructs the input. Code spans are
/// tokenized by the profile's delegate; prompt markers are re-inserted at
/// their original positions.
pub fn classify(text: &str, profile: &LanguageProfile) -> Vec<Token> {
    let mut out = Vec::new();
    let mut curcode = String::new();
    let mut insertions: Vec<(usize, Token)> = Vec::new();
    // Absolute offset where the current code accumulation began
    let mut code_start = 0usize;

    for (line_start, line) in lines_with_terminators(text) {
        // Prompt line: record the marker, accumulate the rest as code.
        if let Some(end) = match_prompt(profile, line) {
            if curcode.is_empty() && insertions.is_empty() {
                code_start = line_start;
            }
            insertions.push((
                curcode.len(),
                Token::new(0, TokenKind::Prompt, &line[..end]),
            ));
            curcode.push_str(&line[end..]);
            continue;
        }

        // Non-code line: flush accumulated code first.
        if !curcode.is_empty() || !insertions.is_empty() {
            flush(profile, code_start, &mut curcode, &mut insertions, &mut out);
        }

        if let Some(comment) = profile.comment() {
            if comment.is_match(line) {
                out.push(Token::new(line_start, TokenKind::Comment, line));
                continue;
            }
        }

        out.push(Token::new(line_start, TokenKind::Output, line));
    }

    if !curcode.is_empty() || !insertions.is_empty() {
        flush(profile, code_start, &mut curcode, &mut insertions, &mut out);
    }

    out
}

/// Match the prompt pattern at the start of a line, returning the end of
/// the matched marker. A zero-length match is legal: the prompt token is
/// empty and the whole line counts as code.
fn match_prompt(profile: &LanguageProfile, line: &str) -> Option<usize> {
    profile
        .prompt()
        .find(line)
        .filter(|m| m.start() == 0)
        .map(|m| m.end())
}

/// Delegate-tokenize the accumulated code, merge the recorded prompt
/// insertions back in, and append the re-based tokens to `out`.
fn flush(
    profile: &LanguageProfile,
    code_start: usize,
    curcode: &mut String,
    insertions: &mut Vec<(usize, Token)>,
    out: &mut Vec<Token>,
) {
    let delegated = profile.delegate().tokenize(curcode);
    out.extend(merge_insertions(
        code_start,
        std::mem::take(insertions),
        delegated,
    ));
    curcode.clear();
}

/// Split text into lines, each retaining its trailing newline. A final
/// chunk without a terminator is still yielded, so the lines always cover
/// the whole input.
fn lines_with_terminators(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    let mut offset = 0usize;
    text.split_inclusive('\n').map(move |line| {
        let start = offset;
        offset += line.len();
        (start, line)
    })
}
