//! Insertion merge for flushed code buffers
//!
//! During accumulation the classifier strips prompt markers out of the code
//! lines, so the delegate tokenizer sees pure source code. Each stripped
//! prompt is recorded as an insertion: `(offset within the code buffer,
//! prompt token)`. This module weaves those insertions back into the
//! delegate's token stream and re-bases everything to absolute offsets in
//! the original input.
//!
//! Absolute positions are tracked with a running cursor (`realpos`) that
//! advances by the length of every emitted text, inserted prompts included.
//! That is exactly how the original transcript was laid out: prompt, then
//! the code that followed it, then the next prompt, and so on.

use crate::token::Token;

/// Merge recorded prompt insertions into a delegate token stream.
///
/// `base` is the absolute offset at which the code buffer began in the
/// original input. `insertions` offsets are relative to the code buffer and
/// must be non-decreasing; `tokens` are the delegate's output, covering the
/// code buffer contiguously from offset 0.
///
/// Ordering: an insertion at offset `k` is emitted before any delegate
/// token starting at `k` (a prompt always precedes the code that follows it
/// on the same logical line). An insertion falling strictly inside a
/// delegate token splits that token at the insertion point; both halves
/// keep the delegate's category.
pub fn merge_insertions(
    base: usize,
    insertions: Vec<(usize, Token)>,
    tokens: Vec<Token>,
) -> Vec<Token> {
    let mut merged = Vec::with_capacity(tokens.len() + insertions.len());
    let mut pending = insertions.into_iter().peekable();
    let mut realpos = base;

    for token in tokens {
        let text = token.text;
        let mut oldi = 0usize;

        // Emit every insertion that lands at or before the end of this
        // token, splitting the token text around the insertion points.
        while let Some(&(index, _)) = pending.peek() {
            if index > token.offset + text.len() {
                break;
            }
            let cut = index.saturating_sub(token.offset);
            if cut > oldi {
                merged.push(Token::new(realpos, token.kind, &text[oldi..cut]));
                realpos += cut - oldi;
                oldi = cut;
            }
            if let Some((_, prompt)) = pending.next() {
                let len = prompt.text.len();
                merged.push(Token {
                    offset: realpos,
                    ..prompt
                });
                realpos += len;
            }
        }

        if oldi < text.len() {
            merged.push(Token::new(realpos, token.kind, &text[oldi..]));
            realpos += text.len() - oldi;
        }
    }

    // Insertions past the end of the delegate stream (including the case of
    // an empty code buffer) are emitted at the cursor position.
    for (_, prompt) in pending {
        let len = prompt.text.len();
        merged.push(Token {
            offset: realpos,
            ..prompt
        });
        realpos += len;
    }

    merged
}
