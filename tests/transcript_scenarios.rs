//! Scenario tests for the transcript classifier
//!
//! Each test runs a small, hand-checked transcript through a built-in
//! profile with the default delegate registry and verifies the shape of the
//! resulting token stream. Assertions on delegated code check the covered
//! text rather than individual scanner tokens, so they stay valid if the
//! built-in scanner is swapped for a richer delegate.

use replscan::{classify, profiles, DelegateRegistry, LanguageProfile, Token, TokenKind};

fn profile<'d>(alias: &str, registry: &'d DelegateRegistry) -> LanguageProfile<'d> {
    LanguageProfile::for_alias(alias, registry).expect("built-in alias resolves")
}

fn concat(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

fn assert_tiles(input: &str, tokens: &[Token]) {
    assert_eq!(concat(tokens), input, "tokens must reconstruct the input");
    let mut pos = 0usize;
    for token in tokens {
        assert_eq!(token.offset, pos, "bad offset in {:?}", token);
        pos = token.end();
    }
    assert_eq!(pos, input.len());
}

fn is_code_kind(kind: TokenKind) -> bool {
    !matches!(
        kind,
        TokenKind::Prompt | TokenKind::Output | TokenKind::Comment
    )
}

#[test]
fn prompt_code_then_output() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("clcon", &registry);

    let input = ">>> (setq x 200)\n200\n";
    let tokens = classify(input, &profile);
    assert_tiles(input, &tokens);

    assert_eq!(tokens[0], Token::new(0, TokenKind::Prompt, ">>> "));

    let last = tokens.last().expect("stream is non-empty");
    assert_eq!(*last, Token::new(17, TokenKind::Output, "200\n"));

    let code = &tokens[1..tokens.len() - 1];
    assert_eq!(concat(code), "(setq x 200)\n");
    assert!(code.iter().all(|t| is_code_kind(t.kind)));

    // `setq` is on the Common Lisp keyword list of the default scanner
    assert!(code
        .iter()
        .any(|t| t.kind == TokenKind::Keyword && t.text == "setq"));
}

#[test]
fn continuation_prompts_flush_as_one_buffer() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("gosh", &registry);

    let input = "gosh> (define x\n... 22) ;comment\n";
    let tokens = classify(input, &profile);
    assert_tiles(input, &tokens);

    let prompts: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Prompt)
        .collect();
    assert_eq!(prompts.len(), 2);
    assert_eq!(*prompts[0], Token::new(0, TokenKind::Prompt, "gosh> "));
    assert_eq!(*prompts[1], Token::new(16, TokenKind::Prompt, "... "));

    // The trailing `;comment` sits inside an accumulated code line, so it
    // must NOT come out as a Comment token.
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Output));
}

#[test]
fn lone_comment_line() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("clcon", &registry);

    let tokens = classify("; comment\n", &profile);
    assert_eq!(
        tokens,
        vec![Token::new(0, TokenKind::Comment, "; comment\n")]
    );
}

#[test]
fn ruby_hash_line_is_output_not_comment() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("pry", &registry);

    let input = "irb(main):001:0> a = 1\n# not a comment\n";
    let tokens = classify(input, &profile);
    assert_tiles(input, &tokens);

    assert_eq!(
        tokens[0],
        Token::new(0, TokenKind::Prompt, "irb(main):001:0> ")
    );
    let last = tokens.last().expect("stream is non-empty");
    assert_eq!(last.kind, TokenKind::Output);
    assert_eq!(last.text, "# not a comment\n");
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Comment));
}

#[test]
fn empty_input_for_every_profile() {
    let registry = DelegateRegistry::with_defaults();
    for def in profiles::all() {
        let profile = LanguageProfile::resolve(def, &registry).expect("built-in def resolves");
        assert_eq!(classify("", &profile), vec![], "{}", def.name);
    }
}

#[test]
fn binary_like_input_degrades_to_output_lines() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("ocamlcon", &registry);

    let input = "\u{0000}\u{0001}garbage\nmore \u{fffd} garbage\n";
    let tokens = classify(input, &profile);
    assert_tiles(input, &tokens);
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Output));
}

#[test]
fn code_at_end_of_input_is_flushed() {
    let registry = DelegateRegistry::with_defaults();
    let profile = profile("jscon", &registry);

    let input = "js> o['a']\n2\njs> o.b\n";
    let tokens = classify(input, &profile);
    assert_tiles(input, &tokens);

    let prompts: Vec<_> = tokens
        .iter()
        .filter(|t| t.kind == TokenKind::Prompt)
        .collect();
    assert_eq!(prompts.len(), 2);
    assert_eq!(prompts[1].text, "js> ");

    // The `2` line between the two code spans is plain output
    assert!(tokens
        .iter()
        .any(|t| t.kind == TokenKind::Output && t.text == "2\n"));
}
