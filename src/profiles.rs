//! Built-in console dialect definitions
//!
//! This module is pure configuration: one `ProfileDef` per supported REPL,
//! plus alias lookup. The classification algorithm lives in `classify`; the
//! only thing that varies per dialect is the prompt pattern, the comment
//! pattern, the delegate language key, and descriptive metadata.
//!
//! Pattern notes:
//! - Every pattern is anchored with `^` and matched against a single line
//!   (with its trailing newline still attached).
//! - The Haskell prompt (`^[0-9a-zA-Z .*]+>`) is deliberately loose: ghci
//!   prompts list the modules in scope, so the pattern accepts any short
//!   alphanumeric run ending in `>`. It will also accept some ordinary
//!   output lines. That is inherited behavior and kept as-is.
//! - The Ruby irb/pry profile has no comment pattern at all: `#` shows up
//!   routinely in idiomatic Ruby output and inspect strings, so every
//!   non-prompt line is plain output. Kept as-is, do not unify.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::profile::ProfileDef;

/// All built-in console dialects, in declaration order.
pub static PROFILES: &[ProfileDef] = &[
    // Perl interactive console (pirl, re.pl)
    ProfileDef {
        name: "Perl Console Session",
        aliases: &["pirl", "repl", "plcon"],
        filenames: &["*.pirl"],
        mimetypes: &["text/x-perl-shellsession"],
        delegate: "perl",
        prompt: r"^(?:pirl @> |\$ )",
        comment: Some(r"^\s*#"),
    },
    // Emacs Lisp console; delegates to the Common Lisp tokenizer
    ProfileDef {
        name: "EmacsLisp Console Session",
        aliases: &["clcon"],
        filenames: &["*.clcon"],
        mimetypes: &["text/x-emacslisp-shellsession"],
        delegate: "common-lisp",
        prompt: r"^(?:>>> |\.\.\. )",
        comment: Some(r"^\s*;"),
    },
    // Scheme console (gosh)
    ProfileDef {
        name: "Scheme Console Session",
        aliases: &["schemecon", "scmcon", "gosh"],
        filenames: &["*.schemecon"],
        mimetypes: &["text/x-scheme-shellsession"],
        delegate: "scheme",
        prompt: r"^(?:gosh(?::\d+)?> |\.\.\. )",
        comment: Some(r"^\s*;"),
    },
    // Clojure console: the prompt carries the current namespace
    ProfileDef {
        name: "Clojure Console Session",
        aliases: &["cljcon"],
        filenames: &["*.cljcon"],
        mimetypes: &["text/x-clojure-shellsession"],
        delegate: "clojure",
        prompt: r"^(?:[a-zA-Z0-9.\-]+=?>|\.\.\. )",
        comment: Some(r"^\s*;"),
    },
    // Common Lisp console; `. ` is the continuation prompt
    ProfileDef {
        name: "Common Lisp Console Session",
        aliases: &["cclcon"],
        filenames: &["*.cclcon"],
        mimetypes: &["text/x-common-lisp-shellsession"],
        delegate: "common-lisp",
        prompt: r"^(?:\?|\.) ",
        comment: Some(r"^\s*;"),
    },
    // JavaScript consoles (js shell, mongo, Firebug)
    ProfileDef {
        name: "Javascript Console Session",
        aliases: &["jscon", "mongo"],
        filenames: &["*.jscon"],
        mimetypes: &["text/x-javascript-shellsession"],
        delegate: "javascript",
        prompt: r"^(?:>|js>|>>>) ",
        comment: Some(r"^\s*//"),
    },
    // Scala console; `|` is the continuation marker
    ProfileDef {
        name: "Scala Console Session",
        aliases: &["scalacon"],
        filenames: &["*.scalacon"],
        mimetypes: &["text/x-scala-shellsession"],
        delegate: "scala",
        prompt: r"^(?:scala> |\s*\|)",
        comment: Some(r"^\s*//"),
    },
    // Haskell console (ghci, hugs); loose prompt, see module docs
    ProfileDef {
        name: "Haskell Console Session",
        aliases: &["haskellcon", "ghci", "hugs"],
        filenames: &["*.haskellcon"],
        mimetypes: &["text/x-haskell-shellsession"],
        delegate: "haskell",
        prompt: r"^[0-9a-zA-Z .*]+>",
        comment: Some(r"^\s*--"),
    },
    // OCaml toplevel
    ProfileDef {
        name: "OCaml Console Session",
        aliases: &["ocamlcon"],
        filenames: &["*.ocamlcon"],
        mimetypes: &["text/x-ocaml-shellsession"],
        delegate: "ocaml",
        prompt: r"^# ",
        comment: Some(r"^\s*\(\*.*\*\)"),
    },
    // CoffeeScript console
    ProfileDef {
        name: "CoffeeScript Console Session",
        aliases: &["coffee-con"],
        filenames: &["*.coffeecon"],
        mimetypes: &["text/x-coffeescript-shellsession"],
        delegate: "coffeescript",
        prompt: r"^coffee> ",
        comment: Some(r"^\s*#"),
    },
    // LiveScript console
    ProfileDef {
        name: "LiveScript Console Session",
        aliases: &["lscon"],
        filenames: &["*.lscon"],
        mimetypes: &["text/x-livescript-shellsession"],
        delegate: "livescript",
        prompt: r"^(?:ls> |\.\.\. )",
        comment: Some(r"^\s*#"),
    },
    // Ruby irb/pry session; no comment detection, see module docs
    ProfileDef {
        name: "Ruby irb, pry session",
        aliases: &["myirb", "pry", "rbcon"],
        filenames: &[],
        mimetypes: &["text/x-ruby-shellsession"],
        delegate: "ruby",
        prompt: concat!(
            r#"^(?:irb\([a-zA-Z_][a-zA-Z0-9_]*\):\d{3}:\d+[>*"'] "#,
            r"|(?:\[\d+\] )?pry [0-9.]+-p\d+(?: \([a-zA-Z_0-9]+\))?[>*] ",
            r"|irb> |pry> |>> |\?> )"
        ),
        comment: None,
    },
];

/// Alias → profile index, built once on first lookup.
static ALIAS_INDEX: Lazy<HashMap<&'static str, &'static ProfileDef>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for def in PROFILES {
        for alias in def.aliases {
            index.insert(*alias, def);
        }
    }
    index
});

/// All built-in profile definitions.
pub fn all() -> &'static [ProfileDef] {
    PROFILES
}

/// Look up a profile definition by alias (case-insensitive).
pub fn find(alias: &str) -> Option<&'static ProfileDef> {
    ALIAS_INDEX
        .get(alias.to_ascii_lowercase().as_str())
        .copied()
}
