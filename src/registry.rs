//! Delegate tokenizer registry
//!
//! Profiles refer to their delegate tokenizer by language key; this module
//! provides the explicit key → tokenizer table those keys are resolved
//! against. The registry is built once by the caller (or test harness) and
//! passed by reference; there is no ambient global lookup.

use std::collections::HashMap;

use crate::profile::DelegateTokenizer;
use crate::scanner::CodeScanner;

/// Registry of delegate tokenizers, keyed by language.
///
/// A missing key surfaces as a `ProfileError::UnknownDelegate` when a
/// profile is resolved, never during classification.
pub struct DelegateRegistry {
    delegates: HashMap<String, Box<dyn DelegateTokenizer>>,
}

impl DelegateRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        DelegateRegistry {
            delegates: HashMap::new(),
        }
    }

    /// Register a delegate tokenizer for a language key.
    ///
    /// If the key is already registered, the tokenizer is replaced. This is
    /// how a consumer swaps the built-in scanner for a real language lexer.
    pub fn register(&mut self, language: &str, delegate: Box<dyn DelegateTokenizer>) {
        self.delegates.insert(language.to_string(), delegate);
    }

    /// Get the delegate for a language key
    pub fn get(&self, language: &str) -> Option<&dyn DelegateTokenizer> {
        self.delegates.get(language).map(|d| d.as_ref())
    }

    /// Check whether a language key is registered
    pub fn has(&self, language: &str) -> bool {
        self.delegates.contains_key(language)
    }

    /// List all registered language keys (sorted)
    pub fn languages(&self) -> Vec<String> {
        let mut names: Vec<_> = self.delegates.keys().cloned().collect();
        names.sort();
        names
    }

    /// Create a registry with the built-in generic scanner registered for
    /// every language the profile table refers to, each with a small
    /// keyword list for that language.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for &(language, keywords) in DEFAULT_LANGUAGES {
            registry.register(language, Box::new(CodeScanner::new(keywords)));
        }
        registry
    }
}

impl Default for DelegateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Language keys the built-in profiles delegate to, with keyword lists for
/// the generic scanner. The Emacs Lisp profile reuses the `common-lisp`
/// entry, so there are eleven keys for twelve profiles.
const DEFAULT_LANGUAGES: &[(&str, &[&str])] = &[
    (
        "perl",
        &[
            "my", "our", "sub", "if", "elsif", "else", "unless", "while", "for", "foreach",
            "return", "use", "package", "print", "do", "last", "next",
        ],
    ),
    (
        "common-lisp",
        &[
            "defun", "defmacro", "defvar", "defparameter", "setq", "setf", "let", "lambda",
            "if", "cond", "progn", "quote", "list", "fset",
        ],
    ),
    (
        "scheme",
        &[
            "define", "lambda", "let", "if", "cond", "else", "begin", "quote", "set!", "car",
            "cdr", "cons",
        ],
    ),
    (
        "clojure",
        &[
            "def", "defn", "fn", "let", "if", "cond", "do", "loop", "recur", "quote", "ns",
            "nil", "true", "false",
        ],
    ),
    (
        "javascript",
        &[
            "var", "let", "const", "function", "if", "else", "for", "while", "return", "new",
            "this", "typeof", "null", "undefined", "true", "false",
        ],
    ),
    (
        "scala",
        &[
            "val", "var", "def", "class", "object", "trait", "if", "else", "for", "while",
            "match", "case", "new", "extends", "with", "import",
        ],
    ),
    (
        "haskell",
        &[
            "let", "in", "where", "do", "if", "then", "else", "case", "of", "data", "type",
            "class", "instance", "module", "import",
        ],
    ),
    (
        "ocaml",
        &[
            "let", "in", "fun", "function", "if", "then", "else", "match", "with", "type",
            "module", "open", "rec", "and",
        ],
    ),
    (
        "coffeescript",
        &[
            "if", "else", "unless", "for", "while", "then", "when", "return", "new", "class",
            "extends", "null", "true", "false", "or", "and", "not", "is", "isnt",
        ],
    ),
    (
        "livescript",
        &[
            "if", "else", "unless", "for", "while", "then", "when", "return", "new", "class",
            "extends", "null", "true", "false", "or", "and", "not", "is", "isnt",
        ],
    ),
    (
        "ruby",
        &[
            "def", "end", "if", "elsif", "else", "unless", "while", "until", "do", "class",
            "module", "return", "puts", "nil", "true", "false", "require",
        ],
    ),
];
