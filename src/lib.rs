//! # replscan
//!
//! Tokenizers for REPL console session transcripts.
//!
//! A transcript interleaves prompts, echoed source code and program output:
//!
//! ```text
//! gosh> (define x
//! ... 22)
//! 22
//! ; a comment
//! ```
//!
//! `classify` splits such text into typed spans (prompt markers, embedded
//! code re-tokenized by a per-language delegate, comments, plain output)
//! for a downstream syntax highlighter. One shared algorithm does
//! all the work; the twelve supported REPL dialects (Perl, Emacs Lisp,
//! Scheme, Clojure, Common Lisp, JavaScript, Scala, Haskell, OCaml,
//! CoffeeScript, LiveScript, Ruby) are pure configuration in `profiles`.
//!
//! Typical use:
//!
//! ```text
//! let registry = DelegateRegistry::with_defaults();
//! let profile = LanguageProfile::for_alias("gosh", &registry)?;
//! let tokens = classify(transcript, &profile);
//! ```

pub mod classify;
pub mod profile;
pub mod profiles;
pub mod registry;
pub mod scanner;
pub mod token;

pub use classify::classify;
pub use profile::{DelegateTokenizer, LanguageProfile, ProfileDef, ProfileError};
pub use registry::DelegateRegistry;
pub use scanner::CodeScanner;
pub use token::{Token, TokenKind};
