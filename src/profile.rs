//! Language profiles for console transcript classification
//!
//! A profile bundles everything the classifier needs to know about one REPL
//! dialect: how its prompt looks, how a full-line comment looks (if the
//! dialect has one), descriptive metadata for host tooling, and which
//! delegate tokenizer handles the accumulated code lines.
//!
//! Profiles come in two forms:
//! - `ProfileDef`: the static description (pattern strings plus a delegate
//!   language key). These live in the `profiles` table.
//! - `LanguageProfile`: a resolved, ready-to-use profile with compiled
//!   regexes and a live delegate handle. Resolution is the only fallible
//!   step; classification itself is total.

use std::fmt;

use regex::Regex;

use crate::registry::DelegateRegistry;
use crate::token::Token;

/// A language-specific code tokenizer the classifier delegates to.
///
/// Contract: offsets in the returned tokens are relative to `source`, and
/// concatenating the token texts in order reconstructs `source` exactly.
/// Delegates never fail; unrecognized input comes back as best-effort
/// `Error`/`Text` tokens.
pub trait DelegateTokenizer: Send + Sync {
    fn tokenize(&self, source: &str) -> Vec<Token>;
}

/// Static description of one console dialect.
///
/// The pattern fields hold regex source strings; they are compiled when the
/// definition is resolved against a delegate registry. All prompt and
/// comment patterns are anchored at line start with `^`.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDef {
    /// Human-readable name (e.g. "Scheme Console Session")
    pub name: &'static str,

    /// Short aliases a host formatting system selects the profile by
    pub aliases: &'static [&'static str],

    /// Associated file-name glob patterns
    pub filenames: &'static [&'static str],

    /// MIME type of transcripts in this dialect
    pub mimetypes: &'static [&'static str],

    /// Key of the delegate tokenizer in the `DelegateRegistry`
    pub delegate: &'static str,

    /// Prompt pattern, anchored at line start
    pub prompt: &'static str,

    /// Full-line comment pattern, anchored at line start.
    /// `None` means the dialect performs no comment detection at all
    /// (the Ruby irb/pry form).
    pub comment: Option<&'static str>,
}

/// Error raised while resolving a profile definition.
///
/// These are configuration errors reported at setup time; classification
/// has no failure modes of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// No profile declares the requested alias
    UnknownProfile(String),
    /// The profile's delegate language is not present in the registry
    UnknownDelegate { profile: String, delegate: String },
    /// A prompt or comment pattern failed to compile
    BadPattern { profile: String, error: String },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::UnknownProfile(alias) => {
                write!(f, "No console profile registered for alias '{alias}'")
            }
            ProfileError::UnknownDelegate { profile, delegate } => {
                write!(
                    f,
                    "Profile '{profile}' needs delegate tokenizer '{delegate}', which is not registered"
                )
            }
            ProfileError::BadPattern { profile, error } => {
                write!(f, "Profile '{profile}' has an invalid pattern: {error}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// A resolved console dialect profile, ready for classification.
///
/// Borrows its delegate from the registry it was resolved against; the
/// registry is expected to be built once at process start and outlive every
/// classification run.
impl std::fmt::Debug for LanguageProfile<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageProfile")
            .field("name", &self.name)
            .field("aliases", &self.aliases)
            .field("filenames", &self.filenames)
            .field("mimetypes", &self.mimetypes)
            .field("prompt", &self.prompt)
            .field("comment", &self.comment)
            .finish_non_exhaustive()
    }
}

pub struct LanguageProfile<'d> {
    /// Human-readable name
    pub name: &'static str,

    /// Short aliases
    pub aliases: &'static [&'static str],

    /// Associated file-name glob patterns
    pub filenames: &'static [&'static str],

    /// MIME type
    pub mimetypes: &'static [&'static str],

    prompt: Regex,
    comment: Option<Regex>,
    delegate: &'d dyn DelegateTokenizer,
}

impl<'d> LanguageProfile<'d> {
    /// Resolve a static definition against a delegate registry.
    ///
    /// Compiles the patterns and looks up the delegate tokenizer. This is
    /// where misconfiguration surfaces; a resolved profile cannot fail later.
    pub fn resolve(
        def: &ProfileDef,
        registry: &'d DelegateRegistry,
    ) -> Result<Self, ProfileError> {
        let delegate = registry
            .get(def.delegate)
            .ok_or_else(|| ProfileError::UnknownDelegate {
                profile: def.name.to_string(),
                delegate: def.delegate.to_string(),
            })?;

        let prompt = compile(def.name, def.prompt)?;
        let comment = match def.comment {
            Some(pattern) => Some(compile(def.name, pattern)?),
            None => None,
        };

        Ok(LanguageProfile {
            name: def.name,
            aliases: def.aliases,
            filenames: def.filenames,
            mimetypes: def.mimetypes,
            prompt,
            comment,
            delegate,
        })
    }

    /// Look up an alias in the built-in profile table and resolve it.
    pub fn for_alias(
        alias: &str,
        registry: &'d DelegateRegistry,
    ) -> Result<Self, ProfileError> {
        let def = crate::profiles::find(alias)
            .ok_or_else(|| ProfileError::UnknownProfile(alias.to_string()))?;
        Self::resolve(def, registry)
    }

    /// The compiled prompt pattern
    pub fn prompt(&self) -> &Regex {
        &self.prompt
    }

    /// The compiled comment pattern, if the dialect has one
    pub fn comment(&self) -> Option<&Regex> {
        self.comment.as_ref()
    }

    /// The delegate tokenizer for accumulated code
    pub fn delegate(&self) -> &dyn DelegateTokenizer {
        self.delegate
    }
}

fn compile(profile: &str, pattern: &str) -> Result<Regex, ProfileError> {
    Regex::new(pattern).map_err(|e| ProfileError::BadPattern {
        profile: profile.to_string(),
        error: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    struct Echo;

    impl DelegateTokenizer for Echo {
        fn tokenize(&self, source: &str) -> Vec<Token> {
            if source.is_empty() {
                vec![]
            } else {
                vec![Token::new(0, TokenKind::Text, source)]
            }
        }
    }

    fn test_def(delegate: &'static str) -> ProfileDef {
        ProfileDef {
            name: "Test Console",
            aliases: &["testcon"],
            filenames: &["*.testcon"],
            mimetypes: &["text/x-test-shellsession"],
            delegate,
            prompt: "^> ",
            comment: Some(r"^\s*#"),
        }
    }

    #[test]
    fn test_resolve_with_registered_delegate() {
        let mut registry = DelegateRegistry::new();
        registry.register("test", Box::new(Echo));

        let profile = LanguageProfile::resolve(&test_def("test"), &registry)
            .expect("delegate is registered");
        assert_eq!(profile.name, "Test Console");
        assert!(profile.prompt().is_match("> code"));
        assert!(profile.comment().is_some());
    }

    #[test]
    fn test_resolve_missing_delegate() {
        let registry = DelegateRegistry::new();
        let err = LanguageProfile::resolve(&test_def("nope"), &registry)
            .expect_err("delegate is not registered");
        assert_eq!(
            err,
            ProfileError::UnknownDelegate {
                profile: "Test Console".to_string(),
                delegate: "nope".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_bad_pattern() {
        let mut registry = DelegateRegistry::new();
        registry.register("test", Box::new(Echo));

        let mut def = test_def("test");
        def.prompt = "^(unclosed";
        let err = LanguageProfile::resolve(&def, &registry)
            .expect_err("pattern does not compile");
        assert!(matches!(err, ProfileError::BadPattern { .. }));
    }

    #[test]
    fn test_for_alias_unknown() {
        let registry = DelegateRegistry::new();
        let err = LanguageProfile::for_alias("no-such-console", &registry)
            .expect_err("alias is not declared");
        assert_eq!(
            err,
            ProfileError::UnknownProfile("no-such-console".to_string())
        );
    }
}
