//! cmdquest-glob: CMD-style wildcard patterns.
//!
//! Windows `dir`, `del`, `where` and friends accept two wildcards:
//!
//! - `*` matches any run of characters (including none)
//! - `?` matches exactly one character
//!
//! Everything else matches literally. A pattern is compiled once into an
//! anchored, case-insensitive [`regex::Regex`], so `*.txt` matches `a.txt`
//! and `A.TXT` but not `a.txtx`.
//!
//! ```
//! use cmdquest_glob::GlobPattern;
//!
//! let pat = GlobPattern::new("data?.txt").unwrap();
//! assert!(pat.is_match("DATA1.txt"));
//! assert!(!pat.is_match("data10.txt"));
//! ```

use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// Errors from compiling a wildcard pattern.
#[derive(Debug, Error)]
pub enum GlobError {
    #[error("invalid wildcard pattern '{pattern}': {source}")]
    Invalid {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A compiled wildcard pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    source: String,
    regex: Regex,
}

impl GlobPattern {
    /// Compile a wildcard pattern.
    pub fn new(pattern: &str) -> Result<Self, GlobError> {
        let regex = RegexBuilder::new(&glob_to_regex(pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| GlobError::Invalid {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Test a single name (not a path) against the pattern.
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// The pattern text as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

/// True if the text contains a wildcard character.
pub fn has_wildcards(text: &str) -> bool {
    text.contains(['*', '?'])
}

/// Translate a wildcard pattern into an anchored regex source string.
///
/// `*` becomes `.*`, `?` becomes `.`, and all other characters are escaped.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2 + 2);
    out.push('^');
    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        match ch {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            other => out.push_str(&regex::escape(other.encode_utf8(&mut buf))),
        }
    }
    out.push('$');
    out
}
