//! Rewriting of `let NAME = "VALUE"` declarations.
//!
//! The manifest is treated as opaque text. A name-scoped regex locates the
//! first declaration of each requested field and only the quoted value span
//! is replaced; the keyword, whitespace, name, `=`, and quotes are kept
//! byte-for-byte.
//!
//! ```text
//! let checksum = "abc123"     // matched, value span is `abc123`
//! let  tag="v0.1.0"           // matched, any whitespace layout
//! let url = "...\(tag)..."    // untouched
//! ```
//!
//! Values are quote-delimited and escapes are not understood, so a value
//! containing `"` cannot be matched or written correctly.

use crate::error::Result;
use crate::field::Field;
use crate::verify::ValidatedUpdates;
use regex::Regex;
use std::ops::Range;

/// Compiled pattern for a single declaration name.
#[derive(Debug, Clone)]
pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    /// Compiles the pattern for `name`. The name is matched literally.
    pub fn new(name: &str) -> Result<Self> {
        let pattern = format!(r#"\blet\s+{}\s*=\s*"([^"]*)""#, regex::escape(name));
        log::debug!("Compiled declaration pattern: {}", pattern);

        Ok(Self {
            regex: Regex::new(&pattern)?,
        })
    }

    /// Byte range of the quoted value in the leftmost matching declaration.
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        self.regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.range())
    }
}

/// Result of patching one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The declaration was found and its value replaced (possibly with the
    /// same value).
    Changed { old: String, new: String },
    /// No declaration for the field exists in the manifest.
    NotFound,
}

/// Patched manifest text plus one outcome per requested field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub text: String,
    pub outcomes: Vec<(Field, Outcome)>,
}

impl PatchReport {
    /// Outcome recorded for `field`, if it was requested.
    pub fn outcome(&self, field: Field) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, o)| o)
    }

    /// Fields whose declaration was found and rewritten.
    pub fn changed(&self) -> impl Iterator<Item = Field> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Changed { .. }))
            .map(|(f, _)| *f)
    }

    /// Returns true if patching left the text as it was: every requested
    /// field was either missing or already set to the new value.
    pub fn is_noop(&self) -> bool {
        self.outcomes.iter().all(|(_, o)| match o {
            Outcome::Changed { old, new } => old == new,
            Outcome::NotFound => true,
        })
    }

    /// Fields with no declaration in the manifest.
    pub fn not_found(&self) -> impl Iterator<Item = Field> + '_ {
        self.outcomes
            .iter()
            .filter(|(_, o)| *o == Outcome::NotFound)
            .map(|(f, _)| *f)
    }
}

/// Applies validated updates to manifest text.
///
/// Fields are processed in order against the progressively updated text.
/// Only the first declaration of each name is rewritten; later duplicates are
/// left as they are. A missing declaration is recorded as
/// [`Outcome::NotFound`] and does not fail the patch.
pub fn patch(text: &str, updates: &ValidatedUpdates) -> Result<PatchReport> {
    let mut result = text.to_string();
    debug_assert!(!updates.is_empty(), "validation yields at least one update");
    let mut outcomes = Vec::with_capacity(updates.len());

    for (field, new_value) in updates.iter() {
        let pattern = DeclarationPattern::new(field.as_str())?;

        let outcome = match pattern.find(&result) {
            Some(span) => {
                let old = result[span.clone()].to_string();
                log::debug!(
                    "Found {} at bytes {}..{}: '{}'",
                    field,
                    span.start,
                    span.end,
                    old
                );
                result.replace_range(span, new_value);
                Outcome::Changed {
                    old,
                    new: new_value.to_string(),
                }
            }
            None => {
                log::debug!("No declaration found for '{}'", field);
                Outcome::NotFound
            }
        };

        outcomes.push((field, outcome));
    }

    Ok(PatchReport {
        text: result,
        outcomes,
    })
}
