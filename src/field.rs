//! Declaration names recognized in the manifest.

use std::fmt;

/// A manifest declaration that can be updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `let checksum = "..."`
    Checksum,
    /// `let tag = "..."`
    Tag,
}

impl Field {
    /// All fields, in the order they are validated and patched.
    pub const ALL: [Field; 2] = [Field::Checksum, Field::Tag];

    /// Identifier used in the `let NAME = "VALUE"` declaration.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Checksum => "checksum",
            Field::Tag => "tag",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
