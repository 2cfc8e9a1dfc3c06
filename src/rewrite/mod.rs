//! Text rewriting of manifest declarations.

pub mod declaration;

pub use declaration::{DeclarationPattern, Outcome, PatchReport, patch};
