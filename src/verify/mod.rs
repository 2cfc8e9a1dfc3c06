//! Validation of candidate checksum and tag values.

pub mod preflight;
pub mod rules;

pub use preflight::{ValidatedUpdates, validate_updates};
pub use rules::{Rejection, validate, validate_checksum, validate_tag};
