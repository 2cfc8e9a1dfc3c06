//! Validation phase run before the manifest is touched.
//!
//! Produces a [`ValidatedUpdates`] that the rewrite step consumes. Nothing in
//! here performs I/O, so a rejected value never reaches the file system.

use crate::error::{BumpError, Result};
use crate::field::Field;
use crate::verify::rules::validate;

/// Values that passed validation, in processing order.
///
/// Only [`validate_updates`] can build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedUpdates {
    entries: Vec<(Field, String)>,
}

impl ValidatedUpdates {
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(f, v)| (*f, v.as_str()))
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Validates the caller's candidates.
///
/// # Errors
///
/// - `NothingToDo` if both candidates are absent
/// - `InvalidChecksum` / `InvalidTag` for the first rejected value; the
///   checksum is checked before the tag
pub fn validate_updates(checksum: Option<&str>, tag: Option<&str>) -> Result<ValidatedUpdates> {
    if checksum.is_none() && tag.is_none() {
        return Err(BumpError::NothingToDo);
    }

    let mut entries = Vec::with_capacity(Field::ALL.len());

    for field in Field::ALL {
        let candidate = match field {
            Field::Checksum => checksum,
            Field::Tag => tag,
        };
        let Some(value) = candidate else {
            continue;
        };

        if let Err(reason) = validate(field, value) {
            log::debug!("Rejected {} '{}': {}", field, value, reason);
            return Err(match field {
                Field::Checksum => BumpError::InvalidChecksum(value.to_string(), reason),
                Field::Tag => BumpError::InvalidTag(value.to_string(), reason),
            });
        }

        entries.push((field, value.to_string()));
    }

    Ok(ValidatedUpdates { entries })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::Rejection;

    #[test]
    fn test_nothing_to_do() {
        assert!(matches!(
            validate_updates(None, None),
            Err(BumpError::NothingToDo)
        ));
    }

    #[test]
    fn test_single_value() {
        let updates = validate_updates(None, Some("v2.0.0")).unwrap();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates.get(Field::Tag), Some("v2.0.0"));
        assert_eq!(updates.get(Field::Checksum), None);
    }

    #[test]
    fn test_both_values_in_order() {
        let updates = validate_updates(Some("abc123"), Some("1.0.0")).unwrap();
        let fields: Vec<_> = updates.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec![Field::Checksum, Field::Tag]);
    }

    #[test]
    fn test_checksum_failure_reported_first() {
        let err = validate_updates(Some("DEADBEEF"), Some("not a tag")).unwrap_err();
        assert!(matches!(
            err,
            BumpError::InvalidChecksum(ref v, Rejection::NotLowercase) if v == "DEADBEEF"
        ));
    }

    #[test]
    fn test_tag_failure_after_valid_checksum() {
        let err = validate_updates(Some("abc123"), Some("1.2")).unwrap_err();
        assert!(matches!(err, BumpError::InvalidTag(ref v, Rejection::MalformedTag) if v == "1.2"));
    }

    #[test]
    fn test_empty_values_are_present_not_absent() {
        let err = validate_updates(Some(""), None).unwrap_err();
        assert!(matches!(
            err,
            BumpError::InvalidChecksum(_, Rejection::NotAlphanumeric)
        ));
    }
}
