//! Structural task validation.

use std::collections::HashSet;

use super::types::OptionRecord;
use crate::error::EvaluateError;

/// Rejects tasks in which two options share a name.
///
/// Option identity is the name; a repeated name makes the ranking
/// ambiguous, so the whole evaluation is aborted.
pub fn ensure_unique_names(options: &[OptionRecord]) -> Result<(), EvaluateError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.name.as_str()) {
            return Err(EvaluateError::DuplicateOption(option.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_ok() {
        let options = vec![OptionRecord::new("A"), OptionRecord::new("B")];
        assert!(ensure_unique_names(&options).is_ok());
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let options = vec![
            OptionRecord::new("A"),
            OptionRecord::new("B"),
            OptionRecord::new("A"),
        ];
        let err = ensure_unique_names(&options).unwrap_err();
        assert_eq!(err, EvaluateError::DuplicateOption("A".into()));
    }

    #[test]
    fn test_empty_is_ok() {
        assert!(ensure_unique_names(&[]).is_ok());
    }
}
