//! Input validation for list and todo names.
//!
//! These are pure functions, run by handlers before any mutating store
//! operation. Handlers trim leading and trailing whitespace before
//! calling in; the validators assume already-trimmed input and only
//! measure what they are given.

use crate::types::TodoList;
use thiserror::Error;

/// Inclusive bounds for list and todo names, in characters.
pub const NAME_MIN: usize = 1;
/// Upper bound for list and todo names, in characters.
pub const NAME_MAX: usize = 100;

/// A user-facing validation failure.
///
/// The display strings are shown verbatim in the error flash, so they
/// are written as complete sentences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// List name length outside [1, 100].
    #[error("List name must be between 1 and 100 characters.")]
    ListNameLength,

    /// List name exactly matches an existing list's name.
    #[error("List name must be unique.")]
    ListNameTaken,

    /// Todo name length outside [1, 100].
    #[error("Todo must be between 1 and 100 characters.")]
    TodoNameLength,
}

/// Validates a new or replacement list name against the current set of
/// lists.
///
/// The uniqueness check is an exact, case-sensitive comparison against
/// the snapshot passed in; two concurrent creators can both pass it.
/// That race is accepted; the database's unique constraint is the
/// backstop.
///
/// # Errors
///
/// Returns [`ValidationError::ListNameLength`] or
/// [`ValidationError::ListNameTaken`].
pub fn validate_list_name(name: &str, existing: &[TodoList]) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(ValidationError::ListNameLength);
    }
    if existing.iter().any(|list| list.name == name) {
        return Err(ValidationError::ListNameTaken);
    }
    Ok(())
}

/// Validates a todo name.
///
/// # Errors
///
/// Returns [`ValidationError::TodoNameLength`] when the length is
/// outside [1, 100].
pub fn validate_todo_name(name: &str) -> Result<(), ValidationError> {
    let len = name.chars().count();
    if !(NAME_MIN..=NAME_MAX).contains(&len) {
        return Err(ValidationError::TodoNameLength);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ListId, TodoList};

    fn lists(names: &[&str]) -> Vec<TodoList> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| TodoList {
                id: ListId::new(i as i64 + 1),
                name: (*name).to_string(),
                todos: Vec::new(),
            })
            .collect()
    }

    #[test]
    fn empty_list_name_is_rejected() {
        assert_eq!(
            validate_list_name("", &[]),
            Err(ValidationError::ListNameLength)
        );
    }

    #[test]
    fn hundred_char_name_is_accepted() {
        let name = "a".repeat(100);
        assert_eq!(validate_list_name(&name, &[]), Ok(()));
    }

    #[test]
    fn over_long_name_is_rejected() {
        let name = "a".repeat(101);
        assert_eq!(
            validate_list_name(&name, &[]),
            Err(ValidationError::ListNameLength)
        );
        assert_eq!(
            validate_todo_name(&name),
            Err(ValidationError::TodoNameLength)
        );
    }

    #[test]
    fn single_char_name_is_accepted() {
        assert_eq!(validate_list_name("a", &[]), Ok(()));
        assert_eq!(validate_todo_name("a"), Ok(()));
    }

    #[test]
    fn duplicate_name_is_rejected_exact_match_only() {
        let existing = lists(&["Groceries", "Chores"]);
        assert_eq!(
            validate_list_name("Groceries", &existing),
            Err(ValidationError::ListNameTaken)
        );
        // Different case and whitespace variants are different names.
        assert_eq!(validate_list_name("groceries", &existing), Ok(()));
        assert_eq!(validate_list_name("Groceries ", &existing), Ok(()));
    }

    #[test]
    fn todo_name_has_no_uniqueness_rule() {
        assert_eq!(validate_todo_name("Milk"), Ok(()));
        assert_eq!(validate_todo_name(""), Err(ValidationError::TodoNameLength));
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 multi-byte characters is still within bounds.
        let name = "ü".repeat(100);
        assert_eq!(validate_list_name(&name, &[]), Ok(()));
    }
}
