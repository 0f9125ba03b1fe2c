//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (rejected
/// placements, failed lookups, malformed input). Infrastructure concerns
/// belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A placement was rejected: no reachable container has room.
    ///
    /// Recoverable — the caller may retry against a different target.
    /// The rejected attempt leaves no trace in the container tree.
    #[error("item \"{item}\" does not fit in container \"{container}\"")]
    CapacityExceeded { item: String, container: String },

    /// A name lookup yielded nothing (domain-level).
    #[error("\"{0}\" not found")]
    NotFound(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn capacity_exceeded(item: impl Into<String>, container: impl Into<String>) -> Self {
        Self::CapacityExceeded {
            item: item.into(),
            container: container.into(),
        }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_exceeded_names_item_and_container() {
        let err = DomainError::capacity_exceeded("Anvil", "Backpack");
        assert_eq!(
            err.to_string(),
            "item \"Anvil\" does not fit in container \"Backpack\""
        );
    }

    #[test]
    fn not_found_names_the_missing_entry() {
        let err = DomainError::not_found("Satchel");
        assert_eq!(err.to_string(), "\"Satchel\" not found");
    }
}
