//! Value construction error types

use thiserror::Error;

use super::TypeTag;

/// Errors raised while building typed containers
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// Sequence element does not conform to the declared element type
    #[error("element {index} has type {found}, expected {declared}")]
    NonConformingElement {
        index: usize,
        declared: TypeTag,
        found: TypeTag,
    },

    /// Mapping value does not conform to the declared value type
    #[error("value for key '{key}' has type {found}, expected {declared}")]
    NonConformingEntry {
        key: String,
        declared: TypeTag,
        found: TypeTag,
    },

    /// Key given twice while building a mapping
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),
}

/// Result type for value construction
pub type ValueResult<T> = Result<T, ValueError>;
