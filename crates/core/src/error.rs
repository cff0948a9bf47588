// Error types for argument handling

use crate::types::ParamKind;

/// Reasons a tool's arguments cannot be turned into a query
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    #[error("arguments must be a JSON object, got {found}")]
    NotAnObject { found: &'static str },

    #[error("missing required parameter '{key}'")]
    MissingRequired { key: &'static str },

    #[error("parameter '{key}' must be {expected}, got {found}")]
    KindMismatch {
        key: &'static str,
        expected: ParamKind,
        found: &'static str,
    },
}
