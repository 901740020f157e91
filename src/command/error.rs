//! Registration error types

use super::node::NodeKind;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// An intermediate path segment does not name an existing command.
    #[error("wrong path: [{parent}] has no command [{segment}]")]
    WrongPath { parent: String, segment: String },

    /// Strict mode only: a same-kind node with this name already exists.
    #[error("a {kind} named [{name}] is already registered under [{parent}]")]
    DuplicateNode {
        kind: NodeKind,
        name: String,
        parent: String,
    },

    /// Strict mode only: arity below -1.
    #[error("invalid arity {arity}: only -1 may be negative")]
    InvalidArity { arity: i32 },
}

/// Result type for registration operations
pub type RegistryResult<T> = Result<T, RegistryError>;
