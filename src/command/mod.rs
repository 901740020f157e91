//! Command/option tree: node model and registration
//!
//! A parser owns a rooted tree of [`CommandNode`]s, each with a name-keyed
//! map of child commands and a map of child options. Options are scoped to
//! the command they are registered under; they are only visible while that
//! command is the active one during matching.
//!
//! Registration walks the tree segment by segment: intermediates must name
//! existing commands, the final segment creates the new node. By default the
//! last registration for a name wins; strict mode turns duplicates and
//! invalid arities into errors.

mod error;
mod node;
mod registry;

pub use error::{RegistryError, RegistryResult};
pub use node::{
    CommandNode, ErrorHandler, Executor, NodeKind, NodeSpec, OptionNode, DEFAULT_OPTION_PRIORITY,
};

pub(crate) use registry::insert;
