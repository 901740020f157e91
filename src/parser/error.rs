//! Parse and dispatch error types

use crate::command::NodeKind;

/// Opaque caller-defined error carried through executors and handlers.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Arity under-supply for a command or option. The Display text is the
    /// message printed when no error handler intercepts it.
    #[error("The {kind} [{name}] requires {expected} arguments to execute")]
    NeedMoreArguments {
        kind: NodeKind,
        name: String,
        expected: i32,
    },

    /// Help was rendered. A control-flow sentinel, not a true failure:
    /// callers typically map it to a zero exit code.
    #[error("help displayed")]
    Help,

    /// Passthrough of an executor or handler error.
    #[error(transparent)]
    Executor(BoxedError),
}

impl ParseError {
    /// Wrap an arbitrary caller error for return from an executor.
    pub fn executor(err: impl Into<BoxedError>) -> Self {
        Self::Executor(err.into())
    }

    /// True when this is the help sentinel rather than a real failure.
    pub fn is_help(&self) -> bool {
        matches!(self, Self::Help)
    }
}

/// Result type for parse and dispatch operations
pub type ParseResult<T> = Result<T, ParseError>;
