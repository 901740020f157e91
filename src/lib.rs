//! argtree — command/option tree parser and dispatcher
//!
//! Programs register a rooted tree of named commands and options, each with
//! an arity (required argument count), a priority, an executor callback and
//! an optional error handler. Parsing a flat argument vector walks that
//! tree: command tokens descend, option tokens capture their arguments into
//! a work queue, everything else accumulates as positional arguments of the
//! active command. After matching, queued options execute in descending
//! priority order, then the active command's executor runs. Help text is
//! generated lazily from the registered tree and cached per node.
//!
//! # Example
//!
//! ```
//! use argtree::{NodeSpec, Parser};
//!
//! let mut parser = Parser::new("app");
//! parser.add_help_trigger("help");
//! parser.register_command(
//!     &["build"],
//!     NodeSpec {
//!         arity: 1,
//!         describe_brief: "build a target".into(),
//!         usage: "[target]".into(),
//!         executor: Some(Box::new(|args| {
//!             println!("building {}", args[1]);
//!             Ok(())
//!         })),
//!         ..NodeSpec::default()
//!     },
//! )?;
//! parser.parse(&["build".to_string(), "core".to_string()])?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod command;
pub mod help;
pub mod parser;
pub mod queue;

pub use command::{
    CommandNode, ErrorHandler, Executor, NodeKind, NodeSpec, OptionNode, RegistryError,
    RegistryResult, DEFAULT_OPTION_PRIORITY,
};
pub use parser::error::{BoxedError, ParseError, ParseResult};
pub use parser::{CombinationMode, Parser};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
