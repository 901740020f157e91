//! Tree node model: commands, options, and the registration parameter bundle

use once_cell::unsync::OnceCell;
use std::collections::HashMap;
use std::fmt;

use crate::parser::error::ParseError;

/// Callback invoked with the matched token slice.
///
/// For commands, `args[0]` is the command name and the rest are its
/// positional arguments. For options, `args[0]` is the matched flag token
/// and the rest are its captured arguments.
pub type Executor = Box<dyn Fn(&[String]) -> Result<(), ParseError>>;

/// Callback invoked when an executor (or an arity check) fails.
///
/// The return value replaces the error: `Ok(())` means the error was
/// handled and dispatch reports success.
pub type ErrorHandler = Box<dyn Fn(ParseError) -> Result<(), ParseError>>;

/// Priority assigned to options that do not specify one.
pub const DEFAULT_OPTION_PRIORITY: i32 = 1000;

/// Which kind of node a registration creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum NodeKind {
    Command,
    Option,
}

/// Registration parameters for a command or option.
///
/// `priority` only affects options; commands ignore it. A non-empty `help`
/// pre-fills the node's help cache and suppresses generation entirely.
pub struct NodeSpec {
    /// Required argument count; `-1` consumes all remaining tokens.
    pub arity: i32,
    /// Execution ordering for options, higher first.
    pub priority: i32,
    pub describe: String,
    pub describe_brief: String,
    pub help: String,
    pub usage: String,
    pub executor: Option<Executor>,
    pub error_handler: Option<ErrorHandler>,
}

impl Default for NodeSpec {
    fn default() -> Self {
        Self {
            arity: 0,
            priority: DEFAULT_OPTION_PRIORITY,
            describe: String::new(),
            describe_brief: String::new(),
            help: String::new(),
            usage: String::new(),
            executor: None,
            error_handler: None,
        }
    }
}

/// A named sub-dispatchable action.
///
/// Commands own their child commands and options outright; the tree is
/// strict (no sharing between parents). `father` is a display label, the
/// space-joined path of ancestor names, and is never used for traversal.
pub struct CommandNode {
    pub(crate) order: usize,
    pub name: String,
    pub father: String,
    pub describe: String,
    pub describe_brief: String,
    pub usage: String,
    /// Required positional argument count; `-1` consumes all remaining tokens.
    pub size: i32,
    pub commands: HashMap<String, CommandNode>,
    pub options: HashMap<String, OptionNode>,
    pub executor: Option<Executor>,
    pub error_handler: Option<ErrorHandler>,
    pub(crate) help: OnceCell<String>,
}

impl CommandNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            order: 0,
            name: name.into(),
            father: String::new(),
            describe: String::new(),
            describe_brief: String::new(),
            usage: String::new(),
            size: 0,
            commands: HashMap::new(),
            options: HashMap::new(),
            executor: None,
            error_handler: None,
            help: OnceCell::new(),
        }
    }

    pub(crate) fn from_spec(name: &str, father: &str, order: usize, spec: NodeSpec) -> Self {
        let NodeSpec {
            arity,
            priority: _,
            describe,
            describe_brief,
            help,
            usage,
            executor,
            error_handler,
        } = spec;
        Self {
            order,
            name: name.to_string(),
            father: father.to_string(),
            describe,
            describe_brief,
            usage,
            size: arity,
            commands: HashMap::new(),
            options: HashMap::new(),
            executor,
            error_handler,
            help: prefilled(help),
        }
    }

    /// Display label: the father path followed by this node's name.
    pub fn full_name(&self) -> String {
        full_name(&self.father, &self.name)
    }

    /// Replace any cached or user-supplied help text.
    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = OnceCell::from(help.into());
    }
}

impl fmt::Debug for CommandNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandNode")
            .field("name", &self.name)
            .field("father", &self.father)
            .field("size", &self.size)
            .field("commands", &self.commands.keys().collect::<Vec<_>>())
            .field("options", &self.options.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

/// A flag scoped to the command subtree it is registered under.
pub struct OptionNode {
    pub(crate) order: usize,
    pub name: String,
    pub father: String,
    /// Required argument count; `-1` consumes all remaining tokens.
    pub size: i32,
    /// Execution ordering within the work queue, higher first.
    pub priority: i32,
    pub describe: String,
    pub describe_brief: String,
    pub usage: String,
    pub executor: Option<Executor>,
    pub error_handler: Option<ErrorHandler>,
    pub(crate) help: OnceCell<String>,
}

impl OptionNode {
    pub(crate) fn from_spec(name: &str, father: &str, order: usize, spec: NodeSpec) -> Self {
        let NodeSpec {
            arity,
            priority,
            describe,
            describe_brief,
            help,
            usage,
            executor,
            error_handler,
        } = spec;
        Self {
            order,
            name: name.to_string(),
            father: father.to_string(),
            size: arity,
            priority,
            describe,
            describe_brief,
            usage,
            executor,
            error_handler,
            help: prefilled(help),
        }
    }

    /// Display label: the father path followed by this option's name.
    pub fn full_name(&self) -> String {
        full_name(&self.father, &self.name)
    }

    /// Replace any cached or user-supplied help text.
    pub fn set_help(&mut self, help: impl Into<String>) {
        self.help = OnceCell::from(help.into());
    }
}

impl fmt::Debug for OptionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionNode")
            .field("name", &self.name)
            .field("father", &self.father)
            .field("size", &self.size)
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

fn full_name(father: &str, name: &str) -> String {
    if father.is_empty() {
        name.to_string()
    } else {
        format!("{} {}", father, name)
    }
}

fn prefilled(help: String) -> OnceCell<String> {
    let cell = OnceCell::new();
    if !help.is_empty() {
        let _ = cell.set(help);
    }
    cell
}
