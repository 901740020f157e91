//! Parser: registration surface, matching, and dispatch
//!
//! [`Parser`] is the caller-owned session object: it holds the command
//! tree's root, the help-trigger set, the combination mode, and the
//! strictness flag. All per-parse mutable state (work queue, active
//! command, accumulated positionals) lives in an internal session struct
//! created inside [`Parser::parse`], so a parser can run any number of
//! sequential parses and independent parsers never interfere.
//!
//! Dispatch order: match the token vector against the tree, check the
//! resolved command's arity, execute queued options by descending priority,
//! then run the command's own executor.

pub mod error;
mod matcher;
mod session;


use crate::command::{self, CommandNode, NodeKind, NodeSpec, RegistryResult};
use crate::help;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::session::Session;

/// How a token of concatenated single-character flags is resolved during
/// matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CombinationMode {
    /// Bundled tokens are never resolved (the default).
    #[default]
    Disabled,
    /// Skip one leading prefix character, then resolve each character of
    /// the token as `<prefix><char>`.
    Prefixed(char),
    /// Resolve each character of the token as a bare single-character name.
    Bare,
}

/// Command-line parser and dispatcher over a registered command/option tree.
pub struct Parser {
    root: CommandNode,
    help_triggers: Vec<String>,
    combination: CombinationMode,
    strict: bool,
    next_order: usize,
}

impl Parser {
    /// Create a parser whose root command carries the program name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: CommandNode::new(name),
            help_triggers: Vec::new(),
            combination: CombinationMode::Disabled,
            strict: false,
            next_order: 1,
        }
    }

    pub fn root(&self) -> &CommandNode {
        &self.root
    }

    /// Mutable access to the root command, e.g. to set its describe text,
    /// arity, or executor.
    pub fn root_mut(&mut self) -> &mut CommandNode {
        &mut self.root
    }

    /// Reject duplicate registrations and arities below -1. Off by default:
    /// the default behavior is last-registration-wins and negative arities
    /// alias to consume-rest.
    pub fn set_strict(&mut self, strict: bool) {
        self.strict = strict;
    }

    /// Set how bundled single-character flag tokens are resolved.
    pub fn enable_option_combination(&mut self, mode: CombinationMode) {
        self.combination = mode;
    }

    pub(crate) fn combination(&self) -> CombinationMode {
        self.combination
    }

    /// Register a token that diverts matching to help rendering.
    pub fn add_help_trigger(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !self.help_triggers.contains(&token) {
            self.help_triggers.push(token);
        }
    }

    pub(crate) fn help_triggers(&self) -> &[String] {
        &self.help_triggers
    }

    pub(crate) fn is_help_trigger(&self, token: &str) -> bool {
        self.help_triggers.iter().any(|t| t == token)
    }

    /// Register a command at `path`; intermediate segments must already
    /// exist as commands.
    pub fn register_command(&mut self, path: &[&str], spec: NodeSpec) -> RegistryResult<()> {
        self.register(NodeKind::Command, path, spec)
    }

    /// Register an option at `path`; intermediate segments must already
    /// exist as commands.
    pub fn register_option(&mut self, path: &[&str], spec: NodeSpec) -> RegistryResult<()> {
        self.register(NodeKind::Option, path, spec)
    }

    /// Register a node of either kind at `path`.
    pub fn register(
        &mut self,
        kind: NodeKind,
        path: &[&str],
        spec: NodeSpec,
    ) -> RegistryResult<()> {
        let order = self.next_order;
        command::insert(&mut self.root, self.strict, order, kind, path, spec)?;
        self.next_order += 1;
        Ok(())
    }

    /// Parse a token vector (conventionally the process argument vector
    /// minus the program name) and dispatch the result.
    pub fn parse(&self, tokens: &[String]) -> ParseResult<()> {
        let mut session = Session::new(&self.root);
        matcher::run(self, &mut session, tokens)?;

        let Session {
            mut queue,
            command,
            command_args,
        } = session;

        if command.size != -1 && command_args.len() as i64 != i64::from(command.size) + 1 {
            let err = ParseError::NeedMoreArguments {
                kind: NodeKind::Command,
                name: command.name.clone(),
                expected: command.size,
            };
            let Some(handler) = &command.error_handler else {
                eprintln!("{err}");
                return Err(err);
            };
            // the handler's result is the overall result; the queue and the
            // command executor are skipped either way
            return handler(err);
        }

        queue.sort_by_priority();
        queue.execute()?;

        let Some(executor) = &command.executor else {
            return Ok(());
        };
        log::debug!(
            "dispatching command [{}] with {} positional arguments",
            command.full_name(),
            command_args.len() - 1
        );
        if let Err(err) = executor(&command_args) {
            if let Some(handler) = &command.error_handler {
                return handler(err);
            }
            return Err(err);
        }
        Ok(())
    }

    /// Parse the process argument vector, skipping the program name.
    pub fn parse_from_env(&self) -> ParseResult<()> {
        let tokens: Vec<String> = std::env::args().skip(1).collect();
        self.parse(&tokens)
    }

    /// Render (lazily, memoized) and return the root command's help text.
    pub fn help_text(&self) -> &str {
        help::command_help(&self.root, &self.help_triggers)
    }

    /// Render (if needed) and print the root command's help to stdout.
    pub fn print_help(&self) {
        help::print_command_help(&self.root, &self.help_triggers);
    }
}
