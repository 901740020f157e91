//! Help rendering and emission
//!
//! Pure rendering over a node's metadata: a describe block, a usage block,
//! and insertion-ordered listings of child commands and options with
//! width-aligned columns. Rendering has no effect on parsing semantics;
//! the matcher only calls in here when a help trigger intercepts the token
//! stream.

mod render;
mod templates;

pub use render::{command_help, option_help};

use crate::command::{CommandNode, OptionNode};

/// Render (if needed) and print a command's help to stdout.
pub fn print_command_help(cmd: &CommandNode, triggers: &[String]) {
    print!("{}", command_help(cmd, triggers));
}

/// Render (if needed) and print an option's help to stdout.
pub fn print_option_help(option: &OptionNode) {
    print!("{}", option_help(option));
}
