//! Per-parse mutable state
//!
//! A `Session` lives for exactly one `Parser::parse` call: the work queue,
//! the active command, and the positional arguments accumulated for it.
//! Every command descent resets all three.

use crate::command::CommandNode;
use crate::queue::WorkQueue;

pub(crate) struct Session<'a> {
    pub queue: WorkQueue<'a>,
    pub command: &'a CommandNode,
    pub command_args: Vec<String>,
}

impl<'a> Session<'a> {
    pub fn new(root: &'a CommandNode) -> Self {
        Self {
            queue: WorkQueue::new(),
            command: root,
            command_args: vec![root.name.clone()],
        }
    }

    /// Switch the active command: pending queue entries belong to the old
    /// command's scope and are dropped.
    pub fn begin_command(&mut self, command: &'a CommandNode) {
        self.queue.clear();
        self.command = command;
        self.command_args.clear();
        self.command_args.push(command.name.clone());
    }
}
