//! Work Queue Component
//!
//! An ordered list of matched option invocations awaiting execution. The
//! matcher appends entries as it consumes tokens; the dispatcher sorts the
//! queue by descending priority and executes it before the terminal
//! command's executor runs.
//!
//! Execution is fail-fast: the first executor error is given to that entry's
//! error handler (if any) and its return value becomes the queue's result;
//! remaining entries are not executed either way. Entries without an
//! executor are skipped.
//!
//! Priority ties sort in unspecified relative order; callers must not rely
//! on tie stability.

use crate::command::{ErrorHandler, Executor, OptionNode};
use crate::parser::error::ParseError;

/// A pending option invocation: consumed exactly once during dispatch.
pub struct WorkItem<'a> {
    pub priority: i32,
    pub executor: Option<&'a Executor>,
    pub error_handler: Option<&'a ErrorHandler>,
    /// Captured token slice: the flag itself followed by its arguments.
    pub args: Vec<String>,
}

/// Ordered list of pending option invocations.
#[derive(Default)]
pub struct WorkQueue<'a> {
    items: Vec<WorkItem<'a>>,
}

impl<'a> WorkQueue<'a> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an entry taken from a matched option node.
    pub fn add_option(&mut self, option: &'a OptionNode, args: Vec<String>) {
        self.add(
            option.priority,
            option.executor.as_ref(),
            option.error_handler.as_ref(),
            args,
        );
    }

    /// Append an entry.
    pub fn add(
        &mut self,
        priority: i32,
        executor: Option<&'a Executor>,
        error_handler: Option<&'a ErrorHandler>,
        args: Vec<String>,
    ) {
        self.items.push(WorkItem {
            priority,
            executor,
            error_handler,
            args,
        });
    }

    /// Drop all pending entries. Called when the active command changes.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Order entries by descending priority. Ties keep an unspecified
    /// relative order.
    pub fn sort_by_priority(&mut self) {
        self.items
            .sort_unstable_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Execute all entries in order, consuming the queue.
    pub fn execute(self) -> Result<(), ParseError> {
        log::trace!("executing {} queued option entries", self.items.len());
        for item in self.items {
            let Some(executor) = item.executor else {
                continue;
            };
            if let Err(err) = executor(&item.args) {
                return match item.error_handler {
                    Some(handler) => handler(err),
                    None => Err(err),
                };
            }
        }
        Ok(())
    }
}
