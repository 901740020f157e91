//! Lazy, memoized help generation for tree nodes
//!
//! Help text is rendered at most once per node and cached; user-supplied
//! help set at registration occupies the cache up front and is returned
//! verbatim. Command generation first ensures all children are rendered
//! (depth-first, sibling order irrelevant) so that later `help <child>`
//! lookups hit the cache.

use unicode_width::UnicodeWidthStr;

use super::templates;
use crate::command::{CommandNode, OptionNode};

/// Render (if needed) and return a command's help text.
///
/// With no registered help triggers the "Use ... for more information"
/// footers cannot be rendered, so generation is skipped entirely and only
/// user-supplied text is returned.
pub fn command_help<'a>(cmd: &'a CommandNode, triggers: &[String]) -> &'a str {
    if triggers.is_empty() {
        return cmd.help.get().map(String::as_str).unwrap_or("");
    }
    if let Some(help) = cmd.help.get() {
        return help;
    }
    for child in cmd.commands.values() {
        command_help(child, triggers);
    }
    for option in cmd.options.values() {
        option_help(option);
    }
    cmd.help.get_or_init(|| render_command(cmd, triggers))
}

/// Render (if needed) and return an option's help text.
pub fn option_help(option: &OptionNode) -> &str {
    option.help.get_or_init(|| {
        let full = option.full_name();
        templates::option_usage(&format!("{} {}", full, option.usage), &option.describe)
    })
}

fn render_command(cmd: &CommandNode, triggers: &[String]) -> String {
    let full = cmd.full_name();
    let describe = templates::describe_block(&full, &cmd.describe);

    let mut usage_self = String::new();
    let mut usage_command = String::new();
    let mut usage_option = String::new();
    let mut list_commands = false;
    let mut list_options = false;
    if cmd.executor.is_some() {
        if !cmd.options.is_empty() {
            usage_option = templates::usage_option(&full);
            list_options = true;
        } else {
            usage_self = templates::usage_self(&full, &cmd.usage);
        }
    }
    if !cmd.commands.is_empty() {
        usage_command = templates::usage_command(&full);
        list_commands = true;
    }
    let usage = templates::usage_head(&format!(
        "{}{}{}",
        usage_self, usage_command, usage_option
    ));

    let trigger_names = triggers.join("/");

    let commands = if list_commands {
        let width = cmd
            .commands
            .values()
            .map(|c| c.name.as_str().width())
            .max()
            .unwrap_or(0);
        let mut lines: Vec<(usize, String)> = cmd
            .commands
            .values()
            .map(|c| {
                (
                    c.order,
                    templates::line_command(&c.name, &c.describe_brief, width),
                )
            })
            .collect();
        lines.sort_by_key(|(order, _)| *order);
        let body: String = lines.into_iter().map(|(_, line)| line).collect();
        templates::section_commands(&body, &full, &trigger_names)
    } else {
        String::new()
    };

    let options = if list_options {
        let width = cmd
            .options
            .values()
            .map(|o| o.name.as_str().width())
            .max()
            .unwrap_or(0);
        let mut lines: Vec<(usize, String)> = cmd
            .options
            .values()
            .map(|o| {
                (
                    o.order,
                    templates::line_option(&o.name, &o.usage, &o.describe_brief, width),
                )
            })
            .collect();
        lines.sort_by_key(|(order, _)| *order);
        let body: String = lines.into_iter().map(|(_, line)| line).collect();
        templates::section_options(&body, &full, &trigger_names)
    } else {
        String::new()
    };

    templates::help_body(&describe, &usage, &commands, &options)
}
