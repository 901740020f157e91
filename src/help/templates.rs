//! Help text line and section formatting
//!
//! Column widths are display widths of the widest sibling name, computed at
//! render time; padding is done by hand so double-width names still align.

use unicode_width::UnicodeWidthStr;

pub(crate) fn pad_right(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(pad))
}

fn pad_left(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width());
    format!("{}{}", " ".repeat(pad), text)
}

/// Full name, with the describe text indented below unless it is blank
/// (only spaces and newlines).
pub(crate) fn describe_block(full_name: &str, describe: &str) -> String {
    if describe.chars().all(|c| c == ' ' || c == '\n') {
        full_name.to_string()
    } else {
        format!("{}\n\n    {}", full_name, describe)
    }
}

/// Self-usage line for a node with an executor and no options.
pub(crate) fn usage_self(full_name: &str, usage: &str) -> String {
    format!("        {} {}", full_name, usage)
}

pub(crate) fn usage_command(full_name: &str) -> String {
    format!("        {} <command> [arguments]\n", full_name)
}

pub(crate) fn usage_option(full_name: &str) -> String {
    format!("        {} <option>  [arguments]\n", full_name)
}

pub(crate) fn usage_head(lines: &str) -> String {
    format!("Usage:\n\n{}", lines)
}

/// One command listing line: name column, then the brief describe.
pub(crate) fn line_command(name: &str, brief: &str, width: usize) -> String {
    format!("        {}  {}\n", pad_right(name, width), brief)
}

/// One option listing entry: name and usage, then the brief describe
/// indented on its own line.
pub(crate) fn line_option(name: &str, usage: &str, brief: &str, width: usize) -> String {
    format!(
        "        {}  {}\n        {}    {}\n",
        pad_right(name, width),
        usage,
        pad_left(" ", width),
        brief,
    )
}

pub(crate) fn section_commands(lines: &str, full_name: &str, triggers: &str) -> String {
    format!(
        "\nThe commands are:\n\n{}\nUse \"{} {} <command>\" for more information about a command.\n",
        lines, full_name, triggers,
    )
}

pub(crate) fn section_options(lines: &str, full_name: &str, triggers: &str) -> String {
    format!(
        "\nThe options are:\n\n{}\nUse \"{} {} <option>\" for more information about a option.\n",
        lines, full_name, triggers,
    )
}

/// Standalone help for a single option.
pub(crate) fn option_usage(full_usage: &str, describe: &str) -> String {
    format!("\nUsage: {}\n\n{}\n", full_usage, describe)
}

pub(crate) fn help_body(describe: &str, usage: &str, commands: &str, options: &str) -> String {
    format!("\n{}\n\n{}{}{}\n", describe, usage, commands, options)
}
