//! Token matching over the command/option tree
//!
//! A single pass over the argument vector with a shrinking slice cursor
//! (no self-recursion, so long argument lists cannot exhaust the stack).
//! At each step the first matching rule wins:
//!
//! 1. child command — descend, resetting the queue and positional args
//! 2. child option — capture its arguments and enqueue it
//! 3. help trigger — render help and stop with the `Help` sentinel
//! 4. bundled single-character flags (combination mode)
//! 5. positional argument for the active command

use crate::command::{CommandNode, NodeKind, OptionNode};
use crate::help;
use crate::parser::error::{ParseError, ParseResult};
use crate::parser::session::Session;
use crate::parser::{CombinationMode, Parser};

pub(crate) fn run<'a>(
    parser: &'a Parser,
    session: &mut Session<'a>,
    tokens: &[String],
) -> ParseResult<()> {
    let mut rest = tokens;
    while let Some(first) = rest.first() {
        let cur = session.command;

        if let Some(child) = cur.commands.get(first) {
            log::trace!("descending into command [{}]", child.full_name());
            session.begin_command(child);
            rest = &rest[1..];
            continue;
        }

        if let Some(option) = cur.options.get(first) {
            match consume_option(session, option, rest)? {
                Some(consumed) => {
                    rest = &rest[consumed..];
                    continue;
                }
                // consume-rest or a best-effort capture ended the walk
                None => return Ok(()),
            }
        }

        if parser.is_help_trigger(first) {
            return intercept_help(parser, cur, rest);
        }

        if let Some(resolved) = resolve_combination(cur, first, parser.combination()) {
            for (option, flag) in resolved {
                log::trace!("enqueueing bundled option [{}]", flag);
                session.queue.add_option(option, vec![flag]);
            }
            rest = &rest[1..];
            continue;
        }

        session.command_args.push(first.clone());
        rest = &rest[1..];
    }
    Ok(())
}

/// Capture a matched option's arguments and enqueue it.
///
/// Returns the number of tokens consumed, or `None` when the walk must stop:
/// a negative arity captures everything that remains (flag included), and an
/// under-supplied option with an error handler captures best-effort before
/// ending the walk. An under-supplied option without a handler fails the
/// parse after printing the templated message.
fn consume_option<'a>(
    session: &mut Session<'a>,
    option: &'a OptionNode,
    rest: &[String],
) -> ParseResult<Option<usize>> {
    if option.size < 0 {
        log::trace!(
            "option [{}] consumes the remaining {} tokens",
            option.name,
            rest.len()
        );
        session.queue.add_option(option, rest.to_vec());
        return Ok(None);
    }

    let needed = 1 + option.size as usize;
    if rest.len() < needed {
        let err = ParseError::NeedMoreArguments {
            kind: NodeKind::Option,
            name: format!("{} {}", option.father, option.name),
            expected: option.size,
        };
        let Some(handler) = &option.error_handler else {
            eprintln!("{err}");
            return Err(err);
        };
        handler(err)?;
        session.queue.add_option(option, rest.to_vec());
        return Ok(None);
    }

    session.queue.add_option(option, rest[..needed].to_vec());
    Ok(Some(needed))
}

/// Rule 3: a help trigger diverts to help rendering. A following token that
/// names a child command or option selects that child's help; anything else
/// selects the current node's own.
fn intercept_help(parser: &Parser, cur: &CommandNode, rest: &[String]) -> ParseResult<()> {
    if let Some(target) = rest.get(1) {
        if let Some(child) = cur.commands.get(target) {
            log::debug!("help requested for command [{}]", child.full_name());
            help::print_command_help(child, parser.help_triggers());
            return Err(ParseError::Help);
        }
        if let Some(option) = cur.options.get(target) {
            log::debug!("help requested for option [{}]", option.full_name());
            help::print_option_help(option);
            return Err(ParseError::Help);
        }
    }
    log::debug!("help requested for command [{}]", cur.full_name());
    help::print_command_help(cur, parser.help_triggers());
    Err(ParseError::Help)
}

/// Rule 4: resolve a bundled token into zero-arity options, all-or-nothing.
///
/// In `Prefixed` mode a leading prefix character is skipped and each
/// remaining character is looked up re-prefixed; in `Bare` mode characters
/// are looked up as-is. A token with no characters to resolve (empty, or
/// exactly the prefix) resolves vacuously: it is consumed without enqueueing
/// anything.
fn resolve_combination<'a>(
    cur: &'a CommandNode,
    token: &str,
    mode: CombinationMode,
) -> Option<Vec<(&'a OptionNode, String)>> {
    let prefix = match mode {
        CombinationMode::Disabled => return None,
        CombinationMode::Prefixed(c) => Some(c),
        CombinationMode::Bare => None,
    };

    let mut resolved = Vec::new();
    for (idx, ch) in token.chars().enumerate() {
        if idx == 0 && prefix == Some(ch) {
            continue;
        }
        let flag = match prefix {
            Some(c) => format!("{}{}", c, ch),
            None => ch.to_string(),
        };
        match cur.options.get(&flag) {
            Some(option) if option.size == 0 => resolved.push((option, flag)),
            _ => return None,
        }
    }
    Some(resolved)
}
