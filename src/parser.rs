use crate::command::{self, Invocation};
use crate::error::ParseError;
use std::cmp::Ordering;

/// Parse one command line into an [`Invocation`].
///
/// The line is split on whitespace. The first word selects a command from
/// [`command::COMMANDS`], the remaining words are fed to its argument parsers
/// left to right. The argument count is checked before any argument is parsed,
/// and the first argument that fails to parse aborts the whole line.
///
/// Returns `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Invocation>, ParseError> {
    let mut words = line.split_whitespace();
    let Some(name) = words.next() else {
        return Ok(None);
    };
    let raw_args: Vec<&str> = words.collect();

    let spec = command::lookup(name)
        .ok_or_else(|| ParseError::UnknownCommand(name.to_string()))?;

    match raw_args.len().cmp(&spec.arity()) {
        Ordering::Less => return Err(ParseError::TooFewArguments),
        Ordering::Greater => return Err(ParseError::TooManyArguments),
        Ordering::Equal => {}
    }

    let args = spec
        .parsers
        .iter()
        .zip(raw_args)
        .map(|(parse, raw)| parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(Invocation {
        command: spec.name,
        operation: spec.operation,
        args,
    }))
}
