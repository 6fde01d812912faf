use crate::args::{self, Arg, ArgParser};
use crate::turtle::{Colour, Point};

/// Operations the turtle engine knows how to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Turtle,
    Move,
    Left,
    Right,
    Pen,
    Colour,
    Quit,
}

/// One entry of the command table: a command name, the operation it runs and
/// the parsers for its arguments, in order.
#[derive(Debug)]
pub struct CommandSpec {
    pub name: &'static str,
    pub operation: Operation,
    pub parsers: &'static [ArgParser],
}

impl CommandSpec {
    pub fn arity(&self) -> usize {
        self.parsers.len()
    }
}

/// The whole command language.
///
/// To add a command, add an [`Operation`], teach the interpreter to execute it and
/// list it here with its argument parsers.
pub static COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "turtle",
        operation: Operation::Turtle,
        parsers: &[args::name],
    },
    CommandSpec {
        name: "move",
        operation: Operation::Move,
        parsers: &[args::name, args::distance],
    },
    CommandSpec {
        name: "left",
        operation: Operation::Left,
        parsers: &[args::name, args::degrees],
    },
    CommandSpec {
        name: "right",
        operation: Operation::Right,
        parsers: &[args::name, args::degrees],
    },
    CommandSpec {
        name: "pen",
        operation: Operation::Pen,
        parsers: &[args::name, args::pen_state],
    },
    CommandSpec {
        name: "colour",
        operation: Operation::Colour,
        parsers: &[args::name, args::colour],
    },
    CommandSpec {
        name: "quit",
        operation: Operation::Quit,
        parsers: &[],
    },
];

/// Find a command by its exact name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// A parsed command with its typed arguments, ready to execute.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub command: &'static str,
    pub operation: Operation,
    pub args: Vec<Arg>,
}

/// Receives line segments to draw.
pub trait Canvas {
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour);
}

/// Receives user feedback and the shutdown request.
pub trait Console {
    /// A command succeeded; `text` is the trimmed command line.
    fn echo(&mut self, text: &str);

    /// A command failed; `text` is the already formatted message.
    fn error(&mut self, text: &str);

    /// `quit` was executed.
    fn request_shutdown(&mut self) {}
}
