//! A small command language driving named drawing turtles.
//!
//! Commands are read one line at a time, e.g. `turtle bob`, `move bob 10`,
//! `left bob 90`, `pen bob up`, `colour bob red` and `quit`. Each line is
//! tokenized, checked against the static [`command::COMMANDS`] table, its
//! arguments are converted by the [`args`] parsers and the result is applied
//! to the turtles kept in a [`registry::Registry`].
//!
//! The main entry point is [`Interpreter`]. It reports back through two
//! pluggable collaborators: a [`command::Canvas`] receiving line segments and a
//! [`command::Console`] receiving echoes, errors and the shutdown request.
//! Ready-made implementations live in [`io_adapters`].

pub mod args;
pub mod command;
pub mod error;
mod interpreter;
pub mod io_adapters;
pub mod logging;
pub mod parser;
pub mod registry;
pub mod turtle;

/// Just a convenient re-export of the line interpreter.
///
/// See [`Interpreter`] for the high-level API and examples.
pub use interpreter::Interpreter;
