use crate::args::Arg;
use crate::command::{Canvas, Console, Invocation, Operation};
use crate::error::{Error, ParseError};
use crate::parser;
use crate::registry::Registry;
use anyhow::Context;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use tracing::{debug, info, warn};

/// Line-by-line interpreter of turtle commands.
///
/// The interpreter owns the turtle [`Registry`] and the collaborators it reports
/// to: a [`Canvas`] for draw events and a [`Console`] for echoes, errors and the
/// shutdown request. Every line is handled on its own: it either succeeds
/// completely or reports exactly one error and changes nothing.
///
/// Example
/// ```
/// use turtle_commands::Interpreter;
/// use turtle_commands::io_adapters::{Feedback, MemCanvas, MemConsole};
///
/// let (canvas, segments) = MemCanvas::with_handle();
/// let (console, feedback) = MemConsole::with_handle();
/// let mut interp = Interpreter::new(Box::new(canvas), Box::new(console));
///
/// interp.process_line("turtle t", None);
/// interp.process_line("move t 10", None);
/// assert_eq!(segments.borrow().len(), 1);
/// assert_eq!(feedback.borrow()[1], Feedback::Echo("move t 10".to_string()));
/// ```
pub struct Interpreter {
    registry: Registry,
    canvas: Box<dyn Canvas>,
    console: Box<dyn Console>,
    should_exit: bool,
}

impl Interpreter {
    /// Create an interpreter with an empty registry.
    pub fn new(canvas: Box<dyn Canvas>, console: Box<dyn Console>) -> Self {
        Self {
            registry: Registry::new(),
            canvas,
            console,
            should_exit: false,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// True once `quit` has been executed.
    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Parse and execute one command line.
    ///
    /// Success echoes the trimmed line. Failure reports one error message, prefixed
    /// with `Line <n>` when `line_number` is known and with the quoted line otherwise.
    /// Blank lines are ignored.
    pub fn process_line(&mut self, line: &str, line_number: Option<usize>) {
        let line = line.trim();
        match self.try_line(line) {
            Ok(true) => self.console.echo(line),
            Ok(false) => {}
            Err(e) => {
                debug!(line, error = %e, "command failed");
                let prefix = match line_number {
                    Some(n) => format!("Line {}", n),
                    None => format!("'{}'", line),
                };
                self.console.error(&format!("{} : {}", prefix, e));
            }
        }
    }

    /// Returns whether a command was executed.
    fn try_line(&mut self, line: &str) -> Result<bool, Error> {
        match parser::parse_line(line)? {
            Some(invocation) => {
                self.execute(invocation)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Apply a parsed command to the registry.
    ///
    /// A draw event is forwarded to the canvas, `quit` is forwarded to the console.
    pub fn execute(&mut self, invocation: Invocation) -> Result<(), Error> {
        let reg = &mut self.registry;
        match (invocation.operation, invocation.args.as_slice()) {
            (Operation::Turtle, [Arg::Name(name)]) => reg.create(name)?,
            (Operation::Move, [Arg::Name(name), Arg::Distance(d)]) => {
                if let Some(segment) = reg.move_forward(name, *d)? {
                    self.canvas
                        .draw_line(segment.from, segment.to, segment.colour);
                }
            }
            (Operation::Left, [Arg::Name(name), Arg::Degrees(a)]) => reg.turn_left(name, *a)?,
            (Operation::Right, [Arg::Name(name), Arg::Degrees(a)]) => reg.turn_right(name, *a)?,
            (Operation::Pen, [Arg::Name(name), Arg::PenState(down)]) => reg.set_pen(name, *down)?,
            (Operation::Colour, [Arg::Name(name), Arg::Colour(c)]) => reg.set_colour(name, *c)?,
            (Operation::Quit, []) => {
                info!("quit");
                self.should_exit = true;
                self.console.request_shutdown();
            }
            _ => return Err(ParseError::ArgumentMismatch(invocation.command).into()),
        }
        Ok(())
    }

    /// Execute every line of a command file, numbering lines from 1.
    ///
    /// A file that can't be opened is reported on the console and skipped.
    /// Stops early if the file runs `quit`.
    pub fn run_file(&mut self, path: &Path) {
        let shown = path.display().to_string();
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!(path = %shown, error = %e, "cannot open command file");
                let msg = if e.kind() == ErrorKind::NotFound {
                    format!("No such file '{}'", shown)
                } else {
                    format!("Could not read '{}': {}", shown, e)
                };
                self.console.error(&msg);
                return;
            }
        };

        self.console.echo(&format!("Reading file: '{}'", shown));
        if let Err(e) = self.run_lines(BufReader::new(file)) {
            warn!(path = %shown, error = %e, "command file read failed");
            self.console
                .error(&format!("Could not read '{}': {}", shown, e));
        }
    }

    /// Lines that aren't valid UTF-8 are decoded lossily; only an I/O error ends the file.
    fn run_lines(&mut self, mut reader: impl BufRead) -> std::io::Result<()> {
        let mut buf = Vec::new();
        let mut line_number = 0;
        while !self.should_exit {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;
            let line = String::from_utf8_lossy(&buf);
            self.process_line(&line, Some(line_number));
        }
        Ok(())
    }

    /// Run files in order, as if they were one long file.
    pub fn run_files<P: AsRef<Path>>(&mut self, paths: &[P]) {
        for path in paths {
            if self.should_exit {
                break;
            }
            self.run_file(path.as_ref());
        }
    }

    /// Read commands interactively until `quit`, Ctrl-C or end of input.
    pub fn repl(&mut self) -> anyhow::Result<()> {
        let mut rl = DefaultEditor::new().context("cannot start line editor")?;

        while !self.should_exit {
            match rl.readline("turtle> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = rl.add_history_entry(line.as_str()) {
                            warn!(error = %e, "cannot record history");
                        }
                    }
                    self.process_line(&line, None);
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                    info!("input closed");
                    break;
                }
                Err(err) => return Err(err).context("reading command"),
            }
        }

        Ok(())
    }
}
