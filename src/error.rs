use thiserror::Error;

/// Errors detected while tokenizing and validating a command line.
///
/// A `ParseError` is always raised before anything is executed, so a line that
/// fails to parse never touches the turtle registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The first word of the line is not a known command.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),
    /// Fewer arguments than the command expects.
    #[error("Too few arguments.")]
    TooFewArguments,
    /// More arguments than the command expects.
    #[error("Too many arguments.")]
    TooManyArguments,
    /// The token is not a number.
    #[error("'{0}' not a distance")]
    NotADistance(String),
    /// The token is a number, but zero, negative or NaN.
    #[error("'{0}' not a distance: Distance must be positive")]
    NonPositiveDistance(String),
    #[error("'{0}' not a valid angle")]
    NotAnAngle(String),
    #[error("'{0}' not a valid pen state")]
    NotAPenState(String),
    /// The token is not one of the palette names. `known` lists the palette in table order.
    #[error("'{token}' is not a valid colour. [Known colours: {known}]")]
    NotAColour { token: String, known: String },
    /// Bound arguments don't fit the operation they were bound to.
    #[error("Arguments do not match command '{0}'")]
    ArgumentMismatch(&'static str),
}

/// Errors raised while executing a well-formed command against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurtleError {
    #[error("Turtle '{0}' already exists")]
    AlreadyExists(String),
    #[error("Turtle '{0}' does not exist")]
    DoesNotExist(String),
}

/// Any failure a single command line can produce.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Turtle(#[from] TurtleError),
}

impl Error {
    /// True for malformed input (unknown command, bad arity, bad argument).
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// True for a valid command that referenced a missing or duplicate turtle.
    pub fn is_semantic(&self) -> bool {
        matches!(self, Error::Turtle(_))
    }
}
