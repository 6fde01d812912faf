//! Argument parsers: one function per argument type of the command language.
//!
//! Each parser turns a single token into a typed [`Arg`], independent of the
//! command it belongs to and of the turtle registry.

use crate::error::ParseError;
use crate::turtle::Colour;

/// A validated command argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Name(String),
    /// Always strictly positive.
    Distance(f64),
    Degrees(f64),
    /// `true` means pen down.
    PenState(bool),
    Colour(Colour),
}

/// Signature shared by all argument parsers.
pub type ArgParser = fn(&str) -> Result<Arg, ParseError>;

/// Turtle name. Existence is checked by the registry, not here.
pub fn name(s: &str) -> Result<Arg, ParseError> {
    Ok(Arg::Name(s.to_string()))
}

/// Strictly positive number.
pub fn distance(s: &str) -> Result<Arg, ParseError> {
    let d: f64 = s
        .parse()
        .map_err(|_| ParseError::NotADistance(s.to_string()))?;
    // also rejects NaN
    if !(d > 0.0) {
        return Err(ParseError::NonPositiveDistance(s.to_string()));
    }
    Ok(Arg::Distance(d))
}

/// Any number, in degrees.
pub fn degrees(s: &str) -> Result<Arg, ParseError> {
    s.parse()
        .map(Arg::Degrees)
        .map_err(|_| ParseError::NotAnAngle(s.to_string()))
}

/// `up` or `down`.
pub fn pen_state(s: &str) -> Result<Arg, ParseError> {
    match s {
        "up" => Ok(Arg::PenState(false)),
        "down" => Ok(Arg::PenState(true)),
        _ => Err(ParseError::NotAPenState(s.to_string())),
    }
}

/// One of the palette colour names.
pub fn colour(s: &str) -> Result<Arg, ParseError> {
    Colour::from_name(s)
        .map(Arg::Colour)
        .ok_or_else(|| ParseError::NotAColour {
            token: s.to_string(),
            known: Colour::known_names(),
        })
}
