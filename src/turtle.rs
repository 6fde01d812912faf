use std::fmt;

/// A position on the drawing surface.
///
/// Screen coordinates: x grows to the right, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pen colours a turtle can draw with.
///
/// The palette is closed; adding a colour means adding a variant here and to [`Colour::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Colour {
    Red,
    Green,
    #[default]
    Blue,
    Black,
}

impl Colour {
    /// Every colour, in the order they are listed to the user.
    pub const ALL: [Colour; 4] = [Colour::Red, Colour::Green, Colour::Blue, Colour::Black];

    /// Name used in the command language.
    pub fn name(self) -> &'static str {
        match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
            Colour::Black => "black",
        }
    }

    /// Exact, case-sensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Colour> {
        Colour::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Comma separated list of all colour names, e.g. for error messages.
    pub fn known_names() -> String {
        Colour::ALL
            .iter()
            .map(|c| c.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One drawable agent.
///
/// `heading` is in radians in a left-handed system: a growing angle turns towards
/// growing y. It is never normalised, so it may grow without bound.
#[derive(Debug, Clone, PartialEq)]
pub struct Turtle {
    pub heading: f64,
    pub position: Point,
    pub pen_down: bool,
    pub colour: Colour,
}

impl Turtle {
    /// Heading of a fresh turtle: north on screen.
    pub const INITIAL_HEADING_DEGREES: f64 = -90.0;

    /// A turtle at the origin facing north, pen down, drawing in blue.
    pub fn new() -> Self {
        Self {
            heading: Self::INITIAL_HEADING_DEGREES.to_radians(),
            position: Point::ORIGIN,
            pen_down: true,
            colour: Colour::default(),
        }
    }

    /// Point reached by going `distance` along the current heading.
    pub fn ahead(&self, distance: f64) -> Point {
        let (sin, cos) = self.heading.sin_cos();
        Point::new(
            self.position.x + distance * cos,
            self.position.y + distance * sin,
        )
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

/// A line to be drawn, produced by a move with the pen down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
    pub colour: Colour,
}
