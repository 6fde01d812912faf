use crate::error::TurtleError;
use crate::turtle::{Colour, Segment, Turtle};
use std::collections::BTreeMap;
use tracing::debug;

/// Owner of every turtle, keyed by name.
///
/// Names are case-sensitive and unique. Every operation except [`Registry::create`]
/// needs an existing turtle and fails with [`TurtleError::DoesNotExist`] otherwise.
/// A failing operation leaves the registry untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Registry {
    turtles: BTreeMap<String, Turtle>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fresh turtle called `name`.
    pub fn create(&mut self, name: &str) -> Result<(), TurtleError> {
        if self.turtles.contains_key(name) {
            return Err(TurtleError::AlreadyExists(name.to_string()));
        }
        debug!(turtle = name, "created");
        self.turtles.insert(name.to_string(), Turtle::new());
        Ok(())
    }

    /// Turn counter-clockwise on screen by `degrees`.
    pub fn turn_left(&mut self, name: &str, degrees: f64) -> Result<(), TurtleError> {
        let turtle = self.get_mut(name)?;
        turtle.heading -= degrees.to_radians();
        debug!(turtle = name, heading = turtle.heading, "turned left");
        Ok(())
    }

    /// Turn clockwise on screen by `degrees`.
    pub fn turn_right(&mut self, name: &str, degrees: f64) -> Result<(), TurtleError> {
        let turtle = self.get_mut(name)?;
        turtle.heading += degrees.to_radians();
        debug!(turtle = name, heading = turtle.heading, "turned right");
        Ok(())
    }

    /// Move `distance` along the heading.
    ///
    /// Returns the segment to draw when the pen is down. The position changes either way.
    pub fn move_forward(
        &mut self,
        name: &str,
        distance: f64,
    ) -> Result<Option<Segment>, TurtleError> {
        let turtle = self.get_mut(name)?;
        let from = turtle.position;
        let to = turtle.ahead(distance);
        turtle.position = to;
        debug!(turtle = name, %from, %to, pen_down = turtle.pen_down, "moved");

        Ok(turtle.pen_down.then_some(Segment {
            from,
            to,
            colour: turtle.colour,
        }))
    }

    pub fn set_pen(&mut self, name: &str, down: bool) -> Result<(), TurtleError> {
        self.get_mut(name)?.pen_down = down;
        debug!(turtle = name, down, "pen");
        Ok(())
    }

    pub fn set_colour(&mut self, name: &str, colour: Colour) -> Result<(), TurtleError> {
        self.get_mut(name)?.colour = colour;
        debug!(turtle = name, %colour, "colour");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Turtle> {
        self.turtles.get(name)
    }

    pub fn len(&self) -> usize {
        self.turtles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turtles.is_empty()
    }

    /// Turtles in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Turtle)> {
        self.turtles.iter().map(|(name, t)| (name.as_str(), t))
    }

    fn get_mut(&mut self, name: &str) -> Result<&mut Turtle, TurtleError> {
        self.turtles
            .get_mut(name)
            .ok_or_else(|| TurtleError::DoesNotExist(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::turtle::Point;

    const EPS: f64 = 1e-9;

    fn assert_point(actual: Point, x: f64, y: f64) {
        assert!(
            (actual.x - x).abs() < EPS && (actual.y - y).abs() < EPS,
            "expected ({}, {}), got {}",
            x,
            y,
            actual
        );
    }

    #[test]
    fn test_create_twice_fails_with_name() {
        let mut reg = Registry::new();
        assert_eq!(reg.create("a"), Ok(()));
        assert_eq!(
            reg.create("a"),
            Err(TurtleError::AlreadyExists("a".to_string()))
        );
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut reg = Registry::new();
        reg.create("a").unwrap();
        reg.create("A").unwrap();
        assert_eq!(reg.iter().map(|(n, _)| n).collect::<Vec<_>>(), vec!["A", "a"]);
    }

    #[test]
    fn test_left_on_empty_registry_fails_and_stays_empty() {
        let mut reg = Registry::new();
        assert_eq!(
            reg.turn_left("missing", 10.0),
            Err(TurtleError::DoesNotExist("missing".to_string()))
        );
        assert!(reg.is_empty());
    }

    #[test]
    fn test_every_lookup_operation_reports_missing_turtle() {
        let mut reg = Registry::new();
        let missing = Err(TurtleError::DoesNotExist("x".to_string()));
        assert_eq!(reg.turn_right("x", 1.0), missing);
        assert_eq!(reg.set_pen("x", false), missing);
        assert_eq!(reg.set_colour("x", Colour::Red), missing);
        assert_eq!(
            reg.move_forward("x", 1.0),
            Err(TurtleError::DoesNotExist("x".to_string()))
        );
    }

    #[test]
    fn test_move_with_pen_down_returns_segment() {
        let mut reg = Registry::new();
        reg.create("t").unwrap();
        reg.turn_right("t", 30.0).unwrap();
        let heading = reg.get("t").unwrap().heading;

        let segment = reg.move_forward("t", 7.5).unwrap().expect("pen is down");
        assert_point(segment.from, 0.0, 0.0);
        assert_point(segment.to, 7.5 * heading.cos(), 7.5 * heading.sin());
        assert_eq!(segment.colour, Colour::Blue);
        assert_eq!(reg.get("t").unwrap().position, segment.to);
    }

    #[test]
    fn test_move_with_pen_up_still_moves() {
        let mut reg = Registry::new();
        reg.create("t").unwrap();
        reg.set_pen("t", false).unwrap();
        assert_eq!(reg.move_forward("t", 3.0).unwrap(), None);
        assert_point(reg.get("t").unwrap().position, 0.0, -3.0);
    }

    #[test]
    fn test_segment_uses_current_colour() {
        let mut reg = Registry::new();
        reg.create("t").unwrap();
        reg.set_colour("t", Colour::Green).unwrap();
        let segment = reg.move_forward("t", 1.0).unwrap().unwrap();
        assert_eq!(segment.colour, Colour::Green);
    }

    #[test]
    fn test_heading_is_not_normalised() {
        let mut reg = Registry::new();
        reg.create("t").unwrap();
        for _ in 0..4 {
            reg.turn_right("t", 360.0).unwrap();
        }
        let heading = reg.get("t").unwrap().heading;
        let expected = (-90.0f64).to_radians() + 4.0 * 360.0f64.to_radians();
        assert!((heading - expected).abs() < EPS);

        // a full number of turns still points north
        let segment = reg.move_forward("t", 2.0).unwrap().unwrap();
        assert_point(segment.to, 0.0, -2.0);
    }

    #[test]
    fn test_left_and_right_cancel_out() {
        let mut reg = Registry::new();
        reg.create("t").unwrap();
        let before = reg.get("t").unwrap().heading;
        reg.turn_left("t", 123.4).unwrap();
        reg.turn_right("t", 123.4).unwrap();
        assert!((reg.get("t").unwrap().heading - before).abs() < EPS);
    }
}
