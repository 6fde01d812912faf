use crate::command::{Canvas, Console};
use crate::turtle::{Colour, Point, Segment};
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tracing::{info, warn};

/// Memory-backed canvas that records every segment.
///
/// Keep the handle from [`MemCanvas::with_handle`] to inspect drawings after the
/// canvas has been handed over to an interpreter.
#[derive(Default)]
pub struct MemCanvas {
    segments: Rc<RefCell<Vec<Segment>>>,
}

impl MemCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: create canvas and return (canvas, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<Segment>>>) {
        let canvas = MemCanvas::new();
        let rc = canvas.segments.clone();
        (canvas, rc)
    }
}

impl Canvas for MemCanvas {
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        self.segments.borrow_mut().push(Segment { from, to, colour });
    }
}

/// Something reported to a console.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Echo(String),
    Error(String),
    Shutdown,
}

/// Memory-backed console collecting feedback in arrival order.
#[derive(Default)]
pub struct MemConsole {
    entries: Rc<RefCell<Vec<Feedback>>>,
}

impl MemConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: create console and return (console, rc_handle).
    pub fn with_handle() -> (Self, Rc<RefCell<Vec<Feedback>>>) {
        let console = MemConsole::new();
        let rc = console.entries.clone();
        (console, rc)
    }
}

impl Console for MemConsole {
    fn echo(&mut self, text: &str) {
        self.entries.borrow_mut().push(Feedback::Echo(text.to_string()));
    }

    fn error(&mut self, text: &str) {
        self.entries.borrow_mut().push(Feedback::Error(text.to_string()));
    }

    fn request_shutdown(&mut self) {
        self.entries.borrow_mut().push(Feedback::Shutdown);
    }
}

/// Console on the process' standard streams: echoes to stdout, errors to stderr.
pub struct TerminalConsole;

impl Console for TerminalConsole {
    fn echo(&mut self, text: &str) {
        println!("{}", text);
    }

    fn error(&mut self, text: &str) {
        eprintln!("{}", text);
    }

    fn request_shutdown(&mut self) {
        info!("shutdown requested");
    }
}

/// Canvas that writes every segment as one text line:
/// `line (x1, y1) -> (x2, y2) colour`.
pub struct TextCanvas<W: Write> {
    out: W,
}

impl<W: Write> TextCanvas<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl TextCanvas<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Canvas for TextCanvas<W> {
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        if let Err(e) = writeln!(self.out, "line {} -> {} {}", from, to, colour) {
            warn!("failed to write segment: {}", e);
        }
    }
}

/// Axis aligned rectangle: top-left corner plus size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Smallest rectangle centred on the origin that contains both `self` and `p`.
    fn grown_to(self, p: Point) -> Rect {
        let half_w = (self.width / 2.0).max(p.x.abs());
        let half_h = (self.height / 2.0).max(p.y.abs());
        Rect {
            x: -half_w,
            y: -half_h,
            width: 2.0 * half_w,
            height: 2.0 * half_h,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x
            && p.x <= self.x + self.width
            && p.y >= self.y
            && p.y <= self.y + self.height
    }
}

/// In-memory drawing that keeps its view centred on the origin.
///
/// The view starts as a 200x200 square around the origin and only ever grows,
/// symmetrically, so that every drawn point stays visible.
pub struct Scene {
    segments: Rc<RefCell<Vec<Segment>>>,
    view: Rc<RefCell<Rect>>,
}

impl Scene {
    pub const INITIAL_VIEW: Rect = Rect {
        x: -100.0,
        y: -100.0,
        width: 200.0,
        height: 200.0,
    };

    pub fn new() -> Self {
        Self {
            segments: Rc::new(RefCell::new(Vec::new())),
            view: Rc::new(RefCell::new(Self::INITIAL_VIEW)),
        }
    }

    /// Shared view of the scene, valid after the scene was moved into an interpreter.
    pub fn handle(&self) -> SceneHandle {
        SceneHandle {
            segments: self.segments.clone(),
            view: self.view.clone(),
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for Scene {
    fn draw_line(&mut self, from: Point, to: Point, colour: Colour) {
        let mut view = self.view.borrow_mut();
        for p in [from, to] {
            if !view.contains(p) {
                *view = view.grown_to(p);
            }
        }
        self.segments.borrow_mut().push(Segment { from, to, colour });
    }
}

/// Read access to a [`Scene`].
#[derive(Clone)]
pub struct SceneHandle {
    segments: Rc<RefCell<Vec<Segment>>>,
    view: Rc<RefCell<Rect>>,
}

impl SceneHandle {
    pub fn segments(&self) -> Vec<Segment> {
        self.segments.borrow().clone()
    }

    pub fn view(&self) -> Rect {
        *self.view.borrow()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_canvas_records_segments() {
        let (mut canvas, segments) = MemCanvas::with_handle();
        canvas.draw_line(Point::ORIGIN, Point::new(1.0, 2.0), Colour::Red);
        assert_eq!(
            *segments.borrow(),
            vec![Segment {
                from: Point::ORIGIN,
                to: Point::new(1.0, 2.0),
                colour: Colour::Red
            }]
        );
    }

    #[test]
    fn test_mem_console_keeps_order() {
        let (mut console, entries) = MemConsole::with_handle();
        console.echo("turtle a");
        console.error("Line 2 : Too few arguments.");
        console.request_shutdown();
        assert_eq!(
            *entries.borrow(),
            vec![
                Feedback::Echo("turtle a".into()),
                Feedback::Error("Line 2 : Too few arguments.".into()),
                Feedback::Shutdown,
            ]
        );
    }

    #[test]
    fn test_text_canvas_format() {
        let mut canvas = TextCanvas::new(Vec::new());
        canvas.draw_line(Point::new(0.0, 0.0), Point::new(-5.5, 10.0), Colour::Black);
        let s = String::from_utf8(canvas.into_inner()).unwrap();
        assert_eq!(s, "line (0, 0) -> (-5.5, 10) black\n");
    }

    #[test]
    fn test_scene_view_grows_symmetrically() {
        let mut scene = Scene::new();
        let handle = scene.handle();

        scene.draw_line(Point::ORIGIN, Point::new(50.0, -20.0), Colour::Blue);
        assert_eq!(handle.view(), Scene::INITIAL_VIEW);

        scene.draw_line(Point::new(50.0, -20.0), Point::new(150.0, -20.0), Colour::Blue);
        let view = handle.view();
        assert_eq!(view, Rect { x: -150.0, y: -100.0, width: 300.0, height: 200.0 });
        assert!(view.contains(Point::new(-150.0, 0.0)));

        scene.draw_line(Point::ORIGIN, Point::new(0.0, 400.0), Colour::Red);
        let view = handle.view();
        assert_eq!(view.height, 800.0);
        assert_eq!(view.width, 300.0);
        assert_eq!(handle.segments().len(), 3);

        // points already in view leave it alone
        scene.draw_line(Point::new(-10.0, 10.0), Point::new(149.0, -399.0), Colour::Black);
        assert_eq!(handle.view(), view);
    }
}
