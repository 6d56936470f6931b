//! Multi-subpath polyline paths built from move-to/line-to commands.
//!
//! A connector joining a manager to its direct reports is a single [`Path`]
//! containing several disjoint strokes: the drop from the parent, the shared
//! horizontal bar, and one riser per child. Each stroke is a move-to/line-to
//! pair, matching the subpath model of SVG path data and most canvas APIs.

use serde::Serialize;

use crate::geometry::Point;

/// A single path-building command.
///
/// `MoveTo` lifts the pen and starts a new subpath; `LineTo` draws a straight
/// stroke from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum PathCommand {
    /// Start a new subpath at the given point
    MoveTo(Point),
    /// Draw a straight stroke from the current position to the given point
    LineTo(Point),
}

/// An ordered sequence of path commands forming one or more straight strokes.
///
/// # Examples
///
/// ```
/// use espalier_core::draw::Path;
/// use espalier_core::geometry::Point;
///
/// let mut path = Path::new();
/// path.move_to(Point::new(200.0, 50.0));
/// path.line_to(Point::new(200.0, 75.0));
///
/// assert_eq!(path.subpath_count(), 1);
/// assert_eq!(path.to_path_data(), "M 200 50 L 200 75");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates a new empty path
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new subpath at the given point
    pub fn move_to(&mut self, point: Point) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    /// Draws a straight stroke from the current position to the given point
    ///
    /// A `line_to` issued before any `move_to` strokes from the origin; well
    /// formed paths start every subpath with an explicit `move_to`.
    pub fn line_to(&mut self, point: Point) {
        self.commands.push(PathCommand::LineTo(point));
    }

    /// Returns the ordered command list
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns true when the path contains no commands
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Returns the number of subpaths (move-to commands) in the path
    pub fn subpath_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::MoveTo(_)))
            .count()
    }

    /// Returns an iterator over the straight strokes of the path
    ///
    /// Each item is a `(start, end)` pair. Move-to commands reposition the
    /// cursor without emitting a stroke.
    pub fn strokes(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let mut cursor = Point::default();
        self.commands.iter().filter_map(move |command| match command {
            PathCommand::MoveTo(point) => {
                cursor = *point;
                None
            }
            PathCommand::LineTo(point) => {
                let start = cursor;
                cursor = *point;
                Some((start, *point))
            }
        })
    }

    /// Formats the path in SVG path-data syntax (`M x y L x y …`)
    ///
    /// This is a formatting convenience for overlay renderers that accept
    /// path-data strings; no rendering happens here.
    pub fn to_path_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            if !data.is_empty() {
                data.push(' ');
            }
            match command {
                PathCommand::MoveTo(point) => {
                    data.push_str(&format!("M {} {}", point.x(), point.y()));
                }
                PathCommand::LineTo(point) => {
                    data.push_str(&format!("L {} {}", point.x(), point.y()));
                }
            }
        }
        data
    }
}
