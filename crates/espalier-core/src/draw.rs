//! Drawable path primitives for connector overlays
//!
//! Connector segments are handed to an external renderer as plain geometry:
//! a [`Path`] is an ordered list of move-to/line-to commands describing one
//! or more straight strokes. The renderer decides stroke color, width, and
//! drawing technology; this module only carries the shape.

mod path;

pub use path::{Path, PathCommand};
