//! Measured bounding boxes supplied by the rendering collaborator.

use std::collections::HashMap;

use espalier_core::geometry::Bounds;
use espalier_core::identifier::Id;

/// A mapping from node id to its measured rectangle.
///
/// Measurements arrive after the renderer's own layout settles, typically
/// once per layout pass, and may be incomplete while an asynchronous pass is
/// still catching up. The connector engine tolerates gaps by skipping the
/// affected parents, so it is fine to submit partial measurements and
/// resubmit as boxes arrive.
#[derive(Debug, Clone, Default)]
pub struct Measurements {
    boxes: HashMap<Id, Bounds>,
}

impl Measurements {
    /// Creates an empty measurement set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the measured bounds for a node, replacing any previous value.
    pub fn insert(&mut self, id: Id, bounds: Bounds) {
        self.boxes.insert(id, bounds);
    }

    /// Returns the measured bounds for a node, if present.
    pub fn get(&self, id: Id) -> Option<Bounds> {
        self.boxes.get(&id).copied()
    }

    /// Checks whether a node has been measured.
    pub fn contains(&self, id: Id) -> bool {
        self.boxes.contains_key(&id)
    }

    /// Returns the number of measured nodes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// Returns true when nothing has been measured yet.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

impl FromIterator<(Id, Bounds)> for Measurements {
    fn from_iter<T: IntoIterator<Item = (Id, Bounds)>>(iter: T) -> Self {
        Self {
            boxes: iter.into_iter().collect(),
        }
    }
}
