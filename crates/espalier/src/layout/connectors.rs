//! Orthogonal elbow routing between each manager and its direct reports.
//!
//! Every manager with at least one measured report gets a single multi-stroke
//! path: a vertical drop from the manager's bottom anchor, a horizontal bar
//! halfway between the manager row and the children row, and one vertical
//! riser per child. All arithmetic happens in the container's local
//! coordinate space.

use log::debug;
use serde::Serialize;

use espalier_core::draw::Path;
use espalier_core::geometry::{Bounds, Point};
use espalier_core::identifier::Id;

use crate::structure::Forest;

use super::Measurements;

/// The elbow-style connector joining one manager to its direct reports.
///
/// A segment is an independently drawable unit: the owning node's id plus
/// one multi-subpath [`Path`]. Segments are recomputed wholesale whenever
/// the forest or the measurements change; none are retained between passes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectorSegment {
    owner: Id,
    path: Path,
}

impl ConnectorSegment {
    fn new(owner: Id, path: Path) -> Self {
        Self { owner, path }
    }

    /// Returns the id of the manager node this connector belongs to.
    pub fn owner(&self) -> Id {
        self.owner
    }

    /// Returns the connector geometry.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Computes the connector segments for a measured forest.
///
/// Parents are visited in pre-order (parents before children, siblings in
/// input order), and each parent with at least one child yields at most one
/// segment. A parent whose own box or any direct child's box is missing from
/// `measurements` is skipped entirely for this pass rather than drawn
/// partially; it will reappear once the measuring pass catches up.
///
/// All boxes are translated into the container's local space by subtracting
/// `container_origin` before any routing arithmetic.
pub(crate) fn compute_connectors(
    forest: &Forest,
    measurements: &Measurements,
    container_origin: Point,
) -> Vec<ConnectorSegment> {
    let mut segments = Vec::new();

    for node in forest.iter() {
        if node.children().is_empty() {
            continue;
        }

        let Some(parent_box) = measurements.get(node.id()) else {
            debug!(parent:% = node.id(); "Skipping connector; parent box not measured");
            continue;
        };

        let mut child_boxes = Vec::with_capacity(node.children().len());
        for child in node.children() {
            match measurements.get(child.id()) {
                Some(bounds) => child_boxes.push(bounds.inverse_translate(container_origin)),
                None => break,
            }
        }
        if child_boxes.len() != node.children().len() {
            debug!(parent:% = node.id(); "Skipping connector; child boxes not all measured");
            continue;
        }

        let parent_box = parent_box.inverse_translate(container_origin);
        segments.push(route_elbow(node.id(), parent_box, &child_boxes));
    }

    segments
}

/// Routes one elbow connector from a parent box to its child boxes.
///
/// The bar level `mid_y` sits halfway across the gap between the parent's
/// bottom edge and the first child's top edge. The gap is not clamped: when
/// the rows overlap, the bar simply lands inside the overlap.
fn route_elbow(owner: Id, parent: Bounds, children: &[Bounds]) -> ConnectorSegment {
    let anchor = parent.bottom_anchor();
    let gap = children[0].min_y() - parent.max_y();
    let mid_y = parent.max_y() + gap / 2.0;

    let mut path = Path::new();

    // Drop from the parent anchor down to the bar level.
    path.move_to(anchor);
    path.line_to(Point::new(anchor.x(), mid_y));

    // The shared bar spans the first to the last child anchor. With a single
    // child this is a zero-length stroke, kept for uniformity.
    let first_x = children[0].center_x();
    let last_x = children[children.len() - 1].center_x();
    path.move_to(Point::new(first_x, mid_y));
    path.line_to(Point::new(last_x, mid_y));

    // One riser from the bar up to each child's top edge.
    for child in children {
        path.move_to(Point::new(child.center_x(), mid_y));
        path.line_to(child.top_anchor());
    }

    ConnectorSegment::new(owner, path)
}
