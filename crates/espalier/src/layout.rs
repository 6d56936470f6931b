//! Connector layout: measured node boxes into orthogonal elbow paths.
//!
//! The external renderer positions and measures every node, then hands the
//! resulting boxes back as [`Measurements`]. [`compute_connectors`] turns the
//! forest structure plus those boxes into one [`ConnectorSegment`] per
//! manager, ready for an overlay drawing surface. The engine holds no state:
//! every invocation recomputes the full segment set from scratch.

mod connectors;
mod measurements;

pub(crate) use connectors::compute_connectors;
pub use connectors::ConnectorSegment;
pub use measurements::Measurements;
