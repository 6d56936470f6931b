//! Espalier - org-chart structure and connector geometry.
//!
//! Espalier turns a flat list of employee records into a rooted forest of
//! hierarchy nodes and, once an external renderer has measured the rendered
//! node rectangles, computes the orthogonal elbow connectors joining each
//! manager to its direct reports. Rendering, styling, persistence, and data
//! entry all live outside this crate; it consumes plain records and
//! measurements and produces plain structure and geometry.

pub mod config;

mod directory;
mod error;
mod layout;
mod pipeline;
mod record;
mod structure;

pub use espalier_core::{draw, geometry, identifier};

pub use directory::EmployeeDirectory;
pub use error::EspalierError;
pub use layout::{ConnectorSegment, Measurements};
pub use pipeline::{ChartEvent, ChartPipeline};
pub use record::EmployeeRecord;
pub use structure::{Forest, HierarchyNode, PreOrder, StructuralWarning};

use log::{debug, info, trace};

use espalier_core::geometry::Point;

use config::AppConfig;

/// Builder for the two chart computation phases.
///
/// This provides an API for processing an org chart through its structure
/// and connector-layout stages.
///
/// # Examples
///
/// ```
/// use espalier::{ChartBuilder, EmployeeRecord, Measurements};
/// use espalier::geometry::{Bounds, Point, Size};
/// use espalier::identifier::Id;
///
/// let records = vec![
///     EmployeeRecord::new("1"),
///     EmployeeRecord::new("2").with_manager("1"),
/// ];
///
/// // Phase 1: structure.
/// let builder = ChartBuilder::default();
/// let forest = builder.build_forest(&records);
/// assert_eq!(forest.node_count(), 2);
///
/// // An external renderer lays the forest out and reports measurements.
/// let mut measurements = Measurements::new();
/// measurements.insert(
///     Id::new("1"),
///     Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 40.0)),
/// );
/// measurements.insert(
///     Id::new("2"),
///     Bounds::new_from_top_left(Point::new(0.0, 90.0), Size::new(100.0, 40.0)),
/// );
///
/// // Phase 2: connector geometry.
/// let connectors = builder.compute_connectors(&forest, &measurements, Point::default());
/// assert_eq!(connectors.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ChartBuilder {
    config: AppConfig,
}

impl ChartBuilder {
    /// Create a new chart builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including hierarchy settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build a hierarchy forest from a flat record list.
    ///
    /// Every record appears in the forest exactly once (under the default
    /// cycle policy); roots and siblings keep input order. The call never
    /// fails: dangling, self-referential, and cyclic manager references are
    /// reflected structurally and reported as [`StructuralWarning`]s on the
    /// returned forest.
    ///
    /// # Arguments
    ///
    /// * `records` - The authoritative employee list, in display order
    pub fn build_forest(&self, records: &[EmployeeRecord]) -> Forest {
        info!(record_count = records.len(); "Building hierarchy forest");

        let forest = structure::build_forest(records, self.config.hierarchy().cycle_policy());

        debug!(
            root_count = forest.roots().len(),
            warning_count = forest.warnings().len();
            "Forest built"
        );
        trace!(forest:? = forest; "Built forest");

        forest
    }

    /// Compute connector segments for a measured forest.
    ///
    /// One segment is produced per manager whose own box and all of whose
    /// direct children's boxes are present in `measurements`; incompletely
    /// measured managers are skipped for this pass. Box positions are
    /// normalized by subtracting `container_origin` first.
    ///
    /// # Arguments
    ///
    /// * `forest` - The forest produced by [`ChartBuilder::build_forest`]
    /// * `measurements` - Measured boxes reported by the renderer
    /// * `container_origin` - Absolute position of the rendering container
    pub fn compute_connectors(
        &self,
        forest: &Forest,
        measurements: &Measurements,
        container_origin: Point,
    ) -> Vec<ConnectorSegment> {
        info!(
            node_count = forest.node_count(),
            measured_count = measurements.len();
            "Computing connector layout"
        );

        let connectors = layout::compute_connectors(forest, measurements, container_origin);

        debug!(connector_count = connectors.len(); "Connector layout computed");
        connectors
    }
}
