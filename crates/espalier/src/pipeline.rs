//! Event-driven recomputation over the two chart phases.
//!
//! The chart is produced in two phases with an external pause between them:
//! structure (records into a forest) and geometry (measured boxes into
//! connectors). The renderer sits in the middle: it lays the forest out,
//! measures the resulting rectangles, and reports back. [`ChartPipeline`]
//! holds the latest inputs and outputs of both phases and recomputes them
//! whenever a [`ChartEvent`] signals that one side changed.
//!
//! Staleness is handled by full recomputation: there is no cache, no
//! incremental patching, and no cleanup. A superseded result is simply
//! replaced by the next one.

use log::debug;

use espalier_core::geometry::Point;

use crate::layout::{ConnectorSegment, Measurements};
use crate::record::EmployeeRecord;
use crate::structure::Forest;
use crate::ChartBuilder;

/// A signal that one of the pipeline's inputs changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartEvent {
    /// The authoritative record list changed: rebuild the forest, then the
    /// connectors.
    StructureChanged,

    /// The rendered geometry changed: recompute the connectors against the
    /// current forest.
    GeometryChanged,
}

/// Holds the current chart state and recomputes it on demand.
///
/// # Examples
///
/// ```
/// use espalier::{ChartBuilder, ChartPipeline, EmployeeRecord, Measurements};
/// use espalier::geometry::{Bounds, Point, Size};
/// use espalier::identifier::Id;
///
/// let mut pipeline = ChartPipeline::new(ChartBuilder::default());
///
/// pipeline.set_records(vec![
///     EmployeeRecord::new("1"),
///     EmployeeRecord::new("2").with_manager("1"),
/// ]);
/// assert_eq!(pipeline.forest().node_count(), 2);
/// // Nothing is measured yet, so no connectors exist.
/// assert!(pipeline.connectors().is_empty());
///
/// let mut measurements = Measurements::new();
/// measurements.insert(
///     Id::new("1"),
///     Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 40.0)),
/// );
/// measurements.insert(
///     Id::new("2"),
///     Bounds::new_from_top_left(Point::new(0.0, 90.0), Size::new(100.0, 40.0)),
/// );
/// pipeline.set_measurements(measurements, Point::default());
/// assert_eq!(pipeline.connectors().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct ChartPipeline {
    builder: ChartBuilder,
    records: Vec<EmployeeRecord>,
    measurements: Measurements,
    container_origin: Point,
    forest: Forest,
    connectors: Vec<ConnectorSegment>,
}

impl ChartPipeline {
    /// Creates an empty pipeline around the given builder.
    pub fn new(builder: ChartBuilder) -> Self {
        Self {
            builder,
            ..Self::default()
        }
    }

    /// Replaces the authoritative record list and recomputes both phases.
    pub fn set_records(&mut self, records: Vec<EmployeeRecord>) {
        self.records = records;
        self.trigger(ChartEvent::StructureChanged);
    }

    /// Replaces the measurement set and recomputes the geometry phase.
    ///
    /// Measurements may be incomplete; parents missing boxes simply produce
    /// no connector until a later call supplies the rest.
    pub fn set_measurements(&mut self, measurements: Measurements, container_origin: Point) {
        self.measurements = measurements;
        self.container_origin = container_origin;
        self.trigger(ChartEvent::GeometryChanged);
    }

    /// Recomputes the chart in response to an external change signal.
    ///
    /// Both phases always recompute from scratch; a structure change also
    /// rebuilds the forest before connectors are rerouted.
    pub fn trigger(&mut self, event: ChartEvent) {
        debug!(event:? = event; "Recomputing chart");

        if event == ChartEvent::StructureChanged {
            self.forest = self.builder.build_forest(&self.records);
        }
        self.connectors = self.builder.compute_connectors(
            &self.forest,
            &self.measurements,
            self.container_origin,
        );
    }

    /// Returns the current record list.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the current forest.
    pub fn forest(&self) -> &Forest {
        &self.forest
    }

    /// Returns the current connector segments, in pre-order.
    pub fn connectors(&self) -> &[ConnectorSegment] {
        &self.connectors
    }
}
