//! Hierarchy construction: flat employee records into a rooted forest.
//!
//! This module turns the externally supplied record list into the owned
//! tree structure the renderer walks. Construction is a pure function of the
//! input list: the forest is rebuilt from scratch on every structural change
//! and the previous forest is discarded.
//!
//! # Architecture
//!
//! - [`HierarchyNode`]: one employee's record plus its ordered direct reports
//! - [`Forest`]: the ordered root sequence with structural warnings
//! - [`build_forest`]: the two-pass id-indexed builder
//! - [`StructuralWarning`]: non-fatal anomalies observed during the build

mod builder;
mod forest;

pub(crate) use builder::build_forest;
pub use forest::{Forest, HierarchyNode, PreOrder, StructuralWarning};
