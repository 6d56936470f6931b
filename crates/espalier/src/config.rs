//! Configuration types for Espalier chart processing.
//!
//! This module provides configuration structures that control how the
//! hierarchy builder treats malformed input. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`HierarchyConfig`] - Controls how the builder resolves reference cycles.
//! - [`CyclePolicy`] - The available cycle resolutions.
//!
//! # Example
//!
//! ```
//! # use espalier::config::{AppConfig, CyclePolicy};
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.hierarchy().cycle_policy(), CyclePolicy::Reparent);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
///
/// Groups the [`HierarchyConfig`] section into a single configuration root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Hierarchy builder configuration section.
    #[serde(default)]
    hierarchy: HierarchyConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified hierarchy configuration.
    ///
    /// # Arguments
    ///
    /// * `hierarchy` - Settings for the hierarchy builder.
    pub fn new(hierarchy: HierarchyConfig) -> Self {
        Self { hierarchy }
    }

    /// Returns the hierarchy configuration.
    pub fn hierarchy(&self) -> &HierarchyConfig {
        &self.hierarchy
    }
}

/// Hierarchy builder configuration.
///
/// Controls which [`CyclePolicy`] is applied when manager references form a
/// cycle.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct HierarchyConfig {
    /// Resolution applied to cyclic manager references.
    #[serde(default)]
    cycle_policy: CyclePolicy,
}

impl HierarchyConfig {
    /// Creates a new [`HierarchyConfig`] with the specified cycle policy.
    ///
    /// # Arguments
    ///
    /// * `cycle_policy` - Resolution applied to cyclic manager references.
    pub fn new(cycle_policy: CyclePolicy) -> Self {
        Self { cycle_policy }
    }

    /// Returns the configured [`CyclePolicy`].
    pub fn cycle_policy(&self) -> CyclePolicy {
        self.cycle_policy
    }
}

/// Resolution applied to manager-reference cycles.
///
/// A record whose manager chain loops back on itself (including a record
/// naming itself as manager) can never be reached from any root. The builder
/// detects such components after linking and resolves them according to this
/// policy; either way the forest records a structural warning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePolicy {
    /// Re-attach each cyclic component as an additional root (default).
    ///
    /// Keeps every input record visible in the forest, so node counts are
    /// preserved even for pathological input.
    #[default]
    Reparent,

    /// Drop cyclic components from the forest.
    ///
    /// Mirrors renderers that simply never reach such nodes: the records
    /// exist in the input but produce no visible subtree.
    Discard,
}
