//! Flat employee records, the authoritative input to the hierarchy builder.
//!
//! An [`EmployeeRecord`] is one row of the external data source: a unique id,
//! an optional manager reference, and whatever display attributes the editing
//! and rendering collaborators care about. The core never interprets the
//! attributes; they travel through the pipeline untouched and reappear on the
//! hierarchy nodes handed to the renderer.
//!
//! Field names serialize in camelCase (`managerId`) to match the tabular
//! import/export collaborators.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A flat employee record pointing to its manager by id.
///
/// The record list, not the derived forest, is the unit of exchange with
/// import/export collaborators; it round-trips through serde unchanged.
///
/// # Examples
///
/// ```
/// use espalier::EmployeeRecord;
///
/// let record = EmployeeRecord::new("2")
///     .with_manager("1")
///     .with_attribute("firstName", "Marcus")
///     .with_attribute("position", "CTO");
///
/// assert_eq!(record.id(), "2");
/// assert_eq!(record.manager_id(), Some("1"));
/// assert_eq!(record.attribute("position"), Some("CTO"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    id: String,

    #[serde(default)]
    manager_id: Option<String>,

    /// Opaque display attributes (name, position, department, …).
    #[serde(flatten)]
    attributes: IndexMap<String, String>,
}

impl EmployeeRecord {
    /// Creates a root record with the given id and no manager.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            manager_id: None,
            attributes: IndexMap::new(),
        }
    }

    /// Sets the manager reference, returning the modified record.
    pub fn with_manager(mut self, manager_id: impl Into<String>) -> Self {
        self.manager_id = Some(manager_id.into());
        self
    }

    /// Adds a display attribute, returning the modified record.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the record id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the manager reference, if any.
    ///
    /// A present-but-empty reference is returned as-is; the hierarchy
    /// builder classifies it as a root, the same as an absent one.
    pub fn manager_id(&self) -> Option<&str> {
        self.manager_id.as_deref()
    }

    /// Replaces the manager reference.
    ///
    /// `None` makes the record a root on the next forest rebuild.
    pub fn set_manager_id(&mut self, manager_id: Option<String>) {
        self.manager_id = manager_id;
    }

    /// Returns one display attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns all display attributes in insertion order.
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }
}
