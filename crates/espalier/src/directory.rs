//! The authoritative flat record list and its edit operations.
//!
//! Editing collaborators (forms, importers) mutate the directory, never the
//! derived forest. Every successful mutation produces a new authoritative
//! list; callers then rebuild the forest from it. The directory enforces the
//! structural integrity the builder assumes: ids are unique and non-empty.
//!
//! Re-parenting policy lives here, not in the builder: removing an employee
//! re-points their direct reports to root before the record disappears, so
//! the next build never sees the dangling reference.

use espalier_core::identifier::Id;

use crate::error::EspalierError;
use crate::record::EmployeeRecord;

/// An ordered, validated collection of employee records.
///
/// Record order is preserved across edits; the hierarchy builder derives
/// root and sibling order from it.
///
/// # Examples
///
/// ```
/// use espalier::{EmployeeDirectory, EmployeeRecord};
///
/// let mut directory = EmployeeDirectory::new();
/// directory.add(EmployeeRecord::new("1")).unwrap();
/// directory.add(EmployeeRecord::new("2").with_manager("1")).unwrap();
///
/// // Removing the manager re-points the report to root.
/// directory.remove("1").unwrap();
/// assert_eq!(directory.get("2").unwrap().manager_id(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeDirectory {
    records: Vec<EmployeeRecord>,
}

impl EmployeeDirectory {
    /// Creates an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory from an existing record list.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::EmptyEmployeeId`] or
    /// [`EspalierError::DuplicateEmployee`] when the list violates id
    /// integrity.
    pub fn from_records(records: Vec<EmployeeRecord>) -> Result<Self, EspalierError> {
        let mut directory = Self::new();
        directory.replace_all(records)?;
        Ok(directory)
    }

    /// Returns the records in their current order.
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    /// Returns the record with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when the directory holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new record.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::EmptyEmployeeId`] for a blank id and
    /// [`EspalierError::DuplicateEmployee`] when the id is already taken.
    pub fn add(&mut self, record: EmployeeRecord) -> Result<(), EspalierError> {
        if record.id().is_empty() {
            return Err(EspalierError::EmptyEmployeeId);
        }
        if self.get(record.id()).is_some() {
            return Err(EspalierError::DuplicateEmployee(Id::new(record.id())));
        }
        self.records.push(record);
        Ok(())
    }

    /// Replaces the record sharing the given record's id, keeping its
    /// position in the list.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::UnknownEmployee`] when no record has that id.
    pub fn update(&mut self, record: EmployeeRecord) -> Result<(), EspalierError> {
        let position = self
            .records
            .iter()
            .position(|existing| existing.id() == record.id())
            .ok_or_else(|| EspalierError::UnknownEmployee(Id::new(record.id())))?;
        self.records[position] = record;
        Ok(())
    }

    /// Removes a record and re-points its direct reports to root.
    ///
    /// The removed record is returned so callers can offer undo.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::UnknownEmployee`] when no record has that id.
    pub fn remove(&mut self, id: &str) -> Result<EmployeeRecord, EspalierError> {
        let position = self
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| EspalierError::UnknownEmployee(Id::new(id)))?;

        for record in &mut self.records {
            if record.manager_id() == Some(id) {
                record.set_manager_id(None);
            }
        }

        Ok(self.records.remove(position))
    }

    /// Replaces the whole record list, the import boundary.
    ///
    /// The previous list is kept untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`EspalierError::EmptyEmployeeId`] or
    /// [`EspalierError::DuplicateEmployee`] when the new list violates id
    /// integrity.
    pub fn replace_all(&mut self, records: Vec<EmployeeRecord>) -> Result<(), EspalierError> {
        for (index, record) in records.iter().enumerate() {
            if record.id().is_empty() {
                return Err(EspalierError::EmptyEmployeeId);
            }
            if records[..index].iter().any(|prior| prior.id() == record.id()) {
                return Err(EspalierError::DuplicateEmployee(Id::new(record.id())));
            }
        }
        self.records = records;
        Ok(())
    }
}
