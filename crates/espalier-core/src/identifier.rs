//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used to key hierarchy nodes, measured
//! boxes, and connector segments. Employee ids arrive as external strings and
//! are interned once, so forest construction and measurement lookups compare
//! symbols instead of string contents.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use serde::{Serialize, Serializer};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of employee id strings
/// through string interning. Two [`Id`]s created from equal strings compare
/// equal and hash identically, which makes the type suitable as a map key for
/// measurement lookups.
///
/// # Examples
///
/// ```
/// use espalier_core::identifier::Id;
///
/// // Create identifiers from employee id strings
/// let ceo = Id::new("emp-001");
/// let report = Id::new("emp-002");
///
/// assert_ne!(ceo, report);
/// assert_eq!(ceo, Id::new("emp-001"));
/// assert_eq!(ceo, "emp-001");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Arguments
    ///
    /// * `id` - The string representation of the identifier
    ///
    /// # Examples
    ///
    /// ```
    /// use espalier_core::identifier::Id;
    ///
    /// let employee_id = Id::new("emp-042");
    /// ```
    pub fn new(id: &str) -> Self {
        let mut interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(id);
        Self(symbol)
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use espalier_core::identifier::Id;
    ///
    /// let id: Id = "emp-007".into();
    /// assert_eq!(id, "emp-007");
    /// ```
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Serialize for Id {
    /// Serializes the identifier as its string form.
    ///
    /// Forests and connector segments are serialized views handed to an
    /// external renderer; the interner symbol itself is never exposed.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use espalier_core::identifier::Id;
    ///
    /// let id = Id::new("emp-001");
    /// assert!(id == "emp-001");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = INTERNER
            .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
            .lock()
            .expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    ///
    /// # Examples
    ///
    /// ```
    /// use espalier_core::identifier::Id;
    ///
    /// let id = Id::new("emp-001");
    /// let raw = "emp-001";
    /// assert!(id == raw);
    /// ```
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
