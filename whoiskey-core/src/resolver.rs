//! Raw label resolution.
//!
//! [`FieldResolver`] combines the normalizer with a role view of a
//! [`NormalizationTable`]. An unknown label is an ordinary outcome
//! ([`Resolution::Unmapped`]), never an error.

use serde::Serialize;
use tracing::trace;

use crate::key::{CanonicalKey, Role};
use crate::normalize::normalize;
use crate::table::NormalizationTable;

/// Outcome of resolving one raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "status", content = "key", rename_all = "lowercase")]
pub enum Resolution {
    Mapped(CanonicalKey),
    Unmapped,
}

impl Resolution {
    pub fn key(&self) -> Option<CanonicalKey> {
        match self {
            Resolution::Mapped(key) => Some(*key),
            Resolution::Unmapped => None,
        }
    }

    pub fn is_mapped(&self) -> bool {
        matches!(self, Resolution::Mapped(_))
    }
}

impl From<Option<CanonicalKey>> for Resolution {
    fn from(key: Option<CanonicalKey>) -> Self {
        key.map_or(Resolution::Unmapped, Resolution::Mapped)
    }
}

/// A value paired with the canonical key its label resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedField {
    pub key: CanonicalKey,
    pub value: String,
}

/// Resolves raw labels against a borrowed table.
///
/// Cheap to copy; holds only a reference.
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver<'a> {
    table: &'a NormalizationTable,
}

impl Default for FieldResolver<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldResolver<'static> {
    /// Resolver over the process-wide built-in table.
    pub fn new() -> Self {
        Self::with_table(NormalizationTable::global())
    }
}

impl<'a> FieldResolver<'a> {
    pub fn with_table(table: &'a NormalizationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a NormalizationTable {
        self.table
    }

    /// Resolves `raw_label` as it appears in a `role` section.
    pub fn resolve(&self, raw_label: &str, role: Role) -> Resolution {
        let clean = normalize(raw_label);
        if clean.is_empty() {
            return Resolution::Unmapped;
        }

        let resolution = Resolution::from(self.table.lookup(&clean, role));
        if !resolution.is_mapped() {
            trace!(label = %clean, %role, "Unmapped label");
        }
        resolution
    }

    /// Resolves a label and pairs the result with its value.
    ///
    /// Returns `None` for unmapped labels.
    pub fn resolve_field(&self, raw_label: &str, value: &str, role: Role) -> Option<ResolvedField> {
        self.resolve(raw_label, role).key().map(|key| ResolvedField {
            key,
            value: value.to_string(),
        })
    }
}

/// Resolves `raw_label` against the built-in table.
pub fn resolve(raw_label: &str, role: Role) -> Resolution {
    FieldResolver::new().resolve(raw_label, role)
}
