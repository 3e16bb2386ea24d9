//! The label normalization table.
//!
//! A [`NormalizationTable`] maps normalized labels to canonical keys. It is
//! assembled by a [`TableBuilder`], which validates every entry and computes
//! the per-role label maps up front. Once built, a table is never mutated,
//! so a single instance can be shared by any number of threads.

mod derive;
mod rules;

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::{debug, error};

use crate::error::{Result, TableError};
use crate::key::{CanonicalKey, Role};
use crate::normalize::normalize;

pub use derive::ROLE_MARKER;

/// Process-wide table built from the built-in rules.
static GLOBAL_TABLE: Lazy<NormalizationTable> = Lazy::new(|| {
    TableBuilder::new().build().unwrap_or_else(|e| {
        error!(error = %e, "Built-in normalization table is defective");
        panic!("built-in normalization table is defective: {e}")
    })
});

/// Immutable label-to-key lookup, one view per contact role.
#[derive(Debug, Clone)]
pub struct NormalizationTable {
    /// Role-independent labels (domain-level keys).
    shared: HashMap<String, CanonicalKey>,
    /// Contact labels indexed by `Role as usize`.
    families: [HashMap<String, CanonicalKey>; 4],
}

impl NormalizationTable {
    /// Returns the shared table built from the built-in rules.
    ///
    /// # Panics
    ///
    /// Panics on first access if the built-in rules fail validation. That is
    /// a defect in the rule list, not in any input.
    pub fn global() -> &'static NormalizationTable {
        &GLOBAL_TABLE
    }

    /// Looks up an already-normalized label in `role`'s view.
    ///
    /// The role's own labels are consulted first, then the role-independent
    /// ones.
    pub fn lookup(&self, clean_key: &str, role: Role) -> Option<CanonicalKey> {
        self.family(role)
            .get(clean_key)
            .or_else(|| self.shared.get(clean_key))
            .copied()
    }

    /// All labels visible from `role`, sorted by label.
    pub fn entries(&self, role: Role) -> Vec<(&str, CanonicalKey)> {
        let mut entries: Vec<_> = self
            .family(role)
            .iter()
            .chain(self.shared.iter())
            .map(|(label, key)| (label.as_str(), *key))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Number of labels visible from `role`.
    pub fn len(&self, role: Role) -> usize {
        self.family(role).len() + self.shared.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shared.is_empty() && self.families.iter().all(HashMap::is_empty)
    }

    fn family(&self, role: Role) -> &HashMap<String, CanonicalKey> {
        &self.families[role as usize]
    }
}

/// Collects label rules and validates them into a [`NormalizationTable`].
///
/// Rules are additive only: an entry that would give an existing label a
/// different target is rejected instead of shadowing it.
#[derive(Debug, Clone)]
pub struct TableBuilder {
    entries: Vec<(String, CanonicalKey)>,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TableBuilder {
    /// Starts from the built-in rules.
    pub fn new() -> Self {
        Self::empty().with_entries(rules::BUILTIN_RULES.iter().copied())
    }

    /// Starts with no rules at all.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn with_entry(mut self, label: impl Into<String>, key: CanonicalKey) -> Self {
        self.entries.push((label.into(), key));
        self
    }

    pub fn with_entries<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = (S, CanonicalKey)>,
        S: Into<String>,
    {
        self.entries
            .extend(entries.into_iter().map(|(label, key)| (label.into(), key)));
        self
    }

    /// Adds entries from a JSON object of `"label": "canonical_key"` pairs.
    pub fn extend_from_json(mut self, json: &str) -> Result<Self> {
        let raw: BTreeMap<String, String> = serde_json::from_str(json)?;
        for (label, key) in raw {
            let key = key
                .parse::<CanonicalKey>()
                .map_err(|_| TableError::UnknownKey {
                    label: label.clone(),
                    key,
                })?;
            self.entries.push((label, key));
        }
        Ok(self)
    }

    /// Adds entries from a JSON rule file on disk.
    pub fn extend_from_file(self, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "Loading rule extension");
        self.extend_from_json(&json)
    }

    /// Validates all entries and computes the role views.
    pub fn build(self) -> std::result::Result<NormalizationTable, TableError> {
        let mut shared = HashMap::new();
        let mut registrant = HashMap::new();

        for (label, key) in self.entries {
            let expected = normalize(&label);
            if expected != label {
                return Err(TableError::NotNormalized { label, expected });
            }

            let is_registrant = match key.role() {
                None if label.contains(ROLE_MARKER) => {
                    return Err(TableError::RoleMismatch {
                        label,
                        key,
                        reason: "labels naming the registrant must target a registrant key",
                    });
                }
                None => false,
                Some(Role::Registrant) => true,
                Some(_) => {
                    return Err(TableError::RoleMismatch {
                        label,
                        key,
                        reason: "admin, tech and billing keys are derived from registrant rules",
                    });
                }
            };

            let existing = shared.get(&label).or_else(|| registrant.get(&label)).copied();
            match existing {
                Some(existing) if existing != key => {
                    return Err(TableError::Collision {
                        label,
                        existing,
                        conflicting: key,
                    });
                }
                // Identical duplicates are harmless.
                Some(_) => {}
                None if is_registrant => {
                    registrant.insert(label, key);
                }
                None => {
                    shared.insert(label, key);
                }
            }
        }

        let admin = derive::derive_role_family(&registrant, &shared, Role::Admin)?;
        let tech = derive::derive_role_family(&registrant, &shared, Role::Tech)?;
        let billing = derive::derive_role_family(&registrant, &shared, Role::Billing)?;

        debug!(
            shared = shared.len(),
            registrant = registrant.len(),
            admin = admin.len(),
            tech = tech.len(),
            billing = billing.len(),
            "Normalization table built"
        );

        Ok(NormalizationTable {
            shared,
            families: [registrant, admin, tech, billing],
        })
    }
}
