//! Role derivation: admin, tech and billing tables from the registrant family.

use std::collections::HashMap;

use crate::error::TableError;
use crate::key::{CanonicalKey, Role};

/// The literal word rewritten when deriving another role's labels.
pub const ROLE_MARKER: &str = "registrant";

/// Builds the label map for `role` from the registrant family.
///
/// Every registrant label containing [`ROLE_MARKER`] yields one label per
/// role synonym, with each occurrence of the marker replaced. The target
/// keeps its attribute and moves to `role`. Labels without the marker are
/// not carried over.
pub(crate) fn derive_role_family(
    registrant: &HashMap<String, CanonicalKey>,
    shared: &HashMap<String, CanonicalKey>,
    role: Role,
) -> Result<HashMap<String, CanonicalKey>, TableError> {
    // Sorted so a defect is always reported against the same label.
    let mut base: Vec<_> = registrant
        .iter()
        .filter(|(label, _)| label.contains(ROLE_MARKER))
        .collect();
    base.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut derived = HashMap::with_capacity(base.len() * role.synonyms().len());
    for (label, key) in base {
        let target = key.with_role(role);
        for synonym in role.synonyms() {
            let variant = label.replace(ROLE_MARKER, synonym);

            if let Some(existing) = shared.get(&variant) {
                return Err(TableError::Collision {
                    label: variant,
                    existing: *existing,
                    conflicting: target,
                });
            }

            match derived.get(&variant) {
                Some(existing) if *existing != target => {
                    return Err(TableError::Collision {
                        label: variant,
                        existing: *existing,
                        conflicting: target,
                    });
                }
                Some(_) => {}
                None => {
                    derived.insert(variant, target);
                }
            }
        }
    }

    Ok(derived)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Attribute, DomainField};

    fn family(entries: &[(&str, CanonicalKey)]) -> HashMap<String, CanonicalKey> {
        entries.iter().map(|(l, k)| (l.to_string(), *k)).collect()
    }

    #[test]
    fn test_each_synonym_gets_a_label() {
        let registrant = family(&[(
            "registrant organization",
            CanonicalKey::registrant(Attribute::Organization),
        )]);
        let derived = derive_role_family(&registrant, &HashMap::new(), Role::Admin).unwrap();

        let expected = CanonicalKey::Contact(Role::Admin, Attribute::Organization);
        assert_eq!(derived.len(), 2);
        assert_eq!(derived.get("admin organization"), Some(&expected));
        assert_eq!(derived.get("administrative organization"), Some(&expected));
    }

    #[test]
    fn test_labels_without_marker_are_skipped() {
        let registrant = family(&[
            ("holder", CanonicalKey::registrant(Attribute::Name)),
            ("registrant-c", CanonicalKey::registrant(Attribute::Id)),
        ]);
        let derived = derive_role_family(&registrant, &HashMap::new(), Role::Tech).unwrap();

        assert!(!derived.contains_key("holder"));
        assert_eq!(
            derived.get("tech-c"),
            Some(&CanonicalKey::Contact(Role::Tech, Attribute::Id))
        );
        assert!(derived.contains_key("technical-c"));
    }

    #[test]
    fn test_collision_with_shared_label_is_rejected() {
        let registrant = family(&[("registrant", CanonicalKey::registrant(Attribute::Name))]);
        let shared = family(&[("bill", CanonicalKey::Domain(DomainField::DomainId))]);

        let err = derive_role_family(&registrant, &shared, Role::Billing).unwrap_err();
        assert_eq!(
            err,
            TableError::Collision {
                label: "bill".to_string(),
                existing: CanonicalKey::Domain(DomainField::DomainId),
                conflicting: CanonicalKey::Contact(Role::Billing, Attribute::Name),
            }
        );
    }
}
