//! Assembles resolved fields into a structured WHOIS record.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::key::{Attribute, CanonicalKey, DomainField};
use crate::normalize::normalize;
use crate::resolver::{FieldResolver, Resolution, ResolvedField};
use crate::segment::{role_in_label, segment, LabelLine};

/// A WHOIS response reduced to canonical fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WhoisRecord {
    /// Single-valued fields. Streets spread over several lines are joined.
    #[serde(flatten)]
    pub fields: BTreeMap<CanonicalKey, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub name_servers: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_status: Vec<String>,
    /// Normalized labels no rule matched, in order of first appearance.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unmapped: Vec<String>,
}

impl WhoisRecord {
    /// Segments and resolves `raw` against the built-in table.
    pub fn from_text(raw: &str) -> Self {
        Self::assemble(segment(raw), &FieldResolver::new())
    }

    pub fn assemble<I>(lines: I, resolver: &FieldResolver<'_>) -> Self
    where
        I: IntoIterator<Item = LabelLine>,
    {
        let mut record = Self::default();
        for line in lines {
            match resolve_line(&line, resolver) {
                Resolution::Mapped(key) => record.insert(ResolvedField {
                    key,
                    value: line.value,
                }),
                Resolution::Unmapped => {
                    let clean = normalize(&line.label);
                    if !clean.is_empty() && !record.unmapped.contains(&clean) {
                        record.unmapped.push(clean);
                    }
                }
            }
        }
        record
    }

    /// Merges one resolved field.
    ///
    /// The first value wins for single-valued keys; name servers and
    /// statuses accumulate without duplicates. Redacted values are dropped.
    pub fn insert(&mut self, field: ResolvedField) {
        let value = field.value.trim();
        if value.is_empty() || value.to_ascii_lowercase().starts_with("redacted") {
            return;
        }

        match field.key {
            CanonicalKey::Domain(DomainField::NameServers) => {
                // Hosts are often followed by glue addresses
                let host = first_token(value).trim_end_matches('.').to_ascii_lowercase();
                if !host.is_empty() && !self.name_servers.contains(&host) {
                    self.name_servers.push(host);
                }
            }
            CanonicalKey::Domain(DomainField::DomainStatus) => {
                // Drop the trailing ICANN explanation URL
                let status = first_token(value).to_string();
                if !self.domain_status.contains(&status) {
                    self.domain_status.push(status);
                }
            }
            CanonicalKey::Contact(_, Attribute::Street) => {
                self.fields
                    .entry(field.key)
                    .and_modify(|street| {
                        street.push_str(", ");
                        street.push_str(value);
                    })
                    .or_insert_with(|| value.to_string());
            }
            key => {
                self.fields.entry(key).or_insert_with(|| value.to_string());
            }
        }
    }

    pub fn get(&self, key: CanonicalKey) -> Option<&str> {
        self.fields.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.name_servers.is_empty() && self.domain_status.is_empty()
    }
}

/// Resolves a line, qualifying bare labels inside contact sections.
///
/// `Name:` under `[Tech-C]` is tried as `tech Name` first, then as-is so
/// domain-level labels inside a section still resolve.
fn resolve_line(line: &LabelLine, resolver: &FieldResolver<'_>) -> Resolution {
    if line.in_section && role_in_label(&line.label).is_none() {
        let qualified = format!("{} {}", line.role, line.label);
        let resolution = resolver.resolve(&qualified, line.role);
        if resolution.is_mapped() {
            return resolution;
        }
    }
    resolver.resolve(&line.label, line.role)
}

fn first_token(value: &str) -> &str {
    value.split_whitespace().next().unwrap_or(value)
}
