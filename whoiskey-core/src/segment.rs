//! Splits raw WHOIS text into labelled lines.
//!
//! Handles the three layouts seen in practice:
//!
//! ```text
//! Admin Email: hostmaster@example.com      <- role carried by the label
//!
//! [Tech-C]                                 <- DENIC bracketed sections
//! Name: Jane Doe
//!
//! Registrant:                              <- Nominet indented blocks
//!     Example Ltd
//! ```
//!
//! Labels are passed on verbatim; normalization belongs to the resolver.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::key::Role;
use crate::normalize::normalize;

static BRACKET_SECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\[([^\]]+)\]$").expect("Invalid section header regex"));

/// Headers that open a contact section, in normalized form.
const CONTACT_HEADERS: &[(&str, Role)] = &[
    ("holder", Role::Registrant),
    ("registrant", Role::Registrant),
    ("registrant contact", Role::Registrant),
    ("admin-c", Role::Admin),
    ("admin contact", Role::Admin),
    ("administrative contact", Role::Admin),
    ("tech-c", Role::Tech),
    ("tech contact", Role::Tech),
    ("technical contact", Role::Tech),
    ("billing contact", Role::Billing),
];

/// One `label: value` pair with the contact role it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelLine {
    pub label: String,
    pub value: String,
    pub role: Role,
    /// True when the role came from an enclosing section header rather
    /// than from the label itself.
    pub in_section: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Contact(Role),
    /// A section with no contact role (e.g. DENIC `[Zone-C]`); skipped.
    Ignored,
}

/// An empty-valued label waiting for its block of values.
struct Pending {
    label: String,
    indent: usize,
    /// The label opened a contact section.
    is_header: bool,
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

/// Returns the role named by a word in `label`, if any.
pub fn role_in_label(label: &str) -> Option<Role> {
    let clean = normalize(label);
    clean
        .split(|c: char| c == ' ' || c == '-' || c == '_' || c == '/')
        .find_map(|word| {
            Role::ALL
                .into_iter()
                .find(|role| role.synonyms().contains(&word))
        })
}

fn contact_header(label: &str) -> Option<Role> {
    let clean = normalize(label);
    CONTACT_HEADERS
        .iter()
        .find(|(header, _)| *header == clean)
        .map(|(_, role)| *role)
}

/// Splits `raw` into labelled lines.
pub fn segment(raw: &str) -> Vec<LabelLine> {
    let mut lines = Vec::new();
    let mut section = Section::None;
    let mut pending: Option<Pending> = None;

    for line in raw.lines() {
        let trimmed = line.trim();

        // A blank line closes any open section or block
        if trimmed.is_empty() {
            section = Section::None;
            pending = None;
            continue;
        }

        if trimmed.starts_with('%') || trimmed.starts_with('#') || trimmed.starts_with(">>>") {
            continue;
        }

        if let Some(caps) = BRACKET_SECTION.captures(trimmed) {
            section = match caps.get(1).and_then(|m| contact_header(m.as_str())) {
                Some(role) => Section::Contact(role),
                None => Section::Ignored,
            };
            pending = None;
            continue;
        }

        if section == Section::Ignored {
            continue;
        }

        let section_role = match section {
            Section::Contact(role) => Some(role),
            _ => None,
        };

        let split = trimmed
            .split_once(':')
            .map(|(label, value)| (label.trim(), value.trim()));

        // Lines indented deeper than an empty label are that label's values,
        // unless the label was a contact header and the line is labelled
        let indent = indent_width(line);
        if let Some(block) = pending.as_ref().filter(|p| indent > p.indent) {
            let labelled = matches!(split, Some((_, value)) if !value.is_empty());
            if !(block.is_header && labelled) {
                lines.push(make_line(&block.label, trimmed, section_role));
                continue;
            }
        }

        let Some((label, value)) = split else {
            pending = None;
            continue;
        };

        if value.is_empty() {
            let header = contact_header(label);
            if let Some(role) = header {
                section = Section::Contact(role);
            }
            pending = Some(Pending {
                label: label.to_string(),
                indent,
                is_header: header.is_some(),
            });
            continue;
        }

        pending = None;
        lines.push(make_line(label, value, section_role));
    }

    lines
}

fn make_line(label: &str, value: &str, section_role: Option<Role>) -> LabelLine {
    let (role, in_section) = match (role_in_label(label), section_role) {
        (Some(role), _) => (role, false),
        (None, Some(role)) => (role, true),
        (None, None) => (Role::Registrant, false),
    };
    LabelLine {
        label: label.to_string(),
        value: value.to_string(),
        role,
        in_section,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_in_label() {
        assert_eq!(role_in_label("Admin Email"), Some(Role::Admin));
        assert_eq!(role_in_label("Registry Tech ID"), Some(Role::Tech));
        assert_eq!(role_in_label("tech-c"), Some(Role::Tech));
        assert_eq!(role_in_label("Bill Fax"), Some(Role::Billing));
        assert_eq!(role_in_label("Registrant Name"), Some(Role::Registrant));
        assert_eq!(role_in_label("Domain Name"), None);
        // "technology" is not a role word
        assert_eq!(role_in_label("Registrar Technology Partner"), None);
    }

    #[test]
    fn test_flat_layout() {
        let raw = "Domain Name: EXAMPLE.COM\n\
                   Registrant Email: owner@example.com\n\
                   Admin Email: admin@example.com\n\
                   >>> Last update of WHOIS database: 2024-01-01 <<<\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].label, "Domain Name");
        assert_eq!(lines[0].value, "EXAMPLE.COM");
        assert_eq!(lines[0].role, Role::Registrant);
        assert_eq!(lines[2].role, Role::Admin);
        assert!(lines.iter().all(|l| !l.in_section));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        let lines = segment("Registrar URL: https://www.example.com:8080/");
        assert_eq!(lines[0].value, "https://www.example.com:8080/");
    }

    #[test]
    fn test_bracket_sections() {
        let raw = "Domain: example.de\n\
                   \n\
                   [Tech-C]\n\
                   Type: ROLE\n\
                   Name: Jane Doe\n\
                   \n\
                   [Zone-C]\n\
                   Name: Zone Admin\n\
                   \n\
                   Status: connect\n";
        let lines = segment(raw);

        let labels: Vec<_> = lines.iter().map(|l| (l.label.as_str(), l.role)).collect();
        assert_eq!(
            labels,
            vec![
                ("Domain", Role::Registrant),
                ("Type", Role::Tech),
                ("Name", Role::Tech),
                ("Status", Role::Registrant),
            ]
        );
        assert!(lines[2].in_section);
        assert!(!lines[3].in_section);
    }

    #[test]
    fn test_indented_blocks() {
        let raw = "    Domain name:\n        example.co.uk\n\n    Registrant:\n        Example Ltd\n\n    Name servers:\n        ns1.example.co.uk\n        ns2.example.co.uk\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].label, "Domain name");
        assert_eq!(lines[0].value, "example.co.uk");
        assert_eq!(lines[1].label, "Registrant");
        assert_eq!(lines[1].role, Role::Registrant);
        assert_eq!(lines[3].label, "Name servers");
        assert_eq!(lines[3].value, "ns2.example.co.uk");
    }

    #[test]
    fn test_contact_header_opens_section() {
        let raw = "Technical Contact:\n   Name: Jane Doe\n   Email: jane@example.com\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.role == Role::Tech && l.in_section));
        assert_eq!(lines[0].label, "Name");
        assert_eq!(lines[1].value, "jane@example.com");
    }

    #[test]
    fn test_unindented_lines_after_header_use_section_role() {
        let raw = "Administrative Contact:\nName: John Roe\nPhone: +1.5555550100\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Name");
        assert_eq!(lines[0].role, Role::Admin);
        assert!(lines[0].in_section);
    }

    #[test]
    fn test_uniformly_indented_flat_layout() {
        let raw = "   Domain Name: EXAMPLE.COM\n   Registrant Phone Ext:\n   Registrant Fax: +1.5555550199\n   Tech Email: t@example.com\n";
        let lines = segment(raw);

        let pairs: Vec<_> = lines
            .iter()
            .map(|l| (l.label.as_str(), l.value.as_str(), l.role))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Domain Name", "EXAMPLE.COM", Role::Registrant),
                ("Registrant Fax", "+1.5555550199", Role::Registrant),
                ("Tech Email", "t@example.com", Role::Tech),
            ]
        );
    }

    #[test]
    fn test_empty_field_followed_by_labelled_lines() {
        let raw = "Registrant Phone Ext:\nRegistrant Fax: +1.5555550199\nAdmin Fax Ext:\nAdmin Email: a@example.com\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Registrant Fax");
        assert_eq!(lines[1].label, "Admin Email");
        assert_eq!(lines[1].role, Role::Admin);
    }

    #[test]
    fn test_block_values_must_be_deeper_than_label() {
        let raw = "   Name servers:\n      ns1.example.co.uk\n   Status: active\n";
        let lines = segment(raw);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].label, "Name servers");
        assert_eq!(lines[0].value, "ns1.example.co.uk");
        assert_eq!(lines[1].label, "Status");
        assert_eq!(lines[1].value, "active");
    }

    #[test]
    fn test_noise_is_skipped() {
        let raw = "% Copyright notice\n# comment\nTERMS OF USE apply\n\n";
        assert!(segment(raw).is_empty());
    }
}
