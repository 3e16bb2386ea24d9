use colored::Colorize;

use super::OutputFormatter;
use crate::colors::CatppuccinExt;
use crate::key::{CanonicalKey, Role};
use crate::normalize::normalize;
use crate::record::WhoisRecord;
use crate::resolver::Resolution;

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            text.sky().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_white().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn muted(&self, text: &str) -> String {
        if self.use_colors {
            text.overlay0().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("\n{}\n{}", text.lavender().bold(), "─".repeat(text.len()).subtext0())
        } else {
            format!("\n{}\n{}", text, "-".repeat(text.len()))
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_record(&self, source: &str, record: &WhoisRecord) -> String {
        let mut output = Vec::new();

        output.push(self.header(&format!("WHOIS record: {}", source)));

        if record.is_empty() {
            output.push(format!("  {} No recognized fields", self.warning("!")));
        }

        for (key, value) in &record.fields {
            output.push(format!(
                "  {}: {}",
                self.label(&key.to_string()),
                self.value(value)
            ));
        }

        if !record.name_servers.is_empty() {
            output.push(format!("  {}:", self.label("name_servers")));
            for ns in &record.name_servers {
                output.push(format!("    - {}", self.value(ns)));
            }
        }

        if !record.domain_status.is_empty() {
            output.push(format!("  {}:", self.label("domain_status")));
            for status in &record.domain_status {
                output.push(format!("    - {}", self.value(status)));
            }
        }

        if !record.unmapped.is_empty() {
            output.push(format!(
                "  {} {}",
                self.muted("unmapped:"),
                self.muted(&record.unmapped.join(", "))
            ));
        }

        output.join("\n")
    }

    fn format_resolution(&self, label: &str, role: Role, resolution: &Resolution) -> String {
        let clean = normalize(label);
        let outcome = match resolution {
            Resolution::Mapped(key) => self.success(&key.to_string()),
            Resolution::Unmapped => self.warning("unmapped"),
        };
        format!(
            "{} {} {} {}",
            self.value(&format!("{:?}", clean)),
            self.muted(&format!("({})", role)),
            self.muted("->"),
            outcome
        )
    }

    fn format_table(&self, role: Role, entries: &[(&str, CanonicalKey)]) -> String {
        let mut output = Vec::new();
        output.push(self.header(&format!("Labels for role {} ({})", role, entries.len())));

        let width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        for (label, key) in entries {
            output.push(format!(
                "  {:<width$}  {}",
                label,
                self.label(&key.to_string()),
                width = width
            ));
        }

        output.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Attribute, DomainField};

    #[test]
    fn test_plain_resolution() {
        let formatter = HumanFormatter::new().without_colors();
        let out = formatter.format_resolution(
            "Tech Email:",
            Role::Tech,
            &Resolution::Mapped(CanonicalKey::Contact(Role::Tech, Attribute::Email)),
        );
        assert_eq!(out, "\"tech email\" (tech) -> tech_email");

        let out = formatter.format_resolution("Terms", Role::Registrant, &Resolution::Unmapped);
        assert_eq!(out, "\"terms\" (registrant) -> unmapped");
    }

    #[test]
    fn test_plain_record() {
        let record = WhoisRecord::from_text(
            "Domain Name: example.com\nName Server: ns1.example.com\nRegistrar: Acme\n",
        );
        let out = HumanFormatter::new()
            .without_colors()
            .format_record("example.com.txt", &record);

        assert!(out.contains("WHOIS record: example.com.txt"));
        assert!(out.contains("  domain_name: example.com"));
        assert!(out.contains("    - ns1.example.com"));
        assert!(out.contains("unmapped: registrar"));
    }

    #[test]
    fn test_plain_table() {
        let entries = [
            ("nserver", CanonicalKey::from(DomainField::NameServers)),
            ("id", CanonicalKey::from(DomainField::DomainId)),
        ];
        let out = HumanFormatter::new()
            .without_colors()
            .format_table(Role::Registrant, &entries);
        assert!(out.contains("Labels for role registrant (2)"));
        assert!(out.contains("  nserver  name_servers"));
        assert!(out.contains("  id       domain_id"));
    }
}
