use std::collections::BTreeMap;

use serde_json::json;

use super::OutputFormatter;
use crate::key::{CanonicalKey, Role};
use crate::normalize::normalize;
use crate::record::WhoisRecord;
use crate::resolver::Resolution;

pub struct JsonFormatter {
    pretty: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    pub fn compact(mut self) -> Self {
        self.pretty = false;
        self
    }

    fn to_json<T: serde::Serialize + ?Sized>(&self, value: &T) -> String {
        if self.pretty {
            serde_json::to_string_pretty(value)
                .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        } else {
            serde_json::to_string(value).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, source: &str, record: &WhoisRecord) -> String {
        self.to_json(&json!({ "source": source, "record": record }))
    }

    fn format_resolution(&self, label: &str, role: Role, resolution: &Resolution) -> String {
        self.to_json(&json!({
            "label": label,
            "clean_key": normalize(label),
            "role": role.as_str(),
            "resolution": resolution,
        }))
    }

    fn format_table(&self, role: Role, entries: &[(&str, CanonicalKey)]) -> String {
        let entries: BTreeMap<&str, CanonicalKey> = entries.iter().copied().collect();
        self.to_json(&json!({ "role": role.as_str(), "entries": entries }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::{Attribute, DomainField};

    #[test]
    fn test_resolution_json() {
        let out = JsonFormatter::new().compact().format_resolution(
            "Admin E-Mail:",
            Role::Admin,
            &Resolution::Mapped(CanonicalKey::Contact(Role::Admin, Attribute::Email)),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["clean_key"], "admin e-mail");
        assert_eq!(value["role"], "admin");
        assert_eq!(value["resolution"]["key"], "admin_email");
    }

    #[test]
    fn test_table_json() {
        let entries = [
            ("nserver", CanonicalKey::from(DomainField::NameServers)),
            ("tech-c", CanonicalKey::Contact(Role::Tech, Attribute::Id)),
        ];
        let out = JsonFormatter::new().format_table(Role::Tech, &entries);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["entries"]["tech-c"], "tech_id");
        assert_eq!(value["entries"]["nserver"], "name_servers");
    }

    #[test]
    fn test_record_json() {
        let record = WhoisRecord::from_text("Domain Name: example.com\nFoo: bar\n");
        let out = JsonFormatter::new().format_record("example.txt", &record);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["source"], "example.txt");
        assert_eq!(value["record"]["domain_name"], "example.com");
        assert_eq!(value["record"]["unmapped"][0], "foo");
    }
}
