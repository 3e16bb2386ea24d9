//! The closed set of canonical field keys.
//!
//! Everything downstream of resolution consumes these identifiers instead of
//! raw labels. Their string forms (`domain_name`, `admin_email`, ...) are the
//! stable external names used in JSON output and table extensions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WhoisKeyError;

/// A contact section of a WHOIS response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Role {
    #[default]
    Registrant,
    Admin,
    Tech,
    Billing,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Registrant, Role::Admin, Role::Tech, Role::Billing];

    /// Roles whose tables are derived from the registrant family.
    pub const DERIVED: [Role; 3] = [Role::Admin, Role::Tech, Role::Billing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Registrant => "registrant",
            Role::Admin => "admin",
            Role::Tech => "tech",
            Role::Billing => "billing",
        }
    }

    /// Words that stand in for `registrant` in this role's labels.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Role::Registrant => &["registrant"],
            Role::Admin => &["admin", "administrative"],
            Role::Tech => &["tech", "technical"],
            Role::Billing => &["billing", "bill"],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = WhoisKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Role::ALL
            .into_iter()
            .find(|role| role.synonyms().contains(&lower.as_str()))
            .ok_or_else(|| WhoisKeyError::UnknownRole(s.to_string()))
    }
}

/// Attributes shared by every contact role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Attribute {
    Id,
    Name,
    Organization,
    Street,
    City,
    StateProvince,
    PostalCode,
    Country,
    Phone,
    PhoneExt,
    Fax,
    FaxExt,
    Email,
}

impl Attribute {
    pub const ALL: [Attribute; 13] = [
        Attribute::Id,
        Attribute::Name,
        Attribute::Organization,
        Attribute::Street,
        Attribute::City,
        Attribute::StateProvince,
        Attribute::PostalCode,
        Attribute::Country,
        Attribute::Phone,
        Attribute::PhoneExt,
        Attribute::Fax,
        Attribute::FaxExt,
        Attribute::Email,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Id => "id",
            Attribute::Name => "name",
            Attribute::Organization => "organization",
            Attribute::Street => "street",
            Attribute::City => "city",
            Attribute::StateProvince => "state_province",
            Attribute::PostalCode => "postal_code",
            Attribute::Country => "country",
            Attribute::Phone => "phone",
            Attribute::PhoneExt => "phone_ext",
            Attribute::Fax => "fax",
            Attribute::FaxExt => "fax_ext",
            Attribute::Email => "email",
        }
    }
}

/// Role-independent, domain-level fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DomainField {
    DomainId,
    DomainName,
    DomainStatus,
    DomainDnssec,
    WhoisServer,
    NameServers,
    CreatedDate,
    UpdatedDate,
    ExpiredDate,
    ReferralUrl,
}

impl DomainField {
    pub const ALL: [DomainField; 10] = [
        DomainField::DomainId,
        DomainField::DomainName,
        DomainField::DomainStatus,
        DomainField::DomainDnssec,
        DomainField::WhoisServer,
        DomainField::NameServers,
        DomainField::CreatedDate,
        DomainField::UpdatedDate,
        DomainField::ExpiredDate,
        DomainField::ReferralUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DomainField::DomainId => "domain_id",
            DomainField::DomainName => "domain_name",
            DomainField::DomainStatus => "domain_status",
            DomainField::DomainDnssec => "domain_dnssec",
            DomainField::WhoisServer => "whois_server",
            DomainField::NameServers => "name_servers",
            DomainField::CreatedDate => "created_date",
            DomainField::UpdatedDate => "updated_date",
            DomainField::ExpiredDate => "expired_date",
            DomainField::ReferralUrl => "referral_url",
        }
    }
}

/// A canonical field key: either a domain-level field or `{role}_{attribute}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CanonicalKey {
    Domain(DomainField),
    Contact(Role, Attribute),
}

impl CanonicalKey {
    /// Shorthand for a registrant-family key.
    pub const fn registrant(attribute: Attribute) -> Self {
        CanonicalKey::Contact(Role::Registrant, attribute)
    }

    /// Every key in the closed set, domain fields first.
    pub fn all() -> impl Iterator<Item = CanonicalKey> {
        DomainField::ALL.into_iter().map(CanonicalKey::Domain).chain(
            Role::ALL.into_iter().flat_map(|role| {
                Attribute::ALL
                    .into_iter()
                    .map(move |attr| CanonicalKey::Contact(role, attr))
            }),
        )
    }

    pub fn role(&self) -> Option<Role> {
        match self {
            CanonicalKey::Domain(_) => None,
            CanonicalKey::Contact(role, _) => Some(*role),
        }
    }

    /// Moves a contact key to another role; domain keys are returned as-is.
    pub fn with_role(self, role: Role) -> Self {
        match self {
            CanonicalKey::Domain(_) => self,
            CanonicalKey::Contact(_, attr) => CanonicalKey::Contact(role, attr),
        }
    }

    /// Keys that may carry several values in one response.
    pub fn is_multi_valued(&self) -> bool {
        matches!(
            self,
            CanonicalKey::Domain(DomainField::NameServers)
                | CanonicalKey::Domain(DomainField::DomainStatus)
        )
    }
}

impl From<DomainField> for CanonicalKey {
    fn from(field: DomainField) -> Self {
        CanonicalKey::Domain(field)
    }
}

impl fmt::Display for CanonicalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalKey::Domain(field) => f.write_str(field.as_str()),
            CanonicalKey::Contact(role, attr) => write!(f, "{}_{}", role, attr.as_str()),
        }
    }
}

impl FromStr for CanonicalKey {
    type Err = WhoisKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(field) = DomainField::ALL.into_iter().find(|f| f.as_str() == s) {
            return Ok(CanonicalKey::Domain(field));
        }

        for role in Role::ALL {
            let Some(rest) = s
                .strip_prefix(role.as_str())
                .and_then(|rest| rest.strip_prefix('_'))
            else {
                continue;
            };
            if let Some(attr) = Attribute::ALL.into_iter().find(|a| a.as_str() == rest) {
                return Ok(CanonicalKey::Contact(role, attr));
            }
        }

        Err(WhoisKeyError::UnknownKey(s.to_string()))
    }
}

impl Serialize for CanonicalKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CanonicalKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_set_size() {
        assert_eq!(CanonicalKey::all().count(), 10 + 4 * 13);
    }

    #[test]
    fn test_display_and_parse_agree() {
        for key in CanonicalKey::all() {
            let name = key.to_string();
            assert_eq!(name.parse::<CanonicalKey>().unwrap(), key, "{name}");
        }
    }

    #[test]
    fn test_contact_key_names() {
        assert_eq!(
            CanonicalKey::Contact(Role::Admin, Attribute::StateProvince).to_string(),
            "admin_state_province"
        );
        assert_eq!(
            CanonicalKey::registrant(Attribute::FaxExt).to_string(),
            "registrant_fax_ext"
        );
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!("registrar_name".parse::<CanonicalKey>().is_err());
        assert!("admin_".parse::<CanonicalKey>().is_err());
        assert!("".parse::<CanonicalKey>().is_err());
    }

    #[test]
    fn test_role_from_str_accepts_synonyms() {
        assert_eq!("Administrative".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("technical".parse::<Role>().unwrap(), Role::Tech);
        assert_eq!("bill".parse::<Role>().unwrap(), Role::Billing);
        assert_eq!("registrant".parse::<Role>().unwrap(), Role::Registrant);
        assert!("owner".parse::<Role>().is_err());
    }

    #[test]
    fn test_with_role() {
        let key = CanonicalKey::registrant(Attribute::Email);
        assert_eq!(
            key.with_role(Role::Billing),
            CanonicalKey::Contact(Role::Billing, Attribute::Email)
        );
        let ns = CanonicalKey::Domain(DomainField::NameServers);
        assert_eq!(ns.with_role(Role::Tech), ns);
    }

    #[test]
    fn test_serde_uses_snake_case_names() {
        let key = CanonicalKey::Contact(Role::Tech, Attribute::PhoneExt);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"tech_phone_ext\"");
        let back: CanonicalKey = serde_json::from_str("\"expired_date\"").unwrap();
        assert_eq!(back, CanonicalKey::Domain(DomainField::ExpiredDate));
        assert!(serde_json::from_str::<CanonicalKey>("\"nope\"").is_err());
    }
}
