//! Built-in label rules.
//!
//! Keys are stored in normalized form. Contact rules are written for the
//! registrant only; admin, tech and billing variants are derived from them
//! when the table is built. New registry wordings go in as new lines.

use crate::key::Attribute::*;
use crate::key::CanonicalKey::{self, Domain};
use crate::key::DomainField::*;

const fn registrant(attribute: crate::key::Attribute) -> CanonicalKey {
    CanonicalKey::registrant(attribute)
}

pub(crate) static BUILTIN_RULES: &[(&str, CanonicalKey)] = &[
    ("id", Domain(DomainId)),
    ("roid", Domain(DomainId)),
    ("domain id", Domain(DomainId)),
    ("registry domain id", Domain(DomainId)),

    ("domain", Domain(DomainName)),
    ("domain name", Domain(DomainName)),

    ("status", Domain(DomainStatus)),
    ("state", Domain(DomainStatus)),
    ("domain status", Domain(DomainStatus)),
    ("registration status", Domain(DomainStatus)),
    ("query status", Domain(DomainStatus)),

    ("dnssec", Domain(DomainDnssec)),
    ("domain dnssec", Domain(DomainDnssec)),
    ("registrar dnssec", Domain(DomainDnssec)),
    ("signing key", Domain(DomainDnssec)),
    ("domain signed", Domain(DomainDnssec)),

    ("whois", Domain(WhoisServer)),
    ("whois server", Domain(WhoisServer)),
    ("registrar whois server", Domain(WhoisServer)),

    ("nserver", Domain(NameServers)),
    ("name server", Domain(NameServers)),
    ("name servers", Domain(NameServers)),
    ("nameserver", Domain(NameServers)),
    ("nameservers", Domain(NameServers)),
    ("name servers information", Domain(NameServers)),
    ("host name", Domain(NameServers)),
    ("domain nameservers", Domain(NameServers)),
    ("domain name servers", Domain(NameServers)),
    ("domain servers in listed order", Domain(NameServers)),

    ("created", Domain(CreatedDate)),
    ("registered", Domain(CreatedDate)),
    ("created on", Domain(CreatedDate)),
    ("create date", Domain(CreatedDate)),
    ("created date", Domain(CreatedDate)),
    ("creation date", Domain(CreatedDate)),
    ("domain registration date", Domain(CreatedDate)),
    ("registration date", Domain(CreatedDate)),
    ("domain create date", Domain(CreatedDate)),
    ("domain name commencement date", Domain(CreatedDate)),
    ("registered date", Domain(CreatedDate)),
    ("registered on", Domain(CreatedDate)),
    ("registration time", Domain(CreatedDate)),
    ("first registration date", Domain(CreatedDate)),
    ("domain record activated", Domain(CreatedDate)),
    ("record created on", Domain(CreatedDate)),
    ("domain registered", Domain(CreatedDate)),

    ("modified", Domain(UpdatedDate)),
    ("changed", Domain(UpdatedDate)),
    ("update date", Domain(UpdatedDate)),
    ("updated date", Domain(UpdatedDate)),
    ("updated on", Domain(UpdatedDate)),
    ("last update", Domain(UpdatedDate)),
    ("last updated", Domain(UpdatedDate)),
    ("last updated on", Domain(UpdatedDate)),
    ("last modified", Domain(UpdatedDate)),
    ("last updated date", Domain(UpdatedDate)),
    ("domain last updated date", Domain(UpdatedDate)),
    ("domain record last updated", Domain(UpdatedDate)),
    ("domain datelastmodified", Domain(UpdatedDate)),

    ("expire", Domain(ExpiredDate)),
    ("expires", Domain(ExpiredDate)),
    ("expires on", Domain(ExpiredDate)),
    ("paid till", Domain(ExpiredDate)),
    ("expire date", Domain(ExpiredDate)),
    ("expired date", Domain(ExpiredDate)),
    ("expiration date", Domain(ExpiredDate)),
    ("expiration on", Domain(ExpiredDate)),
    ("registrar registration expiration date", Domain(ExpiredDate)),
    ("domain expiration date", Domain(ExpiredDate)),
    ("expiry date", Domain(ExpiredDate)),
    ("expiration time", Domain(ExpiredDate)),
    ("domain expires", Domain(ExpiredDate)),
    ("record expires on", Domain(ExpiredDate)),
    ("record will expire on", Domain(ExpiredDate)),
    ("registry expiry date", Domain(ExpiredDate)),

    ("registrar www", Domain(ReferralUrl)),
    ("referral url", Domain(ReferralUrl)),
    ("registrar url", Domain(ReferralUrl)),
    ("registrar web", Domain(ReferralUrl)),
    ("registrar website", Domain(ReferralUrl)),
    ("registration service url", Domain(ReferralUrl)),

    ("registrant c", registrant(Id)),
    ("registrant id", registrant(Id)),
    ("registrant iana id", registrant(Id)),
    ("registrant contact id", registrant(Id)),
    ("registrant-c", registrant(Id)),
    ("registry registrant id", registrant(Id)),

    ("registrant name", registrant(Name)),
    ("registrant person", registrant(Name)),
    ("registrant contact", registrant(Name)),
    ("registrant contact name", registrant(Name)),
    ("registrant given name", registrant(Name)),
    ("registrant holder name", registrant(Name)),
    ("registrant holder english name", registrant(Name)),
    ("registrant service provider", registrant(Name)),
    ("registrant", registrant(Name)),

    ("registrant org", registrant(Organization)),
    ("registrant organization", registrant(Organization)),
    ("registrant contact organization", registrant(Organization)),
    ("registrant organisation", registrant(Organization)),
    ("registrant contact organisation", registrant(Organization)),
    ("registrant company name", registrant(Organization)),
    ("registrant company english name", registrant(Organization)),

    ("registrant address", registrant(Street)),
    ("registrant address1", registrant(Street)),
    ("registrant street", registrant(Street)),
    ("registrant street1", registrant(Street)),
    ("registrant contact address", registrant(Street)),
    ("registrant contact address1", registrant(Street)),
    ("registrant contact street", registrant(Street)),
    ("registrant contact street1", registrant(Street)),
    ("registrant s address", registrant(Street)),
    ("registrant s address1", registrant(Street)),
    ("registrant postal address", registrant(Street)),
    ("registrant postal address1", registrant(Street)),
    ("registrant's address", registrant(Street)),
    ("registrant's address1", registrant(Street)),
    ("registrant address2", registrant(Street)),
    ("registrant address3", registrant(Street)),
    ("registrant street2", registrant(Street)),
    ("registrant street3", registrant(Street)),

    ("registrant city", registrant(City)),
    ("registrant contact city", registrant(City)),

    ("registrant state province", registrant(StateProvince)),
    ("registrant contact state province", registrant(StateProvince)),
    ("registrant state/province", registrant(StateProvince)),
    ("registrant contact state/province", registrant(StateProvince)),

    ("registrant zipcode", registrant(PostalCode)),
    ("registrant zip code", registrant(PostalCode)),
    ("registrant postal code", registrant(PostalCode)),
    ("registrant contact postal code", registrant(PostalCode)),
    ("registrant postalcode", registrant(PostalCode)),

    ("registrant country", registrant(Country)),
    ("registrant country economy", registrant(Country)),
    ("registrant contact country", registrant(Country)),
    ("registrant country code", registrant(Country)),
    ("registrant countrycode", registrant(Country)),

    ("registrant phone", registrant(Phone)),
    ("registrant phone number", registrant(Phone)),
    ("registrant contact phone", registrant(Phone)),
    ("registrant contact phone number", registrant(Phone)),
    ("registrant abuse contact phone", registrant(Phone)),

    ("registrant phone ext", registrant(PhoneExt)),
    ("registrant contact phone ext", registrant(PhoneExt)),

    ("registrant fax", registrant(Fax)),
    ("registrant fax no", registrant(Fax)),
    ("registrant fax number", registrant(Fax)),
    ("registrant facsimile", registrant(Fax)),
    ("registrant facsimile number", registrant(Fax)),
    ("registrant contact fax", registrant(Fax)),
    ("registrant contact fax number", registrant(Fax)),
    ("registrant contact facsimile", registrant(Fax)),
    ("registrant contact facsimile number", registrant(Fax)),

    ("registrant fax ext", registrant(FaxExt)),
    ("registrant contact fax ext", registrant(FaxExt)),

    ("registrant mail", registrant(Email)),
    ("registrant email", registrant(Email)),
    ("registrant e mail", registrant(Email)),
    ("registrant contact mail", registrant(Email)),
    ("registrant contact email", registrant(Email)),
    ("registrant contact e mail", registrant(Email)),
    ("registrant abuse contact email", registrant(Email)),
    ("registrant e-mail", registrant(Email)),
    ("registrant contact e-mail", registrant(Email)),
];
