pub mod colors;
pub mod error;
pub mod key;
pub mod normalize;
pub mod output;
pub mod record;
pub mod resolver;
pub mod segment;
pub mod table;

pub use error::{Result, TableError, WhoisKeyError};
pub use normalize::normalize;

pub use key::{Attribute, CanonicalKey, DomainField, Role};
pub use record::WhoisRecord;
pub use resolver::{resolve, FieldResolver, Resolution, ResolvedField};
pub use segment::{segment, LabelLine};
pub use table::{NormalizationTable, TableBuilder};

pub use output::{OutputFormat, OutputFormatter};
