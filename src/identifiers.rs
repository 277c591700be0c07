//! Identifier resolution: DOI, notice id and external identifiers.
//!
//! - DOI from the 017 fields (other standard identifiers), subfield `a`
//! - ISBN from 010$a, EAN from 073$a
//! - WorldCat numbers from 035$a values carrying the `(OCoLC)` marker

use crate::record::RawRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every DOI starts with.
const DOI_PREFIX: &str = "10.";

/// Marker of an OCLC control number in 035$a.
const OCLC_MARKER: &str = "(OCoLC)";

/// Kind of an external identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdType {
    /// International Standard Book Number
    Isbn,
    /// International Article Number
    Ean,
    /// OCLC WorldCat control number
    Worldcat,
    /// Catalog record id (`sudoc` by default, see [`crate::NoticeConfig::source_prefix`]).
    /// Serialized as the bare prefix.
    #[serde(untagged)]
    Catalog(String),
}

impl fmt::Display for IdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isbn => write!(f, "isbn"),
            Self::Ean => write!(f, "ean"),
            Self::Worldcat => write!(f, "worldcat"),
            Self::Catalog(prefix) => write!(f, "{prefix}"),
        }
    }
}

/// An identifier of the same resource in another system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalId {
    /// Identifier kind
    pub id_type: IdType,
    /// Identifier value
    pub id_value: String,
}

impl ExternalId {
    fn new(id_type: IdType, id_value: impl Into<String>) -> Self {
        ExternalId {
            id_type,
            id_value: id_value.into(),
        }
    }
}

/// Resolve the record's DOI.
///
/// Every 017$a starting with `10.` is a candidate and the last one in document
/// order wins. The result is trimmed and lower-cased. A 017 field without
/// subfield `a` is skipped.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{identifiers, Field, RawRecord};
///
/// let record = RawRecord::builder()
///     .field(Field::builder("017", '7', '0').subfield_str('a', "10.3917/ABC.001 ").build())
///     .build();
/// assert_eq!(identifiers::resolve_doi(&record).as_deref(), Some("10.3917/abc.001"));
/// ```
#[must_use]
pub fn resolve_doi(record: &RawRecord) -> Option<String> {
    record
        .fields_by_tag("017")
        .filter_map(|field| field.get_subfield('a'))
        .filter(|value| value.starts_with(DOI_PREFIX))
        .last()
        .map(|doi| doi.trim().to_lowercase())
}

/// Compose the canonical notice id: `doi<doi>` or `<prefix><catalog_id>`.
#[must_use]
pub fn notice_id(doi: Option<&str>, catalog_id: &str, prefix: &str) -> String {
    match doi {
        Some(doi) => format!("doi{doi}"),
        None => format!("{prefix}{catalog_id}"),
    }
}

/// Collect external identifiers.
///
/// Order is fixed: catalog id, ISBN, EAN, then WorldCat numbers in document
/// order. Only the first 010 and 073 fields are read.
#[must_use]
pub fn external_ids(record: &RawRecord, catalog_id: &str, prefix: &str) -> Vec<ExternalId> {
    let mut ids = vec![ExternalId::new(IdType::Catalog(prefix.to_string()), catalog_id)];

    if let Some(isbn) = record.subfield("010", 'a') {
        ids.push(ExternalId::new(IdType::Isbn, isbn));
    }
    if let Some(ean) = record.subfield("073", 'a') {
        ids.push(ExternalId::new(IdType::Ean, ean));
    }

    ids.extend(
        record
            .fields_by_tag("035")
            .filter_map(|field| field.get_subfield('a'))
            .filter(|value| value.contains(OCLC_MARKER))
            .map(|value| ExternalId::new(IdType::Worldcat, value.replace(OCLC_MARKER, "").trim())),
    );

    ids
}
