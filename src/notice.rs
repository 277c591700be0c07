//! Canonical notice produced from an exchange record.
//!
//! A [`Notice`] serializes to a flat JSON object:
//!
//! ```json
//! {
//!   "id": "sudoc123456789",
//!   "genre": "book",
//!   "publication_date": "2004-01-01T00:00:00",
//!   "title": "Histoire : essai",
//!   "authors": [{"role": "author", "last_name": "Bloch", "full_name": "Bloch"}],
//!   "external_ids": [{"id_type": "sudoc", "id_value": "123456789"}],
//!   "thematics": [],
//!   "source": {},
//!   "persons_identified": false,
//!   "detected_countries": ["fr"],
//!   "data_sources": ["sudoc"]
//! }
//! ```
//!
//! `doi` and `summary` are omitted when absent.

use crate::agents::Agent;
use crate::error::Result;
use crate::genre::Genre;
use crate::identifiers::ExternalId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Normalized bibliographic notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// `doi<doi>` or `<source prefix><catalog id>`
    pub id: String,
    /// Lower-cased DOI
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    /// Genre
    pub genre: Genre,
    /// Publication date, or the configured sentinel
    pub publication_date: NaiveDateTime,
    /// Main title, optionally followed by `" : " + subtitle`
    pub title: String,
    /// Authors and contributors
    pub authors: Vec<Agent>,
    /// Catalog id first, then ISBN, EAN and WorldCat numbers
    pub external_ids: Vec<ExternalId>,
    /// Subject headings
    pub thematics: Vec<Thematic>,
    /// Abstract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Publisher and host publication
    pub source: Source,
    /// Whether any author is linked to an authority record
    pub persons_identified: bool,
    /// Fixed context metadata
    pub detected_countries: Vec<String>,
    /// Fixed context metadata
    pub data_sources: Vec<String>,
}

/// A topical subject heading (606).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thematic {
    /// Authority record id (`$3`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Subject system (`$2`, e.g. "rameau")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Heading (`$a`)
    pub fr_label: String,
}

/// Publisher and host publication of a notice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Publishers joined with `;`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    /// ISSN of the host journal
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_issns: Option<Vec<String>>,
    /// Title of the host publication
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_title: Option<String>,
}

impl Notice {
    /// Serialize to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serialize to a compact JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
