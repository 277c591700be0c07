//! Configuration and extraction policies.
//!
//! This module provides [`NoticeConfig`], which carries the fixed context
//! metadata stamped on every notice together with the named policies used at
//! decision points whose rules changed over time (date sentinel, thesis genre,
//! thesis exclusion). Each policy is a small enum; the `Default` variant is the
//! most recent rule.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Publication date emitted when no candidate source yields a valid date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateSentinel {
    /// `0001-01-01T00:00:00`
    #[default]
    YearOne,
    /// `1900-01-01T00:00:00` (historical rule)
    Year1900,
}

impl DateSentinel {
    /// Year used by this sentinel.
    #[must_use]
    pub const fn year(self) -> i32 {
        match self {
            Self::YearOne => 1,
            Self::Year1900 => 1900,
        }
    }

    /// The sentinel as a date-time at midnight, January 1st.
    #[must_use]
    pub fn datetime(self) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(self.year(), 1, 1)
            .unwrap_or(NaiveDate::MIN)
            .and_hms_opt(0, 0, 0)
            .unwrap_or(NaiveDateTime::MIN)
    }
}

impl fmt::Display for DateSentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::YearOne => write!(f, "year-one"),
            Self::Year1900 => write!(f, "year-1900"),
        }
    }
}

/// Which thesis-type labels override the document-type genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThesisGenrePolicy {
    /// Only professional ("exercice") theses get a dedicated genre.
    ExerciceOnly,
    /// Professional theses map to `exercice_thesis`, doctoral theses to
    /// `doctoral_thesis`.
    #[default]
    DoctoralAware,
}

impl fmt::Display for ThesisGenrePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExerciceOnly => write!(f, "exercice-only"),
            Self::DoctoralAware => write!(f, "doctoral-aware"),
        }
    }
}

/// When a record counts as a thesis for exclusion purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThesisFilterPolicy {
    /// The thesis note's type (328$b) names a doctoral thesis and the note
    /// carries no reproduction disclaimer (328$z).
    #[default]
    Labelled,
    /// Any thesis number (029$b) is present, whatever its value (historical rule).
    AnyAcademicLevel,
}

impl fmt::Display for ThesisFilterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Labelled => write!(f, "labelled"),
            Self::AnyAcademicLevel => write!(f, "any-academic-level"),
        }
    }
}

/// Configuration for notice assembly and filtering.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{DateSentinel, NoticeConfig};
///
/// let config = NoticeConfig {
///     date_sentinel: DateSentinel::Year1900,
///     ..Default::default()
/// };
/// assert_eq!(config.source_prefix, "sudoc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeConfig {
    /// Prefix of the notice id when no DOI is found, also the `id_type` of the
    /// catalog id in `external_ids`.
    pub source_prefix: String,
    /// Value of the notice's `detected_countries`.
    pub detected_countries: Vec<String>,
    /// Value of the notice's `data_sources`.
    pub data_sources: Vec<String>,
    /// Publication date used when nothing can be resolved.
    pub date_sentinel: DateSentinel,
    /// Thesis labels that override the genre.
    pub thesis_genre: ThesisGenrePolicy,
    /// Rule for the thesis exclusion predicate.
    pub thesis_filter: ThesisFilterPolicy,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        NoticeConfig {
            source_prefix: "sudoc".to_string(),
            detected_countries: vec!["fr".to_string()],
            data_sources: vec!["sudoc".to_string()],
            date_sentinel: DateSentinel::default(),
            thesis_genre: ThesisGenrePolicy::default(),
            thesis_filter: ThesisFilterPolicy::default(),
        }
    }
}

impl NoticeConfig {
    /// Load a configuration from a JSON object; absent keys keep their default.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid configuration object.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
