//! Genre classification.
//!
//! The genre comes from the first character of control field 008 (document
//! type), unless the thesis note names a thesis type that has its own genre.

use crate::config::ThesisGenrePolicy;
use crate::record::RawRecord;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed genre vocabulary of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    /// Printed text (default for any unmapped document type)
    Book,
    /// Cartographic material
    Map,
    /// Audiovisual or electronic material
    Multimedia,
    /// No document type recorded
    Other,
    /// Professional (medicine, pharmacy, ...) thesis
    ExerciceThesis,
    /// Doctoral thesis
    DoctoralThesis,
}

impl Genre {
    /// Serialized name of the genre.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Book => "book",
            Self::Map => "map",
            Self::Multimedia => "multimedia",
            Self::Other => "other",
            Self::ExerciceThesis => "exercice_thesis",
            Self::DoctoralThesis => "doctoral_thesis",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Thesis-type labels (328$b, lower-cased) of professional theses.
///
/// Both apostrophes and the Latin-1-misdecoded accent occur in catalog data.
pub(crate) const EXERCICE_THESIS_LABELS: [&str; 4] = [
    "thèse d'exercice",
    "thèse d’exercice",
    "thã¨se d'exercice",
    "these d'exercice",
];

/// Thesis-type labels (328$b, lower-cased) of doctoral theses.
pub(crate) const DOCTORAL_THESIS_LABELS: [&str; 3] = [
    "thèse de doctorat",
    "thã¨se de doctorat",
    "these de doctorat",
];

/// Lower-cased, trimmed thesis type from the first thesis note (328$b).
pub(crate) fn thesis_type(record: &RawRecord) -> Option<String> {
    record
        .subfield("328", 'b')
        .map(|label| label.trim().to_lowercase())
}

/// Map an 008 document-type character to a genre.
#[must_use]
pub fn genre_for_document_type(code: char) -> Genre {
    match code.to_ascii_lowercase() {
        'k' => Genre::Map,
        'b' | 'z' => Genre::Multimedia,
        _ => Genre::Book,
    }
}

/// Classify a record.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{genre, Genre, RawRecord, ThesisGenrePolicy};
///
/// let record = RawRecord::builder().control_field_str("008", "km").build();
/// assert_eq!(genre::classify(&record, ThesisGenrePolicy::default()), Genre::Map);
///
/// let empty = RawRecord::new();
/// assert_eq!(genre::classify(&empty, ThesisGenrePolicy::default()), Genre::Other);
/// ```
#[must_use]
pub fn classify(record: &RawRecord, policy: ThesisGenrePolicy) -> Genre {
    if let Some(genre) = thesis_type(record).and_then(|label| thesis_genre(&label, policy)) {
        return genre;
    }

    record
        .get_control_field("008")
        .and_then(|value| value.chars().next())
        .map_or(Genre::Other, genre_for_document_type)
}

fn thesis_genre(label: &str, policy: ThesisGenrePolicy) -> Option<Genre> {
    if EXERCICE_THESIS_LABELS.contains(&label) {
        return Some(Genre::ExerciceThesis);
    }
    match policy {
        ThesisGenrePolicy::DoctoralAware if DOCTORAL_THESIS_LABELS.contains(&label) => {
            Some(Genre::DoctoralThesis)
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    fn with_008(value: &str) -> RawRecord {
        RawRecord::builder().control_field_str("008", value).build()
    }

    fn thesis(label: &str) -> RawRecord {
        RawRecord::builder()
            .control_field_str("008", "Aa")
            .field(Field::builder("328", ' ', '0').subfield_str('b', label).build())
            .build()
    }

    #[test]
    fn test_document_type_lookup() {
        let policy = ThesisGenrePolicy::default();
        assert_eq!(classify(&with_008("am"), policy), Genre::Book);
        assert_eq!(classify(&with_008("km"), policy), Genre::Map);
        assert_eq!(classify(&with_008("Kax3"), policy), Genre::Map);
        assert_eq!(classify(&with_008("Bax3"), policy), Genre::Multimedia);
        assert_eq!(classify(&with_008("z"), policy), Genre::Multimedia);
        assert_eq!(classify(&with_008("Oax3"), policy), Genre::Book);
    }

    #[test]
    fn test_absent_or_empty_control_field_is_other() {
        let policy = ThesisGenrePolicy::default();
        assert_eq!(classify(&RawRecord::new(), policy), Genre::Other);
        assert_eq!(classify(&with_008(""), policy), Genre::Other);
    }

    #[test]
    fn test_exercice_thesis_override() {
        for policy in [ThesisGenrePolicy::ExerciceOnly, ThesisGenrePolicy::DoctoralAware] {
            assert_eq!(classify(&thesis("Thèse d'exercice"), policy), Genre::ExerciceThesis);
            assert_eq!(classify(&thesis(" THÈSE D’EXERCICE "), policy), Genre::ExerciceThesis);
        }
    }

    #[test]
    fn test_doctoral_thesis_depends_on_policy() {
        let record = thesis("Thèse de doctorat");
        assert_eq!(
            classify(&record, ThesisGenrePolicy::DoctoralAware),
            Genre::DoctoralThesis
        );
        assert_eq!(classify(&record, ThesisGenrePolicy::ExerciceOnly), Genre::Book);
    }

    #[test]
    fn test_unrecognized_thesis_label_falls_through() {
        assert_eq!(
            classify(&thesis("Mémoire de master"), ThesisGenrePolicy::default()),
            Genre::Book
        );
    }

    #[test]
    fn test_genre_serialization() {
        assert_eq!(
            serde_json::to_string(&Genre::ExerciceThesis).unwrap(),
            "\"exercice_thesis\""
        );
        assert_eq!(Genre::Multimedia.to_string(), "multimedia");
    }
}
