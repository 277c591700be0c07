//! Inclusion/exclusion filter.
//!
//! A record is excluded from publication when any of three independent
//! predicates fires:
//!
//! - **re-edition**: the edition statement (205$a) abbreviates "édition"
//! - **non-text**: the document type (008) or a coded data field marks
//!   non-textual material
//! - **thesis**: the record describes a thesis, per [`ThesisFilterPolicy`]
//!
//! Every predicate is evaluated, so [`FilterDecision::fired`] lists all of
//! them; [`FilterDecision::reason`] is the first in the order above.

use crate::config::{NoticeConfig, ThesisFilterPolicy};
use crate::error::Result;
use crate::genre::{thesis_type, DOCTORAL_THESIS_LABELS};
use crate::record::{RawRecord, TagGroup};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Abbreviations of "édition" in 205$a, lower-cased.
///
/// Source data mixes UTF-8 and UTF-8 decoded as Latin-1, so each accented
/// form is listed in both encodings. The trailing period is part of each
/// marker: "2nd ed" or "2e éd, revue" do not match.
const EDITION_MARKERS: [&str; 3] = ["ed.", "éd.", "ã©d."];

/// 008 document types of non-textual material.
const NON_TEXT_DOCUMENT_TYPES: [char; 10] = ['B', 'G', 'I', 'K', 'L', 'M', 'N', 'P', 'V', 'Z'];

/// Why a record is excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExclusionReason {
    /// Not a first edition
    ReEdition,
    /// Non-textual medium
    NonText,
    /// Thesis
    Thesis,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReEdition => write!(f, "re_edition"),
            Self::NonText => write!(f, "non_text"),
            Self::Thesis => write!(f, "thesis"),
        }
    }
}

/// Outcome of [`should_exclude`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDecision {
    /// Whether the notice must not be published
    pub excluded: bool,
    /// First predicate that fired
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<ExclusionReason>,
    /// Every predicate that fired, in evaluation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fired: Vec<ExclusionReason>,
}

impl FilterDecision {
    fn from_fired(fired: Vec<ExclusionReason>) -> Self {
        FilterDecision {
            excluded: !fired.is_empty(),
            reason: fired.first().copied(),
            fired,
        }
    }
}

/// Whether the edition statement marks a re-edition.
#[must_use]
pub fn is_re_edition(record: &RawRecord) -> bool {
    let Some(edition) = record.subfield("205", 'a') else {
        return false;
    };
    let edition = edition.to_lowercase();
    let fired = EDITION_MARKERS.iter().any(|marker| edition.contains(marker));
    if fired {
        debug!(edition = %edition, "re-edition");
    }
    fired
}

/// Whether the record describes non-textual material.
///
/// Fires on a non-text 008 document type (case-insensitive) or on the mere
/// presence of any [`TagGroup::NonTextualMedium`] field.
#[must_use]
pub fn is_non_text(record: &RawRecord) -> bool {
    if let Some(document_type) = record
        .get_control_field("008")
        .and_then(|value| value.chars().next())
    {
        if NON_TEXT_DOCUMENT_TYPES.contains(&document_type.to_ascii_uppercase()) {
            debug!(%document_type, "non-text document type");
            return true;
        }
    }

    if let Some(field) = record.fields_in_group(TagGroup::NonTextualMedium).next() {
        debug!(tag = %field.tag, "non-text coded data field");
        return true;
    }
    false
}

/// Whether the record is a thesis under `policy`.
#[must_use]
pub fn is_thesis(record: &RawRecord, policy: ThesisFilterPolicy) -> bool {
    let fired = match policy {
        ThesisFilterPolicy::AnyAcademicLevel => record.subfield("029", 'b').is_some(),
        ThesisFilterPolicy::Labelled => {
            let doctoral = thesis_type(record)
                .is_some_and(|label| DOCTORAL_THESIS_LABELS.contains(&label.as_str()));
            let reproduction = record
                .get_field("328")
                .is_some_and(|field| field.has_subfield('z'));
            doctoral && !reproduction
        },
    };
    if fired {
        debug!(%policy, "thesis");
    }
    fired
}

/// Evaluate every exclusion predicate against a record.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{filter, ExclusionReason, Field, NoticeConfig, RawRecord};
///
/// let record = RawRecord::builder()
///     .field(Field::builder("205", ' ', ' ').subfield_str('a', "2e éd.").build())
///     .build();
/// let decision = filter::should_exclude(&record, &NoticeConfig::default());
/// assert!(decision.excluded);
/// assert_eq!(decision.reason, Some(ExclusionReason::ReEdition));
/// ```
#[must_use]
pub fn should_exclude(record: &RawRecord, config: &NoticeConfig) -> FilterDecision {
    let checks = [
        (ExclusionReason::ReEdition, is_re_edition(record)),
        (ExclusionReason::NonText, is_non_text(record)),
        (ExclusionReason::Thesis, is_thesis(record, config.thesis_filter)),
    ];

    FilterDecision::from_fired(
        checks
            .into_iter()
            .filter_map(|(reason, fired)| fired.then_some(reason))
            .collect(),
    )
}

/// Parse a Sudoc XML document and evaluate the filter on it.
///
/// # Errors
///
/// Returns [`crate::NoticeError::MalformedDocument`] on unparsable XML.
pub fn should_exclude_xml(xml: &str, config: &NoticeConfig) -> Result<FilterDecision> {
    let record = RawRecord::from_xml(xml)?;
    Ok(should_exclude(&record, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Field;

    fn edition(text: &str) -> RawRecord {
        RawRecord::builder()
            .field(Field::builder("205", ' ', ' ').subfield_str('a', text).build())
            .build()
    }

    fn thesis_note(label: &str, disclaimer: Option<&str>) -> RawRecord {
        let mut field = Field::builder("328", ' ', '0').subfield_str('b', label).build();
        if let Some(text) = disclaimer {
            field.add_subfield_str('z', text);
        }
        RawRecord::builder().field(field).build()
    }

    #[test]
    fn test_re_edition_markers() {
        assert!(is_re_edition(&edition("2e éd.")));
        assert!(is_re_edition(&edition("2e ed.")));
        assert!(is_re_edition(&edition("Nouvelle ÉD. revue")));
        assert!(is_re_edition(&edition("3e Ã©d.")));
        assert!(!is_re_edition(&edition("Version française")));
        assert!(!is_re_edition(&RawRecord::new()));
    }

    #[test]
    fn test_edition_markers_need_trailing_period() {
        assert!(!is_re_edition(&edition("2e éd, revue")));
        assert!(!is_re_edition(&edition("2nd ed")));
        assert!(!is_re_edition(&edition("Edited by the author")));
        assert!(is_re_edition(&edition("2nd ed., revised")));
    }

    #[test]
    fn test_edition_field_without_subfield_a() {
        let record = RawRecord::builder()
            .field(Field::builder("205", ' ', ' ').subfield_str('b', "2e éd.").build())
            .build();
        assert!(!is_re_edition(&record));
    }

    #[test]
    fn test_non_text_document_type() {
        let map = RawRecord::builder().control_field_str("008", "Kax3").build();
        let lower = RawRecord::builder().control_field_str("008", "gax3").build();
        let text = RawRecord::builder().control_field_str("008", "Aax3").build();
        assert!(is_non_text(&map));
        assert!(is_non_text(&lower));
        assert!(!is_non_text(&text));
    }

    #[test]
    fn test_non_text_field_presence() {
        let record = RawRecord::builder()
            .control_field_str("008", "Aax3")
            .field(Field::new("124", ' ', ' '))
            .build();
        assert!(is_non_text(&record));
    }

    #[test]
    fn test_thesis_labelled_policy() {
        let policy = ThesisFilterPolicy::Labelled;
        assert!(is_thesis(&thesis_note("Thèse de doctorat", None), policy));
        assert!(!is_thesis(
            &thesis_note("Thèse de doctorat", Some("Reproduction de")),
            policy
        ));
        assert!(!is_thesis(&thesis_note("Thèse d'exercice", None), policy));
        assert!(!is_thesis(&RawRecord::new(), policy));
    }

    #[test]
    fn test_thesis_any_academic_level_policy() {
        let record = RawRecord::builder()
            .field(Field::builder("029", ' ', ' ').subfield_str('b', "2004PA010001").build())
            .build();
        assert!(is_thesis(&record, ThesisFilterPolicy::AnyAcademicLevel));
        assert!(!is_thesis(&record, ThesisFilterPolicy::Labelled));
    }

    #[test]
    fn test_decision_lists_every_fired_predicate() {
        let record = RawRecord::builder()
            .control_field_str("008", "Bax3")
            .field(Field::builder("205", ' ', ' ').subfield_str('a', "2e éd.").build())
            .build();
        let decision = should_exclude(&record, &NoticeConfig::default());
        assert!(decision.excluded);
        assert_eq!(decision.reason, Some(ExclusionReason::ReEdition));
        assert_eq!(
            decision.fired,
            vec![ExclusionReason::ReEdition, ExclusionReason::NonText]
        );
    }

    #[test]
    fn test_plain_book_is_kept() {
        let record = RawRecord::builder().control_field_str("008", "Aax3").build();
        let decision = should_exclude(&record, &NoticeConfig::default());
        assert_eq!(decision, FilterDecision::default());
        assert_eq!(serde_json::to_string(&decision).unwrap(), r#"{"excluded":false}"#);
    }

    #[test]
    fn test_should_exclude_xml() {
        let xml = r#"<record><controlfield tag="008">Kax3</controlfield></record>"#;
        let decision = should_exclude_xml(xml, &NoticeConfig::default()).unwrap();
        assert_eq!(decision.reason, Some(ExclusionReason::NonText));
        assert!(should_exclude_xml("<record>", &NoticeConfig::default()).is_err());
    }
}
