//! Notice assembly: the single entry point from exchange record to notice.
//!
//! [`assemble`] runs independent extraction steps over one [`RawRecord`]; each
//! step fills its own part of the notice and reads only the record, the
//! catalog id and the configuration. Assembly never filters: callers combine
//! it with [`crate::filter::should_exclude`] to decide publication.
//!
//! Field mapping:
//!
//! | Notice key | Source |
//! |---|---|
//! | `doi`, `id` | 017$a |
//! | `genre` | 328$b, 008/0 |
//! | `publication_date` | 210$d, 100$a, 940$a, 033$d |
//! | `title` | 200$a, 200$e |
//! | `authors` | 700, 701, 702 |
//! | `external_ids` | catalog id, 010$a, 073$a, 035$a |
//! | `thematics` | 606$3, 606$2, 606$a |
//! | `summary` | 330$a |
//! | `source` | 210$c (or 214$c), 461$x, 461$t |

use crate::agents::extract_agents;
use crate::config::NoticeConfig;
use crate::dates::resolve_publication_date;
use crate::error::Result;
use crate::genre::classify;
use crate::identifiers::{external_ids, notice_id, resolve_doi};
use crate::notice::{Notice, Source, Thematic};
use crate::record::RawRecord;
use tracing::{debug, warn};

/// Parse a Sudoc XML document and assemble its notice.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{parse_notice, NoticeConfig};
///
/// let xml = r#"<record>
///   <controlfield tag="008">Aax3</controlfield>
///   <datafield tag="200" ind1="1" ind2=" ">
///     <subfield code="a">Histoire</subfield>
///     <subfield code="e">essai</subfield>
///   </datafield>
/// </record>"#;
///
/// let notice = parse_notice("123456789", xml, &NoticeConfig::default())?;
/// assert_eq!(notice.id, "sudoc123456789");
/// assert_eq!(notice.title, "Histoire : essai");
/// # Ok::<(), sudoc_notice::NoticeError>(())
/// ```
///
/// # Errors
///
/// Returns [`crate::NoticeError::MalformedDocument`] when the document is not
/// well-formed XML. An empty or field-less document is valid and yields a
/// notice of defaults.
pub fn parse_notice(catalog_id: &str, xml: &str, config: &NoticeConfig) -> Result<Notice> {
    let record = RawRecord::from_xml(xml)?;
    Ok(assemble(catalog_id, &record, config))
}

/// Like [`parse_notice`], but a malformed document yields the notice of an
/// empty record (empty title, sentinel date, empty collections).
#[must_use]
pub fn parse_notice_lenient(catalog_id: &str, xml: &str, config: &NoticeConfig) -> Notice {
    let record = RawRecord::from_xml(xml).unwrap_or_else(|err| {
        warn!(catalog_id, error = %err, "malformed document, assembling defaults");
        RawRecord::new()
    });
    assemble(catalog_id, &record, config)
}

/// Assemble the notice of an already parsed record.
#[must_use]
pub fn assemble(catalog_id: &str, record: &RawRecord, config: &NoticeConfig) -> Notice {
    let doi = resolve_doi(record);
    let id = notice_id(doi.as_deref(), catalog_id, &config.source_prefix);
    let agents = extract_agents(record);

    let notice = Notice {
        id,
        doi,
        genre: classify(record, config.thesis_genre),
        publication_date: resolve_publication_date(record, config.date_sentinel),
        title: compose_title(record),
        authors: agents.agents,
        external_ids: external_ids(record, catalog_id, &config.source_prefix),
        thematics: extract_thematics(record),
        summary: extract_summary(record),
        source: compose_source(record),
        persons_identified: agents.persons_identified,
        detected_countries: config.detected_countries.clone(),
        data_sources: config.data_sources.clone(),
    };

    debug!(catalog_id, id = %notice.id, genre = %notice.genre, "notice assembled");
    notice
}

/// 200$a, followed by `" : " + 200$e` when a non-empty subtitle exists; trimmed.
#[must_use]
pub fn compose_title(record: &RawRecord) -> String {
    let Some(field) = record.get_field("200") else {
        return String::new();
    };
    let mut title = field.get_subfield('a').unwrap_or_default().to_string();
    if let Some(subtitle) = field.get_subfield('e').filter(|s| !s.is_empty()) {
        title.push_str(" : ");
        title.push_str(subtitle);
    }
    title.trim().to_string()
}

/// Topical subjects from every 606 field; a heading without `$a` is dropped.
#[must_use]
pub fn extract_thematics(record: &RawRecord) -> Vec<Thematic> {
    record
        .fields_by_tag("606")
        .filter_map(|field| {
            let fr_label = field.get_subfield('a')?;
            Some(Thematic {
                code: field.get_subfield('3').map(str::to_string),
                reference: field.get_subfield('2').map(str::to_string),
                fr_label: fr_label.to_string(),
            })
        })
        .collect()
}

/// Abstract from 330$a.
#[must_use]
pub fn extract_summary(record: &RawRecord) -> Option<String> {
    record.subfield("330", 'a').map(str::to_string)
}

/// Publisher and host publication.
///
/// Publishers are every `$c` of the first 210 field joined with `;`, or of the
/// first 214 field when the record has no 210. The joined text is kept only
/// when longer than one character. ISSN and title of the host publication
/// come from the first 461 field.
#[must_use]
pub fn compose_source(record: &RawRecord) -> Source {
    let publisher = record
        .get_field("210")
        .or_else(|| record.get_field("214"))
        .map(|field| field.subfields_by_code('c').collect::<Vec<_>>().join(";"))
        .filter(|joined| joined.chars().count() > 1);

    // The host publication is read whether or not the record has a 210.
    let host = record.get_field("461");

    Source {
        publisher,
        journal_issns: host
            .and_then(|field| field.get_subfield('x'))
            .map(|issn| vec![issn.to_string()]),
        source_title: host
            .and_then(|field| field.get_subfield('t'))
            .map(str::to_string),
    }
}
