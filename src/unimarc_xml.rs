//! Sudoc UNIMARC XML documents: parsing and writing.
//!
//! The catalog serves each record as a single `<record>` element:
//!
//! ```xml
//! <record>
//!   <leader>     cam0 22        450 </leader>
//!   <controlfield tag="001">123456789</controlfield>
//!   <controlfield tag="008">Aax3</controlfield>
//!   <datafield tag="200" ind1="1" ind2=" ">
//!     <subfield code="a">Histoire</subfield>
//!   </datafield>
//! </record>
//! ```
//!
//! Default-namespace (`<record xmlns="...">`) and prefix-namespace
//! (`<marc:record xmlns:marc="...">`) forms are accepted, as is a
//! `<collection>` wrapping at most one record. Structural gaps (no leader,
//! missing indicators, empty subfields) are tolerated. Any other root element,
//! or input that is not XML at all, is rejected.
//!
//! Text content is trimmed by the deserializer: leading and trailing
//! whitespace of leader, control field and subfield values is not preserved.

use crate::error::{NoticeError, Result};
use crate::record::{Field, RawRecord};
use lazy_static::lazy_static;
use quick_xml::de::from_str as xml_from_str;
use quick_xml::events::Event;
use quick_xml::se::to_string as xml_to_string;
use quick_xml::Reader;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// `<record>` element as served by the catalog.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename = "record")]
struct XmlRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    leader: Option<String>,
    #[serde(default)]
    controlfield: Vec<XmlControlField>,
    #[serde(default)]
    datafield: Vec<XmlDataField>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlControlField {
    #[serde(rename = "@tag", default)]
    tag: String,
    #[serde(rename = "$text", default)]
    value: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlDataField {
    #[serde(rename = "@tag", default)]
    tag: String,
    #[serde(rename = "@ind1", default)]
    ind1: String,
    #[serde(rename = "@ind2", default)]
    ind2: String,
    #[serde(default)]
    subfield: Vec<XmlSubfield>,
}

#[derive(Debug, Serialize, Deserialize)]
struct XmlSubfield {
    #[serde(rename = "@code", default)]
    code: String,
    #[serde(rename = "$text", default)]
    value: String,
}

/// `<collection>` wrapper around records.
#[derive(Debug, Deserialize)]
#[serde(rename = "collection")]
struct XmlCollection {
    #[serde(default, rename = "record")]
    records: Vec<XmlRecord>,
}

lazy_static! {
    static ref XMLNS_DECLARATION: Regex = Regex::new(r#"\s+xmlns(?::\w+)?="[^"]*""#)
        .expect("namespace declaration pattern is valid");
    static ref ELEMENT_PREFIX: Regex =
        Regex::new(r"<(/?)(\w+):").expect("element prefix pattern is valid");
}

/// Strip namespace declarations and element prefixes.
fn strip_namespaces(xml: &str) -> String {
    let stripped = XMLNS_DECLARATION.replace_all(xml, "");
    ELEMENT_PREFIX.replace_all(&stripped, "<$1").into_owned()
}

/// Name of the document's root element, `None` when there is no element.
fn root_element(xml: &str) -> Result<Option<String>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Start(start) | Event::Empty(start)) => {
                let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
                return Ok(Some(name));
            },
            Ok(Event::Eof) => return Ok(None),
            Ok(_) => {},
            Err(e) => {
                return Err(NoticeError::MalformedDocument(format!(
                    "Failed to read record XML: {e}"
                )))
            },
        }
    }
}

/// Parse a Sudoc XML document into a [`RawRecord`].
///
/// Empty or whitespace-only input yields an empty record, and so does an
/// empty `<collection>`.
///
/// # Errors
///
/// Returns [`NoticeError::MalformedDocument`] when the input is not
/// well-formed XML, when its root element is neither `record` nor
/// `collection`, or when a collection holds more than one record.
pub fn parse_record(xml: &str) -> Result<RawRecord> {
    if xml.trim().is_empty() {
        return Ok(RawRecord::new());
    }

    let cleaned = strip_namespaces(xml);
    match root_element(&cleaned)?.as_deref() {
        Some("record") => {
            let xml_record: XmlRecord = xml_from_str(&cleaned).map_err(|e| {
                NoticeError::MalformedDocument(format!("Failed to parse record XML: {e}"))
            })?;
            Ok(into_raw_record(xml_record))
        },
        Some("collection") => {
            let collection: XmlCollection = xml_from_str(&cleaned).map_err(|e| {
                NoticeError::MalformedDocument(format!("Failed to parse collection XML: {e}"))
            })?;
            let mut records = collection.records;
            if records.len() > 1 {
                return Err(NoticeError::MalformedDocument(format!(
                    "Collection holds {} records, expected one",
                    records.len()
                )));
            }
            Ok(records.pop().map_or_else(RawRecord::new, into_raw_record))
        },
        Some(other) => Err(NoticeError::MalformedDocument(format!(
            "Unexpected root element <{other}>, expected <record>"
        ))),
        None => Err(NoticeError::MalformedDocument(
            "Document has no root element".to_string(),
        )),
    }
}

fn into_raw_record(xml_record: XmlRecord) -> RawRecord {
    let mut record = RawRecord::new();
    record.leader = xml_record.leader;

    for cf in xml_record.controlfield {
        record.add_control_field(cf.tag, cf.value);
    }

    for df in xml_record.datafield {
        let ind1 = df.ind1.chars().next().unwrap_or(' ');
        let ind2 = df.ind2.chars().next().unwrap_or(' ');
        let mut field = Field::new(df.tag, ind1, ind2);

        for sf in df.subfield {
            // A subfield without a code cannot be addressed; drop it.
            if let Some(code) = sf.code.chars().next() {
                field.add_subfield(code, sf.value);
            }
        }

        record.add_field(field);
    }

    record
}

/// Write a [`RawRecord`] as a Sudoc `<record>` document.
///
/// Control fields come first, then data fields, each in record order. Text
/// and attribute values are escaped.
///
/// # Examples
///
/// ```
/// use sudoc_notice::{unimarc_xml, Field, RawRecord};
///
/// let record = RawRecord::builder()
///     .control_field_str("008", "Aax3")
///     .field(Field::builder("200", '1', ' ').subfield_str('a', "Guerre & paix").build())
///     .build();
/// let xml = unimarc_xml::record_to_xml(&record)?;
/// assert_eq!(RawRecord::from_xml(&xml)?, record);
/// # Ok::<(), sudoc_notice::NoticeError>(())
/// ```
///
/// # Errors
///
/// Returns [`NoticeError::XmlSerialization`] if the record cannot be written.
pub fn record_to_xml(record: &RawRecord) -> Result<String> {
    let xml_record = XmlRecord {
        leader: record.leader.clone(),
        controlfield: record
            .control_fields
            .iter()
            .map(|cf| XmlControlField {
                tag: cf.tag.clone(),
                value: cf.value.clone(),
            })
            .collect(),
        datafield: record
            .fields
            .iter()
            .map(|field| XmlDataField {
                tag: field.tag.clone(),
                ind1: field.indicator1.to_string(),
                ind2: field.indicator2.to_string(),
                subfield: field
                    .subfields
                    .iter()
                    .map(|sf| XmlSubfield {
                        code: sf.code.to_string(),
                        value: sf.value.clone(),
                    })
                    .collect(),
            })
            .collect(),
    };

    let body = xml_to_string(&xml_record).map_err(|e| {
        NoticeError::XmlSerialization(format!("Failed to serialize record XML: {e}"))
    })?;
    Ok(format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>{body}"))
}

impl RawRecord {
    /// Parse a Sudoc XML document. See [`parse_record`].
    ///
    /// # Errors
    ///
    /// Returns [`NoticeError::MalformedDocument`] on unparsable XML.
    pub fn from_xml(xml: &str) -> Result<Self> {
        parse_record(xml)
    }

    /// Write the record as a Sudoc XML document. See [`record_to_xml`].
    ///
    /// # Errors
    ///
    /// Returns [`NoticeError::XmlSerialization`] if the record cannot be written.
    pub fn to_xml(&self) -> Result<String> {
        record_to_xml(self)
    }
}
