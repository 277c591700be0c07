//! Common test helpers and utilities shared across test suite.

use sudoc_notice::{Field, RawRecord};

/// Loads a Sudoc XML fixture from the test data directory.
#[allow(dead_code)]
pub fn load_fixture(filename: &str) -> String {
    let path = format!("tests/data/{filename}");
    std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"))
}

/// Builds a data field from `(code, value)` pairs.
#[allow(dead_code)]
pub fn field(tag: &str, subfields: &[(char, &str)]) -> Field {
    let mut field = Field::new(tag, ' ', ' ');
    for &(code, value) in subfields {
        field.add_subfield_str(code, value);
    }
    field
}

/// Builds a record from an optional 008 value and data fields.
#[allow(dead_code)]
pub fn record(document_type: Option<&str>, fields: Vec<Field>) -> RawRecord {
    let mut record = RawRecord::new();
    if let Some(value) = document_type {
        record.add_control_field_str("008", value);
    }
    for f in fields {
        record.add_field(f);
    }
    record
}

/// Serializes a record as a Sudoc XML document.
#[allow(dead_code)]
pub fn to_sudoc_xml(record: &RawRecord) -> String {
    record.to_xml().expect("record serializes to XML")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_helper() {
        let r = record(Some("Aax3"), vec![field("200", &[('a', "T")])]);
        assert_eq!(r.get_control_field("008"), Some("Aax3"));
        assert_eq!(r.subfield("200", 'a'), Some("T"));
    }

    #[test]
    fn test_to_sudoc_xml_parses_back() {
        let r = record(None, vec![field("330", &[('a', "A & B <c>")])]);
        let parsed = RawRecord::from_xml(&to_sudoc_xml(&r)).unwrap();
        assert_eq!(parsed.subfield("330", 'a'), Some("A & B <c>"));
    }
}
