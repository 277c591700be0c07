//! Property tests for identifiers, dates and filtering.

mod common;

use common::{field, record, to_sudoc_xml};
use proptest::prelude::*;
use sudoc_notice::{
    assemble, dates, parse_notice, should_exclude, DateSentinel, ExclusionReason, NoticeConfig,
};

proptest! {
    #[test]
    fn prop_no_identifier_field_gives_catalog_id(catalog_id in "[0-9]{8}[0-9X]", title in "[A-Za-z ]{0,30}") {
        let r = record(Some("Aax3"), vec![field("200", &[('a', title.as_str())])]);
        let notice = parse_notice(&catalog_id, &to_sudoc_xml(&r), &NoticeConfig::default()).unwrap();
        prop_assert_eq!(notice.id, format!("sudoc{catalog_id}"));
        prop_assert!(notice.doi.is_none());
    }

    #[test]
    fn prop_doi_identifier(suffix in "[A-Za-z0-9./_-]{1,30}") {
        let doi = format!("10.{suffix}");
        let r = record(None, vec![field("017", &[('a', doi.as_str())])]);
        let notice = assemble("1", &r, &NoticeConfig::default());
        prop_assert_eq!(notice.id, format!("doi{}", doi.to_lowercase()));
        prop_assert_eq!(notice.doi, Some(doi.to_lowercase()));
    }

    #[test]
    fn prop_date_resolution_is_idempotent(text in "\\PC{0,20}", coded in "[0-9X.?]{0,12}") {
        let r = record(None, vec![field("210", &[('d', text.as_str())]), field("100", &[('a', coded.as_str())])]);
        let first = dates::resolve_publication_date(&r, DateSentinel::YearOne);
        let second = dates::resolve_publication_date(&r, DateSentinel::YearOne);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_year_tokens_resolve(year in 1000u32..3000) {
        let expected = Some(format!("{year}-01-01"));
        let parsed = dates::parse_date_text(&format!("impr. {year}")).map(|d| d.to_string());
        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn prop_filter_is_pure(edition in "\\PC{0,15}", document_type in "[A-Z][a-z]{0,3}") {
        let r = record(Some(document_type.as_str()), vec![field("205", &[('a', edition.as_str())])]);
        let config = NoticeConfig::default();
        prop_assert_eq!(should_exclude(&r, &config), should_exclude(&r, &config));
    }

    #[test]
    fn prop_no_edition_field_never_re_edition(document_type in "[A-Z][a-z]{0,3}", title in "\\PC{0,15}") {
        let r = record(Some(document_type.as_str()), vec![field("200", &[('a', title.as_str())])]);
        let decision = should_exclude(&r, &NoticeConfig::default());
        prop_assert!(!decision.fired.contains(&ExclusionReason::ReEdition));
    }
}
