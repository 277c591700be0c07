//! End-to-end batch: parse and filter in parallel, export accepted notices as
//! gzip JSON Lines on disk, read them back.

mod common;

use common::{field, load_fixture, record, to_sudoc_xml};
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::BufReader;
use sudoc_notice::parallel::parse_and_filter_batch_parallel;
use sudoc_notice::{jsonl, NoticeConfig};
use tempfile::TempDir;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_export_accepted_notices_to_gzip_jsonl() {
    init_logging();
    let map = record(Some("Kax3"), vec![field("200", &[('a', "Carte de France")])]);
    let reprint = record(Some("Aax3"), vec![field("205", &[('a', "2e éd.")])]);
    let batch = vec![
        ("010640096".to_string(), load_fixture("sudoc_book.xml")),
        ("2".to_string(), to_sudoc_xml(&map)),
        ("3".to_string(), to_sudoc_xml(&reprint)),
    ];

    let accepted: Vec<_> = parse_and_filter_batch_parallel(&batch, &NoticeConfig::default())
        .into_iter()
        .map(Result::unwrap)
        .filter(|(_, decision)| !decision.excluded)
        .map(|(notice, _)| notice)
        .collect();
    assert_eq!(accepted.len(), 1);

    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("parsed")).unwrap();
    let path = dir.path().join("parsed").join("sudoc_0.jsonl.gz");
    let written = jsonl::write_notices_gz(File::create(&path).unwrap(), &accepted).unwrap();
    assert_eq!(written, 1);

    let reader = BufReader::new(GzDecoder::new(File::open(&path).unwrap()));
    let restored = jsonl::read_notices(reader).unwrap();
    assert_eq!(restored, accepted);
    assert_eq!(restored[0].id, "doi10.3917/arco.bloch.1993.01");
}

#[test]
fn test_plain_jsonl_file_has_one_line_per_notice() {
    init_logging();
    let batch: Vec<_> = (0..5)
        .map(|i| {
            let r = record(Some("Aax3"), vec![field("200", &[('a', "Titre")])]);
            (i.to_string(), to_sudoc_xml(&r))
        })
        .collect();
    let notices: Vec<_> = parse_and_filter_batch_parallel(&batch, &NoticeConfig::default())
        .into_iter()
        .map(|result| result.unwrap().0)
        .collect();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notices.jsonl");
    jsonl::write_notices(File::create(&path).unwrap(), &notices).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text.lines().count(), 5);
    assert!(text.lines().all(|line| line.starts_with(r#"{"id":"sudoc"#)));
}
