use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;

use super::{open_source, rows};

const SAMPLE: &str = "id\tuser_id\tip\tcaller\taction\n\
                      1\tu1\t171.64.0.1\tindex\tshow_index_page\n\
                      2\tu2\t171.64.0.2\tfind_search\tsearch\n";

fn read_ids(source: Box<dyn std::io::Read>) -> Vec<String> {
    let mut reader = rows(source);
    reader
        .byte_records()
        .map(|record| {
            let record = record.unwrap();
            String::from_utf8_lossy(&record[0]).into_owned()
        })
        .collect()
}

#[test]
fn test_plain_source_skips_header() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();

    let ids = read_ids(open_source(file.path()).unwrap());
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_gzip_source_is_detected_without_extension() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(SAMPLE.as_bytes()).unwrap();
    file.write_all(&encoder.finish().unwrap()).unwrap();

    let ids = read_ids(open_source(file.path()).unwrap());
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn test_missing_source_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("no-such-export.tsv");
    assert!(open_source(&missing).is_err());
}

#[test]
fn test_literal_tab_widens_the_record() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let data = "id\tuser_id\tip\n3\tu1\tpart one\tpart two\n";
    file.write_all(data.as_bytes()).unwrap();

    let mut reader = rows(open_source(file.path()).unwrap());
    let record = reader.byte_records().next().unwrap().unwrap();
    assert_eq!(record.len(), 4);
}

#[test]
fn test_quotes_are_data() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let data = "id\tenv\n4\t{\"pinned_courses\"=>[]}\n";
    file.write_all(data.as_bytes()).unwrap();

    let mut reader = rows(open_source(file.path()).unwrap());
    let record = reader.byte_records().next().unwrap().unwrap();
    assert_eq!(&record[1], b"{\"pinned_courses\"=>[]}" as &[u8]);
}
