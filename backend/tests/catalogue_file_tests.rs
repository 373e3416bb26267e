//! File-loading tests for the catalogue store.

use std::io::Write;
use std::path::PathBuf;

use asb_rust::catalogue::{Catalogue, CatalogueError};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("sample_catalogue.json")
}

#[test]
fn test_load_repository_fixture() {
    let catalogue = Catalogue::load(fixture_path()).expect("fixture must load");
    assert_eq!(catalogue.course_count(), 5);
    assert_eq!(catalogue.section_count(), 9);
    assert!(catalogue.contains("CS100"));
    assert!(catalogue.contains("math333"));
    assert_eq!(catalogue.checksum().len(), 64);
}

#[test]
fn test_fixture_pool_order_matches_file() {
    let catalogue = Catalogue::load(fixture_path()).unwrap();
    let crns: Vec<i64> = catalogue
        .get("CS100")
        .unwrap()
        .iter()
        .map(|s| s.crn().value())
        .collect();
    assert_eq!(crns, vec![90101, 90102, 90103]);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Catalogue::load(dir.path().join("absent.json"));
    match result {
        Err(CatalogueError::DataUnavailable { path, .. }) => {
            assert!(path.ends_with("absent.json"));
        }
        other => panic!("expected DataUnavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_load_valid_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"CS280": [{{"crn": 1, "days": "TR", "start": "11:30", "end": "12:45"}}]}}"#
    )
    .unwrap();
    file.flush().unwrap();

    let catalogue = Catalogue::load(file.path()).unwrap();
    assert_eq!(catalogue.course_count(), 1);
    let pool = catalogue.get("CS280").unwrap();
    assert_eq!(pool[0].days().to_string(), "RT");
}

#[test]
fn test_load_rejects_truncated_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"CS280": [{{"crn": 1,"#).unwrap();
    file.flush().unwrap();

    assert!(matches!(
        Catalogue::load(file.path()),
        Err(CatalogueError::Malformed(_))
    ));
}

#[test]
fn test_load_rejects_bad_record_anywhere() {
    // One bad record poisons the whole load: no partial catalogue.
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "CS280": [{{"crn": 1, "days": "TR", "start": "11:30", "end": "12:45"}}],
            "CS281": [{{"crn": 2, "days": "TR", "start": "12:45", "end": "11:30"}}]
        }}"#
    )
    .unwrap();
    file.flush().unwrap();

    let err = Catalogue::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("CS281"));
}
