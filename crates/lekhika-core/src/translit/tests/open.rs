use std::fs;

use super::*;
use crate::mapping::DEFAULT_MAPPING_TOML;
use crate::special_words::DEFAULT_AUTOCORRECT_TOML;

fn write_sources(dir: &Path) {
    fs::write(dir.join(MAPPING_FILE), DEFAULT_MAPPING_TOML).unwrap();
    fs::write(dir.join(AUTOCORRECT_FILE), DEFAULT_AUTOCORRECT_TOML).unwrap();
}

#[test]
fn test_open_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    write_sources(dir.path());

    let t = Transliterator::open(dir.path()).unwrap();
    assert_eq!(t.mapping().len(), Transliterator::with_defaults().mapping().len());
    assert!(!t.special_words().is_empty());
    assert_eq!(t.transliterate("nepal"), "नेपाल");
}

#[test]
fn test_open_missing_mapping() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(AUTOCORRECT_FILE), DEFAULT_AUTOCORRECT_TOML).unwrap();

    match Transliterator::open(dir.path()) {
        Err(EngineError::MissingSource { path }) => {
            assert!(path.ends_with(MAPPING_FILE));
        }
        other => panic!("expected MissingSource, got {other:?}"),
    }
}

#[test]
fn test_open_missing_autocorrect() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MAPPING_FILE), DEFAULT_MAPPING_TOML).unwrap();

    let err = Transliterator::open(dir.path()).unwrap_err();
    assert!(matches!(err, EngineError::MissingSource { ref path } if path.ends_with(AUTOCORRECT_FILE)));
    assert!(err.to_string().contains(AUTOCORRECT_FILE));
}

#[test]
fn test_open_unreadable_source() {
    let dir = tempfile::tempdir().unwrap();
    // a directory where a file is expected
    fs::create_dir(dir.path().join(MAPPING_FILE)).unwrap();
    fs::write(dir.path().join(AUTOCORRECT_FILE), DEFAULT_AUTOCORRECT_TOML).unwrap();

    let err = Transliterator::open(dir.path()).unwrap_err();
    assert!(matches!(err, EngineError::Io { .. }));
}

#[test]
fn test_malformed_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(MAPPING_FILE),
        "[charMap]\nthis line is junk\nx = \"unterminated\nka = \"क\"\n",
    )
    .unwrap();
    fs::write(dir.path().join(AUTOCORRECT_FILE), "").unwrap();

    let t = Transliterator::open(dir.path()).unwrap();
    assert_eq!(t.mapping().len(), 1);
    assert!(t.special_words().is_empty());
    assert_eq!(t.transliterate("ka"), "क");
}
