use sbc_platform::{PlatformDetector, PlatformError};
use std::fs;
use tempfile::TempDir;

fn revision_of(contents: &str) -> Result<u8, PlatformError> {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cpuinfo");
    fs::write(&path, contents).unwrap();
    PlatformDetector::new()
        .with_hardware_info_path(path)
        .detect_pi_revision()
}

#[test]
fn test_revision_one_codes() {
    for code in ["0000", "0002", "0003"] {
        let contents = format!("Hardware\t: BCM2708\nRevision\t: {}\n", code);
        assert_eq!(revision_of(&contents).unwrap(), 1, "{}", code);
    }
}

#[test]
fn test_other_codes_are_revision_two() {
    for code in ["0004", "000e", "0010", "a01041", "a22082", "900092"] {
        let contents = format!("Hardware\t: BCM2708\nRevision\t: {}\n", code);
        assert_eq!(revision_of(&contents).unwrap(), 2, "{}", code);
    }
}

#[test]
fn test_overvolted_revision_prefix() {
    assert_eq!(revision_of("Revision\t: 10000002\n").unwrap(), 1);
    assert_eq!(revision_of("Revision\t: 1000000e\n").unwrap(), 2);
}

#[test]
fn test_revision_key_is_case_insensitive() {
    assert_eq!(revision_of("REVISION : 0003\n").unwrap(), 1);
    assert_eq!(revision_of("revision : 000f\n").unwrap(), 2);
}

#[test]
fn test_first_revision_line_wins() {
    let contents = "Revision : 1041\nSerial : 0000000012345678\nRevision : 0002\n";
    assert_eq!(revision_of(contents).unwrap(), 2);
}

#[test]
fn test_lines_that_do_not_match_are_skipped() {
    let contents = "Revision:0002\nRevision : 01\nRevision : 0003\n";
    assert_eq!(revision_of(contents).unwrap(), 1);
}

#[test]
fn test_missing_revision_is_an_error() {
    let err = revision_of("Hardware\t: BCM2709\nSerial\t: 0000\n").unwrap_err();
    assert!(matches!(err, PlatformError::RevisionUndetermined { .. }));
    assert!(err.to_string().contains("Could not determine Raspberry Pi revision"));
}

#[test]
fn test_empty_source_is_an_error() {
    assert!(matches!(
        revision_of(""),
        Err(PlatformError::RevisionUndetermined { .. })
    ));
}
