//! # Loader Tests
//!
//! Parsing program text and reading program files.

use std::io::Write as _;

use ls8_core::common::LoadError;
use ls8_core::sim::loader::{load_program, parse_literal, parse_program};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_parse_strips_comments_and_blank_lines() {
    let source = "# header comment\n\n10000010 # LDI R0,8\n00000000\n   00001000   \n\n# trailing\n";
    assert_eq!(parse_program(source).unwrap(), vec![0x82, 0x00, 0x08]);
}

#[rstest]
#[case("0", Some(0))]
#[case("1", Some(1))]
#[case("101", Some(5))]
#[case("11111111", Some(255))]
#[case("00000001", Some(1))]
#[case("", None)]
#[case("111111111", None)]
#[case("10201", None)]
#[case("0x82", None)]
#[case("-1", None)]
#[case("+1", None)]
fn test_parse_literal(#[case] token: &str, #[case] expected: Option<u8>) {
    assert_eq!(parse_literal(token), expected);
}

#[test]
fn test_malformed_literal_reports_one_based_line() {
    let source = "10000010\n# comment\n1234\n";
    let err = parse_program(source).unwrap_err();
    assert!(matches!(
        err,
        LoadError::MalformedLiteral { line: 3, ref token } if token == "1234"
    ));
}

#[test]
fn test_two_tokens_on_a_line_is_malformed() {
    let err = parse_program("0001 0010\n").unwrap_err();
    assert!(matches!(err, LoadError::MalformedLiteral { line: 1, .. }));
}

#[test]
fn test_exactly_256_bytes_fits() {
    let source = "00000001\n".repeat(256);
    assert_eq!(parse_program(&source).unwrap().len(), 256);
}

#[test]
fn test_257_bytes_is_too_large() {
    let source = "00000001\n".repeat(257);
    assert!(matches!(
        parse_program(&source),
        Err(LoadError::ProgramTooLarge { len: 257 })
    ));
}

#[test]
fn test_empty_source_is_empty_image() {
    assert_eq!(parse_program("# nothing here\n\n").unwrap(), Vec::<u8>::new());
}

#[test]
fn test_load_program_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "01000111 # PRN R0").unwrap();
    writeln!(file, "00000000").unwrap();
    writeln!(file, "00000001 # HLT").unwrap();

    assert_eq!(load_program(file.path()).unwrap(), vec![0x47, 0x00, 0x01]);
}

#[test]
fn test_load_program_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.ls8");

    let err = load_program(&path).unwrap_err();
    match err {
        LoadError::FileNotFound { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_non_utf8_file_is_unreadable_not_missing() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0xFF, 0xFE, b'\n']).unwrap();

    let err = load_program(file.path()).unwrap_err();
    match &err {
        LoadError::Unreadable { path, source } => {
            assert_eq!(path, file.path());
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().starts_with("Could not read"));
}

#[test]
fn test_directory_is_unreadable() {
    let dir = tempfile::tempdir().unwrap();

    let err = load_program(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Unreadable { .. }));
}
