//! # Configuration File Integration Test
//!
//! Loads the shipped formats from `config/` and runs them end to end.

use std::path::PathBuf;

use chrono::NaiveDate;
use shortcode_codec::{CodecConfig, CodecError, ErrorKind, ShortcodeCodec};

fn config_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("config").join(name)
}

fn temp_config_path(tag: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("shortcode_{tag}_{id}.toml"))
}

#[test]
fn test_reference_file_matches_default() {
    let config = CodecConfig::load(config_path("reference.toml")).unwrap();
    assert_eq!(config, CodecConfig::default());
}

#[test]
fn test_base36_file_reproduces_reference_literal() {
    let config = CodecConfig::load(config_path("base36.toml")).unwrap();
    let codec = ShortcodeCodec::new(config).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    assert_eq!(codec.encode_with_seed(10, 100, date, 5).unwrap(), "uxevytyk5");
    let decoded = codec.decode("uxevytyk5").unwrap();
    assert_eq!((decoded.store_id, decoded.transaction_id, decoded.date), (10, 100, date));
}

#[test]
fn test_codes_from_other_formats_are_rejected() {
    let reference = ShortcodeCodec::new(CodecConfig::default()).unwrap();
    let base36 = ShortcodeCodec::new(CodecConfig::load(config_path("base36.toml")).unwrap()).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();

    // Upper-case and punctuation symbols are foreign to base36
    let code = reference.encode_with_seed(200, 10_000, date, 42).unwrap();
    assert_eq!(base36.decode(&code).unwrap_err().kind(), ErrorKind::Decode);
}

#[test]
fn test_invalid_file_is_config_error() {
    let path = temp_config_path("invalid");
    std::fs::write(&path, "alphabet = 12\n").unwrap();

    let err = CodecConfig::load(&path).unwrap_err();
    assert!(matches!(err, CodecError::ConfigParse(_)));
    assert_eq!(err.kind(), ErrorKind::Config);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_inconsistent_file_fails_at_construction() {
    let path = temp_config_path("undersized");
    let text = std::fs::read_to_string(config_path("base36.toml"))
        .unwrap()
        .replace("radix = 22", "radix = 40");
    std::fs::write(&path, text).unwrap();

    let config = CodecConfig::load(&path).unwrap();
    let err = ShortcodeCodec::new(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);

    std::fs::remove_file(&path).ok();
}
