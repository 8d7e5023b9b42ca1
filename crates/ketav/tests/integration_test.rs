//! crates/ketav/tests/integration_test.rs
//!
//! End-to-end: read a configuration file, initialize the service, transliterate
//! text and build query keys.

use std::fs;

use tempfile::TempDir;

use ketav::errors::{ConfigError, InputError};
use ketav::{KetavConfig, KetavError, KetavService, LogLevel};

// ─── Test Helpers ─────────────────────────────────────────────────────────

/// mem patah lamed qamats etnahta final-kaf
const MELEK: &str = "\u{05DE}\u{05B7}\u{05DC}\u{05B8}\u{0591}\u{05DA}";

fn service_from_json(body: &str) -> Result<KetavService, KetavError> {
  let temp_dir = TempDir::new().unwrap();
  let path = temp_dir.path().join("ketav.json");
  fs::write(&path, body).unwrap();

  let config = KetavConfig::from_json_file(&path)?;
  KetavService::init(&config)
}

// ─── Configuration ────────────────────────────────────────────────────────

#[test]
fn configured_service_drops_stress_marks() {
  let service = service_from_json(
    r#"{ "transliteration": { "stress_marks": false }, "logging": { "level": "warn" } }"#,
  )
  .unwrap();

  assert_eq!(service.config().log_level(), LogLevel::Warn);
  assert_eq!(service.transliterate_word(MELEK).unwrap(), "ma-laa\u{1E35}");
}

#[test]
fn invalid_configuration_is_rejected_at_init() {
  let err = service_from_json(r#"{ "transliteration": { "max_word_chars": 0 } }"#).unwrap_err();
  assert!(matches!(
    err,
    KetavError::Config(ConfigError::InvalidMaxWordChars { actual: 0, .. })
  ));
}

#[test]
fn unreadable_configuration_is_reported() {
  let err = service_from_json("not json").unwrap_err();
  assert!(matches!(err, KetavError::Config(ConfigError::FileParse { .. })));
}

// ─── Service flow ─────────────────────────────────────────────────────────

#[test]
fn text_flow_produces_all_forms() {
  let service = service_from_json("{}").unwrap();
  let words = service.transliterate_text(&format!("{MELEK} Melek")).unwrap();

  assert_eq!(words.len(), 2);
  assert_eq!(words[0].transliteration, "ma-l*aa\u{1E35}");
  assert_eq!(words[0].unpointed, "\u{05DE}\u{05DC}\u{05DA}");
  assert_eq!(words[0].index_key, "malak");
  assert_eq!(words[1].index_key, "melek");
}

#[test]
fn query_keys_from_both_scripts() {
  let service = service_from_json(r#"{ "search": { "max_query_variants": 2 } }"#).unwrap();

  assert_eq!(service.query_keys(MELEK).unwrap(), vec!["malak".to_string()]);
  assert_eq!(service.query_keys("Dov").unwrap(), vec!["dov".to_string(), "dob".to_string()]);
}

#[test]
fn word_limit_applies_to_text() {
  let service =
    service_from_json(r#"{ "transliteration": { "max_word_chars": 2 } }"#).unwrap();

  let err = service.transliterate_text(MELEK).unwrap_err();
  assert!(matches!(err, KetavError::Input(InputError::WordTooLong { max: 2, .. })));
}

#[test]
fn lookup_keys_normalize_identifiers() {
  let service = service_from_json("{}").unwrap();
  assert_eq!(service.lookup_keys("H430,strong:G2316"), vec!["H0430", "G2316"]);
}
