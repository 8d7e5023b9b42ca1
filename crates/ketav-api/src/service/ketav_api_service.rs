//! Transliteration Service

use std::time::Instant;

use ketav::{KetavConfig, KetavService};

use crate::config::{Config, MAX_TEXT_LENGTH};
use crate::errors::{ApiError, Result};
use crate::models::{
  QueryKeysRequest, QueryKeysResponse, TransliterateRequest, TransliterateResponse, WordDto,
};

/// Common interface for the transliteration service
///
/// This trait allows swapping production implementation (`KetavApiServiceFull`) with
/// test stubs/mocks.
pub trait KetavApiService: Send + Sync {
  /// Transliterates every word of the text
  ///
  /// # Errors
  /// - Input error (empty string, length exceeded, etc.)
  /// - Word the engine cannot transliterate
  fn transliterate(&self, request: TransliterateRequest) -> Result<TransliterateResponse>;

  /// Builds search keys for a query
  ///
  /// # Errors
  /// - Blank query
  /// - Hebrew query the engine cannot transliterate
  fn query_keys(&self, request: QueryKeysRequest) -> Result<QueryKeysResponse>;
}

/// Builds the library configuration for the API configuration
fn ketav_config(config: &Config) -> KetavConfig {
  let mut ketav_config = KetavConfig::default();
  ketav_config.transliteration.stress_marks = config.style.stress_marks();
  ketav_config
}

/// Transliteration Service backed by [`KetavService`]
#[derive(Debug, Clone)]
pub struct KetavApiServiceFull {
  inner: KetavService,
}

impl KetavApiServiceFull {
  /// Initializes the service
  ///
  /// # Errors
  /// Returns an error if the library configuration is rejected
  pub fn new(config: &Config) -> Result<Self> {
    let inner = KetavService::init(&ketav_config(config))
      .map_err(|e| ApiError::config(format!("Failed to initialize ketav: {}", e)))?;
    Ok(Self { inner })
  }

  /// Transliterates every word of the text
  ///
  /// # Errors
  /// - If text is empty or exceeds maximum length
  /// - If a word is too long or malformed
  pub fn transliterate(&self, request: TransliterateRequest) -> Result<TransliterateResponse> {
    let text_bytes = request.text.len();
    if request.text.trim().is_empty() {
      return Err(ApiError::invalid_input("Text is empty"));
    }

    if text_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(text_bytes, MAX_TEXT_LENGTH));
    }

    let start = Instant::now();

    let words = self.inner.transliterate_text(&request.text)?;
    let words = words.into_iter().map(WordDto::from).collect();

    let elapsed_ms = start.elapsed().as_millis() as u64;

    Ok(TransliterateResponse { words, elapsed_ms })
  }

  /// Builds search keys for a query
  ///
  /// # Errors
  /// - If query is blank or exceeds maximum length
  /// - If a Hebrew query word is malformed
  pub fn query_keys(&self, request: QueryKeysRequest) -> Result<QueryKeysResponse> {
    let query_bytes = request.query.len();
    if query_bytes > MAX_TEXT_LENGTH {
      return Err(ApiError::text_too_long(query_bytes, MAX_TEXT_LENGTH));
    }

    let keys = self.inner.query_keys(&request.query)?;
    Ok(QueryKeysResponse { keys })
  }
}

/// Production implementation of trait `KetavApiService`
impl KetavApiService for KetavApiServiceFull {
  fn transliterate(&self, request: TransliterateRequest) -> Result<TransliterateResponse> {
    // Call the inherent method; `self.transliterate(...)` would recurse.
    KetavApiServiceFull::transliterate(self, request)
  }

  fn query_keys(&self, request: QueryKeysRequest) -> Result<QueryKeysResponse> {
    KetavApiServiceFull::query_keys(self, request)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::config::Style;

  fn create_service(style: Style) -> KetavApiServiceFull {
    let config = Config {
      bind_addr: "127.0.0.1:5541".to_string(),
      style,
    };
    KetavApiServiceFull::new(&config).expect("default ketav configuration is valid")
  }

  // mem patah lamed qamats etnahta final-kaf
  const MELEK: &str = "\u{05DE}\u{05B7}\u{05DC}\u{05B8}\u{0591}\u{05DA}";

  #[test]
  fn test_transliterate_marked() {
    let service = create_service(Style::Marked);
    let response = service
      .transliterate(TransliterateRequest {
        text: MELEK.to_string(),
      })
      .unwrap();

    assert_eq!(response.words.len(), 1);
    assert_eq!(response.words[0].transliteration, "ma-l*aa\u{1E35}");
    assert_eq!(response.words[0].index_key, "malak");
  }

  #[test]
  fn test_transliterate_unmarked() {
    let service = create_service(Style::Unmarked);
    let response = service
      .transliterate(TransliterateRequest {
        text: MELEK.to_string(),
      })
      .unwrap();

    assert_eq!(response.words[0].transliteration, "ma-laa\u{1E35}");
  }

  #[test]
  fn test_empty_text_error() {
    let service = create_service(Style::Marked);
    let err = service
      .transliterate(TransliterateRequest {
        text: " ".to_string(),
      })
      .unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }

  #[test]
  fn test_text_too_long_error() {
    let service = create_service(Style::Marked);
    let long_text = "a".repeat(MAX_TEXT_LENGTH + 1);
    let err = service.transliterate(TransliterateRequest { text: long_text }).unwrap_err();
    assert_eq!(err.code(), "text_too_long");
  }

  #[test]
  fn test_malformed_word_error() {
    let service = create_service(Style::Marked);
    let err = service
      .transliterate(TransliterateRequest {
        text: "\u{05B7}\u{05D1}".to_string(),
      })
      .unwrap_err();
    assert_eq!(err.code(), "transliteration_failed");
  }

  #[test]
  fn test_query_keys() {
    let service = create_service(Style::Marked);
    let response = service
      .query_keys(QueryKeysRequest {
        query: "David".to_string(),
      })
      .unwrap();
    assert_eq!(response.keys[0], "david");
  }

  #[test]
  fn test_blank_query_error() {
    let service = create_service(Style::Marked);
    let err = service
      .query_keys(QueryKeysRequest {
        query: String::new(),
      })
      .unwrap_err();
    assert_eq!(err.code(), "invalid_input");
  }
}
