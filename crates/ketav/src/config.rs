// crates/ketav/src/config.rs

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::errors::ConfigError;

/// Smallest accepted `transliteration.max_word_chars`.
pub const MIN_WORD_CHARS: usize = 1;
/// Largest accepted `transliteration.max_word_chars`.
///
/// Classification runs scans per code point, so very long "words" are
/// rejected up front.
pub const MAX_WORD_CHARS: usize = 1024;

/// Top-level configuration for ketav.
///
/// Every section may be omitted from the JSON file and falls back to its defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KetavConfig {
  /// [transliteration] section
  pub transliteration: TransliterationConfig,
  /// [search] section
  pub search: SearchConfig,
  /// [logging] section
  pub logging: LoggingConfig,
}

/// [transliteration] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TransliterationConfig {
  /// Keep the `*` stress marks in service output
  pub stress_marks: bool,
  /// Longest word (in code points) accepted by the service
  pub max_word_chars: usize,
}

impl Default for TransliterationConfig {
  fn default() -> Self {
    Self {
      stress_marks: true,
      max_word_chars: 64,
    }
  }
}

/// [search] section configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
  /// Upper bound on spellings produced by query expansion
  pub max_query_variants: usize,
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      max_query_variants: 32,
    }
  }
}

/// [logging] section configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "trace" | "debug" | "info" | "warn" | "error"
  pub level: LogLevel,
}

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  /// trace
  Trace,

  /// debug
  Debug,

  /// info
  #[default]
  Info,

  /// warn
  Warn,

  ///error
  Error,
}

impl LogLevel {
  /// Directive string understood by `tracing_subscriber::EnvFilter` and friends.
  pub fn as_str(&self) -> &'static str {
    match self {
      LogLevel::Trace => "trace",
      LogLevel::Debug => "debug",
      LogLevel::Info => "info",
      LogLevel::Warn => "warn",
      LogLevel::Error => "error",
    }
  }
}

// ===== Loading =====

impl KetavConfig {
  /// Reads a JSON configuration file.
  ///
  /// The file is only parsed; call [`KetavConfig::validate`] (or
  /// `KetavService::init`) to check the values.
  ///
  /// # Errors
  /// `ConfigError::FileRead` when the file cannot be read,
  /// `ConfigError::FileParse` when it is not valid configuration JSON.
  pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })?;
    serde_json::from_str(&raw).map_err(|e| ConfigError::FileParse {
      path: path.to_path_buf(),
      source: Arc::new(e),
    })
  }
}

// ===== Accessor Methods =====

impl KetavConfig {
  /// Whether service output keeps stress marks.
  pub fn stress_marks(&self) -> bool {
    self.transliteration.stress_marks
  }

  /// Longest accepted word, in code points.
  pub fn max_word_chars(&self) -> usize {
    self.transliteration.max_word_chars
  }

  /// Upper bound on query expansion.
  pub fn max_query_variants(&self) -> usize {
    self.search.max_query_variants
  }

  /// Returns the log level.
  pub fn log_level(&self) -> LogLevel {
    self.logging.level
  }

  /// Validates the configuration.
  ///
  /// # Validation Items
  /// - `transliteration.max_word_chars` is within 1 - 1024
  /// - `search.max_query_variants` >= 1
  ///
  /// # Errors
  /// Returns the corresponding `ConfigError` for the first failing item.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let max_word_chars = self.transliteration.max_word_chars;
    if !(MIN_WORD_CHARS..=MAX_WORD_CHARS).contains(&max_word_chars) {
      return Err(ConfigError::InvalidMaxWordChars {
        min: MIN_WORD_CHARS,
        max: MAX_WORD_CHARS,
        actual: max_word_chars,
      });
    }

    if self.search.max_query_variants < 1 {
      return Err(ConfigError::InvalidMaxQueryVariants {
        actual: self.search.max_query_variants,
      });
    }

    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
