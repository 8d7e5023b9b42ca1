//! Data Model Definition
use serde::{Deserialize, Serialize};

/// One whitespace-delimited word of a transliterated text.
///
/// For Hebrew words all four forms are filled in. Other words are passed
/// through: `transliteration` and `unpointed` repeat the word and
/// `index_key` is its lowercased, folded form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransliteratedWord {
  /// Word as given
  pub hebrew: String,

  /// Latin transliteration
  pub transliteration: String,

  /// Consonants only
  pub unpointed: String,

  /// Search key (folded transliteration)
  pub index_key: String,
}

/// Implementation block for TransliteratedWord
impl TransliteratedWord {
  /// Constructor for TransliteratedWord
  pub fn new(
    hebrew: impl Into<String>,
    transliteration: impl Into<String>,
    unpointed: impl Into<String>,
    index_key: impl Into<String>,
  ) -> Self {
    Self {
      hebrew: hebrew.into(),
      transliteration: transliteration.into(),
      unpointed: unpointed.into(),
      index_key: index_key.into(),
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────
