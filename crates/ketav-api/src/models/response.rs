//! Response Model Definition

use ketav::TransliteratedWord;
use serde::Serialize;

/// Transliteration Response
#[derive(Debug, Serialize)]
pub struct TransliterateResponse {
  /// One entry per whitespace-delimited word
  pub words: Vec<WordDto>,
  /// Elapsed time (milliseconds)
  pub elapsed_ms: u64,
}

/// Word Information (DTO)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordDto {
  /// Word as sent
  pub hebrew: String,
  /// Latin transliteration
  pub transliteration: String,
  /// Consonants only
  pub unpointed: String,
  /// Search key
  pub index_key: String,
}

impl From<TransliteratedWord> for WordDto {
  fn from(word: TransliteratedWord) -> Self {
    Self {
      hebrew: word.hebrew,
      transliteration: word.transliteration,
      unpointed: word.unpointed,
      index_key: word.index_key,
    }
  }
}

/// Query Keys Response
#[derive(Debug, Serialize)]
pub struct QueryKeysResponse {
  /// Folded search keys, first occurrence order
  pub keys: Vec<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn word_dto_from_transliterated_word() {
    let word = TransliteratedWord::new("\u{05D0}\u{05DC}", "\u{2019}l", "\u{05D0}\u{05DC}", "l");
    let dto = WordDto::from(word);

    assert_eq!(dto.hebrew, "\u{05D0}\u{05DC}");
    assert_eq!(dto.transliteration, "\u{2019}l");
    assert_eq!(dto.index_key, "l");
  }

  #[test]
  fn transliterate_response_serialization() {
    let response = TransliterateResponse {
      words: vec![WordDto::from(TransliteratedWord::new("a", "a", "a", "a"))],
      elapsed_ms: 42,
    };

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"words\""));
    assert!(json.contains("\"elapsed_ms\":42"));
    assert!(json.contains("\"index_key\":\"a\""));
  }

  #[test]
  fn query_keys_response_serialization() {
    let response = QueryKeysResponse {
      keys: vec!["david".to_string()],
    };
    assert_eq!(serde_json::to_string(&response).unwrap(), r#"{"keys":["david"]}"#);
  }
}
