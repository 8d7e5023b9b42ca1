// crates/ketav/src/service.rs

//! KetavService: ketav クレートの統合ファサード。
//!
//! - 単語・テキストの翻字 (hebrew)
//! - 検索キーの生成 (normalize, rules)
//! - 辞書引き用キーの正規化 (strong)
//!
//! HTTP API などの外部からは、この構造体だけを意識すればよい。

use tracing::{debug, info};

use crate::config::KetavConfig;
use crate::errors::{InputError, KetavResult};
use crate::hebrew::alphabet::is_hebrew_text;
use crate::hebrew::renderer::STRESS_MARK;
use crate::hebrew::transliterate_hebrew;
use crate::models::TransliteratedWord;
use crate::normalize::{fold_for_indexing, strip_pointing};
use crate::rules::{expand_query, transliteration_rules};
use crate::strong::parse_identifiers;
use crate::tokenizer::split_words;

/// ketav クレートの統合ファサード。
///
/// 状態は検証済みの設定のみで、`&self` のメソッドはスレッド間で共有して呼び出せる。
#[derive(Debug, Clone)]
pub struct KetavService {
  config: KetavConfig,
}

impl KetavService {
  /// 初期化（設定の検証 + 変換規則テーブルの構築）
  ///
  /// # エラー
  /// - 設定が不正（max_word_chars が範囲外、max_query_variants が 0 等）
  pub fn init(config: &KetavConfig) -> KetavResult<Self> {
    // ConfigError は #[from] で KetavError に自動変換
    config.validate()?;

    let rules = transliteration_rules();
    info!(
      rules = rules.len(),
      stress_marks = config.stress_marks(),
      max_word_chars = config.max_word_chars(),
      "KetavService initialized"
    );

    Ok(Self {
      config: config.clone(),
    })
  }

  /// 1単語を翻字する。
  ///
  /// `transliteration.stress_marks` が false の場合は `*` を取り除く。
  ///
  /// # エラー
  /// - 単語が max_word_chars を超える（InputError）
  /// - 翻字の前提を満たさない単語（TransliterationError）
  pub fn transliterate_word(&self, word: &str) -> KetavResult<String> {
    self.check_length(word)?;

    let transliteration = transliterate_hebrew(word)?;
    if self.config.stress_marks() {
      Ok(transliteration)
    } else {
      Ok(transliteration.chars().filter(|c| *c != STRESS_MARK).collect())
    }
  }

  /// テキストを空白で区切り、単語ごとに翻字する。
  ///
  /// ヘブライ語以外の単語はそのまま通し、小文字化して検索キーを作る。
  ///
  /// # エラー
  /// 最初に失敗した単語のエラーを返す。
  pub fn transliterate_text(&self, text: &str) -> KetavResult<Vec<TransliteratedWord>> {
    let words = split_words(text);
    let mut out = Vec::with_capacity(words.len());

    for (_, word) in words {
      let entry = if is_hebrew_text(word) {
        let transliteration = self.transliterate_word(word)?;
        let index_key = fold_for_indexing(&transliteration);
        TransliteratedWord::new(word, transliteration, strip_pointing(word), index_key)
      } else {
        TransliteratedWord::new(word, word, word, fold_for_indexing(&word.to_lowercase()))
      };
      out.push(entry);
    }

    debug!(words = out.len(), "text transliterated");
    Ok(out)
  }

  /// 検索クエリから検索キーの一覧を作る。
  ///
  /// - ヘブライ語のクエリ: 単語ごとの翻字を畳み込んだキー
  /// - ラテン文字のクエリ: 変換規則で展開した各綴りを畳み込んだキー
  ///
  /// 重複は除き、最初に現れた順序を保つ。
  ///
  /// # エラー
  /// - クエリが空（InputError::EmptyQuery）
  /// - ヘブライ語クエリの翻字失敗
  pub fn query_keys(&self, query: &str) -> KetavResult<Vec<String>> {
    let query = query.trim();
    if query.is_empty() {
      return Err(InputError::EmptyQuery.into());
    }

    let candidates = if is_hebrew_text(query) {
      split_words(query)
        .into_iter()
        .map(|(_, word)| self.transliterate_word(word))
        .collect::<KetavResult<Vec<_>>>()?
    } else {
      expand_query(query, self.config.max_query_variants())
    };

    let mut keys: Vec<String> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
      let key = fold_for_indexing(&candidate);
      if !key.is_empty() && !keys.contains(&key) {
        keys.push(key);
      }
    }

    debug!(query, keys = keys.len(), "query keys built");
    Ok(keys)
  }

  /// Strong 番号の一覧を辞書引き用のキーに正規化する。
  pub fn lookup_keys(&self, identifiers: &str) -> Vec<String> {
    parse_identifiers(identifiers)
  }

  /// 検証済みの設定を返す。
  pub fn config(&self) -> &KetavConfig {
    &self.config
  }

  fn check_length(&self, word: &str) -> Result<(), InputError> {
    let actual = word.chars().count();
    let max = self.config.max_word_chars();
    if actual > max {
      return Err(InputError::WordTooLong {
        word: word.to_string(),
        max,
        actual,
      });
    }
    Ok(())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Test Module
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::{ConfigError, KetavError};

  // ─── Test Helpers ─────────────────────────────────────────────────────

  // mem patah lamed qamats etnahta final-kaf
  const STRESSED_WORD: &str = "\u{05DE}\u{05B7}\u{05DC}\u{05B8}\u{0591}\u{05DA}";

  fn service() -> KetavService {
    KetavService::init(&KetavConfig::default()).unwrap()
  }

  // ─── init ─────────────────────────────────────────────────────────────

  #[test]
  fn service_init_validates_config() {
    let mut config = KetavConfig::default();
    config.search.max_query_variants = 0;

    let err = KetavService::init(&config).unwrap_err();
    assert!(matches!(
      err,
      KetavError::Config(ConfigError::InvalidMaxQueryVariants { actual: 0 })
    ));
  }

  // ─── transliterate_word ───────────────────────────────────────────────

  #[test]
  fn service_keeps_stress_marks_by_default() {
    assert_eq!(service().transliterate_word(STRESSED_WORD).unwrap(), "ma-l*aa\u{1E35}");
  }

  #[test]
  fn service_can_drop_stress_marks() {
    let mut config = KetavConfig::default();
    config.transliteration.stress_marks = false;
    let service = KetavService::init(&config).unwrap();

    assert_eq!(service.transliterate_word(STRESSED_WORD).unwrap(), "ma-laa\u{1E35}");
  }

  #[test]
  fn service_rejects_long_words() {
    let mut config = KetavConfig::default();
    config.transliteration.max_word_chars = 3;
    let service = KetavService::init(&config).unwrap();

    let err = service.transliterate_word(STRESSED_WORD).unwrap_err();
    match err {
      KetavError::Input(InputError::WordTooLong { max, actual, .. }) => {
        assert_eq!(max, 3);
        assert_eq!(actual, 6);
      }
      other => panic!("expected WordTooLong, got {other:?}"),
    }
  }

  #[test]
  fn service_reports_contract_violations() {
    let err = service().transliterate_word("\u{05B7}\u{05D1}").unwrap_err();
    assert!(matches!(err, KetavError::Transliteration(_)));
  }

  // ─── transliterate_text ───────────────────────────────────────────────

  #[test]
  fn service_transliterates_mixed_text() {
    let words = service().transliterate_text(&format!("Gen {STRESSED_WORD}")).unwrap();

    assert_eq!(words.len(), 2);
    assert_eq!(words[0], TransliteratedWord::new("Gen", "Gen", "Gen", "gen"));
    assert_eq!(words[1].hebrew, STRESSED_WORD);
    assert_eq!(words[1].transliteration, "ma-l*aa\u{1E35}");
    assert_eq!(words[1].unpointed, "\u{05DE}\u{05DC}\u{05DA}");
    assert_eq!(words[1].index_key, "malak");
  }

  #[test]
  fn service_transliterate_empty_text() {
    assert!(service().transliterate_text("  ").unwrap().is_empty());
  }

  // ─── query_keys / lookup_keys ─────────────────────────────────────────

  #[test]
  fn service_query_keys_expand_latin_queries() {
    let keys = service().query_keys("David").unwrap();
    assert_eq!(keys[0], "david");
    assert!(keys.contains(&"dabid".to_string()));
    assert!(keys.contains(&"dawid".to_string()));
  }

  #[test]
  fn service_query_keys_for_hebrew_queries() {
    let keys = service().query_keys(STRESSED_WORD).unwrap();
    assert_eq!(keys, vec!["malak".to_string()]);
  }

  #[test]
  fn service_query_keys_reject_blank_query() {
    let err = service().query_keys("   ").unwrap_err();
    assert!(matches!(err, KetavError::Input(InputError::EmptyQuery)));
  }

  #[test]
  fn service_lookup_keys() {
    assert_eq!(service().lookup_keys("H430 strong:G25"), vec!["H0430", "G0025"]);
  }
}
