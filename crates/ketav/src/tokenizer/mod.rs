//! tokenizer モジュール
pub mod hebrew_tokenizer;

/// 再エクスポート
pub use hebrew_tokenizer::{
  HEBREW_TOKENIZER_NAME, HebrewTokenStream, HebrewTokenizer, register_hebrew_tokenizer,
  split_words,
};
