//! Tokenizer for Tantivy producing transliteration search keys

use tantivy::Index;
use tantivy::tokenizer::{TextAnalyzer, Token, TokenStream, Tokenizer};
use tracing::{debug, warn};

use crate::config::MAX_WORD_CHARS;
use crate::normalize::index_key;

/// Name under which [`register_hebrew_tokenizer`] registers the tokenizer.
pub const HEBREW_TOKENIZER_NAME: &str = "ketav_hebrew";

/// Tantivy tokenizer for pointed Hebrew text
///
/// - Splits on whitespace
/// - Each word becomes its folded transliteration, so pointed and unpointed
///   spellings of the same consonants meet on one key
/// - Words that break the engine's input contract are logged and skipped
/// - `Clone + Send + Sync`, no state between calls
#[derive(Debug, Clone)]
pub struct HebrewTokenizer {
  max_word_chars: usize,
}

/// Implementation of Tantivy's TokenStream trait
///
/// - No lifetime parameters (fully owned type)
/// - Consumes token sequence sequentially with `IntoIter`
pub struct HebrewTokenStream {
  /// Iterator of (index key, start byte, end byte)
  tokens: std::vec::IntoIter<(String, usize, usize)>,

  /// Tantivy's Token (overwritten and reused every time)
  token: Token,
}

impl Default for HebrewTokenizer {
  fn default() -> Self {
    Self::new()
  }
}

impl HebrewTokenizer {
  /// Tokenizer accepting words up to the largest configurable length.
  pub fn new() -> Self {
    Self {
      max_word_chars: MAX_WORD_CHARS,
    }
  }

  /// Tokenizer skipping words longer than `max_word_chars` code points.
  pub fn with_max_word_chars(max_word_chars: usize) -> Self {
    Self { max_word_chars }
  }
}

/// Whitespace-delimited words with their starting byte offset.
pub fn split_words(text: &str) -> Vec<(usize, &str)> {
  let mut words = Vec::new();
  let mut start = None;

  for (i, c) in text.char_indices() {
    match (c.is_whitespace(), start) {
      (true, Some(s)) => {
        words.push((s, &text[s..i]));
        start = None;
      }
      (false, None) => start = Some(i),
      _ => {}
    }
  }
  if let Some(s) = start {
    words.push((s, &text[s..]));
  }

  words
}

impl Tokenizer for HebrewTokenizer {
  // Use owned stream without lifetime parameters
  type TokenStream<'a> = HebrewTokenStream;

  fn token_stream<'a>(&'a mut self, input_text: &'a str) -> Self::TokenStream<'a> {
    debug!(input_text = %input_text, "Start transliteration tokenizing");

    let words = split_words(input_text);
    let mut tokens = Vec::with_capacity(words.len());

    for (start, word) in &words {
      let end = start + word.len();
      let chars = word.chars().count();
      if chars > self.max_word_chars {
        warn!(word = %word, chars, max = self.max_word_chars, "Word too long, skipped");
        continue;
      }

      match index_key(word) {
        Ok(key) if key.is_empty() => {}
        Ok(key) => {
          debug!(word = %word, key = %key, start, end, "Token");
          tokens.push((key, *start, end));
        }
        Err(err) => {
          warn!(word = %word, error = %err, "Word not transliterated, skipped");
        }
      }
    }

    debug!(
      total_words = words.len(),
      indexed_tokens = tokens.len(),
      "Transliteration tokenizing completed"
    );

    HebrewTokenStream {
      tokens: tokens.into_iter(),
      token: Token::default(),
    }
  }
}

impl TokenStream for HebrewTokenStream {
  fn advance(&mut self) -> bool {
    if let Some((key, start, end)) = self.tokens.next() {
      self.token.text = key;
      self.token.offset_from = start;
      self.token.offset_to = end;

      // Token::default() starts at usize::MAX; the first token lands on 0.
      self.token.position = self.token.position.wrapping_add(1);
      self.token.position_length = 1;

      true
    } else {
      false
    }
  }

  fn token(&self) -> &Token {
    &self.token
  }

  fn token_mut(&mut self) -> &mut Token {
    &mut self.token
  }
}

/// Registers [`HebrewTokenizer`] on an index under [`HEBREW_TOKENIZER_NAME`].
pub fn register_hebrew_tokenizer(index: &Index, tokenizer: HebrewTokenizer) {
  index.tokenizers().register(HEBREW_TOKENIZER_NAME, TextAnalyzer::from(tokenizer));
}
