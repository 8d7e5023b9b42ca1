//! Pointed Hebrew to Latin transliteration.
//!
//! A word goes through four steps:
//! 1. presentation forms are decomposed ([`alphabet::decompose`])
//! 2. every code point is classified ([`classifier::classify`])
//! 3. stress and sheva passes run over the whole word ([`annotator::annotate`])
//! 4. the letters are rendered ([`renderer::render`])

pub mod alphabet;
pub mod annotator;
pub mod classifier;
pub mod letter;
pub mod pointing;
pub mod renderer;

use tracing::{error, trace};

use crate::errors::TransliterationError;
pub use letter::Letter;

/// Transliterates one pointed Hebrew word.
///
/// An empty word yields an empty string.
///
/// # Errors
/// Returns [`TransliterationError`] with the letter analysis when the word
/// breaks the engine's input contract. The analysis is also logged at error level.
pub fn transliterate_hebrew(word: &str) -> Result<String, TransliterationError> {
  let letters = analyze(word)?;
  Ok(renderer::render(&letters))
}

/// Classifies and annotates a word without rendering it.
///
/// # Errors
/// Same as [`transliterate_hebrew`].
pub fn analyze(word: &str) -> Result<Vec<Letter>, TransliterationError> {
  let input = alphabet::decompose(word);

  let analyzed = classifier::classify(&input).and_then(|mut letters| {
    annotator::annotate(&input, &mut letters)?;
    Ok(letters)
  });

  match analyzed {
    Ok(letters) => {
      for (position, letter) in letters.iter().enumerate() {
        trace!(position, %letter, "analysis");
      }
      Ok(letters)
    }
    Err(err) => {
      log_failure(&err);
      Err(err)
    }
  }
}

fn log_failure(err: &TransliterationError) {
  error!(
    word = %err.word,
    violation = %err.violation,
    letters = err.analysis.len(),
    "Hebrew transliteration failed\n{}",
    err.analysis_report()
  );
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::errors::Violation;

  #[test]
  fn empty_word_is_empty() {
    assert_eq!(transliterate_hebrew("").unwrap(), "");
  }

  #[test]
  fn aleph_lamed_ligature_is_decomposed() {
    assert_eq!(transliterate_hebrew("\u{FB4F}").unwrap(), "\u{2019}l");
  }

  #[test]
  fn presentation_form_with_dagesh_behaves_like_decomposed_input() {
    // shin patah kaf-with-dagesh patah lamed
    let composed = transliterate_hebrew("\u{05E9}\u{05B7}\u{FB3B}\u{05B7}\u{05DC}").unwrap();
    let decomposed = transliterate_hebrew("\u{05E9}\u{05B7}\u{05DB}\u{05BC}\u{05B7}\u{05DC}").unwrap();
    assert_eq!(composed, decomposed);
    assert_eq!(composed, "sak-kal");
  }

  #[test]
  fn analysis_has_one_letter_per_code_point() {
    let letters = analyze("\u{05D1}\u{05B0}\u{05E8}\u{05B8}").unwrap();
    assert_eq!(letters.len(), 4);
  }

  #[test]
  fn latin_input_is_a_contract_violation() {
    let err = transliterate_hebrew("abc").unwrap_err();
    assert_eq!(
      err.violation,
      Violation::UnexpectedCodepoint {
        position: 0,
        codepoint: 'a'
      }
    );
  }
}
