//! Normalization helpers for display and search keys.

use crate::errors::TransliterationError;
use crate::hebrew::alphabet::{
  dagesh_form_base, decompose_presentation_form, is_hebrew_text, is_pointing,
};
use crate::hebrew::transliterate_hebrew;
use crate::hebrew::renderer::{
  ALEPH_MARK, AYIN_MARK, B_WITH_LINE, H_WITH_DOT, K_WITH_LINE, STRESS_MARK, SYLLABLE_BREAK,
  T_WITH_DOT,
};

/// Removes accents, vowel points and dagesh, keeping the consonants.
///
/// Presentation forms are mapped back to their base letters; the
/// Aleph-Lamed ligature becomes two letters.
pub fn strip_pointing(word: &str) -> String {
  let mut out = String::with_capacity(word.len());
  for c in word.chars() {
    if is_pointing(c) {
      continue;
    }
    if let Some(base) = dagesh_form_base(c) {
      out.push(base);
    } else if let Some(parts) = decompose_presentation_form(c) {
      out.extend(parts.iter().filter(|p| !is_pointing(**p)));
    } else {
      out.push(c);
    }
  }
  out
}

/// Folds a transliteration into its search key.
///
/// Drops syllable, stress, reduced-vowel and quote marks, replaces the
/// diacritic letters by their plain counterparts and collapses runs of the
/// same character, so doubled consonants fold to one. Folding a folded key
/// returns it unchanged.
pub fn fold_for_indexing(transliteration: &str) -> String {
  let mut out = String::with_capacity(transliteration.len());
  let mut last = None;

  for c in transliteration.chars() {
    let folded = match c {
      '.' | '\'' | STRESS_MARK | SYLLABLE_BREAK | ALEPH_MARK | AYIN_MARK => continue,
      K_WITH_LINE => 'k',
      T_WITH_DOT => 't',
      H_WITH_DOT => 'h',
      B_WITH_LINE => 'b',
      'é' => 'e',
      other => other,
    };

    if last == Some(folded) {
      continue;
    }
    last = Some(folded);
    out.push(folded);
  }

  out
}

/// Search key for one word of running text.
///
/// Hebrew words are transliterated then folded; anything else is lowercased
/// and folded.
///
/// # Errors
/// Propagates the transliteration failure of a malformed Hebrew word.
pub fn index_key(word: &str) -> Result<String, TransliterationError> {
  if is_hebrew_text(word) {
    Ok(fold_for_indexing(&transliterate_hebrew(word)?))
  } else {
    Ok(fold_for_indexing(&word.to_lowercase()))
  }
}
