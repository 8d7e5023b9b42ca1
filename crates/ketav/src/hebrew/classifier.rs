//! Codepoint classifier: turns a decomposed word into one [`Letter`] per code point.

use tracing::trace;

use super::alphabet::{
  BEGADKEFAT, DAGESH, HATAF_PATAH, HATAF_QAMATS, HATAF_SEGOL, HIRIQ, HOLAM, METEG, PATAH, QAMATS,
  QAMATS_2, QAMATS_QATAN, QUBUTS, SEGOL, SHEVA, TSERE, VAV, YOD, base_consonant, is_consonant,
  is_hebrew_character, is_reduced_vowel, is_vowel_point,
};
use super::letter::{Category, ConsonantType, Letter, VowelLength};
use super::pointing::{PointingScan, has_any_after, has_any_before};
use crate::errors::{TransliterationError, Violation};

/// Vowels before a Yod that make it a mater lectionis.
const YOD_VOWEL_BEFORE: &[char] = &[HIRIQ, TSERE, SEGOL, QAMATS, QAMATS_2];

/// Pointing on a Yod itself that makes it a consonant.
const YOD_CONSONANT_AFTER: &[char] = &[
  QAMATS_QATAN,
  SHEVA,
  HATAF_SEGOL,
  HATAF_PATAH,
  HATAF_QAMATS,
  HIRIQ,
  TSERE,
  SEGOL,
  PATAH,
  QAMATS,
  HOLAM,
  QAMATS_2,
  QUBUTS,
  DAGESH,
];

/// Vowels on a Vav with dagesh that make it a doubled consonant rather than shureq.
const VAV_CONSONANT_AFTER_DAGESH: &[char] =
  &[HIRIQ, TSERE, SEGOL, SHEVA, PATAH, QAMATS, QUBUTS, QAMATS_QATAN];

/// Vowels that must both follow a plain medial Vav for it to be a consonant.
const VAV_CONSONANT_PAIR: &[char] = &[QAMATS, HOLAM];

/// Vav followed by a holam-Vav.
const VAV_HOLAM: &[char] = &[VAV, HOLAM];

/// True when no consonant follows `position`.
pub(crate) fn is_last_consonant(input: &[char], position: usize) -> bool {
  !input.iter().skip(position + 1).any(|&c| is_consonant(c))
}

/// Position of the next consonant after `position`.
fn next_consonant(input: &[char], position: usize) -> Option<usize> {
  input.iter().skip(position + 1).position(|&c| is_consonant(c)).map(|offset| position + 1 + offset)
}

/// Classifies every code point of a decomposed word.
///
/// # Errors
/// - the word starts with a mark instead of a consonant
/// - a code point outside the Hebrew block is found
///
/// Both carry the letters classified so far.
pub fn classify(input: &[char]) -> Result<Vec<Letter>, TransliterationError> {
  let mut letters = Vec::with_capacity(input.len());

  for (position, &c) in input.iter().enumerate() {
    let letter = if is_consonant(c) {
      let mut letter = match c {
        YOD => classify_yod(input, position),
        VAV => classify_vav(input, position),
        _ => Letter::consonant(base_consonant(c)),
      };
      if letter.is_consonant() {
        letter.consonant_type = gemination(input, position);
      }
      letter
    } else if position == 0 && is_hebrew_character(c) {
      return Err(TransliterationError::new(input, Violation::LeadingMark { codepoint: c }, letters));
    } else if is_vowel_point(c) {
      Letter::vowel(c, vowel_length(input, position))
    } else if c == DAGESH {
      Letter::new(c, Category::Dagesh)
    } else if is_hebrew_character(c) {
      Letter::new(c, Category::Accent)
    } else {
      return Err(TransliterationError::new(
        input,
        Violation::UnexpectedCodepoint { position, codepoint: c },
        letters,
      ));
    };

    trace!(position, letter = %letter, "classified");
    letters.push(letter);
  }

  Ok(letters)
}

/// Length of a vowel point, decided from the point itself and a neighbouring meteg.
fn vowel_length(input: &[char], position: usize) -> VowelLength {
  let c = input[position];
  if is_reduced_vowel(c) {
    VowelLength::VeryShort
  } else if matches!(c, TSERE | QAMATS | QAMATS_2 | HOLAM) {
    VowelLength::Long
  } else if c == HIRIQ
    && (has_any_after(input, position, &[METEG]) || has_any_before(input, position, &[METEG]))
  {
    VowelLength::Long
  } else {
    VowelLength::Short
  }
}

/// Yod is a long vowel after i/e/a vowels unless it carries its own pointing.
fn classify_yod(input: &[char], position: usize) -> Letter {
  if has_any_before(input, position, YOD_VOWEL_BEFORE)
    && !has_any_after(input, position, YOD_CONSONANT_AFTER)
  {
    Letter::vowel(YOD, VowelLength::Long)
  } else {
    Letter::consonant(YOD)
  }
}

fn classify_vav(input: &[char], position: usize) -> Letter {
  let has_dagesh = has_any_after(input, position, &[DAGESH]);
  if is_vav_consonant(input, position, has_dagesh) {
    return Letter::consonant(VAV);
  }

  // a dagesh in the next consonant closes the syllable
  let length = match next_consonant(input, position) {
    Some(next) if has_any_after(input, next, &[DAGESH]) => VowelLength::Short,
    _ => VowelLength::Long,
  };

  let mut letter = Letter::vowel(VAV, length);
  letter.shureq = has_dagesh;
  letter
}

fn is_vav_consonant(input: &[char], position: usize, has_dagesh: bool) -> bool {
  if position == 0 {
    return !has_dagesh;
  }

  if is_last_consonant(input, position) {
    return !has_dagesh && !has_any_after(input, position, &[HOLAM]);
  }

  if has_dagesh {
    return has_any_after(input, position, VAV_CONSONANT_AFTER_DAGESH)
      || PointingScan::forward(input).all().through_vav().matches(position, VAV_HOLAM);
  }

  PointingScan::forward(input).all().matches(position, VAV_CONSONANT_PAIR)
}

/// Dagesh forte / lene decision for a consonant.
fn gemination(input: &[char], position: usize) -> ConsonantType {
  if !has_any_after(input, position, &[DAGESH]) {
    return ConsonantType::NoDagesh;
  }

  if position == 0 || is_last_consonant(input, position) {
    return ConsonantType::Single;
  }

  let consonant = base_consonant(input[position]);
  if BEGADKEFAT.contains(&consonant) && has_any_before(input, position, &[SHEVA]) {
    return ConsonantType::Single;
  }

  ConsonantType::DoubleGeminated
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::hebrew::alphabet::{ALEPH, BET, FINAL_KAF, KAF, LAMED, MEM, SHIN};

  fn classify_ok(input: &[char]) -> Vec<Letter> {
    classify(input).expect("classification should succeed")
  }

  #[test]
  fn every_code_point_gets_one_letter() {
    let input = [BET, DAGESH, PATAH, LAMED];
    let letters = classify_ok(&input);
    assert_eq!(letters.len(), input.len());
    assert_eq!(letters[1].category(), Category::Dagesh);
  }

  #[test]
  fn final_forms_are_stored_as_base_letters() {
    let letters = classify_ok(&[MEM, PATAH, FINAL_KAF]);
    assert_eq!(letters[2].codepoint(), KAF);
  }

  #[test]
  fn yod_after_hiriq_is_a_long_vowel() {
    let letters = classify_ok(&[BET, HIRIQ, YOD, LAMED]);
    assert!(letters[2].is_vowel());
    assert!(letters[2].is_long());
  }

  #[test]
  fn yod_with_its_own_vowel_is_a_consonant() {
    let letters = classify_ok(&[BET, HIRIQ, YOD, PATAH, LAMED]);
    assert!(letters[2].is_consonant());
  }

  #[test]
  fn yod_without_preceding_vowel_is_a_consonant() {
    let letters = classify_ok(&[YOD, PATAH, LAMED]);
    assert!(letters[0].is_consonant());
  }

  #[test]
  fn initial_vav_without_dagesh_is_a_consonant() {
    let letters = classify_ok(&[VAV, PATAH, LAMED]);
    assert!(letters[0].is_consonant());
  }

  #[test]
  fn initial_vav_with_dagesh_is_shureq() {
    let letters = classify_ok(&[VAV, DAGESH, LAMED]);
    assert!(letters[0].is_vowel());
    assert!(letters[0].is_shureq());
  }

  #[test]
  fn final_vav_with_holam_is_a_vowel() {
    let letters = classify_ok(&[LAMED, VAV, HOLAM]);
    assert!(letters[1].is_vowel());
    assert!(!letters[1].is_shureq());
  }

  #[test]
  fn final_plain_vav_is_a_consonant() {
    let letters = classify_ok(&[LAMED, QAMATS, VAV]);
    assert!(letters[2].is_consonant());
  }

  #[test]
  fn medial_vav_with_dagesh_and_vowel_is_a_doubled_consonant() {
    let letters = classify_ok(&[LAMED, PATAH, VAV, DAGESH, QAMATS, MEM]);
    assert!(letters[2].is_consonant());
    assert!(letters[2].is_doubled());
  }

  #[test]
  fn medial_shureq_before_dagesh_is_short() {
    let letters = classify_ok(&[LAMED, VAV, DAGESH, BET, DAGESH, PATAH, MEM]);
    assert!(letters[1].is_shureq());
    assert_eq!(letters[1].vowel_length(), VowelLength::Short);
  }

  #[test]
  fn medial_holam_vav_is_long() {
    let letters = classify_ok(&[LAMED, VAV, HOLAM, MEM]);
    assert!(letters[1].is_vowel());
    assert!(letters[1].is_long());
  }

  #[test]
  fn consonant_without_dagesh_is_marked() {
    let letters = classify_ok(&[LAMED, PATAH, BET]);
    assert_eq!(letters[2].consonant_type(), ConsonantType::NoDagesh);
  }

  #[test]
  fn medial_dagesh_is_forte() {
    let letters = classify_ok(&[SHIN, PATAH, KAF, DAGESH, PATAH, LAMED]);
    assert!(letters[2].is_doubled());
  }

  #[test]
  fn begadkefat_after_sheva_is_lene() {
    let letters = classify_ok(&[MEM, SHEVA, BET, DAGESH, PATAH, LAMED]);
    assert_eq!(letters[2].consonant_type(), ConsonantType::Single);
  }

  #[test]
  fn edge_consonants_with_dagesh_are_single() {
    let letters = classify_ok(&[BET, DAGESH, PATAH, KAF, DAGESH]);
    assert_eq!(letters[0].consonant_type(), ConsonantType::Single);
    assert_eq!(letters[3].consonant_type(), ConsonantType::Single);
  }

  #[test]
  fn vowel_lengths() {
    let letters = classify_ok(&[BET, SHEVA, LAMED, TSERE, MEM, PATAH, ALEPH, HIRIQ, METEG]);
    assert_eq!(letters[1].vowel_length(), VowelLength::VeryShort);
    assert_eq!(letters[3].vowel_length(), VowelLength::Long);
    assert_eq!(letters[5].vowel_length(), VowelLength::Short);
    assert_eq!(letters[7].vowel_length(), VowelLength::Long);
  }

  #[test]
  fn accents_are_categorized() {
    let letters = classify_ok(&[BET, PATAH, '\u{0591}']);
    assert!(letters[2].is_accent());
  }

  #[test]
  fn leading_mark_is_rejected() {
    let err = classify(&[PATAH, BET]).unwrap_err();
    assert_eq!(err.violation, Violation::LeadingMark { codepoint: PATAH });
    assert!(err.analysis.is_empty());
  }

  #[test]
  fn latin_letter_is_rejected_with_partial_analysis() {
    let err = classify(&[BET, PATAH, 'x']).unwrap_err();
    assert_eq!(
      err.violation,
      Violation::UnexpectedCodepoint {
        position: 2,
        codepoint: 'x'
      }
    );
    assert_eq!(err.analysis.len(), 2);
  }
}
