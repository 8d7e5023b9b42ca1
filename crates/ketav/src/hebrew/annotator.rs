//! Letter annotator: the two whole-word passes run after classification.
//!
//! - Pass 1 marks the vowel each accent sits on as stressed.
//! - Pass 2 decides whether each sheva is vocal or silent.

use super::alphabet::{DAGESH, GERESH, GERESH_MUQDAM, SHEVA, VAV};
use super::classifier::is_last_consonant;
use super::letter::{Letter, SoundingType, VowelLength, VowelStress};
use super::pointing::has_any_after;
use crate::errors::{TransliterationError, Violation};

/// Runs both passes in order.
///
/// # Errors
/// Fails when an accent has no vowel anywhere before or around it.
pub fn annotate(input: &[char], letters: &mut [Letter]) -> Result<(), TransliterationError> {
  mark_stress(input, letters)?;
  mark_sheva(input, letters);
  Ok(())
}

/// Pass 1.
fn mark_stress(input: &[char], letters: &mut [Letter]) -> Result<(), TransliterationError> {
  for position in 0..letters.len() {
    if letters[position].is_accent() {
      // a prepositive geresh on the first letter does not mark the stressed syllable
      let counts = !is_geresh(input[position]) || previous_consonant(letters, position) != Some(0);
      if !counts {
        continue;
      }

      let Some(vowel) = close_vowel(letters, position) else {
        return Err(TransliterationError::new(
          input,
          Violation::NoVowelForAccent { position },
          letters.to_vec(),
        ));
      };
      letters[vowel].stress = VowelStress::Stressed;
    } else if letters[position].codepoint() == VAV
      && letters[position].is_vowel()
      && has_any_after(input, position, &[DAGESH])
    {
      letters[position].vowel_length = VowelLength::Short;
    }
  }
  Ok(())
}

/// Pass 2.
fn mark_sheva(input: &[char], letters: &mut [Letter]) {
  let mut previous = None;

  for position in 0..letters.len() {
    if letters[position].is_consonant() {
      previous = Some(position);
      continue;
    }
    if letters[position].codepoint() != SHEVA {
      continue;
    }

    let sounding = !is_last_consonant(input, position)
      && previous.is_some_and(|consonant| {
        consonant == 0 || letters[consonant].is_doubled() || after_long_unstressed(letters, consonant)
      });

    letters[position].sounding = if sounding {
      SoundingType::Sounding
    } else {
      SoundingType::Silent
    };
  }
}

fn is_geresh(c: char) -> bool {
  c == GERESH || c == GERESH_MUQDAM
}

fn previous_consonant(letters: &[Letter], position: usize) -> Option<usize> {
  letters[..position].iter().rposition(Letter::is_consonant)
}

/// Vowel carrying an accent.
///
/// Tries the marks after the accent, then the marks before it (neither tier
/// crosses a consonant nor reaches the first letter), then any vowel earlier
/// in the word.
fn close_vowel(letters: &[Letter], position: usize) -> Option<usize> {
  let forward = (position + 1..letters.len()).map_while(|i| vowel_or_stop(letters, i));
  let backward = (1..position).rev().map_while(|i| vowel_or_stop(letters, i));

  forward
    .flatten()
    .next()
    .or_else(|| backward.flatten().next())
    .or_else(|| (0..=position).rev().find(|&i| letters[i].is_vowel()))
}

/// `Some(Some(i))` on a vowel, `Some(None)` on a mark, `None` on a consonant.
fn vowel_or_stop(letters: &[Letter], i: usize) -> Option<Option<usize>> {
  let letter = &letters[i];
  if letter.is_consonant() {
    None
  } else if letter.is_vowel() {
    Some(Some(i))
  } else {
    Some(None)
  }
}

/// True when the syllable before `consonant` ends in a long unstressed vowel
/// or already holds a sheva.
fn after_long_unstressed(letters: &[Letter], consonant: usize) -> bool {
  letters[..consonant]
    .iter()
    .rev()
    .take_while(|letter| !letter.is_consonant())
    .any(|letter| {
      (letter.is_vowel() && letter.is_long() && !letter.is_stressed()) || letter.codepoint() == SHEVA
    })
}
