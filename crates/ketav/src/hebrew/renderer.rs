//! Renderer: annotated letters to the Latin transliteration.

use super::alphabet::{
  ALEPH, AYIN, BET, DALET, GIMEL, HATAF_PATAH, HATAF_QAMATS, HATAF_SEGOL, HE, HET, HIRIQ, HOLAM,
  KAF, LAMED, MEM, NUN, PATAH, PE, QAMATS, QAMATS_2, QAMATS_QATAN, QOF, QUBUTS, RESH, SAMEKH,
  SEGOL, SHEVA, SHIN, SHIN_DOT, TAV, TET, TSADI, TSERE, VAV, YOD, ZAYIN, is_reduced_vowel,
};
use super::letter::Letter;

/// Right single quotation mark, rendered for Aleph.
pub const ALEPH_MARK: char = '\u{2019}';
/// Left single quotation mark, rendered for Ayin.
pub const AYIN_MARK: char = '\u{2018}';
/// b with line below (spirant Bet).
pub const B_WITH_LINE: char = '\u{1E07}';
/// k with line below (spirant Kaf).
pub const K_WITH_LINE: char = '\u{1E35}';
/// h with dot below (Het).
pub const H_WITH_DOT: char = '\u{1E25}';
/// t with dot below (Tet).
pub const T_WITH_DOT: char = '\u{1E6D}';

/// Marker written before a stressed vowel.
pub const STRESS_MARK: char = '*';
/// Syllable separator, also used between the halves of a doubled consonant.
pub const SYLLABLE_BREAK: char = '-';

/// Renders the letters of one word.
pub fn render(letters: &[Letter]) -> String {
  let mut out: Vec<char> = Vec::with_capacity(letters.len() + 16);

  for position in 0..letters.len() {
    let letter = &letters[position];
    if letter.is_stressed() {
      out.push(STRESS_MARK);
    }

    hyphenate(letters, position, &mut out);

    let start = out.len();
    if letter.codepoint() == HOLAM {
      // holam on a vowel Vav is written before the w
      if out.last() == Some(&'w') {
        out.insert(out.len() - 1, 'o');
      } else {
        out.push('o');
      }
    } else {
      out.extend(glyph(letter, position).chars());
    }

    if letter.is_doubled() {
      let end = out.len();
      out.push(SYLLABLE_BREAK);
      out.extend_from_within(start..end);
    }
  }

  fix_ending(&mut out);
  out.into_iter().collect()
}

fn glyph(letter: &Letter, position: usize) -> &'static str {
  let spirant = letter.has_no_dagesh() && position != 0;

  match letter.codepoint() {
    ALEPH => "\u{2019}",
    BET if spirant => "\u{1E07}",
    BET => "b",
    GIMEL => "g",
    DALET => "d",
    HE => "h",
    VAV if letter.is_vowel() && letter.is_shureq() => "uw",
    VAV if letter.is_vowel() => "w",
    VAV => "v",
    ZAYIN => "z",
    HET => "\u{1E25}",
    TET => "\u{1E6D}",
    YOD => "y",
    KAF if spirant => "\u{1E35}",
    KAF => "k",
    LAMED => "l",
    MEM => "m",
    NUN => "n",
    SAMEKH => "s",
    AYIN => "\u{2018}",
    PE if spirant => "ph",
    PE => "p",
    TSADI => "ts",
    QOF => "q",
    RESH => "r",
    SHIN => "s",
    TAV => "t",

    SHEVA if letter.is_silent() => "",
    SHEVA => "'e",
    HATAF_SEGOL => ".e",
    HATAF_PATAH => ".a",
    HATAF_QAMATS => ".o",
    HIRIQ => "i",
    TSERE => "é",
    SEGOL => "e",
    PATAH => "a",
    QAMATS => "aa",
    QAMATS_2 => "a",
    QUBUTS => "u",
    QAMATS_QATAN => "o",
    SHIN_DOT => "h",
    _ => "",
  }
}

/// Writes a syllable break before a consonant when the previous syllable is closed off.
fn hyphenate(letters: &[Letter], position: usize, out: &mut Vec<char>) {
  if position == 0
    || !letters[position].is_consonant()
    || is_last_consonant_without_vowel(letters, position)
  {
    return;
  }

  let mut found_long = false;
  let mut found_stressed = false;
  for letter in letters[1..position].iter().rev().take_while(|l| !l.is_consonant()) {
    if !letter.is_vowel() {
      continue;
    }
    if is_reduced_vowel(letter.codepoint()) {
      out.push(SYLLABLE_BREAK);
      return;
    }
    found_long |= letter.is_long();
    found_stressed |= letter.is_stressed();
    if found_long && !found_stressed {
      out.push(SYLLABLE_BREAK);
      return;
    }
  }

  if letters[position].is_doubled() {
    return;
  }

  let silent_sheva_follows = letters[position + 1..]
    .iter()
    .take_while(|l| !l.is_consonant())
    .any(|l| l.codepoint() == SHEVA && l.is_silent());
  if silent_sheva_follows {
    return;
  }

  out.push(SYLLABLE_BREAK);
}

fn is_last_consonant_without_vowel(letters: &[Letter], position: usize) -> bool {
  let rest = &letters[position + 1..];
  !rest.iter().any(Letter::is_consonant) && !rest.iter().any(Letter::is_vowel)
}

/// Final "ha", "ḥa" and "‘a" are written as "ah", "aḥ" and "a‘".
fn fix_ending(out: &mut [char]) {
  let len = out.len();
  if len < 2 || out[len - 1] != 'a' {
    return;
  }
  if matches!(out[len - 2], 'h' | H_WITH_DOT | AYIN_MARK) {
    out.swap(len - 2, len - 1);
  }
}
