//! Hebrew code points and character-level classification.
//!
//! Everything here works on single `char`s; context-dependent decisions
//! (Vav/Yod as vowel, dagesh forte, ...) live in the classifier.

// ─── Cantillation and punctuation ───

/// First cantillation accent (etnahta). Everything from here up to Sheva is an accent.
pub const ETNAHTA: char = '\u{0591}';
/// Accent geresh.
pub const GERESH: char = '\u{059C}';
/// Accent geresh muqdam (prepositive).
pub const GERESH_MUQDAM: char = '\u{059D}';

// ─── Vowel points ───

/// Sheva.
pub const SHEVA: char = '\u{05B0}';
/// Hataf segol.
pub const HATAF_SEGOL: char = '\u{05B1}';
/// Hataf patah.
pub const HATAF_PATAH: char = '\u{05B2}';
/// Hataf qamats.
pub const HATAF_QAMATS: char = '\u{05B3}';
/// Hiriq.
pub const HIRIQ: char = '\u{05B4}';
/// Tsere.
pub const TSERE: char = '\u{05B5}';
/// Segol.
pub const SEGOL: char = '\u{05B6}';
/// Patah.
pub const PATAH: char = '\u{05B7}';
/// Qamats.
pub const QAMATS: char = '\u{05B8}';
/// Holam.
pub const HOLAM: char = '\u{05B9}';
/// U+05BA, read as a second (short) qamats by this convention.
pub const QAMATS_2: char = '\u{05BA}';
/// Qubuts.
pub const QUBUTS: char = '\u{05BB}';
/// Dagesh (or mapiq / shureq dot).
pub const DAGESH: char = '\u{05BC}';
/// Meteg.
pub const METEG: char = '\u{05BD}';
/// Shin dot.
pub const SHIN_DOT: char = '\u{05C1}';
/// Qamats qatan, the last code point of the vowel-point range.
pub const QAMATS_QATAN: char = '\u{05C7}';

// ─── Consonants ───

/// Aleph.
pub const ALEPH: char = '\u{05D0}';
/// Bet.
pub const BET: char = '\u{05D1}';
/// Gimel.
pub const GIMEL: char = '\u{05D2}';
/// Dalet.
pub const DALET: char = '\u{05D3}';
/// He.
pub const HE: char = '\u{05D4}';
/// Vav.
pub const VAV: char = '\u{05D5}';
/// Zayin.
pub const ZAYIN: char = '\u{05D6}';
/// Het.
pub const HET: char = '\u{05D7}';
/// Tet.
pub const TET: char = '\u{05D8}';
/// Yod.
pub const YOD: char = '\u{05D9}';
/// Final kaf.
pub const FINAL_KAF: char = '\u{05DA}';
/// Kaf.
pub const KAF: char = '\u{05DB}';
/// Lamed.
pub const LAMED: char = '\u{05DC}';
/// Final mem.
pub const FINAL_MEM: char = '\u{05DD}';
/// Mem.
pub const MEM: char = '\u{05DE}';
/// Final nun.
pub const FINAL_NUN: char = '\u{05DF}';
/// Nun.
pub const NUN: char = '\u{05E0}';
/// Samekh.
pub const SAMEKH: char = '\u{05E1}';
/// Ayin.
pub const AYIN: char = '\u{05E2}';
/// Final pe.
pub const FINAL_PE: char = '\u{05E3}';
/// Pe.
pub const PE: char = '\u{05E4}';
/// Final tsadi.
pub const FINAL_TSADI: char = '\u{05E5}';
/// Tsadi.
pub const TSADI: char = '\u{05E6}';
/// Qof.
pub const QOF: char = '\u{05E7}';
/// Resh.
pub const RESH: char = '\u{05E8}';
/// Shin.
pub const SHIN: char = '\u{05E9}';
/// Tav.
pub const TAV: char = '\u{05EA}';

// ─── Alphabetic presentation forms ───

/// Aleph with mapiq, first of the "letter with dagesh" presentation forms.
const PRESENTATION_DAGESH_FIRST: char = '\u{FB30}';
/// Tav with dagesh, last of the "letter with dagesh" presentation forms.
const PRESENTATION_DAGESH_LAST: char = '\u{FB4A}';
/// Aleph-lamed ligature.
pub const ALEPH_LAMED: char = '\u{FB4F}';

/// Offset between a "letter with dagesh" presentation form and its base letter.
const PRESENTATION_DAGESH_GAP: u32 = PRESENTATION_DAGESH_FIRST as u32 - ALEPH as u32;

/// Unassigned code points inside U+FB30..=U+FB4A (no Het, Final Mem,
/// Final Nun, Ayin or Final Tsadi with dagesh form exists).
const PRESENTATION_DAGESH_UNASSIGNED: &[char] =
  &['\u{FB37}', '\u{FB3D}', '\u{FB3F}', '\u{FB42}', '\u{FB45}'];

/// Letters whose dagesh after a sheva is a dagesh lene (begadkefat).
pub const BEGADKEFAT: &[char] = &[BET, GIMEL, DALET, KAF, PE, TAV];

/// True for any character of the Hebrew block or the Hebrew presentation forms.
pub fn is_hebrew_character(c: char) -> bool {
  ('\u{0591}'..='\u{05FF}').contains(&c) || ('\u{FB11}'..='\u{FB4F}').contains(&c)
}

/// True when the text starts with a Hebrew character.
///
/// Only the first character is inspected, the same way a lexicon decides
/// which transliteration scheme applies to an entry.
pub fn is_hebrew_text(text: &str) -> bool {
  text.chars().next().is_some_and(is_hebrew_character)
}

/// True for the 27 consonant code points (including final forms).
pub fn is_consonant(c: char) -> bool {
  (ALEPH..=TAV).contains(&c)
}

/// True for the pointing range Sheva..=Qamats qatan, dagesh excluded.
///
/// Meteg, maqaf, rafe and the shin/sin dots fall in this range too and are
/// treated as (silent) vowel points.
pub fn is_vowel_point(c: char) -> bool {
  (SHEVA..=QAMATS_QATAN).contains(&c) && c != DAGESH
}

/// True for code points stripped by [`crate::normalize::strip_pointing`]:
/// accents, vowel points and dagesh.
pub fn is_pointing(c: char) -> bool {
  (ETNAHTA..ALEPH).contains(&c)
}

/// True for the hataf vowels and sheva.
pub fn is_reduced_vowel(c: char) -> bool {
  matches!(c, SHEVA | HATAF_SEGOL | HATAF_PATAH | HATAF_QAMATS)
}

/// Maps a final-form consonant to its base letter (final forms sit one below).
pub fn base_consonant(c: char) -> char {
  match c {
    FINAL_KAF | FINAL_MEM | FINAL_NUN | FINAL_PE | FINAL_TSADI => {
      char::from_u32(c as u32 + 1).unwrap_or(c)
    }
    _ => c,
  }
}

/// Decomposes a presentation form into base letter and marks.
///
/// Returns `None` for characters that are not a known presentation form.
pub fn decompose_presentation_form(c: char) -> Option<&'static [char]> {
  let decomposed: &'static [char] = match c {
    '\u{FB1D}' => &[YOD, HIRIQ],
    '\u{FB2A}' => &[SHIN, SHIN_DOT],
    '\u{FB2B}' => &[SHIN, '\u{05C2}'],
    '\u{FB2C}' => &[SHIN, DAGESH, SHIN_DOT],
    '\u{FB2D}' => &[SHIN, DAGESH, '\u{05C2}'],
    '\u{FB2E}' => &[ALEPH, PATAH],
    '\u{FB2F}' => &[ALEPH, QAMATS],
    '\u{FB4B}' => &[VAV, HOLAM],
    '\u{FB4C}' => &[BET, '\u{05BF}'],
    '\u{FB4D}' => &[KAF, '\u{05BF}'],
    '\u{FB4E}' => &[PE, '\u{05BF}'],
    ALEPH_LAMED => &[ALEPH, LAMED],
    _ => return None,
  };
  Some(decomposed)
}

/// Base letter of a "letter with dagesh" presentation form (U+FB30..=U+FB4A).
pub fn dagesh_form_base(c: char) -> Option<char> {
  if (PRESENTATION_DAGESH_FIRST..=PRESENTATION_DAGESH_LAST).contains(&c)
    && !PRESENTATION_DAGESH_UNASSIGNED.contains(&c)
  {
    char::from_u32(c as u32 - PRESENTATION_DAGESH_GAP).filter(|b| is_consonant(*b))
  } else {
    None
  }
}

/// Expands presentation forms so that every consonant and mark has its own code point.
pub fn decompose(word: &str) -> Vec<char> {
  let mut out = Vec::with_capacity(word.len());
  for c in word.chars() {
    if let Some(base) = dagesh_form_base(c) {
      out.push(base);
      out.push(DAGESH);
    } else if let Some(parts) = decompose_presentation_form(c) {
      out.extend_from_slice(parts);
    } else {
      out.push(c);
    }
  }
  out
}
