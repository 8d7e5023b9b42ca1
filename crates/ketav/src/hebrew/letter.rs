//! Per-code-point letter model shared by the classifier, annotator and renderer.

use std::fmt;

/// What a code point is within the word.
///
/// Vav and Yod used as matres lectionis are `Vowel` even though their code
/// point is a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
  /// Pronounced consonant
  Consonant,
  /// Vowel point or mater lectionis
  Vowel,
  /// Cantillation accent or other non-pronounced mark
  Accent,
  /// Dagesh; only modifies its neighbours
  Dagesh,
}

/// Gemination state of a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsonantType {
  /// Not a consonant
  #[default]
  Unset,
  /// Rendered once
  Single,
  /// Dagesh forte: rendered twice
  DoubleGeminated,
  /// No dagesh: begadkefat letters are spirantized
  NoDagesh,
}

/// Vowel length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VowelLength {
  /// Not a vowel
  #[default]
  Unset,
  /// Sheva and hataf vowels
  VeryShort,
  /// Short
  Short,
  /// Long
  Long,
}

/// Vowel stress, assigned from accent placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VowelStress {
  /// Default
  #[default]
  Unstressed,
  /// Carries the accent
  Stressed,
}

/// Vocal/silent state of a sheva.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SoundingType {
  /// Not a sheva
  #[default]
  Unset,
  /// Vocal sheva, rendered `'e`
  Sounding,
  /// Silent sheva, rendered as nothing
  Silent,
}

/// One code point of a word plus everything the passes learned about it.
///
/// `category` is fixed at construction; the annotator only touches the
/// refinement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter {
  codepoint: char,
  category: Category,
  pub(crate) consonant_type: ConsonantType,
  pub(crate) vowel_length: VowelLength,
  pub(crate) stress: VowelStress,
  pub(crate) sounding: SoundingType,
  pub(crate) shureq: bool,
}

impl Letter {
  /// Creates a letter with every refinement unset.
  pub fn new(codepoint: char, category: Category) -> Self {
    Self {
      codepoint,
      category,
      consonant_type: ConsonantType::Unset,
      vowel_length: VowelLength::Unset,
      stress: VowelStress::Unstressed,
      sounding: SoundingType::Unset,
      shureq: false,
    }
  }

  /// Consonant with its gemination state.
  pub(crate) fn consonant(codepoint: char) -> Self {
    Self::new(codepoint, Category::Consonant)
  }

  /// Vowel with its length.
  pub(crate) fn vowel(codepoint: char, length: VowelLength) -> Self {
    let mut letter = Self::new(codepoint, Category::Vowel);
    letter.vowel_length = length;
    letter
  }

  /// Code point (final forms already mapped to their base letter).
  pub fn codepoint(&self) -> char {
    self.codepoint
  }

  /// Category assigned by the classifier.
  pub fn category(&self) -> Category {
    self.category
  }

  /// Gemination state.
  pub fn consonant_type(&self) -> ConsonantType {
    self.consonant_type
  }

  /// Vowel length.
  pub fn vowel_length(&self) -> VowelLength {
    self.vowel_length
  }

  /// Vowel stress.
  pub fn stress(&self) -> VowelStress {
    self.stress
  }

  /// Sheva state.
  pub fn sounding(&self) -> SoundingType {
    self.sounding
  }

  /// True for a Vav read as "u".
  pub fn is_shureq(&self) -> bool {
    self.shureq
  }

  /// True when the category is `Consonant`.
  pub fn is_consonant(&self) -> bool {
    self.category == Category::Consonant
  }

  /// True when the category is `Vowel`.
  pub fn is_vowel(&self) -> bool {
    self.category == Category::Vowel
  }

  /// True for an accent.
  pub fn is_accent(&self) -> bool {
    self.category == Category::Accent
  }

  /// True for a geminated consonant.
  pub fn is_doubled(&self) -> bool {
    self.consonant_type == ConsonantType::DoubleGeminated
  }

  /// True for a consonant without dagesh.
  pub fn has_no_dagesh(&self) -> bool {
    self.consonant_type == ConsonantType::NoDagesh
  }

  /// True for a long vowel.
  pub fn is_long(&self) -> bool {
    self.vowel_length == VowelLength::Long
  }

  /// True for a stressed vowel.
  pub fn is_stressed(&self) -> bool {
    self.stress == VowelStress::Stressed
  }

  /// True for a silent sheva.
  pub fn is_silent(&self) -> bool {
    self.sounding == SoundingType::Silent
  }
}

/// One diagnostic line, in the same layout for trace output and error dumps.
impl fmt::Display for Letter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "char=[0x{:x}]\tletter=[{:?}]\tconsonant=[{:?}]\tvLength[{:?}]\tvStress[{:?}]\tsounding[{:?}]",
      self.codepoint as u32,
      self.category,
      self.consonant_type,
      self.vowel_length,
      self.stress,
      self.sounding
    )
  }
}
