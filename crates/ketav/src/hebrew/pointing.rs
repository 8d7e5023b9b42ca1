//! Pointing scan: the one primitive behind every "does this letter carry X" question.
//!
//! A scan starts next to a position, walks in one direction over the marks
//! attached to the neighbouring letter and stops at the first consonant it
//! meets. It never leaves the word.

use super::alphabet::{ALEPH, VAV};

/// Scan direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
  /// Towards the end of the word
  Forward,
  /// Towards the start of the word
  Backward,
}

/// How the target set is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
  /// True on the first target seen
  Any,
  /// True once every target has been seen
  All,
}

/// Where a scan stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
  /// Stops at any letter
  Consonant,
  /// Walks through Vav and stops at any other letter
  ConsonantExceptVav,
}

impl Boundary {
  fn stops_at(self, c: char) -> bool {
    match self {
      Boundary::Consonant => c >= ALEPH,
      Boundary::ConsonantExceptVav => c >= ALEPH && c != VAV,
    }
  }
}

/// A scan request against a decomposed word.
#[derive(Debug, Clone, Copy)]
pub struct PointingScan<'a> {
  input: &'a [char],
  direction: Direction,
  mode: MatchMode,
  boundary: Boundary,
}

impl<'a> PointingScan<'a> {
  /// Forward "any" scan stopping at consonants.
  pub fn forward(input: &'a [char]) -> Self {
    Self {
      input,
      direction: Direction::Forward,
      mode: MatchMode::Any,
      boundary: Boundary::Consonant,
    }
  }

  /// Backward "any" scan stopping at consonants.
  pub fn backward(input: &'a [char]) -> Self {
    Self {
      direction: Direction::Backward,
      ..Self::forward(input)
    }
  }

  /// Requires every target instead of any.
  #[must_use]
  pub fn all(mut self) -> Self {
    self.mode = MatchMode::All;
    self
  }

  /// Lets the scan walk through Vav.
  #[must_use]
  pub fn through_vav(mut self) -> Self {
    self.boundary = Boundary::ConsonantExceptVav;
    self
  }

  /// Runs the scan from `position` (exclusive) against `targets`.
  pub fn matches(&self, position: usize, targets: &[char]) -> bool {
    let mut seen = vec![false; targets.len()];
    let mut remaining = targets.len();

    for &c in self.neighbours(position) {
      if self.boundary.stops_at(c) {
        break;
      }

      for (slot, &target) in seen.iter_mut().zip(targets) {
        if c == target && !*slot {
          if self.mode == MatchMode::Any {
            return true;
          }
          *slot = true;
          remaining -= 1;
        }
      }

      if self.mode == MatchMode::All && remaining == 0 {
        return true;
      }
    }

    self.mode == MatchMode::All && remaining == 0
  }

  fn neighbours(&self, position: usize) -> Box<dyn Iterator<Item = &'a char> + 'a> {
    match self.direction {
      Direction::Forward => Box::new(self.input.iter().skip(position + 1)),
      Direction::Backward => Box::new(self.input[..position.min(self.input.len())].iter().rev()),
    }
  }
}

/// Forward "any" scan, the most common question.
pub fn has_any_after(input: &[char], position: usize, targets: &[char]) -> bool {
  PointingScan::forward(input).matches(position, targets)
}

/// Backward "any" scan.
pub fn has_any_before(input: &[char], position: usize, targets: &[char]) -> bool {
  PointingScan::backward(input).matches(position, targets)
}
