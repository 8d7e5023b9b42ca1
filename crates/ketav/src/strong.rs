//! Strong's-number identifiers, normalized into lexicon lookup keys.
//!
//! A key is the language letter (`G` or `H`) followed by a zero-padded
//! four-digit number and at most one lowercase disambiguation letter,
//! e.g. `H0430` or `H0430a`.

use tracing::trace;

/// Uppercase identifier prefix.
pub const UPPER_STRONG_PREFIX: &str = "STRONG:";
/// Lowercase identifier prefix.
pub const LOWER_STRONG_PREFIX: &str = "strong:";

/// Returned when an identifier cannot be read as a number at all.
pub const INVALID_KEY: &str = "err";

/// Pads a Strong's number to four digits.
///
/// When `prefixed` is true the identifier starts with `strong:` (in either
/// case), which is skipped. Trailing data after the first four digits is
/// tolerated: only a following letter is kept, lowercased.
///
/// - `H430` becomes `H0430`
/// - `H0430abc` becomes `H0430a`
/// - `Habcd` (four characters that are not a number) is returned unchanged
/// - `H12a` becomes [`INVALID_KEY`]
pub fn pad_strong_number(id: &str, prefixed: bool) -> String {
  let skip = if prefixed { UPPER_STRONG_PREFIX.len() } else { 0 };
  let mut chars = id.chars().skip(skip);
  let Some(letter) = chars.next() else {
    return INVALID_KEY.to_string();
  };
  let rest: String = chars.collect();

  if let Ok(number) = rest.parse::<i32>() {
    return format!("{letter}{number:04}");
  }
  trace!(id, "unable to parse strong number");

  let rest: Vec<char> = rest.chars().collect();
  if rest.len() <= 3 {
    return INVALID_KEY.to_string();
  }

  let first_four: String = rest[..4].iter().collect();
  match first_four.parse::<i32>() {
    Ok(number) => {
      let suffix: String = rest
        .get(4)
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default();
      format!("{letter}{number:04}{suffix}")
    }
    Err(_) => {
      trace!(first_four, "unable to convert to a padded number");
      id.to_string()
    }
  }
}

/// Splits a list of identifiers into lookup keys.
///
/// Separators are runs of spaces and commas. `G`/`H` identifiers are padded;
/// `STRONG:`/`strong:` identifiers are padded after the prefix; anything else
/// is passed through. A blank list yields no keys.
pub fn parse_identifiers(list: &str) -> Vec<String> {
  list
    .split([' ', ','])
    .filter(|id| !id.is_empty())
    .map(|id| {
      if id.starts_with(['G', 'H']) {
        pad_strong_number(id, false)
      } else if (id.starts_with(UPPER_STRONG_PREFIX) || id.starts_with(LOWER_STRONG_PREFIX))
        && id.len() > UPPER_STRONG_PREFIX.len()
      {
        pad_strong_number(id, true)
      } else {
        id.to_string()
      }
    })
    .collect()
}
