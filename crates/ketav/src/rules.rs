//! Equivalence rules between user-typed spellings and the transliteration convention.
//!
//! The table is built once per process and shared read-only afterwards.

use std::sync::OnceLock;

use tracing::debug;

/// One substitution: every occurrence of `from` may stand for any of `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransliterationRule {
  /// Spelling as typed
  pub from: &'static str,
  /// Spellings it may stand for
  pub to: &'static [&'static str],
}

impl TransliterationRule {
  /// Variants of `input` produced by this rule; empty when `from` does not occur.
  pub fn apply(&self, input: &str) -> Vec<String> {
    if !input.contains(self.from) {
      return Vec::new();
    }
    self.to.iter().map(|to| input.replace(self.from, to)).collect()
  }
}

static RULES: OnceLock<Vec<TransliterationRule>> = OnceLock::new();

/// The rule table, in application order.
pub fn transliteration_rules() -> &'static [TransliterationRule] {
  RULES.get_or_init(|| {
    let rules = vec![
      rule("v", &["b", "w"]),
      rule("w", &["v"]),
      rule("j", &["y"]),
      rule("x", &["h"]),
      rule("+", &["t"]),
      rule("$", &["s"]),
      rule("s", &["sh", "ts"]),
      rule("ch", &["h"]),
      rule("gh", &["g"]),
      rule("kh", &["k"]),
      rule("dh", &["d"]),
      rule("th", &["t"]),
      rule("ph", &["p"]),
      rule("tz", &["ts"]),
    ];
    debug!(count = rules.len(), "transliteration rules built");
    rules
  })
}

fn rule(from: &'static str, to: &'static [&'static str]) -> TransliterationRule {
  TransliterationRule { from, to }
}

/// Expands a typed query into the spellings it may stand for.
///
/// The lowercased query comes first. Every rule is applied in order to every
/// variant collected so far; duplicates are dropped and at most
/// `max_variants` spellings are returned.
pub fn expand_query(query: &str, max_variants: usize) -> Vec<String> {
  if max_variants == 0 {
    return Vec::new();
  }
  let mut variants = vec![query.to_lowercase()];

  'rules: for rule in transliteration_rules() {
    let mut index = 0;
    let known = variants.len();
    while index < known {
      for candidate in rule.apply(&variants[index]) {
        if variants.len() >= max_variants {
          break 'rules;
        }
        if !variants.contains(&candidate) {
          variants.push(candidate);
        }
      }
      index += 1;
    }
  }

  variants
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn table_is_built_once_in_order() {
    let first = transliteration_rules();
    let second = transliteration_rules();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 14);
    assert_eq!(first[0].from, "v");
    assert_eq!(first[13].from, "tz");
  }

  #[test]
  fn rule_replaces_every_occurrence() {
    let rule = rule("s", &["sh", "ts"]);
    assert_eq!(rule.apply("sas"), vec!["shash".to_string(), "tsats".to_string()]);
    assert!(rule.apply("abc").is_empty());
  }

  #[test]
  fn query_comes_first_lowercased() {
    let variants = expand_query("Melek", 32);
    assert_eq!(variants, vec!["melek".to_string()]);
  }

  #[test]
  fn expansion_applies_rules_to_earlier_variants() {
    let variants = expand_query("dav", 32);
    assert_eq!(variants[0], "dav");
    assert!(variants.contains(&"dab".to_string()));
    assert!(variants.contains(&"daw".to_string()));
    // w -> v applied to "daw" gives "dav" again, which is not repeated
    assert_eq!(variants.iter().filter(|v| *v == "dav").count(), 1);
  }

  #[test]
  fn expansion_chains_rules() {
    let variants = expand_query("ch$", 32);
    assert!(variants.contains(&"chs".to_string()));
    assert!(variants.contains(&"chsh".to_string()));
    assert!(variants.contains(&"hs".to_string()));
  }

  #[test]
  fn expansion_is_capped() {
    let variants = expand_query("vsvsvs", 3);
    assert_eq!(variants.len(), 3);
    assert_eq!(variants[0], "vsvsvs");
    assert!(expand_query("abc", 0).is_empty());
  }
}
