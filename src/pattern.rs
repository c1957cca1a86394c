use itertools::Itertools;
use regex::{Regex, RegexBuilder};

use crate::error::PatternError;

/// Uncompiled regular expression, built up from phoneme and orthography
/// fragments. Fragments are inserted verbatim, so they may themselves be
/// regex syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
  source: String
}

impl Pattern {
  pub fn empty() -> Self {
    Pattern { source: String::new() }
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  pub fn push(&mut self, other: &Pattern) {
    self.source.push_str(&other.source);
  }

  pub fn concat<I: IntoIterator<Item = Pattern>>(patterns: I) -> Self {
    let mut res = Pattern::empty();
    for p in patterns {
      res.push(&p);
    }
    res
  }

  pub fn compile(&self) -> Result<Regex, PatternError> {
    Regex::new(&self.source).map_err(|error| self.invalid(error))
  }

  pub fn compile_case_insensitive(&self) -> Result<Regex, PatternError> {
    RegexBuilder::new(&self.source)
      .case_insensitive(true)
      .build()
      .map_err(|error| self.invalid(error))
  }

  fn invalid(&self, error: regex::Error) -> PatternError {
    PatternError::Invalid { pattern: self.source.clone(), error }
  }
}

/// `[a, bc]` becomes `(?:(?:a)|(?:bc))`. Earlier items win when several
/// could match at the same position.
pub fn build_alternation<S: AsRef<str>>(items: &[S]) -> Result<Pattern, PatternError> {
  if items.is_empty() {
    return Err(PatternError::EmptyAlternation);
  }

  let alternatives = items.iter().map(|s| format!("(?:{})", s.as_ref())).join("|");
  Ok(Pattern { source: format!("(?:{})", alternatives) })
}
