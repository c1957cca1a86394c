use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
  #[error("cannot build an alternation from an empty list")]
  EmptyAlternation,

  #[error("invalid pattern /{pattern}/: {error}")]
  Invalid {
    pattern: String,
    #[source]
    error: regex::Error
  }
}

/// Failure to annotate a single word. Never affects other words.
#[derive(Debug, Error)]
pub enum AnalysisError {
  #[error("no pronunciation known for \"{0}\"")]
  UnknownWord(String),

  /// Not exactly one nucleus and no stress marker. Also covers a
  /// transcription with no vowel at all.
  #[error("could not determine the stressed syllable of {0}")]
  StressUndetermined(String),

  /// A stress marker with no vowel or diphthong after it.
  #[error("no vowel or diphthong found in {0}")]
  NoNucleus(String),

  #[error("no orthographies found for phoneme {0}")]
  UnknownPhonemeRendering(String),

  #[error("could not determine orthography of {pronunciation} in \"{word}\"")]
  OrthographyNotFound {
    word: String,
    pronunciation: String
  },

  #[error("no stress-marked form of '{character}' (in \"{word}\")")]
  UnmappedStressmark {
    character: char,
    word: String
  },

  #[error(transparent)]
  Pattern(#[from] PatternError)
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("could not read {}: {error}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    error: io::Error
  },

  #[error("malformed orthography config: {0}")]
  Json(#[from] serde_json::Error),

  #[error("the phoneme inventory has no {0}")]
  EmptyInventory(&'static str),

  #[error("phoneme {0} has an empty list of renderings")]
  EmptyRenderings(String),

  /// An empty fragment matches everywhere with zero width.
  #[error("empty fragment in {0}")]
  EmptyFragment(String),

  #[error("{field} entry \"{value}\" is not a single character")]
  NotACharacter {
    field: &'static str,
    value: String
  },

  #[error(transparent)]
  Pattern(#[from] PatternError)
}

#[derive(Debug, Error)]
pub enum DictionaryError {
  #[error("could not read {}: {error}", .path.display())]
  Io {
    path: PathBuf,
    #[source]
    error: io::Error
  },

  #[error("line {line}: expected \"word pronunciation\", found \"{text}\"")]
  Malformed {
    line: usize,
    text: String
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages_name_the_culprit() {
    assert_eq!(
      AnalysisError::UnknownPhonemeRendering("ʁ".to_owned()).to_string(),
      "no orthographies found for phoneme ʁ"
    );
    assert_eq!(
      AnalysisError::OrthographyNotFound { word: "vital".to_owned(), pronunciation: "ˈvaɪtɫ̩".to_owned() }.to_string(),
      "could not determine orthography of ˈvaɪtɫ̩ in \"vital\""
    );
    assert_eq!(
      DictionaryError::Malformed { line: 3, text: "vital".to_owned() }.to_string(),
      "line 3: expected \"word pronunciation\", found \"vital\""
    );
  }

  #[test]
  fn test_pattern_error_is_transparent() {
    let e: AnalysisError = PatternError::EmptyAlternation.into();
    assert_eq!(e.to_string(), "cannot build an alternation from an empty list");
  }
}
