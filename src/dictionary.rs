use lazy_static::lazy_static;
use log::info;
use nom::IResult;
use nom::bytes::complete::take_till1;
use nom::character::complete::{space0, space1};
use nom::combinator::{all_consuming, map};
use nom::sequence::tuple;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::DictionaryError;

const BUILTIN: &str = include_str!("../res/pronunciations.txt");

/// Where transcriptions come from. Keys are lowercase spellings.
pub trait PronunciationSource {
  fn pronunciation(&self, word: &str) -> Option<&str>;
}

impl PronunciationSource for HashMap<String, String> {
  fn pronunciation(&self, word: &str) -> Option<&str> {
    self.get(word).map(|p| p.as_str())
  }
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
  entries: BTreeMap<String, String>
}

impl PronunciationSource for Dictionary {
  fn pronunciation(&self, word: &str) -> Option<&str> {
    self.entries.get(word).map(|p| p.as_str())
  }
}

fn parse_entry(i: &str) -> IResult<&str, (&str, &str)> {
  map(
    tuple((space0, take_till1(char::is_whitespace), space1, take_till1(char::is_whitespace), space0)),
    |(_, word, _, pronunciation, _)| (word, pronunciation)
  )(i)
}

impl Dictionary {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn insert(&mut self, word: &str, pronunciation: &str) {
    self.entries.insert(word.to_lowercase(), pronunciation.to_owned());
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Entries in alphabetical order.
  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self.entries.iter().map(|(w, p)| (w.as_str(), p.as_str()))
  }

  /// One `word pronunciation` pair per line. `#` starts a comment.
  pub fn parse(text: &str) -> Result<Self, DictionaryError> {
    lazy_static! {
      static ref COMMENT_STRIPPING_RE: Regex = Regex::new(r"\s*#.*").unwrap();
    }

    let mut dictionary = Dictionary::new();

    for (line_i, line) in text.lines().enumerate() {
      let line = COMMENT_STRIPPING_RE.replace(line, "");
      if line.trim().is_empty() {
        continue;
      }

      let mut entry = all_consuming(parse_entry);
      match entry(&*line) {
        Ok((_, (word, pronunciation))) => dictionary.insert(word, pronunciation),
        Err(_) => return Err(DictionaryError::Malformed { line: line_i + 1, text: line.trim().to_owned() })
      };
    }

    Ok(dictionary)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|error| DictionaryError::Io { path: path.to_owned(), error })?;
    let dictionary = Self::parse(&text)?;
    info!("Loaded {} pronunciations from {}", dictionary.len(), path.display());
    Ok(dictionary)
  }

  pub fn builtin() -> Result<Self, DictionaryError> {
    Self::parse(BUILTIN)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_parse_entry() {
    assert_eq!(parse_entry("vital ˈvaɪtɫ̩"), Ok(("", ("vital", "ˈvaɪtɫ̩"))));
    assert_eq!(parse_entry("  plate\t ˈpleɪt  "), Ok(("", ("plate", "ˈpleɪt"))));
    assert!(parse_entry("vital").is_err());
  }

  #[test]
  fn test_parse() {
    let dictionary = Dictionary::parse("# header\n\nVital ˈvaɪtɫ̩ # comment\nplate ˈpleɪt\n").unwrap();
    assert_eq!(dictionary.len(), 2);
    assert_eq!(dictionary.pronunciation("vital"), Some("ˈvaɪtɫ̩"));
    assert_eq!(dictionary.pronunciation("plate"), Some("ˈpleɪt"));
    assert_eq!(dictionary.pronunciation("gypsy"), None);
  }

  #[test]
  fn test_malformed_line() {
    match Dictionary::parse("plate ˈpleɪt\nvital\n") {
      Err(DictionaryError::Malformed { line, text }) => {
        assert_eq!(line, 2);
        assert_eq!(text, "vital");
      },
      other => panic!("unexpected {:?}", other),
    }
    assert!(Dictionary::parse("plate ˈpleɪt extra").is_err());
  }

  #[test]
  fn test_builtin() {
    let dictionary = Dictionary::builtin().unwrap();
    let words: Vec<&str> = dictionary.iter().map(|(w, _)| w).collect();
    assert_eq!(words, vec!["gypsy", "individual", "plate", "readiness", "readonly", "vital", "wyoming"]);
    assert_eq!(dictionary.pronunciation("individual"), Some("ɪndɪˈvɪdʒʊ(ə)l"));
  }

  #[test]
  fn test_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "hotel hoʊˈtɛl").unwrap();
    let dictionary = Dictionary::load(file.path()).unwrap();
    assert_eq!(dictionary.pronunciation("hotel"), Some("hoʊˈtɛl"));

    assert!(matches!(Dictionary::load("/nonexistent/words.txt"), Err(DictionaryError::Io { .. })));
  }

  #[test]
  fn test_comment_after_entry_is_dropped_per_line() {
    let text = "# words
hotel hoʊˈtɛl # final stress
  # indented comment
Chaos ˈkeɪɒs
";
    let dictionary = Dictionary::parse(text).unwrap();
    assert_eq!(dictionary.len(), 2);
    assert!(!dictionary.is_empty());
    assert_eq!(dictionary.pronunciation("hotel"), Some("hoʊˈtɛl"));
    assert_eq!(dictionary.pronunciation("chaos"), Some("ˈkeɪɒs"));

    assert!(Dictionary::parse("# nothing here\n\n").unwrap().is_empty());
  }
}
