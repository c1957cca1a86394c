use log::{debug, info};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::config::OrthographyConfig;
use crate::error::{AnalysisError, ConfigError};
use crate::pattern::{build_alternation, Pattern};

/// Phoneme inventory and phoneme-to-spelling tables, with the matchers built
/// from them. Immutable once constructed; share it by reference.
#[derive(Debug)]
pub struct PhonemeRegistry {
  consonants: HashSet<char>,
  renderings: HashMap<String, Vec<String>>,
  stressmarks: HashMap<char, char>,
  unstressmarks: HashMap<char, char>,
  nucleus_re: Regex,
  phoneme_re: Regex,
  token_re: Regex,
}

fn single_char(field: &'static str, s: &str) -> Result<char, ConfigError> {
  let mut chars = s.chars();
  match (chars.next(), chars.next()) {
    (Some(c), None) => Ok(c),
    _ => Err(ConfigError::NotACharacter { field, value: s.to_owned() })
  }
}

// Longest first, so that `aɪ` is tried before `a`.
fn longest_first(items: &mut Vec<String>) {
  items.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()).then_with(|| a.cmp(b)));
}

impl PhonemeRegistry {
  pub fn from_config(config: OrthographyConfig) -> Result<Self, ConfigError> {
    let OrthographyConfig { ipa, renderings, stressmarks } = config;

    if ipa.vowels.is_empty() && ipa.diphthongs.is_empty() {
      return Err(ConfigError::EmptyInventory("vowels or diphthongs"));
    }
    if renderings.is_empty() {
      return Err(ConfigError::EmptyInventory("renderings"));
    }
    if let Some((phoneme, _)) = renderings.iter().find(|(_, r)| r.is_empty()) {
      return Err(ConfigError::EmptyRenderings(phoneme.clone()));
    }

    if ipa.vowels.iter().any(|v| v.is_empty()) {
      return Err(ConfigError::EmptyFragment("IPA.vowels".to_owned()));
    }
    if ipa.diphthongs.iter().any(|d| d.is_empty()) {
      return Err(ConfigError::EmptyFragment("IPA.diphthongs".to_owned()));
    }
    for (phoneme, spellings) in &renderings {
      if phoneme.is_empty() {
        return Err(ConfigError::EmptyFragment("the renderings keys".to_owned()));
      }
      if spellings.iter().any(|s| s.is_empty()) {
        return Err(ConfigError::EmptyFragment(format!("the renderings of {}", phoneme)));
      }
    }

    let consonants = ipa.consonants.iter()
      .map(|c| single_char("consonant", c))
      .collect::<Result<HashSet<char>, _>>()?;

    let mut marks = HashMap::new();
    let mut unmarks = HashMap::new();
    for (plain, marked) in &stressmarks {
      let plain = single_char("stressmark", plain)?;
      let marked = single_char("stressmark", marked)?;
      marks.insert(plain, marked);
      unmarks.insert(marked, plain);
    }

    let nuclei: Vec<&String> = ipa.diphthongs.iter().chain(ipa.vowels.iter()).collect();
    let nucleus_re = build_alternation(&nuclei)?.compile()?;

    let mut keys: Vec<String> = renderings.keys().cloned().collect();
    longest_first(&mut keys);
    let phoneme_re = build_alternation(&keys)?.compile()?;

    // Inventory phonemes without a rendering still have to be recognized as
    // tokens, otherwise they would be skipped instead of reported.
    let mut unrendered: Vec<String> = ipa.diphthongs.iter()
      .chain(ipa.vowels.iter())
      .chain(ipa.consonants.iter())
      .filter(|p| !renderings.contains_key(*p))
      .cloned()
      .collect();
    longest_first(&mut unrendered);
    let tokens: Vec<String> = keys.into_iter().chain(unrendered).collect();
    let token_re = build_alternation(&tokens)?.compile()?;

    info!(
      "Loaded phoneme registry: {} nuclei, {} consonants, {} renderings, {} stressmarks",
      nuclei.len(), consonants.len(), renderings.len(), marks.len()
    );

    Ok(PhonemeRegistry {
      consonants,
      renderings,
      stressmarks: marks,
      unstressmarks: unmarks,
      nucleus_re,
      phoneme_re,
      token_re,
    })
  }

  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    Self::from_config(OrthographyConfig::load(path)?)
  }

  pub fn builtin() -> Result<Self, ConfigError> {
    Self::from_config(OrthographyConfig::builtin()?)
  }

  /// Matches any single phoneme that has renderings.
  pub fn phoneme_matcher(&self) -> &Regex {
    &self.phoneme_re
  }

  /// Matches any vowel or diphthong. Diphthongs are tried first.
  pub fn nucleus_matcher(&self) -> &Regex {
    &self.nucleus_re
  }

  pub fn is_consonant(&self, ch: char) -> bool {
    self.consonants.contains(&ch)
  }

  pub fn renderings(&self, phoneme: &str) -> Option<&[String]> {
    self.renderings.get(phoneme).map(|r| r.as_slice())
  }

  pub fn stressmark(&self, ch: char) -> Option<char> {
    self.stressmarks.get(&ch).copied()
  }

  pub fn unstressmark(&self, ch: char) -> Option<char> {
    self.unstressmarks.get(&ch).copied()
  }

  /// A pattern matching every way `phonemes` could be spelled out
  /// contiguously: one alternation of renderings per phoneme, in order.
  pub fn orthography_pattern(&self, phonemes: &str) -> Result<Pattern, AnalysisError> {
    let mut parts = vec![];

    for token in self.token_re.find_iter(phonemes) {
      let phoneme = token.as_str();
      let renderings = self.renderings(phoneme)
        .ok_or_else(|| AnalysisError::UnknownPhonemeRendering(phoneme.to_owned()))?;
      parts.push(build_alternation(renderings)?);
    }

    let pattern = Pattern::concat(parts);

    debug!("orthography of {}: /{}/", phonemes, pattern.as_str());
    Ok(pattern)
  }

  pub fn orthography_matcher(&self, phonemes: &str) -> Result<Regex, AnalysisError> {
    Ok(self.orthography_pattern(phonemes)?.compile_case_insensitive()?)
  }
}
