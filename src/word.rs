use log::debug;

use crate::dictionary::PronunciationSource;
use crate::error::AnalysisError;
use crate::registry::PhonemeRegistry;

/// Primary stress, as written in IPA and in ASCII transcriptions.
pub const STRESS_MARKERS: [char; 2] = ['ˈ', '\''];

pub fn is_stress_marker(ch: char) -> bool {
  STRESS_MARKERS.contains(&ch)
}

/// A spelling together with its transcription, analyzed up to the stressed
/// nucleus. Offsets are byte offsets into the pronunciation. Everything is
/// derived once in `new` and read through accessors, so the fields always
/// agree with each other.
#[derive(Debug, Clone)]
pub struct Word<'a> {
  registry: &'a PhonemeRegistry,
  word: String,
  pronunciation: String,
  syllables: Vec<String>,
  stress_index: usize,
  stressed_vowel: String,
  stressed_vowel_end: usize,
}

impl<'a> Word<'a> {
  pub fn new(registry: &'a PhonemeRegistry, word: &str, pronunciation: &str) -> Result<Word<'a>, AnalysisError> {
    let nuclei = registry.nucleus_matcher();

    let syllables: Vec<String> = nuclei.find_iter(pronunciation).map(|m| m.as_str().to_owned()).collect();

    let stress_index = if syllables.len() == 1 {
      0
    }
    else if let Some(i) = pronunciation.find(is_stress_marker) {
      i
    }
    else {
      return Err(AnalysisError::StressUndetermined(pronunciation.to_owned()));
    };

    let stressed = nuclei.find_at(pronunciation, stress_index)
      .ok_or_else(|| AnalysisError::NoNucleus(pronunciation.to_owned()))?;

    debug!(
      "{} /{}/: syllables {:?}, stress at {}, stressed vowel {}",
      word, pronunciation, syllables, stress_index, stressed.as_str()
    );

    Ok(Word {
      registry,
      word: word.to_owned(),
      pronunciation: pronunciation.to_owned(),
      syllables,
      stress_index,
      stressed_vowel: stressed.as_str().to_owned(),
      stressed_vowel_end: stressed.end(),
    })
  }

  /// Looks the word up (lowercased) in `source`.
  pub fn lookup<S>(registry: &'a PhonemeRegistry, source: &S, word: &str) -> Result<Word<'a>, AnalysisError>
    where S: PronunciationSource + ?Sized
  {
    let pronunciation = source.pronunciation(&word.to_lowercase())
      .ok_or_else(|| AnalysisError::UnknownWord(word.to_owned()))?;
    Word::new(registry, word, pronunciation)
  }

  pub fn word(&self) -> &str {
    &self.word
  }

  pub fn pronunciation(&self) -> &str {
    &self.pronunciation
  }

  /// Vowel and diphthong nuclei, left to right.
  pub fn syllables(&self) -> &[String] {
    &self.syllables
  }

  pub fn stress_index(&self) -> usize {
    self.stress_index
  }

  pub fn stressed_vowel(&self) -> &str {
    &self.stressed_vowel
  }

  pub fn is_monosyllabic(&self) -> bool {
    self.syllables.len() == 1
  }

  /// The transcription from just after the stress marker up to the start of
  /// the next syllable. A consonant right before the next nucleus is left to
  /// that syllable's onset.
  pub fn stressed_syllable(&self) -> &str {
    let pron = self.pronunciation.as_str();

    let start = self.stress_index + pron[self.stress_index..].chars().next()
      .filter(|c| is_stress_marker(*c))
      .map_or(0, char::len_utf8);

    let end = match self.registry.nucleus_matcher().find_at(pron, self.stressed_vowel_end) {
      None => pron.len(),
      Some(next) => {
        match pron[..next.start()].chars().next_back() {
          Some(c) if self.registry.is_consonant(c) => next.start() - c.len_utf8(),
          _ => next.start() + pron[next.start()..].chars().next().map_or(0, char::len_utf8)
        }
      }
    };

    &pron[start..end]
  }

  /// Replaces the character starting at byte `index` of the spelling with its
  /// stress-marked form.
  pub fn put_stress_mark(&self, index: usize) -> Result<String, AnalysisError> {
    let ch = self.word.get(index..).and_then(|rest| rest.chars().next())
      .ok_or_else(|| self.orthography_not_found())?;
    let marked = self.registry.stressmark(ch)
      .ok_or_else(|| AnalysisError::UnmappedStressmark { character: ch, word: self.word.clone() })?;

    let mut res = String::with_capacity(self.word.len() + marked.len_utf8());
    res.push_str(&self.word[..index]);
    res.push(marked);
    res.push_str(&self.word[index + ch.len_utf8()..]);
    Ok(res)
  }

  pub fn process(&self) -> Result<String, AnalysisError> {
    let vowel_re = self.registry.orthography_matcher(&self.stressed_vowel)?;

    if self.is_monosyllabic() || self.stress_index == 0 {
      let m = vowel_re.find(&self.word).ok_or_else(|| self.orthography_not_found())?;
      return self.put_stress_mark(m.start());
    }

    let syllable = self.stressed_syllable();
    debug!("{}: stressed syllable {}", self.word, syllable);

    let syllable_re = self.registry.orthography_matcher(syllable)?;
    let spelled = syllable_re.find(&self.word).ok_or_else(|| self.orthography_not_found())?;
    let vowel = vowel_re.find(spelled.as_str()).ok_or_else(|| self.orthography_not_found())?;

    self.put_stress_mark(spelled.start() + vowel.start())
  }

  fn orthography_not_found(&self) -> AnalysisError {
    AnalysisError::OrthographyNotFound {
      word: self.word.clone(),
      pronunciation: self.pronunciation.clone()
    }
  }
}
