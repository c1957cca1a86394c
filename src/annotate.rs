use rayon::prelude::*;

use crate::dictionary::PronunciationSource;
use crate::error::AnalysisError;
use crate::registry::PhonemeRegistry;
use crate::word::Word;

#[derive(Debug)]
pub struct Annotation {
  pub word: String,
  pub result: Result<String, AnalysisError>
}

pub fn annotate_word<S>(registry: &PhonemeRegistry, source: &S, word: &str) -> Result<String, AnalysisError>
  where S: PronunciationSource + ?Sized
{
  Word::lookup(registry, source, word)?.process()
}

/// Annotates every whitespace-separated word of `line`, in parallel. Results
/// come back in input order and a failed word does not stop the others.
pub fn annotate_line<S>(registry: &PhonemeRegistry, source: &S, line: &str) -> Vec<Annotation>
  where S: PronunciationSource + Sync + ?Sized
{
  let words: Vec<&str> = line.split_whitespace().collect();

  words.par_iter()
    .map(|w| Annotation {
      word: w.to_string(),
      result: annotate_word(registry, source, w)
    })
    .collect()
}
