pub mod error;
pub mod pattern;
pub mod config;
pub mod registry;
pub mod dictionary;
pub mod word;
pub mod annotate;

pub use annotate::{annotate_line, annotate_word, Annotation};
pub use dictionary::{Dictionary, PronunciationSource};
pub use error::{AnalysisError, ConfigError, DictionaryError, PatternError};
pub use registry::PhonemeRegistry;
pub use word::Word;
