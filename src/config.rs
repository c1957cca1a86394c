use serde::Deserialize;
use std::collections::HashMap;
use std::io::{self, Read};
use std::fs::File;
use std::path::Path;

use crate::error::ConfigError;

const BUILTIN: &str = include_str!("../res/orthography.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Inventory {
  #[serde(default)]
  pub vowels: Vec<String>,
  #[serde(default, alias = "diphtongs")]
  pub diphthongs: Vec<String>,
  #[serde(default)]
  pub consonants: Vec<String>,
}

/// The orthography document: phoneme inventory, how each phoneme may be
/// spelled, and the stress-marked form of each letter.
#[derive(Debug, Clone, Deserialize)]
pub struct OrthographyConfig {
  #[serde(rename = "IPA")]
  pub ipa: Inventory,
  pub renderings: HashMap<String, Vec<String>>,
  pub stressmarks: HashMap<String, String>,
}

impl OrthographyConfig {
  pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
    Ok(serde_json::from_reader(io::BufReader::new(reader))?)
  }

  pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| ConfigError::Io { path: path.to_owned(), error })?;
    Self::from_reader(file)
  }

  pub fn builtin() -> Result<Self, ConfigError> {
    Ok(serde_json::from_str(BUILTIN)?)
  }
}
