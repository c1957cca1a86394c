use anyhow::Context;
use clap::Parser;
use console::style;
use rayon::prelude::*;
use showstress::{Dictionary, PhonemeRegistry, Word};
use std::path::PathBuf;
use std::process::ExitCode;

/// Annotates every entry of a pronunciation dictionary and reports the ones
/// the orthography config cannot handle.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  #[arg(long)]
  config: Option<PathBuf>,

  #[arg(long)]
  dictionary: Option<PathBuf>,
}

fn main() -> anyhow::Result<ExitCode> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Args::parse();

  let registry = match &args.config {
    Some(path) => PhonemeRegistry::load(path),
    None => PhonemeRegistry::builtin()
  }.context("could not load the orthography config")?;

  let dictionary = match &args.dictionary {
    Some(path) => Dictionary::load(path),
    None => Dictionary::builtin()
  }.context("could not load the pronunciation dictionary")?;

  if dictionary.is_empty() {
    log::warn!("The pronunciation dictionary has no entries");
  }

  let entries: Vec<(&str, &str)> = dictionary.iter().collect();
  let results: Vec<_> = entries.par_iter()
    .map(|(word, pronunciation)| Word::new(&registry, word, pronunciation).and_then(|w| w.process()))
    .collect();

  let mut failures = 0;
  for ((word, pronunciation), result) in entries.iter().zip(results) {
    match result {
      Ok(marked) => println!("{} {} → {}", word, pronunciation, marked),
      Err(e) => {
        failures += 1;
        println!("{} {} → {}", style(word).red(), pronunciation, style(e).red());
      }
    }
  }

  println!("");
  println!("{} entries, {} failed", entries.len(), failures);

  Ok(if failures == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
