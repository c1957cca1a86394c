use anyhow::Context;
use clap::Parser;
use console::style;
use showstress::{annotate_line, Dictionary, PhonemeRegistry};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Reads a line of words from standard input and prints each one with a
/// stress mark on its stressed vowel.
#[derive(Parser, Debug)]
#[command()]
struct Args {
  /// Orthography config (JSON) instead of the built-in one
  #[arg(long)]
  config: Option<PathBuf>,

  /// Pronunciation dictionary ("word pronunciation" per line) instead of the built-in one
  #[arg(long)]
  dictionary: Option<PathBuf>,

  /// Stop at the first word that cannot be annotated
  #[arg(long)]
  fail_fast: bool,
}

fn load(args: &Args) -> anyhow::Result<(PhonemeRegistry, Dictionary)> {
  let registry = match &args.config {
    Some(path) => PhonemeRegistry::load(path),
    None => PhonemeRegistry::builtin()
  }.context("could not load the orthography config")?;

  let dictionary = match &args.dictionary {
    Some(path) => Dictionary::load(path),
    None => Dictionary::builtin()
  }.context("could not load the pronunciation dictionary")?;

  Ok((registry, dictionary))
}

fn run(args: &Args) -> anyhow::Result<bool> {
  let (registry, dictionary) = load(args)?;

  let mut line = String::new();
  io::stdin().lock().read_line(&mut line).context("could not read standard input")?;

  let stdout = io::stdout();
  let mut out = stdout.lock();
  let mut all_ok = true;

  for annotation in annotate_line(&registry, &dictionary, &line) {
    match annotation.result {
      Ok(marked) => writeln!(out, "{}", marked)?,
      Err(e) => {
        all_ok = false;
        log::debug!("{:?}", e);
        eprintln!("{}: {}", style(&annotation.word).red(), e);
        if args.fail_fast {
          break;
        }
      }
    }
  }

  out.flush()?;
  Ok(all_ok)
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

  let args = Args::parse();

  match run(&args) {
    Ok(true) => ExitCode::SUCCESS,
    Ok(false) => ExitCode::FAILURE,
    Err(e) => {
      eprintln!("{} {:#}", style("error:").red().bold(), e);
      ExitCode::FAILURE
    }
  }
}
