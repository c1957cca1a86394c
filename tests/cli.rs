use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn showstress() -> Command {
  Command::cargo_bin("showstress").unwrap()
}

#[test]
fn test_annotates_each_word_on_its_own_line() {
  showstress()
    .write_stdin("individual vital wyoming gypsy\n")
    .assert()
    .success()
    .stdout("indivídual\nvítal\nwyóming\ngýpsy\n");
}

#[test]
fn test_only_first_line_is_read() {
  showstress()
    .write_stdin("plate\nreadiness\n")
    .assert()
    .success()
    .stdout("pláte\n");
}

#[test]
fn test_unknown_word_is_reported_and_others_continue() {
  showstress()
    .write_stdin("plate nonsense readonly\n")
    .assert()
    .failure()
    .stdout("pláte\nreadónly\n")
    .stderr(predicate::str::contains("nonsense"));
}

#[test]
fn test_fail_fast_stops_at_first_failure() {
  showstress()
    .arg("--fail-fast")
    .write_stdin("plate nonsense readonly\n")
    .assert()
    .failure()
    .stdout("pláte\n");
}

#[test]
fn test_custom_dictionary() {
  let mut file = NamedTempFile::new().unwrap();
  writeln!(file, "# extra words").unwrap();
  writeln!(file, "hotel hoʊˈtɛl").unwrap();
  writeln!(file, "chaos ˈkeɪɒs").unwrap();

  showstress()
    .arg("--dictionary")
    .arg(file.path())
    .write_stdin("Hotel chaos")
    .assert()
    .success()
    .stdout("Hotél\ncháos\n");
}

#[test]
fn test_missing_stress_marker() {
  let mut file = NamedTempFile::new().unwrap();
  writeln!(file, "hotel hoʊtɛl").unwrap();

  showstress()
    .arg("--dictionary")
    .arg(file.path())
    .write_stdin("hotel")
    .assert()
    .failure()
    .stdout("")
    .stderr(predicate::str::contains("could not determine the stressed syllable of hoʊtɛl"));
}

#[test]
fn test_unreadable_config() {
  showstress()
    .arg("--config")
    .arg("/nonexistent/orthography.json")
    .write_stdin("plate")
    .assert()
    .failure()
    .stderr(predicate::str::contains("could not load the orthography config"));
}

#[test]
fn test_config_without_rendering() {
  let mut file = NamedTempFile::new().unwrap();
  write!(file, "{}", r#"{
    "IPA": { "vowels": ["ɪ", "i"], "diphthongs": [], "consonants": ["d", "v", "n"] },
    "renderings": { "ɪ": ["i"], "i": ["i"], "d": ["d"], "n": ["n"] },
    "stressmarks": { "i": "í" }
  }"#).unwrap();

  showstress()
    .arg("--config")
    .arg(file.path())
    .write_stdin("individual")
    .assert()
    .failure()
    .stdout("")
    .stderr(predicate::str::contains("no orthographies found for phoneme v"));
}

#[test]
fn test_check_dictionary() {
  Command::cargo_bin("checkdictionary").unwrap()
    .assert()
    .success()
    .stdout(predicate::str::contains("wyoming waɪˈoʊmɪŋ → wyóming"))
    .stdout(predicate::str::contains("7 entries, 0 failed"));
}
