//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pantheon() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("pantheon").unwrap()
}

#[test]
fn help_output() {
    pantheon()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("MBTI quiz"));
}

#[test]
fn version_output() {
    pantheon()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pantheon"));
}

#[test]
fn result_scores_tally() {
    pantheon()
        .arg("result")
        .arg("--tally")
        .arg("E=1,I=4,S=0,N=5,T=2,F=2,J=1,P=3")
        .assert()
        .success()
        .stdout(predicate::str::contains("INFP"))
        .stdout(predicate::str::contains("Persephone"));
}

#[test]
fn result_json_output() {
    pantheon()
        .args(["result", "--tally", "E=5,S=5,T=5,J=5", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""mbtiType": "ESTJ""#))
        .stdout(predicate::str::contains(r#""characterName""#));
}

#[test]
fn result_ties_go_to_second_letter() {
    pantheon()
        .args(["result", "--tally", "E=2,I=2,S=2,N=2,T=2,F=2,J=2,P=2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFP"));
}

#[test]
fn result_rejects_bad_tally() {
    pantheon()
        .args(["result", "--tally", "E=three"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid count"));
}

#[test]
fn personas_lists_all_sixteen() {
    let assert = pantheon().arg("personas").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for code in [
        "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP", "ENFP",
        "ENTP", "ESTJ", "ESFJ", "ENFJ", "ENTJ",
    ] {
        assert!(stdout.contains(code), "missing {code}");
    }
}

#[test]
fn prompt_defaults_to_full_set() {
    pantheon()
        .arg("prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("Create 20 MBTI questions"));
}

#[test]
fn prompt_for_single_question() {
    pantheon()
        .args(["prompt", "--number", "3", "--category", "tf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("question number 3"));
}

#[test]
fn prompt_number_requires_category() {
    pantheon()
        .args(["prompt", "--number", "3"])
        .assert()
        .failure();
}

#[test]
fn question_rejects_unknown_category() {
    pantheon()
        .args(["question", "--number", "1", "--category", "XY"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown axis"));
}

#[test]
fn quiz_with_missing_config_fails() {
    pantheon()
        .args(["quiz", "--config", "no_such_config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: config file not found"));
}

#[test]
fn quiz_without_provider_fails() {
    let dir = TempDir::new().unwrap();

    pantheon()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PANTHEON_OPENAI_KEY")
        .arg("quiz")
        .assert()
        .failure()
        .stderr(predicate::str::contains("provider 'openai' not found"));
}

#[test]
fn list_models_without_config() {
    let dir = TempDir::new().unwrap();

    pantheon()
        .current_dir(dir.path())
        .env("HOME", dir.path())
        .env_remove("PANTHEON_OPENAI_KEY")
        .arg("list-models")
        .assert()
        .success()
        .stdout(predicate::str::contains("No providers configured"));
}

#[test]
fn init_creates_config() {
    let dir = TempDir::new().unwrap();

    pantheon()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created pantheon.toml"));

    let content = std::fs::read_to_string(dir.path().join("pantheon.toml")).unwrap();
    assert!(content.contains("[providers.openai]"));
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    // First init
    pantheon()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    // Second init should skip
    pantheon()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}
