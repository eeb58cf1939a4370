//! Integration tests for the etpgrf CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn etpgrf() -> Command {
    let mut cmd = Command::cargo_bin("etpgrf").unwrap();
    cmd.env_remove("ETPGRF_DEFAULT_LANGS");
    cmd
}

#[test]
fn test_process_russian_text() {
    etpgrf()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("russian-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Простой текст с&nbsp;«кавычками»."));
}

#[test]
fn test_process_mnemonic_mode() {
    etpgrf()
        .args(["process", "-m", "mnemonic", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Простой текст с&nbsp;&laquo;кавычками&raquo;.",
        ));
}

#[test]
fn test_process_html() {
    etpgrf()
        .args(["process", "--html", "-i"])
        .arg(fixture_path("russian-sample.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<p>Текст с&nbsp;предлогом <b>в&nbsp;<i>доме</i></b>.</p>",
        ))
        .stdout(predicate::str::contains("<pre>\"как есть\"</pre>"));
}

#[test]
fn test_html_without_flag_is_escaped() {
    etpgrf()
        .args(["process", "-i"])
        .arg(fixture_path("russian-sample.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;p&gt;"));
}

#[test]
fn test_languages_from_environment() {
    Command::cargo_bin("etpgrf")
        .unwrap()
        .env("ETPGRF_DEFAULT_LANGS", "en")
        .args(["process", "-m", "unicode", "-i"])
        .arg(fixture_path("english-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{201C}Read the\u{A0}book\u{201D}\u{2014}he said."));
}

#[test]
fn test_disable_stages() {
    etpgrf()
        .args(["process", "--no-quotes", "--no-unbreakables", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Простой текст с &quot;кавычками&quot;."));
}

#[test]
fn test_stdin_input() {
    etpgrf()
        .args(["process", "-m", "unicode", "--max-len", "8", "-i", "-"])
        .write_stdin("программирование")
        .assert()
        .success()
        .stdout("програм\u{AD}миро\u{AD}вание");
}

#[test]
fn test_json_output() {
    etpgrf()
        .args(["process", "-f", "json", "-i"])
        .arg(fixture_path("*.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("["))
        .stdout(predicate::str::contains("\"source\""))
        .stdout(predicate::str::contains("english-sample.txt"))
        .stdout(predicate::str::contains("russian-sample.txt"));
}

#[test]
fn test_glob_keeps_sorted_order() {
    let output = etpgrf()
        .args(["process", "-q", "-l", "ru+en", "-i"])
        .arg(fixture_path("*.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let english = stdout.find("Read").unwrap();
    let russian = stdout.find("Простой").unwrap();
    assert!(english < russian);
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("output.txt");

    etpgrf()
        .args(["process", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .arg("-o")
        .arg(&output_file)
        .assert()
        .success();

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("«кавычками»"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("etpgrf.toml");
    fs::write(&config, "[typographer]\nmode = \"unicode\"\n[unbreakables]\nenabled = false\n").unwrap();

    etpgrf()
        .args(["process", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Простой текст с «кавычками»."));
}

#[test]
fn test_invalid_file() {
    etpgrf()
        .args(["process", "-i", "nonexistent.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_invalid_language() {
    etpgrf()
        .args(["process", "-l", "ru+xx", "-i"])
        .arg(fixture_path("russian-sample.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("language 'xx' is not supported"));
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("generated.toml");

    etpgrf()
        .args(["generate-config", "-o"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));

    etpgrf()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains(
            "symbols, quotes, layout, unbreakables, hyphenation",
        ));
}

#[test]
fn test_validate_rejects_unknown_key() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[quotes]\nstyle = \"french\"\n").unwrap();

    etpgrf()
        .args(["validate", "-c"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"));
}

#[test]
fn test_list_commands() {
    etpgrf()
        .args(["list", "languages"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ruold"))
        .stdout(predicate::str::contains("English"));

    etpgrf()
        .args(["list", "modes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mixed"))
        .stdout(predicate::str::contains("(default)"));
}
