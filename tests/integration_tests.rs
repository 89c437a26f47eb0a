use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated to a temporary data directory and an absent config file.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("hueloom");
    cmd.arg("--data-dir")
        .arg(dir.path())
        .arg("--config")
        .arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn test_generate_prints_palette_of_mode_size() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["generate", "--mode", "triadic", "--seed", "1"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert!(line.starts_with('#') && line.len() == 7, "{line}");
    }
}

#[test]
fn test_generate_with_base_is_deterministic() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "--mode", "complementary", "--base", "red"])
        .assert()
        .success()
        .stdout("#FF0000\n#00FFFF\n");
}

#[test]
fn test_generate_seed_is_reproducible() {
    let dir = TempDir::new().unwrap();
    let run = || {
        cmd(&dir)
            .args(["generate", "--seed", "99"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };
    assert_eq!(run(), run());
}

#[test]
fn test_generate_exports_css() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args([
            "generate",
            "--mode",
            "complementary",
            "--base",
            "#ff0000",
            "--format",
            "rgb",
            "--export",
            "css",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(":root {"))
        .stdout(predicate::str::contains("--color-rgb25500: rgb(255, 0, 0);"))
        .stdout(predicate::str::contains("--color-rgb0255255: rgb(0, 255, 255);"));
}

#[test]
fn test_generate_exports_json() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "-m", "triadic", "-b", "blue", "-e", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"#0000FF\""))
        .stdout(predicate::str::contains("\"value\": \"rgb(0, 0, 255)\""));
}

#[test]
fn test_invalid_base_is_rejected() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "--base", "notacolor"])
        .assert()
        .failure();
}

#[test]
fn test_saved_add_list_delete() {
    let dir = TempDir::new().unwrap();

    cmd(&dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout("No saved palettes\n");

    cmd(&dir)
        .args(["saved", "add", "#ff0000", "#00ff00"])
        .assert()
        .success()
        .stdout("Saved palette 0\n");
    cmd(&dir)
        .args(["saved", "add", "#0000ff"])
        .assert()
        .success()
        .stdout("Saved palette 1\n");

    assert!(dir.path().join("saved_palettes.json").exists());

    cmd(&dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout("0: #FF0000  #00FF00\n1: #0000FF\n");

    cmd(&dir)
        .args(["saved", "delete", "0"])
        .assert()
        .success()
        .stdout("Deleted palette 0\n");

    // Later entries shift down
    cmd(&dir)
        .args(["saved", "list", "--format", "rgb"])
        .assert()
        .success()
        .stdout("0: rgb(0, 0, 255)\n");
}

#[test]
fn test_saved_delete_out_of_range_is_noop() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["saved", "delete", "4"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No saved palette at index 4"));
}

#[test]
fn test_saved_add_rejects_short_hex() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["saved", "add", "#fff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color format"));
}

#[test]
fn test_saved_show_and_missing_index() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["saved", "add", "#123456"])
        .assert()
        .success();

    cmd(&dir)
        .args(["saved", "show", "0", "--format", "hsl"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hsl("));

    cmd(&dir)
        .args(["saved", "show", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No saved palette at index 3"));
}

#[test]
fn test_generate_save_appends() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["generate", "--seed", "5", "--save"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Saved palette 0"));

    cmd(&dir)
        .args(["saved", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("0: #"));
}

#[test]
fn test_config_file_sets_default_mode() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.toml"),
        "[palette]\nmode = \"complementary\"\n",
    )
    .unwrap();

    let output = cmd(&dir)
        .args(["generate", "--seed", "3"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(output).unwrap().lines().count(), 2);
}

#[test]
fn test_completions() {
    cargo_bin_cmd!("hueloom")
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hueloom"));
}
