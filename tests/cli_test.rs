//! Integration tests for the rpbp-provision binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MODELS: &[&str] = &[
    "nonperiodic/no-periodicity",
    "nonperiodic/start-high-high-low",
    "nonperiodic/start-high-low-high",
    "periodic/start-high-low-low",
    "untranslated/gaussian-naive-bayes",
    "translated/periodic-gaussian-mixture",
];

/// A definition directory with every catalog model, and an empty models base.
fn setup() -> (TempDir, TempDir) {
    let source = TempDir::new().unwrap();
    for model in MODELS {
        let path = source.path().join(format!("{}.stan", model));
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("// {}\n", model)).unwrap();
    }
    (source, TempDir::new().unwrap())
}

/// Runs the binary with `cp` standing in for the model compiler.
fn provision_cmd(source: &Path, base: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.arg("--models-source")
        .arg(source)
        .arg("--models-base")
        .arg(base)
        .arg("--compiler")
        .arg("cp")
        .arg("--no-color");
    cmd
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Rp-Bp pipeline"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_provision_compiles_every_model() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();

    let mut cmd = provision_cmd(source.path(), base.path());
    cmd.arg("provision");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("INFO     : cp "))
        .stderr(predicate::str::contains("6 compiled, 0 already present, 0 failed"));

    for model in MODELS {
        let artifact = base.path().join(format!("{}.pkl", model));
        assert_eq!(fs::read_to_string(&artifact)?, format!("// {}\n", model));
    }
    Ok(())
}

#[test]
fn cli_no_subcommand_provisions() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();

    provision_cmd(source.path(), base.path()).assert().success();

    assert!(base.path().join("periodic/start-high-low-low.pkl").is_file());
    Ok(())
}

#[test]
fn cli_second_run_skips_existing_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    provision_cmd(source.path(), base.path()).assert().success();

    provision_cmd(source.path(), base.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("A model already exists at: "))
        .stderr(predicate::str::contains("Skipping."))
        .stderr(predicate::str::contains("INFO     : cp ").not())
        .stderr(predicate::str::contains("0 compiled, 6 already present"));
    Ok(())
}

#[test]
fn cli_dry_run_creates_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    let target = base.path().join("models");

    let mut cmd = provision_cmd(source.path(), &target);
    cmd.args(["provision", "--dry-run"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Would run: cp "))
        .stderr(predicate::str::contains("6 to compile, 0 already present"));

    assert!(!target.exists());
    Ok(())
}

#[test]
fn cli_missing_definition_is_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    fs::remove_file(source.path().join("periodic/start-high-low-low.stan"))?;

    provision_cmd(source.path(), base.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("WARNING  : Model compilation failed for"))
        .stderr(predicate::str::contains("5 compiled, 0 already present, 1 failed"));

    assert!(base.path().join("translated/periodic-gaussian-mixture.pkl").is_file());
    assert!(!base.path().join("periodic/start-high-low-low.pkl").exists());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_missing_tools_warn_without_failing() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    let empty_path = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.env("PATH", empty_path.path())
        .arg("--models-source")
        .arg(source.path())
        .arg("--models-base")
        .arg(base.path())
        .args(["--compiler", "/bin/cp", "--no-color"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("WARNING  : Missing programs: flexbar"))
        .stderr(predicate::str::contains(
            "Missing programs: intersectBed bedToBam fastaFromBed",
        ))
        .stderr(predicate::str::contains(
            "Please install cufflinks before using the Rp-Bp pipeline.",
        ))
        .stderr(predicate::str::contains("Tools: 0 of 6 groups available."));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_strict_fails_on_missing_tools() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    let empty_path = TempDir::new()?;

    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.env("PATH", empty_path.path())
        .arg("--models-source")
        .arg(source.path())
        .arg("--models-base")
        .arg(base.path())
        .args(["--compiler", "/bin/cp", "provision", "--strict"]);
    cmd.assert().failure().code(1);

    assert!(base.path().join("nonperiodic/no-periodicity.pkl").is_file());
    Ok(())
}

#[test]
fn cli_quiet_hides_info() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();

    let mut cmd = provision_cmd(source.path(), base.path());
    cmd.arg("--quiet");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("INFO").not());
    Ok(())
}

#[test]
fn cli_status_json_reports_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();
    provision_cmd(source.path(), base.path()).assert().success();

    let output = provision_cmd(source.path(), base.path())
        .args(["status", "--json"])
        .output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let artifacts = value["artifacts"].as_array().unwrap();
    assert_eq!(artifacts.len(), 6);
    assert!(artifacts.iter().all(|a| a["state"] == "present"));
    assert_eq!(value["tools"].as_array().unwrap().len(), 6);
    Ok(())
}

#[test]
fn cli_status_text_lists_missing_artifacts() -> Result<(), Box<dyn std::error::Error>> {
    let (source, base) = setup();

    provision_cmd(source.path(), base.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("[missing] nonperiodic/no-periodicity.pkl"));
    Ok(())
}

#[test]
fn cli_list_shows_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.arg("list");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("untranslated/gaussian-naive-bayes.stan"))
        .stdout(predicate::str::contains("(from SAMtools)"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("rpbp-provision"));
    Ok(())
}

#[test]
fn cli_rejects_unknown_subcommand() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("rpbp-provision"));
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}
