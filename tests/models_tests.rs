use assert_fs::prelude::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn models_prints_comparison_and_writes_yaml() {
    let output_file = assert_fs::NamedTempFile::new("models.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap().to_string();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["models", "-s", "10", "-t", "5", "-m", "6", "-c", "low", "-o", &output_arg]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("COCOMO II |"))
        .stdout(predicate::str::contains("SLIM |"))
        .stdout(predicate::str::contains("RCA Price |"))
        .stdout(predicate::str::contains("Average cost: $"))
        .stdout(predicate::str::contains("Recommended model: COCOMO II"))
        .stdout(predicate::str::contains("Model comparison written to"));

    let output = fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("params:"));
    assert!(output.contains("cocomo:"));
    assert!(output.contains("cost_summary:"));
    assert!(output.contains("recommended: cocomo"));
}

#[test]
fn models_uses_configured_currency_symbol() {
    let settings = assert_fs::NamedTempFile::new("settings.yaml").unwrap();
    settings.write_str("currency_symbol: \"€\"\n").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["--config", settings.path().to_str().unwrap()]);
    cmd.args(["models", "-s", "10", "-t", "5", "-m", "6"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Average cost: €"));
}

#[test]
fn models_rejects_non_positive_inputs() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["models", "-s", "0", "-t", "5", "-m", "6"]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to estimate project"));
}

#[test]
fn models_rejects_unknown_complexity() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["models", "-s", "10", "-t", "5", "-m", "6", "-c", "extreme"]);

    cmd.assert().failure();
}
