use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn test_cli_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("schedule"));
    Ok(())
}

#[test]
fn missing_settings_file_is_reported() {
    let mut cmd = assert_cmd::cargo_bin_cmd!("estimates");
    cmd.args(["--config", "/nonexistent/settings.yaml", "evm", "show"]);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load settings"));
}
