use assert_cmd::Command;
use predicates::{prelude::*, str::contains};
use tempfile::TempDir;

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("fabcost_cli").unwrap();
    cmd.env("FABCOST_CLI_SCRIPT", "1")
        .env("FABCOST_HOME", home.path())
        .env("NO_COLOR", "1")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_computes_total() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "category laser\nset materials 100\nset hours 2\nset rate 25\nstatus\nexit\n",
    )
    .success()
    .stdout(contains("Active category: Laser work"))
    .stdout(contains("150.00 €"));
}

#[test]
fn script_mode_reports_bad_input_without_failing() {
    let home = TempDir::new().unwrap();
    script(&home, "set rate abc\ncategory pottery\npause\nstrat\nexit\n")
        .success()
        .stdout(contains("stored 0"))
        .stdout(contains("Cannot pause the timer while it is idle."))
        .stdout(contains("Did you mean `start`?"))
        .stderr(contains("Unknown category `pottery`."));
}

#[test]
fn config_save_persists_preferences() {
    let home = TempDir::new().unwrap();
    script(
        &home,
        "config set currency USD\nconfig set default_category print3d\nconfig save\nexit\n",
    )
    .success()
    .stdout(contains("Preferences saved"));

    let json = std::fs::read_to_string(home.path().join("config.json")).unwrap();
    assert!(json.contains("\"USD\""));
    assert!(json.contains("\"print3d\""));

    script(&home, "set materials 5\nstatus json\nexit\n")
        .success()
        .stdout(contains("5.00 USD"))
        .stdout(contains("\"category\": \"print3d\""));
}

#[test]
fn clearing_a_field_is_not_reported_as_coerced() {
    let home = TempDir::new().unwrap();
    script(&home, "set hours \"\"\nexit\n")
        .success()
        .stdout(contains("woodworking hours = 0.00"))
        .stdout(contains("stored 0").not());
}
