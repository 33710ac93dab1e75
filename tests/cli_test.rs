//! Command-line tests against the built binary

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cscx(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cscx-import").unwrap();
    cmd.env("CSCX_IMPORT_DATA_DIR", data_dir)
        .env_remove("CSCX_API_URL")
        .env_remove("CSCX_WORKSPACE_ID")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_template_to_stdout() {
    let temp = TempDir::new().unwrap();
    cscx(temp.path())
        .arg("template")
        .assert()
        .success()
        .stdout(
            "name,industry,arr,health_score,stage,renewal_date,csm_name,\
             primary_contact_name,primary_contact_email\n",
        );
}

#[test]
fn test_template_to_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("template.csv");
    cscx(temp.path())
        .arg("template")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Template written to"));

    let text = fs::read_to_string(&output).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("name,industry,arr"));
}

#[test]
fn test_fields_lists_schema() {
    let temp = TempDir::new().unwrap();
    cscx(temp.path())
        .arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("health_score"))
        .stdout(predicate::str::contains("Customer Name"));
}

#[test]
fn test_preview_reports_counts_and_warnings() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("customers.csv");
    fs::write(
        &file,
        "Company Name,ARR,Health\nAcme,\"$120,000\",85\n,$50,150\n",
    )
    .unwrap();

    cscx(temp.path())
        .arg("preview")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Records to import:   1"))
        .stdout(predicate::str::contains("Skipped (no name):   1"))
        .stdout(predicate::str::contains("Must be between 0 and 100"));
}

#[test]
fn test_preview_exports_records() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("customers.csv");
    let output = temp.path().join("records.json");
    fs::write(&file, "Account,Notes\nAcme,renews soon\nGlobex,\n").unwrap();

    cscx(temp.path())
        .args(["preview", "--map", "Account=name", "--output"])
        .arg(&output)
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 records written"));

    let exported: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(exported["records"][1]["name"], "Globex");
}

#[test]
fn test_unsupported_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("customers.txt");
    fs::write(&file, "Name\nAcme\n").unwrap();

    cscx(temp.path())
        .arg("preview")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("only .csv files"));
}

#[test]
fn test_preview_requires_name_column() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("customers.csv");
    fs::write(&file, "Name,Stage\nAcme,active\n").unwrap();

    cscx(temp.path())
        .args(["preview", "--map", "Name=none"])
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Customer Name"));
}

#[test]
fn test_import_dry_run() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("customers.csv");
    fs::write(&file, "Name,Stage\nAcme,At-Risk\nGlobex,active\n").unwrap();

    cscx(temp.path())
        .args(["import", "--dry-run", "--workspace", "ws-cli"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Dry run: 2 records would be sent to workspace 'ws-cli'",
        ));

    cscx(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No imports recorded."));
}

#[test]
fn test_config_persists_workspace() {
    let temp = TempDir::new().unwrap();
    cscx(temp.path())
        .args(["config", "--workspace", "ws-saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    cscx(temp.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("ws-saved"));
}
