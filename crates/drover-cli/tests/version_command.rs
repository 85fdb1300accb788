use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

#[allow(deprecated)]
fn get_drover_bin() -> PathBuf {
    assert_cmd::cargo::cargo_bin("drover")
}

const MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plist version="1.0">
<dict>
    <key>CFBundleExecutable</key>
    <string>Google Chrome</string>
    <key>KSVersion</key>
    <string>125.0.6422.113</string>
</dict>
</plist>"#;

#[test]
fn test_version_command_help() {
    let mut cmd = Command::new(get_drover_bin());
    cmd.arg("version").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Print the Chrome version found in the local manifest",
        ))
        .stdout(predicate::str::contains("--manifest"));
}

#[test]
fn test_version_command_reads_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("Info.plist");
    std::fs::write(&manifest, MANIFEST).unwrap();

    let mut cmd = Command::new(get_drover_bin());
    cmd.arg("version").arg("--manifest").arg(&manifest);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("125.0.6422.113"));
}

#[test]
fn test_version_command_fails_without_version_key() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("Info.plist");
    std::fs::write(
        &manifest,
        r#"<plist version="1.0"><dict>
            <key>CFBundleExecutable</key>
            <string>Google Chrome</string>
        </dict></plist>"#,
    )
    .unwrap();

    let mut cmd = Command::new(get_drover_bin());
    cmd.arg("version").arg("--manifest").arg(&manifest);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Version key not found"));
}

#[test]
fn test_version_command_fails_on_missing_manifest() {
    let mut cmd = Command::new(get_drover_bin());
    cmd.arg("version")
        .arg("--manifest")
        .arg("/nonexistent/Info.plist");

    cmd.assert().failure();
}
