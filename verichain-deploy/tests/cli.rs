// Copyright 2026, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::fs;

use assert_cmd::Command;

const KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

fn verichain_deploy(dir: &tempfile::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("verichain-deploy").unwrap();
    cmd.current_dir(dir.path()).env_remove("PRIVATE_KEY");
    cmd
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn lists_networks() {
    let dir = tempfile::tempdir().unwrap();
    let output = verichain_deploy(&dir).arg("networks").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("neox_testnet"));
    assert!(stdout.contains("banelabs"));
}

#[test]
fn unknown_network_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = verichain_deploy(&dir)
        .args(["deploy", "--network", "mainnet", "--private-key", KEY])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("unknown network"), "{stderr}");
    assert!(stderr.contains("mainnet"), "{stderr}");
}

#[test]
fn missing_key_fails_before_deploying() {
    let dir = tempfile::tempdir().unwrap();
    let output = verichain_deploy(&dir)
        .args(["deploy", "--network", "banelabs"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("no signing credential"));
    assert!(!String::from_utf8_lossy(&output.stdout).contains("Deploying contracts"));
}

#[test]
fn key_is_read_from_dotenv() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".env"), format!("PRIVATE_KEY={KEY}\n")).unwrap();
    let output = verichain_deploy(&dir)
        .args(["deploy", "--network", "banelabs"])
        .output()
        .unwrap();
    // the key is picked up, so the missing artifact is what fails
    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(!stderr.contains("no signing credential"), "{stderr}");
    assert!(stderr.contains("could not read artifact"), "{stderr}");
}

#[test]
fn malformed_key_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = verichain_deploy(&dir)
        .args(["deploy", "--network", "neox_testnet", "--private-key", "0xnotakey"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(stderr(&output).contains("invalid private key"));
}

#[test]
fn key_file_with_missing_artifact_fails() {
    let dir = tempfile::tempdir().unwrap();
    let key_path = dir.path().join("key.txt");
    fs::write(&key_path, format!("{KEY}\n")).unwrap();
    let output = verichain_deploy(&dir)
        .args(["deploy", "--network", "banelabs", "--private-key-path"])
        .arg(&key_path)
        .args(["--artifact", "missing.json"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = stderr(&output);
    assert!(stderr.contains("could not read artifact"), "{stderr}");
    assert!(stderr.contains("missing.json"), "{stderr}");
}
