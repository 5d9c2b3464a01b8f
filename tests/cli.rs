// Copyright 2025 dentsusoken
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Run the binary against `config` so the user's own config never leaks in.
fn termcompat(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("termcompat").unwrap();
    cmd.arg("--config").arg(config);
    cmd
}

#[test]
fn test_layout_command() {
    let home = TempDir::new().unwrap();
    let expected = format!(
        "size={} align={}",
        termcompat::size_of_regex_record(),
        termcompat::align_of_regex_record()
    );
    termcompat(&home.path().join("missing.toml"))
        .arg("layout")
        .assert()
        .success()
        .stdout(contains(expected));
}

#[cfg(target_endian = "little")]
#[test]
fn test_htole_command_on_little_endian_host() {
    let home = TempDir::new().unwrap();
    termcompat(&home.path().join("missing.toml"))
        .args(["htole", "0x01020304"])
        .assert()
        .success()
        .stdout(contains("0x01020304"));
}

#[test]
fn test_htole_rejects_invalid_value() {
    let home = TempDir::new().unwrap();
    termcompat(&home.path().join("missing.toml"))
        .args(["htole", "0x100000000"])
        .assert()
        .code(2)
        .stderr(contains("Invalid value '0x100000000'"));
}

#[test]
fn test_width_command() {
    let home = TempDir::new().unwrap();
    termcompat(&home.path().join("missing.toml"))
        .args(["width", "abc", "hello"])
        .assert()
        .success()
        .stdout(contains("3\tabc"))
        .stdout(contains("5\thello"));
}

#[test]
fn test_report_json() {
    let home = TempDir::new().unwrap();
    let output = termcompat(&home.path().join("missing.toml"))
        .args(["report", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be valid JSON");
    assert!(json["platform"].is_string());
    assert!(json["width_capability"].is_string());
    assert!(json["regex_record"]["align"].as_u64().unwrap().is_power_of_two());
}

#[test]
fn test_report_human_readable() {
    let home = TempDir::new().unwrap();
    termcompat(&home.path().join("missing.toml"))
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Termcompat Probe Report"))
        .stdout(contains("Regex record"));
}

#[test]
fn test_report_with_config_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    fs::write(&path, "[probe]\nvalues = [0xCAFEF00D]\n").unwrap();

    termcompat(&path)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("0xcafef00d"));
}

#[test]
fn test_malformed_config_exit_code() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");
    fs::write(&path, "[probe\n").unwrap();

    termcompat(&path)
        .arg("report")
        .assert()
        .code(3)
        .stderr(contains("Configuration file error"));
}

#[test]
fn test_environment_does_not_select_config() {
    let home = TempDir::new().unwrap();
    let bad = home.path().join("bad.toml");
    fs::write(&bad, "[probe\n").unwrap();

    termcompat(&home.path().join("missing.toml"))
        .env("TERMCOMPAT_CONFIG", &bad)
        .arg("report")
        .assert()
        .success()
        .stdout(contains("Termcompat Probe Report"));
}
