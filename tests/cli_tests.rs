//! Integration tests for the axt-request CLI
//!
//! These tests run the actual binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get the binary to test
fn axt_cmd() -> Command {
    let mut cmd = Command::cargo_bin("axt-request").unwrap();
    cmd.env_remove("AXT_REGION_ID")
        .env_remove("AXT_ENDPOINT")
        .env_remove("AXT_VPC");
    cmd
}

#[test]
fn test_help_flag() {
    axt_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspect AXT request descriptors"));
}

#[test]
fn test_list_all_actions() {
    axt_cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("DescribeInstanceManageCommand"))
        .stdout(predicate::str::contains("ModifyInstanceManageCommand"))
        .stdout(predicate::str::contains("commandContend"))
        .stdout(predicate::str::contains("DescribeTask"));
}

#[test]
fn test_list_filtered_by_version() {
    axt_cmd()
        .args(["list", "--api-version", "2017-07-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CreateCommand"))
        .stdout(predicate::str::contains("ModifyCommand").not());
}

#[test]
fn test_list_unknown_version() {
    axt_cmd()
        .args(["list", "--api-version", "2020-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AXT-014"))
        .stderr(predicate::str::contains("2017-07-21, 2017-07-31"))
        .stderr(predicate::str::contains("YAML").not());
}

#[test]
fn test_show_query_format() {
    axt_cmd()
        .args([
            "show",
            "DescribeTask",
            "-p",
            "PageSize=10",
            "-p",
            "InstanceId=i-abc123",
            "--format",
            "query",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Action=DescribeTask&Version=2017-07-31&Format=JSON&PageSize=10&InstanceId=i-abc123",
        ));
}

#[test]
fn test_show_json_format() {
    axt_cmd()
        .args(["show", "CreateCommand", "-p", "Name=hello", "--region", "cn-beijing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"endpoint\": \"cn-beijing.axt.aliyuncs.com\""))
        .stdout(predicate::str::contains("\"action\": \"CreateCommand\""))
        .stdout(predicate::str::contains("\"Name\": \"hello\""));
}

#[test]
fn test_show_with_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("axt.yaml");
    fs::write(&config_file, "region_id: cn-shenzhen\nvpc: true\n").unwrap();

    axt_cmd()
        .args(["show", "ModifyCommand", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("cn-shenzhen.axt.aliyun.com"));
}

#[test]
fn test_show_env_endpoint_override() {
    axt_cmd()
        .env("AXT_ENDPOINT", "axt.internal.example")
        .args(["show", "DescribeTask"])
        .assert()
        .success()
        .stdout(predicate::str::contains("axt.internal.example"));
}

#[test]
fn test_show_unknown_action() {
    axt_cmd()
        .args(["show", "DeleteCommand"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AXT-010"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_show_wrong_casing_param() {
    axt_cmd()
        .args(["show", "CreateCommand", "-p", "name=x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AXT-012"));
}

#[test]
fn test_show_malformed_param() {
    axt_cmd()
        .args(["show", "DescribeTask", "-p", "PageSize"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AXT-013"));
}

#[test]
fn test_show_invalid_region() {
    axt_cmd()
        .args(["show", "DescribeTask", "--region", "Nowhere"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("AXT-021"));
}

#[test]
fn test_show_unrecognised_vpc_env_keeps_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("axt.yaml");
    fs::write(&config_file, "region_id: cn-qingdao\nvpc: true\n").unwrap();

    for value in ["", "maybe"] {
        axt_cmd()
            .env("AXT_VPC", value)
            .args(["show", "DescribeTask", "--config"])
            .arg(&config_file)
            .assert()
            .success()
            .stdout(predicate::str::contains("cn-qingdao.axt.aliyun.com"));
    }
}

#[test]
fn test_show_vpc_env_false_overrides_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("axt.yaml");
    fs::write(&config_file, "region_id: cn-qingdao\nvpc: true\n").unwrap();

    axt_cmd()
        .env("AXT_VPC", "false")
        .args(["show", "DescribeTask", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("cn-qingdao.axt.aliyuncs.com"));
}

#[test]
fn test_show_query_uses_config_format() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("axt.yaml");
    fs::write(&config_file, "format: XML\n").unwrap();

    axt_cmd()
        .args(["show", "CreateCommand", "-p", "Name=a", "--format", "query", "--config"])
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Action=CreateCommand&Version=2017-07-31&Format=XML&Name=a",
        ));
}

#[test]
fn test_show_multi_segment_region() {
    axt_cmd()
        .args(["show", "DescribeTask", "--region", "cn-shanghai-finance-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cn-shanghai-finance-1.axt.aliyuncs.com"));
}
