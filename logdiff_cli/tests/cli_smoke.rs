use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_file_path(prefix: &str, suffix: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("logdiff-{prefix}-{nonce}{suffix}"))
}

fn temp_dir(prefix: &str) -> PathBuf {
    let nonce = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("logdiff-{prefix}-{nonce}"));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

#[test]
fn pair_cli_prints_markdown_report_and_exits_nonzero_on_changes() {
    let pre = temp_file_path("pair-pre", ".log");
    let post = temp_file_path("pair-post", ".log");
    fs::write(&pre, "hostname old\n").expect("write pre");
    fs::write(&post, "hostname new\n").expect("write post");

    let output = Command::new(env!("CARGO_BIN_EXE_logdiff"))
        .arg("pair")
        .arg(&pre)
        .arg(&post)
        .output()
        .expect("run logdiff pair");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("# Log Diff Report"));
    assert!(stdout.contains("Changed: 1"));

    fs::remove_file(&pre).ok();
    fs::remove_file(&post).ok();
}

#[test]
fn pair_cli_exits_zero_for_identical_logs() {
    let pre = temp_file_path("identical-pre", ".log");
    let post = temp_file_path("identical-post", ".log");
    fs::write(&pre, "hostname same\n").expect("write pre");
    fs::write(&post, "hostname same\n").expect("write post");

    let output = Command::new(env!("CARGO_BIN_EXE_logdiff"))
        .arg("pair")
        .arg(&pre)
        .arg(&post)
        .output()
        .expect("run logdiff pair");

    assert!(output.status.success());

    fs::remove_file(&pre).ok();
    fs::remove_file(&post).ok();
}

#[test]
fn pair_cli_emits_json_with_format_flag() {
    let pre = temp_file_path("json-pre", ".log");
    let post = temp_file_path("json-post", ".log");
    fs::write(&pre, "interface Gi0/1\n  description old\n").expect("write pre");
    fs::write(&post, "interface Gi0/1\n  description new\n").expect("write post");

    let output = Command::new(env!("CARGO_BIN_EXE_logdiff"))
        .arg("--format")
        .arg("json")
        .arg("pair")
        .arg(&pre)
        .arg(&post)
        .output()
        .expect("run logdiff pair --format json");

    assert!(!output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["is_different"], true);
    assert!(value.get("lines").is_some());

    fs::remove_file(&pre).ok();
    fs::remove_file(&post).ok();
}

#[test]
fn pair_cli_fails_for_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_logdiff"))
        .arg("pair")
        .arg("/definitely/missing-pre.log")
        .arg("/definitely/missing-post.log")
        .output()
        .expect("run logdiff pair");

    assert!(!output.status.success());
}

#[test]
fn scan_cli_reports_every_discovered_pair() {
    let dir = temp_dir("scan");
    fs::write(dir.join("10.0.0.1_preCheck.log"), "hostname a\n").expect("write pre");
    fs::write(dir.join("10.0.0.1_postCheck.log"), "hostname a\n").expect("write post");
    fs::write(dir.join("10.0.0.2_preCheck.log"), "hostname b\n").expect("write pre");
    fs::write(dir.join("10.0.0.2_postCheck.log"), "hostname b-changed\n").expect("write post");

    let output = Command::new(env!("CARGO_BIN_EXE_logdiff"))
        .arg("scan")
        .arg(&dir)
        .output()
        .expect("run logdiff scan");

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("10.0.0.1_preCheck.log"));
    assert!(stdout.contains("10.0.0.2_preCheck.log"));

    fs::remove_dir_all(&dir).ok();
}
