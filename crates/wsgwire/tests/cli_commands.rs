#![cfg(feature = "cli")]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

const SUCCESS_FRAME: &str = "aa aa aa 05 02 00 00 00 76 dd";
const CMD_UNKNOWN_FRAME: &str = "aaaaaa2005000e00010203b570";
const STATE_FRAME: &str = "aaaaaa400600000081100000e7d1";

fn wsgwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wsgwire"))
        .arg("--log-level")
        .arg("error")
        .args(args)
        .output()
        .expect("wsgwire should run")
}

fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be json")
}

fn unique_temp_file(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "wsgwire-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ))
}

#[test]
fn decode_success_frame_as_json() {
    let output = wsgwire(&["--format", "json", "decode", SUCCESS_FRAME]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["command"], 5);
    assert_eq!(json["status"]["name"], "E_SUCCESS");
    assert_eq!(json["params_size"], 0);
    assert_eq!(json["checksum_verified"], true);
}

#[test]
fn decode_unknown_command_frame_keeps_params() {
    let output = wsgwire(&["--format", "json", "decode", CMD_UNKNOWN_FRAME]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["command"], 0x20);
    assert_eq!(json["status"]["code"], 14);
    assert_eq!(json["status"]["name"], "E_CMD_UNKNOWN");
    assert_eq!(json["params"], "01 02 03");
}

#[test]
fn truncated_frame_exits_data_invalid() {
    let truncated = &CMD_UNKNOWN_FRAME[..CMD_UNKNOWN_FRAME.len() - 2];
    let output = wsgwire(&["--format", "json", "decode", truncated]);
    assert_eq!(output.status.code(), Some(60));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("frame length mismatch"), "stderr: {stderr}");
}

#[test]
fn bad_checksum_is_rejected_unless_disabled() {
    let corrupted = "aa aa aa 05 02 00 00 00 00 00";
    let output = wsgwire(&["--format", "json", "decode", corrupted]);
    assert_eq!(output.status.code(), Some(60));
    assert!(String::from_utf8_lossy(&output.stderr).contains("checksum mismatch"));

    let output = wsgwire(&[
        "--format",
        "json",
        "decode",
        corrupted,
        "--no-verify-checksum",
    ]);
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["checksum_verified"], false);
}

#[test]
fn decode_state_flags_from_params() {
    let output = wsgwire(&["--format", "json", "decode", STATE_FRAME, "--state-flags"]);
    assert!(output.status.success());

    let json = stdout_json(&output);
    let names = json["state_flags"]["names"]
        .as_array()
        .expect("names should be an array");
    assert_eq!(names.len(), 3);
    assert_eq!(names[0], "SF_REFERENCED");
    assert_eq!(json["state_flags"]["fault"], true);
}

#[test]
fn decode_reads_hex_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_wsgwire"))
        .args(["--log-level", "error", "--format", "json", "decode"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("decode should start");
    child
        .stdin
        .take()
        .expect("stdin should be piped")
        .write_all(format!("{SUCCESS_FRAME}\n").as_bytes())
        .expect("stdin should accept the frame");
    let output = child.wait_with_output().expect("decode should finish");

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["status"]["name"], "E_SUCCESS");
}

#[test]
fn encode_raw_then_decode_file() {
    let output = wsgwire(&[
        "--format",
        "raw",
        "encode",
        "--command",
        "0x20",
        "--status",
        "E_CMD_UNKNOWN",
        "--params",
        "01 02 03",
    ]);
    assert!(output.status.success());
    assert_eq!(
        output.stdout,
        [0xAA, 0xAA, 0xAA, 0x20, 0x05, 0x00, 0x0E, 0x00, 0x01, 0x02, 0x03, 0xB5, 0x70]
    );

    let path = unique_temp_file("frame");
    std::fs::write(&path, &output.stdout).expect("frame file should be writable");
    let decoded = wsgwire(&[
        "--format",
        "json",
        "decode",
        "--file",
        path.to_str().expect("temp path should be utf-8"),
    ]);
    let _ = std::fs::remove_file(&path);

    assert!(decoded.status.success());
    assert_eq!(stdout_json(&decoded)["status"]["name"], "E_CMD_UNKNOWN");
}

#[test]
fn status_lookup_and_listing() {
    let output = wsgwire(&["--format", "json", "status", "29"]);
    assert!(output.status.success());
    let json = stdout_json(&output);
    assert_eq!(json["codes"][0]["name"], "E_AXIS_BLOCKED");

    let output = wsgwire(&["--format", "json", "status"]);
    let json = stdout_json(&output);
    assert_eq!(json["codes"].as_array().map(Vec::len), Some(31));

    let output = wsgwire(&["--format", "json", "status", "4242"]);
    let json = stdout_json(&output);
    assert_eq!(json["codes"][0]["name"], "E_UNKNOWN");
    assert_eq!(json["codes"][0]["known"], false);
}

#[test]
fn flags_decodes_word() {
    let output = wsgwire(&["--format", "raw", "flags", "0x0081"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "SF_REFERENCED | SF_TARGET_POS_REACHED"
    );
}

#[test]
fn invalid_hex_is_usage_error() {
    let output = wsgwire(&["decode", "aa zz"]);
    assert_eq!(output.status.code(), Some(64));
}
