use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_safeguard")
}

fn unique_temp_path(name: &str, extension: &str) -> PathBuf {
    let stamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("safeguard-{name}-{stamp}.{extension}"))
}

fn small_config_json() -> &'static str {
    "{\"missiles\": 2, \"mirvs_per_missile\": 2, \"decoys_per_warhead\": 1, \
      \"inventory\": 12, \"trials\": 20, \"seed\": 7}"
}

#[test]
fn simulate_command_dispatches_and_emits_json() {
    let path = unique_temp_path("simulate", "json");
    fs::write(&path, small_config_json()).expect("fixture should be written");

    let output = Command::new(bin())
        .args(["simulate", path.to_string_lossy().as_ref()])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload: serde_json::Value =
        serde_json::from_str(&stdout).expect("simulate should emit json");
    assert_eq!(payload["summary"]["trials"].as_u64(), Some(20));
    assert_eq!(payload["summary"]["real_warheads"].as_u64(), Some(4));
    assert_eq!(
        payload["penetrated_per_trial"].as_array().map(Vec::len),
        Some(20)
    );

    let _ = fs::remove_file(path);
}

#[test]
fn simulate_table_flag_emits_header_row() {
    let path = unique_temp_path("simulate-table", "json");
    fs::write(&path, small_config_json()).expect("fixture should be written");

    let output = Command::new(bin())
        .args(["simulate", path.to_string_lossy().as_ref(), "--table"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("trials\treal_warheads\tmean_penetrated"));
    assert_eq!(stdout.lines().count(), 2);

    let _ = fs::remove_file(path);
}

#[test]
fn simulate_with_unreadable_config_fails() {
    let output = Command::new(bin())
        .args(["simulate", "/nonexistent/config.json"])
        .output()
        .expect("simulate should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read config file"));
}

#[test]
fn unknown_command_returns_usage() {
    let output = Command::new(bin())
        .arg("optimize")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: safeguard <simulate|export>"));
}

#[test]
fn export_command_returns_usage_without_paths() {
    let output = Command::new(bin())
        .arg("export")
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("usage: safeguard export"));
}

#[test]
fn export_command_writes_csv_with_one_row_per_trial() {
    let config_path = unique_temp_path("export-config", "json");
    let csv_path = unique_temp_path("export-out", "csv");
    fs::write(&config_path, small_config_json()).expect("fixture should be written");

    let output = Command::new(bin())
        .args([
            "export",
            config_path.to_string_lossy().as_ref(),
            csv_path.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("export should run");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("export complete: trials=20"));

    let contents = fs::read_to_string(&csv_path).expect("export file should be readable");
    assert_eq!(contents.lines().count(), 21);

    let _ = fs::remove_file(config_path);
    let _ = fs::remove_file(csv_path);
}
