use std::process::Command;
use std::path::PathBuf;

fn get_cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_parachute-cli"))
}

#[test]
fn test_cli_single_basic() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "single",
            "--gravity", "9.81",
            "--mass", "10",
            "--rho", "1.225",
            "--cd", "1.2",
            "--velocity", "10"
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PARACHUTE SIZING"), "Should contain sizing header");
    assert!(stdout.contains("Total"), "Should contain the total row");
    assert!(stdout.contains("1.335"), "Should report the ~1.335 m² area");
}

#[test]
fn test_cli_dual_json() {
    let output = Command::new(get_cli_binary())
        .args(&[
            "dual",
            "--cd-drogue", "1.2",
            "--cd-main", "1.2",
            "--drogue-fraction", "0.2",
            "--rounding", "ceiling",
            "-o", "json"
        ])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("Should be valid JSON");

    let rows = json["rows"].as_array().expect("rows array");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["stage"], "Total");
    assert_eq!(rows[1]["stage"], "Drogue");
    assert_eq!(rows[2]["stage"], "Main");

    let total = rows[0]["area_m2"].as_f64().unwrap();
    let drogue = rows[1]["area_m2"].as_f64().unwrap();
    let main = rows[2]["area_m2"].as_f64().unwrap();
    assert!((drogue + main - total).abs() < 1e-9);
    assert_eq!(json["rounding"], "ceiling");
}

#[test]
fn test_cli_csv_output() {
    let output = Command::new(get_cli_binary())
        .args(&["single", "-o", "csv"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("stage,area_m2"));
    assert!(lines[1].starts_with("Total,"));
}

#[test]
fn test_cli_sub_foot_reports_inches() {
    let output = Command::new(get_cli_binary())
        .args(&["single", "--mass", "0.1", "--velocity", "6", "--safety", "1.0", "--rounding", "nearest"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("< 1 ft"), "Sub-foot canopy should be reported in inches");
}

#[test]
fn test_cli_negative_mass_fails() {
    let output = Command::new(get_cli_binary())
        .args(&["single", "--mass=-5"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Negative mass should be rejected");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mass"));
}

#[test]
fn test_cli_drogue_fraction_out_of_range_fails() {
    let output = Command::new(get_cli_binary())
        .args(&["dual", "--drogue-fraction", "0.95"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_cli_high_descent_rate_is_advisory_only() {
    let output = Command::new(get_cli_binary())
        .args(&["single", "--velocity", "16"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "High descent rate should still be sized");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Advisory"));
}

#[test]
fn test_cli_save_and_load_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("job.json");

    let output = Command::new(get_cli_binary())
        .args(&["dual", "--cd-main", "1.5", "--save-config"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    assert!(path.exists());

    let output = Command::new(get_cli_binary())
        .args(&["file", "-o", "json"])
        .arg(&path)
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["rows"].as_array().unwrap().len(), 3);
}

#[test]
fn test_cli_info_command() {
    let output = Command::new(get_cli_binary())
        .arg("info")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("PARACHUTE SIZING ENGINE"));
}
