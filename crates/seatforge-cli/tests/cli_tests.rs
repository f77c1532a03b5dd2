use regex::Regex;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn write_event(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("event.json");
    let event = r#"{
        "venue": {"rows": 4, "cols": 4, "vip_rows": 1},
        "attendees": [
            {"id": "ada", "type": "vip", "priority": 10},
            {"id": "bob", "type": "regular", "group": "crew", "priority": 5},
            {"id": "cleo", "type": "regular", "group": "crew", "priority": 5},
            {"id": "dan", "type": "regular", "preference": "back"},
            {"id": "eve"}
        ]
    }"#;
    fs::write(&path, event).unwrap();
    path
}

#[test]
fn test_optimize_writes_valid_result_json() {
    let dir = TempDir::new().unwrap();
    let event_path = write_event(&dir);
    let out_path = dir.path().join("result.json");

    let status = Command::new(env!("CARGO_BIN_EXE_seatforge"))
        .args([
            "optimize",
            "--event",
            event_path.to_str().unwrap(),
            "--mode",
            "fast",
            "--seed",
            "42",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .status()
        .expect("binary should run");
    assert!(status.success());

    let result: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();

    let solution = result["solution"].as_array().unwrap();
    assert_eq!(solution.len(), 5);
    let mut positions: Vec<u64> = solution.iter().map(|v| v.as_u64().unwrap()).collect();
    positions.sort_unstable();
    positions.dedup();
    assert_eq!(positions.len(), 5, "solution repeats a seat");
    assert!(positions.iter().all(|&p| p < 16));

    let total = result["fitness"]["total"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&total));

    let seat_id_re = Regex::new(r"^[A-D][1-4]$").unwrap();
    for entry in result["plan"].as_array().unwrap() {
        let seat_id = entry["seat"]["seat_id"].as_str().unwrap();
        assert!(seat_id_re.is_match(seat_id), "bad seat id {}", seat_id);
    }
}

#[test]
fn test_validate_rescored_output_round_trips() {
    let dir = TempDir::new().unwrap();
    let event_path = write_event(&dir);
    let out_path = dir.path().join("result.json");

    let status = Command::new(env!("CARGO_BIN_EXE_seatforge"))
        .args([
            "optimize",
            "--event",
            event_path.to_str().unwrap(),
            "--mode",
            "fast",
            "--seed",
            "7",
            "--output",
            out_path.to_str().unwrap(),
        ])
        .status()
        .unwrap();
    assert!(status.success());

    // Feed the optimizer's own output back through validate.
    let output = Command::new(env!("CARGO_BIN_EXE_seatforge"))
        .args([
            "validate",
            "--event",
            event_path.to_str().unwrap(),
            "--plan",
            out_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total"));
    assert!(stdout.contains("ada"));
}

#[test]
fn test_missing_event_file_fails_cleanly() {
    let status = Command::new(env!("CARGO_BIN_EXE_seatforge"))
        .args(["optimize", "--event", "/nonexistent/event.json"])
        .status()
        .unwrap();
    assert!(!status.success());
}

#[test]
fn test_overfull_venue_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(
        &path,
        r#"{"venue": {"rows": 1, "cols": 2},
            "attendees": [{"id": "a"}, {"id": "b"}, {"id": "c"}]}"#,
    )
    .unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_seatforge"))
        .args(["optimize", "--event", path.to_str().unwrap(), "--mode", "fast"])
        .status()
        .unwrap();
    assert!(!status.success());
}
