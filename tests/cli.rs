use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn synthetic_data(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_synthetic-data"))
        .args(args)
        .output()
        .expect("failed to run synthetic-data")
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn test_missing_argument_exits_with_one() {
    let output = synthetic_data(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("nope.json");

    let output = synthetic_data(&[path_arg(&input)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Input file not found"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("nope-synthetic.json").exists());
}

#[test]
fn test_invalid_json_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("broken.json");
    std::fs::write(&input, "{ not json").unwrap();

    let output = synthetic_data(&[path_arg(&input)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid JSON"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("broken-synthetic.json").exists());
}

#[test]
fn test_writes_synthetic_file_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("portfolio.json");
    std::fs::copy(
        Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/portfolio.json"),
        &input,
    )
    .unwrap();

    let output = synthetic_data(&[path_arg(&input), "--types-dir", path_arg(temp_dir.path())]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = temp_dir.path().join("portfolio-synthetic.json");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("portfolio-synthetic.json"));

    let text = std::fs::read_to_string(&written).unwrap();
    assert!(text.contains("\n  \"accounts\""));
    let document: Value = serde_json::from_str(&text).unwrap();
    assert!(document["accounts"].is_array());
}

#[test]
fn test_seed_and_output_flags() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.json");
    std::fs::write(&input, r#"{"assets": [{"id": 1, "value": 250.75}]}"#).unwrap();
    let first = temp_dir.path().join("first.json");
    let second = temp_dir.path().join("second.json");

    for out in [&first, &second] {
        let output = synthetic_data(&[
            path_arg(&input),
            "--seed",
            "99",
            "--output",
            path_arg(out),
        ]);
        assert_eq!(output.status.code(), Some(0));
    }

    assert_eq!(
        std::fs::read_to_string(&first).unwrap(),
        std::fs::read_to_string(&second).unwrap()
    );
    assert!(!temp_dir.path().join("in-synthetic.json").exists());
}

#[test]
fn test_invalid_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.json");
    let config = temp_dir.path().join("synth.yaml");
    std::fs::write(&input, "{}").unwrap();
    std::fs::write(&config, "jitter_band: 2.0\n").unwrap();

    let output = synthetic_data(&[path_arg(&input), "--config", path_arg(&config)]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("jitter_band"), "stderr: {stderr}");
}
