//! Tests running the `paperbox` binary.

use std::path::Path;
use std::process::{Command, Output};

use lopdf::Document;
use tempfile::tempdir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_paperbox"))
        .arg("--output-dir")
        .arg(dir)
        .args(args)
        .output()
        .unwrap()
}

mod cli_tests {
    use super::*;

    #[test]
    fn test_writes_default_pdf() {
        let dir = tempdir().unwrap();
        let output = run(dir.path(), &["10", "8", "4"]);
        assert!(output.status.success(), "{output:?}");

        let path = dir.path().join("paper_box.pdf");
        let doc = Document::load(&path).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_custom_output_name() {
        let dir = tempdir().unwrap();
        let output = run(dir.path(), &["5", "4", "2", "-n", "small.pdf", "--gap", "0"]);
        assert!(output.status.success(), "{output:?}");
        assert!(dir.path().join("small.pdf").exists());
        assert!(!dir.path().join("paper_box.pdf").exists());
    }

    #[test]
    fn test_strict_overflow_fails_without_output() {
        let dir = tempdir().unwrap();
        let output = run(dir.path(), &["30", "5", "1", "--strict"]);
        assert!(!output.status.success());
        assert!(!dir.path().join("paper_box.pdf").exists());
    }

    #[test]
    fn test_width_overflow_fails() {
        let dir = tempdir().unwrap();
        let output = run(dir.path(), &["12", "12", "5"]);
        assert!(!output.status.success());
        assert!(!dir.path().join("paper_box.pdf").exists());
    }

    #[test]
    fn test_non_numeric_dimension_fails() {
        let dir = tempdir().unwrap();
        let output = run(dir.path(), &["ten", "8", "4"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_dump_json_reports_faces() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("layout.json");
        let output = run(
            dir.path(),
            &["10", "8", "4", "--dump-json", json_path.to_str().unwrap()],
        );
        assert!(output.status.success(), "{output:?}");

        let text = std::fs::read_to_string(&json_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        // The default 0.75 mm gap adds the inner main column.
        assert_eq!(value["faces"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_config_file_sets_policy() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, r#"{ "allow_overflow": false, "gap": 0.0 }"#).unwrap();

        let output = run(
            dir.path(),
            &["30", "5", "1", "--config", config_path.to_str().unwrap()],
        );
        assert!(!output.status.success());
        assert!(!dir.path().join("paper_box.pdf").exists());
    }

    #[test]
    fn test_config_file_keeps_default_gap() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        let json_path = dir.path().join("layout.json");
        std::fs::write(&config_path, r#"{ "allow_overflow": true }"#).unwrap();

        let output = run(
            dir.path(),
            &[
                "10",
                "8",
                "4",
                "--config",
                config_path.to_str().unwrap(),
                "--dump-json",
                json_path.to_str().unwrap(),
            ],
        );
        assert!(output.status.success(), "{output:?}");

        let text = std::fs::read_to_string(&json_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["faces"].as_array().unwrap().len(), 14);
    }

    #[test]
    fn test_bad_config_file_fails() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        std::fs::write(&config_path, "not json").unwrap();

        let output = run(
            dir.path(),
            &["10", "8", "4", "--config", config_path.to_str().unwrap()],
        );
        assert!(!output.status.success());
    }
}
