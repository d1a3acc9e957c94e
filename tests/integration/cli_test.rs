//! Integration tests for the csvjson binary
//!
//! These drive the built executable end to end:
//! - Inline text, files, stdin and directories as input
//! - Output to stdout or files
//! - Error reporting for empty input

#[cfg(test)]
mod cli_tests {
    use std::fs;
    use std::io::Write;
    use std::process::{Command, Output, Stdio};
    use tempfile::tempdir;

    fn csvjson() -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_csvjson"));
        cmd.env_remove("RUST_LOG");
        cmd
    }

    fn run(args: &[&str]) -> Output {
        csvjson().args(args).output().expect("failed to run csvjson")
    }

    fn run_stdin(input: &str, args: &[&str]) -> Output {
        let mut child = csvjson()
            .arg("--stdin")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("failed to start csvjson");

        child
            .stdin
            .take()
            .unwrap()
            .write_all(input.as_bytes())
            .unwrap();
        child.wait_with_output().unwrap()
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    fn stderr(output: &Output) -> String {
        String::from_utf8_lossy(&output.stderr).into_owned()
    }

    #[test]
    fn test_inline_text_compact() {
        let output = run(&["--plain", "a,b\n1,2"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(stdout(&output).trim_end(), r#"[{"a":"1","b":"2"}]"#);
    }

    #[test]
    fn test_stdin_pretty_by_default() {
        let output = run_stdin("name,city\n\"Doe, Jo\",NY\n", &[]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(
            stdout(&output).trim_end(),
            "[\n  {\n    \"name\": \"Doe, Jo\",\n    \"city\": \"NY\"\n  }\n]"
        );
    }

    #[test]
    fn test_stdin_empty_input() {
        let output = run_stdin("  \n ", &[]);
        assert!(!output.status.success());
        assert!(stdout(&output).trim().is_empty());
        assert!(
            stderr(&output).contains("Please enter CSV data"),
            "stderr: {}",
            stderr(&output)
        );
    }

    #[test]
    fn test_file_to_output_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("people.csv");
        let output_path = dir.path().join("out/people.json");
        fs::write(&input, "name,age\nAnn,30\nBo").unwrap();

        let output = run(&[
            input.to_str().unwrap(),
            "--plain",
            "--quiet",
            "-o",
            output_path.to_str().unwrap(),
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).is_empty());
        assert_eq!(
            fs::read_to_string(output_path).unwrap(),
            r#"[{"name":"Ann","age":"30"},{"name":"Bo","age":""}]"#
        );
    }

    #[test]
    fn test_directory_conversion_creates_output_files() {
        let input_dir = tempdir().unwrap();
        let output_dir = tempdir().unwrap();
        fs::create_dir_all(input_dir.path().join("sub")).unwrap();
        fs::write(input_dir.path().join("a.csv"), "name\nAlice").unwrap();
        fs::write(input_dir.path().join("sub/b.csv"), "name\nBob").unwrap();

        let output = run(&[
            input_dir.path().to_str().unwrap(),
            "--output",
            output_dir.path().to_str().unwrap(),
            "--recursive",
            "--plain",
            "--quiet",
        ]);

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert_eq!(
            fs::read_to_string(output_dir.path().join("a.json")).unwrap(),
            r#"[{"name":"Alice"}]"#
        );
        assert_eq!(
            fs::read_to_string(output_dir.path().join("sub/b.json")).unwrap(),
            r#"[{"name":"Bob"}]"#
        );
    }

    #[test]
    fn test_missing_path_is_reported() {
        let output = run(&["does-not-exist.csv"]);
        assert!(!output.status.success());
        assert!(stderr(&output).contains("does-not-exist.csv"));
    }

    #[test]
    fn test_validate_only_reports_shape() {
        let output = run(&["--validate-only", "a,b,a\n1,2,3\n\"4,5"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        assert!(stdout(&output).contains("2 records, 3 columns"));
        assert!(stderr(&output).contains("unbalanced quotes on line 3"));
        assert!(stderr(&output).contains("2 distinct keys"));
    }

    #[test]
    fn test_validate_only_respects_memory_limit() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("big.csv");
        fs::write(&input, format!("a\n{}", "x".repeat(2048))).unwrap();

        let output = run(&[
            "--validate-only",
            "--memory-limit",
            "1KB",
            input.to_str().unwrap(),
        ]);
        assert!(!output.status.success());
        assert!(!stdout(&output).contains("Valid CSV"));
        assert!(
            stderr(&output).contains("too large"),
            "stderr: {}",
            stderr(&output)
        );
    }

    #[test]
    fn test_sample_subcommand() {
        let output = run(&["sample"]);
        assert!(output.status.success());
        assert!(stdout(&output).starts_with("name,email,age,city"));

        let output = run(&["--plain", "sample", "--convert"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["city"], "Los Angeles");
    }
}
