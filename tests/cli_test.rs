use std::process::{Command, Output};

fn run(env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_public-config"));
    cmd.env_remove("PUBLIC_API_BASE_URL")
        .env_remove("PUBLIC_MEDIA_BASE_URL")
        .env_remove("RUST_LOG")
        .args(args);
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run public-config")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_prints_defaults_as_env_lines() {
    let output = run(&[], &[]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "PUBLIC_API_BASE_URL=http://localhost:8000/api\n\
         PUBLIC_MEDIA_BASE_URL=http://localhost:8000/media\n"
    );
}

#[test]
fn test_json_output_reflects_environment() {
    let output = run(
        &[("PUBLIC_API_BASE_URL", "https://x.example/api")],
        &["--format", "json"],
    );

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["apiBaseUrl"], "https://x.example/api");
    assert_eq!(value["mediaBaseUrl"], "http://localhost:8000/media");
}

#[test]
fn test_empty_variable_falls_back() {
    let output = run(&[("PUBLIC_MEDIA_BASE_URL", "")], &["--format", "toml"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("mediaBaseUrl = \"http://localhost:8000/media\""));
}

#[test]
fn test_check_rejects_relative_url() {
    let output = run(&[("PUBLIC_API_BASE_URL", "/api")], &["--check"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("api_base_url"));
}

#[test]
fn test_without_check_relative_url_is_printed() {
    let output = run(&[("PUBLIC_API_BASE_URL", "/api")], &[]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("PUBLIC_API_BASE_URL=/api\n"));
}

#[cfg(unix)]
#[test]
fn test_non_utf8_variable_falls_back() {
    use std::ffi::OsString;
    use std::os::unix::ffi::OsStringExt;

    let output = Command::new(env!("CARGO_BIN_EXE_public-config"))
        .env_remove("PUBLIC_API_BASE_URL")
        .env_remove("RUST_LOG")
        .env("PUBLIC_MEDIA_BASE_URL", OsString::from_vec(vec![0xff, 0xfe]))
        .output()
        .expect("failed to run public-config");

    assert!(output.status.success());
    assert!(stdout(&output).contains("PUBLIC_MEDIA_BASE_URL=http://localhost:8000/media\n"));
}

#[test]
fn test_json_logs_are_json_lines() {
    let output = run(&[], &["--json-logs", "--verbose"]);

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    assert!(!lines.is_empty());
    for line in lines {
        let value: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("not JSON ({}): {}", e, line));
        assert!(value.get("level").is_some());
    }
}
