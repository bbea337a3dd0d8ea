//! Integration tests for CLI behavior
//!
//! The default behavior is quiet (no logs). Use -v/--verbose to enable logs.

use std::fs;
use std::process::Command;

fn run_pyfresh(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_pyfresh"))
        .args(args)
        .output()
        .expect("Failed to execute pyfresh")
}

#[test]
fn test_dry_run_lists_minimal_template_paths() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let output = run_pyfresh(&[
        "demo",
        "--template",
        "minimal",
        "--tool",
        "poetry",
        "--output-dir",
        output_dir,
        "--dry-run",
    ]);

    assert!(
        output.status.success(),
        "dry run failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run - would create project 'demo'"));
    assert!(stdout.contains("Template: minimal (Minimal Python project structure)"));
    assert!(stdout.contains("  demo/src/demo/"));
    assert!(stdout.contains("  demo/README.md"));
    assert!(stdout.contains("  demo/pyproject.toml"));
    // Minimal template has no Makefile
    assert!(!stdout.contains("demo/Makefile"));

    // Dry run never touches the file system
    assert!(!dir.path().join("demo").exists());
}

#[test]
fn test_generate_creates_project_tree() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let output = run_pyfresh(&[
        "demo",
        "--template",
        "minimal",
        "--output-dir",
        output_dir,
        "--author",
        "Test Author",
        "--email",
        "test@example.com",
    ]);

    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let root = dir.path().join("demo");
    assert!(root.join("src/demo/main.py").is_file());
    assert!(root.join("tests").is_dir());

    let pyproject = fs::read_to_string(root.join("pyproject.toml")).unwrap();
    assert!(pyproject.contains("name = \"demo\""));
    assert!(pyproject.contains("authors = [\"Test Author <test@example.com>\"]"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Project 'demo' created successfully!"));
    assert!(stdout.contains("cd demo"));
}

#[test]
fn test_existing_project_without_force_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();
    let root = dir.path().join("demo");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("keep.txt"), "precious").unwrap();

    let output = run_pyfresh(&["demo", "--output-dir", output_dir]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("already exists"), "stderr: {stderr}");

    // The existing directory is untouched
    assert_eq!(fs::read_to_string(root.join("keep.txt")).unwrap(), "precious");
    assert!(!root.join("pyproject.toml").exists());
}

#[test]
fn test_dotdot_project_name_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let output = run_pyfresh(&["..", "--output-dir", output_dir]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid project name"), "stderr: {stderr}");
}

#[test]
fn test_unknown_template_rejected() {
    let output = run_pyfresh(&["demo", "--template", "nonexistent"]);
    assert!(!output.status.success());
}

#[test]
fn test_default_mode_stdout_is_clean() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let output = run_pyfresh(&["demo", "--dry-run", "--output-dir", output_dir]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    // stdout should not contain JSON log lines
    for line in stdout.lines() {
        assert!(
            !line.trim_start().starts_with('{'),
            "stdout contains JSON line: {line}"
        );
    }

    // Default (quiet) mode suppresses INFO logs
    assert!(
        !stderr.contains(r#""level":"INFO""#),
        "Default mode should not emit INFO logs, got: {stderr}"
    );
}

#[test]
fn test_verbose_mode_emits_info_logs() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();

    let output = run_pyfresh(&["-v", "demo", "--dry-run", "--output-dir", output_dir]);
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains(r#""level":"INFO""#),
        "Verbose mode should emit INFO logs, got: {stderr}"
    );
    assert!(stderr.contains("core.generate.started"));
}

#[test]
fn test_config_file_dependencies_reach_manifest() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();
    let config_path = dir.path().join("pyfresh.toml");
    fs::write(
        &config_path,
        r#"
[templates.minimal]
dependencies = ["rich>=13.0.0"]
"#,
    )
    .unwrap();

    let output = run_pyfresh(&[
        "demo",
        "--template",
        "minimal",
        "--config",
        config_path.to_str().unwrap(),
        "--output-dir",
        output_dir,
    ]);
    assert!(
        output.status.success(),
        "generate failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let pyproject = fs::read_to_string(dir.path().join("demo/pyproject.toml")).unwrap();
    assert!(pyproject.contains("rich = \">=13.0.0\""));
}

#[test]
fn test_malformed_config_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let output_dir = dir.path().to_str().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "invalid toml [[[").unwrap();

    let output = run_pyfresh(&[
        "demo",
        "--config",
        config_path.to_str().unwrap(),
        "--output-dir",
        output_dir,
        "--dry-run",
    ]);

    assert!(!output.status.success());
    assert!(!dir.path().join("demo").exists());
}
