use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn sidediff() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sidediff"));
    cmd.env("RUST_LOG", "off").env_remove("COLUMNS");
    cmd
}

#[test]
fn test_compare_renders_side_by_side() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("old.rs");
    let new = dir.path().join("new.rs");
    fs::write(&old, "fn keep() {}\nlet v = foo();\n").unwrap();
    fs::write(&new, "fn keep() {}\nlet v = foo2();\n").unwrap();

    let output = sidediff()
        .args(["compare", "--no-color", "--width", "200"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("M "));
    assert!(lines[0].ends_with("(+1 -1, 1 hunks)"));
    assert_eq!(lines[1], "@@ -1,2 +1,2 @@");
    assert!(lines[3].contains("let v = foo();"));
    assert!(lines[3].contains(" │ "));
    assert!(lines[3].ends_with("  2 let v = foo2();"));
}

#[test]
fn test_compare_json_output() {
    let dir = TempDir::new().unwrap();
    let old = dir.path().join("a.txt");
    let new = dir.path().join("b.txt");
    fs::write(&old, "one\n").unwrap();
    fs::write(&new, "one\ntwo\n").unwrap();

    let output = sidediff()
        .args(["compare", "--format", "json"])
        .arg(&old)
        .arg(&new)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("\"additions\": 1"));
    assert!(stdout.contains("\"hunk_starts\""));
    assert!(stdout.contains("\"new_text\": \"two\""));
}

#[test]
fn test_list_outside_repository() {
    let dir = TempDir::new().unwrap();

    let output = sidediff()
        .args(["list", "--repo"])
        .arg(dir.path())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(
        stderr.trim(),
        "Not a git repository. Run sidediff inside a git repository."
    );
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = sidediff()
        .args(["compare"])
        .arg(dir.path().join("nope"))
        .arg(dir.path().join("nada"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Failed to read"));
}
