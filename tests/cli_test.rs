use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const BAD: &str = indoc! {r#"
    package mw

    import "net/http"

    func Bad(next http.Handler) http.Handler {
    	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
    		w.WriteHeader(http.StatusUnauthorized)
    		w.Write([]byte("no"))
    	})
    }
"#};

const GOOD: &str = indoc! {r#"
    package mw

    import "net/http"

    func Good(next http.Handler) http.Handler {
    	return http.HandlerFunc(func(w http.ResponseWriter, r *http.Request) {
    		w.WriteHeader(http.StatusUnauthorized)
    		return
    	})
    }
"#};

fn returnlint() -> Command {
    let mut cmd = Command::cargo_bin("returnlint").unwrap();
    cmd.env_remove("RETURNLINT_CONFIG").env_remove("RUST_LOG");
    cmd
}

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        let path = dir.path().join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

#[test]
fn test_clean_project_exits_zero() {
    let dir = project(&[("mw.go", GOOD)]);

    let output = returnlint()
        .arg(dir.path())
        .arg("--no-color")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0 issues in 1 file checked"), "{stdout}");
}

#[test]
fn test_findings_exit_one_with_location() {
    let dir = project(&[("mw.go", BAD), ("ok.go", GOOD)]);

    let output = returnlint()
        .arg(dir.path())
        .arg("--no-color")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(
        stdout.contains("mw.go:7:3: status-setting call not immediately followed by a return statement"),
        "{stdout}"
    );
    assert!(stdout.contains("1 issue in 2 files checked"), "{stdout}");
}

#[test]
fn test_json_output() {
    let dir = project(&[("svc/mw.go", BAD)]);

    let output = returnlint()
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let files = value.as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0]["path"].as_str().unwrap().ends_with("mw.go"));
    assert_eq!(files[0]["diagnostics"][0]["position"]["line"], 7);
    assert_eq!(files[0]["diagnostics"][0]["position"]["column"], 3);
}

#[test]
fn test_config_file_excludes_and_format() {
    let dir = project(&[
        ("gen/mw.go", BAD),
        ("ok.go", GOOD),
        (".returnlint.toml", "exclude = [\"**/gen/**\"]\nformat = \"json\"\n"),
    ]);

    let output = returnlint().arg(dir.path()).output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 0);
}

#[test]
fn test_default_excludes_skip_vendor_and_tests_flag() {
    let dir = project(&[("vendor/lib/mw.go", BAD), ("mw_test.go", BAD)]);

    returnlint()
        .arg(dir.path())
        .args(["--no-tests", "--no-color"])
        .assert()
        .success();

    returnlint()
        .arg(dir.path())
        .arg("--no-color")
        .assert()
        .code(1);
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = project(&[("mw.go", GOOD)]);

    let output = returnlint()
        .arg(dir.path())
        .args(["--config", "does-not-exist.toml"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does-not-exist.toml"), "{stderr}");
}

#[test]
fn test_output_file() {
    let dir = project(&[("mw.go", BAD)]);
    let report = dir.path().join("report.json");

    returnlint()
        .arg(dir.path().join("mw.go"))
        .args(["--format", "json", "--output"])
        .arg(&report)
        .assert()
        .code(1);

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(report).unwrap()).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 1);
}

#[test]
fn test_unreadable_file_exits_two_after_reporting() {
    let dir = project(&[("mw.go", BAD)]);
    fs::write(dir.path().join("bad.go"), b"\xff\xfe").unwrap();

    let output = returnlint()
        .arg(dir.path())
        .arg("--no-color")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("mw.go:7:3:"), "{stdout}");
    assert!(stdout.contains("1 issue in 1 file checked"), "{stdout}");
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bad.go"), "{stderr}");
}

#[test]
fn test_only_unreadable_files_is_not_clean() {
    let dir = project(&[]);
    let bad = dir.path().join("bad.go");
    fs::write(&bad, b"\xff\xfe").unwrap();

    returnlint()
        .arg(&bad)
        .arg("--no-color")
        .assert()
        .code(2);
}
