//! Directory-walk behavior: unit discovery, recovery policy, exit codes.

use std::path::Path;

use tempfile::TempDir;

use go2json::cli::{self, Cli, EXIT_ERROR, EXIT_FAILED, EXIT_SUCCESS};

const GOOD_UNIT: &str = "package demo\n\nfunc main() {}\n";
const BROKEN_UNIT: &str = "package demo\n\nfunc main() {\n";

fn cli_for(path: &Path, fail_fast: bool) -> Cli {
    Cli {
        path: path.to_path_buf(),
        fail_fast,
        quiet: true,
    }
}

#[test]
fn test_single_file_run() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("main.go");
    std::fs::write(&source, GOOD_UNIT).unwrap();

    let code = cli::run(&cli_for(&source, false)).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
    assert!(temp.path().join("main.json").exists());
}

#[test]
fn test_directory_converts_every_unit() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("nested")).unwrap();
    std::fs::write(temp.path().join("a.go"), GOOD_UNIT).unwrap();
    std::fs::write(temp.path().join("nested/b.go"), GOOD_UNIT).unwrap();

    let code = cli::run(&cli_for(temp.path(), false)).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
    assert!(temp.path().join("a.json").exists());
    assert!(temp.path().join("nested/b.json").exists());
}

#[test]
fn test_per_unit_recovery_is_the_default() {
    // Three units, one broken: the two good ones must still convert and
    // the failure must be reflected in the exit code.
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a.go"), GOOD_UNIT).unwrap();
    std::fs::write(temp.path().join("b.go"), BROKEN_UNIT).unwrap();
    std::fs::write(temp.path().join("c.go"), GOOD_UNIT).unwrap();

    let code = cli::run(&cli_for(temp.path(), false)).unwrap();
    assert_eq!(code, EXIT_FAILED);
    assert!(temp.path().join("a.json").exists());
    assert!(!temp.path().join("b.json").exists());
    assert!(temp.path().join("c.json").exists());
}

#[test]
fn test_fail_fast_aborts_remaining_units() {
    // Units are processed in sorted order, so the broken unit comes
    // first and nothing after it may be converted.
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("a_broken.go"), BROKEN_UNIT).unwrap();
    std::fs::write(temp.path().join("b.go"), GOOD_UNIT).unwrap();
    std::fs::write(temp.path().join("c.go"), GOOD_UNIT).unwrap();

    let code = cli::run(&cli_for(temp.path(), true)).unwrap();
    assert_eq!(code, EXIT_FAILED);
    assert!(!temp.path().join("a_broken.json").exists());
    assert!(!temp.path().join("b.json").exists());
    assert!(!temp.path().join("c.json").exists());
}

#[test]
fn test_missing_path_is_usage_error() {
    let code = cli::run(&cli_for(Path::new("no/such/path"), false)).unwrap();
    assert_eq!(code, EXIT_ERROR);
}

#[test]
fn test_directory_without_go_files_succeeds() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("notes.txt"), "nothing here\n").unwrap();

    let code = cli::run(&cli_for(temp.path(), false)).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
}

#[test]
fn test_existing_output_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("main.go");
    std::fs::write(&source, GOOD_UNIT).unwrap();
    std::fs::write(temp.path().join("main.json"), "stale\n").unwrap();

    let code = cli::run(&cli_for(&source, false)).unwrap();
    assert_eq!(code, EXIT_SUCCESS);
    let document = std::fs::read_to_string(temp.path().join("main.json")).unwrap();
    assert!(document.contains("\"type\": \"source_file\""));
}

#[test]
fn test_output_document_parses_as_json() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("main.go");
    std::fs::write(
        &source,
        "package demo\n\nimport \"fmt\"\n\nfunc main() {\n\tfmt.Println(\"hi\")\n}\n",
    )
    .unwrap();

    let code = cli::run(&cli_for(&source, false)).unwrap();
    assert_eq!(code, EXIT_SUCCESS);

    let document = std::fs::read_to_string(temp.path().join("main.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();
    assert_eq!(value["type"], "source_file");
    assert_eq!(value["value"], "demo");
}
