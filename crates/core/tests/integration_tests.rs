//! Integration tests for quickrun-core
//!
//! These tests verify that the core functionality works together correctly
//! by loading real config documents and running the actions they define.

use quickrun_core::{
    action_definitions::Invocation,
    catalog::ActionCatalog,
    config::get_config_path,
    error::Error,
    execution::{Executor, ShellExecutor},
};
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_json_config(content: &str) -> NamedTempFile {
    let mut temp_file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    write!(temp_file, "{content}").unwrap();
    temp_file
}

/// Test loading a catalog and running every action in it
#[test]
fn test_load_and_run_workflow() {
    let scripts = tempfile::tempdir().unwrap();
    fs::write(
        scripts.path().join("quickrun-greet.sh"),
        "echo greetings\n",
    )
    .unwrap();

    let temp_file = write_json_config(
        r#"{
  "commands": [
    {"name": "Hello", "description": "Say hello", "command": "echo hello"},
    {"name": "Greet", "description": "Run the greet script", "script": "quickrun-greet.sh"},
    {"name": "Fail", "description": "Always fails", "command": "echo oops >&2; exit 1"}
  ]
}"#,
    );

    let catalog = ActionCatalog::load(temp_file.path().to_str().unwrap()).unwrap();
    assert_eq!(catalog.count(), 3);

    let executor = ShellExecutor::new("sh").with_base_directory(scripts.path());

    let hello = executor.run(catalog.get(0).unwrap());
    assert_eq!(hello.title, "Command Output: echo hello");
    assert_eq!(hello.text, "hello\n");
    assert!(!hello.failed);

    let greet = executor.run(catalog.get(1).unwrap());
    assert_eq!(greet.title, "Script Output: quickrun-greet.sh");
    assert_eq!(greet.text, "greetings\n");

    let fail = executor.run(catalog.get(2).unwrap());
    assert_eq!(fail.title, "Command Output: echo oops >&2; exit 1");
    assert!(fail.failed);
    assert_eq!(fail.text, "Error: exit status 1");
    assert_eq!(fail.output, "oops\n");
}

/// Test that the catalog keeps file order, including duplicate names
#[test]
fn test_catalog_preserves_file_order() {
    let temp_file = write_json_config(
        r#"{"commands": [
  {"name": "b", "description": "", "command": "true"},
  {"name": "a", "description": "", "command": "true"},
  {"name": "b", "description": "", "script": "b.sh"}
]}"#,
    );

    let catalog = ActionCatalog::load(temp_file.path().to_str().unwrap()).unwrap();
    let names: Vec<&str> = catalog.iter().map(|action| action.name.as_str()).collect();
    assert_eq!(names, vec!["b", "a", "b"]);
    assert_eq!(
        catalog.get(2).unwrap().invocation,
        Invocation::ScriptPath("b.sh".to_string())
    );
}

/// Test a missing script surfaces as displayable data
#[test]
fn test_missing_script_workflow() {
    let base = tempfile::tempdir().unwrap();
    let temp_file = write_json_config(
        r#"{"commands": [{"name": "Run", "description": "", "script": "quickrun-not-there.sh"}]}"#,
    );

    let catalog = ActionCatalog::load(temp_file.path().to_str().unwrap()).unwrap();
    let result = ShellExecutor::new("sh")
        .with_base_directory(base.path())
        .run(catalog.get(0).unwrap());

    assert!(result.failed);
    assert_eq!(result.title, "Script Output: quickrun-not-there.sh");
    assert!(result.text.starts_with("Error: script not found: "));
    assert!(result.text.contains("quickrun-not-there.sh"));
}

/// Test config errors are reported before anything runs
#[test]
fn test_invalid_configs_fail_to_load() {
    let malformed = write_json_config("not json at all");
    assert!(matches!(
        ActionCatalog::load(malformed.path().to_str().unwrap()),
        Err(Error::Json { .. })
    ));

    let ambiguous = write_json_config(
        r#"{"commands": [{"name": "Both", "description": "", "command": "ls", "script": "ls.sh"}]}"#,
    );
    assert!(matches!(
        ActionCatalog::load(ambiguous.path().to_str().unwrap()),
        Err(Error::AmbiguousInvocation(name)) if name == "Both"
    ));

    assert!(matches!(
        ActionCatalog::load("/this/path/does/not/exist.json"),
        Err(Error::Io { .. })
    ));
}

/// Test configuration path resolution
#[test]
fn test_configuration_path_workflow() {
    assert_eq!(get_config_path(&None), "config.json");

    let expanded = get_config_path(&Some("~/menus/config.json".to_string()));
    assert!(!expanded.starts_with('~'));
    assert!(expanded.ends_with("menus/config.json"));
}
