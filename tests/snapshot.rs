use std::fs;
use std::path::Path;

use bytecode_complete::LoadError;
use bytecode_complete::snapshot::Snapshot;

const SNAPSHOT: &str = r#"
[runtime]
names = ["java/util/List", "java/util/Map"]

[[runtime.classes]]
name = "java.lang.Object"
methods = [
    { name = "hashCode", returns = "int" },
    { name = "equals", parameters = ["java.lang.Object"], returns = "boolean" },
    { name = "wait", parameters = ["long"] },
]

[[runtime.classes]]
name = "java.lang.Integer"
fields = [{ name = "MAX_VALUE", type = "int" }]

[[workspace.classes]]
name = "com/example/App"
methods = [{ name = "main", descriptor = "([Ljava/lang/String;)V" }]
fields = [{ name = "count", descriptor = "I" }]
"#;

/// Helper: write `text` to a snapshot file in a fresh temp dir.
fn write_snapshot(text: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let path = dir.path().join("symbols.toml");
    fs::write(&path, text).expect("failed to write snapshot");
    (dir, path)
}

#[test]
fn test_load_snapshot_and_complete() {
    let (_dir, path) = write_snapshot(SNAPSHOT);
    let completer = Snapshot::load(&path).unwrap().into_completer();

    assert_eq!(
        completer.complete_internal_name("java/"),
        vec![
            "java/lang/Integer",
            "java/lang/Object",
            "java/util/List",
            "java/util/Map",
        ]
    );
    assert_eq!(
        completer.complete_descriptor("[Lcom/"),
        vec!["[Lcom/example/App;"]
    );
    assert_eq!(
        completer.complete_method("java/lang/Object", "e"),
        vec!["equals(Ljava/lang/Object;)Z"]
    );
    assert_eq!(
        completer.complete_method("java/lang/Object", "w"),
        vec!["wait(J)V"]
    );
    assert_eq!(
        completer.complete_field("java/lang/Integer", "MAX"),
        vec!["MAX_VALUE I"]
    );
    assert_eq!(
        completer.complete_method("com/example/App", "m"),
        vec!["main([Ljava/lang/String;)V"]
    );
    assert_eq!(
        completer.complete_field("com/example/App", "c"),
        vec!["count I"]
    );
}

#[test]
fn test_names_without_members_are_not_loadable() {
    let completer = Snapshot::parse(SNAPSHOT, Path::new("inline"))
        .unwrap()
        .into_completer();

    assert_eq!(completer.complete_internal_name("java/util/L"), vec!["java/util/List"]);
    assert!(completer.complete_method("java/util/List", "a").is_empty());
}

#[test]
fn test_snapshot_without_workspace() {
    let snapshot = Snapshot::parse(
        "[runtime]\nnames = [\"a/B\"]\n",
        Path::new("inline"),
    )
    .unwrap();
    let (class_path, workspace) = snapshot.into_sources();
    assert!(workspace.is_none());

    let names = bytecode_complete::RuntimeClassSource::all_loadable_class_names(&class_path);
    assert_eq!(names, vec!["a/B"]);
}

#[test]
fn test_empty_snapshot_completes_nothing() {
    let completer = Snapshot::parse("", Path::new("inline")).unwrap().into_completer();
    assert!(completer.complete_internal_name("java").is_empty());
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Snapshot::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let (_dir, path) = write_snapshot("[runtime\nnames = 1");
    let err = Snapshot::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Toml { .. }));
    assert!(err.to_string().contains("symbols.toml"));
}

#[test]
fn test_unknown_section_is_rejected() {
    let err = Snapshot::parse("[classpath]\nnames = []\n", Path::new("inline")).unwrap_err();
    assert!(matches!(err, LoadError::Toml { .. }));
}

#[test]
fn test_blank_class_name_is_rejected() {
    let err = Snapshot::parse("[runtime]\nnames = [\"  \"]\n", Path::new("inline")).unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidClass {
            section: "runtime",
            ..
        }
    ));
}

#[test]
fn test_dotted_workspace_name_is_rejected() {
    let err = Snapshot::parse(
        "[[workspace.classes]]\nname = \"com.example.App\"\n",
        Path::new("inline"),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        LoadError::InvalidClass {
            section: "workspace",
            ..
        }
    ));
}
