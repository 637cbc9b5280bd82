//!
//! The search path tests.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::import::path;
use crate::import::result::ImportResult;
use crate::import::SearchPath;
use crate::tests::RecordingFileSystem;

fn search_path(base_path: Option<&str>, include_paths: &[&str]) -> SearchPath {
    SearchPath::with_working_directory(
        base_path.map(str::to_owned),
        include_paths.iter().map(|path| (*path).to_owned()).collect(),
        PathBuf::from("/work"),
    )
    .expect("Always valid")
}

#[test]
fn ok_resolve_from_second_include_path() {
    let file_system = RecordingFileSystem::default().with_file("/i2/dep/token.sol", "contract T {}");
    let search_path = search_path(Some("/base"), &["/i1", "/i2", "/i3"]);

    let result = search_path.resolve_in(&file_system, "dep/token.sol");

    assert_eq!(result, ImportResult::Contents("contract T {}".to_owned()));
    assert_eq!(
        file_system.probes(),
        vec![
            "/base/dep/token.sol".to_owned(),
            "/i1/dep/token.sol".to_owned(),
            "/i2/dep/token.sol".to_owned(),
        ]
    );
    assert_eq!(file_system.reads(), vec!["/i2/dep/token.sol".to_owned()]);
}

#[test]
fn ok_resolve_base_path_shadows_include_path() {
    let file_system = RecordingFileSystem::default()
        .with_file("/base/a.sol", "base")
        .with_file("/i1/a.sol", "include");
    let search_path = search_path(Some("/base"), &["/i1"]);

    let result = search_path.resolve_in(&file_system, "a.sol");

    assert_eq!(result, ImportResult::Contents("base".to_owned()));
    assert_eq!(file_system.probes(), vec!["/base/a.sol".to_owned()]);
}

#[test]
fn ok_resolve_without_base_path_uses_import_as_is() {
    let file_system = RecordingFileSystem::default().with_file("lib/a.sol", "a");
    let search_path = search_path(None, &[]);

    let result = search_path.resolve_in(&file_system, "lib/a.sol");

    assert_eq!(result, ImportResult::Contents("a".to_owned()));
    assert_eq!(file_system.probes(), vec!["lib/a.sol".to_owned()]);
}

#[test]
fn ok_resolve_empty_base_path_uses_import_as_is() {
    let file_system = RecordingFileSystem::default();
    let search_path = search_path(Some(""), &[]);

    let _ = search_path.resolve_in(&file_system, "a.sol");

    assert_eq!(file_system.probes(), vec!["a.sol".to_owned()]);
}

#[test]
fn ok_resolve_empty_import_path_is_probed() {
    let file_system = RecordingFileSystem::default();
    let search_path = search_path(Some("/base"), &["/i1"]);

    let result = search_path.resolve_in(&file_system, "");

    assert_eq!(
        result,
        ImportResult::Error(SearchPath::ERROR_FILE_NOT_FOUND.to_owned())
    );
    assert_eq!(
        file_system.probes(),
        vec!["/base/".to_owned(), "/i1/".to_owned()]
    );
}

#[test]
fn ok_resolve_duplicate_prefixes_are_probed_independently() {
    let file_system = RecordingFileSystem::default();
    let search_path = search_path(Some("/base"), &["/base", "/base"]);

    let _ = search_path.resolve_in(&file_system, "a.sol");

    assert_eq!(file_system.probes().len(), 3);
}

#[test]
fn error_resolve_not_found() {
    for include_paths in [vec![], vec!["/i1"], vec!["/i1", "/i2", "/i3"]] {
        let file_system = RecordingFileSystem::default();
        let search_path = search_path(Some("/base"), include_paths.as_slice());

        let result = search_path.resolve_in(&file_system, "missing.sol");

        assert_eq!(
            result,
            ImportResult::Error(
                "File not found inside the base path or any of the include paths.".to_owned()
            )
        );
        assert_eq!(file_system.probes().len(), include_paths.len() + 1);
        assert!(file_system.reads().is_empty());
    }
}

#[test]
fn error_resolve_unreadable_stops_probing() {
    let file_system = RecordingFileSystem::default()
        .with_unreadable("/i1/a.sol")
        .with_file("/i2/a.sol", "fallback");
    let search_path = search_path(Some("/base"), &["/i1", "/i2"]);

    let result = search_path.resolve_in(&file_system, "a.sol");

    match result {
        ImportResult::Error(error) => {
            assert!(error.starts_with("Error reading /i1/a.sol: "));
            assert!(error.contains("permission denied"));
        }
        ImportResult::Contents(contents) => panic!("Unexpected contents: {}", contents),
    }
    assert_eq!(
        file_system.probes(),
        vec!["/base/a.sol".to_owned(), "/i1/a.sol".to_owned()]
    );
}

#[test]
fn ok_resolve_end_to_end_on_disk() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let project = directory.path().join("proj");
    crate::tests::write_file(
        project.join("lib/dep/token.sol").as_path(),
        "contract Token {}",
    );
    let search_path = SearchPath::with_working_directory(
        Some(project.to_string_lossy().to_string()),
        vec![project.join("lib").to_string_lossy().to_string()],
        directory.path().to_path_buf(),
    )
    .expect("Always valid");

    assert_eq!(
        search_path.resolve("dep/token.sol"),
        ImportResult::Contents("contract Token {}".to_owned())
    );
}

#[test]
fn error_resolve_directory_on_disk() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let base = directory.path().join("base");
    let include = directory.path().join("include");
    std::fs::create_dir_all(base.join("a.sol")).expect("Directory creation");
    crate::tests::write_file(include.join("a.sol").as_path(), "shadowed");
    let search_path = SearchPath::with_working_directory(
        Some(base.to_string_lossy().to_string()),
        vec![include.to_string_lossy().to_string()],
        directory.path().to_path_buf(),
    )
    .expect("Always valid");

    match search_path.resolve("a.sol") {
        ImportResult::Error(error) => assert!(error.starts_with(
            format!("Error reading {}/a.sol: ", base.to_string_lossy()).as_str()
        )),
        ImportResult::Contents(contents) => panic!("Unexpected contents: {}", contents),
    }
}

#[test]
fn ok_result_serialization() {
    assert_eq!(
        serde_json::to_value(ImportResult::Contents("x".to_owned())).expect("Always valid"),
        serde_json::json!({ "contents": "x" })
    );
    assert_eq!(
        serde_json::to_value(ImportResult::Error("y".to_owned())).expect("Always valid"),
        serde_json::json!({ "error": "y" })
    );
}

#[test]
fn error_include_path_without_base_path() {
    let error = SearchPath::with_working_directory(
        None,
        vec!["foo".to_owned()],
        PathBuf::from("/work"),
    )
    .expect_err("Must be rejected");
    assert_eq!(
        error.to_string(),
        "--include-path option requires a non-empty base path."
    );

    assert!(SearchPath::with_working_directory(
        Some(String::new()),
        vec!["foo".to_owned()],
        PathBuf::from("/work"),
    )
    .is_err());
}

#[test]
fn error_empty_include_path() {
    let error = SearchPath::with_working_directory(
        Some("/base".to_owned()),
        vec!["/lib".to_owned(), String::new()],
        PathBuf::from("/work"),
    )
    .expect_err("Must be rejected");
    assert_eq!(
        error.to_string(),
        "Empty values are not allowed in --include-path."
    );

    assert!(SearchPath::with_working_directory(
        None,
        vec![String::new()],
        PathBuf::from("/work")
    )
    .is_err());
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_inside_base_path() {
    let search_path = search_path(Some("/proj"), &[]);
    assert_eq!(search_path.canonicalize("/proj/src/Main.sol"), "src/Main.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_trailing_separator_in_base_path() {
    let with = search_path(Some("/proj/"), &[]);
    let without = search_path(Some("/proj"), &[]);
    for path in ["/proj/src/Main.sol", "src/../lib/A.sol", "/proj/./x/../B.sol"] {
        assert_eq!(with.canonicalize(path), without.canonicalize(path));
    }
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_relative_to_working_directory() {
    let search_path = search_path(None, &[]);
    assert_eq!(search_path.canonicalize("contracts/A.sol"), "contracts/A.sol");
    assert_eq!(search_path.canonicalize("./contracts/../A.sol"), "A.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_relative_base_path() {
    let search_path = search_path(Some("proj"), &[]);
    assert_eq!(search_path.canonicalize("/work/proj/src/A.sol"), "src/A.sol");
    assert_eq!(search_path.canonicalize("proj/src/A.sol"), "src/A.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_include_path() {
    let search_path = search_path(Some("/proj"), &["/deps/one", "/deps"]);
    assert_eq!(search_path.canonicalize("/deps/one/Token.sol"), "Token.sol");
    assert_eq!(search_path.canonicalize("/deps/two/Token.sol"), "two/Token.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_base_path_before_include_path() {
    let search_path = search_path(Some("/proj"), &["/proj/lib"]);
    assert_eq!(search_path.canonicalize("/proj/lib/A.sol"), "lib/A.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_parent_of_base_path() {
    let search_path = search_path(Some("/proj/src"), &[]);
    assert_eq!(search_path.canonicalize("/proj"), "..");
    assert_eq!(search_path.canonicalize("/proj/lib/A.sol"), "/proj/lib/A.sol");
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_outside_every_prefix() {
    let search_path = search_path(Some("/proj"), &["/deps"]);
    let key = search_path.canonicalize("/elsewhere/../other/A.sol");
    assert_eq!(key, "/other/A.sol");
    assert!(Path::new(key.as_str()).is_absolute());
}

#[cfg(unix)]
#[test]
fn ok_canonicalize_keeps_backslashes_on_unix() {
    let search_path = search_path(Some("/proj"), &[]);
    assert_eq!(search_path.canonicalize("/proj/a\\b.sol"), "a\\b.sol");
}

#[test]
fn ok_canonicalize_outside_every_prefix_on_disk() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let base = directory.path().join("base");
    let file = directory.path().join("outside").join("A.sol");
    crate::tests::write_file(file.as_path(), "contract A {}");
    std::fs::create_dir_all(base.as_path()).expect("Directory creation");
    let search_path = SearchPath::new(Some(base.to_string_lossy().to_string()), vec![])
        .expect("Always valid");

    let key = search_path.canonicalize(file.as_path());

    assert!(Path::new(key.as_str()).is_absolute());
    assert_eq!(
        std::fs::read_to_string(key.as_str()).expect("Must point at the file"),
        "contract A {}"
    );
}

#[test]
fn ok_replace_windows_separators() {
    assert_eq!(
        path::replace_separators("src\\contracts\\A.sol", '\\'),
        "src/contracts/A.sol"
    );
    assert_eq!(path::replace_separators("src\\A.sol", '/'), "src\\A.sol");
}

#[cfg(unix)]
#[test]
fn ok_resolve_path_beyond_root() {
    assert_eq!(
        path::resolve(Path::new("/work"), Path::new("/../../a/./b/../c")),
        PathBuf::from("/a/c")
    );
    assert_eq!(
        path::resolve(Path::new("/work/dir"), Path::new("../x.sol")),
        PathBuf::from("/work/x.sol")
    );
}

#[cfg(unix)]
#[test]
fn ok_relative_paths() {
    assert_eq!(
        path::relative(Path::new("/a/b"), Path::new("/a/b/c/d.sol")),
        Some(PathBuf::from("c/d.sol"))
    );
    assert_eq!(
        path::relative(Path::new("/a/b"), Path::new("/a/x.sol")),
        Some(PathBuf::from("../x.sol"))
    );
    assert!(path::is_escaping(Path::new("../x.sol")));
    assert!(!path::is_escaping(Path::new("c/..d.sol")));
    assert!(!path::is_escaping(Path::new("..")));
}
