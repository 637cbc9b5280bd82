//!
//! The lexical path utilities.
//!
//! Nothing here touches the filesystem: symbolic links are not followed and
//! `..` segments are collapsed textually.
//!

use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

///
/// Resolves `path` against `working_directory` and collapses the `.` and `..` segments.
///
/// The `..` segments going beyond the root are dropped, so `/../a` becomes `/a`.
///
pub fn resolve(working_directory: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        working_directory.join(path)
    };

    let mut resolved = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(segment) => resolved.push(segment),
        }
    }
    resolved
}

///
/// Computes the path leading from the `base` directory to `path`.
///
/// Both paths must be resolved. Returns `None` if they do not share a root, e.g. when
/// they are located on different drives.
///
pub fn relative(base: &Path, path: &Path) -> Option<PathBuf> {
    let base: Vec<Component> = base.components().collect();
    let path: Vec<Component> = path.components().collect();

    let common = base
        .iter()
        .zip(path.iter())
        .take_while(|(base, path)| base == path)
        .count();
    if common == 0 {
        return None;
    }

    let mut relative = PathBuf::new();
    for _ in common..base.len() {
        relative.push(Component::ParentDir.as_os_str());
    }
    for component in path[common..].iter() {
        relative.push(component.as_os_str());
    }
    Some(relative)
}

///
/// Checks whether the relative path starts with `../`.
///
/// A lone `..` is not escaping, so the parent of the prefix directory is named `..`.
///
pub fn is_escaping(relative: &Path) -> bool {
    let mut components = relative.components();
    matches!(components.next(), Some(Component::ParentDir)) && components.next().is_some()
}

///
/// Replaces the native path separators with forward slashes.
///
/// On the platforms where `/` is the native separator, backslashes are a part of
/// file names and are kept as is.
///
pub fn with_unix_separators(path: &str) -> String {
    replace_separators(path, std::path::MAIN_SEPARATOR)
}

///
/// Replaces `separator` with forward slashes.
///
pub(crate) fn replace_separators(path: &str, separator: char) -> String {
    if separator == '/' {
        return path.to_owned();
    }
    path.replace(separator, "/")
}
