//!
//! The filesystem access used by the import resolver.
//!

use std::path::Path;

///
/// The filesystem operations the import resolver relies on.
///
pub trait FileSystem {
    ///
    /// Checks whether the path exists, following symbolic links.
    ///
    fn exists(&self, path: &Path) -> bool;

    ///
    /// Reads the whole file as UTF-8 text.
    ///
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}

///
/// The host filesystem.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeFileSystem;

impl FileSystem for NativeFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
