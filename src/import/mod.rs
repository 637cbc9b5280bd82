//!
//! The source file search path.
//!

pub mod file_system;
pub mod path;
pub mod result;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use self::file_system::FileSystem;
use self::file_system::NativeFileSystem;
use self::result::ImportResult;

///
/// The callback the compiler invokes for the sources it cannot find on its own.
///
pub trait ImportCallback {
    ///
    /// Returns the contents of the source unit `path`.
    ///
    fn import(&self, path: &str) -> ImportResult;
}

///
/// The source file search path.
///
/// The base path is always probed before the include paths, which are probed in the
/// order they were specified in.
///
#[derive(Debug, Clone)]
pub struct SearchPath {
    /// The root of the source tree. Empty means the working directory.
    pub base_path: Option<String>,
    /// The additional source directories.
    pub include_paths: Vec<String>,
    /// The working directory captured at construction.
    working_directory: PathBuf,
}

impl SearchPath {
    /// The error returned if the file is absent in every directory of the search path.
    pub const ERROR_FILE_NOT_FOUND: &'static str =
        "File not found inside the base path or any of the include paths.";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(base_path: Option<String>, include_paths: Vec<String>) -> anyhow::Result<Self> {
        let working_directory = std::env::current_dir()
            .map_err(|error| anyhow::anyhow!("Working directory getting error: {}", error))?;
        Self::with_working_directory(base_path, include_paths, working_directory)
    }

    ///
    /// Validates the search path and binds it to the specified working directory.
    ///
    pub fn with_working_directory(
        base_path: Option<String>,
        include_paths: Vec<String>,
        working_directory: PathBuf,
    ) -> anyhow::Result<Self> {
        let has_base_path = base_path
            .as_deref()
            .map(|base_path| !base_path.is_empty())
            .unwrap_or_default();
        if !include_paths.is_empty() && !has_base_path {
            anyhow::bail!("--include-path option requires a non-empty base path.");
        }
        if include_paths.iter().any(String::is_empty) {
            anyhow::bail!("Empty values are not allowed in --include-path.");
        }

        Ok(Self {
            base_path,
            include_paths,
            working_directory,
        })
    }

    ///
    /// Whether a non-empty base path has been specified.
    ///
    pub fn has_base_path(&self) -> bool {
        matches!(self.base_path.as_deref(), Some(base_path) if !base_path.is_empty())
    }

    ///
    /// Returns the base path followed by the include paths.
    ///
    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.base_path.as_deref().unwrap_or_default())
            .chain(self.include_paths.iter().map(String::as_str))
    }

    ///
    /// Finds the file `import_path` in the search path and reads it.
    ///
    pub fn resolve(&self, import_path: &str) -> ImportResult {
        self.resolve_in(&NativeFileSystem, import_path)
    }

    ///
    /// Finds the file `import_path` in the search path and reads it from `file_system`.
    ///
    /// The first existing candidate is the only one read. If it cannot be read, the
    /// remaining prefixes are not probed. The file may vanish between the existence
    /// check and the read, in which case the read error is returned.
    ///
    pub fn resolve_in<F>(&self, file_system: &F, import_path: &str) -> ImportResult
    where
        F: FileSystem + ?Sized,
    {
        for prefix in self.prefixes() {
            let path = if prefix.is_empty() {
                import_path.to_owned()
            } else {
                format!("{}/{}", prefix, import_path)
            };

            if !file_system.exists(Path::new(path.as_str())) {
                continue;
            }

            return match file_system.read_to_string(Path::new(path.as_str())) {
                Ok(contents) => ImportResult::Contents(contents),
                Err(error) => ImportResult::Error(format!("Error reading {}: {}", path, error)),
            };
        }

        ImportResult::Error(Self::ERROR_FILE_NOT_FOUND.to_owned())
    }

    ///
    /// Converts the command line path into the source unit name.
    ///
    /// The path is made relative to the base path or, failing that, to the first include
    /// path containing it. Otherwise, the absolute path is used. Separators are always `/`.
    ///
    /// It is a simplified version of the compiler base path stripping: drive letters are
    /// not removed from absolute paths and UNC paths get no special treatment.
    ///
    pub fn canonicalize<P>(&self, input_path: P) -> String
    where
        P: AsRef<Path>,
    {
        let base_path = match self.base_path.as_deref() {
            Some(base_path) if !base_path.is_empty() => {
                path::resolve(self.working_directory.as_path(), Path::new(base_path))
            }
            _ => path::resolve(self.working_directory.as_path(), Path::new(".")),
        };
        let include_paths = self.include_paths.iter().map(|include_path| {
            path::resolve(self.working_directory.as_path(), Path::new(include_path))
        });
        let source_path = path::resolve(self.working_directory.as_path(), input_path.as_ref());

        for prefix in std::iter::once(base_path).chain(include_paths) {
            let relative = match path::relative(prefix.as_path(), source_path.as_path()) {
                Some(relative) => relative,
                None => continue,
            };
            if !path::is_escaping(relative.as_path()) {
                return path::with_unix_separators(relative.to_string_lossy().as_ref());
            }
        }

        path::with_unix_separators(source_path.to_string_lossy().as_ref())
    }
}

impl ImportCallback for SearchPath {
    fn import(&self, path: &str) -> ImportResult {
        self.resolve(path)
    }
}
