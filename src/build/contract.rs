//!
//! The Solidity contract build.
//!

use std::fs::File;
use std::io::Write;
use std::path::Path;

///
/// The Solidity contract build.
///
#[derive(Debug, Clone)]
pub struct Contract {
    /// The source unit name.
    pub path: String,
    /// The contract name.
    pub name: String,
    /// The contract ABI.
    pub abi: Option<serde_json::Value>,
    /// The hexadecimal deploy bytecode.
    pub bytecode: Option<String>,
}

impl Contract {
    /// The bytecode file extension.
    pub const EXTENSION_BINARY: &'static str = "bin";

    /// The ABI file extension.
    pub const EXTENSION_ABI: &'static str = "abi";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        path: String,
        name: String,
        abi: Option<serde_json::Value>,
        bytecode: Option<String>,
    ) -> Self {
        Self {
            path,
            name,
            abi,
            bytecode,
        }
    }

    ///
    /// Returns the artifact file name without extension.
    ///
    /// The source unit name and the contract name are joined with `:`, and then every
    /// `:`, `.`, `/` and `\` is replaced with `_`.
    ///
    pub fn file_name(&self) -> String {
        format!("{}:{}", self.path, self.name).replace([':', '.', '/', '\\'], "_")
    }

    ///
    /// Writes the contract bytecode and ABI to files.
    ///
    pub fn write_to_directory(
        &self,
        path: &Path,
        output_binary: bool,
        output_abi: bool,
        pretty: bool,
    ) -> anyhow::Result<()> {
        let file_name = self.file_name();

        if output_binary {
            if let Some(bytecode) = self.bytecode.as_deref() {
                let mut file_path = path.to_owned();
                file_path.push(format!("{}.{}", file_name, Self::EXTENSION_BINARY));
                Self::write_file(file_path.as_path(), bytecode)?;
            }
        }

        if output_abi {
            let abi = self.abi.clone().unwrap_or(serde_json::Value::Null);
            let mut file_path = path.to_owned();
            file_path.push(format!("{}.{}", file_name, Self::EXTENSION_ABI));
            Self::write_file(
                file_path.as_path(),
                crate::json::to_string(&abi, pretty)?.as_str(),
            )?;
        }

        Ok(())
    }

    ///
    /// Creates or truncates the file and writes `content` to it.
    ///
    fn write_file(file_path: &Path, content: &str) -> anyhow::Result<()> {
        File::create(file_path)
            .map_err(|error| anyhow::anyhow!("Failed to write {:?}: {}", file_path, error))?
            .write_all(content.as_bytes())
            .map_err(|error| anyhow::anyhow!("Failed to write {:?}: {}", file_path, error))?;
        Ok(())
    }
}
