//!
//! The Solidity compiler.
//!

pub mod imports;
pub mod standard_json;


use std::io::Write;

use crate::import::ImportCallback;

///
/// The compiler accepting and producing the `--standard-json` documents.
///
pub trait StandardJsonCompiler {
    ///
    /// Returns the compiler version.
    ///
    fn version(&self) -> anyhow::Result<semver::Version>;

    ///
    /// Compiles the `--standard-json` input text into the output text.
    ///
    /// The callback is invoked for every source the compiler cannot find in the input.
    ///
    fn standard_json(
        &self,
        input: &str,
        import_callback: Option<&dyn ImportCallback>,
    ) -> anyhow::Result<String>;
}

///
/// The Solidity compiler executable.
///
#[derive(Debug, Clone)]
pub struct Compiler {
    /// The binary executable name.
    pub executable: String,
}

impl Compiler {
    /// The default executable name.
    pub const DEFAULT_EXECUTABLE: &'static str = "solc";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(executable: String) -> Self {
        Self { executable }
    }

    ///
    /// Parses the version from the `solc --version` output.
    ///
    pub fn parse_version(stdout: &str) -> anyhow::Result<semver::Version> {
        let regex = regex::Regex::new(r"Version:\s*(\d+\.\d+\.\d+)").expect("Regexp is valid");
        let version = regex
            .captures(stdout)
            .and_then(|captures| captures.get(1))
            .ok_or_else(|| anyhow::anyhow!("solc version not found in `{}`", stdout.trim()))?;
        semver::Version::parse(version.as_str())
            .map_err(|error| anyhow::anyhow!("solc version parsing error: {}", error))
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXECUTABLE.to_owned())
    }
}

impl StandardJsonCompiler for Compiler {
    fn version(&self) -> anyhow::Result<semver::Version> {
        let solc_output = std::process::Command::new(self.executable.as_str())
            .arg("--version")
            .output()
            .map_err(|error| anyhow::anyhow!("solc subprocess error: {:?}", error))?;
        if !solc_output.status.success() {
            anyhow::bail!(
                "{}",
                String::from_utf8_lossy(solc_output.stderr.as_slice())
            );
        }

        Self::parse_version(String::from_utf8_lossy(solc_output.stdout.as_slice()).as_ref())
    }

    fn standard_json(
        &self,
        input: &str,
        import_callback: Option<&dyn ImportCallback>,
    ) -> anyhow::Result<String> {
        let parsed = serde_json::from_str::<serde_json::Value>(input);
        let (input, missing) = match (import_callback, parsed) {
            (Some(import_callback), Ok(mut input)) => {
                let missing = imports::fetch(&mut input, import_callback);
                (serde_json::to_string(&input)?, missing)
            }
            _ => (input.to_owned(), Default::default()),
        };

        let mut solc_command = std::process::Command::new(self.executable.as_str());
        solc_command.stdin(std::process::Stdio::piped());
        solc_command.stdout(std::process::Stdio::piped());
        solc_command.stderr(std::process::Stdio::piped());
        solc_command.arg("--standard-json");

        let solc_process = solc_command
            .spawn()
            .map_err(|error| anyhow::anyhow!("solc subprocess spawning error: {:?}", error))?;
        solc_process
            .stdin
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("solc stdin getting error"))?
            .write_all(input.as_bytes())
            .map_err(|error| anyhow::anyhow!("solc stdin writing error: {:?}", error))?;

        let solc_output = solc_process
            .wait_with_output()
            .map_err(|error| anyhow::anyhow!("solc subprocess output error: {:?}", error))?;
        if !solc_output.status.success() {
            anyhow::bail!(
                "{}",
                String::from_utf8_lossy(solc_output.stderr.as_slice())
            );
        }

        let output = String::from_utf8_lossy(solc_output.stdout.as_slice()).to_string();
        if missing.is_empty() {
            return Ok(output);
        }

        let mut output: serde_json::Value = serde_json::from_str(output.as_str())
            .map_err(|error| anyhow::anyhow!("solc output parsing error: {}", error))?;
        imports::report(&mut output, &missing);
        Ok(serde_json::to_string(&output)?)
    }
}
