//!
//! The Solidity compiler front end arguments.
//!

use std::path::PathBuf;

use structopt::StructOpt;

///
/// Compiles the given Solidity input files and writes the components specified in the
/// options to files in the output directory.
/// Imports are automatically read from the filesystem.
///
/// Example: solcjs --bin --abi ERC20.sol --base-path . --include-path node_modules/ -o build/
///
#[derive(Debug, StructOpt)]
#[structopt(name = "solcjs")]
pub struct Arguments {
    /// The input file paths.
    #[structopt(parse(from_os_str))]
    pub input_files: Vec<PathBuf>,

    /// Root of the project source tree. The import callback will attempt to
    /// interpret all import paths as relative to this directory.
    #[structopt(long = "base-path")]
    pub base_path: Option<String>,

    /// Extra source directories available to the import callback. When using
    /// a package manager to install libraries, use this option to specify
    /// directories where packages are installed. Can be used multiple times
    /// to provide multiple locations. Can only be used if base path has a
    /// non-empty value.
    #[structopt(long = "include-path", number_of_values = 1)]
    pub include_paths: Vec<String>,

    /// Output directory for the contracts.
    #[structopt(
        short = "o",
        long = "output-dir",
        parse(from_os_str),
        default_value = "."
    )]
    pub output_directory: PathBuf,

    /// Binary of the contracts in hex.
    #[structopt(long = "bin")]
    pub output_binary: bool,

    /// ABI of the contracts.
    #[structopt(long = "abi")]
    pub output_abi: bool,

    /// Enable bytecode optimizer.
    #[structopt(long = "optimize")]
    pub optimize: bool,

    /// The number of runs specifies roughly how often each opcode of the
    /// deployed code will be executed across the lifetime of the contract.
    /// Lower values will optimize more for initial deployment cost, higher
    /// values will optimize more for high-frequency usage.
    #[structopt(long = "optimize-runs", default_value = "200")]
    pub optimize_runs: usize,

    /// Turn on Standard JSON Input / Output mode.
    /// Reads from stdin, result is written to stdout.
    #[structopt(long = "standard-json")]
    pub standard_json: bool,

    /// Pretty-print all JSON output.
    #[structopt(short = "p", long = "pretty-json")]
    pub pretty_json: bool,

    /// More detailed console output.
    #[structopt(short = "v", long = "verbose")]
    pub verbose: bool,

    /// Path to the `solc` executable.
    /// By default, the one in $PATH is used.
    #[structopt(long = "solc")]
    pub solc: Option<String>,
}

impl Arguments {
    ///
    /// A shortcut constructor.
    ///
    pub fn new() -> Self {
        Self::from_args()
    }

    ///
    /// Validates the arguments.
    ///
    /// The search path is validated separately when it is built.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.standard_json {
            return Ok(());
        }

        if self.input_files.is_empty() {
            anyhow::bail!("Must provide a file");
        }
        if !self.output_binary && !self.output_abi {
            anyhow::bail!("Invalid option selected, must specify either --bin or --abi");
        }

        Ok(())
    }
}

impl Default for Arguments {
    fn default() -> Self {
        Self::new()
    }
}
