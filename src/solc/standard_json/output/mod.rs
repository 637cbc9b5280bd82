//!
//! The `solc --standard-json` output representation.
//!

pub mod contract;
pub mod error;
pub mod source;

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use self::contract::Contract;
use self::error::Error as SolidityError;
use self::source::Source;

///
/// The `solc --standard-json` output representation.
///
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Output {
    /// The file-contract hashmap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
    /// The source code mapping data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<BTreeMap<String, Source>>,
    /// The compilation errors and warnings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<SolidityError>>,
}

impl Output {
    ///
    /// Whether any diagnostic is more severe than a warning.
    ///
    pub fn has_errors(&self) -> bool {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .any(|error| !error.is_warning())
    }

    ///
    /// Prints the warnings to the standard output and the rest to the standard error.
    ///
    /// Returns whether there were diagnostics more severe than a warning.
    ///
    pub fn print_diagnostics(&self) -> bool {
        for error in self.errors.as_deref().unwrap_or_default().iter() {
            if error.is_warning() {
                println!("{}", error);
            } else {
                eprintln!("{}", error);
            }
        }
        self.has_errors()
    }
}
