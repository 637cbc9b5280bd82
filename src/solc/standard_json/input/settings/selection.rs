//!
//! The `solc --standard-json` expected output selection.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` expected output selection.
///
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
#[allow(clippy::upper_case_acronyms)]
pub enum Selection {
    /// The ABI JSON representation.
    #[serde(rename = "abi")]
    ABI,
    /// The EVM deploy bytecode.
    #[serde(rename = "evm.bytecode")]
    Bytecode,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ABI => write!(f, "abi"),
            Self::Bytecode => write!(f, "evm.bytecode"),
        }
    }
}
