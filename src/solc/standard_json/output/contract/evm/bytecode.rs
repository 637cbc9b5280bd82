//!
//! The `solc --standard-json` output contract EVM bytecode.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output contract EVM bytecode.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    /// The bytecode as a hexadecimal string.
    pub object: String,
}
