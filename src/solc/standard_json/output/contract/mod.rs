//!
//! The `solc --standard-json` output contract.
//!

pub mod evm;

use serde::Deserialize;
use serde::Serialize;

use self::evm::EVM;

///
/// The `solc --standard-json` output contract.
///
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    /// The contract ABI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abi: Option<serde_json::Value>,
    /// The contract EVM data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm: Option<EVM>,
}

impl Contract {
    ///
    /// Returns the hexadecimal deploy bytecode, if it has been emitted.
    ///
    pub fn bytecode(&self) -> Option<&str> {
        self.evm
            .as_ref()
            .and_then(|evm| evm.bytecode.as_ref())
            .map(|bytecode| bytecode.object.as_str())
    }
}
