//!
//! The `solc --standard-json` input settings representation.
//!

pub mod optimizer;
pub mod selection;

use serde::Deserialize;
use serde::Serialize;

use self::optimizer::Optimizer;
use self::selection::Selection;

///
/// The `solc --standard-json` input settings representation.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The optimizer settings.
    pub optimizer: Optimizer,
    /// The output selection filters.
    pub output_selection: serde_json::Value,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(optimize: bool, runs: usize) -> Self {
        Self {
            optimizer: Optimizer::new(optimize, runs),
            output_selection: Self::get_output_selection(),
        }
    }

    ///
    /// Generates the output selection pattern.
    ///
    /// The ABI and bytecode are requested for every contract of every file.
    ///
    pub fn get_output_selection() -> serde_json::Value {
        let per_contract_selections = vec![Selection::ABI, Selection::Bytecode];

        serde_json::json!({
            "*": {
                "*": per_contract_selections,
            }
        })
    }
}
