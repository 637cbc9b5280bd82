//!
//! The `solc --standard-json` input settings optimizer representation.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` input settings optimizer representation.
///
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Optimizer {
    /// Whether the optimizer is enabled.
    pub enabled: bool,
    /// The number of contract runs the optimizer tunes for.
    pub runs: usize,
}

impl Optimizer {
    /// The default number of runs.
    pub const DEFAULT_RUNS: usize = 200;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(enabled: bool, runs: usize) -> Self {
        Self { enabled, runs }
    }
}
