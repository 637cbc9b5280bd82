//!
//! The import callback result.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The import callback result.
///
/// Serialized either as `{"contents": "..."}` or as `{"error": "..."}`.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportResult {
    /// The file has been found and read.
    Contents(String),
    /// The file has not been found or could not be read.
    Error(String),
}

impl ImportResult {
    ///
    /// Converts the result into the standard one.
    ///
    pub fn into_result(self) -> Result<String, String> {
        match self {
            Self::Contents(contents) => Ok(contents),
            Self::Error(error) => Err(error),
        }
    }
}
