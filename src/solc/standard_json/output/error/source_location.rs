//!
//! The `solc --standard-json` output error source location.
//!

use serde::Deserialize;
use serde::Serialize;

///
/// The `solc --standard-json` output error source location.
///
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SourceLocation {
    /// The source file path.
    pub file: String,
    /// The start location.
    pub start: isize,
    /// The end location.
    pub end: isize,
}
