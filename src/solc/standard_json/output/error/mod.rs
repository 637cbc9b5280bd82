//!
//! The `solc --standard-json` output error.
//!

pub mod source_location;

use serde::Deserialize;
use serde::Serialize;

use self::source_location::SourceLocation;

///
/// The `solc --standard-json` output error.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The component type.
    #[serde(default)]
    pub component: String,
    /// The error code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// The formatted error message.
    pub formatted_message: String,
    /// The non-formatted error message.
    #[serde(default)]
    pub message: String,
    /// The error severity.
    pub severity: String,
    /// The error location data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<SourceLocation>,
    /// The error type.
    #[serde(default)]
    pub r#type: String,
}

impl Error {
    /// The warning severity. Every other severity fails the compilation.
    pub const SEVERITY_WARNING: &'static str = "warning";

    ///
    /// A shortcut constructor for a general warning.
    ///
    pub fn warning(message: String) -> Self {
        Self {
            component: "general".to_owned(),
            error_code: None,
            formatted_message: message.clone(),
            message,
            severity: Self::SEVERITY_WARNING.to_owned(),
            source_location: None,
            r#type: "Warning".to_owned(),
        }
    }

    ///
    /// A shortcut constructor for an unresolved import.
    ///
    pub fn source_not_found(path: &str, reason: &str) -> Self {
        let message = format!("Source \"{}\" not found: {}", path, reason);

        Self {
            component: "general".to_owned(),
            error_code: None,
            formatted_message: format!("ParserError: {}\n", message),
            message,
            severity: "error".to_owned(),
            source_location: None,
            r#type: "ParserError".to_owned(),
        }
    }

    ///
    /// Whether the diagnostic is a warning.
    ///
    pub fn is_warning(&self) -> bool {
        self.severity == Self::SEVERITY_WARNING
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formatted_message)
    }
}
