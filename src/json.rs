//!
//! The JSON formatting utilities.
//!

use serde::Serialize;

/// The indentation used by the pretty-printed JSON.
pub const PRETTY_INDENT: &[u8] = b"    ";

///
/// Serializes the value either compactly or with the four-space indentation.
///
pub fn to_string<T>(value: &T, pretty: bool) -> anyhow::Result<String>
where
    T: Serialize + ?Sized,
{
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buffer = Vec::with_capacity(1024);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(PRETTY_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buffer)?)
}

///
/// Pretty-prints the JSON text if requested.
///
/// The text is returned as is if pretty-printing is not requested or the text is not
/// valid JSON.
///
pub fn reformat(input: &str, pretty: bool) -> String {
    if !pretty {
        return input.to_owned();
    }

    serde_json::from_str::<serde_json::Value>(input)
        .ok()
        .and_then(|value| to_string(&value, true).ok())
        .unwrap_or_else(|| input.to_owned())
}
