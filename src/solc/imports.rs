//!
//! The import callback emulation for compilers running in a separate process.
//!
//! A native compiler cannot call back into this process, so the import directives
//! are discovered in advance and the missing sources are added to the input.
//!

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use crate::import::ImportCallback;
use crate::solc::standard_json::output::error::Error as SolidityError;

///
/// Returns the paths of the import directives found in the source code.
///
/// String literals and comments are consumed by the same pass as the directives, so
/// an `import` inside them is never matched and `//` inside an import path does not
/// start a comment.
///
pub fn scan(source: &str) -> Vec<String> {
    let tokens = regex::Regex::new(concat!(
        r#""(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'"#,
        r#"|//[^\n]*|/\*(?s:.*?)\*/"#,
        r#"|\bimport\s+(?:[^;"']*?\bfrom\s+)?(?:"([^"]*)"|'([^']*)')"#,
    ))
    .expect("Regexp is valid");
    tokens
        .captures_iter(source)
        .filter_map(|captures| captures.get(1).or_else(|| captures.get(2)))
        .map(|path| path.as_str().to_owned())
        .collect()
}

///
/// Resolves the import path to the source unit name the compiler is going to request.
///
/// The paths starting with `./` or `../` are relative to the directory of the
/// importing unit. The rest are used verbatim.
///
pub fn unit_name(importer: &str, path: &str) -> String {
    if !path.starts_with("./") && !path.starts_with("../") {
        return path.to_owned();
    }

    let mut segments: Vec<&str> = importer.split('/').collect();
    segments.pop();
    for segment in path.split('/') {
        match segment {
            "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }
    segments.join("/")
}

///
/// Adds the sources reachable through the import directives to the `--standard-json` input.
///
/// The sources declaring `urls` instead of `content` are fetched first. Returns the
/// source unit names the callback failed to provide, with the failure reasons.
///
pub fn fetch(
    input: &mut serde_json::Value,
    import_callback: &dyn ImportCallback,
) -> BTreeMap<String, String> {
    let mut missing = BTreeMap::new();
    let sources = match input
        .get_mut("sources")
        .and_then(serde_json::Value::as_object_mut)
    {
        Some(sources) => sources,
        None => return missing,
    };

    for (name, source) in sources.iter_mut() {
        let source = match source.as_object_mut() {
            Some(source) if !source.contains_key("content") => source,
            _ => continue,
        };
        let urls: Vec<String> = source
            .get("urls")
            .and_then(serde_json::Value::as_array)
            .map(|urls| {
                urls.iter()
                    .filter_map(serde_json::Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default();

        let mut reasons = Vec::with_capacity(urls.len());
        for url in urls.iter() {
            match import_callback.import(url.as_str()).into_result() {
                Ok(content) => {
                    source.insert("content".to_owned(), serde_json::Value::String(content));
                    break;
                }
                Err(reason) => reasons.push(reason),
            }
        }
        if !source.contains_key("content") && !reasons.is_empty() {
            missing.insert(name.to_owned(), reasons.join("\n"));
        }
    }

    let mut visited = BTreeSet::new();
    let mut queue: Vec<String> = sources.keys().cloned().collect();
    while let Some(name) = queue.pop() {
        if !visited.insert(name.clone()) {
            continue;
        }
        let content = match sources
            .get(name.as_str())
            .and_then(|source| source.get("content"))
            .and_then(serde_json::Value::as_str)
        {
            Some(content) => content.to_owned(),
            None => continue,
        };

        for path in scan(content.as_str()) {
            let unit = unit_name(name.as_str(), path.as_str());
            if sources.contains_key(unit.as_str()) || missing.contains_key(unit.as_str()) {
                continue;
            }
            match import_callback.import(unit.as_str()).into_result() {
                Ok(content) => {
                    sources.insert(unit.clone(), serde_json::json!({ "content": content }));
                    queue.push(unit);
                }
                Err(reason) => {
                    missing.insert(unit, reason);
                }
            }
        }
    }

    missing
}

///
/// Reports the import callback failures in the `--standard-json` output.
///
/// The compiler's own not-found diagnostics keep their locations and get the callback
/// failure reason. The failures the compiler has not mentioned are appended as errors.
///
pub fn report(output: &mut serde_json::Value, missing: &BTreeMap<String, String>) {
    let output = match output.as_object_mut() {
        Some(output) => output,
        None => return,
    };
    let errors = output
        .entry("errors")
        .or_insert_with(|| serde_json::Value::Array(Vec::new()));
    let errors = match errors.as_array_mut() {
        Some(errors) => errors,
        None => return,
    };

    let mut reported = BTreeSet::new();
    for error in errors.iter_mut() {
        let message = match error.get("message").and_then(serde_json::Value::as_str) {
            Some(message) => message.to_owned(),
            None => continue,
        };
        for (path, reason) in missing.iter() {
            let prefix = format!("Source \"{}\" not found: ", path);
            if !message.starts_with(prefix.as_str()) {
                continue;
            }

            let replacement = format!("{}{}", prefix, reason);
            if let Some(formatted_message) = error
                .get("formattedMessage")
                .and_then(serde_json::Value::as_str)
            {
                let formatted_message =
                    formatted_message.replacen(message.as_str(), replacement.as_str(), 1);
                error["formattedMessage"] = serde_json::Value::String(formatted_message);
            }
            error["message"] = serde_json::Value::String(replacement);
            reported.insert(path.to_owned());
            break;
        }
    }

    for (path, reason) in missing.iter() {
        if reported.contains(path) {
            continue;
        }
        if let Ok(error) = serde_json::to_value(SolidityError::source_not_found(path, reason)) {
            errors.push(error);
        }
    }
}
