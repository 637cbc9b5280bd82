//!
//! The `solc --standard-json` input representation.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::import::SearchPath;

use self::language::Language;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input representation.
///
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The compiler settings.
    pub settings: Settings,
    /// The input source code files hashmap.
    pub sources: BTreeMap<String, Source>,
}

impl Input {
    ///
    /// A shortcut constructor.
    ///
    /// The sources are keyed by their canonical source unit names.
    ///
    pub fn try_from_paths(
        paths: &[PathBuf],
        search_path: &SearchPath,
        optimize: bool,
        optimize_runs: usize,
    ) -> anyhow::Result<Self> {
        let mut sources = BTreeMap::new();
        for path in paths.iter() {
            let source = Source::try_from(path.as_path())?;
            sources.insert(search_path.canonicalize(path), source);
        }

        Ok(Self {
            language: Language::Solidity,
            settings: Settings::new(optimize, optimize_runs),
            sources,
        })
    }
}
