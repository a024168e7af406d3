//! File kind classification.
//!
//! The kind decides which canonicalizer branch a file goes through.
//! Detection only looks at the extension, never at the content.

use crate::utils::config::{JSON_EXTENSIONS, YAML_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Declared or detected type of a configuration file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Yaml,
    Json,
    Text,
}

impl FileKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FileKind::Yaml => "yaml",
            FileKind::Json => "json",
            FileKind::Text => "text",
        }
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the file kind from the path's extension (case-insensitive)
///
/// `.yaml`/`.yml` map to YAML, `.json` to JSON, anything else
/// (including no extension) to plain text.
pub fn detect_type(path: impl AsRef<Path>) -> FileKind {
    let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
        return FileKind::Text;
    };
    let ext = ext.to_ascii_lowercase();

    if YAML_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Yaml
    } else if JSON_EXTENSIONS.contains(&ext.as_str()) {
        FileKind::Json
    } else {
        FileKind::Text
    }
}
