// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing preset sources, parsers and file readers.
//!
//! This module contains concrete implementations of the traits defined in the
//! ports layer: preset resolvers implementing `PresetResolver` and document
//! parsers implementing `ConfigParser`.

pub mod builtin;
#[cfg(feature = "json")]
pub mod json;
pub mod memory;
pub mod preset_dir;
pub mod site_file;
#[cfg(feature = "yaml")]
pub mod yaml;

pub use builtin::BuiltinPresets;
#[cfg(feature = "json")]
pub use json::JsonParser;
pub use memory::InMemoryPresets;
pub use preset_dir::PresetDirectory;
pub use site_file::SiteFileAdapter;
#[cfg(feature = "yaml")]
pub use yaml::YamlParser;

use crate::domain::{ConfigError, Result};
use crate::ports::ConfigParser;
use std::path::Path;

/// Returns every parser enabled by the crate features.
pub fn available_parsers() -> Vec<Box<dyn ConfigParser>> {
    #[allow(unused_mut)]
    let mut parsers: Vec<Box<dyn ConfigParser>> = Vec::new();
    #[cfg(feature = "yaml")]
    parsers.push(Box::new(YamlParser::new()));
    #[cfg(feature = "json")]
    parsers.push(Box::new(JsonParser::new()));
    parsers
}

/// Returns every file extension some enabled parser understands.
pub fn supported_extensions() -> Vec<String> {
    available_parsers()
        .iter()
        .flat_map(|p| p.supported_extensions().iter().map(|e| e.to_string()))
        .collect()
}

/// Picks the parser for a file based on its extension.
///
/// # Examples
///
/// ```rust
/// use sitecfg::adapters::parser_for_path;
///
/// let parser = parser_for_path("site.yaml").unwrap();
/// assert!(parser.supports("yml"));
///
/// assert!(parser_for_path("site.toml").is_err());
/// ```
pub fn parser_for_path(path: impl AsRef<Path>) -> Result<Box<dyn ConfigParser>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    available_parsers()
        .into_iter()
        .find(|p| p.supports(extension))
        .ok_or_else(|| ConfigError::SourceError {
            source_name: "parser".to_string(),
            message: format!(
                "Unsupported configuration format '{}' (supported: {})",
                extension,
                supported_extensions().join(", ")
            ),
            source: None,
        })
}
