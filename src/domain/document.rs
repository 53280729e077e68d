// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw document shapes for site and preset files.
//!
//! Parsers turn file content into a `serde_json::Value`; the types here give that
//! value its structure. They hold unvalidated strings: validation happens when a
//! loader turns them into domain records.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::theme::ThemeExtensions;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decodes a parsed value into one of the document types.
pub(crate) fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T> {
    serde_json::from_value(value).map_err(|e| ConfigError::ParseError {
        message: format!("Invalid {} document: {}", what, e),
        source: Some(Box::new(e)),
    })
}

/// Reads an explicit null (an empty YAML key) as the default value.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A site configuration document.
///
/// ```yaml
/// style:
///   presets: [base]
///   content:
///     relative: true
///     files: ["./pages/**/*.md"]
///   theme:
///     extend: {}
/// server:
///   host: 0.0.0.0
///   allowedHosts: [example.ts.net]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteDocument {
    /// The style-scan section.
    #[serde(default)]
    pub style: Option<StyleSection>,
    /// The dev-server section.
    #[serde(default)]
    pub server: Option<ServerSection>,
}

impl SiteDocument {
    /// Decodes a parsed value.
    pub fn from_value(value: Value) -> Result<Self> {
        // An empty file parses as null.
        if value.is_null() {
            return Ok(SiteDocument::default());
        }
        decode(value, "site")
    }
}

/// The `style` section of a site document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSection {
    /// Preset names in application order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub presets: Vec<String>,
    /// Content globs.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: ContentSection,
    /// Theme customizations.
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: ThemeSection,
}

/// Content globs, either as a bare list or with an explicit `relative` flag.
///
/// A bare list is resolved relative to the declaring file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ContentSection {
    /// `content: [...]`
    Files(Vec<String>),
    /// `content: { relative: bool, files: [...] }`
    Scoped {
        /// Whether globs resolve against the declaring file's directory.
        #[serde(default = "default_relative")]
        relative: bool,
        /// The glob patterns.
        #[serde(default)]
        files: Vec<String>,
    },
}

fn default_relative() -> bool {
    true
}

impl Default for ContentSection {
    fn default() -> Self {
        ContentSection::Files(Vec::new())
    }
}

impl ContentSection {
    /// Returns the relative flag.
    pub fn relative(&self) -> bool {
        match self {
            ContentSection::Files(_) => default_relative(),
            ContentSection::Scoped { relative, .. } => *relative,
        }
    }

    /// Returns the glob patterns.
    pub fn files(&self) -> &[String] {
        match self {
            ContentSection::Files(files) | ContentSection::Scoped { files, .. } => files,
        }
    }
}

/// The `theme` section. Only additive extensions are supported.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeSection {
    /// Extensions merged over inherited presets.
    #[serde(default, deserialize_with = "null_as_default")]
    pub extend: ThemeExtensions,
}

/// The `server` section of a site document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    /// Bind address; `true` means every interface, `false` means loopback.
    #[serde(default)]
    pub host: Option<HostSetting>,
    /// Listening port.
    #[serde(default)]
    pub port: Option<u16>,
    /// Trusted Host header values.
    #[serde(default, rename = "allowedHosts", alias = "allowed_hosts")]
    pub allowed_hosts: Option<AllowedHostsSetting>,
}

/// A `host` value as written in a document.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum HostSetting {
    /// `host: true` or `host: false`.
    Flag(bool),
    /// `host: "0.0.0.0"`.
    Address(String),
}

/// An `allowedHosts` value as written in a document.
///
/// The boolean form exists only so that `allowedHosts: true` can be rejected with
/// a clear error instead of a type mismatch.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AllowedHostsSetting {
    /// `allowedHosts: true`
    Flag(bool),
    /// `allowedHosts: [...]`
    List(Vec<String>),
}

/// A preset file.
///
/// ```yaml
/// content: ["./src/**/*.svelte"]
/// theme:
///   extend:
///     colors: { primary: "#236aa4" }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PresetDocument {
    /// Globs the preset author scanned.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: Vec<String>,
    /// The preset theme.
    #[serde(default, deserialize_with = "null_as_default")]
    pub theme: ThemeSection,
}

impl PresetDocument {
    /// Decodes a parsed value.
    pub fn from_value(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(PresetDocument::default());
        }
        decode(value, "preset")
    }
}
