// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset references and resolved presets.
//!
//! A preset is a named, reusable bundle of style rules. Configurations refer to
//! presets by name through `PresetRef`; a `PresetResolver` turns the reference into
//! a `Preset` carrying the preset's theme values.

use crate::domain::content::ContentGlob;
use crate::domain::theme::ThemeExtensions;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A type-safe reference to a named preset.
///
/// `PresetRef` wraps the name used to look up a preset, such as `"evidence"` or
/// `"@acme/brand"`. Leading and trailing whitespace is trimmed on construction.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::preset::PresetRef;
///
/// let preset = PresetRef::from(" evidence ");
/// assert_eq!(preset.as_str(), "evidence");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PresetRef(String);

impl PresetRef {
    /// Creates a new `PresetRef` from a `String`.
    pub fn new(name: String) -> Self {
        PresetRef(name.trim().to_string())
    }

    /// Returns the reference as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the reference names nothing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the `PresetRef` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for PresetRef {
    fn from(s: String) -> Self {
        PresetRef::new(s)
    }
}

impl From<&str> for PresetRef {
    fn from(s: &str) -> Self {
        PresetRef::new(s.to_string())
    }
}

impl AsRef<str> for PresetRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PresetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A resolved preset.
///
/// Only the theme of a preset composes into a consuming configuration. A preset's
/// own content globs describe the files the preset author scanned and are kept for
/// inspection, but they never widen the consumer's scan scope.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::preset::Preset;
/// use sitecfg::domain::theme::ThemeExtensions;
///
/// let theme = ThemeExtensions::new().with("fontFamily", serde_json::json!({"sans": ["Inter"]}));
/// let preset = Preset::new("brand").with_theme(theme);
///
/// assert_eq!(preset.name().as_str(), "brand");
/// assert!(preset.theme().contains_key("fontFamily"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    name: PresetRef,
    content: Vec<ContentGlob>,
    theme: ThemeExtensions,
}

impl Preset {
    /// Creates an empty preset with the given name.
    pub fn new(name: impl Into<PresetRef>) -> Self {
        Self {
            name: name.into(),
            content: Vec::new(),
            theme: ThemeExtensions::new(),
        }
    }

    /// Sets the preset theme.
    pub fn with_theme(mut self, theme: ThemeExtensions) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the globs the preset itself declares.
    pub fn with_content(mut self, content: Vec<ContentGlob>) -> Self {
        self.content = content;
        self
    }

    /// Returns the reference this preset was resolved from.
    pub fn name(&self) -> &PresetRef {
        &self.name
    }

    /// Returns the globs declared by the preset itself.
    pub fn content(&self) -> &[ContentGlob] {
        &self.content
    }

    /// Returns the preset theme.
    pub fn theme(&self) -> &ThemeExtensions {
        &self.theme
    }
}
