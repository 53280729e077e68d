// SPDX-License-Identifier: MIT OR Apache-2.0

//! The style-scan configuration record.

use crate::domain::content::{ContentMatcher, ContentScope};
use crate::domain::errors::Result;
use crate::domain::preset::{Preset, PresetRef};
use crate::domain::theme::ThemeExtensions;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Configuration for a utility-class styling framework.
///
/// Holds the resolved presets in declaration order, the content scan scope, and
/// the locally declared theme extensions. The record is immutable once a loader
/// returns it.
///
/// # Examples
///
/// ```
/// use sitecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = StyleScanLoader::builder()
///     .with_resolver(Box::new(InMemoryPresets::new().with_preset(Preset::new("basePreset"))))
///     .preset("basePreset")
///     .content("./pages/**/*.md")
///     .build()
///     .load()?;
///
/// assert_eq!(config.preset_refs(), vec![&PresetRef::from("basePreset")]);
/// assert!(config.content().contains("./pages/**/*.md"));
/// assert!(config.theme_extensions().is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct StyleScanConfig {
    presets: Vec<Preset>,
    content: ContentScope,
    theme_extensions: ThemeExtensions,
    config_dir: PathBuf,
}

impl StyleScanConfig {
    pub(crate) fn new(
        presets: Vec<Preset>,
        content: ContentScope,
        theme_extensions: ThemeExtensions,
        config_dir: PathBuf,
    ) -> Self {
        Self {
            presets,
            content,
            theme_extensions,
            config_dir,
        }
    }

    /// Returns the resolved presets in the order they apply.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Returns the preset references in the order they apply.
    pub fn preset_refs(&self) -> Vec<&PresetRef> {
        self.presets.iter().map(Preset::name).collect()
    }

    /// Returns the content scan scope.
    pub fn content(&self) -> &ContentScope {
        &self.content
    }

    /// Returns the directory relative content globs are anchored at.
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the content globs as the styling tool should resolve them.
    pub fn resolved_content(&self) -> Vec<String> {
        self.content.resolve(&self.config_dir)
    }

    /// Compiles the content scope for matching candidate files.
    pub fn content_matcher(&self) -> Result<ContentMatcher> {
        self.content.matcher(&self.config_dir)
    }

    /// Returns the theme extensions declared by this configuration alone.
    pub fn theme_extensions(&self) -> &ThemeExtensions {
        &self.theme_extensions
    }

    /// Returns the effective theme.
    ///
    /// Preset themes are merged in declaration order, then this configuration's
    /// extensions are merged on top. Every merge is shallow and last-write-wins
    /// per top-level key.
    pub fn merged_theme(&self) -> ThemeExtensions {
        ThemeExtensions::merge_all(
            self.presets
                .iter()
                .map(Preset::theme)
                .chain(std::iter::once(&self.theme_extensions)),
        )
    }

    /// Renders the shape expected by the styling framework.
    ///
    /// Presets are emitted by name; the framework resolves them itself and
    /// layers `theme.extend` on top.
    pub fn to_consumer_json(&self) -> Value {
        let files: Vec<&str> = self.content.files().iter().map(|g| g.as_str()).collect();
        json!({
            "presets": self.preset_refs(),
            "content": {
                "relative": self.content.is_relative(),
                "files": files,
            },
            "theme": {
                "extend": self.theme_extensions.to_json(),
            },
        })
    }
}
