// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset resolver backed by a directory of preset files.
//!
//! A preset named `brand` is read from `<root>/brand.yaml` (or `.yml`, `.json`);
//! scoped names such as `@acme/brand` map to `<root>/@acme/brand.yaml`.

use crate::adapters::site_file::read_config_file;
use crate::adapters::supported_extensions;
use crate::domain::document::PresetDocument;
use crate::domain::{ConfigError, ContentGlob, Preset, PresetRef, Result};
use crate::ports::PresetResolver;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Resolves presets from files under a root directory.
///
/// # Priority
///
/// Preset directories have a priority of 2: they shadow the built-in catalog but
/// are shadowed by in-memory presets.
///
/// # Examples
///
/// ```rust,no_run
/// use sitecfg::adapters::PresetDirectory;
/// use sitecfg::domain::PresetRef;
/// use sitecfg::ports::PresetResolver;
///
/// let presets = PresetDirectory::new("reports/presets").unwrap();
/// let brand = presets.resolve(&PresetRef::from("@acme/brand")).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct PresetDirectory {
    root: PathBuf,
}

impl PresetDirectory {
    /// Creates a resolver rooted at `root`.
    ///
    /// Fails with `SourceError` if `root` is not a directory.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref().to_path_buf();
        if !root.is_dir() {
            return Err(ConfigError::SourceError {
                source_name: "preset-dir".to_string(),
                message: format!("Preset directory does not exist: {}", root.display()),
                source: None,
            });
        }
        Ok(Self { root })
    }

    /// Returns the root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Maps a preset name to a path below the root, without extension.
    fn relative_path(preset: &PresetRef) -> Result<PathBuf> {
        let path = Path::new(preset.as_str());
        let is_plain = !preset.is_empty()
            && path
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !is_plain {
            return Err(ConfigError::SourceError {
                source_name: "preset-dir".to_string(),
                message: format!("Preset name '{}' is not a plain relative name", preset),
                source: None,
            });
        }
        Ok(path.to_path_buf())
    }

    fn load(&self, preset: &PresetRef, path: &Path) -> Result<Preset> {
        let (_, value) = read_config_file(path, "preset-dir")?;
        let document = PresetDocument::from_value(value)?;
        let content = document
            .content
            .iter()
            .map(ContentGlob::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Preset::new(preset.clone())
            .with_content(content)
            .with_theme(document.theme.extend))
    }

    fn push_presets(dir: &Path, scope: Option<&str>, out: &mut Vec<PresetRef>) -> Result<()> {
        let extensions = supported_extensions();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if path.is_dir() {
                if scope.is_none() && file_name.starts_with('@') {
                    Self::push_presets(&path, Some(file_name), out)?;
                }
                continue;
            }

            let known = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| extensions.iter().any(|x| x.eq_ignore_ascii_case(e)));
            if !known {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                let name = match scope {
                    Some(scope) => format!("{}/{}", scope, stem),
                    None => stem.to_string(),
                };
                out.push(PresetRef::from(name));
            }
        }
        Ok(())
    }
}

impl PresetResolver for PresetDirectory {
    fn name(&self) -> &str {
        "preset-dir"
    }

    fn priority(&self) -> u8 {
        2
    }

    fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
        let relative = Self::relative_path(preset)?;
        for extension in supported_extensions() {
            let mut candidate = self.root.join(&relative).into_os_string();
            candidate.push(".");
            candidate.push(&extension);
            let candidate = PathBuf::from(candidate);
            if candidate.is_file() {
                tracing::debug!(
                    "Resolved preset '{}' from '{}'",
                    preset,
                    candidate.display()
                );
                return self.load(preset, &candidate).map(Some);
            }
        }
        Ok(None)
    }

    fn available(&self) -> Result<Vec<PresetRef>> {
        let mut presets = Vec::new();
        Self::push_presets(&self.root, None, &mut presets)?;
        presets.sort();
        presets.dedup();
        Ok(presets)
    }
}
