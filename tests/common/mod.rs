// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use sitecfg::domain::{ConfigError, Preset, PresetRef, Result, ThemeExtensions};
use sitecfg::ports::PresetResolver;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A preset resolver with predefined presets and a configurable failure mode.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockPresetResolver {
    name: String,
    priority: u8,
    presets: HashMap<String, ThemeExtensions>,
    failing: bool,
}

#[allow(dead_code)]
impl MockPresetResolver {
    /// Creates a new mock resolver with the given name and priority.
    pub fn new(name: impl Into<String>, priority: u8) -> Self {
        Self {
            name: name.into(),
            priority,
            presets: HashMap::new(),
            failing: false,
        }
    }

    /// Adds a preset with the given theme.
    pub fn with_preset(mut self, name: impl Into<String>, theme: ThemeExtensions) -> Self {
        self.presets.insert(name.into(), theme);
        self
    }

    /// Makes every lookup fail with a source error.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }
}

impl PresetResolver for MockPresetResolver {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
        if self.failing {
            return Err(ConfigError::SourceError {
                source_name: self.name.clone(),
                message: "Mock resolve failure".to_string(),
                source: None,
            });
        }
        Ok(self
            .presets
            .get(preset.as_str())
            .map(|theme| Preset::new(preset.clone()).with_theme(theme.clone())))
    }

    fn available(&self) -> Result<Vec<PresetRef>> {
        Ok(self.presets.keys().map(|k| PresetRef::from(k.as_str())).collect())
    }
}

/// Writes `content` to `dir/name`, creating parent directories.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}

/// The site document shipped with the report site.
#[allow(dead_code)]
pub const REPORT_SITE_YAML: &str = r#"
style:
  presets: [base]
  content:
    relative: true
    files:
      - './pages/**/*.{html,js,svelte,ts,md}'
      - './components/**/*.{html,js,svelte,ts,md}'
      - './node_modules/@evidence-dev/core-components/dist/**/*.{html,js,svelte,ts,md}'
  theme:
    extend: {}
server:
  host: "0.0.0.0"
  allowedHosts:
    - framearch-juan.bonobo-fort.ts.net
"#;
