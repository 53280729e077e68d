// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory preset table.

use crate::domain::{Preset, PresetRef, Result};
use crate::ports::PresetResolver;
use std::collections::BTreeMap;

/// Preset resolver backed by an explicit table.
///
/// Useful for presets assembled in code and for tests that need several
/// configurations side by side.
///
/// # Priority
///
/// In-memory presets have the highest priority (3) by default.
///
/// # Examples
///
/// ```rust
/// use sitecfg::adapters::InMemoryPresets;
/// use sitecfg::domain::{Preset, PresetRef};
/// use sitecfg::ports::PresetResolver;
///
/// let presets = InMemoryPresets::new().with_preset(Preset::new("basePreset"));
/// assert!(presets.resolve(&PresetRef::from("basePreset")).unwrap().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct InMemoryPresets {
    name: String,
    priority: u8,
    presets: BTreeMap<PresetRef, Preset>,
}

impl InMemoryPresets {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            name: "memory".to_string(),
            priority: 3,
            presets: BTreeMap::new(),
        }
    }

    /// Adds a preset, replacing any preset with the same name.
    pub fn with_preset(mut self, preset: Preset) -> Self {
        self.presets.insert(preset.name().clone(), preset);
        self
    }

    /// Overrides the resolver name used in log output.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the resolver priority.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }
}

impl Default for InMemoryPresets {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetResolver for InMemoryPresets {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }

    fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
        Ok(self.presets.get(preset).cloned())
    }

    fn available(&self) -> Result<Vec<PresetRef>> {
        Ok(self.presets.keys().cloned().collect())
    }
}
