// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in preset catalog.

use crate::domain::{Preset, PresetRef, Result, ThemeExtensions};
use crate::ports::PresetResolver;
use once_cell::sync::Lazy;
use serde_json::json;
use std::collections::BTreeMap;

/// The catalog is built on first use and never changes afterwards.
static CATALOG: Lazy<BTreeMap<PresetRef, Preset>> = Lazy::new(|| {
    let base = Preset::new("base").with_theme(
        ThemeExtensions::new()
            .with(
                "fontFamily",
                json!({
                    "sans": ["Inter", "ui-sans-serif", "system-ui", "sans-serif"],
                    "mono": ["ui-monospace", "SFMono-Regular", "Menlo", "monospace"],
                }),
            )
            .with(
                "screens",
                json!({"sm": "640px", "md": "768px", "lg": "1024px", "xl": "1280px"}),
            ),
    );

    let reports = Preset::new("reports").with_theme(
        ThemeExtensions::new()
            .with(
                "colors",
                json!({
                    "positive": "#2e7d32",
                    "negative": "#c62828",
                    "neutral": "#546e7a",
                }),
            )
            .with("maxWidth", json!({"report": "72rem"})),
    );

    [base, reports]
        .into_iter()
        .map(|p| (p.name().clone(), p))
        .collect()
});

/// Preset resolver for the presets shipped with this crate.
///
/// - `base`: font stacks and responsive breakpoints
/// - `reports`: semantic colors for data reports
///
/// # Priority
///
/// Built-in presets have the lowest priority (1), so a preset directory or an
/// in-memory table can shadow them.
///
/// # Examples
///
/// ```rust
/// use sitecfg::adapters::BuiltinPresets;
/// use sitecfg::domain::PresetRef;
/// use sitecfg::ports::PresetResolver;
///
/// let presets = BuiltinPresets::new();
/// let base = presets.resolve(&PresetRef::from("base")).unwrap().unwrap();
/// assert!(base.theme().contains_key("fontFamily"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuiltinPresets;

impl BuiltinPresets {
    /// Creates the built-in resolver.
    pub fn new() -> Self {
        BuiltinPresets
    }
}

impl PresetResolver for BuiltinPresets {
    fn name(&self) -> &str {
        "builtin"
    }

    fn priority(&self) -> u8 {
        1
    }

    fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
        Ok(CATALOG.get(preset).cloned())
    }

    fn available(&self) -> Result<Vec<PresetRef>> {
        Ok(CATALOG.keys().cloned().collect())
    }
}
