// SPDX-License-Identifier: MIT OR Apache-2.0

//! Style-scan configuration loader.
//!
//! This module provides the loader that resolves presets, validates content globs
//! and assembles a `StyleScanConfig`.

use crate::domain::{
    ConfigError, ConfigLoader, ContentScope, Preset, PresetRef, Result, StyleScanConfig,
    ThemeExtensions,
};
use crate::ports::PresetResolver;
use crate::service::ValidationPolicy;
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Loader for `StyleScanConfig`.
///
/// Presets are looked up through the registered resolvers, highest priority
/// first; the first resolver that knows a preset wins. A preset no resolver knows
/// fails the load with `UnresolvablePreset`.
///
/// # Examples
///
/// ```rust
/// use sitecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let loader = StyleScanLoader::builder()
///     .with_builtin_presets()
///     .preset("base")
///     .content("./pages/**/*.{html,js,svelte,ts,md}")
///     .content("./components/**/*.{html,js,svelte,ts,md}")
///     .config_dir("/srv/reports")
///     .build();
///
/// let config = loader.load()?;
/// assert_eq!(config.content().len(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct StyleScanLoader {
    /// Preset resolvers, maintained in priority order (highest first)
    resolvers: Vec<Arc<dyn PresetResolver>>,
    presets: Vec<PresetRef>,
    relative: bool,
    content: Vec<String>,
    theme_extensions: ThemeExtensions,
    config_dir: PathBuf,
    scope_policy: ValidationPolicy,
}

impl StyleScanLoader {
    /// Creates a new loader builder.
    pub fn builder() -> StyleScanLoaderBuilder {
        StyleScanLoaderBuilder::new()
    }

    /// Returns the names of the registered resolvers in query order.
    pub fn resolver_names(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.name()).collect()
    }

    /// Asks each resolver in priority order for the preset.
    ///
    /// A resolver error aborts the lookup instead of falling through to a
    /// lower-priority resolver.
    fn resolve_preset(&self, preset: &PresetRef) -> Result<Preset> {
        if !preset.is_empty() {
            for resolver in &self.resolvers {
                match resolver.resolve(preset) {
                    Ok(Some(found)) => {
                        tracing::debug!(
                            "Preset '{}' resolved by '{}'",
                            preset,
                            resolver.name()
                        );
                        return Ok(found);
                    }
                    Ok(None) => continue,
                    Err(e) => {
                        tracing::debug!(
                            "Error resolving preset '{}' with '{}': {}",
                            preset,
                            resolver.name(),
                            e
                        );
                        return Err(e);
                    }
                }
            }
        }
        Err(ConfigError::UnresolvablePreset {
            preset: preset.as_str().to_string(),
        })
    }
}

impl ConfigLoader for StyleScanLoader {
    type Output = StyleScanConfig;

    fn name(&self) -> &str {
        "style-scan"
    }

    fn load(&self) -> Result<StyleScanConfig> {
        let presets = self
            .presets
            .iter()
            .map(|p| self.resolve_preset(p))
            .collect::<Result<Vec<_>>>()?;

        let content = ContentScope::parse(self.relative, &self.content)?;
        if content.is_empty() {
            if self.scope_policy.is_fatal() {
                return Err(ConfigError::EmptyContentScope);
            }
            tracing::warn!("No content globs declared; the generated style sheet will be empty");
        }

        tracing::debug!(
            "Loaded style-scan configuration: {} preset(s), {} content glob(s), {} theme key(s)",
            presets.len(),
            content.len(),
            self.theme_extensions.len()
        );

        Ok(StyleScanConfig::new(
            presets,
            content,
            self.theme_extensions.clone(),
            self.config_dir.clone(),
        ))
    }
}

/// Builder for constructing a `StyleScanLoader`.
///
/// Inputs are stored as given; all validation happens in `load`.
pub struct StyleScanLoaderBuilder {
    resolvers: Vec<Arc<dyn PresetResolver>>,
    presets: Vec<PresetRef>,
    relative: bool,
    content: Vec<String>,
    theme_extensions: ThemeExtensions,
    config_dir: PathBuf,
    scope_policy: ValidationPolicy,
}

impl StyleScanLoaderBuilder {
    /// Creates a new builder.
    ///
    /// Content globs default to relative, anchored at the current directory
    /// until `config_dir` is set.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
            presets: Vec::new(),
            relative: true,
            content: Vec::new(),
            theme_extensions: ThemeExtensions::new(),
            config_dir: PathBuf::from("."),
            scope_policy: ValidationPolicy::default(),
        }
    }

    /// Adds a preset resolver.
    pub fn with_resolver(self, resolver: Box<dyn PresetResolver>) -> Self {
        self.with_shared_resolver(Arc::from(resolver))
    }

    /// Adds a preset resolver shared with other loaders.
    pub fn with_shared_resolver(mut self, resolver: Arc<dyn PresetResolver>) -> Self {
        self.resolvers.push(resolver);
        self
    }

    /// Adds the built-in preset catalog.
    pub fn with_builtin_presets(self) -> Self {
        use crate::adapters::BuiltinPresets;
        self.with_resolver(Box::new(BuiltinPresets::new()))
    }

    /// Adds a directory of preset files.
    pub fn with_preset_dir(self, root: impl AsRef<std::path::Path>) -> Result<Self> {
        use crate::adapters::PresetDirectory;
        let resolver = PresetDirectory::new(root)?;
        Ok(self.with_resolver(Box::new(resolver)))
    }

    /// Appends a preset; presets apply in the order they are added.
    pub fn preset(mut self, preset: impl Into<PresetRef>) -> Self {
        self.presets.push(preset.into());
        self
    }

    /// Appends several presets.
    pub fn presets<I, P>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PresetRef>,
    {
        self.presets.extend(presets.into_iter().map(Into::into));
        self
    }

    /// Appends a content glob.
    pub fn content(mut self, pattern: impl Into<String>) -> Self {
        self.content.push(pattern.into());
        self
    }

    /// Appends several content globs.
    pub fn contents<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets whether content globs resolve against `config_dir`.
    pub fn relative(mut self, relative: bool) -> Self {
        self.relative = relative;
        self
    }

    /// Sets one theme extension key.
    pub fn theme(mut self, key: impl Into<String>, value: Value) -> Self {
        self.theme_extensions = self.theme_extensions.with(key, value);
        self
    }

    /// Merges a set of theme extensions over those already given.
    pub fn theme_extensions(mut self, extensions: ThemeExtensions) -> Self {
        self.theme_extensions = self.theme_extensions.merge(&extensions);
        self
    }

    /// Sets the directory of the declaring configuration.
    pub fn config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = dir.into();
        self
    }

    /// Sets how an empty content scope is treated.
    pub fn scope_policy(mut self, policy: ValidationPolicy) -> Self {
        self.scope_policy = policy;
        self
    }

    /// Builds the loader.
    pub fn build(mut self) -> StyleScanLoader {
        self.resolvers
            .sort_by_key(|r| std::cmp::Reverse(r.priority()));

        StyleScanLoader {
            resolvers: self.resolvers,
            presets: self.presets,
            relative: self.relative,
            content: self.content,
            theme_extensions: self.theme_extensions,
            config_dir: self.config_dir,
            scope_policy: self.scope_policy,
        }
    }
}

impl Default for StyleScanLoaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryPresets;
    use serde_json::json;

    // Mock resolver for testing
    struct MockResolver {
        name: String,
        priority: u8,
        fail: bool,
    }

    impl PresetResolver for MockResolver {
        fn name(&self) -> &str {
            &self.name
        }

        fn priority(&self) -> u8 {
            self.priority
        }

        fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
            if self.fail {
                return Err(ConfigError::SourceError {
                    source_name: self.name.clone(),
                    message: "unreadable".to_string(),
                    source: None,
                });
            }
            Ok(Some(Preset::new(preset.clone()).with_theme(
                ThemeExtensions::new().with("from", json!(self.name)),
            )))
        }

        fn available(&self) -> Result<Vec<PresetRef>> {
            Ok(Vec::new())
        }
    }

    fn mock(name: &str, priority: u8) -> Box<dyn PresetResolver> {
        Box::new(MockResolver {
            name: name.to_string(),
            priority,
            fail: false,
        })
    }

    #[test]
    fn test_resolvers_sorted_by_priority() {
        let loader = StyleScanLoader::builder()
            .with_resolver(mock("low", 1))
            .with_resolver(mock("high", 3))
            .with_resolver(mock("medium", 2))
            .build();
        assert_eq!(loader.resolver_names(), vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_highest_priority_resolver_wins() {
        let config = StyleScanLoader::builder()
            .with_resolver(mock("low", 1))
            .with_resolver(mock("high", 3))
            .preset("base")
            .content("a/*.md")
            .build()
            .load()
            .unwrap();
        assert_eq!(config.presets()[0].theme().get("from"), Some(&json!("high")));
    }

    #[test]
    fn test_resolver_error_aborts() {
        let err = StyleScanLoader::builder()
            .with_resolver(Box::new(MockResolver {
                name: "broken".to_string(),
                priority: 3,
                fail: true,
            }))
            .with_resolver(mock("fallback", 1))
            .preset("base")
            .content("a/*.md")
            .build()
            .load()
            .unwrap_err();
        assert!(matches!(err, ConfigError::SourceError { .. }));
    }

    #[test]
    fn test_unresolvable_preset() {
        let err = StyleScanLoader::builder()
            .with_resolver(Box::new(InMemoryPresets::new()))
            .preset("evidence")
            .content("a/*.md")
            .build()
            .load()
            .unwrap_err();
        match err {
            ConfigError::UnresolvablePreset { preset } => assert_eq!(preset, "evidence"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_resolvers_means_unresolvable() {
        let result = StyleScanLoader::builder()
            .preset("base")
            .content("a/*.md")
            .build()
            .load();
        assert!(matches!(result, Err(ConfigError::UnresolvablePreset { .. })));
    }

    #[test]
    fn test_empty_preset_name_unresolvable() {
        let result = StyleScanLoader::builder()
            .with_resolver(mock("any", 1))
            .preset("  ")
            .content("a/*.md")
            .build()
            .load();
        assert!(matches!(result, Err(ConfigError::UnresolvablePreset { .. })));
    }

    #[test]
    fn test_empty_scope_denied_by_default() {
        let result = StyleScanLoader::builder().build().load();
        assert!(matches!(result, Err(ConfigError::EmptyContentScope)));
    }

    #[test]
    fn test_empty_scope_warn_policy() {
        let config = StyleScanLoader::builder()
            .scope_policy(ValidationPolicy::Warn)
            .build()
            .load()
            .unwrap();
        assert!(config.content().is_empty());
    }

    #[test]
    fn test_invalid_glob_fails() {
        let result = StyleScanLoader::builder().content("./pages/[").build().load();
        assert!(matches!(result, Err(ConfigError::InvalidContentGlob { .. })));
    }

    #[test]
    fn test_theme_builder_merges() {
        let config = StyleScanLoader::builder()
            .content("a/*.md")
            .theme("colors", json!({"a": 1}))
            .theme_extensions(ThemeExtensions::new().with("colors", json!({"b": 2})))
            .build()
            .load()
            .unwrap();
        assert_eq!(config.theme_extensions().get("colors"), Some(&json!({"b": 2})));
    }

    #[test]
    fn test_loader_name() {
        assert_eq!(StyleScanLoader::builder().build().name(), "style-scan");
    }
}
