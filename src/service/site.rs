// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site configuration service.
//!
//! This module ties a site document to the two loaders: the `style` section
//! feeds a `StyleScanLoader`, the `server` section a `DevServerNetLoader`. The
//! two sections are independent; loading one never reads the other.

use crate::adapters::{BuiltinPresets, PresetDirectory, SiteFileAdapter};
use crate::domain::document::{AllowedHostsSetting, HostSetting};
use crate::domain::{
    ConfigError, ConfigLoader, DevServerNetConfig, Result, StyleScanConfig,
};
use crate::ports::PresetResolver;
use crate::service::{DevServerNetLoader, StyleScanLoader, ValidationPolicy};
use serde_json::{json, Value};
use std::path::Path;
use std::sync::Arc;

/// Directory next to the site file searched for preset files by `from_file`.
const PRESET_DIR_NAME: &str = "presets";

/// Both configuration records of a site, for the sections that are present.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// The style-scan configuration, if the document has a `style` section.
    pub style: Option<StyleScanConfig>,
    /// The dev-server configuration, if the document has a `server` section.
    pub dev_server: Option<DevServerNetConfig>,
}

impl SiteConfig {
    /// Renders every present section in the shape its consumer expects.
    ///
    /// The result is keyed by consumer: `style` and `devServer`.
    pub fn to_consumer_json(&self) -> Value {
        json!({
            "style": self.style.as_ref().map(StyleScanConfig::to_consumer_json),
            "devServer": self.dev_server.as_ref().map(DevServerNetConfig::to_consumer_json),
        })
    }
}

/// Loads style-scan and dev-server configuration from one site document.
///
/// # Examples
///
/// ```rust,no_run
/// use sitecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let service = SiteConfigService::from_file("reports/site.yaml")?;
///
/// let style = service.load_style()?;
/// let server = service.load_dev_server()?;
/// println!("{}", server.to_consumer_json());
/// # Ok(())
/// # }
/// ```
pub struct SiteConfigService {
    file: SiteFileAdapter,
    resolvers: Vec<Arc<dyn PresetResolver>>,
    scope_policy: ValidationPolicy,
    exposure_policy: ValidationPolicy,
}

impl SiteConfigService {
    /// Creates a new service builder.
    pub fn builder() -> SiteConfigServiceBuilder {
        SiteConfigServiceBuilder::new()
    }

    /// Creates a service with default preset sources.
    ///
    /// Presets resolve from a `presets/` directory next to the file when one
    /// exists, then from the built-in catalog.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let mut builder = Self::builder().with_file(path)?.with_builtin_presets();

        let preset_dir = builder
            .file
            .as_ref()
            .map(|f| f.config_dir().join(PRESET_DIR_NAME));
        if let Some(dir) = preset_dir.filter(|d| d.is_dir()) {
            builder = builder.with_preset_dir(dir)?;
        }

        builder.build()
    }

    /// Returns the underlying file adapter.
    pub fn file(&self) -> &SiteFileAdapter {
        &self.file
    }

    /// Re-reads the site file.
    pub fn reload(&mut self) -> Result<()> {
        self.file.reload()
    }

    fn missing_section(&self, section: &str) -> ConfigError {
        self.file_error(format!("Missing '{}' section", section))
    }

    fn file_error(&self, message: String) -> ConfigError {
        ConfigError::SourceError {
            source_name: "site-file".to_string(),
            message: format!("{} in {}", message, self.file.file_path().display()),
            source: None,
        }
    }

    /// Builds a style-scan loader from the `style` section.
    pub fn style_loader(&self) -> Result<StyleScanLoader> {
        let section = self
            .file
            .document()
            .style
            .as_ref()
            .ok_or_else(|| self.missing_section("style"))?;

        let mut builder = StyleScanLoader::builder()
            .presets(section.presets.iter().map(String::as_str))
            .contents(section.content.files().iter().cloned())
            .relative(section.content.relative())
            .theme_extensions(section.theme.extend.clone())
            .config_dir(self.file.config_dir())
            .scope_policy(self.scope_policy);
        for resolver in &self.resolvers {
            builder = builder.with_shared_resolver(Arc::clone(resolver));
        }
        Ok(builder.build())
    }

    /// Builds a dev-server loader from the `server` section.
    pub fn dev_server_loader(&self) -> Result<DevServerNetLoader> {
        let section = self
            .file
            .document()
            .server
            .as_ref()
            .ok_or_else(|| self.missing_section("server"))?;

        let mut builder = DevServerNetLoader::builder().exposure_policy(self.exposure_policy);

        builder = match &section.host {
            None => builder,
            Some(HostSetting::Flag(true)) => builder.bind_all_interfaces(),
            Some(HostSetting::Flag(false)) => builder.bind_loopback(),
            Some(HostSetting::Address(host)) => builder.bind_host(host.as_str()),
        };

        if let Some(port) = section.port {
            builder = builder.port(port);
        }

        builder = match &section.allowed_hosts {
            None | Some(AllowedHostsSetting::Flag(false)) => builder,
            Some(AllowedHostsSetting::Flag(true)) => {
                return Err(ConfigError::invalid_host(
                    "true",
                    "allowedHosts: true would admit every host; list host names explicitly",
                ));
            }
            Some(AllowedHostsSetting::List(hosts)) => builder.allowed_hosts(hosts.iter().cloned()),
        };

        Ok(builder.build())
    }

    /// Loads the style-scan configuration.
    pub fn load_style(&self) -> Result<StyleScanConfig> {
        self.style_loader()?.load()
    }

    /// Loads the dev-server configuration.
    pub fn load_dev_server(&self) -> Result<DevServerNetConfig> {
        self.dev_server_loader()?.load()
    }

    /// Loads every section present in the document.
    ///
    /// A document with neither section is an error.
    pub fn load(&self) -> Result<SiteConfig> {
        let document = self.file.document();
        if document.style.is_none() && document.server.is_none() {
            return Err(self.file_error(
                "No 'style' or 'server' section".to_string(),
            ));
        }

        let style = match document.style {
            Some(_) => Some(self.load_style()?),
            None => None,
        };
        let dev_server = match document.server {
            Some(_) => Some(self.load_dev_server()?),
            None => None,
        };

        Ok(SiteConfig { style, dev_server })
    }
}

/// Builder for constructing a `SiteConfigService`.
pub struct SiteConfigServiceBuilder {
    file: Option<SiteFileAdapter>,
    resolvers: Vec<Arc<dyn PresetResolver>>,
    scope_policy: ValidationPolicy,
    exposure_policy: ValidationPolicy,
}

impl SiteConfigServiceBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            file: None,
            resolvers: Vec::new(),
            scope_policy: ValidationPolicy::default(),
            exposure_policy: ValidationPolicy::default(),
        }
    }

    /// Reads the site document from a file.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Result<Self> {
        self.file = Some(SiteFileAdapter::from_file(path)?);
        Ok(self)
    }

    /// Uses an already loaded site file.
    pub fn with_adapter(mut self, adapter: SiteFileAdapter) -> Self {
        self.file = Some(adapter);
        self
    }

    /// Adds a preset resolver.
    pub fn with_resolver(mut self, resolver: Box<dyn PresetResolver>) -> Self {
        self.resolvers.push(Arc::from(resolver));
        self
    }

    /// Adds the built-in preset catalog.
    pub fn with_builtin_presets(self) -> Self {
        self.with_resolver(Box::new(BuiltinPresets::new()))
    }

    /// Adds a directory of preset files.
    pub fn with_preset_dir(self, root: impl AsRef<Path>) -> Result<Self> {
        let resolver = PresetDirectory::new(root)?;
        Ok(self.with_resolver(Box::new(resolver)))
    }

    /// Sets how an empty content scope is treated.
    pub fn scope_policy(mut self, policy: ValidationPolicy) -> Self {
        self.scope_policy = policy;
        self
    }

    /// Sets how an exposed server without trusted hosts is treated.
    pub fn exposure_policy(mut self, policy: ValidationPolicy) -> Self {
        self.exposure_policy = policy;
        self
    }

    /// Builds the service.
    ///
    /// Fails with `SourceError` if no site file was given.
    pub fn build(self) -> Result<SiteConfigService> {
        let file = self.file.ok_or_else(|| ConfigError::SourceError {
            source_name: "site-file".to_string(),
            message: "No site configuration file given".to_string(),
            source: None,
        })?;

        Ok(SiteConfigService {
            file,
            resolvers: self.resolvers,
            scope_policy: self.scope_policy,
            exposure_policy: self.exposure_policy,
        })
    }
}

impl Default for SiteConfigServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
