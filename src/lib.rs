// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated configuration for static report sites.
//!
//! This crate produces the two configuration records a report site hands to its
//! external tooling:
//!
//! - a **style-scan configuration** for a utility-class CSS framework: which
//!   presets to inherit, which files to scan for class names, and which theme
//!   keys to extend;
//! - a **dev-server network configuration**: which address the development
//!   server binds and which Host headers it trusts.
//!
//! Both are built by explicit loaders, validated once, and returned as immutable
//! values. Nothing here opens sockets, scans files, or generates CSS.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: configuration records, value types and errors
//! - **Ports**: trait definitions (`PresetResolver`, `ConfigParser`)
//! - **Adapters**: preset sources (built-in, in-memory, directory) and
//!   document parsers (YAML, JSON)
//! - **Service**: the loaders and the site service
//!
//! # Feature Flags
//!
//! - `yaml`: Enable YAML documents (default)
//! - `json`: Enable JSON documents (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use sitecfg::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let style = StyleScanLoader::builder()
//!     .with_builtin_presets()
//!     .preset("base")
//!     .content("./pages/**/*.{html,js,svelte,ts,md}")
//!     .build()
//!     .load()?;
//!
//! let server = DevServerNetLoader::builder()
//!     .bind_host("0.0.0.0")
//!     .allowed_host("example.ts.net")
//!     .build()
//!     .load()?;
//!
//! assert!(style.merged_theme().contains_key("fontFamily"));
//! assert!(server.accepts_host("example.ts.net"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{BuiltinPresets, InMemoryPresets, PresetDirectory, SiteFileAdapter};
    pub use crate::domain::{
        AllowedHosts, BindHost, ConfigError, ConfigLoader, ContentGlob, ContentScope,
        DevServerNetConfig, Preset, PresetRef, Result, StyleScanConfig, ThemeExtensions,
    };
    pub use crate::ports::{ConfigParser, PresetResolver};
    pub use crate::service::{
        DevServerNetLoader, SiteConfig, SiteConfigService, StyleScanLoader, ValidationPolicy,
    };

    // Re-export parsers based on feature flags
    #[cfg(feature = "json")]
    pub use crate::adapters::JsonParser;
    #[cfg(feature = "yaml")]
    pub use crate::adapters::YamlParser;
}
