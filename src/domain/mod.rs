// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and validation rules.
//!
//! This module contains the configuration records, the value types they are
//! built from, and the error type. It is independent of any file format or
//! preset source.

pub mod content;
pub mod dev_server;
pub mod document;
pub mod errors;
pub mod host;
pub mod preset;
pub mod service;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use content::{ContentGlob, ContentMatcher, ContentScope};
pub use dev_server::DevServerNetConfig;
pub use errors::{ConfigError, Result};
pub use host::{AllowedHosts, BindHost, HostPattern, Hostname};
pub use preset::{Preset, PresetRef};
pub use service::ConfigLoader;
pub use style::StyleScanConfig;
pub use theme::ThemeExtensions;
