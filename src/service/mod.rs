// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration loaders.
//!
//! This module contains the concrete implementations of the `ConfigLoader`
//! trait and the site service that feeds them from a single document.

pub mod dev_server_loader;
pub mod policy;
pub mod site;
pub mod style_loader;

// Re-export commonly used types
pub use dev_server_loader::{DevServerNetLoader, DevServerNetLoaderBuilder};
pub use policy::ValidationPolicy;
pub use site::{SiteConfig, SiteConfigService, SiteConfigServiceBuilder};
pub use style_loader::{StyleScanLoader, StyleScanLoaderBuilder};
