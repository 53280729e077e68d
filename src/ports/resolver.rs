// SPDX-License-Identifier: MIT OR Apache-2.0

//! Preset resolver trait definition.
//!
//! This module defines the `PresetResolver` trait, the port through which a
//! style-scan loader turns preset references into presets. Any preset source
//! (a built-in catalog, a directory of preset files, an in-memory table) must
//! implement this trait.

use crate::domain::{Preset, PresetRef, Result};

/// A trait for preset sources.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so that loaders holding them can be
/// shared between threads.
///
/// # Priority
///
/// Each resolver has a priority value (0-255). When several resolvers are
/// registered, higher priorities are asked first and the first hit wins. The
/// typical priority values are:
///
/// - **3 (highest)**: Explicit in-memory presets
/// - **2**: Preset directories next to the site
/// - **1 (lowest)**: The built-in catalog
///
/// # Examples
///
/// ```rust
/// use sitecfg::ports::PresetResolver;
/// use sitecfg::domain::{Preset, PresetRef, Result};
///
/// struct OnlyBase;
///
/// impl PresetResolver for OnlyBase {
///     fn name(&self) -> &str {
///         "only-base"
///     }
///
///     fn priority(&self) -> u8 {
///         1
///     }
///
///     fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>> {
///         Ok((preset.as_str() == "base").then(|| Preset::new("base")))
///     }
///
///     fn available(&self) -> Result<Vec<PresetRef>> {
///         Ok(vec![PresetRef::from("base")])
///     }
/// }
/// ```
pub trait PresetResolver: Send + Sync {
    /// Returns the name of this resolver.
    ///
    /// This name is used for logging and error messages.
    fn name(&self) -> &str;

    /// Returns the priority of this resolver.
    ///
    /// Higher values are asked first.
    fn priority(&self) -> u8;

    /// Looks up a preset.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(Preset))` - The resolver knows this preset
    /// * `Ok(None)` - The resolver does not know this preset
    /// * `Err(ConfigError)` - The preset exists but could not be read
    fn resolve(&self, preset: &PresetRef) -> Result<Option<Preset>>;

    /// Lists the presets this resolver can provide.
    fn available(&self) -> Result<Vec<PresetRef>>;
}
