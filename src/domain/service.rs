// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader trait definition.
//!
//! This module defines the `ConfigLoader` trait, the common interface of every
//! component that produces a validated configuration record.

use crate::domain::Result;

/// A pure "construct once, return" configuration producer.
///
/// Loading performs validation and returns an immutable record. Calling `load`
/// repeatedly with the same inputs yields structurally equal records, so loaders
/// can be shared and re-evaluated without synchronization.
///
/// # Examples
///
/// ```rust
/// use sitecfg::domain::{ConfigLoader, Result};
///
/// struct FixedPort(u16);
///
/// impl ConfigLoader for FixedPort {
///     type Output = u16;
///
///     fn name(&self) -> &str {
///         "fixed-port"
///     }
///
///     fn load(&self) -> Result<u16> {
///         Ok(self.0)
///     }
/// }
///
/// let loader = FixedPort(5173);
/// assert_eq!(loader.load().unwrap(), 5173);
/// ```
pub trait ConfigLoader: Send + Sync {
    /// The configuration record this loader produces.
    type Output;

    /// Returns a short name used in log output.
    fn name(&self) -> &str;

    /// Builds and validates the configuration record.
    ///
    /// # Returns
    ///
    /// * `Ok(Output)` - The validated record
    /// * `Err(ConfigError)` - The inputs violate a configuration invariant
    fn load(&self) -> Result<Self::Output>;
}
