// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the seams of
//! the configuration system: where presets come from and how documents are
//! parsed. These traits are implemented by adapters in the adapters layer.

pub mod parser;
pub mod resolver;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use resolver::PresetResolver;
