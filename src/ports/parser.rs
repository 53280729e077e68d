// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which provides an interface for
//! parsing site and preset documents in different formats (YAML, JSON, etc.).

use crate::domain::Result;
use serde_json::Value;

/// A trait for parsing configuration documents.
///
/// Parsers produce a format-neutral `serde_json::Value`; the document types in
/// `domain::document` give that value its structure.
///
/// # Examples
///
/// ```rust
/// use sitecfg::ports::ConfigParser;
/// use sitecfg::domain::Result;
/// use serde_json::{json, Value};
///
/// struct EmptyParser;
///
/// impl ConfigParser for EmptyParser {
///     fn parse(&self, _content: &str) -> Result<Value> {
///         Ok(json!({}))
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["empty"]
///     }
/// }
/// ```
pub trait ConfigParser: Send + Sync {
    /// Parses document content.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The parsed document
    /// * `Err(ConfigError)` - The content is not valid in this format
    fn parse(&self, content: &str) -> Result<Value>;

    /// Returns the file extensions supported by this parser.
    ///
    /// Extensions are given without the leading dot.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if this parser handles files with the given extension.
    fn supports(&self, extension: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|ext| ext.eq_ignore_ascii_case(extension))
    }
}
