// SPDX-License-Identifier: MIT OR Apache-2.0

//! Site configuration file adapter.
//!
//! This module provides an adapter that reads a site document from a YAML or JSON
//! file, picking the parser from the file extension.

use crate::adapters::{parser_for_path, supported_extensions};
use crate::domain::document::SiteDocument;
use crate::domain::{ConfigError, Result};
use directories::ProjectDirs;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Maximum allowed size of a configuration file (10MB)
const MAX_CONFIG_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Base name looked up in the OS configuration directory.
const DEFAULT_FILE_STEM: &str = "site";

fn display_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
}

/// Reads and parses a configuration file.
///
/// Returns the canonical path alongside the parsed value.
pub(crate) fn read_config_file(path: &Path, source_name: &str) -> Result<(PathBuf, Value)> {
    let parser = parser_for_path(path)?;

    let canonical_path = path.canonicalize().map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!("Invalid or inaccessible path: {}", display_name(path)),
        source: Some(Box::new(e)),
    })?;

    let metadata = fs::metadata(&canonical_path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!(
            "Failed to read file metadata: {}",
            display_name(&canonical_path)
        ),
        source: Some(Box::new(e)),
    })?;

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::SourceError {
            source_name: source_name.to_string(),
            message: format!(
                "Configuration file too large: {} bytes (max {} bytes)",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            ),
            source: None,
        });
    }

    let content = fs::read_to_string(&canonical_path).map_err(|e| ConfigError::SourceError {
        source_name: source_name.to_string(),
        message: format!(
            "Failed to read configuration file: {}",
            display_name(&canonical_path)
        ),
        source: Some(Box::new(e)),
    })?;

    tracing::debug!(
        "Read {} bytes from '{}'",
        content.len(),
        canonical_path.display()
    );

    let value = parser.parse(&content)?;
    Ok((canonical_path, value))
}

/// Adapter for a site configuration file.
///
/// The directory containing the file is the anchor for relative content globs.
///
/// # Examples
///
/// ```rust,no_run
/// use sitecfg::adapters::SiteFileAdapter;
///
/// // Load from a specific file
/// let adapter = SiteFileAdapter::from_file("reports/site.yaml").unwrap();
///
/// // Load from the default OS location
/// let adapter = SiteFileAdapter::from_default_location("reports", "com.example").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SiteFileAdapter {
    /// Canonical path to the file
    file_path: PathBuf,
    /// Parsed document
    document: SiteDocument,
}

impl SiteFileAdapter {
    /// Reads a site document from a specific file.
    ///
    /// # Errors
    ///
    /// * `SourceError` - the path is inaccessible, too large, or has an
    ///   unsupported extension
    /// * `ParseError` - the content is not a valid site document
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let (file_path, value) = read_config_file(path.as_ref(), "site-file")?;
        let document = SiteDocument::from_value(value)?;
        Ok(Self {
            file_path,
            document,
        })
    }

    /// Reads `site.yaml`, `site.yml` or `site.json` from the OS configuration
    /// directory for the given application.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "reports")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::SourceError {
                source_name: "site-file".to_string(),
                message: "Failed to determine project directories".to_string(),
                source: None,
            })?;

        Self::from_directory(proj_dirs.config_dir())
    }

    /// Reads the first `site.<ext>` file found in `dir`, trying extensions in
    /// parser order.
    pub fn from_directory(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        for extension in supported_extensions() {
            let candidate = dir.join(format!("{}.{}", DEFAULT_FILE_STEM, extension));
            if candidate.is_file() {
                tracing::debug!("Using site configuration '{}'", candidate.display());
                return Self::from_file(candidate);
            }
        }
        Err(ConfigError::SourceError {
            source_name: "site-file".to_string(),
            message: format!(
                "No {}.{{{}}} found in {}",
                DEFAULT_FILE_STEM,
                supported_extensions().join(","),
                dir.display()
            ),
            source: None,
        })
    }

    /// Returns the canonical path of the file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the directory containing the file.
    pub fn config_dir(&self) -> &Path {
        self.file_path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// Returns the parsed document.
    pub fn document(&self) -> &SiteDocument {
        &self.document
    }

    /// Reads the file again.
    ///
    /// On failure the previously loaded document is kept.
    pub fn reload(&mut self) -> Result<()> {
        let (_, value) = read_config_file(&self.file_path, "site-file")?;
        self.document = SiteDocument::from_value(value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, TempDir};

    fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_from_yaml_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "site.yaml",
            "server:\n  host: 0.0.0.0\n  allowedHosts:\n    - example.ts.net\n",
        );

        let adapter = SiteFileAdapter::from_file(&path).unwrap();
        assert!(adapter.document().server.is_some());
        assert!(adapter.document().style.is_none());
        assert_eq!(adapter.config_dir(), dir.path().canonicalize().unwrap());
    }

    #[test]
    #[cfg(feature = "json")]
    fn test_from_json_file() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.json", r#"{"style": {"content": ["./pages/*.md"]}}"#);

        let adapter = SiteFileAdapter::from_file(&path).unwrap();
        assert!(adapter.document().style.is_some());
    }

    #[test]
    fn test_missing_file() {
        let result = SiteFileAdapter::from_file("/nonexistent/site.yaml");
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".toml").tempfile().unwrap();
        let result = SiteFileAdapter::from_file(file.path());
        assert!(matches!(result, Err(ConfigError::SourceError { .. })));
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_invalid_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "unexpected: true\n");
        let result = SiteFileAdapter::from_file(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_empty_file_is_empty_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "");
        let adapter = SiteFileAdapter::from_file(&path).unwrap();
        assert_eq!(adapter.document(), &SiteDocument::default());
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_from_directory() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "site.yml", "style:\n  content: ['./a/*.md']\n");
        let adapter = SiteFileAdapter::from_directory(dir.path()).unwrap();
        assert!(adapter.file_path().ends_with("site.yml"));
    }

    #[test]
    fn test_from_directory_without_file() {
        let dir = TempDir::new().unwrap();
        let err = SiteFileAdapter::from_directory(dir.path()).unwrap_err();
        assert!(err.to_string().contains("site."));
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_reload_picks_up_changes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "server:\n  port: 3000\n");
        let mut adapter = SiteFileAdapter::from_file(&path).unwrap();
        assert_eq!(adapter.document().server.as_ref().unwrap().port, Some(3000));

        write_file(&dir, "site.yaml", "server:\n  port: 4000\n");
        adapter.reload().unwrap();
        assert_eq!(adapter.document().server.as_ref().unwrap().port, Some(4000));
    }

    #[test]
    #[cfg(feature = "yaml")]
    fn test_reload_failure_keeps_document() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "site.yaml", "server:\n  port: 3000\n");
        let mut adapter = SiteFileAdapter::from_file(&path).unwrap();

        write_file(&dir, "site.yaml", "server: [broken\n");
        assert!(adapter.reload().is_err());
        assert_eq!(adapter.document().server.as_ref().unwrap().port, Some(3000));
    }
}
