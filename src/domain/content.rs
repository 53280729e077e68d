// SPDX-License-Identifier: MIT OR Apache-2.0

//! Content globs and the content scan scope.
//!
//! Content globs name the files the styling tool scans for utility-class tokens.
//! Patterns follow the usual `*`, `**`, `?`, `[...]` and `{a,b}` syntax, with `*`
//! never crossing a path separator.

use crate::domain::errors::{ConfigError, Result};
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// A validated content glob.
///
/// The pattern is stored as written (minus surrounding whitespace), so that it
/// can be handed back to the consuming tool unchanged.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::content::ContentGlob;
///
/// let glob = ContentGlob::parse("./pages/**/*.{html,js,svelte,ts,md}").unwrap();
/// assert_eq!(glob.as_str(), "./pages/**/*.{html,js,svelte,ts,md}");
///
/// assert!(ContentGlob::parse("./pages/[").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentGlob(String);

impl ContentGlob {
    /// Parses and validates a glob pattern.
    pub fn parse(pattern: impl AsRef<str>) -> Result<Self> {
        let pattern = pattern.as_ref().trim();
        if pattern.is_empty() {
            return Err(ConfigError::InvalidContentGlob {
                pattern: pattern.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }
        compile(pattern)?;
        Ok(ContentGlob(pattern.to_string()))
    }

    /// Returns the pattern as written.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the pattern with any leading `./` removed.
    fn normalized(&self) -> &str {
        strip_dot_prefix(&self.0)
    }

    /// Returns the pattern anchored at `base`.
    ///
    /// Absolute patterns are returned unchanged.
    pub fn resolve_against(&self, base: &Path) -> String {
        if Path::new(&self.0).is_absolute() {
            return self.0.clone();
        }
        base.join(self.normalized()).to_string_lossy().into_owned()
    }

    /// Returns the pattern to compile, anchored at `base` when given.
    ///
    /// Glob syntax in `base` is escaped so that only the pattern itself is
    /// interpreted.
    fn anchored_pattern(&self, base: Option<&Path>) -> String {
        let Some(base) = base.filter(|_| !Path::new(&self.0).is_absolute()) else {
            return self.0.clone();
        };
        let mut pattern = escape_literal(&base.to_string_lossy());
        if !pattern.ends_with('/') {
            pattern.push('/');
        }
        pattern.push_str(self.normalized());
        pattern
    }
}

/// Escapes glob metacharacters by wrapping each in a one-character class.
fn escape_literal(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '*' | '?' | '[' | ']' | '{' | '}') {
            escaped.push('[');
            escaped.push(c);
            escaped.push(']');
        } else {
            escaped.push(c);
        }
    }
    escaped
}

impl TryFrom<String> for ContentGlob {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        ContentGlob::parse(value)
    }
}

impl From<ContentGlob> for String {
    fn from(glob: ContentGlob) -> Self {
        glob.0
    }
}

impl AsRef<str> for ContentGlob {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContentGlob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn strip_dot_prefix(s: &str) -> &str {
    let mut s = s;
    while let Some(rest) = s.strip_prefix("./") {
        s = rest;
    }
    s
}

fn compile(pattern: &str) -> Result<globset::Glob> {
    GlobBuilder::new(strip_dot_prefix(pattern))
        .literal_separator(true)
        .build()
        .map_err(|e| ConfigError::InvalidContentGlob {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}

/// The set of files scanned for style-class usage.
///
/// When `relative` is `true` the globs are resolved against the directory of the
/// configuration that declared them; otherwise they are left to the consuming
/// tool's working directory. Duplicate globs are dropped, keeping the first
/// occurrence.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::content::{ContentGlob, ContentScope};
/// use std::path::Path;
///
/// let scope = ContentScope::new(true, vec![
///     ContentGlob::parse("./pages/**/*.md").unwrap(),
///     ContentGlob::parse("./pages/**/*.md").unwrap(),
/// ]);
/// assert_eq!(scope.len(), 1);
///
/// let resolved = scope.resolve(Path::new("/srv/reports"));
/// assert_eq!(resolved, vec!["/srv/reports/pages/**/*.md".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentScope {
    relative: bool,
    files: Vec<ContentGlob>,
}

impl ContentScope {
    /// Creates a scope from the given globs.
    pub fn new(relative: bool, files: Vec<ContentGlob>) -> Self {
        let mut unique: Vec<ContentGlob> = Vec::with_capacity(files.len());
        for glob in files {
            if !unique.contains(&glob) {
                unique.push(glob);
            }
        }
        Self {
            relative,
            files: unique,
        }
    }

    /// Parses each pattern and builds a scope.
    pub fn parse<I, S>(relative: bool, patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files = patterns
            .into_iter()
            .map(ContentGlob::parse)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(relative, files))
    }

    /// Returns `true` if globs resolve against the config's own directory.
    pub fn is_relative(&self) -> bool {
        self.relative
    }

    /// Returns the globs in declaration order.
    pub fn files(&self) -> &[ContentGlob] {
        &self.files
    }

    /// Returns `true` if the glob at `pattern` is part of the scope.
    pub fn contains(&self, pattern: &str) -> bool {
        self.files.iter().any(|g| g.as_str() == pattern)
    }

    /// Returns the number of globs.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns `true` if no globs are declared.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Returns the patterns as the consuming tool should see them.
    ///
    /// Relative scopes are anchored at `config_dir`; other scopes are returned
    /// as written.
    pub fn resolve(&self, config_dir: &Path) -> Vec<String> {
        self.files
            .iter()
            .map(|g| {
                if self.relative {
                    g.resolve_against(config_dir)
                } else {
                    g.as_str().to_string()
                }
            })
            .collect()
    }

    /// Compiles the scope into a matcher for candidate paths.
    pub fn matcher(&self, config_dir: &Path) -> Result<ContentMatcher> {
        let mut builder = GlobSetBuilder::new();
        let base = self.relative.then_some(config_dir);
        for glob in &self.files {
            let anchored = glob.anchored_pattern(base);
            let pattern = strip_dot_prefix(&anchored);
            let compiled = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|e| ConfigError::InvalidContentGlob {
                    pattern: glob.as_str().to_string(),
                    reason: e.kind().to_string(),
                })?;
            builder.add(compiled);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidContentGlob {
            pattern: self
                .files
                .iter()
                .map(ContentGlob::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            reason: e.to_string(),
        })?;
        Ok(ContentMatcher { set })
    }
}

/// Compiled content scope.
#[derive(Clone, Debug)]
pub struct ContentMatcher {
    set: GlobSet,
}

impl ContentMatcher {
    /// Returns `true` if `path` falls inside the content scope.
    pub fn is_match(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref().to_string_lossy();
        self.set.is_match(strip_dot_prefix(&path))
    }

    /// Returns the indices of every glob that matches `path`.
    pub fn matching_globs(&self, path: impl AsRef<Path>) -> Vec<usize> {
        let path = path.as_ref().to_string_lossy();
        self.set.matches(strip_dot_prefix(&path))
    }
}
