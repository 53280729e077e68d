// SPDX-License-Identifier: MIT OR Apache-2.0

//! Load policies for findings that a host tool may treat as fatal or not.

/// What a loader does when a configuration is legal but likely wrong.
///
/// # Examples
///
/// ```rust
/// use sitecfg::service::ValidationPolicy;
///
/// assert_eq!(ValidationPolicy::default(), ValidationPolicy::Deny);
/// assert!(ValidationPolicy::Deny.is_fatal());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationPolicy {
    /// Fail the load.
    #[default]
    Deny,
    /// Log a warning and return the configuration.
    Warn,
}

impl ValidationPolicy {
    /// Returns `true` if findings abort the load.
    pub fn is_fatal(self) -> bool {
        matches!(self, ValidationPolicy::Deny)
    }
}
