// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host names, allow-list patterns and bind addresses.
//!
//! Everything here is validated on construction. An entry that does not look like
//! a host name, an IP literal or a subdomain pattern is rejected with
//! `ConfigError::InvalidHostEntry`; there is no allow-all entry.

use crate::domain::errors::{ConfigError, Result};
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr};

/// Maximum length of a host name, excluding a trailing dot.
const MAX_HOSTNAME_LEN: usize = 253;

/// Maximum length of a single label.
const MAX_LABEL_LEN: usize = 63;

/// A syntactically valid, lowercase host name.
///
/// Labels are 1 to 63 characters of ASCII letters, digits and hyphens, and may
/// not start or end with a hyphen. A single trailing dot is accepted and dropped.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::host::Hostname;
///
/// let host = Hostname::parse("Reports.Example.TS.net.").unwrap();
/// assert_eq!(host.as_str(), "reports.example.ts.net");
///
/// assert!(Hostname::parse("not a host!").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hostname(String);

impl Hostname {
    /// Parses and normalizes a host name.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);

        if name.is_empty() {
            return Err(ConfigError::invalid_host(input, "host name is empty"));
        }
        if name.len() > MAX_HOSTNAME_LEN {
            return Err(ConfigError::invalid_host(
                input,
                format!(
                    "host name is {} characters long (max {})",
                    name.len(),
                    MAX_HOSTNAME_LEN
                ),
            ));
        }

        for label in name.split('.') {
            validate_label(input, label)?;
        }

        Ok(Hostname(name.to_ascii_lowercase()))
    }

    /// Returns the normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` for `localhost` and names under `.localhost`.
    pub fn is_localhost(&self) -> bool {
        self.0 == "localhost" || self.0.ends_with(".localhost")
    }
}

fn validate_label(input: &str, label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(ConfigError::invalid_host(input, "empty label"));
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(ConfigError::invalid_host(
            input,
            format!("label '{}' exceeds {} characters", label, MAX_LABEL_LEN),
        ));
    }
    if let Some(c) = label
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || *c == '-'))
    {
        return Err(ConfigError::invalid_host(
            input,
            format!("invalid character '{}'", c),
        ));
    }
    if label.starts_with('-') || label.ends_with('-') {
        return Err(ConfigError::invalid_host(
            input,
            format!("label '{}' starts or ends with a hyphen", label),
        ));
    }
    Ok(())
}

impl fmt::Display for Hostname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Hostname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Parses an IP literal, with or without IPv6 brackets.
fn parse_ip(input: &str) -> Option<IpAddr> {
    let inner = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .unwrap_or(input);
    inner.parse().ok()
}

/// One entry of the allowed-hosts list.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::host::HostPattern;
///
/// let exact = HostPattern::parse("example.ts.net").unwrap();
/// assert!(exact.matches("example.ts.net"));
/// assert!(!exact.matches("a.example.ts.net"));
///
/// let subdomains = HostPattern::parse(".ts.net").unwrap();
/// assert!(subdomains.matches("example.ts.net"));
/// assert!(subdomains.matches("ts.net"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HostPattern {
    /// Exactly this host name.
    Exact(Hostname),
    /// This domain and every subdomain of it, written with a leading dot.
    Subdomains(Hostname),
    /// An IP literal.
    Ip(IpAddr),
}

impl HostPattern {
    /// Parses an allow-list entry.
    pub fn parse(input: &str) -> Result<Self> {
        let entry = input.trim();
        if entry == "*" || entry == "all" {
            return Err(ConfigError::invalid_host(
                input,
                "allow-all entries are not permitted; list host names explicitly",
            ));
        }
        if let Some(domain) = entry.strip_prefix('.') {
            return Hostname::parse(domain)
                .map(HostPattern::Subdomains)
                .map_err(|e| rewrap(input, e));
        }
        if let Some(ip) = parse_ip(entry) {
            return Ok(HostPattern::Ip(ip));
        }
        Hostname::parse(entry)
            .map(HostPattern::Exact)
            .map_err(|e| rewrap(input, e))
    }

    /// Returns `true` if a normalized host (lowercase, no port) matches.
    pub fn matches(&self, host: &str) -> bool {
        match self {
            HostPattern::Exact(name) => name.as_str() == host,
            HostPattern::Subdomains(domain) => {
                let domain = domain.as_str();
                host == domain
                    || (host.len() > domain.len()
                        && host.ends_with(domain)
                        && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
            }
            HostPattern::Ip(ip) => parse_ip(host).is_some_and(|h| h == *ip),
        }
    }
}

/// Keeps the caller's original entry in the error.
fn rewrap(input: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::InvalidHostEntry { reason, .. } => ConfigError::invalid_host(input, reason),
        other => other,
    }
}

impl fmt::Display for HostPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPattern::Exact(name) => write!(f, "{}", name),
            HostPattern::Subdomains(domain) => write!(f, ".{}", domain),
            HostPattern::Ip(ip) => write!(f, "{}", ip),
        }
    }
}

impl Serialize for HostPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The allow-list of Host header values a dev server accepts.
///
/// Entries keep their declaration order; duplicates are dropped.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::host::AllowedHosts;
///
/// let hosts = AllowedHosts::parse(["example.ts.net"]).unwrap();
/// assert!(hosts.allows("example.ts.net:5173"));
/// assert!(hosts.allows("EXAMPLE.ts.net"));
/// assert!(!hosts.allows("attacker.test"));
///
/// assert!(AllowedHosts::parse(["not a host!"]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AllowedHosts(Vec<HostPattern>);

impl AllowedHosts {
    /// Creates an empty allow-list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parses every entry; the first invalid entry fails the whole list.
    pub fn parse<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for entry in entries {
            let pattern = HostPattern::parse(entry.as_ref())?;
            if !patterns.contains(&pattern) {
                patterns.push(pattern);
            }
        }
        Ok(Self(patterns))
    }

    /// Returns the patterns in declaration order.
    pub fn patterns(&self) -> &[HostPattern] {
        &self.0
    }

    /// Returns `true` if the entry, rendered as written, is in the list.
    pub fn contains(&self, entry: &str) -> bool {
        self.0.iter().any(|p| p.to_string() == entry)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no host is trusted.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks a raw Host header value against the allow-list.
    ///
    /// The port and IPv6 brackets are stripped and the name is lowercased before
    /// matching.
    pub fn allows(&self, host_header: &str) -> bool {
        match normalize_host_header(host_header) {
            Some(host) => self.0.iter().any(|p| p.matches(&host)),
            None => false,
        }
    }
}

impl Serialize for AllowedHosts {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter())
    }
}

/// Reduces a Host header to a bare lowercase host.
pub(crate) fn normalize_host_header(header: &str) -> Option<String> {
    let header = header.trim();
    let host = if let Some(rest) = header.strip_prefix('[') {
        rest.split_once(']').map(|(inner, _)| inner)?
    } else if header.matches(':').count() == 1 {
        header.split_once(':').map(|(name, _)| name)?
    } else {
        header
    };
    let host = host.strip_suffix('.').unwrap_or(host);
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

/// The address a dev server listens on.
///
/// # Examples
///
/// ```
/// use sitecfg::domain::host::BindHost;
///
/// let all = BindHost::parse("0.0.0.0").unwrap();
/// assert!(all.is_all_interfaces());
/// assert_eq!(all.to_string(), "0.0.0.0");
///
/// let local = BindHost::parse("localhost").unwrap();
/// assert!(local.is_loopback());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum BindHost {
    /// An unspecified address (`0.0.0.0` or `::`), listening on every interface.
    AllInterfaces(IpAddr),
    /// A specific IP address.
    Address(IpAddr),
    /// A host name resolved by the server at bind time.
    Named(Hostname),
}

impl BindHost {
    /// Listens on every IPv4 interface.
    pub fn all_interfaces() -> Self {
        BindHost::AllInterfaces(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    }

    /// Listens on the IPv4 loopback address.
    pub fn loopback() -> Self {
        BindHost::Address(IpAddr::V4(Ipv4Addr::LOCALHOST))
    }

    /// Parses an IP literal or host name.
    pub fn parse(input: &str) -> Result<Self> {
        let entry = input.trim();
        if entry.is_empty() {
            return Err(ConfigError::invalid_host(input, "bind host is empty"));
        }
        if let Some(ip) = parse_ip(entry) {
            return Ok(if ip.is_unspecified() {
                BindHost::AllInterfaces(ip)
            } else {
                BindHost::Address(ip)
            });
        }
        Hostname::parse(entry)
            .map(BindHost::Named)
            .map_err(|e| rewrap(input, e))
    }

    /// Returns `true` if the server would accept connections on every interface.
    pub fn is_all_interfaces(&self) -> bool {
        matches!(self, BindHost::AllInterfaces(_))
    }

    /// Returns `true` if only local processes can connect.
    pub fn is_loopback(&self) -> bool {
        match self {
            BindHost::AllInterfaces(_) => false,
            BindHost::Address(ip) => ip.is_loopback(),
            BindHost::Named(name) => name.is_localhost(),
        }
    }
}

impl fmt::Display for BindHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindHost::AllInterfaces(ip) | BindHost::Address(ip) => write!(f, "{}", ip),
            BindHost::Named(name) => write!(f, "{}", name),
        }
    }
}

impl Serialize for BindHost {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
