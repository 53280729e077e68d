// SPDX-License-Identifier: MIT OR Apache-2.0

//! The dev-server network configuration record.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::host::{normalize_host_header, AllowedHosts, BindHost, Hostname};
use serde_json::{json, Map, Value};
use std::net::IpAddr;

/// Network exposure settings for a local development server.
///
/// The record only describes where the server listens and which Host headers it
/// trusts. It never opens a socket.
///
/// # Examples
///
/// ```
/// use sitecfg::prelude::*;
///
/// # fn main() -> Result<()> {
/// let config = DevServerNetLoader::builder()
///     .bind_host("0.0.0.0")
///     .allowed_host("example.ts.net")
///     .build()
///     .load()?;
///
/// assert_eq!(config.bind_host().to_string(), "0.0.0.0");
/// assert!(config.allowed_hosts().contains("example.ts.net"));
/// assert!(config.accepts_host("example.ts.net:5173"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevServerNetConfig {
    bind_host: BindHost,
    port: Option<u16>,
    allowed_hosts: AllowedHosts,
}

impl DevServerNetConfig {
    pub(crate) fn new(bind_host: BindHost, port: Option<u16>, allowed_hosts: AllowedHosts) -> Self {
        Self {
            bind_host,
            port,
            allowed_hosts,
        }
    }

    /// Returns the address the server listens on.
    pub fn bind_host(&self) -> &BindHost {
        &self.bind_host
    }

    /// Returns the listening port, if one was configured.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the trusted Host header patterns.
    pub fn allowed_hosts(&self) -> &AllowedHosts {
        &self.allowed_hosts
    }

    /// Returns `true` if the server listens on every interface.
    pub fn is_exposed(&self) -> bool {
        self.bind_host.is_all_interfaces()
    }

    /// Fails with `InsecureExposure` when every interface is bound but no host
    /// name is trusted.
    pub fn check_exposure(&self) -> Result<()> {
        if self.is_exposed() && self.allowed_hosts.is_empty() {
            return Err(ConfigError::InsecureExposure {
                bind_host: self.bind_host.to_string(),
            });
        }
        Ok(())
    }

    /// Decides whether a request with this Host header would be accepted.
    ///
    /// IP literals and `localhost` names are always accepted since they cannot
    /// be used for DNS rebinding. Any other name must match the allow-list.
    pub fn accepts_host(&self, host_header: &str) -> bool {
        let Some(host) = normalize_host_header(host_header) else {
            return false;
        };
        if host.parse::<IpAddr>().is_ok() {
            return true;
        }
        if Hostname::parse(&host).is_ok_and(|h| h.is_localhost()) {
            return true;
        }
        self.allowed_hosts.allows(&host)
    }

    /// Renders the shape expected by the dev server.
    pub fn to_consumer_json(&self) -> Value {
        let mut server = Map::new();
        server.insert("host".to_string(), json!(self.bind_host));
        if let Some(port) = self.port {
            server.insert("port".to_string(), json!(port));
        }
        server.insert("allowedHosts".to_string(), json!(self.allowed_hosts));
        json!({ "server": server })
    }
}
