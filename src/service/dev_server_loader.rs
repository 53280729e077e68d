// SPDX-License-Identifier: MIT OR Apache-2.0

//! Dev-server network configuration loader.

use crate::domain::{
    AllowedHosts, BindHost, ConfigError, ConfigLoader, DevServerNetConfig, Result,
};
use crate::service::ValidationPolicy;

/// How the bind host was given to the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
enum BindInput {
    Literal(String),
    AllInterfaces,
    Loopback,
}

/// Loader for `DevServerNetConfig`.
///
/// Listening on every interface is never a default: without an explicit bind
/// host the loader binds loopback. An allow-list entry that is not a plausible
/// host name fails the load; there is no fallback that admits every host.
///
/// # Examples
///
/// ```rust
/// use sitecfg::prelude::*;
///
/// let result = DevServerNetLoader::builder()
///     .bind_host("0.0.0.0")
///     .allowed_host("not a host!")
///     .build()
///     .load();
/// assert!(matches!(result, Err(ConfigError::InvalidHostEntry { .. })));
/// ```
#[derive(Clone, Debug)]
pub struct DevServerNetLoader {
    bind: Option<BindInput>,
    port: Option<u16>,
    allowed_hosts: Vec<String>,
    exposure_policy: ValidationPolicy,
}

impl DevServerNetLoader {
    /// Creates a new loader builder.
    pub fn builder() -> DevServerNetLoaderBuilder {
        DevServerNetLoaderBuilder::new()
    }

    fn bind_host(&self) -> Result<BindHost> {
        match &self.bind {
            None => {
                tracing::debug!("No bind host configured; listening on loopback");
                Ok(BindHost::loopback())
            }
            Some(BindInput::Loopback) => Ok(BindHost::loopback()),
            Some(BindInput::AllInterfaces) => Ok(BindHost::all_interfaces()),
            Some(BindInput::Literal(host)) => BindHost::parse(host),
        }
    }
}

impl ConfigLoader for DevServerNetLoader {
    type Output = DevServerNetConfig;

    fn name(&self) -> &str {
        "dev-server"
    }

    fn load(&self) -> Result<DevServerNetConfig> {
        let bind_host = self.bind_host()?;

        if self.port == Some(0) {
            return Err(ConfigError::invalid_host(
                "0",
                "port 0 is not a valid listening port",
            ));
        }

        let allowed_hosts = AllowedHosts::parse(&self.allowed_hosts)?;
        let config = DevServerNetConfig::new(bind_host, self.port, allowed_hosts);

        if let Err(e) = config.check_exposure() {
            if self.exposure_policy.is_fatal() {
                return Err(e);
            }
            tracing::warn!("{}", e);
        } else if !config.bind_host().is_loopback()
            && !config.is_exposed()
            && config.allowed_hosts().is_empty()
        {
            tracing::warn!(
                "Dev server binds '{}' with an empty allowed-hosts list; only IP and localhost requests will be accepted",
                config.bind_host()
            );
        }

        tracing::debug!(
            "Loaded dev-server configuration: host={}, port={:?}, {} allowed host(s)",
            config.bind_host(),
            config.port(),
            config.allowed_hosts().len()
        );

        Ok(config)
    }
}

/// Builder for constructing a `DevServerNetLoader`.
#[derive(Clone, Debug, Default)]
pub struct DevServerNetLoaderBuilder {
    bind: Option<BindInput>,
    port: Option<u16>,
    allowed_hosts: Vec<String>,
    exposure_policy: ValidationPolicy,
}

impl DevServerNetLoaderBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bind address as written (IP literal or host name).
    pub fn bind_host(mut self, host: impl Into<String>) -> Self {
        self.bind = Some(BindInput::Literal(host.into()));
        self
    }

    /// Listens on every IPv4 interface.
    pub fn bind_all_interfaces(mut self) -> Self {
        self.bind = Some(BindInput::AllInterfaces);
        self
    }

    /// Listens on loopback only.
    pub fn bind_loopback(mut self) -> Self {
        self.bind = Some(BindInput::Loopback);
        self
    }

    /// Sets the listening port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Appends a trusted host.
    pub fn allowed_host(mut self, host: impl Into<String>) -> Self {
        self.allowed_hosts.push(host.into());
        self
    }

    /// Appends several trusted hosts.
    pub fn allowed_hosts<I, S>(mut self, hosts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_hosts.extend(hosts.into_iter().map(Into::into));
        self
    }

    /// Sets how an exposed server without trusted hosts is treated.
    pub fn exposure_policy(mut self, policy: ValidationPolicy) -> Self {
        self.exposure_policy = policy;
        self
    }

    /// Builds the loader.
    pub fn build(self) -> DevServerNetLoader {
        DevServerNetLoader {
            bind: self.bind,
            port: self.port,
            allowed_hosts: self.allowed_hosts,
            exposure_policy: self.exposure_policy,
        }
    }
}
