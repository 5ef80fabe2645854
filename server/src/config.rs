//! Host configuration parsed from environment variables.

use std::net::{IpAddr, SocketAddr};

use crate::error::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build the listen address from the environment.
    ///
    /// Optional:
    /// - `HOST`: overrides the IP of `default_addr`
    /// - `PORT`: overrides the port of `default_addr`
    ///
    /// `default_addr` is the Leptos `site-addr`.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `HOST` or `PORT` is set but invalid.
    pub fn from_env(default_addr: SocketAddr) -> Result<Self, ServerError> {
        let host = std::env::var("HOST").ok();
        let port = std::env::var("PORT").ok();
        Self::from_parts(default_addr, host.as_deref(), port.as_deref())
    }

    fn from_parts(default_addr: SocketAddr, host: Option<&str>, port: Option<&str>) -> Result<Self, ServerError> {
        let ip = parse_host(host)?.unwrap_or_else(|| default_addr.ip());
        let port = parse_port(port)?.unwrap_or_else(|| default_addr.port());
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

fn parse_host(raw: Option<&str>) -> Result<Option<IpAddr>, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<IpAddr>()
            .map(Some)
            .map_err(|_| ServerError::Config(format!("invalid HOST: {value}"))),
    }
}

fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ServerError::Config(format!("invalid PORT: {value}"))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
