//! Startup configuration read from the environment.

use std::net::SocketAddr;

use roster_client::ClientConfig;

use crate::error::WebError;

/// Address the front end listens on unless `ROSTER_LISTEN_ADDR` says otherwise.
pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct WebConfig {
    pub listen_addr: SocketAddr,
    pub client: ClientConfig,
}

impl WebConfig {
    /// Build a config from an explicit listen address and the API settings.
    ///
    /// # Errors
    /// Returns [`WebError::Config`] if `listen_addr` is not `ip:port`.
    pub fn new(listen_addr: &str, client: ClientConfig) -> Result<Self, WebError> {
        let listen_addr = listen_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| WebError::Config(format!("listen address '{listen_addr}': {e}")))?;
        Ok(Self { listen_addr, client })
    }

    /// Read `ROSTER_LISTEN_ADDR` plus the API variables understood by
    /// [`ClientConfig::from_env`].
    ///
    /// # Errors
    /// Returns [`WebError::Config`] if any variable holds an unusable value.
    pub fn from_env() -> Result<Self, WebError> {
        let addr = std::env::var("ROSTER_LISTEN_ADDR")
            .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_owned());
        Self::new(&addr, ClientConfig::from_env()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_parses_socket_address() {
        let config = match WebConfig::new(DEFAULT_LISTEN_ADDR, ClientConfig::default()) {
            Ok(c) => c,
            Err(e) => panic!("unexpected error: {e}"),
        };
        assert_eq!(config.listen_addr.port(), 3000);
    }

    #[test]
    fn new_rejects_address_without_port() {
        let result = WebConfig::new("localhost", ClientConfig::default());
        assert!(matches!(result, Err(WebError::Config(_))));
    }
}
