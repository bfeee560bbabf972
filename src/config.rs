//! Client session configuration.

/// Default receive buffer capacity: 4 MiB.
pub const DEFAULT_RECV_BUFFER_SIZE: usize = 4 * 1024 * 1024;

/// Default transmit buffer capacity: 1 KiB.
pub const DEFAULT_SEND_BUFFER_SIZE: usize = 1024;

/// WebSocket client configuration.
///
/// The host and path overrides cover deployments where the TCP endpoint
/// differs from the virtual host the server expects, e.g. a client
/// connecting through an stunnel proxy. Buffer capacities are a deployment
/// concern, so they are set here rather than baked into the session: the
/// receive capacity bounds the backlog a poll can hold, the transmit
/// capacity bounds the largest single outgoing frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host sent in the upgrade request instead of the TCP endpoint host.
    pub host: Option<String>,

    /// Path for the upgrade request line, without the leading slash.
    ///
    /// `None` requests `/`.
    pub path: Option<String>,

    /// Receive buffer capacity in bytes.
    ///
    /// Default: 4 MiB.
    pub recv_buffer_size: usize,

    /// Transmit buffer capacity in bytes; bounds the largest single send,
    /// frame header included.
    ///
    /// Default: 1 KiB.
    pub send_buffer_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: None,
            path: None,
            recv_buffer_size: DEFAULT_RECV_BUFFER_SIZE,
            send_buffer_size: DEFAULT_SEND_BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Create a configuration with default buffer sizes and no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the virtual host for the upgrade request.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the request path (no leading slash).
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Set the receive buffer capacity.
    #[must_use]
    pub const fn with_recv_buffer_size(mut self, size: usize) -> Self {
        self.recv_buffer_size = size;
        self
    }

    /// Set the transmit buffer capacity.
    #[must_use]
    pub const fn with_send_buffer_size(mut self, size: usize) -> Self {
        self.send_buffer_size = size;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.host, None);
        assert_eq!(config.path, None);
        assert_eq!(config.recv_buffer_size, 4 * 1024 * 1024);
        assert_eq!(config.send_buffer_size, 1024);
    }

    #[test]
    fn test_config_builder() {
        let config = Config::new()
            .with_host("virtual.example.com")
            .with_path("stream")
            .with_recv_buffer_size(64 * 1024)
            .with_send_buffer_size(4096);

        assert_eq!(config.host.as_deref(), Some("virtual.example.com"));
        assert_eq!(config.path.as_deref(), Some("stream"));
        assert_eq!(config.recv_buffer_size, 64 * 1024);
        assert_eq!(config.send_buffer_size, 4096);
    }
}
