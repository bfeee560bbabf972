//! Error types for the WebSocket client.
//!
//! Every failure is surfaced synchronously to the immediate caller; there is
//! no internal retry or recovery path.

use thiserror::Error;

/// Result type alias for WebSocket client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during WebSocket client operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Destination buffer cannot hold the frame being encoded.
    ///
    /// The buffer contents are not guaranteed consistent on this path; the
    /// caller must not keep writing into the same buffer.
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall {
        /// Bytes the frame requires.
        needed: usize,
        /// Bytes the buffer had available.
        available: usize,
    },

    /// Length-class selector outside the three valid wire encodings.
    ///
    /// Frame sync may be lost; the connection should be abandoned.
    #[error("malformed length indicator: {0:#x}")]
    MalformedLength(u8),

    /// Frame declares a payload longer than this platform can address.
    #[error("payload length {size} exceeds platform limit {max}")]
    PayloadTooLargeForPlatform {
        /// Declared payload length.
        size: u64,
        /// Largest length representable here.
        max: u64,
    },

    /// The upgrade exchange failed: bad status, missing required header, or
    /// accept-key mismatch.
    #[error("handshake failed: {0}")]
    Handshake(String),

    /// The transport could not establish a connection.
    #[error("connection failed: {0}")]
    Connection(String),

    /// I/O error from the transport, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(String),

    /// The entropy source could not supply random bytes.
    #[error("random source unavailable: {0}")]
    RandomSource(String),

    /// Operation attempted in a session state that does not allow it.
    #[error("{operation} not permitted while session is {state}")]
    InvalidState {
        /// The rejected operation.
        operation: &'static str,
        /// The session state at the time of the call.
        state: &'static str,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}
