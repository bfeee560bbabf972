//! Byte-stream transport abstraction consumed by the client session.
//!
//! The session never opens sockets itself; it drives whatever stream the
//! caller hands it. TLS, proxying, and timeouts all live behind this seam.

use crate::error::Result;

/// A connectable, pollable byte stream — a TCP socket or equivalent.
///
/// `recv` must be non-blocking: `Ok(0)` means no bytes are available right
/// now, not end of stream. `send` may accept fewer bytes than offered;
/// callers loop. Transport failures are reported as
/// [`Error::Io`](crate::Error::Io) or
/// [`Error::Connection`](crate::Error::Connection) and are propagated to the
/// session's caller unchanged.
pub trait Transport {
    /// Open the stream to `host:port`.
    fn connect(&mut self, host: &str, port: u16) -> Result<()>;

    /// Write up to `buf.len()` bytes, returning how many were accepted.
    fn send(&mut self, buf: &[u8]) -> Result<usize>;

    /// Read up to `buf.len()` bytes without blocking.
    ///
    /// Returns `Ok(0)` when nothing is available.
    fn recv(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Zero-timeout readiness check over the stream's pollable descriptor:
    /// `true` when `recv` has bytes to return.
    fn readable(&mut self) -> Result<bool>;

    /// Drop the underlying stream.
    ///
    /// No closing handshake is performed; in the normal case the server
    /// owns the closing TCP sequence.
    fn disconnect(&mut self) -> Result<()>;
}
