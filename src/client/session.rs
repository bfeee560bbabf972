//! Poll-driven WebSocket client session.

use tracing::{debug, trace, warn};

use crate::client::state::SessionState;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::protocol::OpCode;
use crate::protocol::assembler::assemble_frames;
use crate::protocol::frame::FrameWriter;
use crate::protocol::handshake;
use crate::transport::Transport;

/// WebSocket client over a caller-supplied transport.
///
/// The session owns one receive buffer, one transmit buffer, and a mask key
/// generated at construction and reused for every outgoing frame. All calls
/// are synchronous: `connect` and `send` block, `poll` never does. Nothing
/// here is safe for concurrent calls on the same session from multiple
/// threads.
pub struct Client<T: Transport> {
    stream: T,
    config: Config,
    state: SessionState,
    mask_key: [u8; 4],
    rx_buf: Vec<u8>,
    /// Valid bytes at the front of `rx_buf`, carried over from earlier
    /// polls as the tail of an incomplete frame.
    offset: usize,
    tx_buf: Vec<u8>,
}

impl<T: Transport> Client<T> {
    /// Create a session with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if no mask key can be generated.
    pub fn new(stream: T) -> Result<Self> {
        Self::with_config(stream, Config::default())
    }

    /// Create a session with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RandomSource`] if no mask key can be generated.
    pub fn with_config(stream: T, config: Config) -> Result<Self> {
        let mut mask_key = [0u8; 4];
        handshake::random_bytes(&mut mask_key)?;
        Ok(Self {
            rx_buf: vec![0; config.recv_buffer_size],
            tx_buf: vec![0; config.send_buffer_size],
            stream,
            config,
            state: SessionState::Idle,
            mask_key,
            offset: 0,
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Connect the transport and run the opening handshake.
    ///
    /// Blocks until the handshake completes. The configured host and path
    /// overrides take precedence over the TCP endpoint in the upgrade
    /// request. Any failure is propagated without retry and leaves the
    /// session in `Failed`.
    ///
    /// # Errors
    ///
    /// [`Error::Connection`]/[`Error::Io`] from the transport,
    /// [`Error::Handshake`] if the upgrade exchange does not verify, and
    /// [`Error::InvalidState`] if the session was already used.
    pub fn connect(&mut self, host: &str, port: u16) -> Result<()> {
        if !self.state.is_idle() {
            return Err(Error::InvalidState {
                operation: "connect",
                state: self.state.name(),
            });
        }
        self.state = SessionState::Connecting;
        if let Err(err) = self.try_connect(host, port) {
            self.state = SessionState::Failed;
            return Err(err);
        }
        self.state = SessionState::Open;
        debug!(host, port, "websocket session open");
        Ok(())
    }

    fn try_connect(&mut self, host: &str, port: u16) -> Result<()> {
        self.stream.connect(host, port)?;
        self.state = SessionState::Handshaking;
        let virtual_host = self.config.host.as_deref().unwrap_or(host);
        let path = self.config.path.as_deref().unwrap_or("");
        handshake::perform(&mut self.stream, virtual_host, path)
    }

    /// Poll the transport for incoming frames without blocking.
    ///
    /// Performs one zero-timeout readiness check and at most one read.
    /// Every complete frame in the buffer is handed to `handler` in arrival
    /// order; an unconsumed tail is compacted to the front of the buffer
    /// for the next poll. Zero complete frames in a call is normal flow
    /// control, not an error.
    ///
    /// Returns `true` when bytes were read and processed, `false` when the
    /// transport had nothing to deliver.
    ///
    /// # Errors
    ///
    /// Transport errors unchanged, decode errors from the assembler, and
    /// [`Error::InvalidState`] when the session is not open.
    pub fn poll<F>(&mut self, handler: F) -> Result<bool>
    where
        F: FnMut(OpCode, &[u8]),
    {
        self.ensure_open("poll")?;

        if !self.stream.readable()? {
            return Ok(false);
        }
        if self.offset == self.rx_buf.len() {
            // A frame larger than the receive buffer can never complete.
            warn!(
                capacity = self.rx_buf.len(),
                "receive buffer full with an incomplete frame"
            );
            return Ok(false);
        }

        let n = self.stream.recv(&mut self.rx_buf[self.offset..])?;
        if n == 0 {
            return Ok(false);
        }

        let len = self.offset + n;
        let consumed = assemble_frames(&mut self.rx_buf[..len], handler)?;
        if consumed == 0 {
            // Nothing complete yet; keep accumulating.
            self.offset = len;
        } else if consumed == len {
            self.offset = 0;
        } else {
            // Whole frames consumed with a partial frame at the tail: move
            // the tail to the front and keep appending behind it.
            self.rx_buf.copy_within(consumed..len, 0);
            self.offset = len - consumed;
        }
        trace!(bytes = n, consumed, tail = self.offset, "poll processed");
        Ok(true)
    }

    /// Send `message` as a single final, masked TEXT frame.
    ///
    /// Blocks until every byte of the frame has been accepted by the
    /// transport, looping over partial writes. Returns the total wire bytes
    /// written.
    ///
    /// # Errors
    ///
    /// [`Error::BufferTooSmall`] if the framed message exceeds the transmit
    /// buffer, transport errors unchanged, and [`Error::InvalidState`] when
    /// the session is not open.
    pub fn send(&mut self, message: &str) -> Result<usize> {
        self.ensure_open("send")?;

        let frame_len = {
            let mut writer = FrameWriter::new(&mut self.tx_buf);
            writer.write(true, OpCode::Text, Some(self.mask_key), message.as_bytes())?;
            writer.frame_len()
        };

        let mut sent = 0;
        while sent < frame_len {
            sent += self.stream.send(&self.tx_buf[sent..frame_len])?;
        }
        trace!(bytes = sent, "text frame flushed");
        Ok(sent)
    }

    /// Drop the transport connection.
    ///
    /// No Close frame exchange is performed; in the normal case the server
    /// owns the closing TCP sequence.
    ///
    /// # Errors
    ///
    /// Transport errors unchanged.
    pub fn disconnect(&mut self) -> Result<()> {
        self.stream.disconnect()?;
        self.state = SessionState::Closed;
        debug!("websocket session closed");
        Ok(())
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        if !self.state.is_open() {
            return Err(Error::InvalidState {
                operation,
                state: self.state.name(),
            });
        }
        Ok(())
    }
}
