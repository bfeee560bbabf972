//! Client-side WebSocket opening handshake (RFC 6455 Section 4).
//!
//! A one-shot HTTP Upgrade exchange: send a GET with an unpredictable
//! base64 nonce, read the server's 101 response, and verify the
//! `Sec-WebSocket-Accept` digest before any frame flows.

use std::collections::HashMap;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use bytes::BytesMut;
use sha1::{Digest, Sha1};
use tracing::debug;

use crate::error::{Error, Result};
use crate::transport::Transport;

/// The WebSocket GUID used in the Sec-WebSocket-Accept calculation (RFC 6455).
pub const WS_GUID: &str = "258EAFA5-E914-47DA-95CA-C5AB0DC85B11";

/// Largest upgrade response the handshake will buffer before giving up.
const MAX_RESPONSE_LEN: usize = 8192;

/// Fill `buf` from the operating system's entropy source.
///
/// A predictable nonce defeats the handshake's cache-poisoning protection,
/// so there is no deterministic fallback: an unavailable source is a fatal
/// [`Error::RandomSource`].
pub fn random_bytes(buf: &mut [u8]) -> Result<()> {
    getrandom::getrandom(buf).map_err(|e| Error::RandomSource(e.to_string()))
}

/// Generate the Sec-WebSocket-Key value: 16 unpredictable bytes,
/// base64-encoded.
///
/// # Errors
///
/// Returns [`Error::RandomSource`] if the entropy source is unavailable.
pub fn generate_key() -> Result<String> {
    let mut nonce = [0u8; 16];
    random_bytes(&mut nonce)?;
    Ok(BASE64.encode(nonce))
}

/// Computes the Sec-WebSocket-Accept value from a Sec-WebSocket-Key.
///
/// The accept key is calculated as: Base64(SHA-1(key + GUID))
///
/// # Example
///
/// ```
/// use minws::protocol::handshake::compute_accept_key;
///
/// let key = "dGhlIHNhbXBsZSBub25jZQ==";
/// let accept = compute_accept_key(key);
/// assert_eq!(accept, "s3pPLMBiTxaQ9kYGzzhZRbK+xOo=");
/// ```
#[must_use]
pub fn compute_accept_key(key: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(key.as_bytes());
    hasher.update(WS_GUID.as_bytes());
    BASE64.encode(hasher.finalize())
}

/// Format the upgrade request block.
///
/// The field order is fixed so both permissive and strict servers see the
/// same bytes. `path` carries no leading slash; an empty path requests `/`.
#[must_use]
pub fn upgrade_request(host: &str, path: &str, key: &str) -> String {
    format!(
        "GET /{path} HTTP/1.1\r\n\
         Host: {host}\r\n\
         Upgrade: websocket\r\n\
         Connection: Upgrade\r\n\
         Sec-WebSocket-Version: 13\r\n\
         Sec-WebSocket-Key: {key}\r\n\
         \r\n"
    )
}

/// A minimal HTTP/1.1 response: status code plus headers.
///
/// Header names keep the exact case the peer sent; a repeated name keeps
/// the last value. The response only lives for the duration of the
/// handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The status code from the response line.
    pub status: u16,
    /// Headers, name-cased as received, values verbatim.
    pub headers: HashMap<String, String>,
}

impl HttpResponse {
    /// Parse a response from raw bytes up to the blank-line terminator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Handshake`] if the data is not UTF-8, the status
    /// line does not begin `HTTP/1.1 ` with a 3-digit status code, or is
    /// missing entirely.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(data)
            .map_err(|_| Error::Handshake("response is not valid UTF-8".into()))?;

        let mut lines = text.lines();

        let status_line = lines
            .next()
            .ok_or_else(|| Error::Handshake("empty response".into()))?;
        let status = status_line
            .strip_prefix("HTTP/1.1 ")
            .and_then(|rest| rest.get(..3))
            .and_then(|code| code.parse::<u16>().ok())
            .ok_or_else(|| Error::Handshake(format!("malformed status line: {status_line}")))?;

        let mut headers = HashMap::new();
        for line in lines {
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                headers.insert(name.to_string(), value.trim().to_string());
            }
        }

        Ok(Self { status, headers })
    }

    /// Look up a header by its exact name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// Run the client side of the upgrade exchange over `stream`.
///
/// Generates a fresh nonce, sends the request, blocks until the response
/// terminator arrives, and verifies the accept key. Terminal on first
/// failure; no handshake state survives a success.
///
/// # Errors
///
/// [`Error::RandomSource`] if no nonce can be generated,
/// [`Error::Handshake`] on any malformed or non-matching response, and
/// transport errors unchanged.
pub fn perform<T: Transport>(stream: &mut T, host: &str, path: &str) -> Result<()> {
    let key = generate_key()?;
    let request = upgrade_request(host, path, &key);
    send_all(stream, request.as_bytes())?;

    let response = read_response(stream)?;
    verify_accept(&key, &response)?;
    debug!(host, path, "websocket handshake verified");
    Ok(())
}

fn send_all<T: Transport>(stream: &mut T, mut bytes: &[u8]) -> Result<()> {
    while !bytes.is_empty() {
        let n = stream.send(bytes)?;
        bytes = &bytes[n..];
    }
    Ok(())
}

/// Read from the transport until the header-block terminator arrives.
///
/// The transport's `recv` is non-blocking, so this spins until bytes show
/// up; the overall `connect` is a blocking call and bounds the wait only by
/// the transport's own semantics.
fn read_response<T: Transport>(stream: &mut T) -> Result<HttpResponse> {
    let mut buf = BytesMut::with_capacity(1024);
    let mut chunk = [0u8; 1024];
    loop {
        let n = stream.recv(&mut chunk)?;
        if n == 0 {
            continue;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = find_terminator(&buf) {
            return HttpResponse::parse(&buf[..end]);
        }
        if buf.len() > MAX_RESPONSE_LEN {
            return Err(Error::Handshake(format!(
                "response exceeds {MAX_RESPONSE_LEN} bytes without terminator"
            )));
        }
    }
}

/// Offset one past the `\r\n\r\n` header terminator, if present.
fn find_terminator(buf: &[u8]) -> Option<usize> {
    buf.windows(4)
        .position(|window| window == b"\r\n\r\n")
        .map(|pos| pos + 4)
}

fn verify_accept(key: &str, response: &HttpResponse) -> Result<()> {
    if response.status != 101 {
        return Err(Error::Handshake(format!(
            "expected status 101, got {}",
            response.status
        )));
    }

    let accept = response
        .header("Sec-WebSocket-Accept")
        .ok_or_else(|| Error::Handshake("missing Sec-WebSocket-Accept header".into()))?;

    let expected = compute_accept_key(key);
    if accept != expected {
        return Err(Error::Handshake(format!(
            "Sec-WebSocket-Accept mismatch: expected {expected}, got {accept}"
        )));
    }

    Ok(())
}
