//! # minws - Synchronous WebSocket Client
//!
//! `minws` is a lightweight, RFC 6455 compliant WebSocket client for
//! poll-driven event loops.
//!
//! ## Features
//!
//! - **In-place frame codec** over caller-owned buffers; payloads are only
//!   touched to apply or remove the mask
//! - **Chunk-tolerant assembly** - frame boundaries may land mid-header,
//!   mid-length-field, or mid-payload
//! - **Verified upgrade handshake** with an unpredictable nonce and a
//!   mandatory `Sec-WebSocket-Accept` check
//! - **Non-blocking poll** suitable for interleaving many sessions on one
//!   thread
//! - **Transport-agnostic** - the session drives any [`Transport`]
//!   implementation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use minws::{Client, Config};
//!
//! let mut client = Client::new(stream)?;
//! client.connect("echo.example.com", 80)?;
//! client.send("hello")?;
//! client.poll(|opcode, payload| {
//!     println!("received {opcode}: {payload:?}");
//! })?;
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod protocol;
pub mod transport;

pub use client::{Client, SessionState};
pub use config::Config;
pub use error::{Error, Result};
pub use protocol::{FrameHeader, FrameView, FrameWriter, OpCode, WS_GUID, compute_accept_key};
pub use transport::Transport;
