//! Client session over a byte-stream transport.
//!
//! ## Session Lifecycle
//!
//! 1. **Idle** - constructed, transport not yet connected
//! 2. **Connecting / Handshaking** - `connect` in progress
//! 3. **Open** - handshake verified, frames may flow
//! 4. **Closed / Failed** - disconnected, or connect failed
//!
//! ## Example
//!
//! ```rust,ignore
//! use minws::{Client, Config};
//!
//! let mut client = Client::with_config(stream, Config::new().with_path("chat"))?;
//! client.connect("example.com", 80)?;
//! client.send("hello")?;
//! while client.poll(|opcode, payload| {
//!     println!("{opcode}: {} bytes", payload.len());
//! })? {}
//! ```

mod session;
mod state;

pub use session::Client;
pub use state::SessionState;
