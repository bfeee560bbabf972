//! WebSocket wire protocol core (RFC 6455).

pub mod assembler;
pub mod frame;
pub mod handshake;
pub mod mask;
pub mod opcode;

pub use assembler::assemble_frames;
pub use frame::{FrameHeader, FrameView, FrameWriter, MAX_HEADER_LEN};
pub use handshake::{HttpResponse, WS_GUID, compute_accept_key, upgrade_request};
pub use mask::apply_mask;
pub use opcode::OpCode;
