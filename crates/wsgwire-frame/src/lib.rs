//! Response frame decoding for the WSG gripper command protocol.
//!
//! Every device response is framed as:
//! - A 3-byte preamble (`AA AA AA`) for stream synchronization
//! - The 1-byte id of the command being answered
//! - A 2-byte little-endian payload length (status code + parameters)
//! - A 2-byte little-endian status code and the command's parameters
//! - A 2-byte little-endian CRC over everything before it
//!
//! Decoding is a pure function of one complete buffer. Reassembling frames
//! out of a byte stream is left to the transport layer.

pub mod checksum;
pub mod codec;
pub mod error;
pub mod state;
pub mod status;

pub use codec::{
    decode_response, decode_response_with, encode_response, ChecksumMode, DecodeConfig,
    ResponseMessage, FRAME_OVERHEAD, MAX_PARAMS_LEN, MIN_FRAME_SIZE, PREAMBLE,
};
pub use error::{FrameError, Recovery, Result};
pub use state::StateFlags;
pub use status::StatusCode;
