//! Response framing for the WSG gripper command protocol.
//!
//! wsgwire decodes the binary response frames a WSG-class gripper sends back
//! over its serial or USB link, and names the status codes and state flags
//! those frames carry.
//!
//! # Crate Structure
//!
//! - [`frame`] — Response frame decoding, status codes and state flags
//!
//! The `cli` feature builds the `wsgwire` binary, an offline inspector for
//! captured frames.

/// Re-export frame types.
pub mod frame {
    pub use wsgwire_frame::*;
}
